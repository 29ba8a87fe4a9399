//! Declaration modifiers and the visibility they imply.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifiers written on a declaration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const ABSTRACT = 1 << 4;
        const FINAL = 1 << 5;
        const NATIVE = 1 << 6;
        const SYNCHRONIZED = 1 << 7;
        /// Default method of an interface.
        const DEFAULT = 1 << 8;

        const VISIBILITY = Self::PUBLIC.bits() | Self::PROTECTED.bits() | Self::PRIVATE.bits();
    }
}

impl Modifiers {
    /// Effective visibility. No visibility modifier means package access.
    pub fn visibility(self) -> Visibility {
        if self.contains(Modifiers::PUBLIC) {
            Visibility::Public
        } else if self.contains(Modifiers::PROTECTED) {
            Visibility::Protected
        } else if self.contains(Modifiers::PRIVATE) {
            Visibility::Private
        } else {
            Visibility::Package
        }
    }
}

/// Access level of a declaration, from widest to narrowest.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub const ALL: [Visibility; 4] = [
        Visibility::Public,
        Visibility::Protected,
        Visibility::Package,
        Visibility::Private,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Package => "package-private",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
