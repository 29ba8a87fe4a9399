//! Operation signatures: the callable shape metrics group declarations by.
//!
//! A signature is derived from the declaration node alone (name, modifiers,
//! parameters, return type) and never from the resolved symbol, so it is
//! available before resolution runs.

use std::fmt;

use bitflags::bitflags;
use tracing::trace;

use crate::decl::{OperationDeclaration, OperationKind};
use crate::{Modifiers, TypeRef, Visibility};

/// What an operation does, judged from its declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Trivial accessor: `getX()`, `isX()`, `setX(v)`.
    GetterOrSetter,
    Constructor,
    Method,
    Static,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::GetterOrSetter,
        Role::Constructor,
        Role::Method,
        Role::Static,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::GetterOrSetter => "getter or setter",
            Role::Constructor => "constructor",
            Role::Method => "method",
            Role::Static => "static method",
        }
    }

    /// Role of `decl`.
    ///
    /// Constructors win over everything, then `static`, then the accessor
    /// naming convention.
    pub fn of<D: OperationDeclaration + ?Sized>(decl: &D) -> Role {
        if decl.kind() == OperationKind::Constructor {
            Role::Constructor
        } else if decl.modifiers().contains(Modifiers::STATIC) {
            Role::Static
        } else if is_getter_or_setter(decl) {
            Role::GetterOrSetter
        } else {
            Role::Method
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_getter_or_setter<D: OperationDeclaration + ?Sized>(decl: &D) -> bool {
    let name = decl.name();
    let returns_value = decl.return_type().is_some_and(|ty| !ty.is_void());

    match decl.params().len() {
        0 if returns_value => {
            has_accessor_prefix(name, "get")
                || (has_accessor_prefix(name, "is")
                    && decl.return_type().is_some_and(TypeRef::is_boolean))
        }
        1 if !returns_value => has_accessor_prefix(name, "set"),
        _ => false,
    }
}

/// `getFoo` and `get_foo` match `get`; `getter` and bare `get` don't.
fn has_accessor_prefix(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_uppercase() || c == '_')
}

/// Callable shape of an operation declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationSignature {
    pub role: Role,
    pub visibility: Visibility,
    pub is_abstract: bool,
}

impl OperationSignature {
    /// Derive the signature of `decl` from its structure.
    pub fn build_for<D: OperationDeclaration + ?Sized>(decl: &D) -> Self {
        let modifiers = decl.modifiers();
        let signature = OperationSignature {
            role: Role::of(decl),
            visibility: modifiers.visibility(),
            is_abstract: modifiers.contains(Modifiers::ABSTRACT),
        };
        trace!(name = decl.name(), %signature, "computed operation signature");
        signature
    }
}

impl fmt::Display for OperationSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.visibility)?;
        if self.is_abstract {
            f.write_str("abstract ")?;
        }
        f.write_str(self.role.as_str())
    }
}

bitflags! {
    /// Set of roles, for [`SignatureMask`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct RoleSet: u8 {
        const GETTER_OR_SETTER = 1 << 0;
        const CONSTRUCTOR = 1 << 1;
        const METHOD = 1 << 2;
        const STATIC = 1 << 3;
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        match role {
            Role::GetterOrSetter => RoleSet::GETTER_OR_SETTER,
            Role::Constructor => RoleSet::CONSTRUCTOR,
            Role::Method => RoleSet::METHOD,
            Role::Static => RoleSet::STATIC,
        }
    }
}

bitflags! {
    /// Set of visibilities, for [`SignatureMask`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct VisibilitySet: u8 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PACKAGE = 1 << 2;
        const PRIVATE = 1 << 3;
    }
}

impl From<Visibility> for VisibilitySet {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => VisibilitySet::PUBLIC,
            Visibility::Protected => VisibilitySet::PROTECTED,
            Visibility::Package => VisibilitySet::PACKAGE,
            Visibility::Private => VisibilitySet::PRIVATE,
        }
    }
}

/// Filter over signatures, used to restrict a metric to some operations.
///
/// The default mask covers everything, abstract operations included.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SignatureMask {
    pub roles: RoleSet,
    pub visibilities: VisibilitySet,
    pub cover_abstract: bool,
}

impl Default for SignatureMask {
    fn default() -> Self {
        SignatureMask {
            roles: RoleSet::all(),
            visibilities: VisibilitySet::all(),
            cover_abstract: true,
        }
    }
}

impl SignatureMask {
    #[must_use]
    pub fn with_roles(mut self, roles: RoleSet) -> Self {
        self.roles = roles;
        self
    }

    #[must_use]
    pub fn with_visibilities(mut self, visibilities: VisibilitySet) -> Self {
        self.visibilities = visibilities;
        self
    }

    #[must_use]
    pub fn without_abstract(mut self) -> Self {
        self.cover_abstract = false;
        self
    }

    pub fn covers(&self, signature: &OperationSignature) -> bool {
        self.roles.contains(signature.role.into())
            && self.visibilities.contains(signature.visibility.into())
            && (self.cover_abstract || !signature.is_abstract)
    }
}

#[cfg(test)]
mod tests;
