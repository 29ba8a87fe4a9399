//! Callable symbols a declaration node can be bound to.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Reference to a type by name, as written in a declaration.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef(Cow<'static, str>);

impl TypeRef {
    pub const VOID: TypeRef = TypeRef(Cow::Borrowed("void"));
    pub const BOOLEAN: TypeRef = TypeRef(Cow::Borrowed("boolean"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        TypeRef(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_void(&self) -> bool {
        self.0 == "void"
    }

    /// Primitive `boolean` or its box.
    pub fn is_boolean(&self) -> bool {
        matches!(&*self.0, "boolean" | "Boolean" | "java.lang.Boolean")
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeRef {
    fn from(name: &'static str) -> Self {
        TypeRef::new(name)
    }
}

/// Parameter type list; most callables take a handful.
pub type ParamTypes = SmallVec<[TypeRef; 4]>;

/// A resolved callable: method or constructor.
///
/// Nodes hold symbols behind `Arc` since the symbol table owns them and
/// several nodes (overrides, call sites) may point at the same one.
pub trait ExecutableSymbol: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Name of the type declaring this callable.
    fn declaring_type(&self) -> &str;

    fn param_types(&self) -> &[TypeRef];

    fn arity(&self) -> usize {
        self.param_types().len()
    }

    fn is_constructor(&self) -> bool {
        false
    }

    fn is_varargs(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSymbol {
    name: String,
    declaring_type: String,
    param_types: ParamTypes,
    return_type: TypeRef,
    varargs: bool,
}

impl MethodSymbol {
    pub fn new(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        param_types: impl IntoIterator<Item = TypeRef>,
        return_type: TypeRef,
    ) -> Self {
        MethodSymbol {
            name: name.into(),
            declaring_type: declaring_type.into(),
            param_types: param_types.into_iter().collect(),
            return_type,
            varargs: false,
        }
    }

    #[must_use]
    pub fn with_varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }
}

impl ExecutableSymbol for MethodSymbol {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    fn param_types(&self) -> &[TypeRef] {
        &self.param_types
    }

    fn is_varargs(&self) -> bool {
        self.varargs
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructorSymbol {
    declaring_type: String,
    param_types: ParamTypes,
    varargs: bool,
}

impl ConstructorSymbol {
    /// Name every constructor symbol reports.
    pub const NAME: &'static str = "new";

    pub fn new(
        declaring_type: impl Into<String>,
        param_types: impl IntoIterator<Item = TypeRef>,
    ) -> Self {
        ConstructorSymbol {
            declaring_type: declaring_type.into(),
            param_types: param_types.into_iter().collect(),
            varargs: false,
        }
    }

    #[must_use]
    pub fn with_varargs(mut self) -> Self {
        self.varargs = true;
        self
    }
}

impl ExecutableSymbol for ConstructorSymbol {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    fn param_types(&self) -> &[TypeRef] {
        &self.param_types
    }

    fn is_constructor(&self) -> bool {
        true
    }

    fn is_varargs(&self) -> bool {
        self.varargs
    }
}
