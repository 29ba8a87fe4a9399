//! Method and constructor declaration nodes.

use std::sync::Arc;

use sift_ir::Span;
use smallvec::SmallVec;

use crate::{
    ConstructorSymbol, ExecutableSymbol, MethodSymbol, Modifiers, NodeBase, OperationSignature,
    SymbolError, TypeRef,
};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperationKind {
    Method,
    Constructor,
}

/// Formal parameter of a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Parameter {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

pub type Params = SmallVec<[Parameter; 4]>;

/// A declaration of a callable: the node kinds that embed a [`NodeBase`].
///
/// Implementors expose their base and structure; signature and symbol
/// access come for free.
pub trait OperationDeclaration {
    type Symbol: ExecutableSymbol;

    fn base(&self) -> &NodeBase<Self::Symbol>;

    fn base_mut(&mut self) -> &mut NodeBase<Self::Symbol>;

    fn kind(&self) -> OperationKind;

    fn name(&self) -> &str;

    fn modifiers(&self) -> Modifiers;

    fn params(&self) -> &[Parameter];

    /// Declared return type; `None` for constructors.
    fn return_type(&self) -> Option<&TypeRef>;

    fn span(&self) -> Span;

    fn arity(&self) -> usize {
        self.params().len()
    }

    /// Signature of this declaration, computed on first call.
    fn signature(&self) -> &OperationSignature {
        self.base()
            .signature_or_init(|| OperationSignature::build_for(self))
    }

    /// Symbol bound by resolution.
    ///
    /// # Errors
    ///
    /// [`SymbolError::NotSet`] before resolution bound one.
    fn symbol(&self) -> Result<&Arc<Self::Symbol>, SymbolError> {
        self.base().symbol()
    }

    /// Bind the resolved symbol. Called once by resolution.
    ///
    /// # Errors
    ///
    /// [`SymbolError::AlreadySet`] if this node is already bound.
    fn bind(&mut self, symbol: Arc<Self::Symbol>) -> Result<(), SymbolError> {
        self.base_mut().set_symbol(symbol)
    }
}

#[derive(Debug)]
pub struct MethodDeclaration {
    base: NodeBase<MethodSymbol>,
    name: String,
    modifiers: Modifiers,
    params: Params,
    return_type: TypeRef,
    span: Span,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>, return_type: impl Into<TypeRef>, span: Span) -> Self {
        MethodDeclaration {
            base: NodeBase::new(),
            name: name.into(),
            modifiers: Modifiers::empty(),
            params: SmallVec::new(),
            return_type: return_type.into(),
            span,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(Modifiers::ABSTRACT)
    }
}

impl OperationDeclaration for MethodDeclaration {
    type Symbol = MethodSymbol;

    fn base(&self) -> &NodeBase<MethodSymbol> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase<MethodSymbol> {
        &mut self.base
    }

    fn kind(&self) -> OperationKind {
        OperationKind::Method
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn params(&self) -> &[Parameter] {
        &self.params
    }

    fn return_type(&self) -> Option<&TypeRef> {
        Some(&self.return_type)
    }

    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug)]
pub struct ConstructorDeclaration {
    base: NodeBase<ConstructorSymbol>,
    /// Name of the enclosing type.
    name: String,
    modifiers: Modifiers,
    params: Params,
    span: Span,
}

impl ConstructorDeclaration {
    pub fn new(type_name: impl Into<String>, span: Span) -> Self {
        ConstructorDeclaration {
            base: NodeBase::new(),
            name: type_name.into(),
            modifiers: Modifiers::empty(),
            params: SmallVec::new(),
            span,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }
}

impl OperationDeclaration for ConstructorDeclaration {
    type Symbol = ConstructorSymbol;

    fn base(&self) -> &NodeBase<ConstructorSymbol> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase<ConstructorSymbol> {
        &mut self.base
    }

    fn kind(&self) -> OperationKind {
        OperationKind::Constructor
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn params(&self) -> &[Parameter] {
        &self.params
    }

    fn return_type(&self) -> Option<&TypeRef> {
        None
    }

    fn span(&self) -> Span {
        self.span
    }
}
