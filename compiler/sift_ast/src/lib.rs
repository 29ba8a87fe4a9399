//! Callable declaration nodes for sift syntax trees.
//!
//! Method and constructor declarations share a [`NodeBase`]: a symbol slot
//! the resolution pass fills exactly once, and a lazily computed
//! [`OperationSignature`] that any number of analysis threads may request.
//!
//! ```
//! use std::sync::Arc;
//! use sift_ast::{
//!     ExecutableSymbol, MethodDeclaration, MethodSymbol, Modifiers, OperationDeclaration, Role,
//! };
//! use sift_ir::Span;
//!
//! let mut decl = MethodDeclaration::new("getName", "String", Span::new(0, 24))
//!     .with_modifiers(Modifiers::PUBLIC);
//! assert_eq!(decl.signature().role, Role::GetterOrSetter);
//!
//! decl.bind(Arc::new(MethodSymbol::new("Person", "getName", [], "String".into())))?;
//! assert_eq!(decl.symbol()?.name(), "getName");
//! # Ok::<(), sift_ast::SymbolError>(())
//! ```

mod decl;
mod error;
mod modifiers;
mod node;
mod signature;
mod symbol;

pub use decl::{
    ConstructorDeclaration, MethodDeclaration, OperationDeclaration, OperationKind, Parameter,
    Params,
};
pub use error::SymbolError;
pub use modifiers::{Modifiers, Visibility};
pub use node::{NodeBase, SymbolSlot};
pub use signature::{OperationSignature, Role, RoleSet, SignatureMask, VisibilitySet};
pub use symbol::{ConstructorSymbol, ExecutableSymbol, MethodSymbol, ParamTypes, TypeRef};
