use super::*;
use crate::{ConstructorDeclaration, MethodDeclaration, Parameter};
use pretty_assertions::assert_eq;
use sift_ir::Span;

fn method(name: &str, ret: &'static str) -> MethodDeclaration {
    MethodDeclaration::new(name, ret, Span::DUMMY)
}

#[test]
fn test_constructor_role() {
    let ctor = ConstructorDeclaration::new("Person", Span::DUMMY)
        .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC);
    assert_eq!(Role::of(&ctor), Role::Constructor);
}

#[test]
fn test_static_wins_over_accessor_names() {
    let decl = method("getInstance", "Person").with_modifiers(Modifiers::STATIC);
    assert_eq!(Role::of(&decl), Role::Static);
}

#[test]
fn test_getters() {
    assert_eq!(Role::of(&method("getName", "String")), Role::GetterOrSetter);
    assert_eq!(Role::of(&method("get_name", "String")), Role::GetterOrSetter);
    assert_eq!(Role::of(&method("isEmpty", "boolean")), Role::GetterOrSetter);
    assert_eq!(Role::of(&method("isEmpty", "Boolean")), Role::GetterOrSetter);
}

#[test]
fn test_not_getters() {
    // Wrong shape
    assert_eq!(Role::of(&method("getName", "void")), Role::Method);
    assert_eq!(Role::of(&method("isEmpty", "int")), Role::Method);
    let with_arg = method("getItem", "Item").with_param(Parameter::new("index", "int"));
    assert_eq!(Role::of(&with_arg), Role::Method);

    // Wrong name
    assert_eq!(Role::of(&method("get", "String")), Role::Method);
    assert_eq!(Role::of(&method("getter", "String")), Role::Method);
    assert_eq!(Role::of(&method("island", "boolean")), Role::Method);
}

#[test]
fn test_setters() {
    let setter = method("setName", "void").with_param(Parameter::new("name", "String"));
    assert_eq!(Role::of(&setter), Role::GetterOrSetter);

    let fluent = method("setName", "Person").with_param(Parameter::new("name", "String"));
    assert_eq!(Role::of(&fluent), Role::Method);

    let bare = method("setName", "void");
    assert_eq!(Role::of(&bare), Role::Method);
}

#[test]
fn test_build_for() {
    let decl = method("compute", "int").with_modifiers(Modifiers::PROTECTED | Modifiers::ABSTRACT);
    assert_eq!(
        OperationSignature::build_for(&decl),
        OperationSignature {
            role: Role::Method,
            visibility: Visibility::Protected,
            is_abstract: true,
        }
    );
}

#[test]
fn test_display() {
    let sig = OperationSignature {
        role: Role::Static,
        visibility: Visibility::Public,
        is_abstract: false,
    };
    assert_eq!(sig.to_string(), "public static method");

    let sig = OperationSignature {
        role: Role::Method,
        visibility: Visibility::Package,
        is_abstract: true,
    };
    assert_eq!(sig.to_string(), "package-private abstract method");
}

#[test]
fn test_default_mask_covers_everything() {
    let mask = SignatureMask::default();
    for role in Role::ALL {
        for visibility in Visibility::ALL {
            for is_abstract in [false, true] {
                let sig = OperationSignature {
                    role,
                    visibility,
                    is_abstract,
                };
                assert!(mask.covers(&sig), "{sig}");
            }
        }
    }
}

#[test]
fn test_restricted_mask() {
    let mask = SignatureMask::default()
        .with_roles(RoleSet::METHOD | RoleSet::STATIC)
        .with_visibilities(VisibilitySet::PUBLIC)
        .without_abstract();

    let public_method = OperationSignature {
        role: Role::Method,
        visibility: Visibility::Public,
        is_abstract: false,
    };
    assert!(mask.covers(&public_method));
    assert!(!mask.covers(&OperationSignature {
        is_abstract: true,
        ..public_method
    }));
    assert!(!mask.covers(&OperationSignature {
        visibility: Visibility::Private,
        ..public_method
    }));
    assert!(!mask.covers(&OperationSignature {
        role: Role::GetterOrSetter,
        ..public_method
    }));
}
