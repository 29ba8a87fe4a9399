use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use super::*;
use crate::{MethodSymbol, Role, TypeRef, Visibility};
use pretty_assertions::assert_eq;

fn getter() -> Arc<MethodSymbol> {
    Arc::new(MethodSymbol::new("Person", "getName", [], TypeRef::from("String")))
}

const PUBLIC_METHOD: OperationSignature = OperationSignature {
    role: Role::Method,
    visibility: Visibility::Public,
    is_abstract: false,
};

#[test]
fn test_fresh_node_is_unbound() {
    let base = NodeBase::<MethodSymbol>::new();
    assert!(!base.is_bound());
    assert!(!base.has_signature());
    assert_eq!(base.symbol().unwrap_err(), SymbolError::NotSet);
    assert_eq!(base.symbol_slot(), &SymbolSlot::Unbound);
}

#[test]
fn test_set_then_get_symbol() {
    let mut base = NodeBase::new();
    let symbol = getter();
    base.set_symbol(Arc::clone(&symbol)).unwrap();

    assert!(base.is_bound());
    assert!(Arc::ptr_eq(base.symbol().unwrap(), &symbol));
}

#[test]
fn test_second_set_keeps_first_symbol() {
    let mut base = NodeBase::new();
    let first = getter();
    let second = Arc::new(MethodSymbol::new("Person", "setName", [], TypeRef::VOID));

    base.set_symbol(Arc::clone(&first)).unwrap();
    assert_eq!(base.set_symbol(second), Err(SymbolError::AlreadySet));
    assert!(Arc::ptr_eq(base.symbol().unwrap(), &first));
}

#[test]
fn test_same_symbol_twice_is_still_rejected() {
    let mut base = NodeBase::new();
    let symbol = getter();
    base.set_symbol(Arc::clone(&symbol)).unwrap();
    assert_eq!(base.set_symbol(symbol), Err(SymbolError::AlreadySet));
}

#[test]
fn test_signature_computed_once() {
    let base = NodeBase::<MethodSymbol>::new();
    let calls = Cell::new(0);
    let build = || {
        calls.set(calls.get() + 1);
        PUBLIC_METHOD
    };

    assert_eq!(*base.signature_or_init(build), PUBLIC_METHOD);
    assert_eq!(*base.signature_or_init(build), PUBLIC_METHOD);
    assert_eq!(calls.get(), 1);
    assert_eq!(base.cached_signature(), Some(&PUBLIC_METHOD));
}

#[test]
fn test_signature_does_not_need_symbol() {
    let mut base = NodeBase::new();
    assert_eq!(*base.signature_or_init(|| PUBLIC_METHOD), PUBLIC_METHOD);
    assert!(!base.is_bound());

    base.set_symbol(getter()).unwrap();
    assert_eq!(base.cached_signature(), Some(&PUBLIC_METHOD));
}

#[test]
fn test_concurrent_signature_requests_share_one_computation() {
    let base = NodeBase::<MethodSymbol>::new();
    let calls = AtomicUsize::new(0);

    let seen: Vec<OperationSignature> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    *base.signature_or_init(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        PUBLIC_METHOD
                    })
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(seen.iter().all(|sig| *sig == PUBLIC_METHOD));
}

#[test]
fn test_debug_output() {
    let mut base = NodeBase::new();
    base.set_symbol(getter()).unwrap();
    let debug = format!("{base:?}");
    assert!(debug.starts_with("NodeBase { symbol: Bound("));
    assert!(debug.ends_with("signature: None }"));
}
