use super::*;
use crate::deep_clone;
use pretty_assertions::assert_eq;

#[test]
fn clone_shares_the_allocation() {
    let first = Handle::new(vec![1_i32]);
    let second = first.clone();
    assert!(Handle::ptr_eq(&first, &second));
    second.borrow_mut().push(2);
    assert_eq!(*first.borrow(), vec![1, 2]);
}

#[test]
fn default_allocates_a_fresh_node() {
    let a: Handle<Vec<u8>> = Handle::default();
    let b: Handle<Vec<u8>> = Handle::default();
    assert!(!Handle::ptr_eq(&a, &b));
}

#[test]
fn deep_clone_creates_an_independent_node() {
    let original = Handle::new(vec![String::from("x")]);
    let copy = deep_clone(&original);
    assert!(!Handle::ptr_eq(&original, &copy));
    copy.borrow_mut().push("y".to_string());
    assert_eq!(original.borrow().len(), 1);
    assert_eq!(copy.borrow().len(), 2);
}

#[test]
fn sharing_inside_one_call_is_preserved() {
    let shared = Handle::new(vec![7_i32]);
    let pair = (shared.clone(), shared.clone());
    let copy = deep_clone(&pair);
    assert!(Handle::ptr_eq(&copy.0, &copy.1));
    assert!(!Handle::ptr_eq(&copy.0, &shared));
    assert_eq!(*copy.0.borrow(), vec![7]);
}

#[test]
fn separate_calls_do_not_share_identity_state() {
    let shared = Handle::new(vec![7_i32]);
    let first = deep_clone(&shared);
    let second = deep_clone(&shared);
    assert!(!Handle::ptr_eq(&first, &second));
}

#[test]
fn weak_upgrade_round_trip() {
    let strong = Handle::new(vec![1_u8]);
    let weak = strong.downgrade();
    assert!(weak.upgrade().is_some());
    drop(strong);
    assert!(weak.upgrade().is_none());
}

#[test]
fn dangling_weak_clones_to_dangling() {
    let weak: WeakHandle<Vec<u8>> = WeakHandle::new();
    let copy = deep_clone(&weak);
    assert!(copy.upgrade().is_none());
}

#[test]
fn debug_prints_the_address_only() {
    let node = Handle::new(vec![1_u8]);
    let printed = format!("{node:?}");
    assert!(printed.starts_with("Handle("));
}
