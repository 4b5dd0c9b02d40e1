use super::*;

#[test]
fn lookup_misses_before_register() {
    let table = Visited::new();
    let original = Handle::new(vec![1_u8]);
    assert!(table.lookup(&original).is_none());
    assert!(table.is_empty());
}

#[test]
fn register_then_lookup_returns_the_same_clone() {
    let mut table = Visited::new();
    let original = Handle::new(vec![1_u8]);
    let clone: Handle<Vec<u8>> = Handle::new(Vec::new());
    table.register(&original, &clone);

    let found = table.lookup(&original).expect("clone was registered");
    assert!(Handle::ptr_eq(&found, &clone));
    assert_eq!(table.len(), 1);
}

#[test]
fn distinct_allocations_do_not_collide() {
    let mut table = Visited::new();
    let first = Handle::new(vec![1_u8]);
    let second = Handle::new(vec![1_u8]);
    table.register(&first, &Handle::new(Vec::new()));
    assert!(table.lookup(&second).is_none());
}

#[test]
fn reregistering_overwrites_the_slot() {
    let mut table = Visited::new();
    let original = Handle::new(vec![1_u8]);
    let first: Handle<Vec<u8>> = Handle::new(Vec::new());
    let second: Handle<Vec<u8>> = Handle::new(Vec::new());
    table.register(&original, &first);
    table.register(&original, &second);

    let found = table.lookup(&original).expect("clone was registered");
    assert!(Handle::ptr_eq(&found, &second));
    assert_eq!(table.len(), 1);
}
