use replica_core::{deep_clone, Handle, Reflect};

#[derive(Default, Reflect)]
struct Audited {
    value: i64,
    #[reflect(shallow)]
    log: Handle<Vec<String>>,
}

fn main() {
    let original = Audited::default();
    let copy = deep_clone(&original);
    assert_eq!(copy.value, 0);
    assert!(Handle::ptr_eq(&original.log, &copy.log));
}
