use replica_core::{deep_clone, Reflect};

#[derive(Default, Reflect)]
struct Labelled<T> {
    label: String,
    value: T,
}

fn main() {
    let original = Labelled {
        label: "answer".to_string(),
        value: 42_u64,
    };

    let copy = deep_clone(&original);
    assert_eq!(copy.label, "answer");
    assert_eq!(copy.value, 42);
}
