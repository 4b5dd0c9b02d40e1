use replica_core::{deep_clone, Reflect};

#[derive(Default, Reflect)]
struct Inventory {
    label: String,
    counts: Vec<u32>,
}

fn main() {
    let mut original = Inventory::default();
    original.label = "bins".to_string();
    original.counts.push(3);

    let copy = deep_clone(&original);
    assert_eq!(copy.label, "bins");
    assert_eq!(copy.counts, vec![3]);
}
