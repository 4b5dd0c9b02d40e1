use super::*;

#[test]
fn scalar_predicate() {
    assert!(TypeKind::Scalar.is_scalar());
    assert!(!TypeKind::Sequence.is_scalar());
    assert!(!TypeKind::Value.is_scalar());
    assert!(!TypeKind::Reference.is_scalar());
}

#[test]
fn only_references_have_identity() {
    assert!(TypeKind::Reference.has_identity());
    assert!(!TypeKind::Scalar.has_identity());
    assert!(!TypeKind::Sequence.has_identity());
    assert!(!TypeKind::Value.has_identity());
}

#[test]
fn display_labels() {
    assert_eq!(TypeKind::Scalar.to_string(), "scalar");
    assert_eq!(TypeKind::Sequence.to_string(), "sequence");
    assert_eq!(TypeKind::Value.to_string(), "value");
    assert_eq!(TypeKind::Reference.to_string(), "reference");
}
