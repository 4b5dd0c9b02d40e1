//! The shallow opt-out marker.

use pretty_assertions::assert_eq;
use replica_core::{deep_clone, Handle, Reflect};

#[derive(Default, Reflect)]
struct Tracked {
    value: i64,
    #[reflect(shallow)]
    audit: Handle<Vec<String>>,
}

#[test]
fn marked_member_is_shared_not_copied() {
    let source = Tracked {
        value: 4,
        audit: Handle::new(vec!["created".to_string()]),
    };

    let copy = deep_clone(&source);

    assert_eq!(copy.value, 4);
    assert!(Handle::ptr_eq(&source.audit, &copy.audit));

    // Shared means shared: writes through the clone land in the original.
    copy.audit.borrow_mut().push("cloned".to_string());
    assert_eq!(source.audit.borrow().len(), 2);
}

#[test]
fn two_clones_of_sharing_instances_still_share_the_original_list() {
    let log = Handle::new(vec!["shared".to_string()]);
    let first = Tracked {
        value: 1,
        audit: log.clone(),
    };
    let second = Tracked {
        value: 2,
        audit: log.clone(),
    };

    let first_copy = deep_clone(&first);
    let second_copy = deep_clone(&second);

    assert!(Handle::ptr_eq(&first_copy.audit, &log));
    assert!(Handle::ptr_eq(&second_copy.audit, &log));
}

#[derive(Default, Reflect)]
struct Deeply {
    audit: Handle<Vec<String>>,
}

#[test]
fn unmarked_member_is_deep_cloned() {
    let source = Deeply {
        audit: Handle::new(vec!["x".to_string()]),
    };

    let copy = deep_clone(&source);

    assert!(!Handle::ptr_eq(&source.audit, &copy.audit));
    assert_eq!(*copy.audit.borrow(), vec!["x".to_string()]);
}
