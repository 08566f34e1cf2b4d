use bt_core::{Blackboard, BlackboardError, TypedValue, ValueError};

#[test]
fn missing_key_is_an_error() {
    let bb = Blackboard::new();

    assert_eq!(
        bb.get("any_string").unwrap_err(),
        BlackboardError::KeyNotFound("any_string".to_string())
    );
}

#[test]
fn blackboard_set_and_get() {
    let text = TypedValue::new(String::from("Hello!"));
    let count = TypedValue::new(10u32);
    let ratio = TypedValue::new(10.0f64);

    let mut bb = Blackboard::new();
    bb.set_value("any_string", text.clone());
    bb.set_value("any_u32", count.clone());
    bb.set_value("any_f64", ratio.clone());

    assert_eq!(
        bb.get("any_string").unwrap().get::<String>(),
        text.get::<String>()
    );
    assert_eq!(bb.get("any_u32").unwrap().get::<u32>(), count.get::<u32>());
    assert_eq!(bb.get("any_f64").unwrap().get::<f64>(), ratio.get::<f64>());
    assert_eq!(bb.len(), 3);
}

#[test]
fn set_overwrites_previous_entry() {
    let mut bb = Blackboard::new();
    bb.set("goal", 1u32);
    bb.set("goal", String::from("dock"));

    assert_eq!(bb.get_as::<String>("goal").unwrap(), "dock");
    assert_eq!(bb.len(), 1);
}

#[test]
fn stored_copy_is_independent_of_caller() {
    let mut waypoints = vec![1, 2, 3];

    let mut bb = Blackboard::new();
    bb.set("waypoints", waypoints.clone());
    waypoints.push(4);

    assert_eq!(bb.get_as::<Vec<i32>>("waypoints").unwrap(), vec![1, 2, 3]);
}

#[test]
fn typed_read_reports_key_on_mismatch() {
    let mut bb = Blackboard::new();
    bb.set("speed", 1.5f32);

    let err = bb.get_as::<f64>("speed").unwrap_err();
    assert!(matches!(
        err,
        BlackboardError::Value {
            ref key,
            source: ValueError::TypeMismatch { .. },
        } if key == "speed"
    ));
}

#[test]
fn remove_and_clear() {
    let mut bb = Blackboard::new();
    bb.set("a", 1u8);
    bb.set("b", 2u8);

    assert!(bb.remove("a").is_some());
    assert!(!bb.contains("a"));
    assert_eq!(bb.keys().collect::<Vec<_>>(), vec!["b"]);

    bb.clear();
    assert!(bb.is_empty());
}
