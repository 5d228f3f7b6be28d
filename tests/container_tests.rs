use kdl_tree::{Arguments, Properties, Value};

#[test]
fn test_arguments_start_empty() {
    let args = Arguments::new();
    assert_eq!(args.len(), 0);
    assert!(args.is_empty());
    assert_eq!(args.get(0), None);
}

#[test]
fn test_arguments_push_and_get() {
    let mut args = Arguments::new();
    args.push(Value::from(42));
    args.push(Value::from("hello"));

    assert_eq!(args.len(), 2);
    assert_eq!(args.get(0).and_then(|v| v.as_i64()), Some(42));
    assert_eq!(args.get(1).and_then(|v| v.as_str()), Some("hello"));
    assert_eq!(args.get(2), None);
}

#[test]
fn test_arguments_set_past_end_grows_with_nulls() {
    let mut args = Arguments::new();
    args.push(Value::from(1));

    args.set(4, Value::from("fifth"));

    assert_eq!(args.len(), 5);
    for index in 1..4 {
        assert_eq!(args.get(index), Some(&Value::Null));
    }
    assert_eq!(args.get(4).and_then(|v| v.as_str()), Some("fifth"));
}

#[test]
fn test_arguments_set_at_len_appends() {
    let mut args = Arguments::new();
    args.set(0, Value::from(1));
    assert_eq!(args.len(), 1);
    assert_eq!(args.get(0).and_then(|v| v.as_i64()), Some(1));
}

#[test]
fn test_arguments_remove_shifts_and_shrinks() {
    let mut args = Arguments::from(vec![
        Value::from(10),
        Value::from(20),
        Value::from(30),
    ]);

    assert_eq!(args.remove(0), Some(Value::from(10)));
    assert_eq!(args.len(), 2);
    assert_eq!(args.get(0).and_then(|v| v.as_i64()), Some(20));
    assert_eq!(args.get(1).and_then(|v| v.as_i64()), Some(30));
}

#[test]
fn test_arguments_remove_missing_index_changes_nothing() {
    let mut args = Arguments::from(vec![Value::from(10)]);

    assert_eq!(args.remove(3), None);
    assert_eq!(args.len(), 1);
}

#[test]
fn test_arguments_collect_from_iterator() {
    let args: Arguments = (1..=3).map(Value::from).collect();
    let back: Vec<Value> = args.into_iter().collect();
    assert_eq!(back, vec![Value::from(1), Value::from(2), Value::from(3)]);
}

#[test]
fn test_properties_start_empty() {
    let props = Properties::new();
    assert_eq!(props.len(), 0);
    assert!(props.is_empty());
    assert!(!props.contains_key("anything"));
    assert_eq!(props.get("anything"), None);
}

#[test]
fn test_properties_insert_then_overwrite() {
    let mut props = Properties::new();
    props.insert("retries".to_string(), Value::from(3));
    props.insert("retries".to_string(), Value::from(5));

    assert_eq!(props.len(), 1);
    assert_eq!(props.get("retries").and_then(|v| v.as_i64()), Some(5));
}

#[test]
fn test_properties_remove_reports_prior_presence() {
    let mut props = Properties::new();
    props.insert("key".to_string(), Value::from("v"));

    assert!(props.contains_key("key"));
    assert_eq!(props.remove("key"), Some(Value::from("v")));
    assert!(!props.contains_key("key"));
    assert_eq!(props.remove("key"), None);
}

#[test]
fn test_properties_hold_every_value_kind() {
    let mut props = Properties::new();
    props.insert("n".to_string(), Value::Null);
    props.insert("b".to_string(), Value::from(true));
    props.insert("i".to_string(), Value::from(-5));
    props.insert("f".to_string(), Value::from(0.5));
    props.insert("s".to_string(), Value::from("text"));

    assert_eq!(props.len(), 5);
    assert!(props.get("n").unwrap().is_null());
    assert_eq!(props.get("b").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(props.get("i").and_then(|v| v.as_i64()), Some(-5));
    assert_eq!(props.get("f").and_then(|v| v.as_f64()), Some(0.5));
    assert_eq!(props.get("s").and_then(|v| v.as_str()), Some("text"));
}

#[test]
fn test_properties_collect_from_iterator() {
    let props: Properties = vec![
        ("a".to_string(), Value::from(1)),
        ("b".to_string(), Value::from(2)),
    ]
    .into_iter()
    .collect();

    assert_eq!(props.len(), 2);
    assert_eq!(props.get("b").and_then(|v| v.as_i64()), Some(2));
}
