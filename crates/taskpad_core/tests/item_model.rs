use serde_json::json;
use taskpad_core::TaskItem;

#[test]
fn item_serializes_with_stored_field_names() {
    let item = TaskItem::new(1, "Buy milk");

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
        value,
        json!({"id": 1, "title": "Buy milk", "isDone": false})
    );
}

#[test]
fn absent_title_is_omitted_from_stored_form() {
    let item = TaskItem {
        id: 4,
        title: None,
        is_done: true,
    };

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value, json!({"id": 4, "isDone": true}));
}

#[test]
fn legacy_payload_without_title_parses() {
    let item: TaskItem = serde_json::from_str(r#"{"id":9,"isDone":true}"#).unwrap();

    assert_eq!(item.id, 9);
    assert_eq!(item.title, None);
    assert!(item.is_done);
}

#[test]
fn collection_roundtrip_preserves_insertion_order() {
    let items = vec![
        TaskItem::new(1, "first"),
        TaskItem::new(2, "second"),
        TaskItem::new(3, "third"),
    ];

    let raw = serde_json::to_string(&items).unwrap();
    let parsed: Vec<TaskItem> = serde_json::from_str(&raw).unwrap();

    assert_eq!(parsed, items);
}

#[test]
fn toggle_flips_only_the_completion_flag() {
    let mut item = TaskItem::new(5, "stable");
    let before = item.clone();

    item.toggle();
    assert!(item.is_done);
    assert_eq!(item.id, before.id);
    assert_eq!(item.title, before.title);

    item.toggle();
    assert_eq!(item, before);
}
