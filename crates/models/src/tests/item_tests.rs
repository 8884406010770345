use crate::{errors::ModelError, ActivityLog, ItemName};

#[test]
fn blank_names_are_rejected() {
    assert!(matches!(ItemName::parse(""), Err(ModelError::Validation(_))));
    assert!(matches!(ItemName::parse(" \t"), Err(ModelError::Validation(_))));
    assert!(ItemName::try_from("apple").is_ok());
}

#[test]
fn names_are_kept_verbatim() {
    let n = ItemName::parse(" Green Apple ").expect("valid");
    assert_eq!(n.as_str(), " Green Apple ");
    assert_eq!(n.to_string(), " Green Apple ");
}

#[test]
fn activity_log_appends_in_order() {
    let mut log = ActivityLog::new();
    assert!(log.is_empty());

    let apple = ItemName::parse("apple").expect("valid");
    let banana = ItemName::parse("banana").expect("valid");
    log.record_added(&apple, 10);
    log.record_added(&banana, 5);

    assert_eq!(log.len(), 2);
    assert_eq!(log.entries()[0].message, "Added 10 of apple");
    assert_eq!(log.entries()[1].message, "Added 5 of banana");
    assert!(log.entries()[0].at <= log.entries()[1].at);

    let line = log.entries()[1].to_string();
    assert!(line.ends_with(": Added 5 of banana"), "{line}");
}

#[test]
fn recorded_entry_matches_stored_entry() {
    let mut log = ActivityLog::new();
    let kiwi = ItemName::parse("kiwi").expect("valid");

    let first = log.record_added(&kiwi, 1);
    let second = log.record_added(&kiwi, 2);

    assert_eq!(log.entries(), &[first, second.clone()]);
    assert_eq!(second.message, "Added 2 of kiwi");
}
