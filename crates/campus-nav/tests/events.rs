use campus_nav::events::{Event, EventsManager};

fn event(title: &str) -> Event {
    Event::new(title, "2024-01-20", "14:00", "Lab 3", "")
}

fn titles(manager: &EventsManager) -> Vec<String> {
    manager.all_events().into_iter().map(|e| e.title).collect()
}

fn make_manager(names: &[&str]) -> EventsManager {
    let mut manager = EventsManager::new(50);
    for name in names {
        manager.add_event(event(name));
    }
    manager
}

#[test]
fn test_undo_add_removes_event() {
    let mut manager = make_manager(&["Viva"]);
    assert!(manager.can_undo());
    assert!(manager.undo());
    assert_eq!(manager.event_count(), 0);
    assert!(manager.can_redo());

    assert!(manager.redo());
    assert_eq!(titles(&manager), vec!["Viva"]);
}

#[test]
fn test_undo_delete_restores_position() {
    let mut manager = make_manager(&["a", "b", "c"]);
    let deleted = manager.delete_event(1).unwrap();
    assert_eq!(deleted.title, "b");
    assert_eq!(titles(&manager), vec!["a", "c"]);

    assert!(manager.undo());
    assert_eq!(titles(&manager), vec!["a", "b", "c"]);

    assert!(manager.redo());
    assert_eq!(titles(&manager), vec!["a", "c"]);
}

#[test]
fn test_undo_edit_restores_previous() {
    let mut manager = make_manager(&["Mid Exam"]);
    assert!(manager.edit_event(0, event("Final Exam")));
    assert_eq!(manager.get(0).unwrap().title, "Final Exam");

    assert!(manager.undo());
    assert_eq!(manager.get(0).unwrap().title, "Mid Exam");
    assert!(manager.redo());
    assert_eq!(manager.get(0).unwrap().title, "Final Exam");
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut manager = make_manager(&["a", "b"]);
    manager.edit_event(1, event("B"));
    manager.delete_event(0);
    assert_eq!(titles(&manager), vec!["B"]);

    while manager.undo() {}
    assert_eq!(manager.event_count(), 0);
    while manager.redo() {}
    assert_eq!(titles(&manager), vec!["B"]);
}

#[test]
fn test_new_action_clears_redo() {
    let mut manager = make_manager(&["a", "b"]);
    assert!(manager.undo());
    assert!(manager.can_redo());
    manager.add_event(event("c"));
    assert!(!manager.can_redo());
    assert!(!manager.redo());
    assert_eq!(titles(&manager), vec!["a", "c"]);
}

#[test]
fn test_invalid_positions_do_not_record() {
    let mut manager = make_manager(&["a"]);
    assert!(manager.undo());
    assert!(!manager.can_undo());

    assert!(manager.delete_event(0).is_none());
    assert!(!manager.edit_event(3, event("x")));
    assert!(!manager.can_undo());
    assert!(manager.can_redo());
}

#[test]
fn test_nothing_to_undo() {
    let mut manager = EventsManager::new(50);
    assert!(!manager.undo());
    assert!(!manager.redo());
}

#[test]
fn test_search_events_any_field() {
    let mut manager = EventsManager::new(50);
    manager.add_event(Event::new(
        "Workshop",
        "2024-01-30",
        "13:00",
        "Lab 2",
        "Programming workshop",
    ));
    manager.add_event(Event::new(
        "Group Meeting",
        "2024-01-18",
        "16:00",
        "Cafeteria",
        "Project group discussion",
    ));

    assert_eq!(manager.search_events("PROGRAMMING").len(), 1);
    assert_eq!(manager.search_events("cafeteria")[0].title, "Group Meeting");
    assert_eq!(manager.search_events("group").len(), 1);
    assert!(manager.search_events("sports").is_empty());
}

#[test]
fn test_event_display() {
    let e = event("Viva");
    assert_eq!(e.to_string(), "Viva - 2024-01-20 at 14:00 (Lab 3)");
}
