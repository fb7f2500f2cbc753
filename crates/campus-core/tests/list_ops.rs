use campus_core::list::PositionalList;

fn make_list(values: &[&'static str]) -> PositionalList<&'static str> {
    values.iter().copied().collect()
}

#[test]
fn test_insert_at_position_then_get() {
    let mut list = make_list(&["a", "b", "c"]);
    for (pos, value) in [(0, "start"), (2, "mid"), (5, "end")] {
        let before = list.len();
        assert!(list.insert_at_position(value, pos));
        assert_eq!(list.get_at_position(pos), Some(&value));
        assert_eq!(list.len(), before + 1);
    }
    assert_eq!(list.to_list(), vec!["start", "a", "mid", "b", "c", "end"]);
}

#[test]
fn test_insert_out_of_range_leaves_list_untouched() {
    let mut list = make_list(&["a", "b"]);
    assert!(!list.insert_at_position("x", 3));
    assert_eq!(list.to_list(), vec!["a", "b"]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_insert_into_empty_at_zero() {
    let mut list = PositionalList::new();
    assert!(list.insert_at_position(1, 0));
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&1));
}

#[test]
fn test_delete_only_element_resets() {
    let deletes: [fn(&mut PositionalList<i32>) -> Option<i32>; 3] = [
        PositionalList::delete_from_beginning,
        PositionalList::delete_from_end,
        |l| l.delete_at_position(0),
    ];
    for delete in deletes {
        let mut list = PositionalList::new();
        list.insert_at_end(42);
        assert_eq!(delete(&mut list), Some(42));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }
}

#[test]
fn test_delete_from_empty() {
    let mut list: PositionalList<i32> = PositionalList::new();
    assert_eq!(list.delete_from_beginning(), None);
    assert_eq!(list.delete_from_end(), None);
    assert_eq!(list.delete_at_position(0), None);
    assert!(!list.delete_by_value(&1));
}

#[test]
fn test_delete_by_value_ends_and_middle() {
    let mut list = make_list(&["a", "b", "c", "d"]);
    assert!(list.delete_by_value(&"a"));
    assert!(list.delete_by_value(&"d"));
    assert!(list.delete_by_value(&"b"));
    assert_eq!(list.to_list(), vec!["c"]);
    assert!(!list.delete_by_value(&"z"));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_search_and_update() {
    let mut list = make_list(&["viva", "exam", "viva"]);
    assert_eq!(list.search(&"viva"), Some(0));
    assert_eq!(list.search(&"exam"), Some(1));
    assert_eq!(list.search(&"workshop"), None);

    assert!(list.update_at_position(2, "workshop"));
    assert!(!list.update_at_position(3, "nope"));
    assert_eq!(list.to_list(), vec!["viva", "exam", "workshop"]);
}

#[test]
fn test_get_out_of_range() {
    let list = make_list(&["a"]);
    assert_eq!(list.get_at_position(1), None);
    assert_eq!(list.get_at_position(usize::MAX), None);
}

#[test]
fn test_to_list_is_a_snapshot() {
    let mut list = make_list(&["a", "b"]);
    let snapshot = list.to_list();
    list.delete_from_beginning();
    assert_eq!(snapshot, vec!["a", "b"]);
    assert_eq!(list.to_list(), vec!["b"]);
}

#[test]
fn test_reverse_iteration() {
    let list = make_list(&["a", "b", "c"]);
    let reversed: Vec<&str> = list.iter().rev().copied().collect();
    assert_eq!(reversed, vec!["c", "b", "a"]);
}
