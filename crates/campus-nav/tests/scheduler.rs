use campus_nav::Priority;
use campus_nav::scheduler::{Task, TaskScheduler};

fn make_scheduler(titles: &[&str]) -> TaskScheduler {
    let mut scheduler = TaskScheduler::new(None);
    for title in titles {
        assert!(scheduler.add_task(Task::new(title)));
    }
    scheduler
}

#[test]
fn test_tasks_complete_in_fifo_order() {
    let mut scheduler = make_scheduler(&["Study DSA", "Complete Assignment", "Attend Class"]);
    assert_eq!(scheduler.peek_next_task().unwrap().title, "Study DSA");

    let done = scheduler.complete_next_task().unwrap();
    assert_eq!(done.title, "Study DSA");
    assert!(done.is_completed());

    assert_eq!(
        scheduler.complete_next_task().unwrap().title,
        "Complete Assignment"
    );
    let pending: Vec<&str> = scheduler
        .pending_tasks()
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(pending, vec!["Attend Class"]);
    assert_eq!(scheduler.completed_tasks().len(), 2);
}

#[test]
fn test_complete_on_empty_queue() {
    let mut scheduler = TaskScheduler::new(None);
    assert!(scheduler.complete_next_task().is_none());
    assert!(scheduler.peek_next_task().is_none());
}

#[test]
fn test_bounded_queue_refuses_extra_tasks() {
    let mut scheduler = TaskScheduler::new(Some(2));
    assert!(scheduler.add_task(Task::new("a")));
    assert!(scheduler.add_task(Task::new("b")));
    assert!(!scheduler.add_task(Task::new("c")));
    assert_eq!(scheduler.pending_count(), 2);
    assert_eq!(scheduler.total_created(), 2);
}

#[test]
fn test_cancel_task() {
    let mut scheduler = make_scheduler(&["a", "b", "c"]);
    assert!(scheduler.cancel_task("b"));
    assert!(!scheduler.cancel_task("b"));
    assert_eq!(scheduler.pending_count(), 2);
    assert_eq!(scheduler.complete_next_task().unwrap().title, "a");
    assert_eq!(scheduler.complete_next_task().unwrap().title, "c");
}

#[test]
fn test_statistics() {
    let mut scheduler = make_scheduler(&["a", "b", "c", "d"]);
    let empty = TaskScheduler::new(None).statistics();
    assert_eq!(empty.completion_rate, 0.0);

    scheduler.complete_next_task();
    let stats = scheduler.statistics();
    assert_eq!(stats.pending, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.total_created, 4);
    assert_eq!(stats.completion_rate, 25.0);

    scheduler.clear_completed();
    assert_eq!(scheduler.completed_count(), 0);
    assert_eq!(scheduler.total_created(), 4);
}

#[test]
fn test_task_builder_and_display() {
    let task = Task::new("Review Notes")
        .with_description("Go through lecture notes")
        .with_priority(Priority::Low)
        .with_deadline("2024-01-12");
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.deadline, "2024-01-12");
    assert_eq!(task.to_string(), "Review Notes (Low) - Pending");
}
