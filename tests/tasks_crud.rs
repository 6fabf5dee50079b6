#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use taskdesk::db::tasks::{TaskStore, Tasks};
    use taskdesk::libs::config::DbConfig;
    use taskdesk::libs::error::{ErrorKind, TaskError};
    use taskdesk::libs::task::NewTask;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::new(&DbConfig::new(temp_dir.path().join("taskdesk.db"))).unwrap();
            TaskTestContext { _temp_dir: temp_dir, tasks }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_assigns_id_and_timestamps(ctx: &mut TaskTestContext) {
        let before = Utc::now();
        let task = ctx.tasks.create(&NewTask::new("Pay rent", 1, None)).unwrap();

        assert!(task.id > 0);
        assert_eq!(task.title, "Pay rent");
        assert_eq!(task.priority, 1);
        assert!(!task.completed);
        assert_eq!(task.due_date, None);
        assert!(task.created_at >= before);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_keeps_due_date(ctx: &mut TaskTestContext) {
        let due = Utc::now() + Duration::days(3);
        let task = ctx.tasks.create(&NewTask::new("Dentist", 0, Some(due))).unwrap();

        let stored = ctx.tasks.get_by_id(task.id).unwrap().unwrap();
        assert_eq!(stored.due_date, Some(due));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_all_returns_tasks_in_id_order(ctx: &mut TaskTestContext) {
        for i in 1..=3 {
            ctx.tasks.create(&NewTask::new(&format!("Task {}", i), 0, None)).unwrap();
        }

        let all = ctx.tasks.get_all().unwrap();
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Task 1", "Task 2", "Task 3"]);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(ctx: &mut TaskTestContext) {
        let mut task = ctx.tasks.create(&NewTask::new("Original", 0, None)).unwrap();
        let created_at = task.created_at;

        task.title = "Updated".to_string();
        task.priority = 5;
        task.completed = true;
        let updated = ctx.tasks.update(&task).unwrap();

        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.priority, 5);
        assert!(updated.completed);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at >= created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task_is_not_found(ctx: &mut TaskTestContext) {
        let mut task = ctx.tasks.create(&NewTask::new("Ghost", 0, None)).unwrap();
        task.id += 100;

        let err = ctx.tasks.update(&task).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(id) if id == task.id));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.create(&NewTask::new("Test task", 0, None)).unwrap();

        ctx.tasks.delete(task.id).unwrap();

        assert!(ctx.tasks.get_all().unwrap().is_empty());
        assert!(ctx.tasks.get_by_id(task.id).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task_is_not_found(ctx: &mut TaskTestContext) {
        let err = ctx.tasks.delete(42).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_flips_and_refreshes_updated_at(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.create(&NewTask::new("Laundry", 0, None)).unwrap();

        let toggled = ctx.tasks.toggle_complete(task.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.created_at, task.created_at);
        assert!(toggled.updated_at >= task.updated_at);

        let back = ctx.tasks.toggle_complete(task.id).unwrap();
        assert!(!back.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_missing_task_is_not_found(ctx: &mut TaskTestContext) {
        let err = ctx.tasks.toggle_complete(7).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(7)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_data_survives_reopen(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.create(&NewTask::new("Persist me", 2, None)).unwrap();
        let path = ctx._temp_dir.path().join("taskdesk.db");

        let reopened = Tasks::new(&DbConfig::new(path)).unwrap();
        let stored = reopened.get_by_id(task.id).unwrap().unwrap();
        assert_eq!(stored, task);
    }
}
