#[cfg(test)]
mod tests {
    use taskdeck::libs::error::TaskError;
    use taskdeck::libs::task::{Task, TaskStatus};
    use taskdeck::store::{memory::MemoryTaskStore, TaskStore};
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        store: MemoryTaskStore,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let mut store = MemoryTaskStore::new();
            let mut write_docs = Task::new("Write docs", Some("User guide"));
            write_docs.id = Some(1);
            let mut fix_login = Task::new("Fix login bug", None);
            fix_login.id = Some(2);
            fix_login.status = Some(TaskStatus::InProgress);
            store.add(write_docs).unwrap();
            store.add(fix_login).unwrap();
            StoreTestContext { store }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_and_find_by_id(ctx: &mut StoreTestContext) {
        let found = ctx.store.find_by_id(1).unwrap().unwrap();
        assert_eq!(found.title, "Write docs");
        assert_eq!(found.description.as_deref(), Some("User guide"));
        assert_eq!(found.status, Some(TaskStatus::Pending));

        assert!(ctx.store.find_by_id(99).unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_duplicate_id_fails(ctx: &mut StoreTestContext) {
        let mut dup = Task::new("Another task", None);
        dup.id = Some(1);

        let err = ctx.store.add(dup).unwrap_err();
        assert!(matches!(err, TaskError::InvalidArgument(_)));
        assert_eq!(ctx.store.len(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_without_id_fails(ctx: &mut StoreTestContext) {
        let err = ctx.store.add(Task::new("No id", None)).unwrap_err();
        assert!(matches!(err, TaskError::InvalidArgument(_)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_assigns_next_id(ctx: &mut StoreTestContext) {
        let saved = ctx.store.save(Task::new("Fresh task", None)).unwrap();

        // Ids continue past the explicitly added ones.
        assert_eq!(saved.id, Some(3));
        let again = ctx.store.save(Task::new("One more", None)).unwrap();
        assert_eq!(again.id, Some(4));
        assert_eq!(ctx.store.len(), 4);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_replaces_existing(ctx: &mut StoreTestContext) {
        let mut task = ctx.store.find_by_id(2).unwrap().unwrap();
        task.title = "Fix login bug for real".to_string();
        task.status = Some(TaskStatus::Completed);

        let saved = ctx.store.save(task).unwrap();
        assert_eq!(saved.id, Some(2));
        assert_eq!(ctx.store.len(), 2);

        let stored = ctx.store.find_by_id(2).unwrap().unwrap();
        assert_eq!(stored.title, "Fix login bug for real");
        assert_eq!(stored.status, Some(TaskStatus::Completed));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_removes_exactly_one(ctx: &mut StoreTestContext) {
        let task = ctx.store.find_by_id(1).unwrap().unwrap();
        ctx.store.delete(&task).unwrap();

        assert_eq!(ctx.store.len(), 1);
        assert!(ctx.store.find_by_id(1).unwrap().is_none());
        assert!(ctx.store.find_by_id(2).unwrap().is_some());

        // Deleting the same instance again is a quiet no-op.
        ctx.store.delete(&task).unwrap();
        assert_eq!(ctx.store.len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_find_all(ctx: &mut StoreTestContext) {
        let all = ctx.store.find_all().unwrap();
        assert_eq!(all.len(), 2);
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert!(titles.contains(&"Write docs"));
        assert!(titles.contains(&"Fix login bug"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_find_by_status(ctx: &mut StoreTestContext) {
        let pending = ctx.store.find_by_status(TaskStatus::Pending).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Write docs");

        let completed = ctx.store.find_by_status(TaskStatus::Completed).unwrap();
        assert!(completed.is_empty());
    }
}
