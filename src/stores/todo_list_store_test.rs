#[cfg(test)]
mod tests {
    use crate::errors::internal::InternalError;
    use crate::errors::not_found::ResourceKind;
    use crate::test::utils::setup_test_store;
    use crate::types::dto::{ToDoItem, ToDoList};

    fn assert_not_found(result: Result<ToDoList, InternalError>, id: &str) {
        match result {
            Err(InternalError::NotFound(not_found)) => {
                assert_eq!(not_found.kind, ResourceKind::TodoList);
                assert_eq!(not_found.id, id);
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips_every_field() {
        let store = setup_test_store().await;
        let mut list = ToDoList::new("groceries", "2022-07-06T18:24:00");
        list.add_item(ToDoItem::new("milk", false));

        store.put(&list).await.expect("put should succeed");
        let fetched = store
            .get_by_id(&list.list_id)
            .await
            .expect("get should succeed");

        assert_eq!(fetched, list);
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let store = setup_test_store().await;

        assert_not_found(store.get_by_id("never-created").await, "never-created");
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_record() {
        let store = setup_test_store().await;
        let mut list = ToDoList::new("groceries", "2022-07-06T18:24:00");
        store.put(&list).await.expect("put should succeed");

        list.name = "chores".to_string();
        list.add_item(ToDoItem::new("vacuum", false));
        store.put(&list).await.expect("second put should succeed");

        let fetched = store
            .get_by_id(&list.list_id)
            .await
            .expect("get should succeed");
        assert_eq!(fetched.name, "chores");
        assert_eq!(fetched.items.as_ref().map(Vec::len), Some(1));

        // Overwrite, not duplicate
        let all = store.get_all().await.expect("scan should succeed");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_empty_table_returns_empty_vec() {
        let store = setup_test_store().await;

        let all = store.get_all().await.expect("scan should succeed");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_returns_every_record() {
        let store = setup_test_store().await;
        let first = ToDoList::new("list1", "2022-07-04T18:24:00");
        let second = ToDoList::new("list2", "2022-07-05T18:24:00");
        store.put(&first).await.expect("put should succeed");
        store.put(&second).await.expect("put should succeed");

        let mut names: Vec<String> = store
            .get_all()
            .await
            .expect("scan should succeed")
            .into_iter()
            .map(|list| list.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["list1", "list2"]);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = setup_test_store().await;
        let list = ToDoList::new("groceries", "2022-07-06T18:24:00");
        store.put(&list).await.expect("put should succeed");

        store.delete(&list.list_id).await.expect("delete should succeed");

        assert_not_found(store.get_by_id(&list.list_id).await, &list.list_id);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_at_the_store_layer() {
        let store = setup_test_store().await;
        let list = ToDoList::new("groceries", "2022-07-06T18:24:00");
        store.put(&list).await.expect("put should succeed");

        store.delete(&list.list_id).await.expect("delete should succeed");
        store
            .delete(&list.list_id)
            .await
            .expect("second delete should also succeed");

        store
            .delete("never-created")
            .await
            .expect("deleting an unknown key should succeed");
    }

    #[tokio::test]
    async fn test_persisted_collection_is_never_null_after_append() {
        let store = setup_test_store().await;
        let mut list = ToDoList::new("groceries", "2022-07-06T18:24:00");
        list.items = None;
        list.add_item(ToDoItem::new("milk", false));

        store.put(&list).await.expect("put should succeed");

        let fetched = store
            .get_by_id(&list.list_id)
            .await
            .expect("get should succeed");
        assert_eq!(fetched.items.as_ref().map(Vec::len), Some(1));
    }
}
