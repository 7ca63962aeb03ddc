mod service {
    use std::sync::Arc;

    use quill_core::domain::PostPatch;
    use quill_core::error::PostError;
    use quill_core::service::{NewPostInput, PostService};

    use crate::auth::Argon2PasswordService;
    use crate::store::MemoryPostStore;

    fn service(require_password: bool) -> PostService {
        PostService::new(
            Arc::new(MemoryPostStore::new()),
            Arc::new(Argon2PasswordService::new()),
            require_password,
        )
    }

    fn input(title: &str, content: &str, author: &str) -> NewPostInput {
        NewPostInput {
            title: title.to_owned(),
            content: content.to_owned(),
            author: author.to_owned(),
            password: None,
        }
    }

    fn title_patch(title: &str) -> PostPatch {
        PostPatch {
            title: Some(title.to_owned()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service(false);
        let before = chrono::Utc::now();

        let created = svc.create(input("A", "B", "C")).await.unwrap();
        let fetched = svc.get(&created.id).await.unwrap();

        assert_eq!(fetched.title, "A");
        assert_eq!(fetched.content, "B");
        assert_eq!(fetched.author, "C");
        assert!(fetched.date >= before);
        assert!(fetched.date <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let svc = service(false);

        let err = svc.create(input("", "B", "C")).await.unwrap_err();
        assert!(matches!(err, PostError::MissingFields("title")));

        let err = svc.create(input("A", "B", "")).await.unwrap_err();
        assert!(matches!(err, PostError::MissingFields("author")));
    }

    #[tokio::test]
    async fn gated_create_requires_a_password() {
        let svc = service(true);

        let err = svc.create(input("A", "B", "C")).await.unwrap_err();
        assert!(matches!(err, PostError::MissingFields("password")));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let svc = service(false);
        for n in 0..3 {
            svc.create(input(&format!("post {n}"), "body", "author"))
                .await
                .unwrap();
        }

        let posts = svc.list().await.unwrap();
        assert_eq!(posts.len(), 3);
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let svc = service(false);
        let created = svc.create(input("A", "B", "C")).await.unwrap();

        let updated = svc.update(&created.id, title_patch("Z"), None).await.unwrap();

        assert_eq!(updated.title, "Z");
        assert_eq!(updated.content, "B");
        assert_eq!(updated.author, "C");
    }

    #[tokio::test]
    async fn update_with_no_fields_never_mutates() {
        let svc = service(false);
        let created = svc.create(input("A", "B", "C")).await.unwrap();

        let err = svc
            .update(&created.id, PostPatch::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::NoFieldsProvided));

        // empty strings count as absent too
        let err = svc
            .update(&created.id, title_patch(""), None)
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::NoFieldsProvided));

        assert_eq!(svc.get(&created.id).await.unwrap().title, "A");
    }

    #[tokio::test]
    async fn delete_returns_prior_state_then_get_is_not_found() {
        let svc = service(false);
        let created = svc.create(input("A", "B", "C")).await.unwrap();

        let deleted = svc.delete(&created.id, None).await.unwrap();
        assert_eq!(deleted.title, "A");

        let err = svc.get(&created.id).await.unwrap_err();
        assert!(matches!(err, PostError::NotFound(_)));
    }

    #[tokio::test]
    async fn malformed_id_is_invalid_not_missing() {
        let svc = service(false);

        let err = svc.get("not-a-number").await.unwrap_err();
        assert!(matches!(err, PostError::InvalidId(_)));
    }

    #[tokio::test]
    async fn wrong_password_leaves_the_post_unchanged() {
        let svc = service(true);
        let created = svc
            .create(NewPostInput {
                password: Some("secret".to_owned()),
                ..input("A", "B", "C")
            })
            .await
            .unwrap();

        let err = svc
            .update(&created.id, title_patch("X"), Some("wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::Forbidden));
        assert_eq!(svc.get(&created.id).await.unwrap().title, "A");

        let updated = svc
            .update(&created.id, title_patch("X"), Some("secret"))
            .await
            .unwrap();
        assert_eq!(updated.title, "X");
    }

    #[tokio::test]
    async fn delete_on_a_gated_post_demands_the_password() {
        let svc = service(true);
        let created = svc
            .create(NewPostInput {
                password: Some("secret".to_owned()),
                ..input("A", "B", "C")
            })
            .await
            .unwrap();

        let err = svc.delete(&created.id, None).await.unwrap_err();
        assert!(matches!(err, PostError::Forbidden));

        svc.delete(&created.id, Some("secret")).await.unwrap();
        assert!(matches!(
            svc.get(&created.id).await.unwrap_err(),
            PostError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn stored_hash_gates_mutation_even_when_the_flag_is_off() {
        // ungated service, but the record itself carries a hash
        let svc = service(false);
        let created = svc
            .create(NewPostInput {
                password: Some("secret".to_owned()),
                ..input("A", "B", "C")
            })
            .await
            .unwrap();

        let err = svc
            .update(&created.id, title_patch("X"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::Forbidden));
    }

    #[tokio::test]
    async fn password_hash_never_serializes() {
        let svc = service(true);
        let created = svc
            .create(NewPostInput {
                password: Some("secret".to_owned()),
                ..input("A", "B", "C")
            })
            .await
            .unwrap();

        assert!(created.password_hash.is_some());
        let rendered = serde_json::to_value(&created).unwrap();
        assert!(rendered.get("password_hash").is_none());
    }
}

#[cfg(feature = "postgres")]
mod postgres {
    use quill_core::error::StoreError;
    use quill_core::ports::PostStore;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::super::entity;
    use crate::store::PostgresPostStore;

    #[tokio::test]
    async fn find_post_by_id_maps_the_row() {
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![entity::Model {
                id: 7,
                title: "Test Post".to_owned(),
                content: "Content".to_owned(),
                author: "Author".to_owned(),
                password_hash: None,
                date: now.into(),
            }]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let post = store.find_by_id("7").await.unwrap().unwrap();

        assert_eq!(post.id, "7");
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.date, now);
    }

    #[tokio::test]
    async fn malformed_id_never_reaches_the_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = PostgresPostStore::new(db);

        let err = store.find_by_id("abc").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }
}
