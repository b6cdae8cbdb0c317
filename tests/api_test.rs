//! End-to-end API tests against a live MongoDB
//!
//! `MONGODB_TEST_URI` (기본값 `mongodb://localhost:27017`)의 서버를 사용하며,
//! 테스트마다 별도의 데이터베이스를 만들고 끝나면 삭제합니다.
//!
//! ```bash
//! cargo test --test api_test -- --ignored
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App};
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::{json, Value};
    use customer_service_backend::core::AppContainer;
    use customer_service_backend::db::Database;
    use customer_service_backend::domain::dto::SignupData;
    use customer_service_backend::domain::entities::{Customer, User};
    use customer_service_backend::errors::AppError;
    use customer_service_backend::repositories::BulkOperation;
    use customer_service_backend::services::auth::TokenService;
    use customer_service_backend::routes::configure_all_routes;

    async fn container() -> AppContainer {
        let uri = std::env::var("MONGODB_TEST_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name = format!("customers_test_{}", ObjectId::new().to_hex());

        let container = AppContainer::new(
            Arc::new(Database::new(uri, database_name)),
            Arc::new(TokenService::new("api-test-secret", 1)),
            4,
        );
        container.init().await.unwrap();
        container
    }

    async fn cleanup(container: &AppContainer) {
        container.database.get_database().await.unwrap().drop().await.unwrap();
        container.database.close().await;
    }

    macro_rules! app {
        ($container:expr) => {{
            let container = $container.clone();
            test::init_service(App::new().configure(move |cfg| configure_all_routes(cfg, &container))).await
        }};
    }

    macro_rules! signup_and_login {
        ($app:expr) => {{
            let req = test::TestRequest::post()
                .uri("/signup")
                .set_json(json!({ "name": "Abhinav", "email": "abhinav@gmail.com", "password": "123456" }))
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), 200);

            let req = test::TestRequest::post()
                .uri("/login")
                .set_json(json!({ "email": "abhinav@gmail.com", "password": "123456" }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&$app, req).await;
            format!("Bearer {}", body["token"].as_str().unwrap())
        }};
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_signup_then_login() {
        let container = container().await;
        let app = app!(container);

        let req = test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({ "name": "Abhinav", "email": "abhinav@gmail.com", "password": "123456" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["user"]["email"], "abhinav@gmail.com");
        assert!(body["user"].get("password").is_none());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "abhinav@gmail.com", "password": "123456" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["token"].as_str().is_some());
        assert_eq!(body["user"]["name"], "Abhinav");
        assert!(body["user"].get("password").is_none());

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_duplicate_signup_is_rejected() {
        let container = container().await;
        let app = app!(container);
        let payload = json!({ "name": "Abhinav", "email": "abhinav@gmail.com", "password": "123456" });

        let req = test::TestRequest::post().uri("/signup").set_json(&payload).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::post().uri("/register").set_json(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "User already exists");

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_login_failures_are_indistinguishable() {
        let container = container().await;
        let app = app!(container);
        let _ = signup_and_login!(app);

        for payload in [
            json!({ "email": "abhinav@gmail.com", "password": "wrong-password" }),
            json!({ "email": "nobody@gmail.com", "password": "123456" }),
        ] {
            let req = test::TestRequest::post().uri("/login").set_json(payload).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Invalid Credentials" }));
        }

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_customer_lifecycle() {
        let container = container().await;
        let app = app!(container);
        let authorization = signup_and_login!(app);

        // 생성
        let req = test::TestRequest::post()
            .uri("/customers")
            .insert_header(("Authorization", authorization.as_str()))
            .set_json(json!({ "name": "Raja", "email": "raja@gmail.com", "age": 25 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: Value = test::read_body_json(resp).await;
        let id = created["_id"].as_str().unwrap().to_string();
        assert!(created["created_at"].as_str().is_some());

        // 목록
        let req = test::TestRequest::get()
            .uri("/customers")
            .insert_header(("Authorization", authorization.as_str()))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        // 수정 (수정 후 문서 반환)
        let req = test::TestRequest::put()
            .uri(&format!("/customers/{}", id))
            .insert_header(("Authorization", authorization.as_str()))
            .set_json(json!({ "name": "Raja Kumar", "email": "raja@gmail.com", "age": 26 }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["name"], "Raja Kumar");
        assert_eq!(updated["age"], 26);

        // 삭제
        let req = test::TestRequest::delete()
            .uri(&format!("/customers/{}", id))
            .insert_header(("Authorization", authorization.as_str()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Customer deleted successfully");

        // 삭제 후 조회
        let req = test::TestRequest::get()
            .uri(&format!("/customers/{}", id))
            .insert_header(("Authorization", authorization.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"], json!(["Customer not found"]));

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_update_checks_existence_before_body() {
        let container = container().await;
        let app = app!(container);
        let authorization = signup_and_login!(app);

        let req = test::TestRequest::put()
            .uri(&format!("/customers/{}", ObjectId::new().to_hex()))
            .insert_header(("Authorization", authorization.as_str()))
            .set_json(json!({ "name": "Ra", "email": "bad", "age": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_repository_operations() {
        let container = container().await;
        let repo = &container.customer_repository;

        let inserted = repo
            .insert_many(vec![
                Customer::new("Alpha".into(), "alpha@gmail.com".into(), 20.0),
                Customer::new("Bravo".into(), "bravo@gmail.com".into(), 30.0),
                Customer::new("Charlie".into(), "charlie@gmail.com".into(), 40.0),
            ])
            .await
            .unwrap();
        assert!(inserted.iter().all(|c| c.id.is_some() && c.created_at.is_some()));

        let updated = repo.update_many(doc! { "age": { "$gte": 30.0 } }, doc! { "$inc": { "age": 1.0 } }).await.unwrap();
        assert_eq!(updated.modified_count, 2);

        let summary = repo
            .bulk_write(vec![
                BulkOperation::InsertOne(Customer::new("Delta".into(), "delta@gmail.com".into(), 50.0)),
                BulkOperation::UpdateOne { filter: doc! { "name": "Alpha" }, update: doc! { "$set": { "age": 21.0 } } },
                BulkOperation::DeleteMany { filter: doc! { "age": { "$gt": 40.0 } } },
            ])
            .await
            .unwrap();
        assert_eq!(summary.inserted_count, 1);
        assert_eq!(summary.modified_count, 1);
        assert_eq!(summary.deleted_count, 2);

        let remaining = repo.find(doc! {}, None).await.unwrap();
        let names: Vec<&str> = remaining.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);

        assert_eq!(repo.delete_many(doc! {}).await.unwrap(), 2);

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_user_reads_hide_password_unless_requested() {
        let container = container().await;
        let app = app!(container);
        let _ = signup_and_login!(app);

        let users = &container.user_repository;
        let plain = users.find_by_email("abhinav@gmail.com").await.unwrap().unwrap();
        assert!(plain.password.is_none());

        let with_password = users.find_by_email_with_password("abhinav@gmail.com").await.unwrap().unwrap();
        assert!(with_password.password.unwrap().starts_with("$2"));

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_update_of_missing_id_returns_none() {
        let container = container().await;

        let updated = container
            .customer_repository
            .set_fields(ObjectId::new(), doc! { "name": "Nobody" })
            .await
            .unwrap();
        assert!(updated.is_none());

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_unique_email_index_reports_conflict() {
        let container = container().await;
        let users = &container.user_repository;

        users.create(User::new("Abhinav".into(), "abhinav@gmail.com".into(), "hash".into())).await.unwrap();

        let second = users.create(User::new("Imposter".into(), "abhinav@gmail.com".into(), "hash".into())).await;
        assert!(matches!(second, Err(AppError::ConflictError(_))));

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_signup_after_direct_insert_is_conflict() {
        let container = container().await;

        container
            .user_repository
            .create(User::new("Abhinav".into(), "abhinav@gmail.com".into(), "hash".into()))
            .await
            .unwrap();

        let result = container
            .auth_service
            .signup_user(SignupData {
                name: "Abhinav".into(),
                email: "abhinav@gmail.com".into(),
                password: "123456".into(),
            })
            .await;

        match result {
            Err(AppError::ConflictError(message)) => assert_eq!(message, "User already exists"),
            other => panic!("Expected ConflictError, got {:?}", other.map(|r| r.user.email)),
        }

        cleanup(&container).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_connect_replaces_client_and_resets_cached_handle() {
        let container = container().await;
        let uri = std::env::var("MONGODB_TEST_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        container
            .customer_repository
            .insert_one(Customer::new("Alpha".into(), "alpha@gmail.com".into(), 20.0))
            .await
            .unwrap();

        container.database.connect(&uri).await.unwrap();

        let customers = container.database.get_collection::<Customer>("customers").await.unwrap();
        assert_eq!(customers.count_documents(doc! {}).await.unwrap(), 1);
        assert_eq!(customers.namespace().db, container.database.database_name());

        cleanup(&container).await;
    }
}
