//! Integration tests for the JWT request gate

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use mongodb::bson::oid::ObjectId;
    use serde_json::Value;
    use customer_service_backend::domain::entities::User;
    use customer_service_backend::domain::models::{AuthenticatedUser, TokenClaims};
    use customer_service_backend::middlewares::AuthMiddleware;
    use customer_service_backend::services::auth::TokenService;

    const SECRET: &str = "middleware-test-secret";

    async fn protected_handler(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({
            "user_id": user.user_id,
            "email": user.email,
        }))
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(SECRET, 1))
    }

    fn stored_user() -> User {
        let mut user = User::new("Abhinav".into(), "abhinav@gmail.com".into(), "$2b$10$hash".into());
        user.id = Some(ObjectId::new());
        user
    }

    macro_rules! gated_app {
        ($token_service:expr) => {
            test::init_service(
                App::new().service(
                    web::scope("/customers")
                        .wrap(AuthMiddleware::new($token_service))
                        .route("", web::get().to(protected_handler)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get().uri("/customers").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid token");
    }

    #[actix_web::test]
    async fn test_header_without_scheme_is_unauthorized() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get()
            .uri("/customers")
            .insert_header(("Authorization", "just-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_header_with_three_parts_is_unauthorized() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get()
            .uri("/customers")
            .insert_header(("Authorization", "Bearer a b"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_invalid_token_is_forbidden() {
        let app = gated_app!(token_service());

        let req = test::TestRequest::get()
            .uri("/customers")
            .insert_header(("Authorization", "Bearer invalid-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid token");
    }

    #[actix_web::test]
    async fn test_token_signed_with_other_secret_is_forbidden() {
        let app = gated_app!(token_service());
        let foreign = TokenService::new("another-secret", 1).generate_token(&stored_user()).unwrap();

        let req = test::TestRequest::get()
            .uri("/customers")
            .insert_header(("Authorization", format!("Bearer {}", foreign)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn test_expired_token_is_forbidden() {
        let app = gated_app!(token_service());
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: ObjectId::new().to_hex(),
            name: "Abhinav".to_string(),
            email: "abhinav@gmail.com".to_string(),
            created_at: None,
            iat: now - 7200,
            exp: now - 3600,
        };
        let expired = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap();

        let req = test::TestRequest::get()
            .uri("/customers")
            .insert_header(("Authorization", format!("Bearer {}", expired)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_identity() {
        let service = token_service();
        let user = stored_user();
        let token = service.generate_token(&user).unwrap();
        let app = gated_app!(service);

        let req = test::TestRequest::get()
            .uri("/customers")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], user.id_string().unwrap());
        assert_eq!(body["email"], "abhinav@gmail.com");
    }
}
