// HTTP routes configuration

use crate::auth::guard::route_guard;
use crate::core::state::AppState;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public endpoints
        .route("/login", get(crate::handlers::auth::login_page_handler))
        .route("/auth/login", post(crate::handlers::auth::login_handler))
        .route("/auth/logout", post(crate::handlers::auth::logout_handler))
        .route("/health", get(crate::handlers::health::health_handler))
        .route("/services", get(crate::handlers::services::list_services_handler))
        .route("/services/{id}", get(crate::handlers::services::get_service_handler))
        // Role home pages
        .route("/admin/dashboard", get(crate::handlers::dashboard::admin_dashboard_handler))
        .route("/mechanic/dashboard", get(crate::handlers::dashboard::mechanic_dashboard_handler))
        .route("/client/dashboard", get(crate::handlers::dashboard::client_dashboard_handler))
        // Admin provisioning and catalog management
        .route(
            "/admin/users",
            get(crate::handlers::users::list_users_handler)
                .post(crate::handlers::users::create_user_handler),
        )
        .route("/admin/users/{id}", delete(crate::handlers::users::delete_user_handler))
        .route(
            "/admin/services",
            get(crate::handlers::services::admin_list_services_handler)
                .post(crate::handlers::services::create_service_handler),
        )
        .route(
            "/admin/services/{id}",
            put(crate::handlers::services::update_service_handler)
                .delete(crate::handlers::services::delete_service_handler),
        )
        // Resource services (row-scoped inside the handlers)
        .route(
            "/clients",
            get(crate::handlers::clients::list_clients_handler)
                .post(crate::handlers::clients::create_client_handler),
        )
        .route(
            "/clients/{id}",
            get(crate::handlers::clients::get_client_handler)
                .put(crate::handlers::clients::update_client_handler)
                .delete(crate::handlers::clients::delete_client_handler),
        )
        .route(
            "/vehicles",
            get(crate::handlers::vehicles::list_vehicles_handler)
                .post(crate::handlers::vehicles::create_vehicle_handler),
        )
        .route(
            "/vehicles/{id}",
            get(crate::handlers::vehicles::get_vehicle_handler)
                .put(crate::handlers::vehicles::update_vehicle_handler)
                .delete(crate::handlers::vehicles::delete_vehicle_handler),
        )
        .route(
            "/appointments",
            get(crate::handlers::appointments::list_appointments_handler)
                .post(crate::handlers::appointments::create_appointment_handler),
        )
        .route(
            "/appointments/{id}",
            get(crate::handlers::appointments::get_appointment_handler)
                .put(crate::handlers::appointments::update_appointment_handler)
                .delete(crate::handlers::appointments::delete_appointment_handler),
        )
        .route(
            "/invoices",
            get(crate::handlers::invoices::list_invoices_handler)
                .post(crate::handlers::invoices::create_invoice_handler),
        )
        .route(
            "/invoices/{id}",
            get(crate::handlers::invoices::get_invoice_handler)
                .put(crate::handlers::invoices::update_invoice_handler)
                .delete(crate::handlers::invoices::delete_invoice_handler),
        )
        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)
        // Every request passes the route guard exactly once
        .layer(middleware::from_fn_with_state(Arc::clone(&state), route_guard))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use crate::auth::session::SessionHolder;
    use crate::auth::token::{issue_token, Claims};
    use crate::core::config::Config;
    use crate::models::api::LoginResponse;
    use crate::models::client::Client;
    use crate::models::invoice::Invoice;
    use crate::models::user::{Role, User};
    use crate::models::vehicle::Vehicle;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &str = "routes-test-signing-secret";

    struct TestEnv {
        router: Router,
        client_a: Uuid,
        client_b: Uuid,
        vehicle_b: Uuid,
        invoice_b: Uuid,
    }

    async fn seed_user(
        state: &AppState,
        email: &str,
        password: &str,
        role: Role,
        client_id: Option<Uuid>,
    ) {
        let hash = hash_password(password, 4).await.unwrap();
        state
            .users
            .add_user(User::new(email, hash, role, email, client_id));
    }

    /// Two client accounts with one vehicle each, an invoice for client B,
    /// plus an admin and a mechanic.
    async fn setup() -> TestEnv {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [logging]
            level = "error"
            format = "console"
            "#,
        )
        .unwrap();

        let state = Arc::new(AppState::new(config, SECRET.to_string()));

        let client_a = Client::new("Ana Gomez", None, None);
        let client_b = Client::new("Luis Rojas", None, None);
        let client_a_id = client_a.id;
        let client_b_id = client_b.id;
        state.clients.insert(client_a);
        state.clients.insert(client_b);

        let vehicle_a = Vehicle::new(client_a_id, "AAA-111", "Toyota", "Hilux", 2019);
        let vehicle_b = Vehicle::new(client_b_id, "BBB-222", "Kia", "Rio", 2021);
        let vehicle_b_id = vehicle_b.id;
        state.vehicles.insert(vehicle_a);
        state.vehicles.insert(vehicle_b);

        let invoice_b = Invoice::new(client_b_id, None, 45000);
        let invoice_b_id = invoice_b.id;
        state.invoices.insert(invoice_b);

        seed_user(&state, "admin@servicollantas.com", "admin-password", Role::Admin, None).await;
        seed_user(&state, "mech@servicollantas.com", "mech-password", Role::Mechanic, None).await;
        seed_user(&state, "ana@servicollantas.com", "ana-password", Role::Client, Some(client_a_id)).await;
        seed_user(&state, "luis@servicollantas.com", "luis-password", Role::Client, Some(client_b_id)).await;

        TestEnv {
            router: build_router(state),
            client_a: client_a_id,
            client_b: client_b_id,
            vehicle_b: vehicle_b_id,
            invoice_b: invoice_b_id,
        }
    }

    async fn send(
        router: &Router,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes().to_vec();

        (status, location, bytes)
    }

    async fn login(router: &Router, email: &str, password: &str) -> LoginResponse {
        let (status, _, body) = send(
            router,
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": email, "password": password})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_admin_login_scenario() {
        let env = setup().await;

        let session = login(&env.router, "admin@servicollantas.com", "admin-password").await;
        assert_eq!(session.role, Role::Admin);

        // Admin dashboard renders.
        let (status, _, _) =
            send(&env.router, "GET", "/admin/dashboard", Some(&session.token), None).await;
        assert_eq!(status, StatusCode::OK);

        // The mechanic area redirects the admin to their own home.
        let (status, location, _) =
            send(&env.router, "GET", "/mechanic/dashboard", Some(&session.token), None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/admin/dashboard"));
    }

    #[tokio::test]
    async fn test_failed_logins_are_indistinguishable() {
        let env = setup().await;

        let (unknown_status, _, unknown_body) = send(
            &env.router,
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": "ghost@servicollantas.com", "password": "whatever"})),
        )
        .await;

        let (wrong_status, _, wrong_body) = send(
            &env.router,
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": "ana@servicollantas.com", "password": "not-her-password"})),
        )
        .await;

        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        // Byte-identical responses: no user enumeration.
        assert_eq!(unknown_body, wrong_body);
    }

    #[tokio::test]
    async fn test_login_validation_errors() {
        let env = setup().await;

        let (status, _, _) = send(
            &env.router,
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": "", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = send(
            &env.router,
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": "not-an-email", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_anonymous_protected_access_redirects_to_login() {
        let env = setup().await;

        for path in ["/admin/dashboard", "/mechanic/dashboard", "/clients", "/invoices"] {
            let (status, location, _) = send(&env.router, "GET", path, None, None).await;
            assert_eq!(status, StatusCode::SEE_OTHER, "{path}");
            assert_eq!(location.as_deref(), Some("/login"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_client_never_renders_admin_or_mechanic_content() {
        let env = setup().await;
        let session = login(&env.router, "ana@servicollantas.com", "ana-password").await;

        for path in ["/admin/dashboard", "/admin/users", "/mechanic/dashboard"] {
            let (status, location, _) =
                send(&env.router, "GET", path, Some(&session.token), None).await;
            assert_eq!(status, StatusCode::SEE_OTHER, "{path}");
            assert_eq!(location.as_deref(), Some("/client/dashboard"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_admin_reaches_every_resource_path() {
        let env = setup().await;
        let session = login(&env.router, "admin@servicollantas.com", "admin-password").await;

        for path in ["/clients", "/vehicles", "/appointments", "/invoices", "/services"] {
            let (status, _, _) = send(&env.router, "GET", path, Some(&session.token), None).await;
            assert_eq!(status, StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn test_logout_then_protected_access_redirects() {
        let env = setup().await;
        let session = login(&env.router, "ana@servicollantas.com", "ana-password").await;

        let mut holder = SessionHolder::new();
        holder.store(session.token);

        let (status, _, _) =
            send(&env.router, "GET", "/client/dashboard", holder.token(), None).await;
        assert_eq!(status, StatusCode::OK);

        // Logout: acknowledge server-side, clear the holder.
        let (status, _, _) =
            send(&env.router, "POST", "/auth/logout", holder.token(), None).await;
        assert_eq!(status, StatusCode::OK);
        holder.clear();

        let (status, location, _) =
            send(&env.router, "GET", "/client/dashboard", holder.token(), None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_expired_token_treated_as_anonymous() {
        let env = setup().await;
        let session = login(&env.router, "ana@servicollantas.com", "ana-password").await;

        let mut claims = Claims::new(session.user_id, Role::Client, 60);
        claims.iat -= 7200;
        claims.exp -= 7200;
        let expired = issue_token(&claims, SECRET).unwrap();

        let (status, location, _) =
            send(&env.router, "GET", "/client/dashboard", Some(&expired), None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_forged_role_rejected_by_signature() {
        let env = setup().await;
        let session = login(&env.router, "ana@servicollantas.com", "ana-password").await;

        // Sign an admin token with the wrong key; the guard must treat it
        // as anonymous.
        let claims = Claims::new(session.user_id, Role::Admin, 3600);
        let forged = issue_token(&claims, "attacker-controlled-secret").unwrap();

        let (status, location, _) =
            send(&env.router, "GET", "/admin/dashboard", Some(&forged), None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_client_rows_are_scoped() {
        let env = setup().await;
        let session = login(&env.router, "ana@servicollantas.com", "ana-password").await;

        // The list only contains Ana's vehicle.
        let (status, _, body) =
            send(&env.router, "GET", "/vehicles", Some(&session.token), None).await;
        assert_eq!(status, StatusCode::OK);
        let vehicles: Vec<Vehicle> = serde_json::from_slice(&body).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].client_id, env.client_a);

        // Someone else's rows are Forbidden, not NotFound.
        let (status, _, _) = send(
            &env.router,
            "GET",
            &format!("/vehicles/{}", env.vehicle_b),
            Some(&session.token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _, _) = send(
            &env.router,
            "GET",
            &format!("/invoices/{}", env.invoice_b),
            Some(&session.token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // A random missing id gets the same answer as a foreign one.
        let (status, _, _) = send(
            &env.router,
            "GET",
            &format!("/vehicles/{}", Uuid::new_v4()),
            Some(&session.token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_client_cannot_write_foreign_rows() {
        let env = setup().await;
        let session = login(&env.router, "ana@servicollantas.com", "ana-password").await;

        let (status, _, _) = send(
            &env.router,
            "PUT",
            &format!("/vehicles/{}", env.vehicle_b),
            Some(&session.token),
            Some(serde_json::json!({"plate": "HACKED-1"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_mechanic_reads_but_cannot_edit_invoices() {
        let env = setup().await;
        let session = login(&env.router, "mech@servicollantas.com", "mech-password").await;

        let (status, _, body) =
            send(&env.router, "GET", "/invoices", Some(&session.token), None).await;
        assert_eq!(status, StatusCode::OK);
        let invoices: Vec<Invoice> = serde_json::from_slice(&body).unwrap();
        assert_eq!(invoices.len(), 1);

        let (status, _, _) = send(
            &env.router,
            "POST",
            "/invoices",
            Some(&session.token),
            Some(serde_json::json!({"client_id": env.client_b, "total_cents": 100})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _, _) = send(
            &env.router,
            "PUT",
            &format!("/invoices/{}", env.invoice_b),
            Some(&session.token),
            Some(serde_json::json!({"status": "paid"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_mechanic_cannot_modify_vehicles() {
        let env = setup().await;
        let session = login(&env.router, "mech@servicollantas.com", "mech-password").await;

        let (status, _, _) = send(
            &env.router,
            "PUT",
            &format!("/vehicles/{}", env.vehicle_b),
            Some(&session.token),
            Some(serde_json::json!({"plate": "XYZ-999"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_public_paths_without_session() {
        let env = setup().await;

        for path in ["/health", "/services", "/login"] {
            let (status, _, _) = send(&env.router, "GET", path, None, None).await;
            assert_eq!(status, StatusCode::OK, "{path}");
        }

        let (status, _, _) = send(&env.router, "GET", "/no/such/route", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
