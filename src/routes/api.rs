//! Resource routes. Static segments are registered alongside the /:id
//! captures; axum gives static segments precedence.

use crate::handlers::{enrollment, plan, student};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(student::list).post(student::create))
        .route("/students/inactive", get(student::list_inactive))
        .route("/students/type/:role", get(student::list_by_role))
        .route("/students/search", get(student::search))
        .route("/students/filter", get(student::filter))
        .route(
            "/students/without-enrollment",
            get(student::list_without_enrollment),
        )
        .route("/students/stats", get(student::stats))
        .route("/students/count/:role", get(student::count_by_role))
        .route("/students/email/:email", get(student::get_by_email))
        .route("/students/cpf/:cpf", get(student::get_by_cpf))
        .route(
            "/students/matriculation/:number",
            get(student::get_by_matriculation),
        )
        .route(
            "/students/:id",
            get(student::get)
                .put(student::update)
                .delete(student::deactivate),
        )
        .route("/students/:id/reactivate", post(student::reactivate))
        .route("/students/:id/enrollments", get(student::enrollments))
        .route("/students/:id/workouts", get(student::workouts))
        .route("/students/:id/evaluations", get(student::evaluations))
        .route("/plans", get(plan::list).post(plan::create))
        .route(
            "/plans/:id",
            get(plan::get).put(plan::update).delete(plan::delete),
        )
        .route("/enrollments", post(enrollment::create))
        .route("/enrollments/overdue", get(enrollment::list_overdue))
        .route("/enrollments/count", get(enrollment::count_active))
        .route("/enrollments/:id", get(enrollment::get))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    // Lazy pool: the URL is parsed but no connection is made, so requests
    // that fail before reaching the database can be exercised offline.
    fn app() -> Router {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/akdemia_test")
            .expect("valid url");
        api_routes(AppState::new(pool))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_student_with_missing_fields_is_400() {
        let resp = app().oneshot(post_json("/students", "{}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_student_with_unknown_role_is_400() {
        let body = r#"{"name":"Ana Souza","email":"ana@example.com",
                       "cpf":"12345678901","phone":"11999990000","role":"COACH"}"#;
        let resp = app().oneshot(post_json("/students", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_enrollment_with_wrong_typed_field_is_400() {
        let body = r#"{"studentId":"one","planId":1,
                       "startDate":"2025-01-01","endDate":"2025-02-01"}"#;
        let resp = app().oneshot(post_json("/enrollments", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_role_path_segment_is_400() {
        let req = Request::builder()
            .uri("/students/type/coach")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let req = Request::builder()
            .uri("/nonexistent")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
