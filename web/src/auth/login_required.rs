//! Login-required middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::{CurrentUser, UserId};
use crate::AppState;

/// Extract the authenticated subject from the configured header
fn extract_subject<'a>(request: &'a Request<Body>, header: &str) -> Option<&'a str> {
    request
        .headers()
        .get(header)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Build `{login_url}?next={path}`. Slashes in the path are kept readable.
fn login_redirect_url(login_url: &str, next: &str) -> String {
    let separator = if login_url.contains('?') { '&' } else { '?' };
    let next = urlencoding::encode(next).replace("%2F", "/");
    format!("{}{}next={}", login_url, separator, next)
}

/// Login-required middleware
///
/// Injects the `CurrentUser` into request extensions. Anonymous requests are
/// redirected to the login page, with the requested path in `next`, and never
/// reach the handler.
pub async fn login_required(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(subject) = extract_subject(&request, &state.auth_user_header) else {
        let path = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        tracing::debug!(path = %path, "Anonymous request, redirecting to login");
        return Redirect::to(&login_redirect_url(&state.login_url, path)).into_response();
    };

    let user = CurrentUser {
        id: UserId::from(subject),
    };
    request.extensions_mut().insert(user);

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, StatusCode},
        middleware,
        routing::get,
        Extension, Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::app::ResumeService;
    use crate::test_utils::{InMemoryResumeItemRepository, InMemoryResumeRepository, JsonRenderer};

    fn test_state() -> AppState {
        AppState {
            resume_service: Arc::new(ResumeService::new(
                Arc::new(InMemoryResumeRepository::new()),
                Arc::new(InMemoryResumeItemRepository::new()),
            )),
            renderer: Arc::new(JsonRenderer),
            login_url: "/accounts/login/".to_string(),
            auth_user_header: "x-forwarded-user".to_string(),
        }
    }

    async fn whoami(Extension(user): Extension<CurrentUser>) -> String {
        user.id.to_string()
    }

    fn app() -> Router {
        let state = test_state();
        Router::new()
            .route("/resumes/", get(whoami))
            .layer(middleware::from_fn_with_state(state.clone(), login_required))
            .with_state(state)
    }

    #[test]
    fn login_url_keeps_slashes_and_encodes_query() {
        assert_eq!(
            login_redirect_url("/accounts/login/", "/resumes/1/edit/"),
            "/accounts/login/?next=/resumes/1/edit/"
        );
        assert_eq!(
            login_redirect_url("/accounts/login/", "/resumes/?a=b"),
            "/accounts/login/?next=/resumes/%3Fa%3Db"
        );
        assert_eq!(
            login_redirect_url("/login?lang=en", "/resumes/"),
            "/login?lang=en&next=/resumes/"
        );
    }

    #[tokio::test]
    async fn anonymous_request_redirects_to_login() {
        let response = app()
            .oneshot(Request::get("/resumes/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/accounts/login/?next=/resumes/"
        );
    }

    #[tokio::test]
    async fn blank_header_is_anonymous() {
        let response = app()
            .oneshot(
                Request::get("/resumes/")
                    .header("x-forwarded-user", "   ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn authenticated_request_reaches_handler() {
        let response = app()
            .oneshot(
                Request::get("/resumes/")
                    .header("x-forwarded-user", "alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"alice");
    }
}
