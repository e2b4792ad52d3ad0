//! Basic 認証の gate → Principal を extensions に入れる
//!
//! - 拒否理由 (ヘッダ無し / ユーザー無し / パスワード不一致) はログにだけ残す
//! - レスポンスはどの理由でも 401 `{"message":"Access Denied"}` で同一
//! - 成功時のみ next を 1 回だけ呼ぶ

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::AuthOutcome;
use crate::state::AppState;

/// Put the gate in front of every route already on `router`.
///
/// ```ignore
/// let protected = Router::new().route("/courses", post(create_course));
/// let protected = middleware::auth::basic::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, basic_auth_middleware))
}

async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let outcome = state
        .auth
        .authenticate(req.headers().get(header::AUTHORIZATION))
        .await?;

    let principal = match outcome {
        AuthOutcome::Granted(principal) => principal,
        AuthOutcome::Denied(denial) => {
            tracing::warn!(
                reason = %denial,
                username = denial.username().unwrap_or("-"),
                "authentication failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(user_id = principal.id, "authentication successful");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{Extension, routing::get};
    use tower::ServiceExt;

    use super::*;
    use crate::repos::memory::MemoryStore;
    use crate::services::auth::{
        Principal,
        password::{PasswordHashing, cheap},
    };

    fn counted_app(hits: Arc<AtomicUsize>) -> Router {
        let hasher = cheap();
        let digest = hasher.hash("secret").unwrap();
        let store = Arc::new(MemoryStore::new().with_user(7, "joe@example.com", &digest));
        let state = AppState::new(store.clone(), store, Arc::new(hasher));

        let router = Router::new().route(
            "/probe",
            get(move |Extension(principal): Extension<Principal>| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    principal.email_address
                }
            }),
        );

        apply(router, state.clone()).with_state(state)
    }

    async fn probe(app: &Router, auth: Option<&str>) -> axum::http::StatusCode {
        let mut req = Request::builder().uri("/probe");
        if let Some(auth) = auth {
            req = req.header(header::AUTHORIZATION, auth);
        }
        let res = app
            .clone()
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap();
        res.status()
    }

    #[tokio::test]
    async fn continuation_runs_once_on_grant_and_never_on_deny() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = counted_app(hits.clone());

        assert_eq!(probe(&app, None).await, 401);
        assert_eq!(probe(&app, Some("Basic am9lQGV4YW1wbGUuY29tOndyb25n")).await, 401);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        assert_eq!(probe(&app, Some("Basic am9lQGV4YW1wbGUuY29tOnNlY3JldA==")).await, 200);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
