/*
 * Responsibility
 * - JSON body を受ける extractor (axum::Json の代わり)
 * - 空 body は `{}` として読む (フィールドの欠落は DTO の default + validate() に任せる)
 * - 読めない body は 400 {"errors":[..]} にそろえる (422/415 の text/plain を返さない)
 */
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const MALFORMED_BODY: &str = "The request body must be a JSON object";

pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // body limit 超過などはそのまま axum の応答 (413 など) を返す
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let raw: &[u8] = if bytes.trim_ascii().is_empty() {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(raw).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            AppError::Validation(vec![MALFORMED_BODY.to_string()]).into_response()
        })
    }
}
