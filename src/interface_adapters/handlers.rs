use crate::domain::{Authorizer, FieldSettings, QrError, UrlRejection};
use crate::interface_adapters::field::{FieldContext, FieldType, QrCodeField};
use crate::interface_adapters::html::{GENERIC_ERROR_MESSAGE, img_tag};
use crate::interface_adapters::protocol::{
    FieldSettingsPayload, RefreshRequest, RefreshResponse, RenderFieldRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::RefreshPreviewUseCase;
use axum::{
    Form, Json,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

pub const NONCE_HEADER: &str = "x-qr-nonce";

const URL_REQUIRED_MESSAGE: &str = "URL is required.";
const INVALID_URL_MESSAGE: &str = "Invalid URL. Please enter a valid http or https URL.";
const FORBIDDEN_MESSAGE: &str = "Security check failed.";

type ErrorReply = (StatusCode, Json<RefreshResponse>);

// Refresh body decoded from either JSON or a urlencoded form, picked by
// content type. Anything that is not JSON goes through the form extractor,
// which rejects non-form bodies with 415.
pub struct RefreshPayload(pub RefreshRequest);

impl<S> FromRequest<S> for RefreshPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<RefreshRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(payload))
        } else {
            let Form(payload) = Form::<RefreshRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(payload))
        }
    }
}

// Handler for re-rendering the preview while the editor types.
#[tracing::instrument(
    name = "refresh_preview",
    skip_all,
    fields(request_id = %Uuid::new_v4())
)]
pub async fn refresh_preview(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RefreshPayload(payload): RefreshPayload,
) -> Result<Json<RefreshResponse>, ErrorReply> {
    let use_case = RefreshPreviewUseCase {
        authorizer: state.authorizer.clone(),
        encoder: state.encoder.clone(),
    };

    let image = use_case
        .execute(payload.into_input(header_nonce(&headers)))
        .map_err(map_qr_error)?;

    tracing::debug!(size = image.width_px(), "qr preview generated");

    Ok(Json(RefreshResponse::ok(img_tag(&image))))
}

// Handler for the synchronous editor render path. The body is decoded only
// after the gate, so unauthorized callers always get 403.
#[tracing::instrument(
    name = "render_field",
    skip_all,
    fields(request_id = %Uuid::new_v4())
)]
pub async fn render_field(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Html<String>, Response> {
    // The widget embeds the nonce, so only authorized callers may render it.
    if !state.authorizer.is_authorized(header_nonce(&headers).as_deref()) {
        return Err(map_qr_error(QrError::Unauthorized).into_response());
    }

    let Json(request) =
        Json::<RenderFieldRequest>::from_bytes(&body).map_err(IntoResponse::into_response)?;
    tracing::debug!(field_key = %request.key, "rendering qr field");

    let settings = request
        .settings
        .map(FieldSettingsPayload::into_settings)
        .unwrap_or_else(FieldSettings::defaults);
    let field = QrCodeField {
        encoder: state.encoder.clone(),
    };
    let html = field.render_field(&FieldContext {
        name: &request.name,
        key: &request.key,
        value: request.value.as_deref(),
        settings: &settings,
        nonce: state.widget_nonce.as_deref(),
        refresh_url: &state.refresh_url,
    });

    Ok(Html(html))
}

fn header_nonce(headers: &HeaderMap) -> Option<String> {
    headers
        .get(NONCE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

// Helper to build a JSON error envelope.
fn error_reply(status: StatusCode, message: &str) -> ErrorReply {
    (status, Json(RefreshResponse::error(message)))
}

// Validation errors get specific messages; encoder failures stay generic and
// keep the 200 + `success: false` envelope.
fn map_qr_error(err: QrError) -> ErrorReply {
    match err {
        QrError::InvalidUrl(UrlRejection::Missing) => {
            error_reply(StatusCode::BAD_REQUEST, URL_REQUIRED_MESSAGE)
        }
        QrError::InvalidUrl(UrlRejection::Malformed | UrlRejection::DisallowedScheme) => {
            error_reply(StatusCode::BAD_REQUEST, INVALID_URL_MESSAGE)
        }
        QrError::Unauthorized => {
            tracing::warn!("rejected unauthorized qr request");
            error_reply(StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE)
        }
        QrError::EncodingFailure => error_reply(StatusCode::OK, GENERIC_ERROR_MESSAGE),
    }
}
