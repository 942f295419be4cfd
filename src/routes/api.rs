//! JSON entry point for browser admin frameworks.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::provider::errors::ProviderError;
use crate::provider::http::HttpDataProvider;
use crate::provider::request::{DataEnvelope, DataRequest, dispatch};

/// Status returned to the caller for a failed request. Upstream statuses are
/// forwarded as-is.
pub fn error_status(err: &ProviderError) -> StatusCode {
    if err.is_client_side() {
        return StatusCode::BAD_REQUEST;
    }
    err.status()
        .and_then(|status| StatusCode::from_u16(status.as_u16()).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

#[post("/data-provider")]
/// Runs one `{type, resource, params}` request against the phonebook API.
pub async fn data_provider(
    provider: web::Data<HttpDataProvider>,
    web::Json(envelope): web::Json<DataEnvelope>,
) -> impl Responder {
    let resource = envelope.resource.clone();

    let result = match DataRequest::try_from(envelope) {
        Ok(request) => dispatch(provider.get_ref(), &resource, request).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Data provider request failed: {err}");
            HttpResponse::build(error_status(&err)).json(json!({ "error": err.to_string() }))
        }
    }
}
