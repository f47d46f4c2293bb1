//! HTTP surface: the provider webhook and the static status page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use warung_core::IncomingMessage;

use crate::service::ReplyService;
use crate::twiml;

#[derive(Clone)]
pub struct WebhookState {
    pub service: Arc<ReplyService>,
}

/// Provider form payload. Field names follow the provider convention; both
/// default to empty so a malformed post still yields a best-effort reply.
#[derive(Debug, Deserialize)]
pub struct InboundForm {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: String,
}

pub fn router(service: Arc<ReplyService>) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/webhook", post(webhook))
        .with_state(WebhookState { service })
}

/// One message in, one TwiML envelope out, always 200.
async fn webhook(State(state): State<WebhookState>, Form(form): Form<InboundForm>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4().to_string();
    let message = IncomingMessage::new(form.from, form.body);

    info!(
        event_name = "webhook.message.received",
        correlation_id = %correlation_id,
        body_len = message.body.len(),
        "inbound webhook message"
    );

    let reply = state.service.reply_to(&message, &correlation_id).await;

    info!(
        event_name = "webhook.message.replied",
        correlation_id = %correlation_id,
        reply_len = reply.len(),
        "reply serialized"
    );

    ([(header::CONTENT_TYPE, "application/xml")], twiml::message_response(&reply))
}

/// Static status fragment for manual smoke checks; carries no logic.
async fn status_page() -> Html<&'static str> {
    Html(
        "<h1>Warung Customer Service Bot</h1>\
         <p>Webhook aktif di: /webhook</p>\
         <p>Database produk: sqlite (tabel products)</p>\
         <p>API: DeepSeek-compatible chat completions</p>",
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tower::util::ServiceExt;

    use warung_agent::FallbackResponder;
    use warung_core::Product;
    use warung_db::InMemoryProductRepository;

    use crate::service::ReplyService;

    use super::router;

    fn test_router() -> axum::Router {
        let repo = Arc::new(InMemoryProductRepository::new(vec![Product {
            id: 1,
            name: "Produk A".to_string(),
            stock: 10,
            price: Decimal::new(100_000, 0),
            created_at: Utc::now(),
        }]));
        let service =
            Arc::new(ReplyService::new(repo, FallbackResponder::new(None, false), None));
        router(service)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn webhook_replies_with_twiml_envelope() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("Body=hello&From=%2B628123456789"))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).expect("content type"),
            "application/xml"
        );

        let body = body_string(response).await;
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(body.contains("<Message>Hello! How can I help you today?</Message>"));
    }

    #[tokio::test]
    async fn webhook_trims_whitespace_around_body() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("Body=++hello++&From=%2B628123456789"))
                    .expect("request"),
            )
            .await
            .expect("response");

        let body = body_string(response).await;
        assert!(body.contains("<Message>Hello! How can I help you today?</Message>"));
    }

    #[tokio::test]
    async fn order_flow_round_trips_through_the_webhook() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("Body=Beli+3+Produk+A&From=%2B628123456789"))
                    .expect("request"),
            )
            .await
            .expect("response");

        let body = body_string(response).await;
        assert!(body.contains(
            "Pesanan Anda untuk 3 produk a telah diproses. Total harga: Rp 300,000."
        ));
    }

    #[tokio::test]
    async fn missing_form_fields_still_produce_a_reply() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(""))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        // Empty body classifies as general; with no AI endpoint configured
        // the localized fallback error comes back.
        assert!(body.contains("<Message>Sorry, there was a system error.</Message>"));
    }

    #[tokio::test]
    async fn status_page_names_the_webhook_path() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("/webhook"));
        assert!(body.contains("products"));
    }
}
