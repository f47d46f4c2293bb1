//! Reply dispatch: one inbound message in, one reply text out.
//!
//! This is the only place where the classifier, the catalog repository, and
//! the AI fallback meet. Every branch returns a reply string; repository
//! failures degrade to the localized system-error message instead of
//! surfacing to the transport.

use std::sync::Arc;

use tracing::{info, warn};

use warung_agent::FallbackResponder;
use warung_core::intent::{self, Intent, Language, STOCK_KEYWORDS};
use warung_core::replies;
use warung_core::{order, IncomingMessage, OrderError};
use warung_db::{ProductRepository, RepositoryError};

pub struct ReplyService {
    products: Arc<dyn ProductRepository>,
    responder: FallbackResponder,
    agent_contact: Option<String>,
}

impl ReplyService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        responder: FallbackResponder,
        agent_contact: Option<String>,
    ) -> Self {
        Self { products, responder, agent_contact }
    }

    pub fn fallback_enabled(&self) -> bool {
        self.responder.is_enabled()
    }

    /// Classify and answer one message. Total: every input yields a reply.
    pub async fn reply_to(&self, message: &IncomingMessage, correlation_id: &str) -> String {
        let body = message.trimmed_body();
        let language = intent::detect_language(body);
        let intent = intent::classify(body);

        info!(
            event_name = "service.message.classified",
            correlation_id,
            intent = ?intent,
            language = ?language,
            "inbound message classified"
        );

        match intent {
            Intent::Order => self.handle_order(body, language, correlation_id).await,
            Intent::StockCheck => self.handle_stock_check(body, language, correlation_id).await,
            Intent::Greeting => replies::greeting(language).to_string(),
            Intent::Handoff => self.handle_handoff(language, correlation_id),
            Intent::General => self.handle_general(body, language).await,
        }
    }

    async fn handle_order(
        &self,
        body: &str,
        language: Language,
        correlation_id: &str,
    ) -> String {
        let command = match order::parse_order(body) {
            Ok(command) => command,
            Err(error) => return replies::order_error(&error, language, ""),
        };

        match self.fulfill(&command.fragment, command.quantity).await {
            Ok(total) => {
                info!(
                    event_name = "service.order.fulfilled",
                    correlation_id,
                    quantity = command.quantity,
                    fragment = %command.fragment,
                    "order fulfilled"
                );
                replies::order_confirmation(command.quantity, &command.fragment, total)
            }
            Err(FulfillmentFailure::Order(error)) => {
                replies::order_error(&error, language, &command.fragment)
            }
            Err(FulfillmentFailure::Repository(error)) => {
                warn!(
                    event_name = "service.order.repository_error",
                    correlation_id,
                    error = %error,
                    "order fulfillment hit the repository error path"
                );
                replies::system_error(language).to_string()
            }
        }
    }

    /// Check-then-decrement. The repository's conditional UPDATE re-checks
    /// sufficiency, so a concurrent order that drains stock between the read
    /// and the write surfaces as zero updated rows, not negative stock.
    async fn fulfill(
        &self,
        fragment: &str,
        quantity: i64,
    ) -> Result<rust_decimal::Decimal, FulfillmentFailure> {
        let product = self
            .products
            .find_by_fragment(fragment)
            .await?
            .ok_or(FulfillmentFailure::Order(OrderError::ProductNotFound))?;

        if !product.has_stock_for(quantity) {
            return Err(FulfillmentFailure::Order(OrderError::InsufficientStock {
                available: product.stock,
            }));
        }

        let updated = self.products.decrement_matching(fragment, quantity).await?;
        if updated == 0 {
            let available = self
                .products
                .find_by_fragment(fragment)
                .await?
                .map(|current| current.stock)
                .unwrap_or(product.stock);
            return Err(FulfillmentFailure::Order(OrderError::InsufficientStock { available }));
        }

        Ok(rust_decimal::Decimal::from(quantity) * product.price)
    }

    async fn handle_stock_check(
        &self,
        body: &str,
        language: Language,
        correlation_id: &str,
    ) -> String {
        let fragment = strip_stock_keywords(body);

        match self.products.find_by_fragment(&fragment).await {
            Ok(Some(product)) => {
                replies::stock_report(language, &fragment, product.stock, product.price)
            }
            Ok(None) => replies::stock_not_found(language, &fragment),
            Err(error) => {
                warn!(
                    event_name = "service.stock.repository_error",
                    correlation_id,
                    error = %error,
                    "stock inquiry hit the repository error path"
                );
                replies::system_error(language).to_string()
            }
        }
    }

    fn handle_handoff(&self, language: Language, correlation_id: &str) -> String {
        // No routing is implemented; the contact is logged so an operator
        // can follow up out of band.
        info!(
            event_name = "service.handoff.requested",
            correlation_id,
            agent_contact = self.agent_contact.as_deref().unwrap_or("unconfigured"),
            "handoff acknowledged"
        );
        replies::handoff(language).to_string()
    }

    async fn handle_general(&self, body: &str, language: Language) -> String {
        let products = match self.products.list().await {
            Ok(products) => products,
            Err(error) => {
                warn!(
                    event_name = "service.fallback.catalog_unavailable",
                    error = %error,
                    "catalog unavailable for fallback prompt, continuing without it"
                );
                Vec::new()
            }
        };

        self.responder.respond(body, language, &products).await
    }
}

/// Drop tokens that are themselves stock keywords; the rest of the message
/// is the product-name fragment.
fn strip_stock_keywords(body: &str) -> String {
    body.to_lowercase()
        .split_whitespace()
        .filter(|token| !STOCK_KEYWORDS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

enum FulfillmentFailure {
    Order(OrderError),
    Repository(RepositoryError),
}

impl From<RepositoryError> for FulfillmentFailure {
    fn from(error: RepositoryError) -> Self {
        Self::Repository(error)
    }
}
