use std::sync::Arc;

use tracing::warn;

use warung_core::replies::{self, format_rupiah};
use warung_core::{Language, Product};

use crate::llm::{CompletionClient, CompletionError};

const SYSTEM_PROMPT_EN: &str = "You are a helpful customer service assistant. ";

/// Render the catalog the way the Indonesian system prompt embeds it, one
/// product per line.
pub fn product_listing(products: &[Product]) -> String {
    products
        .iter()
        .map(|product| {
            format!(
                "- {}: {} tersedia, Harga: Rp {}",
                product.name,
                product.stock,
                format_rupiah(product.price)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the system prompt for the fallback call. Indonesian prompts carry
/// the full product listing as context; English ones use a generic
/// preamble, mirroring the production bot.
pub fn system_prompt(language: Language, products: &[Product]) -> String {
    match language {
        Language::En => SYSTEM_PROMPT_EN.to_string(),
        Language::Id => format!(
            "Anda adalah asisten layanan pelanggan yang membantu. \
             Daftar Produk yang tersedia: {}.",
            product_listing(products)
        ),
    }
}

/// Answers general-intent messages via the completion endpoint. Total: any
/// failure, including a missing endpoint configuration, becomes a localized
/// best-effort reply.
pub struct FallbackResponder {
    client: Option<Arc<dyn CompletionClient>>,
    verbose_errors: bool,
}

impl FallbackResponder {
    pub fn new(client: Option<Arc<dyn CompletionClient>>, verbose_errors: bool) -> Self {
        Self { client, verbose_errors }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn respond(
        &self,
        question: &str,
        language: Language,
        products: &[Product],
    ) -> String {
        let Some(client) = &self.client else {
            return replies::system_error(language).to_string();
        };

        let system = system_prompt(language, products);
        match client.complete(&system, question).await {
            Ok(answer) => answer,
            Err(CompletionError::Transport(error)) => {
                warn!(
                    event_name = "agent.completion.transport_error",
                    error = %error,
                    "completion transport failed"
                );
                if self.verbose_errors {
                    format!("Error: {error}")
                } else {
                    replies::system_error(language).to_string()
                }
            }
            Err(error) => {
                warn!(
                    event_name = "agent.completion.failed",
                    error = %error,
                    "completion endpoint rejected request"
                );
                replies::system_error(language).to_string()
            }
        }
    }
}
