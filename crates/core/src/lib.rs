//! Domain core for the warung webhook bot.
//!
//! Everything in this crate is synchronous and side-effect free: message
//! classification, order-command parsing, the localized reply catalog, and
//! configuration loading. Persistence lives in `warung-db`, the AI fallback
//! in `warung-agent`, and the HTTP surface in `warung-server`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod intent;
pub mod order;
pub mod replies;

pub use domain::message::IncomingMessage;
pub use domain::product::Product;
pub use errors::OrderError;
pub use intent::{classify, detect_language, Intent, Language};
pub use order::OrderCommand;
