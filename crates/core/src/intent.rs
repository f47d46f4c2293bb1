//! Keyword-containment intent and language tagging.
//!
//! Classification is deliberately naive: lowercase the message and test
//! substring containment against fixed keyword groups in priority order.
//! Overlaps between groups are resolved by that order alone, and a keyword
//! matching inside a longer word counts as a match. Both behaviors are
//! load-bearing for reply parity and must not be "fixed" here.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Order,
    StockCheck,
    Greeting,
    Handoff,
    General,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Id,
}

const ENGLISH_KEYWORDS: &[&str] = &["hello", "how", "what", "order", "product"];
const INDONESIAN_KEYWORDS: &[&str] = &["halo", "apa", "bagaimana", "pesan", "produk"];

pub const ORDER_KEYWORDS: &[&str] = &["pesan", "order", "beli", "buy"];
pub const STOCK_KEYWORDS: &[&str] = &["stok", "stock", "tersedia"];
const GREETING_KEYWORDS: &[&str] = &["halo", "hi", "hello"];
const HANDOFF_KEYWORDS: &[&str] = &["agent", "manusia", "human"];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Tag the message language. English keywords are tested first, so a
/// message matching both sets resolves to English; no match defaults to
/// English as well.
pub fn detect_language(text: &str) -> Language {
    let lowered = text.to_lowercase();
    if contains_any(&lowered, ENGLISH_KEYWORDS) {
        Language::En
    } else if contains_any(&lowered, INDONESIAN_KEYWORDS) {
        Language::Id
    } else {
        Language::En
    }
}

/// Tag the message intent. Total over all inputs; the groups are tested in
/// order-of-priority and the first containment match wins.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    if contains_any(&lowered, ORDER_KEYWORDS) {
        Intent::Order
    } else if contains_any(&lowered, STOCK_KEYWORDS) {
        Intent::StockCheck
    } else if contains_any(&lowered, GREETING_KEYWORDS) {
        Intent::Greeting
    } else if contains_any(&lowered, HANDOFF_KEYWORDS) {
        Intent::Handoff
    } else {
        Intent::General
    }
}
