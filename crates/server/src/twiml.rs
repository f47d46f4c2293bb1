//! Minimal TwiML messaging envelope.
//!
//! The provider expects exactly one `<Message>` per response. Only
//! serialization lives here; there is no inbound TwiML.

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Wrap a reply body in the provider envelope, escaping XML specials.
pub fn message_response(body: &str) -> String {
    format!("{XML_HEADER}<Response><Message>{}</Message></Response>", escape_text(body))
}

fn escape_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
