/// One inbound webhook message. Never persisted; each message produces
/// exactly one reply and carries no cross-message state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    pub from: String,
    pub body: String,
}

impl IncomingMessage {
    pub fn new(from: impl Into<String>, body: impl Into<String>) -> Self {
        Self { from: from.into(), body: body.into() }
    }

    /// Provider payloads arrive with surrounding whitespace; the classifier
    /// and parsers all expect the trimmed body.
    pub fn trimmed_body(&self) -> &str {
        self.body.trim()
    }
}
