//! Local rule-based responder used when no endpoint is configured.
//!
//! Replies are picked by case-insensitive keyword matching anywhere in the
//! text. Patterns are tried in order and the first match wins; anything else
//! gets the general menu.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use premier_types::error::ResponderError;

use super::provider::Responder;

/// Ordered keyword routes. Order matters: "car loan eligibility" is a car question.
static ROUTES: LazyLock<Vec<(Regex, Topic)>> = LazyLock::new(|| {
    [
        (r"(?i)home|house|mortgage", Topic::HomeLoan),
        (r"(?i)car|auto", Topic::CarLoan),
        (r"(?i)eligible|eligibility|qualif", Topic::Eligibility),
    ]
    .into_iter()
    .map(|(pattern, topic)| {
        (
            Regex::new(pattern).expect("keyword route pattern is valid"),
            topic,
        )
    })
    .collect()
});

/// What a visitor's message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    HomeLoan,
    CarLoan,
    Eligibility,
    General,
}

impl Topic {
    /// Route `text` to a topic.
    pub fn classify(text: &str) -> Topic {
        ROUTES
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, topic)| *topic)
            .unwrap_or(Topic::General)
    }

    /// The canned reply for this topic.
    pub fn prompt(self) -> &'static str {
        match self {
            Topic::HomeLoan => {
                "I can help with home loans! I'm forwarding your question to our Home Loan \
                 specialist. Are you buying a new home or refinancing an existing mortgage?"
            }
            Topic::CarLoan => {
                "Great, let's talk car loans! I'm forwarding your question to our Car Loan \
                 specialist. Are you financing a new or a used vehicle?"
            }
            Topic::Eligibility => {
                "Happy to check your loan eligibility. Could you share your monthly income, \
                 any existing loans, and the amount you'd like to borrow?"
            }
            Topic::General => {
                "Hello! I'm the Premier Bank assistant. I can help you with:\n\
                 - Home loans\n\
                 - Car loans\n\
                 - Loan eligibility\n\
                 What would you like to know?"
            }
        }
    }
}

/// Replies from the keyword table after a fixed artificial delay.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    delay: Duration,
}

impl CannedResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No simulated latency. Used by the development endpoint.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Responder for CannedResponder {
    fn name(&self) -> &str {
        "canned"
    }

    async fn respond(&self, text: &str) -> Result<String, ResponderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let topic = Topic::classify(text);
        debug!(?topic, "canned reply selected");
        Ok(topic.prompt().to_string())
    }
}
