//! Remote ledger client: the async boundary to the LeitnerLang contract.
//!
//! The session controller consumes this trait; it never interprets account
//! address formats or wire encodings itself. All durable state lives behind
//! these nine operations.

mod http;

pub use http::HttpLedger;

use async_trait::async_trait;

use crate::models::{Card, DeckInfo, Profile, QueueStatus};

/// A normalized account address.
///
/// Wallet SDKs hand back addresses in several shapes: canonical `0x` + 16 hex
/// digits, bare 16 hex digits, or a 42-character EVM-style address whose tail
/// embeds the ledger address. Normalization happens here, once, so the rest
/// of the client can treat the address as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Self {
        let cleaned = raw.trim();

        if let Some(hex) = cleaned.strip_prefix("0x") {
            if hex.len() == 16 && is_hex(hex) {
                return Self(cleaned.to_string());
            }
            // EVM-style address: the ledger address is the trailing 16 hex digits
            if cleaned.len() == 42 && is_hex(hex) {
                let tail = &cleaned[cleaned.len() - 16..];
                log::warn!("EVM-style address {cleaned} given, using tail 0x{tail}");
                return Self(format!("0x{tail}"));
            }
        } else if cleaned.len() == 16 && is_hex(cleaned) {
            return Self(format!("0x{cleaned}"));
        }

        // Pass through and let the ledger reject it if it is unusable
        log::warn!("could not normalize account address: {cleaned}");
        Self(cleaned.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Errors surfaced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ledger rejected the operation: {message}")]
    Rejected { message: String },

    #[error("unexpected response from ledger gateway: {0}")]
    Malformed(String),
}

impl LedgerError {
    /// The one rejection the client recovers from instead of surfacing: an
    /// attempt to set up a profile for an account that already has one.
    pub fn is_duplicate_profile(&self) -> bool {
        matches!(self, Self::Rejected { message } if message.contains("Profile already exists"))
    }
}

/// Read and write access to the LeitnerLang ledger for one network.
///
/// Queries are read-only and may return stale data; mutations are
/// acknowledged when the ledger has accepted them, but a subsequent query is
/// not guaranteed to reflect them yet (eventual consistency).
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Cards due for review right now. An empty list is a normal result.
    async fn due_cards(&self, account: &Address) -> Result<Vec<Card>, LedgerError>;

    /// Aggregate metadata for the account's current Leitner day.
    async fn queue_status(&self, account: &Address) -> Result<QueueStatus, LedgerError>;

    /// The account's profile, if one has been set up.
    async fn profile(&self, account: &Address) -> Result<Option<Profile>, LedgerError>;

    /// All decks defined on the ledger.
    async fn all_decks(&self) -> Result<Vec<DeckInfo>, LedgerError>;

    /// The cards belonging to one deck.
    async fn deck_cards(&self, deck_id: u64) -> Result<Vec<Card>, LedgerError>;

    /// Record a review outcome. The sole write on the answer path.
    async fn review_card(&self, card_id: u64, correct: bool) -> Result<(), LedgerError>;

    /// Rotate the account's queue to the next Leitner day.
    async fn complete_day(&self) -> Result<(), LedgerError>;

    /// Enroll a deck's cards for the given languages into the account's queue.
    async fn enroll_cards(&self, deck_id: u64, languages: &[String]) -> Result<(), LedgerError>;

    /// Create the account's profile. Rejected if one already exists.
    async fn setup_profile(&self, primary_language: &str) -> Result<(), LedgerError>;
}
