//! Data models mirroring the LeitnerLang contract's types.
//!
//! Everything here is a transient, possibly-stale copy of remote state.
//! The ledger owns card levels, scheduling, and aggregate statistics; the
//! client only caches them for display and for the in-session queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Level at which a card leaves the active rotation for good.
pub const GRADUATED_LEVEL: u8 = 5;

/// A single flashcard, as returned by the due-cards query.
///
/// Field names on the wire follow the contract's camelCase convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_id: u64,

    pub front_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_phonetic: Option<String>,
    pub front_language: String,

    pub back_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_phonetic: Option<String>,
    pub back_language: String,

    /// Current Leitner level. Semantics owned by the contract; higher means
    /// longer spacing, `GRADUATED_LEVEL` means retired from the queue.
    pub current_level: u8,

    // Originating deck, when the query joins it in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_concept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_meaning: Option<String>,
}

impl Card {
    pub fn is_graduated(&self) -> bool {
        self.current_level >= GRADUATED_LEVEL
    }

    /// Human label for the card's level, matching the contract's wording.
    pub fn level_description(&self) -> &'static str {
        match self.current_level {
            0 => "New",
            1 | 2 => "Learning",
            3 | 4 => "Reviewing",
            _ => "Mastered",
        }
    }
}

/// Aggregate queue metadata for the account's current Leitner day.
///
/// Computed entirely by the ledger; refreshed after any mutation that could
/// change it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    pub due_count: usize,
    #[serde(rename = "isLeitnerDayComplete")]
    pub day_complete: bool,
    pub total_cards: u64,
    pub total_reviews: u64,
    pub streak_days: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub recommendation: String,
}

/// A user profile. Created once per account; read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub primary_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_cards: u64,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub streak_days: u32,
}

/// Summary info for a deck defined on the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckInfo {
    #[serde(rename = "id")]
    pub deck_id: u64,
    pub concept: String,
    pub meaning: String,
}

/// Running statistics for the active review session.
///
/// Purely a UI affordance: never persisted, reset when a session starts or a
/// Leitner day is completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub reviewed: u32,
    pub correct: u32,
    pub incorrect: u32,
}

impl SessionStats {
    pub fn record(&mut self, correct: bool) {
        self.reviewed += 1;
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    /// Accuracy as a whole percentage, or `None` before the first answer.
    pub fn accuracy(&self) -> Option<u32> {
        if self.reviewed == 0 {
            return None;
        }
        Some((self.correct * 100 + self.reviewed / 2) / self.reviewed)
    }
}
