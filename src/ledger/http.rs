//! HTTP implementation of [`LedgerClient`] against a LeitnerLang gateway.
//!
//! The gateway wraps the contract behind plain JSON endpoints and signs
//! mutations with the wallet session it holds; this client only speaks
//! typed requests. Every operation has a fixed request shape, so no argument
//! type is ever inferred at runtime.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Address, LedgerClient, LedgerError};
use crate::models::{Card, DeckInfo, Profile, QueueStatus};

pub struct HttpLedger {
    http: reqwest::Client,
    base: String,
}

impl HttpLedger {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, LedgerError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Self::decode(resp).await
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, LedgerError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, LedgerError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        // Contract rejections come back as { "error": "..." }
        let text = resp.text().await.unwrap_or_default();
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
            return Err(LedgerError::Rejected { message: body.error });
        }
        Err(LedgerError::Malformed(format!("{status}: {text}")))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Acknowledgement for a mutation; the transaction id is logged, not used.
#[derive(Deserialize)]
struct Ack {
    #[serde(default, rename = "transactionId")]
    transaction_id: Option<String>,
}

impl Ack {
    fn log(self, what: &str) {
        if let Some(id) = self.transaction_id {
            log::debug!("{what} sealed in transaction {id}");
        }
    }
}

// Fixed request bodies, one per mutating operation.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewBody {
    card_id: u64,
    correct: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnrollBody<'a> {
    deck_id: u64,
    languages: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetupProfileBody<'a> {
    primary_language: &'a str,
}

#[async_trait]
impl LedgerClient for HttpLedger {
    async fn due_cards(&self, account: &Address) -> Result<Vec<Card>, LedgerError> {
        self.get_json(&format!("/v1/accounts/{account}/due-cards")).await
    }

    async fn queue_status(&self, account: &Address) -> Result<QueueStatus, LedgerError> {
        self.get_json(&format!("/v1/accounts/{account}/queue")).await
    }

    async fn profile(&self, account: &Address) -> Result<Option<Profile>, LedgerError> {
        // The gateway answers 404 for accounts without a profile
        let resp = self
            .http
            .get(self.url(&format!("/v1/accounts/{account}/profile")))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::decode(resp).await?))
    }

    async fn all_decks(&self) -> Result<Vec<DeckInfo>, LedgerError> {
        self.get_json("/v1/decks").await
    }

    async fn deck_cards(&self, deck_id: u64) -> Result<Vec<Card>, LedgerError> {
        self.get_json(&format!("/v1/decks/{deck_id}/cards")).await
    }

    async fn review_card(&self, card_id: u64, correct: bool) -> Result<(), LedgerError> {
        let ack: Ack = self
            .post_json("/v1/reviews", &ReviewBody { card_id, correct })
            .await?;
        ack.log("review");
        Ok(())
    }

    async fn complete_day(&self) -> Result<(), LedgerError> {
        let ack: Ack = self.post_json("/v1/day-completions", &()).await?;
        ack.log("day completion");
        Ok(())
    }

    async fn enroll_cards(&self, deck_id: u64, languages: &[String]) -> Result<(), LedgerError> {
        let ack: Ack = self
            .post_json("/v1/enrollments", &EnrollBody { deck_id, languages })
            .await?;
        ack.log("enrollment");
        Ok(())
    }

    async fn setup_profile(&self, primary_language: &str) -> Result<(), LedgerError> {
        let ack: Ack = self
            .post_json("/v1/profiles", &SetupProfileBody { primary_language })
            .await?;
        ack.log("profile setup");
        Ok(())
    }
}
