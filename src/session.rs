//! The review session controller.
//!
//! Owns the in-memory queue of due cards and applies local feedback on every
//! answer before the ledger hears about it. The local queue is authoritative
//! only until reconciled: a fresh `load` always returns to the ledger's
//! truth.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crate::ledger::{Address, LedgerClient, LedgerError};
use crate::models::{Card, QueueStatus, SessionStats};
use crate::selection::LanguageSelection;

/// How long an answer submission may stay in flight before the session gives
/// up waiting and releases the single-flight guard.
pub const DEFAULT_REVIEW_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session loaded.
    Idle,
    /// A fetch of due cards and queue metadata is in flight.
    Loading,
    /// A non-empty queue; the front card is current.
    Active,
    /// The queue is empty. `day_complete` separates "today's cards all done"
    /// from "nothing due yet"; the two must never be conflated.
    Complete { day_complete: bool },
    /// The last load failed; the caller decides when to retry.
    Failed,
}

pub struct ReviewSession<C> {
    ledger: Arc<C>,
    account: Address,

    phase: SessionPhase,
    queue: VecDeque<Card>,
    answer_revealed: bool,
    stats: SessionStats,
    queue_status: Option<QueueStatus>,

    /// Single-flight guard: one answer submission at a time.
    reviewing: bool,
    /// Set when an optimistic local advance could not be confirmed remotely.
    /// Cleared by the next successful `load`.
    stale: bool,

    review_timeout: Duration,
}

impl<C: LedgerClient> ReviewSession<C> {
    pub fn new(ledger: Arc<C>, account: Address) -> Self {
        Self {
            ledger,
            account,
            phase: SessionPhase::Idle,
            queue: VecDeque::new(),
            answer_revealed: false,
            stats: SessionStats::default(),
            queue_status: None,
            reviewing: false,
            stale: false,
            review_timeout: DEFAULT_REVIEW_TIMEOUT,
        }
    }

    pub fn with_review_timeout(mut self, timeout: Duration) -> Self {
        self.review_timeout = timeout;
        self
    }

    // ══════════════════════════════════════════════════════════════════════
    // Operations
    // ══════════════════════════════════════════════════════════════════════

    /// Fetch due cards and queue metadata, seeding the session.
    ///
    /// On error the session lands in `Failed`; retrying is the caller's
    /// decision, never automatic.
    pub async fn load(&mut self) -> Result<(), LedgerError> {
        self.phase = SessionPhase::Loading;
        self.answer_revealed = false;

        let cards = match self.ledger.due_cards(&self.account).await {
            Ok(cards) => cards,
            Err(e) => {
                self.phase = SessionPhase::Failed;
                return Err(e);
            }
        };
        let status = match self.ledger.queue_status(&self.account).await {
            Ok(status) => status,
            Err(e) => {
                self.phase = SessionPhase::Failed;
                return Err(e);
            }
        };

        // Graduated cards stay out of the rotation no matter what the query
        // returns
        self.queue = cards.into_iter().filter(|c| !c.is_graduated()).collect();
        self.phase = if self.queue.is_empty() {
            SessionPhase::Complete { day_complete: status.day_complete }
        } else {
            SessionPhase::Active
        };
        self.queue_status = Some(status);
        self.stale = false;
        log::info!(
            "session loaded for {}: {} cards due",
            self.account,
            self.queue.len()
        );
        Ok(())
    }

    /// Show the back face of the current card. Idempotent, local only.
    pub fn reveal_answer(&mut self) {
        if self.phase == SessionPhase::Active {
            self.answer_revealed = true;
        }
    }

    /// Apply an answer to the current card.
    ///
    /// Statistics are tallied and the queue is transitioned locally before
    /// any remote call settles, and neither is ever rolled back. A correct
    /// answer removes the card and reports the outcome to the ledger; an
    /// incorrect answer only rotates the card to the back of the queue so it
    /// resurfaces later in the same session.
    pub async fn submit_answer(&mut self, correct: bool) {
        if self.reviewing {
            return;
        }
        let Some(card) = self.queue.front() else {
            return;
        };
        let card_id = card.card_id;

        self.reviewing = true;
        self.stats.record(correct);
        self.answer_revealed = false;

        if correct {
            self.queue.pop_front();

            match tokio::time::timeout(
                self.review_timeout,
                self.ledger.review_card(card_id, true),
            )
            .await
            {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    // Local state has already advanced; the divergence is
                    // surfaced through `is_stale` instead of a rollback.
                    log::warn!("review of card {card_id} not recorded remotely: {e}");
                    self.stale = true;
                }
                Err(_) => {
                    log::warn!("review of card {card_id} timed out");
                    self.stale = true;
                }
            }

            if self.queue.is_empty() {
                // A fresh day may already have cards; the re-fetch decides
                // Active vs Complete. A failed re-fetch shows up as Failed.
                if let Err(e) = self.load().await {
                    log::warn!("re-fetch after exhausting the queue failed: {e}");
                }
            }
        } else {
            // No remote call: the ledger still considers the card due, which
            // a reload will reflect.
            self.queue.rotate_left(1);
        }

        self.reviewing = false;
    }

    /// Close out a completed Leitner day and reset the session statistics.
    ///
    /// Only meaningful in `Complete { day_complete: true }`; otherwise a
    /// no-op. The mutation's failure is logged, not surfaced: the session
    /// continues either way, and the presentation layer moves on to the
    /// enrollment flow followed by a fresh `load`.
    pub async fn complete_day(&mut self) {
        if self.phase != (SessionPhase::Complete { day_complete: true }) {
            return;
        }
        if let Err(e) = self.ledger.complete_day().await {
            log::warn!("day completion not recorded remotely: {e}");
        }
        self.stats = SessionStats::default();
        self.phase = SessionPhase::Idle;
    }

    /// Enroll a deck's cards for the selected languages, then reload.
    ///
    /// A selection that cannot form a front/back pair is refused locally
    /// with no remote call.
    pub async fn enroll_cards(
        &mut self,
        deck_id: u64,
        selection: &LanguageSelection,
    ) -> Result<(), LedgerError> {
        if !selection.is_valid_pair() {
            log::info!("enrollment skipped: {} language(s) selected", selection.len());
            return Ok(());
        }
        self.ledger.enroll_cards(deck_id, selection.languages()).await?;
        self.load().await
    }

    // ══════════════════════════════════════════════════════════════════════
    // Accessors for the presentation layer
    // ══════════════════════════════════════════════════════════════════════

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The card currently shown, if any. Always the queue front.
    pub fn current_card(&self) -> Option<&Card> {
        self.queue.front()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn queue_status(&self) -> Option<&QueueStatus> {
        self.queue_status.as_ref()
    }

    /// True when an optimistic advance could not be confirmed remotely and
    /// the local view may diverge from the ledger until the next reload.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn account(&self) -> &Address {
        &self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeckInfo, Profile, GRADUATED_LEVEL};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory ledger that scripts query responses and records mutations.
    #[derive(Default)]
    struct MockLedger {
        /// Successive responses to `due_cards`; the last entry repeats.
        due_responses: Mutex<VecDeque<Vec<Card>>>,
        status: Mutex<Option<QueueStatus>>,
        reviews: Mutex<Vec<(u64, bool)>>,
        enrollments: Mutex<Vec<(u64, Vec<String>)>>,
        days_completed: Mutex<u32>,
        fail_reviews: bool,
        /// `review_card` never resolves, as with a gateway that accepts the
        /// connection and then stalls.
        hang_reviews: bool,
    }

    impl MockLedger {
        fn scripted(due: Vec<Vec<Card>>, day_complete: bool) -> Self {
            Self {
                due_responses: Mutex::new(due.into()),
                status: Mutex::new(Some(status(day_complete))),
                ..Self::default()
            }
        }

        fn reviews(&self) -> Vec<(u64, bool)> {
            self.reviews.lock().unwrap().clone()
        }
    }

    fn status(day_complete: bool) -> QueueStatus {
        QueueStatus {
            due_count: 0,
            day_complete,
            total_cards: 10,
            total_reviews: 40,
            streak_days: 3,
            status: String::new(),
            recommendation: String::new(),
        }
    }

    fn card(id: u64) -> Card {
        Card {
            card_id: id,
            front_text: format!("front {id}"),
            front_phonetic: None,
            front_language: "English".into(),
            back_text: format!("back {id}"),
            back_phonetic: None,
            back_language: "Spanish".into(),
            current_level: 1,
            deck_concept: None,
            deck_meaning: None,
        }
    }

    #[async_trait]
    impl LedgerClient for MockLedger {
        async fn due_cards(&self, _account: &Address) -> Result<Vec<Card>, LedgerError> {
            let mut responses = self.due_responses.lock().unwrap();
            if responses.len() > 1 {
                Ok(responses.pop_front().unwrap())
            } else {
                responses.front().cloned().ok_or(LedgerError::Malformed("no script".into()))
            }
        }

        async fn queue_status(&self, _account: &Address) -> Result<QueueStatus, LedgerError> {
            self.status
                .lock()
                .unwrap()
                .clone()
                .ok_or(LedgerError::Malformed("no status".into()))
        }

        async fn profile(&self, _account: &Address) -> Result<Option<Profile>, LedgerError> {
            Ok(None)
        }

        async fn all_decks(&self) -> Result<Vec<DeckInfo>, LedgerError> {
            Ok(Vec::new())
        }

        async fn deck_cards(&self, _deck_id: u64) -> Result<Vec<Card>, LedgerError> {
            Ok(Vec::new())
        }

        async fn review_card(&self, card_id: u64, correct: bool) -> Result<(), LedgerError> {
            if self.hang_reviews {
                std::future::pending::<()>().await;
            }
            if self.fail_reviews {
                return Err(LedgerError::Rejected { message: "sealing failed".into() });
            }
            self.reviews.lock().unwrap().push((card_id, correct));
            Ok(())
        }

        async fn complete_day(&self) -> Result<(), LedgerError> {
            *self.days_completed.lock().unwrap() += 1;
            Ok(())
        }

        async fn enroll_cards(
            &self,
            deck_id: u64,
            languages: &[String],
        ) -> Result<(), LedgerError> {
            self.enrollments.lock().unwrap().push((deck_id, languages.to_vec()));
            Ok(())
        }

        async fn setup_profile(&self, _primary_language: &str) -> Result<(), LedgerError> {
            Ok(())
        }
    }

    fn session(ledger: MockLedger) -> ReviewSession<MockLedger> {
        ReviewSession::new(Arc::new(ledger), Address::new("0x17c88b3a4fab12ef"))
    }

    #[tokio::test]
    async fn load_seeds_active_session() {
        let mut s = session(MockLedger::scripted(vec![vec![card(1), card(2)]], false));
        s.load().await.unwrap();

        assert_eq!(s.phase(), SessionPhase::Active);
        assert_eq!(s.queue_len(), 2);
        assert_eq!(s.current_card().unwrap().card_id, 1);
        assert!(!s.answer_revealed());
    }

    #[tokio::test]
    async fn load_with_empty_queue_is_complete_not_an_error() {
        let mut s = session(MockLedger::scripted(vec![vec![]], false));
        s.load().await.unwrap();
        assert_eq!(s.phase(), SessionPhase::Complete { day_complete: false });

        let mut s = session(MockLedger::scripted(vec![vec![]], true));
        s.load().await.unwrap();
        assert_eq!(s.phase(), SessionPhase::Complete { day_complete: true });
    }

    #[tokio::test]
    async fn reveal_is_idempotent_and_active_only() {
        let mut s = session(MockLedger::scripted(vec![vec![]], false));
        s.reveal_answer();
        assert!(!s.answer_revealed());

        let mut s = session(MockLedger::scripted(vec![vec![card(1)]], false));
        s.load().await.unwrap();
        s.reveal_answer();
        s.reveal_answer();
        assert!(s.answer_revealed());
    }

    #[tokio::test]
    async fn incorrect_rotates_card_to_tail_without_remote_call() {
        let ledger = MockLedger::scripted(vec![vec![card(1), card(2), card(3)]], false);
        let mut s = session(ledger);
        s.load().await.unwrap();

        s.reveal_answer();
        s.submit_answer(false).await;

        let order: Vec<u64> = s.queue.iter().map(|c| c.card_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(s.current_card().unwrap().card_id, 2);
        assert_eq!(s.stats(), SessionStats { reviewed: 1, correct: 0, incorrect: 1 });
        assert!(s.ledger.reviews().is_empty());
        assert!(!s.answer_revealed());
    }

    #[tokio::test]
    async fn correct_removes_card_and_reports_once() {
        let ledger = MockLedger::scripted(vec![vec![card(1), card(2), card(3)]], false);
        let mut s = session(ledger);
        s.load().await.unwrap();

        s.reveal_answer();
        s.submit_answer(true).await;

        assert_eq!(s.queue_len(), 2);
        assert_eq!(s.current_card().unwrap().card_id, 2);
        assert_eq!(s.stats(), SessionStats { reviewed: 1, correct: 1, incorrect: 0 });
        assert_eq!(s.ledger.reviews(), vec![(1, true)]);
    }

    #[tokio::test]
    async fn exhausting_the_queue_refetches_and_can_resume() {
        // First fetch: one card. Second fetch (after the correct answer):
        // a fresh day already has a card due.
        let ledger = MockLedger::scripted(vec![vec![card(1)], vec![card(9)]], false);
        let mut s = session(ledger);
        s.load().await.unwrap();

        s.reveal_answer();
        s.submit_answer(true).await;

        assert_eq!(s.phase(), SessionPhase::Active);
        assert_eq!(s.current_card().unwrap().card_id, 9);
    }

    #[tokio::test]
    async fn exhausting_the_queue_with_nothing_due_is_complete() {
        let ledger = MockLedger::scripted(vec![vec![card(1)], vec![]], true);
        let mut s = session(ledger);
        s.load().await.unwrap();

        s.reveal_answer();
        s.submit_answer(true).await;

        assert_eq!(s.phase(), SessionPhase::Complete { day_complete: true });
        assert_eq!(s.queue_len(), 0);
    }

    #[tokio::test]
    async fn failed_review_mutation_keeps_local_advance_and_marks_stale() {
        let ledger = MockLedger {
            fail_reviews: true,
            ..MockLedger::scripted(vec![vec![card(1), card(2)]], false)
        };
        let mut s = session(ledger);
        s.load().await.unwrap();

        s.reveal_answer();
        s.submit_answer(true).await;

        // No rollback: counters and queue advance stand.
        assert_eq!(s.stats(), SessionStats { reviewed: 1, correct: 1, incorrect: 0 });
        assert_eq!(s.current_card().unwrap().card_id, 2);
        assert!(s.is_stale());
    }

    #[tokio::test]
    async fn hung_review_mutation_times_out_and_releases_the_guard() {
        let ledger = MockLedger {
            hang_reviews: true,
            ..MockLedger::scripted(vec![vec![card(1), card(2), card(3)]], false)
        };
        let mut s = session(ledger).with_review_timeout(Duration::from_millis(10));
        s.load().await.unwrap();

        s.reveal_answer();
        s.submit_answer(true).await;

        // The local advance stands and the divergence is visible.
        assert_eq!(s.current_card().unwrap().card_id, 2);
        assert!(s.is_stale());

        // The guard was released: the next answer goes through.
        s.reveal_answer();
        s.submit_answer(true).await;
        assert_eq!(s.current_card().unwrap().card_id, 3);
        assert_eq!(s.stats(), SessionStats { reviewed: 2, correct: 2, incorrect: 0 });
    }

    #[tokio::test]
    async fn graduated_cards_are_dropped_on_load() {
        let mut retired = card(2);
        retired.current_level = GRADUATED_LEVEL;
        let ledger = MockLedger::scripted(vec![vec![card(1), retired, card(3)]], false);
        let mut s = session(ledger);
        s.load().await.unwrap();

        assert_eq!(s.queue_len(), 2);
        let order: Vec<u64> = s.queue.iter().map(|c| c.card_id).collect();
        assert_eq!(order, vec![1, 3]);
    }

    #[tokio::test]
    async fn stale_flag_clears_on_reload() {
        let ledger = MockLedger {
            fail_reviews: true,
            ..MockLedger::scripted(vec![vec![card(1), card(2)]], false)
        };
        let mut s = session(ledger);
        s.load().await.unwrap();
        s.submit_answer(true).await;
        assert!(s.is_stale());

        s.load().await.unwrap();
        assert!(!s.is_stale());
    }

    #[tokio::test]
    async fn submit_without_current_card_is_a_no_op() {
        let mut s = session(MockLedger::scripted(vec![vec![]], false));
        s.load().await.unwrap();

        s.submit_answer(true).await;
        assert_eq!(s.stats(), SessionStats::default());
        assert!(s.ledger.reviews().is_empty());
    }

    #[tokio::test]
    async fn single_flight_guard_blocks_reentry() {
        let mut s = session(MockLedger::scripted(vec![vec![card(1), card(2)]], false));
        s.load().await.unwrap();

        s.reviewing = true;
        s.submit_answer(true).await;
        assert_eq!(s.stats(), SessionStats::default());
        assert_eq!(s.queue_len(), 2);
    }

    #[tokio::test]
    async fn load_failure_surfaces_failed_phase() {
        let ledger = MockLedger::default(); // no scripted responses
        let mut s = session(ledger);
        assert!(s.load().await.is_err());
        assert_eq!(s.phase(), SessionPhase::Failed);
    }

    #[tokio::test]
    async fn complete_day_resets_stats_only_when_day_is_complete() {
        let ledger = MockLedger::scripted(vec![vec![card(1)], vec![]], true);
        let mut s = session(ledger);
        s.load().await.unwrap();
        s.submit_answer(true).await;
        assert_eq!(s.phase(), SessionPhase::Complete { day_complete: true });
        assert_eq!(s.stats().reviewed, 1);

        s.complete_day().await;
        assert_eq!(s.stats(), SessionStats::default());
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(*s.ledger.days_completed.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn complete_day_is_a_no_op_when_nothing_is_due_yet() {
        let ledger = MockLedger::scripted(vec![vec![]], false);
        let mut s = session(ledger);
        s.load().await.unwrap();
        assert_eq!(s.phase(), SessionPhase::Complete { day_complete: false });

        s.complete_day().await;
        assert_eq!(*s.ledger.days_completed.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn enrollment_requires_a_language_pair() {
        let ledger = MockLedger::scripted(vec![vec![]], false);
        let mut s = session(ledger);
        s.load().await.unwrap();

        let mut single = LanguageSelection::new(None);
        single.toggle("English");
        s.enroll_cards(5, &single).await.unwrap();
        assert!(s.ledger.enrollments.lock().unwrap().is_empty());
        assert_eq!(s.phase(), SessionPhase::Complete { day_complete: false });
    }

    #[tokio::test]
    async fn enrollment_sends_languages_and_reloads() {
        let ledger = MockLedger::scripted(vec![vec![], vec![card(1)]], false);
        let mut s = session(ledger);
        s.load().await.unwrap();

        let mut sel = LanguageSelection::new(Some("English".into()));
        sel.toggle("Spanish");
        s.enroll_cards(5, &sel).await.unwrap();

        assert_eq!(
            *s.ledger.enrollments.lock().unwrap(),
            vec![(5, vec!["English".to_string(), "Spanish".to_string()])]
        );
        assert_eq!(s.phase(), SessionPhase::Active);
    }

    /// A two-card session with one miss, start to finish.
    #[tokio::test]
    async fn mixed_session_walkthrough() {
        let ledger = MockLedger::scripted(vec![vec![card(1), card(2)], vec![]], true);
        let mut s = session(ledger);
        s.load().await.unwrap();

        // reveal + correct on card 1
        s.reveal_answer();
        s.submit_answer(true).await;
        assert_eq!(s.queue_len(), 1);
        assert_eq!(s.current_card().unwrap().card_id, 2);
        assert_eq!(s.stats(), SessionStats { reviewed: 1, correct: 1, incorrect: 0 });

        // reveal + incorrect on card 2: single element rotates onto itself
        s.reveal_answer();
        s.submit_answer(false).await;
        assert_eq!(s.queue_len(), 1);
        assert_eq!(s.current_card().unwrap().card_id, 2);
        assert_eq!(s.stats(), SessionStats { reviewed: 2, correct: 1, incorrect: 1 });

        // reveal + correct on card 2: queue empties and the re-fetch runs
        s.reveal_answer();
        s.submit_answer(true).await;
        assert_eq!(s.queue_len(), 0);
        assert_eq!(s.phase(), SessionPhase::Complete { day_complete: true });
        assert_eq!(s.ledger.reviews(), vec![(1, true), (2, true)]);
    }
}
