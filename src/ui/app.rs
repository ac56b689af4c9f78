//! Main application state and logic.
//!
//! The presentation layer: forwards key presses into the review session
//! controller and renders its state. All remote work happens through the
//! session or the ledger client; the app never mutates session internals
//! directly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::{DayCompleteScreen, FlashcardWidget, KeyHints, Logo, SessionStatsBar};
use crate::config::Config;
use crate::ledger::LedgerClient;
use crate::models::{DeckInfo, Profile};
use crate::profile::ensure_profile;
use crate::selection::LanguageSelection;
use crate::session::{ReviewSession, SessionPhase};

/// Languages offered for enrollment, with display flags.
const LANGUAGES: [(&str, &str); 5] = [
    ("English", "🇺🇸"),
    ("Spanish", "🇪🇸"),
    ("Italian", "🇮🇹"),
    ("French", "🇫🇷"),
    ("German", "🇩🇪"),
];

// ══════════════════════════════════════════════════════════════════════════
// Application State
// ══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// First run: pick the account's primary language.
    Setup,
    /// The review session, rendered by session phase.
    Study,
    /// Enrollment step one: pick a deck.
    DeckSelect,
    /// Enrollment step two: pick the languages.
    LanguageSelect,
    /// Profile and queue overview.
    Profile,
}

pub struct App<C> {
    pub screen: Screen,
    pub running: bool,

    // Config and theme
    pub config: Config,
    pub theme: Theme,

    // Remote state
    ledger: Arc<C>,
    pub session: ReviewSession<C>,
    pub profile: Option<Profile>,

    // Setup state
    setup_state: ListState,

    // Enrollment state
    deck_list: Vec<DeckInfo>,
    deck_list_state: ListState,
    deck_card_count: Option<usize>,
    selection: LanguageSelection,

    // Status message (shown temporarily)
    status_message: Option<(String, Instant)>,
}

impl<C: LedgerClient> App<C> {
    pub fn new(ledger: Arc<C>, session: ReviewSession<C>, config: Config) -> Self {
        let theme = Theme::from_name(&config.theme);

        Self {
            screen: Screen::Study,
            running: true,
            config,
            theme,
            ledger,
            session,
            profile: None,
            setup_state: ListState::default().with_selected(Some(0)),
            deck_list: Vec::new(),
            deck_list_state: ListState::default().with_selected(Some(0)),
            deck_card_count: None,
            selection: LanguageSelection::new(None),
            status_message: None,
        }
    }

    /// Initial load: adopt the profile if one exists, else run setup first.
    pub async fn bootstrap(&mut self) {
        let found = self.ledger.profile(self.session.account()).await;
        match found {
            Ok(Some(profile)) => {
                self.profile = Some(profile);
                self.screen = Screen::Study;
                self.reload().await;
            }
            Ok(None) => {
                self.screen = Screen::Setup;
            }
            Err(e) => {
                // Start on the study screen; its retry path re-runs load
                self.set_status(format!("Failed to reach the ledger: {e}"));
                self.screen = Screen::Study;
                let _ = self.session.load().await;
            }
        }
    }

    async fn reload(&mut self) {
        let loaded = self.session.load().await;
        if let Err(e) = loaded {
            self.set_status(format!("Failed to load session: {e}"));
        }
    }

    pub fn cycle_theme(&mut self) {
        let new_theme_name = self.theme.name.next();
        self.theme = Theme::new(new_theme_name);
        self.config.theme = new_theme_name.as_str().to_string();
        let _ = self.config.save();
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    async fn choose_primary_language(&mut self) {
        let Some(i) = self.setup_state.selected() else {
            return;
        };
        let language = LANGUAGES[i].0;

        let created = ensure_profile(self.ledger.as_ref(), self.session.account(), language).await;
        match created {
            Ok(profile) => {
                self.profile = Some(profile);
                self.screen = Screen::Study;
                self.reload().await;
            }
            Err(e) => self.set_status(format!("Profile setup failed: {e}")),
        }
    }

    async fn open_deck_selection(&mut self) {
        let fetched = self.ledger.all_decks().await;
        match fetched {
            Ok(decks) => {
                self.deck_list = decks;
                self.deck_list_state = if self.deck_list.is_empty() {
                    ListState::default()
                } else {
                    ListState::default().with_selected(Some(0))
                };
                self.screen = Screen::DeckSelect;
            }
            Err(e) => self.set_status(format!("Failed to load decks: {e}")),
        }
    }

    async fn confirm_enrollment(&mut self) {
        let Some(i) = self.deck_list_state.selected() else {
            return;
        };
        let Some(deck) = self.deck_list.get(i) else {
            return;
        };
        if !self.selection.is_valid_pair() {
            self.set_status("Select at least two languages".to_string());
            return;
        }
        let deck_id = deck.deck_id;
        let selection = self.selection.clone();
        let enrolled = self.session.enroll_cards(deck_id, &selection).await;
        match enrolled {
            Ok(()) => {
                self.screen = Screen::Study;
            }
            Err(e) => self.set_status(format!("Enrollment failed: {e}")),
        }
    }

    /// Skip enrollment and go straight back to the session.
    async fn resume_study(&mut self) {
        self.screen = Screen::Study;
        self.reload().await;
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub async fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                match self.screen {
                    Screen::Setup => self.handle_setup_keys(key.code).await,
                    Screen::Study => self.handle_study_keys(key.code).await,
                    Screen::DeckSelect => self.handle_deck_select_keys(key.code).await,
                    Screen::LanguageSelect => self.handle_language_select_keys(key.code).await,
                    Screen::Profile => self.handle_profile_keys(key.code),
                }
            }
        }
        Ok(())
    }

    async fn handle_setup_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => move_selection(&mut self.setup_state, LANGUAGES.len(), -1),
            KeyCode::Down | KeyCode::Char('j') => move_selection(&mut self.setup_state, LANGUAGES.len(), 1),
            KeyCode::Enter => self.choose_primary_language().await,
            _ => {}
        }
    }

    async fn handle_study_keys(&mut self, key: KeyCode) {
        // Keys available in every phase
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                return;
            }
            KeyCode::Char('t') => {
                self.cycle_theme();
                return;
            }
            KeyCode::Char('p') => {
                self.screen = Screen::Profile;
                return;
            }
            _ => {}
        }

        match self.session.phase() {
            SessionPhase::Active => match key {
                KeyCode::Char(' ') => self.session.reveal_answer(),
                KeyCode::Right | KeyCode::Char('c') => {
                    if self.session.answer_revealed() {
                        self.session.submit_answer(true).await;
                    }
                }
                KeyCode::Left | KeyCode::Char('x') => {
                    if self.session.answer_revealed() {
                        self.session.submit_answer(false).await;
                    }
                }
                KeyCode::Char('r') => self.reload().await,
                _ => {}
            },
            SessionPhase::Complete { day_complete: true } => {
                if key == KeyCode::Enter {
                    self.session.complete_day().await;
                    self.selection = LanguageSelection::new(
                        self.profile.as_ref().map(|p| p.primary_language.clone()),
                    );
                    self.open_deck_selection().await;
                }
            }
            SessionPhase::Complete { day_complete: false } => match key {
                KeyCode::Char('a') => {
                    self.selection = LanguageSelection::new(
                        self.profile.as_ref().map(|p| p.primary_language.clone()),
                    );
                    self.open_deck_selection().await;
                }
                KeyCode::Char('r') => self.reload().await,
                _ => {}
            },
            SessionPhase::Failed | SessionPhase::Idle => {
                if key == KeyCode::Char('r') || key == KeyCode::Enter {
                    self.reload().await;
                }
            }
            SessionPhase::Loading => {}
        }
    }

    async fn handle_deck_select_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('s') => self.resume_study().await,
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => {
                move_selection(&mut self.deck_list_state, self.deck_list.len(), -1)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                move_selection(&mut self.deck_list_state, self.deck_list.len(), 1)
            }
            KeyCode::Enter => {
                let Some(deck_id) = self
                    .deck_list_state
                    .selected()
                    .and_then(|i| self.deck_list.get(i))
                    .map(|d| d.deck_id)
                else {
                    return;
                };
                // Best effort: the count is informational
                let cards = self.ledger.deck_cards(deck_id).await;
                self.deck_card_count = cards.ok().map(|c| c.len());
                self.screen = Screen::LanguageSelect;
            }
            _ => {}
        }
    }

    async fn handle_language_select_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.screen = Screen::DeckSelect,
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char(c @ '1'..='5') => {
                let i = c as usize - '1' as usize;
                self.selection.toggle(LANGUAGES[i].0);
            }
            KeyCode::Enter => self.confirm_enrollment().await,
            _ => {}
        }
    }

    fn handle_profile_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('p') => {
                self.screen = Screen::Study;
            }
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.bg_dark)),
            area,
        );

        match self.screen {
            Screen::Setup => self.render_setup(frame, area),
            Screen::Study => self.render_study(frame, area),
            Screen::DeckSelect => self.render_deck_select(frame, area),
            Screen::LanguageSelect => self.render_language_select(frame, area),
            Screen::Profile => self.render_profile(frame, area),
        }

        self.render_status(frame, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if let Some((ref msg, time)) = self.status_message {
            if time.elapsed().as_secs() < 5 {
                let status = Paragraph::new(msg.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.theme.colors.warning));
                let status_area = Rect {
                    x: area.x,
                    y: area.y + area.height.saturating_sub(1),
                    width: area.width,
                    height: 1,
                };
                frame.render_widget(status, status_area);
            }
        }
    }

    fn render_setup(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(area);

        frame.render_widget(Logo::new(&self.theme), chunks[1]);

        let list_area = centered_rect(50, 100, chunks[3]);
        let items: Vec<ListItem> = LANGUAGES
            .iter()
            .map(|(name, flag)| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{flag} ")),
                    Span::styled(*name, Style::default().add_modifier(Modifier::BOLD)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.colors.primary))
                    .title(" Choose your primary language ")
                    .title_style(self.theme.highlight()),
            )
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, list_area, &mut self.setup_state);

        let hints = KeyHints::new(
            &[("j/k", "nav"), ("Enter", "confirm"), ("t", "theme"), ("q", "quit")],
            &self.theme,
        );
        frame.render_widget(hints, chunks[4]);
    }

    fn render_study(&mut self, frame: &mut Frame, area: Rect) {
        match self.session.phase() {
            SessionPhase::Active => self.render_active(frame, area),
            SessionPhase::Complete { day_complete } => {
                self.render_complete(frame, area, day_complete)
            }
            SessionPhase::Loading => self.render_message(
                frame,
                area,
                "Loading your session…",
                "Fetching cards and progress from the ledger",
            ),
            SessionPhase::Failed => self.render_message(
                frame,
                area,
                "Failed to load",
                "The ledger could not be reached. Press r to retry.",
            ),
            SessionPhase::Idle => self.render_message(
                frame,
                area,
                "No session",
                "Press Enter to start today's review",
            ),
        }
    }

    fn render_active(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(2),   // Header
            Constraint::Length(1),   // Stats
            Constraint::Length(1),   // Separator
            Constraint::Min(12),     // Card
            Constraint::Length(1),   // Separator
            Constraint::Length(2),   // Hints
        ])
        .split(area);

        let mut header_spans = vec![Span::styled("LeitnerLang", self.theme.title())];
        if self.session.is_stale() {
            header_spans.push(Span::styled(
                "  (unsynced, reload to reconcile)",
                Style::default().fg(self.theme.colors.warning),
            ));
        }
        let header = Paragraph::new(Line::from(header_spans)).alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        frame.render_widget(
            SessionStatsBar::new(self.session.stats(), self.session.queue_len(), &self.theme),
            chunks[1],
        );

        let card_area = centered_rect(80, 100, chunks[3]);
        if let Some(card) = self.session.current_card() {
            frame.render_widget(
                FlashcardWidget::new(card, self.session.answer_revealed(), &self.theme),
                card_area,
            );
        }

        let hints = if self.session.answer_revealed() {
            KeyHints::new(
                &[
                    ("←/x", "incorrect"),
                    ("→/c", "correct"),
                    ("p", "profile"),
                    ("q", "quit"),
                ],
                &self.theme,
            )
        } else {
            KeyHints::new(
                &[
                    ("Space", "show answer"),
                    ("r", "reload"),
                    ("p", "profile"),
                    ("q", "quit"),
                ],
                &self.theme,
            )
        };
        frame.render_widget(hints, chunks[5]);
    }

    fn render_complete(&mut self, frame: &mut Frame, area: Rect, day_complete: bool) {
        // The two empty-queue outcomes look deliberately different: one
        // celebrates, the other just informs.
        if day_complete {
            let card_area = centered_rect(60, 50, area);
            let streak = self
                .session
                .queue_status()
                .map(|s| s.streak_days)
                .unwrap_or(0);
            frame.render_widget(
                DayCompleteScreen::new(self.session.stats(), streak, &self.theme),
                card_area,
            );
        } else {
            let recommendation = self
                .session
                .queue_status()
                .map(|s| s.recommendation.clone())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "Your next cards are scheduled for later.".to_string());
            self.render_message(frame, area, "Nothing due right now", &recommendation);

            let hints_area = Rect {
                x: area.x,
                y: area.y + area.height.saturating_sub(2),
                width: area.width,
                height: 2,
            };
            let hints = KeyHints::new(
                &[("a", "add cards"), ("r", "reload"), ("p", "profile"), ("q", "quit")],
                &self.theme,
            );
            frame.render_widget(hints, hints_area);
        }
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, title: &str, body: &str) {
        let card_area = centered_rect(60, 40, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.primary));
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(title.to_string(), self.theme.title())),
            Line::from(""),
            Line::from(Span::styled(
                body.to_string(),
                Style::default().fg(self.theme.colors.text_muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(ratatui::widgets::Wrap { trim: true }),
            inner,
        );
    }

    fn render_deck_select(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(area);

        let title = Paragraph::new("Pick a deck for tomorrow's cards")
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        let list_area = centered_rect(70, 100, chunks[1]);
        let items: Vec<ListItem> = self
            .deck_list
            .iter()
            .map(|deck| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        deck.concept.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", deck.meaning),
                        Style::default().fg(self.theme.colors.text_muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.colors.primary))
                    .title(" Decks ")
                    .title_style(self.theme.highlight()),
            )
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, list_area, &mut self.deck_list_state);

        let hints = KeyHints::new(
            &[("j/k", "nav"), ("Enter", "select"), ("s", "skip"), ("q", "quit")],
            &self.theme,
        );
        frame.render_widget(hints, chunks[2]);
    }

    fn render_language_select(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(area);

        let deck_name = self
            .deck_list_state
            .selected()
            .and_then(|i| self.deck_list.get(i))
            .map(|d| d.concept.as_str())
            .unwrap_or("deck");
        let heading = match self.deck_card_count {
            Some(n) => format!("Languages for \"{deck_name}\" ({n} cards)"),
            None => format!("Languages for \"{deck_name}\""),
        };
        let title = Paragraph::new(heading)
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        let list_area = centered_rect(50, 100, chunks[1]);
        let lines: Vec<Line> = LANGUAGES
            .iter()
            .enumerate()
            .map(|(i, (name, flag))| {
                let chosen = self.selection.contains(name);
                let is_primary = self.selection.primary() == Some(*name);
                let marker = if chosen { "✓" } else { " " };
                let mut spans = vec![
                    Span::styled(
                        format!(" {} ", i + 1),
                        self.theme.key_highlight(),
                    ),
                    Span::raw(format!("{flag} ")),
                    Span::styled(
                        *name,
                        if chosen {
                            Style::default()
                                .fg(self.theme.colors.success)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(self.theme.colors.text)
                        },
                    ),
                    Span::styled(
                        format!("  {marker}"),
                        Style::default().fg(self.theme.colors.success),
                    ),
                ];
                if is_primary {
                    spans.push(Span::styled(
                        "  (primary, always included)",
                        Style::default().fg(self.theme.colors.text_dim),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.primary))
            .title(" Select at least two ")
            .title_style(self.theme.highlight());
        frame.render_widget(Paragraph::new(lines).block(block), list_area);

        let hints = KeyHints::new(
            &[("1-5", "toggle"), ("Enter", "enroll"), ("Esc", "back"), ("q", "quit")],
            &self.theme,
        );
        frame.render_widget(hints, chunks[2]);
    }

    fn render_profile(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(area);

        let title = Paragraph::new("Profile")
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        let content_area = centered_rect(60, 100, chunks[1]);
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("Account: ", Style::default().fg(self.theme.colors.text_muted)),
            Span::styled(
                self.session.account().to_string(),
                Style::default().fg(self.theme.colors.text),
            ),
        ]));

        if let Some(profile) = &self.profile {
            lines.push(Line::from(vec![
                Span::styled("Primary language: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(
                    profile.primary_language.clone(),
                    Style::default().fg(self.theme.colors.primary).add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(created) = profile.created_at {
                lines.push(Line::from(vec![
                    Span::styled("Learning since: ", Style::default().fg(self.theme.colors.text_muted)),
                    Span::styled(
                        created.format("%Y-%m-%d").to_string(),
                        Style::default().fg(self.theme.colors.text),
                    ),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "No profile yet",
                Style::default().fg(self.theme.colors.text_dim),
            )));
        }

        if let Some(status) = self.session.queue_status() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Total cards: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(status.total_cards.to_string(), Style::default().fg(self.theme.colors.text)),
                Span::styled("   Total reviews: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(status.total_reviews.to_string(), Style::default().fg(self.theme.colors.text)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Streak: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(
                    format!("{} days", status.streak_days),
                    Style::default().fg(self.theme.colors.warning),
                ),
                Span::styled("   Due today: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(status.due_count.to_string(), Style::default().fg(self.theme.colors.info)),
            ]));
            if !status.status.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    status.status.clone(),
                    Style::default().fg(self.theme.colors.text_muted),
                )));
            }
        }

        if self.session.is_stale() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Some reviews may not have reached the ledger yet.",
                Style::default().fg(self.theme.colors.warning),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.primary))
            .title(" Overview ")
            .title_style(self.theme.highlight());
        frame.render_widget(Paragraph::new(lines).block(block), content_area);

        let hints = KeyHints::new(&[("Esc", "back"), ("t", "theme")], &self.theme);
        frame.render_widget(hints, chunks[2]);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ══════════════════════════════════════════════════════════════════════════

fn move_selection(state: &mut ListState, len: usize, delta: i32) {
    if len == 0 {
        return;
    }
    let i = state.selected().unwrap_or(0);
    let new_i = if delta < 0 {
        if i == 0 { len - 1 } else { i - 1 }
    } else if i >= len - 1 {
        0
    } else {
        i + 1
    };
    state.select(Some(new_i));
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
