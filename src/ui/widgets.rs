//! Custom widgets for the LeitnerLang TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::Theme;
use crate::models::{Card, SessionStats};

// ══════════════════════════════════════════════════════════════════════════
// Logo Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct Logo<'a> {
    theme: &'a Theme,
}

impl<'a> Logo<'a> {
    const ART: &'static str = r#"
    ╭──────────────────────────────────────────────╮
    │  _          _ _                              │
    │ | |    ___ (_) |_ _ __   ___ _ __            │
    │ | |   / _ \| | __| '_ \ / _ \ '__|           │
    │ | |__|  __/| | |_| | | |  __/ |              │
    │ |_____\___||_|\__|_| |_|\___|_| Lang         │
    │                     ┌──────────────────┐     │
    │      ╭────╮         │ Spaced           │     │
    │      │ 🌍 │         │ Repetition       │     │
    │      ╰────╯         │ on the Ledger    │     │
    │                     └──────────────────┘     │
    ╰──────────────────────────────────────────────╯"#;

    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Logo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Self::ART
            .lines()
            .skip(1)
            .map(|line| {
                Line::from(vec![
                    Span::styled(line, Style::default().fg(self.theme.colors.primary))
                ])
            })
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Flashcard Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct FlashcardWidget<'a> {
    card: &'a Card,
    revealed: bool,
    theme: &'a Theme,
}

impl<'a> FlashcardWidget<'a> {
    pub fn new(card: &'a Card, revealed: bool, theme: &'a Theme) -> Self {
        Self { card, revealed, theme }
    }
}

impl Widget for FlashcardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label, label_style, border_style) = if self.revealed {
            ("ANSWER", self.theme.card_back(), Style::default().fg(self.theme.colors.success))
        } else {
            ("QUESTION", self.theme.card_front(), Style::default().fg(self.theme.colors.accent))
        };

        let deck = self.card.deck_concept.as_deref().unwrap_or("Vocabulary");
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(label, label_style),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled(deck, Style::default().fg(self.theme.colors.text_dim)),
                Span::styled(
                    format!(" · Level {} ({}) ", self.card.current_level, self.card.level_description()),
                    Style::default().fg(self.theme.colors.text_dim),
                ),
            ]));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                format!(
                    "Translate from {} to {}",
                    self.card.front_language, self.card.back_language
                ),
                Style::default().fg(self.theme.colors.text_muted),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.card.front_text.as_str(),
                Style::default().fg(self.theme.colors.text).add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(phonetic) = &self.card.front_phonetic {
            lines.push(Line::from(Span::styled(
                format!("/{}/", phonetic),
                Style::default().fg(self.theme.colors.text_muted),
            )));
        }

        if self.revealed {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "── in ──",
                Style::default().fg(self.theme.colors.text_dim),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.card.back_text.as_str(),
                Style::default()
                    .fg(self.theme.colors.success)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(phonetic) = &self.card.back_phonetic {
                lines.push(Line::from(Span::styled(
                    format!("/{}/", phonetic),
                    Style::default().fg(self.theme.colors.text_muted),
                )));
            }
        }

        // Center vertically
        let content_height = lines.len() as u16;
        let vertical_padding = inner.height.saturating_sub(content_height) / 2;

        let content_area = Rect {
            x: inner.x + 2,
            y: inner.y + vertical_padding,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(vertical_padding),
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content_area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Session Stats Bar Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct SessionStatsBar<'a> {
    stats: SessionStats,
    remaining: usize,
    theme: &'a Theme,
}

impl<'a> SessionStatsBar<'a> {
    pub fn new(stats: SessionStats, remaining: usize, theme: &'a Theme) -> Self {
        Self { stats, remaining, theme }
    }
}

impl Widget for SessionStatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

        let cell = |label: &str, value: String, color| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])
        };

        Paragraph::new(cell("Reviewed", self.stats.reviewed.to_string(), self.theme.colors.info))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(cell("Correct", self.stats.correct.to_string(), self.theme.colors.answer_correct))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new(cell(
            "Incorrect",
            self.stats.incorrect.to_string(),
            self.theme.colors.answer_incorrect,
        ))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        let accuracy = self
            .stats
            .accuracy()
            .map(|a| format!("{a}%"))
            .unwrap_or_else(|| "—".to_string());
        Paragraph::new(cell(
            &format!("Left {} · Accuracy", self.remaining),
            accuracy,
            self.theme.colors.text_dim,
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints
            .iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(*key, self.theme.key_highlight()),
                    Span::styled(format!(" {} ", desc), self.theme.key_hint()),
                    Span::styled("│ ", Style::default().fg(self.theme.colors.text_dim)),
                ]
            })
            .collect();

        let line = Line::from(spans);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Day Complete Screen Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct DayCompleteScreen<'a> {
    stats: SessionStats,
    streak_days: u32,
    theme: &'a Theme,
}

impl<'a> DayCompleteScreen<'a> {
    pub fn new(stats: SessionStats, streak_days: u32, theme: &'a Theme) -> Self {
        Self { stats, streak_days, theme }
    }
}

impl Widget for DayCompleteScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.success))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("LEITNER DAY COMPLETE", self.theme.card_back()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let accuracy = self
            .stats
            .accuracy()
            .map(|a| format!("{a}%"))
            .unwrap_or_else(|| "—".to_string());

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Great work! 🎉", Style::default().fg(self.theme.colors.success).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Reviewed: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(
                    self.stats.reviewed.to_string(),
                    Style::default().fg(self.theme.colors.primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Correct: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(
                    self.stats.correct.to_string(),
                    Style::default().fg(self.theme.colors.answer_correct).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Incorrect: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(
                    self.stats.incorrect.to_string(),
                    Style::default().fg(self.theme.colors.answer_incorrect).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Accuracy: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(accuracy, Style::default().fg(self.theme.colors.primary)),
                Span::styled("  Streak: ", Style::default().fg(self.theme.colors.text_muted)),
                Span::styled(
                    format!("{} day{}", self.streak_days, if self.streak_days == 1 { "" } else { "s" }),
                    Style::default().fg(self.theme.colors.warning),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(self.theme.colors.text_dim)),
                Span::styled("Enter", self.theme.key_highlight()),
                Span::styled(" to complete the day and pick tomorrow's cards", Style::default().fg(self.theme.colors.text_dim)),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
