//! Setup screen: player count and secret word form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use imposter_core::{GameController, MAX_PLAYERS, MIN_PLAYERS, RandomSource, SessionView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenAction};
use crate::widgets::card;

/// Longest player count anyone needs to type.
const COUNT_DIGITS: usize = 3;

/// Which form field receives typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    /// Number of players.
    #[default]
    PlayerCount,
    /// The secret word.
    SecretWord,
}

impl SetupField {
    /// Toggles between the two fields.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::PlayerCount => Self::SecretWord,
            Self::SecretWord => Self::PlayerCount,
        }
    }
}

/// State for the setup form.
#[derive(Debug, Default, Getters)]
pub struct SetupScreen {
    player_count: String,
    secret_word: String,
    /// A suggested word stays masked until the field is edited by hand.
    word_masked: bool,
    focus: SetupField,
}

impl SetupScreen {
    /// Creates an empty form.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SetupScreen");
        Self::default()
    }

    /// Puts a suggested word in the form without showing it.
    #[instrument(skip(self, word))]
    pub fn apply_suggestion(&mut self, word: &str) {
        self.secret_word = word.to_string();
        self.word_masked = true;
        info!("Suggested word applied (masked)");
    }

    #[instrument(skip(self, c))]
    fn type_char(&mut self, c: char) {
        match self.focus {
            SetupField::PlayerCount => {
                if c.is_ascii_digit() && self.player_count.len() < COUNT_DIGITS {
                    self.player_count.push(c);
                }
            }
            SetupField::SecretWord => {
                self.secret_word.push(c);
                self.word_masked = false;
            }
        }
    }

    #[instrument(skip(self))]
    fn backspace(&mut self) {
        match self.focus {
            SetupField::PlayerCount => {
                self.player_count.pop();
            }
            SetupField::SecretWord => {
                self.secret_word.pop();
                self.word_masked = false;
            }
        }
    }

    fn word_display(&self) -> String {
        if self.word_masked {
            "•".repeat(self.secret_word.chars().count())
        } else {
            self.secret_word.clone()
        }
    }

    fn field<'a>(&self, label: &'a str, value: String, field: SetupField) -> Paragraph<'a> {
        let focused = self.focus == field;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { "" };
        Paragraph::new(format!("{value}{cursor}"))
            .block(Block::default().borders(Borders::ALL).title(label).border_style(border))
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame, game))]
    fn render<S: RandomSource>(&self, frame: &mut Frame, game: &GameController<S>) {
        let body = card(
            frame,
            "Imposter Word Game",
            "Tab: Field  Ctrl+R: Suggest  Enter: Start  Esc: Quit",
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(body);

        let intro = Paragraph::new("One player is the imposter. The rest share the secret word.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(intro, chunks[0]);

        let count_label = format!("Number of Players ({MIN_PLAYERS}–{MAX_PLAYERS})");
        frame.render_widget(
            self.field(&count_label, self.player_count.clone(), SetupField::PlayerCount),
            chunks[1],
        );
        frame.render_widget(
            self.field("Secret Word", self.word_display(), SetupField::SecretWord),
            chunks[2],
        );

        if let Some(message) = game.error_message() {
            let error = Paragraph::new(format!("{message} (Esc to dismiss)"))
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(error, chunks[3]);
        }
    }

    #[instrument(skip(self, key, view))]
    fn handle_key(&mut self, key: KeyEvent, view: &SessionView) -> ScreenAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') if ctrl => ScreenAction::SuggestWord,
            KeyCode::Char(c) if !ctrl => {
                self.type_char(c);
                ScreenAction::Stay
            }
            KeyCode::Backspace => {
                self.backspace();
                ScreenAction::Stay
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                ScreenAction::Stay
            }
            KeyCode::Enter => {
                info!("Setup submitted");
                ScreenAction::StartGame {
                    player_count: self.player_count.clone(),
                    secret_word: self.secret_word.clone(),
                }
            }
            KeyCode::Esc if view.error_message.is_some() => ScreenAction::DismissError,
            KeyCode::Esc => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
