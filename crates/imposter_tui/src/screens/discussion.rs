//! Discussion screen: everyone has looked, results still hidden.

use crossterm::event::{KeyCode, KeyEvent};
use imposter_core::{GameController, RandomSource, SessionView};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tracing::instrument;

use crate::screen::{Screen, ScreenAction};
use crate::widgets::card;

/// Waits for the table to finish discussing.
#[derive(Debug, Default)]
pub struct DiscussionScreen;

impl Screen for DiscussionScreen {
    #[instrument(skip(self, frame, _game))]
    fn render<S: RandomSource>(&self, frame: &mut Frame, _game: &GameController<S>) {
        let body = card(frame, "Imposter Word Game", "Enter: Show Results | q: Quit");
        let lines = vec![
            Line::from(""),
            Line::styled(
                "All Players Ready",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                "Time to reveal the results",
                Style::default().fg(Color::Gray),
            ),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }

    #[instrument(skip(self, key, _view))]
    fn handle_key(&mut self, key: KeyEvent, _view: &SessionView) -> ScreenAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => ScreenAction::RevealResults,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
