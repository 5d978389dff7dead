//! Pass-the-device screen shown between reveals.

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

/// Tells the table whose turn it is without showing anything secret.
#[derive(Debug, Default)]
pub struct PassDeviceScreen;

impl Screen for PassDeviceScreen {
    #[instrument(skip(self, frame, game))]
    fn render<S: RandomSource>(&self, frame: &mut Frame, game: &GameController<S>) {
        let body = card(frame, "Imposter Word Game", "Enter: Reveal Word | q: Quit");
        let lines = vec![
            Line::from(""),
            Line::styled(
                game.current_player().label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled("Pass the device", Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }

    #[instrument(skip(self, key, _view))]
    fn handle_key(&mut self, key: KeyEvent, _view: &SessionView) -> ScreenAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => ScreenAction::RevealWord,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
