//! Reveal screen: the current player's private look at their role.

use crossterm::event::{KeyCode, KeyEvent};
use imposter_core::{GameController, RandomSource, Role, SessionView};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{instrument, warn};

use crate::screen::{Screen, ScreenAction};
use crate::widgets::card;

/// Shows one player their role.
#[derive(Debug, Default)]
pub struct RevealScreen;

impl RevealScreen {
    fn role_lines(role: Role<'_>) -> (Vec<Line<'_>>, Color) {
        match role {
            Role::Imposter => (
                vec![
                    Line::styled(
                        "You are the Imposter!",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Line::styled("Blend in… don't get caught.", Style::default().fg(Color::Red)),
                ],
                Color::Red,
            ),
            Role::Crewmate(word) => (
                vec![
                    Line::styled("Secret Word:", Style::default().fg(Color::Green)),
                    Line::styled(
                        word,
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ],
                Color::Green,
            ),
        }
    }
}

impl Screen for RevealScreen {
    #[instrument(skip(self, frame, game))]
    fn render<S: RandomSource>(&self, frame: &mut Frame, game: &GameController<S>) {
        let help = if game.is_last_player() {
            "Enter: Finish Game | q: Quit"
        } else {
            "Enter: Next Player | q: Quit"
        };
        let body = card(frame, &game.current_player().label(), help);

        let Some(role) = game.current_role() else {
            warn!(phase = %game.phase(), "Reveal screen shown without a role");
            return;
        };
        let (lines, color) = Self::role_lines(role);
        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(panel, body);
    }

    #[instrument(skip(self, key, _view))]
    fn handle_key(&mut self, key: KeyEvent, _view: &SessionView) -> ScreenAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => ScreenAction::Advance,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
