//! Results screen: the word and the imposter, shown to everyone.

use crossterm::event::{KeyCode, KeyEvent};
use imposter_core::{GameController, RandomSource, SessionView};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{instrument, warn};

use crate::screen::{Screen, ScreenAction};
use crate::widgets::card;

/// Final reveal.
#[derive(Debug, Default)]
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    #[instrument(skip(self, frame, game))]
    fn render<S: RandomSource>(&self, frame: &mut Frame, game: &GameController<S>) {
        let body = card(frame, "Game Complete", "Enter / r: Play Again | q: Quit");

        let Some(results) = game.results() else {
            warn!(phase = %game.phase(), "Results screen shown before completion");
            return;
        };
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(vec![
                Span::styled("Word: ", bold),
                Span::raw(results.secret_word()),
            ]),
            Line::from(vec![
                Span::styled("Imposter: ", bold),
                Span::raw(results.imposter().label()),
            ]),
        ];
        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(panel, body);
    }

    #[instrument(skip(self, key, _view))]
    fn handle_key(&mut self, key: KeyEvent, _view: &SessionView) -> ScreenAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => ScreenAction::PlayAgain,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
