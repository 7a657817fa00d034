use crate::error::GameError;
use crate::game::{Game, MoveResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        Ok(App {
            game: Game::new(height, width)?,
            selected_column: width / 2, // Start in middle
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        let (height, width) = (self.game.board().height(), self.game.board().width());
        // Same dimensions as before, so construction cannot fail here.
        if let Ok(game) = Game::new(height, width) {
            self.game = game;
            self.selected_column = width / 2;
            self.message = Some("New game started!".to_string());
            log::info!("new game started ({height}x{width})");
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.apply_move(self.selected_column) {
            Ok(MoveResult::Rejected) => {
                log::debug!("move rejected, column {} is full", self.selected_column);
                self.message = Some("Column is full!".to_string());
            }
            Ok(MoveResult::Placed { row, column, player }) => {
                log::debug!("{} placed at ({row}, {column})", player.name());
            }
            Ok(MoveResult::PlacedAndWon { player, .. }) => {
                log::info!("{} wins", player.name());
                self.message = Some(format!("{} wins! Press 'r' to restart.", player.name()));
            }
            Ok(MoveResult::PlacedAndTied { .. }) => {
                log::info!("game tied");
                self.message = Some("It's a tie! Press 'r' to restart.".to_string());
            }
            Err(GameError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                // InvalidColumn cannot happen: the cursor is clamped to the
                // board. Surface anything unexpected instead of hiding it.
                log::error!("move failed: {err}");
                self.message = Some(format!("Move failed: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player};

    #[test]
    fn test_app_starts_with_cursor_in_middle() {
        let app = App::new(6, 7).unwrap();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.game.current_player(), Player::One);
    }

    #[test]
    fn test_cursor_clamped_to_board() {
        let mut app = App::new(6, 7).unwrap();
        for _ in 0..20 {
            app.handle_key(KeyEvent::from(KeyCode::Right));
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..20 {
            app.handle_key(KeyEvent::from(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_a_piece() {
        let mut app = App::new(6, 7).unwrap();
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.game.current_player(), Player::Two);
        assert!(matches!(app.game.status(), GameStatus::InProgress));
    }

    #[test]
    fn test_restart_resets_game_with_same_dimensions() {
        let mut app = App::new(8, 9).unwrap();
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        app.handle_key(KeyEvent::from(KeyCode::Char('r')));
        assert_eq!(app.game.current_player(), Player::One);
        assert_eq!(app.game.board().height(), 8);
        assert_eq!(app.game.board().width(), 9);
        assert_eq!(app.selected_column, 4);
    }

    #[test]
    fn test_drop_after_game_over_reports_message() {
        let mut app = App::new(6, 7).unwrap();
        // One wins by stacking column 3 while Two answers in column 4.
        for _ in 0..3 {
            app.selected_column = 3;
            app.drop_piece();
            app.selected_column = 4;
            app.drop_piece();
        }
        app.selected_column = 3;
        app.drop_piece();
        assert_eq!(app.game.status(), GameStatus::Won(Player::One));

        app.message = None;
        app.drop_piece();
        assert!(app.message.as_deref().unwrap().contains("Game over"));
    }
}
