//! Main UI Application
//!
//! Draws the dungeon and the status panels, and turns key presses into
//! intents for the game.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::input;
use crate::entities::{Enemy, Item, Player};
use crate::game::{Game, GameState, MessageCategory};

const PLAYER_COLOR: Color = Color::Rgb(120, 230, 120);
const ENEMY_COLOR: Color = Color::Rgb(230, 80, 80);
const ITEM_COLOR: Color = Color::Rgb(240, 210, 90);

/// Main application state
pub struct App {
    /// Moves that actually changed the player's position
    turns: u32,
}

impl App {
    pub fn new() -> Self {
        Self { turns: 0 }
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Handle a key press. Returns true when the program should exit, which
    /// is any key once the summary screen is showing.
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        if game.is_over() {
            return Ok(true);
        }

        let Some(intent) = input::intent_for_key(key) else {
            return Ok(false);
        };

        let report = game.apply(intent)?;
        if report.moved {
            self.turns += 1;
        }
        Ok(false)
    }

    /// Render the current frame
    pub fn render(&self, frame: &mut Frame, game: &Game) {
        frame.render_widget(Clear, frame.area());

        match game.state() {
            GameState::Running => self.render_playing(frame, game),
            GameState::GameOver | GameState::Quit => self.render_game_over(frame, game),
        }
    }

    fn render_playing(&self, frame: &mut Frame, game: &Game) {
        let dungeon = game.dungeon();
        let map_height = (dungeon.height + 2).max(0) as u16;
        let map_width = (dungeon.width + 2).max(0) as u16;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(map_height),
                Constraint::Min(3),
            ])
            .split(frame.area());

        self.render_header(frame, game, rows[0]);

        let map_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(map_width), Constraint::Min(0)])
            .split(rows[1])[0];
        self.render_map(frame, game, map_area);

        self.render_messages(frame, game, rows[2]);
    }

    fn render_header(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let player = game.player();
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("Score: ", label),
                Span::styled(game.score().to_string(), value),
                Span::styled(" | Room: ", label),
                Span::styled(format!("{}/{}", game.current_room() + 1, game.rooms().len()), value),
                Span::styled(" | Turn: ", label),
                Span::styled(self.turns.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Health: ", label),
                Span::styled(
                    format!("{}/{}", player.health.current, player.health.max),
                    Style::default().fg(health_color(player)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" | Attack: ", label),
                Span::styled(player.attack.to_string(), value),
                Span::styled(" | Enemies: ", label),
                Span::styled(game.enemies().len().to_string(), value),
                Span::styled(" | Items: ", label),
                Span::styled(game.items().len().to_string(), value),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_map(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Dungeon ")
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dungeon = game.dungeon();
        let view_width = dungeon.width.min(inner.width as i32);
        let view_height = dungeon.height.min(inner.height as i32);

        let buf = frame.buffer_mut();
        for y in 0..view_height {
            for x in 0..view_width {
                let (ch, fg) = cell_glyph(game, x, y);
                let cell_x = inner.x + x as u16;
                let cell_y = inner.y + y as u16;
                buf[(cell_x, cell_y)].set_char(ch);
                buf[(cell_x, cell_y)].set_fg(fg);
            }
        }
    }

    fn render_messages(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Messages ")
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);

        let messages: Vec<Line> = game
            .messages()
            .iter()
            .rev()
            .take(inner.height as usize)
            .rev()
            .map(|msg| {
                let color = match msg.category {
                    MessageCategory::Combat => Color::Red,
                    MessageCategory::Item => Color::Yellow,
                    MessageCategory::System => Color::Cyan,
                };
                Line::from(Span::styled(msg.text.as_str(), Style::default().fg(color)))
            })
            .collect();

        frame.render_widget(Paragraph::new(messages).block(block), area);
    }

    fn render_game_over(&self, frame: &mut Frame, game: &Game) {
        let area = centered_rect(60, 50, frame.area());

        let (title, color) = match game.state() {
            GameState::GameOver => ("YOU HAVE FALLEN", Color::Red),
            _ => ("YOU LEAVE THE DUNGEON", Color::Yellow),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(format!("Final Score: {}", game.score())),
            Line::from(format!("Turns Taken: {}", self.turns)),
            Line::from(format!("Enemies Remaining: {}", game.enemies().len())),
            Line::from(""),
            Line::from(Span::styled("Press any key to exit", Style::default().fg(Color::Gray))),
        ];

        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Game Over "));

        frame.render_widget(para, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// What to draw at a dungeon cell: the player over items over enemies over
/// the tile. Enemies and items are only shown inside room interiors.
pub fn cell_glyph(game: &Game, x: i32, y: i32) -> (char, Color) {
    let dungeon = game.dungeon();
    let player = game.player();

    if player.pos.x == x && player.pos.y == y {
        return (Player::GLYPH, PLAYER_COLOR);
    }

    if dungeon.is_inside_any_room_interior(x, y) {
        if game.items().iter().any(|item| item.pos.x == x && item.pos.y == y) {
            return (Item::GLYPH, ITEM_COLOR);
        }
        if game.enemies().iter().any(|enemy| enemy.pos.x == x && enemy.pos.y == y) {
            return (Enemy::GLYPH, ENEMY_COLOR);
        }
    }

    let tile = dungeon.tile_at(x, y);
    let (r, g, b) = tile.fg_color();
    (tile.glyph(), Color::Rgb(r, g, b))
}

fn health_color(player: &Player) -> Color {
    let health = player.health;
    if health.current * 3 > health.max * 2 {
        Color::Green
    } else if health.current * 3 > health.max {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::data::GameConfig;
    use crate::entities::Position;
    use crate::world::{Dungeon, Room};

    fn sample_game() -> Game {
        let dungeon = Dungeon::from_rooms(
            20,
            15,
            vec![Room::new(0, 0, 7, 7, 0), Room::new(10, 6, 7, 7, 1)],
        );
        let player = Player::new(Position::new(3, 3), 20, 2, 0);
        let enemies = vec![
            Enemy::new(Position::new(5, 5), 5, 1),
            // Standing mid-corridor
            Enemy::new(Position::new(8, 3), 5, 1),
        ];
        let items = vec![Item::new(Position::new(1, 1)), Item::new(Position::new(5, 5))];
        Game::from_parts(GameConfig::default(), dungeon, player, enemies, items)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cell_glyph_layers() {
        let game = sample_game();
        assert_eq!(cell_glyph(&game, 3, 3).0, '@');
        assert_eq!(cell_glyph(&game, 1, 1).0, '$');
        // Item drawn over the enemy sharing its cell
        assert_eq!(cell_glyph(&game, 5, 5).0, '$');
        assert_eq!(cell_glyph(&game, 0, 0).0, '#');
        assert_eq!(cell_glyph(&game, 2, 2).0, '.');
        assert_eq!(cell_glyph(&game, 19, 0).0, ' ');
    }

    #[test]
    fn test_corridor_entities_are_hidden() {
        let game = sample_game();
        assert_eq!(cell_glyph(&game, 8, 3).0, '.');
    }

    #[test]
    fn test_keys_drive_the_game() {
        let mut game = sample_game();
        let mut app = App::new();

        let exit = app.handle_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE), &mut game).unwrap();
        assert!(!exit);
        assert_eq!(game.player().pos, Position::new(4, 3));
        assert_eq!(app.turns(), 1);

        // Unbound keys do nothing
        app.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &mut game).unwrap();
        assert_eq!(app.turns(), 1);

        app.handle_input(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), &mut game).unwrap();
        assert_eq!(game.state(), GameState::Quit);

        // Any key leaves the summary screen
        let exit = app.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut game).unwrap();
        assert!(exit);
    }

    #[test]
    fn test_render_playing_and_summary() {
        let mut game = sample_game();
        let app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();

        terminal.draw(|frame| app.render(frame, &game)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Health: 20/20"));
        assert!(text.contains("You enter the dungeon."));

        game.apply(crate::game::Intent::Quit).unwrap();
        terminal.draw(|frame| app.render(frame, &game)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Final Score: 0"));
    }
}
