use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::HUD_HEIGHT;
use crate::game::Game;
use crate::ui::canvas::PixelCanvas;
use crate::ui::sprites::SpriteAtlas;

/// Canvas size, in pixels, of the board area of a `columns`×`rows` terminal.
pub fn viewport(columns: u16, rows: u16) -> (u32, u32) {
    (columns as u32, rows.saturating_sub(HUD_HEIGHT) as u32 * 2)
}

fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),             // Board canvas
            Constraint::Length(HUD_HEIGHT), // Counters
        ])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn ui(f: &mut Frame, game: &Game, atlas: &SpriteAtlas) {
    let (board_area, hud_area) = split(f.size());

    render_board(f, game, atlas, board_area);
    render_hud(f, game, hud_area);

    let extent = game.board.extent();
    if extent > board_area.width as u32 || extent > board_area.height as u32 * 2 {
        render_too_small_overlay(f, board_area);
    }
}

fn render_board(f: &mut Frame, game: &Game, atlas: &SpriteAtlas, area: Rect) {
    let mut canvas = PixelCanvas::for_area(area, atlas);
    let shake = game.shake_offset();
    canvas.set_origin(shake, shake);
    game.board.render(&mut canvas);
    f.render_widget(&canvas, area);
}

fn render_hud(f: &mut Frame, game: &Game, area: Rect) {
    let counters = game.counters;
    let line = Line::from(vec![
        Span::styled(format!("Score {}", counters.score), Style::default().fg(Color::Yellow)),
        Span::raw("   "),
        Span::styled(format!("Health {}", counters.health), Style::default().fg(Color::Red)),
        Span::raw("   "),
        Span::styled(format!("Magic {}", counters.magic), Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::raw(format!("Booms {}", game.detonations)),
        Span::raw("   "),
        Span::styled(
            "WASD/arrows move · R restart · Q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let hud = Paragraph::new(line)
        .block(Block::default().borders(Borders::TOP).title("bombgrid"))
        .alignment(Alignment::Center);

    f.render_widget(hud, area);
}

/// Middle half of the board area, inset a tenth on either side.
fn overlay_rect(area: Rect) -> Rect {
    let [_, band, _] = *Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4), Constraint::Ratio(1, 2), Constraint::Ratio(1, 4)])
        .split(area)
    else {
        return area;
    };
    let [_, middle, _] = *Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 10), Constraint::Ratio(4, 5), Constraint::Ratio(1, 10)])
        .split(band)
    else {
        return band;
    };
    middle
}

fn render_too_small_overlay(f: &mut Frame, area: Rect) {
    let popup_area = overlay_rect(area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::styled("Terminal too small", Style::default().fg(Color::Yellow))]),
        Line::from(vec![Span::raw("Enlarge the window or lower --tile-size")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardConfig, GameConfig};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn overlay_sits_inside_board_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(overlay_rect(area), Rect::new(10, 10, 80, 20));
    }

    #[test]
    fn viewport_reserves_hud_rows() {
        assert_eq!(viewport(80, 24), (80, (24 - HUD_HEIGHT as u32) * 2));
        assert_eq!(viewport(10, 1), (10, 0));
    }

    #[test]
    fn draws_board_and_hud() {
        let (width, height) = viewport(120, 24);
        let config = GameConfig {
            board: BoardConfig {
                tile_size: 4,
                grid_size: 4,
                width,
                height,
            },
            seed: Some(3),
            ..GameConfig::default()
        };
        let game = Game::new(config).unwrap();
        let atlas = SpriteAtlas::builtin();

        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();
        terminal.draw(|f| ui(f, &game, &atlas)).unwrap();

        let buffer = terminal.backend().buffer();
        let (ox, oy) = game.board.offset();
        // Both pixels of this cell lie inside the board's first tile row.
        let cell = buffer.get(ox as u16, (oy / 2 + 1) as u16);
        assert_eq!(cell.symbol(), "▀");
        assert_ne!(cell.fg, Color::Reset);
        assert_ne!(cell.bg, Color::Reset);

        let hud_row: String = (0..120).map(|x| buffer.get(x, 22).symbol().to_string()).collect();
        assert!(hud_row.contains("Health"), "{hud_row}");
    }
}
