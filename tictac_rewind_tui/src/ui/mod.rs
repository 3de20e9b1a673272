//! Stateless rendering and mouse hit-testing for the game screen.
//!
//! Layout geometry is computed by pure functions shared between the
//! draw path and the mouse handler, so a click always resolves against
//! the same rectangles the frame was drawn with.

mod board;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Position as Point, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use tictac_rewind::Position;

use crate::app::App;

/// Screen regions.
pub struct Panes {
    /// Title bar.
    pub title: Rect,
    /// Board pane (left).
    pub board: Rect,
    /// History list pane (right).
    pub history: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Splits the full frame area into panes.
pub fn panes(area: Rect) -> Panes {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Min(11),    // Board and history
            Constraint::Length(4),  // Status
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(43), Constraint::Length(34)])
        .split(chunks[1]);

    Panes {
        title: chunks[0],
        board: main[0],
        history: main[1],
        status: chunks[2],
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A row in the history list, counted as a step index.
    HistoryRow(usize),
}

/// Resolves a click at `(x, y)` against the screen layout for `area`.
pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<Hit> {
    let panes = panes(area);

    if let Some(pos) = board::hit_cell(panes.board, x, y) {
        return Some(Hit::Cell(pos));
    }

    // Rows inside the history block's border, top row being step 0.
    let inner = panes.history.inner(Margin::new(1, 1));
    if inner.contains(Point::new(x, y)) {
        return Some(Hit::HistoryRow((y - inner.y) as usize));
    }

    None
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let panes = panes(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Rewind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, panes.title);

    board::draw_board(frame, panes.board, app.game().board(), app.cursor());
    draw_history(frame, panes.history, app);
    draw_status(frame, panes.status, app);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let items: Vec<ListItem> = (0..game.steps())
        .map(|step| {
            let label = match game.move_at(step) {
                None => "Go to game start".to_string(),
                Some(mv) => format!("Go to move #{step} ({mv})"),
            };
            let style = if step == game.step() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(label, style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("History (click to jump)"),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::styled(
            app.status_line(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(
                "{}  (arrows+Enter or 1-9 play, [/] rewind, r restart, q quit)",
                app.status_message()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    #[test]
    fn test_panes_tile_the_frame() {
        let panes = panes(AREA);
        assert_eq!(panes.title.y, 0);
        assert_eq!(panes.board.y, panes.title.bottom());
        assert_eq!(panes.history.right(), AREA.right());
        assert_eq!(panes.status.bottom(), AREA.bottom());
        assert_eq!(panes.history.width, 34);
    }

    #[test]
    fn test_history_rows_map_to_steps() {
        let panes = panes(AREA);
        let inner = panes.history.inner(Margin::new(1, 1));

        let hit = hit_test(AREA, inner.x, inner.y);
        assert_eq!(hit, Some(Hit::HistoryRow(0)));

        let hit = hit_test(AREA, inner.x + 3, inner.y + 4);
        assert_eq!(hit, Some(Hit::HistoryRow(4)));

        // The border itself is not a row.
        assert_eq!(hit_test(AREA, panes.history.x, panes.history.y), None);
    }

    #[test]
    fn test_board_clicks_resolve_to_cells() {
        let panes = panes(AREA);
        let rects = board::cell_rects(panes.board);

        for pos in Position::ALL {
            let rect = rects[pos.to_index()];
            let hit = hit_test(AREA, rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Some(Hit::Cell(pos)), "center of {pos}");
        }
    }

    #[test]
    fn test_click_outside_everything_misses() {
        assert_eq!(hit_test(AREA, 0, 0), None);
    }
}
