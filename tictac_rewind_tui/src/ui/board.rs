//! Board pane: cell geometry, rendering, and mouse hit-testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;
use strum::IntoEnumIterator;
use tictac_rewind::rules::winning_line;
use tictac_rewind::{Board, Player, Position, Square};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rectangles of the nine cells within the board pane, row-major.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = split_rows(grid);

    let mut rects = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = split_cols(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[r * 3 + c] = cell;
        }
    }
    rects
}

/// Maps a click inside the board pane to a cell.
pub fn hit_cell(area: Rect, x: u16, y: u16) -> Option<Position> {
    let rects = cell_rects(area);
    Position::iter().find(|pos| rects[pos.to_index()].contains(Point::new(x, y)))
}

/// Renders the board with the keyboard cursor and any winning line
/// highlighted.
pub fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = split_rows(grid);

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = split_cols(row_area);
        draw_vertical_separator(frame, cols[1]);
        draw_vertical_separator(frame, cols[3]);
    }

    let rects = cell_rects(area);
    let win = winning_line(board);
    for pos in Position::iter() {
        let on_win_line = win.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, rects[pos.to_index()], board.get(pos), pos == cursor, on_win_line);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, is_cursor: bool, on_win_line: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = if on_win_line {
        base_style.fg(Color::Green)
    } else {
        base_style
    };
    if is_cursor {
        style = style.bg(Color::White);
        if square == Square::Empty {
            style = style.fg(Color::Black);
        }
    }

    // Middle line of the cell carries the mark.
    let text = Text::from(vec![
        Line::default(),
        Line::styled(symbol, style),
        Line::default(),
    ]);
    let cell = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn split_rows(grid: Rect) -> [Rect; 5] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);
    [rows[0], rows[1], rows[2], rows[3], rows[4]]
}

fn split_cols(row_area: Rect) -> [Rect; 5] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(row_area);
    [cols[0], cols[1], cols[2], cols[3], cols[4]]
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
