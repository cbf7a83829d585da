use crate::puzzle::Board;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::app::Phase;
use super::board_widget;

/// Render the full frame: header, board, progress, message, controls.
pub fn render(
    frame: &mut Frame,
    board: &Board,
    phase: Phase,
    moves_made: u64,
    total_moves: u64,
    message: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, board, phase, chunks[0]);
    board_widget::render_board(frame, board, chunks[1]);
    render_progress(frame, moves_made, total_moves, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, board: &Board, phase: Phase, area: Rect) {
    let (status, color) = match phase {
        Phase::Ready => ("READY", Color::Yellow),
        Phase::Solving => ("SOLVING", Color::Green),
        Phase::Solved => ("SOLVED", Color::Cyan),
    };

    let header_text = Line::from(vec![
        Span::styled(
            "Tower of Hanoi",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  |  {} disks  |  [", board.disk_count())),
        Span::styled(
            status,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("]"),
    ]);

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_progress(frame: &mut Frame, moves_made: u64, total_moves: u64, area: Rect) {
    let ratio = if total_moves == 0 {
        0.0
    } else {
        moves_made as f64 / total_moves as f64
    };
    let label = format!(
        "{}/{} moves ({:.1}%)",
        moves_made,
        total_moves,
        ratio * 100.0
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_message(frame: &mut Frame, message: &str, area: Rect) {
    let widget = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Q/Esc: Quit (keys are read once the solve finishes)");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
