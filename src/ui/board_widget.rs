use crate::puzzle::{Board, Disk, NUM_RODS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Fixed cyclic palette; a disk's color is selected by `size % len`.
pub const DISK_PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Rgb(200, 100, 50),
];

/// Display labels for the three rods.
pub const ROD_LABELS: [&str; NUM_RODS] = ["A", "B", "C"];

pub fn disk_color(disk: Disk) -> Color {
    DISK_PALETTE[disk as usize % DISK_PALETTE.len()]
}

/// Character width of a disk bar: proportional to size, always odd so the
/// bar centers on the rod.
fn disk_width(disk: Disk) -> usize {
    2 * disk as usize + 1
}

/// Width of one rod slot, sized so the largest disk fits with a one-cell
/// margin on each side.
fn slot_width(board: &Board) -> usize {
    disk_width(board.disk_count()) + 2
}

/// Build the text lines for the whole board, top row first: three rods at
/// fixed horizontal positions, disks stacked upward from a common baseline.
/// Pure, so tests can inspect the layout without a terminal.
pub fn board_lines(board: &Board) -> Vec<Line<'static>> {
    let slot = slot_width(board);
    let height = board.disk_count() as usize + 1;
    let mut lines = Vec::with_capacity(height + 2);

    for level in (0..height).rev() {
        let mut spans = Vec::with_capacity(NUM_RODS);
        for rod in 0..NUM_RODS {
            match board.rod(rod).get(level) {
                Some(&disk) => spans.push(disk_span(disk, slot)),
                None => spans.push(pole_span(slot)),
            }
        }
        lines.push(Line::from(spans));
    }

    // Baseline the rods stand on, then a label under each rod
    lines.push(Line::from(Span::styled(
        "═".repeat(slot * NUM_RODS),
        Style::default().fg(Color::Gray),
    )));
    let labels = (0..NUM_RODS)
        .map(|rod| {
            Span::styled(
                center(ROD_LABELS[rod], slot),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect::<Vec<_>>();
    lines.push(Line::from(labels));

    lines
}

/// Render the board centered in the given area.
pub fn render_board(frame: &mut Frame, board: &Board, area: Rect) {
    let widget = Paragraph::new(board_lines(board)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn disk_span(disk: Disk, slot: usize) -> Span<'static> {
    let bar = "█".repeat(disk_width(disk));
    Span::styled(center(&bar, slot), Style::default().fg(disk_color(disk)))
}

fn pole_span(slot: usize) -> Span<'static> {
    Span::styled(center("│", slot), Style::default().fg(Color::Gray))
}

fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_by_disk_size() {
        assert_eq!(disk_color(1), disk_color(8));
        assert_eq!(disk_color(7), DISK_PALETTE[0]);
        assert_ne!(disk_color(1), disk_color(2));
    }

    #[test]
    fn test_board_lines_shape() {
        let board = Board::new(3);
        // 3 disk levels + 1 pole headroom + baseline + labels
        let lines = board_lines(&board);
        assert_eq!(lines.len(), 6);
        // Every stack row has one span per rod
        assert_eq!(lines[0].spans.len(), NUM_RODS);
    }

    #[test]
    fn test_disk_bars_grow_with_size() {
        let board = Board::new(3);
        let lines = board_lines(&board);

        // Bottom stack row is lines[3] (levels render top-down); rod 0 holds
        // disk 3 there, disk 2 above it, disk 1 above that
        for (line, expected_disk) in [(3, 3usize), (2, 2), (1, 1)] {
            let bar = lines[line].spans[0].content.trim().to_string();
            assert_eq!(bar.chars().count(), 2 * expected_disk + 1);
            assert!(bar.chars().all(|c| c == '█'));
        }
    }

    #[test]
    fn test_empty_rods_render_poles() {
        let board = Board::new(3);
        let lines = board_lines(&board);
        for rod in 1..NUM_RODS {
            assert_eq!(lines[3].spans[rod].content.trim(), "│");
        }
        // Headroom row above the full stack is a pole on every rod
        for rod in 0..NUM_RODS {
            assert_eq!(lines[0].spans[rod].content.trim(), "│");
        }
    }

    #[test]
    fn test_rod_labels_under_baseline() {
        let board = Board::new(2);
        let lines = board_lines(&board);
        let labels = lines.last().unwrap();
        for (span, expected) in labels.spans.iter().zip(ROD_LABELS) {
            assert_eq!(span.content.trim(), expected);
        }
    }
}
