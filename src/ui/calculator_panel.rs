//! Height calculator rendering

use crate::app::App;
use crate::state::{Section, HEIGHT_DIVISOR};
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the height input and the result region
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let calculator = &app.state.calculator;
    let is_focused = app.state.focus == Section::Calculator;

    let block = Block::default()
        .title(Span::styled(" Height Calculator ", palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(2), // Result
            Constraint::Min(0),    // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    let cursor = if is_focused { "▌" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(calculator.input.as_str(), Style::default().fg(palette.text)),
        Span::styled(cursor, Style::default().fg(palette.accent)),
    ]))
    .block(
        Block::default()
            .title(" Height ")
            .borders(Borders::ALL)
            .border_style(palette.border(is_focused)),
    );
    frame.render_widget(input, chunks[0]);

    if let Some(output) = &calculator.output {
        let color = if output.is_valid() {
            palette.success
        } else {
            palette.error
        };
        let result = Paragraph::new(Span::styled(
            output.display(),
            Style::default().fg(color),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(result, chunks[1]);
    }

    let help = Paragraph::new(Span::styled(
        format!("Enter converts: height / {HEIGHT_DIVISOR}"),
        Style::default().fg(palette.muted),
    ));
    frame.render_widget(help, chunks[2]);
}
