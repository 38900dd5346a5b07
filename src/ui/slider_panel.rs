//! Distance slider rendering

use crate::app::App;
use crate::state::Section;
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

/// Draw the slider track and its formatted reading
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let slider = &app.state.slider;
    let is_focused = app.state.focus == Section::Slider;

    let block = Block::default()
        .title(Span::styled(" Travel Distance ", palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Value display
            Constraint::Length(1), // Track
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let display = Paragraph::new(Line::from(vec![
        Span::styled("Distance: ", Style::default().fg(palette.muted)),
        Span::styled(
            slider.display(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(display, chunks[0]);

    let gauge = LineGauge::default()
        .ratio(slider.ratio())
        .label("")
        .line_set(symbols::line::THICK)
        .filled_style(Style::default().fg(palette.accent))
        .unfilled_style(Style::default().fg(palette.muted));
    frame.render_widget(gauge, chunks[1]);
}
