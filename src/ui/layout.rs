//! Layout components (header, sections, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use super::palette::Palette;
use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_SHORTCUT};
use crate::state::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the theme toggle button
const TOGGLE_WIDTH: u16 = 18;

/// Screen regions of the page
pub struct PageLayout {
    pub header: Rect,
    pub form: Rect,
    pub slider: Rect,
    pub calculator: Rect,
}

/// Split the screen into header, form column and settings column
pub fn create_layout(area: Rect) -> PageLayout {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Slider
            Constraint::Min(9),    // Calculator
        ])
        .split(columns[1]);

    PageLayout {
        header: rows[0],
        form: columns[0],
        slider: right[0],
        calculator: right[1],
    }
}

/// Draw the page title and the theme toggle button
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" 🚀 Explorer Portal", palette.title()),
            Span::styled(
                "  sign up for the next expedition",
                Style::default().fg(palette.muted),
            ),
        ]),
    ]);
    frame.render_widget(title, chunks[0]);

    render_button(
        frame,
        chunks[1],
        app.state.theme.button_label(),
        app.state.focus == Section::Theme,
        palette,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.focus.label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_section_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: status_area.y,
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused section
fn get_section_hints(app: &App) -> String {
    match app.state.focus {
        Section::Form if app.state.form.is_submit_active() => {
            format!("Enter:submit  Tab:next  {TOGGLE_SHORTCUT}:theme")
        }
        Section::Form => format!(
            "Tab/Enter:next field  {SUBMIT_SHORTCUT}:submit  Esc:dismiss  {TOGGLE_SHORTCUT}:theme"
        ),
        Section::Theme => "Enter/Space:toggle  Tab:next".to_string(),
        Section::Slider => "←/→:step  PgUp/PgDn:x10  Home/End:min/max  Tab:next".to_string(),
        Section::Calculator => "Enter:convert  Esc:clear result  Tab:next".to_string(),
    }
}
