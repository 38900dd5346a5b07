//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Feedback, Form, Section};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the registration form with its feedback region
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form = &app.state.form;
    let form_focused = app.state.focus == Section::Form;

    let block = Block::default()
        .title(Span::styled(" Explorer Registration ", palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(form_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Planet
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Spacer
            Constraint::Min(2),                // Feedback
        ])
        .margin(1)
        .split(inner);

    for index in 0..3 {
        if let Some(field) = form.get_field(index) {
            let is_active = form_focused && form.active_field() == index;
            draw_field(frame, chunks[index], field, is_active, palette);
        }
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[3]);
    render_button(
        frame,
        button_row[0],
        "Submit",
        form_focused && form.is_submit_active(),
        palette,
    );

    // Blank first line puts the hint level with the button label
    let hint = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {SUBMIT_SHORTCUT} submits from any field"),
            Style::default().fg(palette.muted),
        )),
    ]);
    frame.render_widget(hint, button_row[1]);

    if let Some(feedback) = &form.feedback {
        draw_feedback(frame, chunks[5], feedback, palette);
    }
}

/// Draw the aggregate feedback message
fn draw_feedback(frame: &mut Frame, area: Rect, feedback: &Feedback, palette: &Palette) {
    let color = if feedback.is_success() {
        palette.success
    } else {
        palette.error
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        feedback.message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
