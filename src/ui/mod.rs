//! UI module for rendering the TUI

mod calculator_panel;
mod components;
mod forms;
mod layout;
mod palette;
mod slider_panel;

use crate::app::App;
use palette::Palette;
use ratatui::{widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_theme(app.state.theme);

    // Page background follows the theme flag
    frame.render_widget(Block::default().style(palette.base()), area);

    let page = layout::create_layout(area);

    layout::draw_header(frame, page.header, app, &palette);
    forms::draw_registration_form(frame, page.form, app, &palette);
    slider_panel::draw(frame, page.slider, app, &palette);
    calculator_panel::draw(frame, page.calculator, app, &palette);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
