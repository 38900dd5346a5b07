//! Explorer TUI - registration page in the terminal
//!
//! A Ratatui-based page with a validated registration form, a light/dark
//! toggle, a distance slider and a height calculator.

mod app;
mod config;
mod events;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::PageConfig;
use crossterm::{
    event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use events::{CrosstermEvents, EventSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "explorer_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = PageConfig::load_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app, &mut CrosstermEvents);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Draw, wait for one event, handle it to completion, repeat
fn run_app<B: ratatui::backend::Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut E,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if events.poll(POLL_INTERVAL)? {
            match events.read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.request_quit();
                    } else {
                        app.handle_key(key)?;
                    }
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MockEventSource;
    use crate::state::Theme;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn typed(text: &str) -> Vec<Event> {
        text.chars().map(|c| press(KeyCode::Char(c))).collect()
    }

    /// Mock source that replays `script`, then sends Ctrl+C
    fn scripted_events(script: Vec<Event>) -> MockEventSource {
        let mut queue: VecDeque<Event> = script.into();
        let mut events = MockEventSource::new();
        events.expect_poll().returning(|_| Ok(true));
        events
            .expect_read()
            .returning(move || Ok(queue.pop_front().unwrap_or_else(|| ctrl('c'))));
        events
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn run_script(script: Vec<Event>) -> (App, Terminal<TestBackend>) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut app = App::new(&PageConfig::default());
        let mut events = scripted_events(script);
        run_app(&mut terminal, &mut app, &mut events).unwrap();
        (app, terminal)
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (app, _terminal) = run_script(vec![]);
        assert!(app.should_quit());
    }

    #[test]
    fn test_successful_submission_end_to_end() {
        let mut script = typed("Ann Explorer");
        script.push(press(KeyCode::Tab));
        script.extend(typed("ann@example.com"));
        script.push(press(KeyCode::Tab));
        script.extend(typed("Mars"));
        script.push(press(KeyCode::Tab));
        script.push(press(KeyCode::Enter));

        let (app, terminal) = run_script(script);

        let form = &app.state.form;
        assert_eq!(form.name.as_text(), "");
        assert_eq!(form.email.as_text(), "");
        assert_eq!(form.planet.as_text(), "");
        assert!(form
            .feedback
            .as_ref()
            .is_some_and(|f| f.is_success() && f.message().contains("Ann Explorer")));
        assert!(screen_text(&terminal).contains("Welcome aboard"));
    }

    #[test]
    fn test_failed_submission_end_to_end() {
        let mut script = typed("A1");
        script.push(press(KeyCode::Tab));
        script.extend(typed("bad"));
        script.push(press(KeyCode::Tab));
        script.extend(typed("7"));
        script.push(ctrl('s'));

        let (app, terminal) = run_script(script);

        let form = &app.state.form;
        assert_eq!(form.name.as_text(), "A1");
        assert_eq!(form.email.as_text(), "bad");
        assert_eq!(form.planet.as_text(), "7");
        let screen = screen_text(&terminal);
        assert!(screen.contains("Name must be at least 3 characters long."));
        assert!(screen.contains("Please enter a valid email address."));
        assert!(screen.contains("Planet name must be at least 2 characters long."));
        assert!(screen.contains("Please correct the highlighted fields"));
    }

    #[test]
    fn test_theme_toggle_updates_button_label() {
        let (app, terminal) = run_script(vec![press(KeyCode::F(2))]);
        assert_eq!(app.state.theme, Theme::Dark);
        assert!(screen_text(&terminal).contains("Light Mode"));
    }

    #[test]
    fn test_slider_and_calculator_end_to_end() {
        let mut script = vec![press(KeyCode::BackTab), press(KeyCode::BackTab)];
        script.push(press(KeyCode::End));
        script.push(press(KeyCode::Tab));
        script.extend(typed("10"));
        script.push(press(KeyCode::Enter));

        let (app, terminal) = run_script(script);

        assert_eq!(app.state.slider.display(), "1,000,000 km");
        let screen = screen_text(&terminal);
        assert!(screen.contains("1,000,000 km"));
        assert!(screen.contains("4.00 meters"));
    }

    #[test]
    fn test_key_release_events_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        let (app, _terminal) = run_script(vec![Event::Key(release)]);
        assert_eq!(app.state.form.name.as_text(), "");
    }
}
