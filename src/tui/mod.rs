pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::schedule::ScheduleStore;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

/// Parses the form and runs the requested store operation. A parse error
/// bubbles up so the caller can show it; the store is not touched.
fn run_action(store: &mut ScheduleStore, app: &mut AppState, action: Action) -> Result<()> {
    match action {
        Action::BlockTime => {
            let (year, month, day) = app.form.date()?;
            let (start, end) = app.form.hours()?;
            store.block_time(year, month, day, start, end, app.form.name());
            app.message = "Time blocked successfully!".to_string();
        }
        Action::ViewSchedule => {
            let (year, month, day) = app.form.date()?;
            app.output = store.view_schedule(year, month, day);
            app.message = format!("Showing {}/{}/{}.", month, day, year);
        }
        Action::DeleteEvent => {
            let (year, month, day) = app.form.date()?;
            let start = app.form.start_hour()?;
            store.delete_event(year, month, day, start, app.form.name());
            app.message = "Event deleted successfully!".to_string();
        }
        Action::AddRecurring => {
            let (year, month, day) = app.form.date()?;
            let (start, end) = app.form.hours()?;
            let frequency = app.form.frequency()?;
            store.add_recurring_event(year, month, day, start, end, app.form.name(), frequency);
            app.message = "Recurring event added successfully!".to_string();
        }
        Action::Quit => {}
    }
    Ok(())
}

pub fn run() -> Result<()> {
    // Panic Hook: raw mode swallows the default panic output
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("timeblock_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let config = Config::load().unwrap_or_default();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(&config);
    // The store lives exactly as long as the shell; nothing is persisted.
    let mut store = ScheduleStore::new();

    loop {
        terminal.draw(|f| draw(f, &mut app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && let Some(action) = app.handle_key(key)
        {
            if action == Action::Quit {
                break;
            }
            if let Err(e) = run_action(&mut store, &mut app, action) {
                app.message = format!("Error: {}", e);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
