use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Database;
use crate::models::Month;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(db: &Database) -> Result<()> {
    let mut app = App::new(Month::current());
    app.reload(db)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "terminal UI stopped");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Tab bar, status bar and command bar.
            app.visible_rows = (f.area().height.saturating_sub(3) as usize).max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db)?,
                InputMode::Command => handle_command_input(key, app, db)?,
                InputMode::Confirm => handle_confirm_input(key, app, db)?,
            }
        }
    }
    Ok(())
}

/// Run a command; store failures land in the status line instead of
/// tearing down the UI.
fn run_command(input: &str, app: &mut App, db: &Database) {
    if let Err(e) = commands::handle_command(input, app, db) {
        tracing::error!(command = input, error = %format!("{e:#}"), "command failed");
        app.set_status(format!("Error: {e:#}"));
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => move_down(app),
        KeyCode::Char('k') | KeyCode::Up => move_up(app),
        KeyCode::Char('g') => goto_top(app),
        KeyCode::Char('G') => goto_bottom(app),
        KeyCode::Char('1') => app.screen = Screen::Dashboard,
        KeyCode::Char('2') => app.screen = Screen::Transactions,
        KeyCode::Char('3') => app.screen = Screen::Budgets,
        KeyCode::Tab => cycle_screen(app, 1),
        KeyCode::BackTab => cycle_screen(app, -1),
        KeyCode::Char('H') => run_command("prev-month", app, db),
        KeyCode::Char('L') => run_command("next-month", app, db),
        KeyCode::Char('e') if app.screen == Screen::Transactions => run_command("edit", app, db),
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            run_command("delete", app, db)
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            run_command(&input, app, db);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            match trimmed.rfind(' ') {
                Some(pos) => app.command_input.truncate(pos + 1),
                None => {
                    app.command_input.clear();
                    app.input_mode = InputMode::Normal;
                }
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            if let Some(action) = app.pending_action.take() {
                if let Err(e) = commands::confirm(action, app, db) {
                    tracing::error!(error = %format!("{e:#}"), "confirmed action failed");
                    app.set_status(format!("Error: {e:#}"));
                }
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
        _ => {}
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn cycle_screen(app: &mut App, step: isize) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let next = (idx as isize + step).rem_euclid(screens.len() as isize) as usize;
    app.screen = screens[next];
}

fn move_down(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            let (len, page) = (app.transactions().len(), app.transaction_page());
            scroll_down(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                page,
            );
        }
        Screen::Budgets => {
            let (len, page) = (app.budget_rows().len(), app.budget_page());
            scroll_down(&mut app.budget_index, &mut app.budget_scroll, len, page);
        }
        Screen::Dashboard => {}
    }
}

fn move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_up(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Budgets => scroll_up(&mut app.budget_index, &mut app.budget_scroll),
        Screen::Dashboard => {}
    }
}

fn goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Budgets => scroll_to_top(&mut app.budget_index, &mut app.budget_scroll),
        Screen::Dashboard => {}
    }
}

fn goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            let (len, page) = (app.transactions().len(), app.transaction_page());
            scroll_to_bottom(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                page,
            );
        }
        Screen::Budgets => {
            let (len, page) = (app.budget_rows().len(), app.budget_page());
            scroll_to_bottom(&mut app.budget_index, &mut app.budget_scroll, len, page);
        }
        Screen::Dashboard => {}
    }
}
