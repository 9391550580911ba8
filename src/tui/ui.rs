use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::tui::app::App;
use crate::tui::input::{handle_key, InputAction};
use crate::tui::render::render_ui;
use crate::utils::PortalError;

/// Run the terminal UI
pub async fn run_ui(mut app: App, tick_rate: Duration) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        eprintln!("❌ vpn-portal requires an interactive terminal.");
        eprintln!("   Cannot run with redirected output (pipes, files, etc.)");
        return Err(PortalError::UIError("No interactive terminal available".to_string()).into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(tick_rate)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Windows reports both press and release
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Handlers run to completion before the next event is read
        dispatch(app, handle_key(app.view(), key)).await;
    }

    Ok(())
}

/// Apply one intent to the app state
pub(crate) async fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::Insert(c) => app.input.push(c),
        InputAction::Delete => {
            app.input.pop();
        }
        InputAction::Submit => app.submit_login().await,
        InputAction::SelectNext => app.select_next(),
        InputAction::SelectPrevious => app.select_previous(),
        InputAction::Activate => {
            let action = app.selected_action;
            app.run_action(action).await;
        }
        InputAction::Run(action) => {
            app.run_action(action).await;
        }
        InputAction::Quit => app.quit(),
        InputAction::None => {}
    }
}
