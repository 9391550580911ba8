use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{MSG_TOKEN_PROMPT, MSG_WELCOME};
use crate::portal::View;
use crate::tui::app::{App, PortalAction};

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Active panel
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    // Exactly one panel is drawn, chosen by the session
    match app.view() {
        View::Login => render_login(frame, chunks[1], app),
        View::Main => render_main(frame, chunks[1], app),
    }

    render_hints(frame, chunks[2], app);
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("🔐 ", Style::default().fg(Color::Cyan)),
        Span::styled(
            &app.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Render the token form
fn render_login(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Token field
            Constraint::Min(1),    // Feedback
        ])
        .split(area);

    frame.render_widget(Paragraph::new(MSG_TOKEN_PROMPT), chunks[0]);

    let field = Paragraph::new(Line::from(vec![
        Span::styled(app.masked_input(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .title(" Token ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(field, chunks[1]);

    if let Some(feedback) = app.portal.feedback() {
        let feedback = Paragraph::new(feedback)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false });
        frame.render_widget(feedback, chunks[2]);
    }
}

/// Render the authenticated panel with its two actions
fn render_main(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Welcome
            Constraint::Length(PortalAction::ALL.len() as u16),
            Constraint::Length(1), // Separator
            Constraint::Min(2),    // Status text
        ])
        .split(area);

    frame.render_widget(Paragraph::new(MSG_WELCOME), chunks[0]);

    let buttons: Vec<Line> = PortalAction::ALL
        .iter()
        .map(|action| {
            if *action == app.selected_action {
                Line::from(Span::styled(
                    format!("▶ [ {} ]", action.label()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(format!("  [ {} ]", action.label())))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(buttons), chunks[1]);

    let separator = "─".repeat(chunks[2].width as usize);
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(status) = app.portal.status_text() {
        let status = Paragraph::new(status.to_string())
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: false });
        frame.render_widget(status, chunks[3]);
    }
}

/// Render the key hints line
fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.view() {
        View::Login => " Enter: login | Ctrl+C: quit",
        View::Main => " ↑/↓: select | Enter: run | d: download | s: status | q: quit",
    };

    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::UIConfig;
    use crate::portal::Portal;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_at(path: impl Into<std::path::PathBuf>) -> App {
        App::new(Portal::with_static_backend(path), &UIConfig::default())
    }

    #[test]
    fn test_login_view_only() {
        let mut app = app_at("vpn-config.ovpn");
        app.input = "secret".to_string();

        let screen = draw(&app);

        assert!(screen.contains("VPN Portal"));
        assert!(screen.contains("Enter your registration token:"));
        assert!(screen.contains("******"));
        assert!(!screen.contains("secret"));
        assert!(!screen.contains("Welcome! Select an option below:"));
        assert!(!screen.contains("Download Latest VPN File"));
    }

    #[tokio::test]
    async fn test_feedback_shown_on_login_view() {
        let mut app = app_at("vpn-config.ovpn");
        app.input = "wrong".to_string();
        app.submit_login().await;

        let screen = draw(&app);

        assert!(screen.contains("Invalid token. Try again."));
        assert!(screen.contains("Enter your registration token:"));
    }

    #[tokio::test]
    async fn test_main_view_only_after_login() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_at(temp_dir.path().join("vpn-config.ovpn"));
        app.input = "abc123TOKEN".to_string();
        app.submit_login().await;
        app.run_action(PortalAction::CheckStatus).await;

        let screen = draw(&app);

        assert!(screen.contains("Welcome! Select an option below:"));
        assert!(screen.contains("Download Latest VPN File"));
        assert!(screen.contains("Check VPN Status / Network"));
        assert!(screen.contains("VPN Status: Connected"));
        assert!(screen.contains("Network: 10.8.0.2/24"));
        assert!(!screen.contains("Enter your registration token:"));
    }
}
