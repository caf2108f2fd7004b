//! Login / Signup View

use crate::state::{AppState, AuthField, AuthMode};
use crate::views::centered_rect;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let form = &state.session.form;
    let title = match form.mode {
        AuthMode::Login => " Sign in ",
        AuthMode::Signup => " Create account ",
    };

    let popup = centered_rect(60, 12, area);
    f.render_widget(Clear, popup);

    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // name (signup only)
            Constraint::Length(1), // email
            Constraint::Length(1), // password
            Constraint::Length(1), // phone (signup only)
            Constraint::Length(1),
            Constraint::Length(1), // error / loading
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

    if form.mode == AuthMode::Signup {
        render_field(f, chunks[0], "Name", &form.name, form.focus == AuthField::Name, false);
    }
    render_field(f, chunks[1], "Email", &form.email, form.focus == AuthField::Email, false);
    render_field(f, chunks[2], "Password", &form.password, form.focus == AuthField::Password, true);
    match form.mode {
        AuthMode::Signup => {
            render_field(f, chunks[3], "Phone", &form.phone, form.focus == AuthField::Phone, false);
        }
        AuthMode::Login => {
            render_field(f, chunks[3], "Token", &form.token, form.focus == AuthField::Token, false);
            f.render_widget(
                Paragraph::new("  Paste a token from a browser session to skip the password")
                    .style(Style::default().fg(Color::DarkGray)),
                chunks[4],
            );
        }
    }

    if state.session.loading {
        f.render_widget(
            Paragraph::new("  Signing in...").style(Style::default().fg(Color::Cyan)),
            chunks[5],
        );
    } else if let Some(error) = &state.session.error {
        f.render_widget(
            Paragraph::new(format!("  {error}")).style(Style::default().fg(Color::Red)),
            chunks[5],
        );
    }

    let toggle_hint = match form.mode {
        AuthMode::Login => "Ctrl+T sign up instead",
        AuthMode::Signup => "Ctrl+T sign in instead",
    };
    f.render_widget(
        Paragraph::new(format!(" Tab next  Enter submit  {toggle_hint}  Esc menu"))
            .style(Style::default().fg(Color::DarkGray)),
        chunks[7],
    );
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, mask: bool) {
    let indicator = if focused { "> " } else { "  " };
    let shown = if mask {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let mut spans = vec![
        Span::styled(
            indicator,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{:<12}", format!("{label}:"))),
        Span::raw(shown),
    ];
    if focused {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
