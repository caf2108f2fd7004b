//! Menu View
//!
//! The public product list with the category filter, the add-to-cart toast,
//! and a one-line cart summary.

use crate::state::AppState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // filter / toast line
            Constraint::Min(0),    // product list
            Constraint::Length(1), // cart summary
            Constraint::Length(1), // key hints
        ])
        .split(area);

    render_header(state, chunks[0], f);
    render_products(state, chunks[1], f);
    render_cart_summary(state, chunks[2], f);

    let hints = match state.session.is_admin() {
        true => " j/k select  Enter add  f filter  c cart  o orders  d dashboard  u logout  q quit",
        false if state.session.is_authenticated() => {
            " j/k select  Enter add  f filter  c cart  o orders  u logout  q quit"
        }
        false => " j/k select  Enter add  f filter  c cart  u login  q quit",
    };
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    // The toast outranks the filter label while present
    if let Some(toast) = &state.cart.toast {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", toast.message),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))),
            area,
        );
        return;
    }

    let filter = state
        .catalog
        .filter
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| "All".to_string());
    let user = match &state.session.user {
        Some(user) => format!("signed in as {}", user.name),
        None => "browsing as guest".to_string(),
    };
    f.render_widget(
        Paragraph::new(format!(" Category: {filter}  |  {user}")),
        area,
    );
}

fn render_products(state: &AppState, area: Rect, f: &mut Frame) {
    let title = if state.catalog.loading {
        " Menu (loading...) "
    } else {
        " Menu "
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if let Some(error) = &state.catalog.error {
        f.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .catalog
        .filtered()
        .iter()
        .map(|p| {
            let mut spans = vec![
                Span::styled(
                    format!("{:<28}", p.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:>8.2}/{}  ", p.price, p.unit)),
                Span::styled(p.category.label(), Style::default().fg(Color::DarkGray)),
            ];
            if p.is_special {
                spans.push(Span::styled(
                    "  ★ special",
                    Style::default().fg(Color::Yellow),
                ));
            }
            if !p.available {
                spans.push(Span::styled(
                    "  (unavailable)",
                    Style::default().fg(Color::Red),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(state.catalog.selected.min(items.len() - 1)));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_cart_summary(state: &AppState, area: Rect, f: &mut Frame) {
    let summary = if state.cart.is_empty() {
        " Cart: empty".to_string()
    } else {
        format!(
            " Cart: {} items, total {:.2}",
            state.cart.line_count(),
            state.cart.total()
        )
    };
    f.render_widget(
        Paragraph::new(summary).style(Style::default().fg(Color::Cyan)),
        area,
    );
}
