//! Admin Views
//!
//! Dashboard aggregates, the full order table with status controls, and the
//! product management screen with its create/edit form.

use crate::state::{AppState, ProductField, ProductFormState};
use crate::views::{centered_rect, orders::status_color};
use coop_client::OrderStatus;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

// === Dashboard ===

pub fn render_dashboard(state: &AppState, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Dashboard ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // stat cards
            Constraint::Length(3), // revenue line
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let Some(stats) = &state.orders.stats else {
        let text = if state.orders.loading {
            "Loading stats..."
        } else {
            "No stats loaded. Press r to refresh."
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            chunks[0],
        );
        render_dashboard_hints(chunks[3], f);
        return;
    };

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[0]);

    stat_card(f, cards[0], "Today", stats.today_orders, Color::Cyan);
    stat_card(f, cards[1], "Pending", stats.pending_orders, Color::Yellow);
    stat_card(f, cards[2], "Preparing", stats.preparing_orders, Color::Blue);
    stat_card(f, cards[3], "Delivered", stats.delivered_orders, Color::Green);

    f.render_widget(
        Paragraph::new(format!(
            " Total revenue: {:.2}  across {} orders",
            stats.total_revenue, stats.total_orders
        ))
        .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[1],
    );

    render_dashboard_hints(chunks[3], f);
}

fn render_dashboard_hints(area: Rect, f: &mut Frame) {
    f.render_widget(
        Paragraph::new(" o orders  p products  r refresh  Esc menu")
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn stat_card(f: &mut Frame, area: Rect, label: &str, value: u64, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let lines = vec![
        Line::from(Span::styled(
            format!("{value}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(block),
        area,
    );
}

// === Order management ===

pub fn render_orders(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let title = if state.orders.loading {
        " All Orders (loading...) "
    } else {
        " All Orders "
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if let Some(error) = &state.orders.error {
        f.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(block),
            chunks[0],
        );
    } else {
        let rows: Vec<Row> = state
            .orders
            .list
            .iter()
            .map(|order| {
                Row::new(vec![
                    format!("#{}", order.short_ref()),
                    order.customer_name.clone(),
                    order.phone.clone(),
                    format!("{:.2}", order.total_amount),
                    order.payment_method.label().to_string(),
                    order.status.label().to_string(),
                ])
                .style(Style::default().fg(status_color(order.status)))
            })
            .collect();

        let mut table_state = TableState::default();
        table_state.select(Some(state.orders.selected.min(rows.len().saturating_sub(1))));

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Min(16),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(16),
                Constraint::Length(16),
            ],
        )
        .header(
            Row::new(vec!["Order", "Customer", "Phone", "Total", "Payment", "Status"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    let status_keys: Vec<String> = OrderStatus::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", i + 1, s.label()))
        .collect();
    let hints = vec![
        Line::from(Span::styled(
            format!(" Set status: {}", status_keys.join("  ")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " j/k select  r refresh  Esc dashboard",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(hints), chunks[1]);
}

// === Product management ===

pub fn render_products(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let title = if state.catalog.loading {
        " Products (loading...) "
    } else {
        " Products "
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if let Some(error) = &state.catalog.error {
        f.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(block),
            chunks[0],
        );
    } else {
        let rows: Vec<Row> = state
            .catalog
            .products
            .iter()
            .map(|p| {
                let style = if p.available {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Row::new(vec![
                    p.name.clone(),
                    p.category.label().to_string(),
                    format!("{:.2}/{}", p.price, p.unit),
                    if p.available { "yes" } else { "no" }.to_string(),
                    if p.is_special { "★" } else { "" }.to_string(),
                ])
                .style(style)
            })
            .collect();

        let mut table_state = TableState::default();
        table_state.select(Some(state.catalog.selected.min(rows.len().saturating_sub(1))));

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(24),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["Name", "Category", "Price", "Available", "Special"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    f.render_widget(
        Paragraph::new(" j/k select  n new  e edit  x delete  r refresh  Esc dashboard")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    // The form floats over the table while open
    if let Some(form) = &state.catalog.form {
        render_product_form(form, area, f);
    }
}

fn render_product_form(form: &ProductFormState, area: Rect, f: &mut Frame) {
    let title = match form.editing_id {
        Some(_) => " Edit product ",
        None => " New product ",
    };

    let popup = centered_rect(62, 14, area);
    f.render_widget(Clear, popup);

    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // name
            Constraint::Length(1), // price
            Constraint::Length(1), // unit
            Constraint::Length(1), // description
            Constraint::Length(1), // image
            Constraint::Length(1),
            Constraint::Length(1), // category
            Constraint::Length(1), // flags
            Constraint::Min(0),
            Constraint::Length(2), // hints
        ])
        .split(inner);

    form_field(f, chunks[0], "Name", &form.name, form.focus == ProductField::Name);
    form_field(f, chunks[1], "Price", &form.price, form.focus == ProductField::Price);
    form_field(f, chunks[2], "Unit", &form.unit, form.focus == ProductField::Unit);
    form_field(f, chunks[3], "Description", &form.description, form.focus == ProductField::Description);
    form_field(f, chunks[4], "Image", &form.image, form.focus == ProductField::Image);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("  Category:     "),
            Span::styled(form.category.label(), Style::default().fg(Color::Cyan)),
        ])),
        chunks[6],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("  Available: "),
            Span::styled(
                if form.available { "yes" } else { "no" },
                Style::default().fg(if form.available { Color::Green } else { Color::Red }),
            ),
            Span::raw("   Special: "),
            Span::styled(
                if form.is_special { "yes" } else { "no" },
                Style::default().fg(Color::Yellow),
            ),
        ])),
        chunks[7],
    );

    let hints = vec![
        Line::from(Span::styled(
            " Tab next  Ctrl+G category  Ctrl+A available  Ctrl+X special",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " Enter save  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(hints), chunks[9]);
}

fn form_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let indicator = if focused { "> " } else { "  " };
    let mut spans = vec![
        Span::styled(
            indicator,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{:<14}", format!("{label}:"))),
        Span::raw(value.to_string()),
    ];
    if focused {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
