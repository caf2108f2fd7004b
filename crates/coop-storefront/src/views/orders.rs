//! Orders View
//!
//! The caller's order history. Cancellation is only hinted while the selected
//! order's status allows it.

use crate::state::AppState;
use coop_client::{Order, OrderStatus};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

pub(crate) fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Preparing => Color::Cyan,
        OrderStatus::OutForDelivery => Color::Blue,
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Cancelled => Color::Red,
    }
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let title = if state.orders.loading {
        " My Orders (loading...) "
    } else {
        " My Orders "
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if let Some(error) = &state.orders.error {
        f.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(block),
            chunks[0],
        );
    } else if state.orders.list.is_empty() {
        f.render_widget(
            Paragraph::new("No orders yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            chunks[0],
        );
    } else {
        render_table(state, block, chunks[0], f);
    }

    let hints = cancel_hint(state.orders.selected_order());
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

/// Key hints for the selected order; the cancel key only appears while the
/// status allows cancellation
pub(crate) fn cancel_hint(selected: Option<&Order>) -> String {
    let base = " j/k select  Enter track  r refresh  Esc menu";
    match selected {
        Some(order) if order.status.can_cancel() => format!("{base}  x cancel"),
        _ => base.to_string(),
    }
}

fn render_table(state: &AppState, block: Block, area: Rect, f: &mut Frame) {
    let rows: Vec<Row> = state
        .orders
        .list
        .iter()
        .map(|order| {
            Row::new(vec![
                format!("#{}", order.short_ref()),
                order.created_at.format("%Y-%m-%d %H:%M").to_string(),
                format!("{} items", order.items.len()),
                format!("{:.2}", order.total_amount),
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
            Constraint::Length(17),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(16),
        ],
    )
    .header(
        Row::new(vec!["Order", "Placed", "Items", "Total", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray));

    f.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use coop_client::PaymentMethod;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "o1".to_string(),
            customer_name: "Asha".to_string(),
            phone: "9".to_string(),
            delivery_address: "addr".to_string(),
            delivery_location: None,
            payment_method: PaymentMethod::CashOnDelivery,
            notes: String::new(),
            items: vec![],
            total_amount: 1.0,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn cancel_hint_only_while_cancellable() {
        for status in [OrderStatus::Pending, OrderStatus::Preparing] {
            assert!(cancel_hint(Some(&order(status))).contains("x cancel"));
        }
        for status in [
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(!cancel_hint(Some(&order(status))).contains("x cancel"));
        }
        assert!(!cancel_hint(None).contains("x cancel"));
    }
}
