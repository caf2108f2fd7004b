//! Order Tracking View
//!
//! Four-step delivery stepper. A cancelled order renders a terminal banner
//! instead of progress; completed steps are filled up to the status's step
//! index.

use crate::state::AppState;
use crate::views::orders::status_color;
use coop_client::{Order, OrderStatus};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let block = Block::default().borders(Borders::ALL).title(" Track Order ");

    let Some(order) = &state.orders.tracked else {
        let text = match &state.orders.error {
            Some(error) => error.as_str(),
            None if state.orders.loading => "Loading order...",
            None => "No order selected.",
        };
        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(1),
            Constraint::Length(4), // stepper / cancelled banner
            Constraint::Length(1),
            Constraint::Min(0),  // items
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let header = vec![
        Line::from(vec![
            Span::styled(
                format!("Order #{}", order.short_ref()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  placed {}",
                order.created_at.format("%Y-%m-%d %H:%M")
            )),
        ]),
        Line::from(vec![
            Span::raw(format!("{} | total {:.2} | ", order.delivery_address, order.total_amount)),
            Span::styled(
                order.status.label(),
                Style::default()
                    .fg(status_color(order.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(header), chunks[0]);

    if order.status == OrderStatus::Cancelled {
        f.render_widget(
            Paragraph::new("✖ This order was cancelled.")
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            chunks[2],
        );
    } else {
        f.render_widget(Paragraph::new(stepper_lines(order)), chunks[2]);
    }

    let items: Vec<Line> = order
        .items
        .iter()
        .map(|item| {
            Line::from(format!(
                "  {} x {}{}  ({:.2})",
                item.name,
                item.quantity,
                item.unit,
                item.price * item.quantity
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(items), chunks[4]);

    let hints = if order.status.can_cancel() {
        " r refresh  x cancel  Esc orders"
    } else {
        " r refresh  Esc orders"
    };
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[5],
    );
}

/// Render the forward path as `[x]`/`[ ]` steps joined by connectors
fn stepper_lines(order: &Order) -> Vec<Line<'static>> {
    // Cancelled never reaches here; step_index is Some for the forward path
    let reached = order.status.step_index().unwrap_or(0);

    let mut spans = Vec::new();
    for (idx, status) in OrderStatus::FORWARD_PATH.iter().enumerate() {
        let done = idx <= reached;
        let marker = if done { "[x]" } else { "[ ]" };
        let style = if done {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{marker} {}", status.label()),
            style,
        ));
        if idx < OrderStatus::FORWARD_PATH.len() - 1 {
            spans.push(Span::styled("  ──  ", Style::default().fg(Color::DarkGray)));
        }
    }

    vec![Line::from(""), Line::from(spans)]
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

    fn rendered(status: OrderStatus) -> String {
        stepper_lines(&order(status))
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect()
    }

    #[test]
    fn stepper_fills_steps_up_to_the_status() {
        let text = rendered(OrderStatus::OutForDelivery);
        assert_eq!(text.matches("[x]").count(), 3);
        assert_eq!(text.matches("[ ]").count(), 1);

        let text = rendered(OrderStatus::Pending);
        assert_eq!(text.matches("[x]").count(), 1);

        let text = rendered(OrderStatus::Delivered);
        assert_eq!(text.matches("[ ]").count(), 0);
    }
}
