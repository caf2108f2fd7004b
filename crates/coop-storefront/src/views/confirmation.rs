//! Order Confirmation View
//!
//! Shown right after a successful placement with the short order reference.

use crate::state::AppState;
use crate::views::centered_rect;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let popup = centered_rect(56, 9, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Order placed ");

    let Some(order) = &state.orders.last_placed else {
        f.render_widget(
            Paragraph::new("No recent order.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            popup,
        );
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Thank you, "),
            Span::styled(
                order.customer_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("!"),
        ]),
        Line::from(vec![
            Span::raw("  Your order "),
            Span::styled(
                format!("#{}", order.short_ref()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" for {:.2} is ", order.total_amount)),
            Span::styled(order.status.label(), Style::default().fg(Color::Yellow)),
            Span::raw("."),
        ]),
        Line::from(format!("  Paying by {}.", order.payment_method.label())),
        Line::from(""),
        Line::from(Span::styled(
            "  t track order   Enter back to menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
