//! Checkout View
//!
//! Delivery details form plus the payment method and the location lookup
//! status. The form is prefilled from the profile when the screen opens.

use crate::state::{AppState, CheckoutField, LocationState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let block = Block::default().borders(Borders::ALL).title(" Checkout ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // name
            Constraint::Length(1), // phone
            Constraint::Length(1), // address
            Constraint::Length(1), // notes
            Constraint::Length(1),
            Constraint::Length(1), // payment
            Constraint::Length(1), // location
            Constraint::Length(1),
            Constraint::Length(1), // order summary
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let checkout = &state.checkout;
    render_field(f, chunks[0], "Name", &checkout.customer_name, checkout.focus == CheckoutField::CustomerName);
    render_field(f, chunks[1], "Phone", &checkout.phone, checkout.focus == CheckoutField::Phone);
    render_field(f, chunks[2], "Address", &checkout.delivery_address, checkout.focus == CheckoutField::DeliveryAddress);
    render_field(f, chunks[3], "Notes", &checkout.notes, checkout.focus == CheckoutField::Notes);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("  Payment:      "),
            Span::styled(
                checkout.payment().label(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Ctrl+P to switch)", Style::default().fg(Color::DarkGray)),
        ])),
        chunks[5],
    );

    let location = match checkout.location {
        LocationState::Idle => Span::styled("not requested", Style::default().fg(Color::DarkGray)),
        LocationState::Looking => Span::styled("looking up...", Style::default().fg(Color::Cyan)),
        LocationState::Available(point) => Span::styled(
            format!("{:.4}, {:.4}", point.lat, point.lng),
            Style::default().fg(Color::Green),
        ),
        LocationState::Unavailable => Span::styled(
            "unavailable (order proceeds without it)",
            Style::default().fg(Color::Yellow),
        ),
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![Span::raw("  Location:     "), location])),
        chunks[6],
    );

    f.render_widget(
        Paragraph::new(format!(
            "  {} items, total {:.2}",
            state.cart.line_count(),
            state.cart.total()
        ))
        .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[8],
    );

    f.render_widget(
        Paragraph::new(" Tab next field  Ctrl+P payment  Enter place order  Esc back to cart")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[10],
    );
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
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
