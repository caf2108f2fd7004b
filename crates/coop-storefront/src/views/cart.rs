//! Cart View

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
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(" Cart ");

    if state.cart.is_empty() {
        f.render_widget(
            Paragraph::new("Your cart is empty. Add something from the menu!")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            chunks[0],
        );
    } else {
        let items: Vec<ListItem> = state
            .cart
            .lines
            .iter()
            .map(|line| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<28}", line.product.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "{:>6} {} x {:>8.2}  = {:>9.2}",
                        line.quantity,
                        line.product.unit,
                        line.product.price,
                        line.subtotal()
                    )),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(state.cart.selected.min(state.cart.line_count() - 1)));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], &mut list_state);
    }

    f.render_widget(
        Paragraph::new(format!(" Total: {:.2}", state.cart.total()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(" j/k select  +/- quantity  x remove  X clear  Enter checkout  Esc menu")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
