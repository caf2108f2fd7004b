//! Status Bar View
//!
//! One line at the bottom: `[HH:MM:SS] glyph text            [topic]`.

use crate::state::{NoticeKind, StatusBarState};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

fn color_for(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Busy => Color::Cyan,
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Info => Color::Blue,
    }
}

pub fn render(state: &StatusBarState, area: Rect, f: &mut Frame) {
    let Some(notice) = state.latest() else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            format!("[{}] ", notice.at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} ", notice.kind.glyph()),
            Style::default().fg(color_for(notice.kind)),
        ),
        Span::styled(
            notice.text.clone(),
            Style::default().fg(color_for(notice.kind)),
        ),
        Span::styled(
            format!("  [{}]", notice.topic.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
