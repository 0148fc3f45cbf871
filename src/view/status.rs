use super::View;
use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct StatusView {}

impl View for StatusView {
    fn draw(app: &App, f: &mut Frame, area: Rect) {
        f.render_widget(status_widget(app), area);
    }
}

fn status_widget(app: &App) -> Paragraph {
    Paragraph::new(vec![Line::from(vec![
        Span::styled(
            format!(" 󰍡 {} ", app.board.count()),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(match app.board.count() {
                    0 => Color::DarkGray,
                    _ => Color::Green,
                })
                .fg(Color::Black),
        ),
        Span::styled(format!(" {} ", app.input_mode), app.theme().status_bar),
    ])])
    .style(app.theme().status_bar)
}
