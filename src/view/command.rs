use super::View;
use crate::app::{App, InputMode};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct CommandView {}

impl View for CommandView {
    fn draw(app: &App, f: &mut Frame, area: Rect) {
        if app.input_mode != InputMode::Command {
            return;
        }
        let value = format!(":{}", app.command_input.value());
        f.render_widget(Paragraph::new(value).style(app.theme().command_line), area);
        f.set_cursor_position((
            area.x + 1 + app.command_input.visual_cursor() as u16,
            area.y,
        ));
    }
}
