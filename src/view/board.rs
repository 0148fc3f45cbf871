use std::time::{Duration, Instant};

use super::View;
use crate::app::App;
use crate::flash::{FlashLevel, FlashState};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct BoardView {}

impl View for BoardView {
    fn draw(app: &App, f: &mut Frame, area: Rect) {
        let now = Instant::now();
        let scheme = app.theme();

        for (row, flash) in app.board.flashes().iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let line = Rect::new(area.x, area.y + row as u16, area.width, 1);
            let offset = match flash.state {
                FlashState::Open => 0,
                FlashState::Closing { since } => slide_offset(
                    now.saturating_duration_since(since),
                    app.config.slide,
                    line.width,
                ),
            };
            if offset >= line.width {
                continue;
            }
            let slid = Rect::new(line.x + offset, line.y, line.width - offset, 1);
            let style = match flash.level {
                FlashLevel::Info => scheme.flash_info,
                FlashLevel::Success => scheme.flash_success,
                FlashLevel::Warning => scheme.flash_warning,
                FlashLevel::Error => scheme.flash_error,
            };
            f.render_widget(
                Paragraph::new(format!(" {} ", flash.message)).style(style),
                slid,
            );
        }
    }
}

/// Horizontal displacement of a closing flash: sweeps the full width over
/// the slide duration, then stays off screen.
pub fn slide_offset(elapsed: Duration, slide: Duration, width: u16) -> u16 {
    if slide.is_zero() || elapsed >= slide {
        return width;
    }
    let progress = elapsed.as_secs_f64() / slide.as_secs_f64();
    (progress * width as f64) as u16
}
