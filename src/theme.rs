use ratatui::style::Color;
use ratatui::style::Style;

#[derive(Clone, Copy, Debug)]
pub enum Theme {
    Dark,
    SolarizedDark,
}

impl Theme {
    pub fn scheme(&self) -> Scheme {
        match self {
            Theme::SolarizedDark => Scheme {
                flash_info: Style::default().fg(Solarized::Base3.to_color()).bg(Solarized::Blue.to_color()),
                flash_success: Style::default().fg(Solarized::Base03.to_color()).bg(Solarized::Green.to_color()),
                flash_warning: Style::default().fg(Solarized::Base03.to_color()).bg(Solarized::Yellow.to_color()),
                flash_error: Style::default().fg(Solarized::Base3.to_color()).bg(Solarized::Red.to_color()),
                status_bar: Style::default().fg(Solarized::Base1.to_color()).bg(Solarized::Base02.to_color()),
                command_line: Style::default().fg(Solarized::Base0.to_color()),
            },
            Theme::Dark => Scheme {
                flash_info: Style::default().fg(Color::White).bg(Color::Blue),
                flash_success: Style::default().fg(Color::Black).bg(Color::Green),
                flash_warning: Style::default().fg(Color::Black).bg(Color::Yellow),
                flash_error: Style::default().fg(Color::White).bg(Color::Red),
                status_bar: Style::default().fg(Color::White).bg(Color::DarkGray),
                command_line: Style::default().fg(Color::Yellow),
            },
        }
    }
}

pub struct Scheme {
    pub flash_info: Style,
    pub flash_success: Style,
    pub flash_warning: Style,
    pub flash_error: Style,

    pub status_bar: Style,
    pub command_line: Style,
}

enum Solarized {
    Base03,
    Base02,
    Base1,
    Base0,
    Base3,
    Yellow,
    Red,
    Blue,
    Green,
}

impl Solarized {
    fn to_color(&self) -> Color {
        match self {
            Solarized::Base03 => Color::Rgb(0, 43, 54),
            Solarized::Base02 => Color::Rgb(7, 54, 66),
            Solarized::Base1 => Color::Rgb(147, 161, 161),
            Solarized::Base0 => Color::Rgb(131, 148, 150),
            Solarized::Base3 => Color::Rgb(253, 246, 227),
            Solarized::Yellow => Color::Rgb(181, 137, 0),
            Solarized::Red => Color::Rgb(220, 50, 47),
            Solarized::Blue => Color::Rgb(38, 139, 210),
            Solarized::Green => Color::Rgb(133, 153, 0),
        }
    }
}
