use std::time::Duration;

use clap::Parser;

use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Flash notice shown at startup, as LEVEL:text (repeatable)
    #[arg(short, long = "message")]
    pub messages: Vec<String>,

    /// Delay before a flash starts closing, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub delay_ms: u64,

    /// Duration of the slide-out transition, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub slide_ms: u64,

    /// Colour theme (dark or solarized)
    #[arg(long)]
    pub theme: Option<String>,

    #[arg(long)]
    pub log_path: Option<String>,
}

pub fn load_config() -> Config {
    let args = Args::parse();
    Config {
        messages: args.messages,
        delay: Duration::from_millis(args.delay_ms),
        slide: Duration::from_millis(args.slide_ms),
        theme: match args.theme.as_deref() {
            Some("solarized") => Theme::SolarizedDark,
            _ => Theme::Dark,
        },
        log_path: args.log_path,
    }
}

#[derive(Clone)]
pub struct Config {
    pub messages: Vec<String>,
    pub delay: Duration,
    pub slide: Duration,
    pub theme: Theme,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            messages: vec![],
            delay: Duration::from_millis(5000),
            slide: Duration::from_millis(300),
            theme: Theme::Dark,
            log_path: None,
        }
    }
}
