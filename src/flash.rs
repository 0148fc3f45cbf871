use std::fmt::Display;
use std::time::Instant;

/// Category of a flash notice, matching the categories the producing side
/// attaches to its messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl FlashLevel {
    fn from_tag(tag: &str) -> Option<FlashLevel> {
        match tag {
            "info" => Some(FlashLevel::Info),
            "success" => Some(FlashLevel::Success),
            "warning" => Some(FlashLevel::Warning),
            "error" => Some(FlashLevel::Error),
            _ => None,
        }
    }
}

impl Display for FlashLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Identity of a flash for the lifetime of the process. Timer tasks address
/// notices through the event channel, so they need something stable to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashState {
    Open,
    Closing { since: Instant },
}

pub struct Flash {
    pub id: FlashId,
    pub message: String,
    pub level: FlashLevel,
    pub state: FlashState,
}

impl Flash {
    pub(crate) fn new(id: FlashId, message: String, level: FlashLevel) -> Flash {
        Flash {
            id,
            message,
            level,
            state: FlashState::Open,
        }
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.state, FlashState::Closing { .. })
    }
}

/// Parses a `LEVEL:text` message string. Text without a recognised level
/// prefix is an info notice.
pub fn parse_message(raw: &str) -> (FlashLevel, String) {
    if let Some((tag, rest)) = raw.split_once(':') {
        if let Some(level) = FlashLevel::from_tag(tag) {
            return (level, rest.trim_start().to_string());
        }
    }
    (FlashLevel::Info, raw.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_parse_message_with_level() {
        assert_eq!(
            (FlashLevel::Error, "Disk full".to_string()),
            parse_message("error:Disk full")
        );
        assert_eq!(
            (FlashLevel::Success, "Saved".to_string()),
            parse_message("success: Saved")
        );
    }

    #[test]
    pub fn test_parse_message_without_level() {
        assert_eq!(
            (FlashLevel::Info, "hello there".to_string()),
            parse_message("hello there")
        );
    }

    #[test]
    pub fn test_parse_message_unknown_tag_is_message() {
        assert_eq!(
            (FlashLevel::Info, "note:remember this".to_string()),
            parse_message("note:remember this")
        );
    }

    #[test]
    pub fn test_new_flash_is_open() {
        let flash = Flash::new(FlashId(0), "hi".to_string(), FlashLevel::Info);
        assert_eq!(FlashState::Open, flash.state);
        assert!(!flash.is_closing());
    }
}
