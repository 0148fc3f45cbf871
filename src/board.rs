use std::time::Instant;

use crate::flash::{Flash, FlashId, FlashLevel, FlashState};

/// The set of flash notices currently on screen. The board never reads the
/// clock itself; callers pass the current time in, which keeps the lifecycle
/// checkable under simulated time.
pub struct FlashBoard {
    flashes: Vec<Flash>,
    next_id: usize,
}

impl Default for FlashBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashBoard {
    pub fn new() -> Self {
        Self {
            flashes: Vec::new(),
            next_id: 0,
        }
    }

    pub fn post(&mut self, message: String, level: FlashLevel) -> FlashId {
        let id = FlashId(self.next_id);
        self.next_id += 1;
        self.flashes.push(Flash::new(id, message, level));
        id
    }

    /// Snapshot of the flashes present right now.
    pub fn ids(&self) -> Vec<FlashId> {
        self.flashes.iter().map(|f| f.id).collect()
    }

    /// Begins the closing transition. Returns false if the flash is absent
    /// or already closing; re-marking must not restart the animation.
    pub fn mark_closing(&mut self, id: FlashId, now: Instant) -> bool {
        match self.flashes.iter_mut().find(|f| f.id == id) {
            Some(flash) if !flash.is_closing() => {
                flash.state = FlashState::Closing { since: now };
                true
            }
            _ => false,
        }
    }

    /// Detaches the flash permanently. Removing an absent flash is not an
    /// error, it is already satisfied.
    pub fn remove(&mut self, id: FlashId) -> bool {
        let before = self.flashes.len();
        self.flashes.retain(|f| f.id != id);
        self.flashes.len() != before
    }

    pub fn flashes(&self) -> &[Flash] {
        &self.flashes
    }

    pub(crate) fn count(&self) -> usize {
        self.flashes.len()
    }

    pub(crate) fn first_id(&self) -> Option<FlashId> {
        self.flashes.first().map(|f| f.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_post_assigns_distinct_ids() {
        let mut board = FlashBoard::new();
        let a = board.post("one".to_string(), FlashLevel::Info);
        let b = board.post("two".to_string(), FlashLevel::Error);

        assert_ne!(a, b);
        assert_eq!(vec![a, b], board.ids());
        assert_eq!(2, board.count());
    }

    #[test]
    pub fn test_lifecycle_open_closing_removed() {
        let mut board = FlashBoard::new();
        let id = board.post("bye".to_string(), FlashLevel::Info);
        assert!(!board.flashes()[0].is_closing());

        assert!(board.mark_closing(id, Instant::now()));
        assert!(board.flashes()[0].is_closing());

        assert!(board.remove(id));
        assert_eq!(0, board.count());
    }

    #[test]
    pub fn test_mark_closing_twice_keeps_first_timestamp() {
        let mut board = FlashBoard::new();
        let id = board.post("bye".to_string(), FlashLevel::Info);
        let first = Instant::now();

        assert!(board.mark_closing(id, first));
        assert!(!board.mark_closing(id, first + std::time::Duration::from_millis(100)));
        assert_eq!(FlashState::Closing { since: first }, board.flashes()[0].state);
    }

    #[test]
    pub fn test_mark_closing_absent_is_noop() {
        let mut board = FlashBoard::new();
        assert!(!board.mark_closing(FlashId(42), Instant::now()));
    }

    #[test]
    pub fn test_remove_twice_is_noop() {
        let mut board = FlashBoard::new();
        let id = board.post("bye".to_string(), FlashLevel::Info);

        assert!(board.remove(id));
        assert!(!board.remove(id));
        assert!(!board.mark_closing(id, Instant::now()));
    }

    #[test]
    pub fn test_removal_leaves_other_flashes_alone() {
        let mut board = FlashBoard::new();
        let a = board.post("one".to_string(), FlashLevel::Info);
        let b = board.post("two".to_string(), FlashLevel::Warning);

        assert!(board.remove(b));
        assert_eq!(vec![a], board.ids());
        assert_eq!("one", board.flashes()[0].message);
    }

    #[test]
    pub fn test_first_id() {
        let mut board = FlashBoard::new();
        assert_eq!(None, board.first_id());
        let a = board.post("one".to_string(), FlashLevel::Info);
        board.post("two".to_string(), FlashLevel::Info);
        assert_eq!(Some(a), board.first_id());
    }
}
