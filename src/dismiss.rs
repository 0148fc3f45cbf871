use std::time::Duration;

use tokio::task;
use tokio::time;

use crate::event::input::{AppEvent, EventSender};
use crate::flash::FlashId;

/// Schedules the removal timeline of every flash captured at ready time.
///
/// Each flash gets its own task: wait the dismiss delay, signal the closing
/// transition, wait out the slide, signal removal. Timelines are independent
/// and unordered relative to each other. This is fire-and-forget cosmetic
/// work; a closed channel just means the app is shutting down.
pub struct Dismisser {
    delay: Duration,
    slide: Duration,
    sender: EventSender,
    armed: bool,
}

impl Dismisser {
    pub fn new(delay: Duration, slide: Duration, sender: EventSender) -> Dismisser {
        Dismisser {
            delay,
            slide,
            sender,
            armed: false,
        }
    }

    /// Arms one removal timeline per captured flash. Runs once per process;
    /// a second ready signal is ignored.
    pub fn arm(&mut self, ids: Vec<FlashId>) {
        if self.armed {
            log::warn!("dismisser armed twice, ignoring {} flashes", ids.len());
            return;
        }
        self.armed = true;

        for id in ids {
            let sender = self.sender.clone();
            let delay = self.delay;
            let slide = self.slide;
            task::spawn(async move {
                time::sleep(delay).await;
                if sender.send(AppEvent::FlashClosing(id)).await.is_err() {
                    return;
                }
                time::sleep(slide).await;
                let _ = sender.send(AppEvent::FlashRemove(id)).await;
            });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn dismisser(sender: EventSender) -> Dismisser {
        Dismisser::new(
            Duration::from_millis(5000),
            Duration::from_millis(300),
            sender,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_flash_timeline() {
        let (sender, mut receiver) = mpsc::channel(16);
        let start = Instant::now();
        let mut dismisser = dismisser(sender);
        dismisser.arm(vec![FlashId(0)]);

        match receiver.recv().await {
            Some(AppEvent::FlashClosing(id)) => assert_eq!(FlashId(0), id),
            other => panic!("expected closing event, got {:?}", other),
        }
        assert_eq!(Duration::from_millis(5000), start.elapsed());

        match receiver.recv().await {
            Some(AppEvent::FlashRemove(id)) => assert_eq!(FlashId(0), id),
            other => panic!("expected remove event, got {:?}", other),
        }
        assert_eq!(Duration::from_millis(5300), start.elapsed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_capture_schedules_nothing() {
        let (sender, mut receiver) = mpsc::channel(16);
        let mut dismisser = dismisser(sender);
        dismisser.arm(vec![]);

        let waited = time::timeout(Duration::from_millis(10_000), receiver.recv()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_flashes_dismissed_independently() {
        let (sender, mut receiver) = mpsc::channel(16);
        let mut dismisser = dismisser(sender);
        dismisser.arm(vec![FlashId(3), FlashId(7)]);

        let mut closing = vec![];
        for _ in 0..2 {
            match receiver.recv().await {
                Some(AppEvent::FlashClosing(id)) => closing.push(id.0),
                other => panic!("expected closing event, got {:?}", other),
            }
        }
        closing.sort();
        assert_eq!(vec![3, 7], closing);

        let mut removed = vec![];
        for _ in 0..2 {
            match receiver.recv().await {
                Some(AppEvent::FlashRemove(id)) => removed.push(id.0),
                other => panic!("expected remove event, got {:?}", other),
            }
        }
        removed.sort();
        assert_eq!(vec![3, 7], removed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_arm_is_ignored() {
        let (sender, mut receiver) = mpsc::channel(16);
        let mut dismisser = dismisser(sender);
        dismisser.arm(vec![FlashId(1)]);
        dismisser.arm(vec![FlashId(1)]);

        assert!(matches!(
            receiver.recv().await,
            Some(AppEvent::FlashClosing(FlashId(1)))
        ));
        assert!(matches!(
            receiver.recv().await,
            Some(AppEvent::FlashRemove(FlashId(1)))
        ));

        let waited = time::timeout(Duration::from_millis(60_000), receiver.recv()).await;
        assert!(waited.is_err());
    }
}
