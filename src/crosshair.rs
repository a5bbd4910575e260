use crate::Point;
use tokio::sync::watch;

/// Where the cross-hair is pointing while the user is placing a stone, and whether a stone could
/// go there.  `point` is `None` when the cross-hair is hidden.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, derive_new::new, derive_getters::Getters)]
pub struct CrossHair {
    point: Option<Point>,
    legal: bool,
}

/// The `CrossHairs` struct publishes the cross-hair to anyone who asks.
///
/// Interested parties call [`CrossHairs::subscribe`] and get a [`watch::Receiver`].  They can
/// `await` changes from a task, or poll `has_changed` from the event loop.  The receiver always
/// holds the latest value, so point and legality are read together and never disagree.
#[derive(Debug)]
pub struct CrossHairs {
    tx: watch::Sender<CrossHair>,
}

impl CrossHairs {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(CrossHair::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<CrossHair> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> CrossHair {
        *self.tx.borrow()
    }

    /// Moves the cross-hair.  Subscribers only hear about actual changes.  Returns `true` when
    /// something changed.
    pub fn move_to(&mut self, point: Option<Point>, legal: bool) -> bool {
        let next = CrossHair::new(point, legal);
        self.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}

impl Default for CrossHairs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_changes() {
        let mut hairs = CrossHairs::new();
        let mut rx = hairs.subscribe();
        assert!(!rx.has_changed().unwrap());

        assert!(hairs.move_to(Some(Point::new(4, 4)), true));
        assert!(rx.has_changed().unwrap());
        let seen = *rx.borrow_and_update();
        assert_eq!(*seen.point(), Some(Point::new(4, 4)));
        assert!(*seen.legal());
    }

    #[test]
    fn unchanged_moves_are_quiet() {
        let mut hairs = CrossHairs::new();
        let mut rx = hairs.subscribe();
        hairs.move_to(Some(Point::new(4, 4)), true);
        rx.borrow_and_update();
        assert!(!hairs.move_to(Some(Point::new(4, 4)), true));
        assert!(!rx.has_changed().unwrap());

        // Same point, different legality still counts.
        assert!(hairs.move_to(Some(Point::new(4, 4)), false));
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn no_subscribers_is_fine() {
        let mut hairs = CrossHairs::new();
        assert!(!hairs.move_to(None, false));
        assert!(hairs.move_to(Some(Point::new(1, 1)), true));
        assert_eq!(*hairs.current().point(), Some(Point::new(1, 1)));
    }
}
