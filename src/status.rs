use crate::{CrossHair, Move};

/// The `Status` struct holds the text of the status line and the state of the activity
/// indicator.  The indicator spins while an action is in progress.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Status {
    text: String,
    busy: bool,
}

impl Status {
    /// Sets the activity indicator.  Returns `true` if it changed.
    pub fn set_busy(&mut self, busy: bool) -> bool {
        let changed = self.busy != busy;
        self.busy = busy;
        changed
    }

    /// Sets the status line text.  Returns `true` if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            false
        } else {
            self.text = text;
            true
        }
    }

    /// Text describing the cross-hair while placing a stone.
    pub fn cross_hair_text(cross_hair: &CrossHair) -> Option<String> {
        cross_hair.point().map(|point| {
            if *cross_hair.legal() {
                format!("{point}")
            } else {
                format!("{point} - occupied")
            }
        })
    }

    /// Text describing the last move played.
    pub fn move_text(mv: &Move, count: usize) -> String {
        format!("Move {count}: {mv}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Stone};

    #[test]
    fn changes_are_reported() {
        let mut status = Status::default();
        assert!(status.set_busy(true));
        assert!(!status.set_busy(true));
        assert!(status.set_text("Loading"));
        assert!(!status.set_text("Loading"));
        assert_eq!(status.text(), "Loading");
    }

    #[test]
    fn cross_hair_text_mentions_legality() {
        let hidden = CrossHair::default();
        assert_eq!(Status::cross_hair_text(&hidden), None);
        let open = CrossHair::new(Some(Point::new(4, 4)), true);
        assert_eq!(Status::cross_hair_text(&open).unwrap(), "D4");
        let taken = CrossHair::new(Some(Point::new(4, 4)), false);
        assert_eq!(Status::cross_hair_text(&taken).unwrap(), "D4 - occupied");
    }

    #[test]
    fn move_text_counts() {
        let mv = Move::new(Stone::White, "C3".to_string());
        assert_eq!(Status::move_text(&mv, 2), "Move 2: White C3");
    }
}
