use crate::{
    Arrive, CrossHair, CrossHairs, Layer, Metrics, Move, Notice, Overlays, Point, Position,
    Record, RedrawCoordinator, Renderer, Status,
};
use tokio::sync::watch;

/// The `Board` struct is the face the rest of the application sees of a Go board on screen.
///
/// # Coordinating the draw passes
///
/// Everything that changes the picture goes through here: stones, the cross-hair, overlays, the
/// size of the view.  Each change becomes a [`Notice`], and each [`Layer`] decides whether the
/// notice concerns it.  If any visible layer is affected, the board asks its
/// [`RedrawCoordinator`] for a redraw, and the coordinator decides whether that happens now or at
/// the end of the current action.
///
/// Nobody outside the board draws directly.  Callers that are about to make many changes in a
/// row, like loading a game, wrap them in [`Board::action_starts`] and [`Board::action_ends`], or
/// hand a closure to [`Board::batch`].
///
/// The board does not own a window.  The [`Renderer`] it is built with does whatever drawing
/// means in context.
#[derive(Debug, derive_getters::Getters)]
pub struct Board<R> {
    redraw: RedrawCoordinator<R>,
    metrics: Metrics,
    position: Position,
    #[getter(skip)]
    cross_hairs: CrossHairs,
    status: Status,
    overlays: Overlays,
    /// Number of moves played since the board was last cleared.
    moves: usize,
    /// The last move that made it onto the board.
    last: Option<Move>,
}

impl<R: Renderer> Board<R> {
    /// Creates an empty board with `size` lines that draws using `renderer`.  The view has no
    /// area until the first [`Board::frame_changed`].
    pub fn new(renderer: R, size: u8) -> Self {
        Self {
            redraw: RedrawCoordinator::new(renderer),
            metrics: Metrics::new(0.0, 0.0, size),
            position: Position::new(size),
            cross_hairs: CrossHairs::new(),
            status: Status::default(),
            overlays: Overlays::default(),
            moves: 0,
            last: None,
        }
    }

    pub fn size(&self) -> u8 {
        *self.position.size()
    }

    /// Starts a long-running action.  Redraws wait until the matching [`Board::action_ends`].
    pub fn action_starts(&mut self) {
        self.redraw.action_starts();
        if self.status.set_busy(true) {
            tracing::trace!("Board is busy.");
        }
    }

    /// Ends a long-running action.  Ending the outermost one draws whatever accumulated.
    ///
    /// Will [`crate::Blame::UnbalancedActionScope`] if no action is in progress.
    pub fn action_ends(&mut self) -> Arrive<()> {
        if *self.redraw.depth() == 1 && self.status.set_busy(false) {
            tracing::trace!("Board is idle.");
        }
        self.redraw.action_ends()
    }

    /// Runs `f` inside an action, so everything it changes shows up in a single draw pass.
    pub fn batch<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Arrive<T> {
        self.action_starts();
        let result = f(self);
        self.action_ends()?;
        Ok(result)
    }

    /// The view changed size.  Recomputes the metrics, then asks for a redraw.
    pub fn frame_changed(&mut self, width: f64, height: f64) {
        self.metrics = Metrics::new(width, height, self.size());
        tracing::trace!("Spacing now {}.", self.metrics.spacing());
        self.notify(Notice::Geometry);
    }

    /// Asks for a redraw of everything, for when the surface itself was replaced.
    pub fn request_redraw(&mut self) {
        self.redraw.request_redraw();
    }

    /// Plays `mv` on the board.  Returns the point played.
    ///
    /// Will [`crate::Blame::UnknownVertex`] if the vertex does not fit the board and
    /// [`crate::Blame::Occupied`] if the point is taken.
    pub fn play(&mut self, mv: &Move) -> Arrive<Point> {
        let point = Point::parse(mv.vertex(), self.size())?;
        self.position.place(point, *mv.stone())?;
        self.moves += 1;
        self.last = Some(mv.clone());
        self.status.set_text(Status::move_text(mv, self.moves));
        // A stone under the cross-hair changes its legality in the same pass.
        let aimed = *self.cross_hairs.current().point() == Some(point) && self.aim(Some(point));
        if aimed {
            self.notify_all(&[Notice::Stones, Notice::CrossHair]);
        } else {
            self.notify(Notice::Stones);
        }
        Ok(point)
    }

    /// Plays every move in `record` inside a single action.  Moves that do not fit are skipped
    /// with a warning.  Returns the number of moves played.
    #[tracing::instrument(skip_all)]
    pub fn load(&mut self, record: &Record) -> Arrive<usize> {
        let played = self.batch(|board| {
            record
                .iter()
                .filter(|mv| match board.play(mv) {
                    Ok(_) => true,
                    Err(e) => {
                        tracing::warn!("Skipping {mv}: {}", e.to_string());
                        false
                    }
                })
                .count()
        })?;
        tracing::info!("Loaded {played} of {} moves.", record.len());
        Ok(played)
    }

    /// Removes all stones.
    pub fn clear(&mut self) {
        if self.position.is_empty() {
            return;
        }
        self.position.clear();
        self.moves = 0;
        self.last = None;
        self.status.set_text("");
        let point = *self.cross_hairs.current().point();
        if self.aim(point) {
            self.notify_all(&[Notice::Stones, Notice::CrossHair]);
        } else {
            self.notify(Notice::Stones);
        }
    }

    /// Moves the cross-hair to `point`, or hides it on `None`.  The move counts as legal when the
    /// point is empty.
    pub fn move_cross_hair_to(&mut self, point: Option<Point>) {
        if self.aim(point) {
            self.notify(Notice::CrossHair);
        }
    }

    /// Points the cross-hair at `point` without notifying the layers.  Returns `true` if the
    /// cross-hair changed.
    fn aim(&mut self, point: Option<Point>) -> bool {
        let legal = point
            .map(|p| self.position.is_empty_at(&p))
            .unwrap_or(false);
        if !self.cross_hairs.move_to(point, legal) {
            return false;
        }
        if let Some(text) = Status::cross_hair_text(&self.cross_hairs.current()) {
            self.status.set_text(text);
        }
        true
    }

    pub fn cross_hair(&self) -> CrossHair {
        self.cross_hairs.current()
    }

    /// Observers of the cross-hair subscribe here.
    pub fn subscribe(&self) -> watch::Receiver<CrossHair> {
        self.cross_hairs.subscribe()
    }

    /// The point a cross-hair should focus on for a pointer at (`x`, `y`).
    pub fn cross_hair_point_near(&self, x: f64, y: f64) -> Option<Point> {
        self.metrics.cross_hair_point_near(x, y)
    }

    /// The intersection under the view position (`x`, `y`).
    pub fn point_near(&self, x: f64, y: f64) -> Option<Point> {
        self.metrics.point_near(x, y)
    }

    pub fn set_coordinates(&mut self, on: bool) {
        if self.overlays.coordinates != on {
            self.overlays.coordinates = on;
            // Switching off needs one more pass to erase the labels.
            let shown = Overlays {
                coordinates: true,
                ..self.overlays
            };
            self.notify_with(Notice::Coordinates, &shown);
        }
    }

    pub fn set_scoring(&mut self, on: bool) {
        if self.overlays.scoring != on {
            self.overlays.scoring = on;
            let shown = Overlays {
                scoring: true,
                ..self.overlays
            };
            self.notify_with(Notice::Scoring, &shown);
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notify_all(&[notice]);
    }

    /// Several notices from one change still make a single request.
    fn notify_all(&mut self, notices: &[Notice]) {
        let overlays = self.overlays;
        for notice in notices {
            if Layer::any_affected(notice, &overlays) {
                tracing::trace!("{notice} needs a redraw.");
                self.redraw.request_redraw();
                return;
            }
        }
    }

    fn notify_with(&mut self, notice: Notice, overlays: &Overlays) {
        if Layer::any_affected(&notice, overlays) {
            tracing::trace!("{notice} needs a redraw.");
            self.redraw.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redraw::tests::Tally;
    use crate::{Blame, Stone};

    fn board() -> Board<Tally> {
        let mut board = Board::new(Tally::default(), 9);
        board.frame_changed(500.0, 500.0);
        board
    }

    fn draws(board: &Board<Tally>) -> usize {
        board.redraw().renderer().draws
    }

    fn mv(stone: Stone, vertex: &str) -> Move {
        Move::new(stone, vertex.to_string())
    }

    #[test]
    fn frame_changes_redraw() {
        let board = board();
        assert_eq!(draws(&board), 1);
        assert_eq!(*board.metrics().spacing(), 50.0);
    }

    #[test]
    fn each_move_draws_when_idle() {
        let mut board = board();
        board.play(&mv(Stone::Black, "C3")).unwrap();
        board.play(&mv(Stone::White, "G7")).unwrap();
        assert_eq!(draws(&board), 3);
        assert_eq!(board.status().text(), "Move 2: White G7");
    }

    #[test]
    fn loading_draws_once() {
        let mut board = board();
        let record = Record::from(vec![
            mv(Stone::Black, "C3"),
            mv(Stone::White, "G7"),
            mv(Stone::Black, "C3"),
            mv(Stone::White, "Z1"),
            mv(Stone::Black, "E5"),
        ]);
        let played = board.load(&record).unwrap();
        assert_eq!(played, 3);
        assert_eq!(board.position().len(), 3);
        assert_eq!(draws(&board), 2);
        assert!(!board.status().busy());
    }

    #[test]
    fn nested_batches_draw_once() {
        let mut board = board();
        board.action_starts();
        assert!(*board.status().busy());
        board
            .batch(|inner| {
                inner.play(&mv(Stone::Black, "A1")).unwrap();
                inner.set_coordinates(true);
            })
            .unwrap();
        assert_eq!(draws(&board), 1);
        assert!(*board.status().busy());
        board.action_ends().unwrap();
        assert_eq!(draws(&board), 2);
        assert!(!board.status().busy());
    }

    #[test]
    fn unbalanced_end_is_blamed() {
        let mut board = board();
        assert!(matches!(
            board.action_ends(),
            Err(Blame::UnbalancedActionScope)
        ));
        assert_eq!(*board.redraw().depth(), 0);
    }

    #[test]
    fn bad_moves_do_not_draw() {
        let mut board = board();
        board.play(&mv(Stone::Black, "E5")).unwrap();
        assert!(board.play(&mv(Stone::White, "E5")).is_err());
        assert!(board.play(&mv(Stone::White, "K10")).is_err());
        assert_eq!(draws(&board), 2);
    }

    #[test]
    fn cross_hair_tracks_legality() {
        let mut board = board();
        let mut rx = board.subscribe();
        let point = board.cross_hair_point_near(250.0, 300.0);
        assert_eq!(point, Some(Point::new(5, 5)));
        board.move_cross_hair_to(point);
        assert!(*rx.borrow_and_update().legal());
        assert_eq!(board.status().text(), "E5");
        assert_eq!(draws(&board), 2);

        // Playing under the cross-hair makes it illegal.
        board.play(&mv(Stone::Black, "E5")).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(!*rx.borrow_and_update().legal());
        assert_eq!(board.status().text(), "E5 - occupied");

        // Same point again is not news.
        board.move_cross_hair_to(point);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn hidden_overlays_toggle_with_one_draw() {
        let mut board = board();
        board.set_scoring(true);
        assert_eq!(draws(&board), 2);
        board.set_scoring(true);
        assert_eq!(draws(&board), 2);
        board.set_scoring(false);
        assert_eq!(draws(&board), 3);
        assert!(!board.overlays().scoring);
    }

    #[test]
    fn clearing_an_empty_board_is_quiet() {
        let mut board = board();
        board.clear();
        assert_eq!(draws(&board), 1);
        board.play(&mv(Stone::Black, "E5")).unwrap();
        board.clear();
        assert_eq!(draws(&board), 3);
        assert_eq!(*board.moves(), 0);
        assert!(board.position().is_empty());
    }

    #[test]
    fn playing_under_the_cross_hair_draws_once() {
        let mut board = board();
        board.move_cross_hair_to(Some(Point::new(5, 5)));
        assert_eq!(draws(&board), 2);
        board.play(&mv(Stone::Black, "E5")).unwrap();
        assert_eq!(draws(&board), 3);
        assert!(!*board.cross_hair().legal());
    }

    #[test]
    fn clearing_under_the_cross_hair_draws_once() {
        let mut board = board();
        board.play(&mv(Stone::Black, "C3")).unwrap();
        board.move_cross_hair_to(Some(Point::new(3, 3)));
        assert_eq!(draws(&board), 3);
        assert!(!*board.cross_hair().legal());
        board.clear();
        assert_eq!(draws(&board), 4);
        assert!(*board.cross_hair().legal());
        assert_eq!(board.status().text(), "C3");
    }

    #[test]
    fn busy_while_a_batch_runs() {
        let mut board = board();
        let busy = board.batch(|inner| *inner.status().busy()).unwrap();
        assert!(busy);
        assert!(!board.status().busy());
    }

    #[test]
    fn last_move_skips_turned_down_moves() {
        let mut board = board();
        let record = Record::from(vec![
            mv(Stone::Black, "C3"),
            mv(Stone::White, "G7"),
            mv(Stone::Black, "G7"),
        ]);
        board.load(&record).unwrap();
        assert_eq!(*board.last(), Some(mv(Stone::White, "G7")));
        board.clear();
        assert_eq!(*board.last(), None);
    }
}
