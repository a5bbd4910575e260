use crate::{Arrive, Blame};

/// The `Renderer` trait is the seam between the board and whatever actually puts pixels on the
/// screen.  A draw pass means "redraw everything now".  The coordinator calls it synchronously
/// and does not care how it goes; a renderer that can fail keeps its failures to itself.
///
/// In a windowed build the renderer is a [`crate::WindowPort`], which forwards to
/// [`winit::window::Window::request_redraw`].  In tests it is a counter.
pub trait Renderer {
    fn draw(&mut self);
}

/// Mutable references render too, so a caller can keep ownership of its renderer and lend it to
/// a coordinator for a while.
impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw(&mut self) {
        (**self).draw();
    }
}

/// The `RedrawCoordinator` decides when a requested redraw actually happens.
///
/// # Doing later what could be done now
///
/// Loading a game touches the board once per stone, and each touch wants a redraw.  Drawing
/// the whole board a few hundred times in a row looks terrible and helps nobody.  So before a
/// long-running action begins, the caller invokes [`RedrawCoordinator::action_starts`], and when
/// it is over, [`RedrawCoordinator::action_ends`].  Any [`RedrawCoordinator::request_redraw`]
/// in between only raises the `pending` flag, and the last matching `action_ends` turns the flag
/// into a single draw pass.
///
/// Actions nest.  An outer action that calls an inner one that brackets itself is fine, as long
/// as every start has exactly one end.  Only the outermost end gets to draw.
///
/// Outside of an action, every request draws immediately.  No coalescing happens when idle.
///
/// All methods take `&mut self`, so the borrow checker serializes access for us.  If you want to
/// share a coordinator across threads, wrap it in a lock and hold the lock for the whole call,
/// draw pass included.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RedrawCoordinator<R> {
    #[getter(skip)]
    renderer: R,
    depth: usize,
    pending: bool,
}

impl<R: Renderer> RedrawCoordinator<R> {
    /// Creates an idle coordinator that draws with `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            depth: 0,
            pending: false,
        }
    }

    /// Opens an action scope.  Requests made until the matching [`Self::action_ends`] are
    /// deferred.
    pub fn action_starts(&mut self) {
        self.depth += 1;
        tracing::trace!("Action starts, depth {}.", self.depth);
    }

    /// Closes the innermost action scope.  When this closes the outermost scope and a redraw was
    /// requested along the way, the renderer draws once before this method returns.
    ///
    /// Will [`Blame::UnbalancedActionScope`] if no action is open, in which case nothing changes.
    pub fn action_ends(&mut self) -> Arrive<()> {
        if self.depth == 0 {
            tracing::error!("Action ends without a matching start.");
            return Err(Blame::UnbalancedActionScope);
        }
        self.depth -= 1;
        tracing::trace!("Action ends, depth {}.", self.depth);
        if self.depth == 0 && self.pending {
            self.pending = false;
            tracing::trace!("Drawing deferred update.");
            self.renderer.draw();
        }
        Ok(())
    }

    /// Asks for a redraw.  Draws right away when idle, otherwise marks the redraw as pending.
    pub fn request_redraw(&mut self) {
        if self.depth == 0 {
            self.renderer.draw();
        } else if !self.pending {
            self.pending = true;
            tracing::trace!("Redraw deferred at depth {}.", self.depth);
        }
    }

    /// True while at least one action scope is open.
    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Counts draw passes.  Shared with the board tests.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct Tally {
        pub draws: usize,
    }

    impl Renderer for Tally {
        fn draw(&mut self) {
            self.draws += 1;
        }
    }

    fn draws(coordinator: &RedrawCoordinator<Tally>) -> usize {
        coordinator.renderer().draws
    }

    #[test]
    fn idle_requests_draw_every_time() {
        let mut redraw = RedrawCoordinator::new(Tally::default());
        for expected in 1..=5 {
            redraw.request_redraw();
            assert_eq!(draws(&redraw), expected);
        }
        assert!(!redraw.pending());
    }

    #[test]
    fn requests_inside_an_action_coalesce() {
        let mut redraw = RedrawCoordinator::new(Tally::default());
        redraw.action_starts();
        redraw.request_redraw();
        redraw.request_redraw();
        redraw.request_redraw();
        assert_eq!(draws(&redraw), 0);
        assert!(*redraw.pending());
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 1);
        assert!(!redraw.pending());
        assert_eq!(*redraw.depth(), 0);
    }

    #[test]
    fn empty_action_does_not_draw() {
        let mut redraw = RedrawCoordinator::new(Tally::default());
        redraw.action_starts();
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 0);
    }

    #[test]
    fn only_the_outermost_end_draws() {
        let mut redraw = RedrawCoordinator::new(Tally::default());
        redraw.action_starts();
        redraw.action_starts();
        redraw.request_redraw();
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 0);
        assert!(redraw.is_active());
        assert!(*redraw.pending());
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 1);
        assert!(!redraw.is_active());
    }

    #[test]
    fn request_in_outer_scope_survives_inner_scope() {
        let mut redraw = RedrawCoordinator::new(Tally::default());
        redraw.action_starts();
        redraw.request_redraw();
        redraw.action_starts();
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 0);
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 1);
    }

    #[test]
    fn unbalanced_end_is_reported() {
        let mut redraw = RedrawCoordinator::new(Tally::default());
        let result = redraw.action_ends();
        assert!(matches!(result, Err(Blame::UnbalancedActionScope)));
        assert_eq!(*redraw.depth(), 0);

        // The coordinator still works afterwards.
        redraw.action_starts();
        redraw.request_redraw();
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 1);
        assert!(redraw.action_ends().is_err());
        assert_eq!(draws(&redraw), 1);
    }

    #[test]
    fn immediate_then_deferred() {
        let mut redraw = RedrawCoordinator::new(Tally::default());
        redraw.request_redraw();
        assert_eq!(draws(&redraw), 1);
        redraw.action_starts();
        redraw.request_redraw();
        assert_eq!(draws(&redraw), 1);
        redraw.action_ends().unwrap();
        assert_eq!(draws(&redraw), 2);
    }

    #[test]
    fn borrowed_renderer_keeps_count() {
        let mut tally = Tally::default();
        {
            let mut redraw = RedrawCoordinator::new(&mut tally);
            redraw.action_starts();
            redraw.request_redraw();
            redraw.action_ends().unwrap();
            redraw.request_redraw();
        }
        assert_eq!(tally.draws, 2);
    }
}
