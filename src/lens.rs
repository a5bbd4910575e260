use crate::{canvas, Arrive, Blame, Board, Canvas, Move, Nav, Record, Renderer, Stone};
use std::sync::Arc;
use winit::window;

/// The `WindowPort` renders a board by asking the window to redraw itself.
///
/// [`winit`] merges redraw requests until the next [`winit::event::WindowEvent::RedrawRequested`],
/// and painting happens there, in [`Lens::render`].  So a draw pass here is cheap, and a burst of
/// them between two frames costs one frame.
#[derive(Debug, Clone, derive_new::new)]
pub struct WindowPort {
    window: Arc<window::Window>,
}

impl Renderer for WindowPort {
    fn draw(&mut self) {
        self.window.request_redraw();
    }
}

/// The `lens` module provides the [`Lens`] struct, which holds everything we know about one
/// board window.
///
/// # Representing window state with `Lens`
///
/// A `Lens` pairs a window with the [`Board`] shown in it.  The board decides when to redraw,
/// the window's [`Canvas`] does the painting, and the accessibility adapter tells screen readers
/// what the status line says.
///
/// The canvas arrives late.  Asking for a GPU device is async, so the lens starts without one,
/// and [`Lens::attach`] fills it in once the background task delivers.
#[derive(derive_getters::Getters)]
pub struct Lens {
    #[getter(skip)]
    adapter: accesskit_winit::Adapter,
    board: Board<WindowPort>,
    canvas: Option<Canvas>,
    nav: Nav,
    /// Colour of the next stone placed by hand.
    turn: Stone,
    window: Arc<window::Window>,
}

impl Lens {
    /// Creates a lens for `window` showing an empty board with `size` lines.
    pub fn new(adapter: accesskit_winit::Adapter, window: Arc<window::Window>, size: u8) -> Self {
        let mut board = Board::new(WindowPort::new(Arc::clone(&window)), size);
        let inner = window.inner_size();
        board.frame_changed(inner.width as f64, inner.height as f64);
        Self {
            adapter,
            board,
            canvas: None,
            nav: Nav::default(),
            turn: Stone::Black,
            window,
        }
    }

    pub fn board_mut(&mut self) -> &mut Board<WindowPort> {
        &mut self.board
    }

    pub fn adapter_mut(&mut self) -> &mut accesskit_winit::Adapter {
        &mut self.adapter
    }

    /// Takes delivery of the canvas and schedules the first frame.
    pub fn attach(&mut self, mut canvas: Canvas) {
        canvas.resize(self.window.inner_size());
        self.canvas = Some(canvas);
        tracing::trace!("Canvas attached to {:?}.", self.window.id());
        self.board.request_redraw();
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.resize(size);
        }
        self.board.frame_changed(size.width as f64, size.height as f64);
    }

    /// Paints the board.  Lost and outdated surfaces are reconfigured and retried on the next
    /// frame.
    pub fn render(&mut self) -> Arrive<()> {
        let colour = if self.board.overlays().scoring {
            canvas::DUSK
        } else {
            canvas::WOOD
        };
        let Some(canvas) = self.canvas.as_mut() else {
            return Ok(());
        };
        match canvas.render(colour) {
            Err(Blame::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                tracing::warn!("Surface lost, reconfiguring.");
                canvas.resize(self.window.inner_size());
                self.window.request_redraw();
                Ok(())
            }
            result => result,
        }
    }

    /// Moves the cross-hair to the point under the pointer at (`x`, `y`).
    pub fn hover(&mut self, x: f64, y: f64) {
        let point = self.board.cross_hair_point_near(x, y);
        self.board.move_cross_hair_to(point);
        self.announce();
    }

    /// Hides the cross-hair.
    pub fn leave(&mut self) {
        self.board.move_cross_hair_to(None);
    }

    /// Places a stone of the current colour at the cross-hair.
    pub fn place(&mut self) -> Arrive<()> {
        if let Some(point) = *self.board.cross_hair().point() {
            let mv = Move::new(self.turn, point.to_string());
            self.play(&mv)?;
        }
        Ok(())
    }

    /// Plays `mv` and hands the turn to the other colour.
    pub fn play(&mut self, mv: &Move) -> Arrive<()> {
        self.board.play(mv)?;
        self.turn = mv.stone().opponent();
        self.announce();
        Ok(())
    }

    /// Clears the board and loads `record` in a single action.
    pub fn load(&mut self, record: &Record) -> Arrive<usize> {
        let played = self.board.batch(|board| {
            board.clear();
            board.load(record)
        })??;
        self.turn = self
            .board
            .last()
            .as_ref()
            .map(|mv| mv.stone().opponent())
            .unwrap_or(Stone::Black);
        self.announce();
        Ok(played)
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.turn = Stone::Black;
        self.announce();
    }

    /// Sends the status line to the screen reader, if it changed.
    pub fn announce(&mut self) {
        let nav = &mut self.nav;
        let text = self.board.status().text().clone();
        if let Some(update) = nav.announce(&text) {
            self.adapter.update_if_active(|| update);
        }
    }

    /// The full accessibility tree, for when the screen reader first asks.
    pub fn initial_tree(&mut self) {
        let tree = self.nav.initial_tree();
        self.adapter.update_if_active(|| tree);
    }
}
