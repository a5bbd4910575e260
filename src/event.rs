use crate::{Canvas, Move};
use winit::window::WindowId;

/// Custom events sent to the event loop through its proxy.
#[derive(derive_more::From)]
pub enum Event {
    /// Accessibility requests from the screen reader.
    #[from]
    Access(accesskit_winit::Event),
    /// A GPU canvas finished setting up for the window.
    Canvas(WindowId, Canvas),
    /// A background player wants to play on the window's board.
    Move(WindowId, Move),
}
