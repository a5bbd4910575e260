//! The `hoshi` crate is a Go board that draws later what could be drawn now.
//!
//! A board on screen changes a lot.  Every stone, every twitch of the cross-hair, every overlay
//! switched on or off wants the picture redrawn.  Most of the time that is fine: one change, one
//! draw.  But loading a game places a few hundred stones in a row, and drawing the board after
//! each one is slow and flickers.  So the heart of this crate is the [`RedrawCoordinator`], which
//! lets a caller open an action with [`RedrawCoordinator::action_starts`], collect redraw requests
//! while it runs, and turn them into one draw when [`RedrawCoordinator::action_ends`] closes it.
//!
//! Around the coordinator:
//!
//! 1. Coordinating draw passes - [`Board`]
//!     * [`Board::batch`], [`Board::load`], [`Board::frame_changed`]
//!     * [`Layer`] and [`Notice`] decide which changes need a redraw.
//! 2. Board geometry - [`Metrics`]
//! 3. Watching the cross-hair - [`CrossHairs`]
//! 4. Game records - [`Record`], [`Position`]
//! 5. Windows - [`App`], [`Lens`], [`Canvas`], [`Nav`]
//! 6. Settings and key bindings - [`Settings`], [`Cmd`], [`Act`]
//! 7. Background players - [`Imp`]
//!
//! To run the application, create a [`winit::event_loop::EventLoop`] with [`Event`] as its user
//! event, load [`Settings`], build an [`App`], and pass it to
//! [`winit::event_loop::EventLoop::run_app`].  The main function carries `#[tokio::main]`, so
//! background tasks have a runtime to run on.
mod act;
mod app;
mod board;
mod canvas;
mod cmd;
mod crosshair;
mod error;
mod event;
mod game;
mod id;
mod imp;
mod layer;
mod lens;
mod metrics;
mod nav;
mod point;
mod redraw;
mod settings;
mod status;
mod utils;

/// Since this is a small application, we lift all user-facing data types and functions to the
/// parent namespace for ease of access.
pub use act::Act;
pub use app::App;
pub use board::Board;
pub use canvas::Canvas;
pub use cmd::Cmd;
pub use crosshair::{CrossHair, CrossHairs};
pub use error::{Arrive, Blame};
pub use event::Event;
pub use game::{Move, Position, Record};
pub use id::Counter;
pub use imp::Imp;
pub use layer::{Layer, Notice, Overlays};
pub use lens::{Lens, WindowPort};
pub use metrics::Metrics;
pub use nav::Nav;
pub use point::{Point, Stone, MAX_SIZE, MIN_SIZE};
pub use redraw::{RedrawCoordinator, Renderer};
pub use settings::Settings;
pub use status::Status;
pub use utils::trace_init;
