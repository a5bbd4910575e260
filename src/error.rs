/// The `Blame` enum collects the ways things can go wrong in `hoshi`.  Most variants wrap an
/// error from a third-party crate so that we can use the `?` operator freely, and let the caller
/// decide who to blame.
///
/// The one variant that belongs to us alone is [`Blame::UnbalancedActionScope`].  It means some
/// caller ended an action it never started, which is a bug upstream rather than a runtime
/// condition, so we report it loudly and leave the action depth at zero.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Blame {
    #[display("Action ended without a matching start.")]
    UnbalancedActionScope,
    #[display("Input/output error: {_0}")]
    #[from]
    Io(std::io::Error),
    #[display("Could not read csv: {_0}")]
    #[from]
    Csv(csv::Error),
    #[display("Bad configuration: {_0}")]
    #[from]
    Config(config::ConfigError),
    #[display("Event loop error: {_0}")]
    #[from]
    EventLoop(winit::error::EventLoopError),
    #[display("Could not create window: {_0}")]
    #[from]
    Os(winit::error::OsError),
    #[display("Event loop is closed.")]
    EventLoopClosed,
    #[display("Could not create surface: {_0}")]
    #[from]
    CreateSurface(wgpu::CreateSurfaceError),
    #[display("Could not request device: {_0}")]
    #[from]
    RequestDevice(wgpu::RequestDeviceError),
    #[display("No graphics adapter available.")]
    NoAdapter,
    #[display("Surface error: {_0}")]
    #[from]
    Surface(wgpu::SurfaceError),
    #[display("Unknown vertex: {vertex}")]
    UnknownVertex {
        #[error(not(source))]
        vertex: String,
    },
    #[display("Point {vertex} is already occupied.")]
    Occupied {
        #[error(not(source))]
        vertex: String,
    },
}

/// We only care that the loop is gone, not which event bounced off of it.
impl<T> From<winit::event_loop::EventLoopClosed<T>> for Blame {
    fn from(_: winit::event_loop::EventLoopClosed<T>) -> Self {
        Self::EventLoopClosed
    }
}

impl Blame {
    pub fn unknown_vertex(vertex: &str) -> Self {
        Self::UnknownVertex {
            vertex: vertex.to_string(),
        }
    }
}

/// Results in `hoshi` arrive eventually, or there is someone to [`Blame`].
pub type Arrive<T> = Result<T, Blame>;
