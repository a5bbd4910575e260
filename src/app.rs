use crate::{Act, Arrive, Blame, Canvas, Cmd, Event, Imp, Lens, Record, Settings};
use std::collections::HashMap;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::{
    event::{self, ElementState, MouseButton, WindowEvent},
    event_loop, window,
};

/// The `app` module contains the `App` struct, which holds the parent-level view of the
/// application state.
///
/// # One board per window
///
/// Every window shows a [`Lens`], and every lens owns a [`crate::Board`].  The `App` routes
/// window events to the right lens: keyboard input becomes an [`Act`], pointer movement steers
/// the cross-hair, a left click places a stone, and a resize recomputes the board geometry.
///
/// Work that cannot happen on the event loop runs on [`tokio`] tasks.  Setting up a GPU canvas
/// and playing as an [`Imp`] both report back through the `proxy`, as [`Event`] variants handled
/// in [`App::user_event`].
///
/// ### Fields
///
/// * The `cmd` field holds the [`Cmd`] struct, which maps keyboard inputs to program responses.
/// * The `settings` field holds the [`Settings`] loaded from `Hoshi.toml`.
/// * The `proxy` field holds the [`event_loop::EventLoopProxy`] that async tasks use to send
///   [`Event`] values to the main event loop.
/// * The `windows` field holds a [`HashMap`] with keys of type [`window::WindowId`] and values of
///   type [`Lens`].
pub struct App {
    cmd: Cmd,
    settings: Settings,
    proxy: event_loop::EventLoopProxy<Event>,
    windows: HashMap<window::WindowId, Lens>,
}

impl App {
    /// Creates an instance of `App` from `settings`, translating the key bindings into a [`Cmd`].
    /// The `proxy` is cloned into every background task that needs to talk back to the loop.
    pub fn new(proxy: event_loop::EventLoopProxy<Event>, settings: Settings) -> Self {
        let cmd = Cmd::from(&settings);
        tracing::trace!("{:?}", cmd);
        Self {
            cmd,
            settings,
            proxy,
            windows: HashMap::new(),
        }
    }

    /// Opens a window with an empty board.
    ///
    /// The window starts invisible, because the accessibility adapter has to exist before the
    /// window is shown.  The GPU canvas is requested on a background task and attached when it
    /// arrives as [`Event::Canvas`].
    ///
    /// Will [`Blame::Os`] when [`event_loop::ActiveEventLoop::create_window`] fails.
    #[tracing::instrument(skip_all)]
    pub fn request_window(
        &mut self,
        event_loop: &event_loop::ActiveEventLoop,
    ) -> Arrive<window::WindowId> {
        let attr = window::Window::default_attributes()
            .with_title("Hoshi")
            .with_visible(false);
        let window = event_loop.create_window(attr)?;
        let adapter = accesskit_winit::Adapter::with_event_loop_proxy(&window, self.proxy.clone());
        window.set_visible(true);
        let window = Arc::new(window);
        let id = window.id();
        tracing::trace!("Window created: {:?}", id);

        let lens = Lens::new(adapter, Arc::clone(&window), *self.settings.board_size());
        self.windows.insert(id, lens);
        tracing::trace!("Total windows: {}", self.windows.len());

        let proxy = self.proxy.clone();
        tokio::spawn(async move {
            match Canvas::new(window).await {
                Ok(canvas) => {
                    if proxy.send_event(Event::Canvas(id, canvas)).is_err() {
                        tracing::trace!("Event loop closed before the canvas arrived.");
                    }
                }
                Err(e) => tracing::warn!("Canvas not created: {}", e.to_string()),
            }
        });
        Ok(id)
    }

    /// Reads the game record named in the settings and loads it into the board of window `id`.
    #[tracing::instrument(skip_all)]
    pub fn load_game(&mut self, id: &window::WindowId) -> Arrive<()> {
        let record = Record::from_path(self.settings.game())?;
        if let Some(lens) = self.windows.get_mut(id) {
            lens.load(&record)?;
        }
        Ok(())
    }

    /// Spawns as many [`Imp`] players as the settings ask for onto the board of window `id`.
    #[tracing::instrument(skip_all)]
    pub fn summon(&self, id: &window::WindowId) {
        let Some(lens) = self.windows.get(id) else {
            return;
        };
        let size = lens.board().size();
        let mut stone = *lens.turn();
        for _ in 0..*self.settings.imps() {
            let imp = Imp::summon(self.proxy.clone(), *id, size, stone);
            tokio::spawn(imp.hijinks());
            stone = stone.opponent();
        }
    }

    /// The act method dispatches program responses based upon the variant of [`Act`] passed in
    /// the `act` argument.  The `id` parameter identifies the window upon which to apply the
    /// action.  The `event_loop` provides a reference to the active event loop for new window
    /// creation.
    #[tracing::instrument(skip_all)]
    pub fn act(
        &mut self,
        act: &Act,
        id: &window::WindowId,
        event_loop: &event_loop::ActiveEventLoop,
    ) -> Arrive<()> {
        match act {
            Act::Exit => {
                tracing::trace!("Requesting exit.");
                self.windows.clear();
            }
            Act::NewWindow => {
                self.request_window(event_loop)?;
            }
            Act::CloseWindow => {
                tracing::trace!("Closing window.");
                self.windows.remove(id);
            }
            Act::LoadGame => self.load_game(id)?,
            Act::ClearBoard => {
                if let Some(lens) = self.windows.get_mut(id) {
                    lens.clear();
                }
            }
            Act::Summon => self.summon(id),
            Act::Coordinates => {
                if let Some(lens) = self.windows.get_mut(id) {
                    let on = !lens.board().overlays().coordinates;
                    lens.board_mut().set_coordinates(on);
                }
            }
            Act::Scoring => {
                if let Some(lens) = self.windows.get_mut(id) {
                    let on = !lens.board().overlays().scoring;
                    lens.board_mut().set_scoring(on);
                }
            }
            Act::Be => tracing::trace!("Taking it easy."),
        }
        Ok(())
    }

    /// Translates key presses into an [`Act`] using [`Cmd::act`], and hands it to [`App::act`].
    /// Releases and unbound keys are ignored.
    #[tracing::instrument(skip_all)]
    pub fn keyboard_input(
        &mut self,
        id: &window::WindowId,
        event: &event::KeyEvent,
        event_loop: &event_loop::ActiveEventLoop,
    ) -> Arrive<()> {
        if event.state.is_pressed() {
            if let Some(act) = self.cmd.act(event) {
                tracing::trace!("Act detected: {act}");
                self.act(&act, id, event_loop)?;
            } else {
                tracing::trace!("Unbound key: {:?}", event.logical_key);
            }
        }
        Ok(())
    }
}

/// The impl for `ApplicationHandler` keeps to routing.
/// * The `resumed` method opens the first window.  If that fails there is nothing to show, so we
///   log the problem and exit.
/// * The `user_event` method handles [`Event`] values sent from background tasks and from the
///   accessibility adapter.
/// * The `window_event` method feeds every event to the accessibility adapter first, then reacts
///   to input, resizes and redraws.
/// * The `about_to_wait` method exits once the last window is closed.
impl ApplicationHandler<Event> for App {
    #[tracing::instrument(skip_all)]
    fn resumed(&mut self, event_loop: &event_loop::ActiveEventLoop) {
        if !self.windows.is_empty() {
            return;
        }
        if let Err(e) = self.request_window(event_loop) {
            tracing::error!("Could not open a window: {}", e.to_string());
            event_loop.exit();
        }
    }

    #[tracing::instrument(skip_all)]
    fn user_event(&mut self, _event_loop: &event_loop::ActiveEventLoop, event: Event) {
        match event {
            Event::Access(access) => {
                let Some(lens) = self.windows.get_mut(&access.window_id) else {
                    return;
                };
                match access.window_event {
                    accesskit_winit::WindowEvent::InitialTreeRequested => lens.initial_tree(),
                    accesskit_winit::WindowEvent::ActionRequested(request) => {
                        tracing::trace!("Ignoring accessibility action {:?}.", request.action);
                    }
                    accesskit_winit::WindowEvent::AccessibilityDeactivated => {}
                }
            }
            Event::Canvas(id, canvas) => match self.windows.get_mut(&id) {
                Some(lens) => lens.attach(canvas),
                None => tracing::trace!("Canvas arrived for a closed window."),
            },
            Event::Move(id, mv) => {
                if let Some(lens) = self.windows.get_mut(&id) {
                    if let Err(e) = lens.play(&mv) {
                        tracing::trace!("Move {mv} turned down: {}", e.to_string());
                    }
                }
            }
        }
    }

    #[tracing::instrument(skip_all)]
    fn window_event(
        &mut self,
        event_loop: &event_loop::ActiveEventLoop,
        id: window::WindowId,
        event: WindowEvent,
    ) {
        let Some(lens) = self.windows.get_mut(&id) else {
            return;
        };
        let win = Arc::clone(lens.window());
        lens.adapter_mut().process_event(&win, &event);

        match event {
            WindowEvent::CloseRequested => {
                tracing::trace!("Closing Window={id:?}");
                self.windows.remove(&id);
                tracing::trace!("Windows remaining: {}", self.windows.len());
            }
            WindowEvent::KeyboardInput {
                event,
                is_synthetic: false,
                ..
            } => {
                if let Err(e) = self.keyboard_input(&id, &event, event_loop) {
                    tracing::warn!("{}", e.to_string());
                }
            }
            WindowEvent::CursorMoved { position, .. } => lens.hover(position.x, position.y),
            WindowEvent::CursorLeft { .. } => lens.leave(),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Err(e) = lens.place() {
                    tracing::trace!("Stone not placed: {}", e.to_string());
                }
            }
            WindowEvent::Resized(size) => lens.resize(size),
            WindowEvent::RedrawRequested => match lens.render() {
                Ok(()) => {}
                Err(Blame::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                    tracing::error!("Out of GPU memory, exiting.");
                    event_loop.exit();
                }
                Err(e) => tracing::trace!("Frame skipped: {}", e.to_string()),
            },
            _ => {}
        }
    }

    #[tracing::instrument(skip_all)]
    fn about_to_wait(&mut self, event_loop: &event_loop::ActiveEventLoop) {
        if self.windows.is_empty() {
            tracing::trace!("No windows left, exiting...");
            event_loop.exit();
        }
    }
}
