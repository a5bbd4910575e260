use crate::{Arrive, Event, Move, Point, Stone};
use convert_case::Casing;
use rand::Rng;
use std::time::Duration;
use tokio::time;
use winit::{event_loop, window};

/// Shortest and longest pause between two moves, in millis.
const PAUSE: std::ops::Range<u64> = 400..2500;

/// The purpose of the `Imp` struct is to play moves on a board without the user's consent.
///
/// An imp is a very bad Go player.  It picks a point at random, thinks about it for a while, and
/// sends the move to the event loop through the proxy.  It never looks at the board, so now and
/// then it picks an occupied point, and the board turns the move down.  Imps take turns with
/// themselves, alternating colours, and give up after as many tries as the board has points.
///
/// Imps run on a [`tokio`] task and do not touch the board directly.  The event loop owns the
/// board, and message passing keeps it that way.
#[derive(Debug, derive_getters::Getters)]
pub struct Imp {
    /// Name of the imp, not guaranteed to be unique.
    name: String,
    /// Board size to pick points for.
    size: u8,
    /// Colour of the next move.
    stone: Stone,
    /// The window whose board the imp is playing on.
    window: window::WindowId,
    #[getter(skip)]
    proxy: event_loop::EventLoopProxy<Event>,
}

impl Imp {
    /// Summons an imp with a random title-case name.
    pub fn summon(
        proxy: event_loop::EventLoopProxy<Event>,
        window: window::WindowId,
        size: u8,
        stone: Stone,
    ) -> Self {
        let name = names::Generator::default()
            .next()
            .unwrap_or_else(|| "nameless-imp".to_string())
            .to_case(convert_case::Case::Title);
        tracing::info!("{name} joins the game as {stone}.");
        Self {
            name,
            size,
            stone,
            window,
            proxy,
        }
    }

    /// Picks a random point on the board.
    pub fn pick(&self) -> Point {
        let mut rng = rand::thread_rng();
        let column = rng.gen_range(1..=self.size);
        let row = rng.gen_range(1..=self.size);
        Point::new(column, row)
    }

    /// Thinks for a random while.
    pub async fn pause() {
        let pause = rand::thread_rng().gen_range(PAUSE);
        tracing::trace!("Pausing for {pause} millis");
        time::sleep(Duration::from_millis(pause)).await;
    }

    /// Picks a point and sends the move.  Will [`crate::Blame::EventLoopClosed`] once the
    /// application is gone.
    #[tracing::instrument(skip_all)]
    pub async fn meddle(&mut self) -> Arrive<()> {
        Self::pause().await;
        let mv = Move::new(self.stone, self.pick().to_string());
        tracing::trace!("{} plays {mv}.", self.name);
        self.proxy.send_event(Event::Move(self.window, mv))?;
        self.stone = self.stone.opponent();
        Ok(())
    }

    /// Keeps meddling until the tries run out or the event loop closes.
    #[tracing::instrument(skip_all)]
    pub async fn hijinks(mut self) {
        let tries = self.size as usize * self.size as usize;
        for _ in 0..tries {
            if let Err(e) = self.meddle().await {
                tracing::trace!("{} stops: {}", self.name, e.to_string());
                return;
            }
        }
        tracing::info!("{} is bored.", self.name);
    }
}
