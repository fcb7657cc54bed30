use web_time::Instant;

use crate::Millis;

/// Monotonic game clock: milliseconds since `start`. `web_time` makes the
/// same code tick on native targets and in the browser.
#[derive(Copy, Clone, Debug)]
pub struct GameClock {
    origin: Instant,
}

impl GameClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::start()
    }
}
