/// Fixed-timestep clock
///
/// Wall-clock frame time is accumulated and paid out as whole ticks, so
/// entity movement is the same per tick regardless of the display rate.
use std::time::{Duration, Instant};

/// Default update rate (60 ticks per second)
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Length of one tick
    timestep: Duration,

    /// Accumulated time not yet paid out as ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total ticks handed out
    tick_count: u64,
}

impl GameLoop {
    /// Create a clock running at `tick_rate` ticks per second
    pub fn new(tick_rate: u32) -> Self {
        let tick_rate = tick_rate.max(1);
        Self {
            timestep: Duration::from_secs_f64(1.0 / tick_rate as f64),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall-clock time and return the ticks it pays for
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.timestep && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.timestep;
            ticks += 1;
        }

        // Drop what we could not catch up on instead of carrying it forward
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.timestep {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TICK: Duration = Duration::from_micros(16_667);

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::default();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert!(!game_loop.paused);
        assert_relative_eq!(game_loop.timestep.as_secs_f32(), 1.0 / 60.0, epsilon = 1e-6);
    }

    #[test]
    fn test_one_tick_per_timestep() {
        let mut game_loop = GameLoop::default();
        assert_eq!(game_loop.advance(TICK), 1);
        assert_eq!(game_loop.advance(TICK * 2), 2);
        assert_eq!(game_loop.tick_count(), 3);
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_partial_time_carries_over() {
        let mut game_loop = GameLoop::default();
        assert_eq!(game_loop.advance(TICK / 2), 0);
        assert_eq!(game_loop.advance(TICK / 2 + Duration::from_micros(10)), 1);
    }

    #[test]
    fn test_ticks_capped_per_frame() {
        let mut game_loop = GameLoop::default();
        assert_eq!(game_loop.advance(Duration::from_millis(300)), MAX_TICKS_PER_FRAME);
        // The backlog was dropped, not replayed
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut game_loop = GameLoop::default();
        game_loop.pause();
        assert_eq!(game_loop.advance(Duration::from_millis(50)), 0);
        assert_eq!(game_loop.frame_count(), 1);

        game_loop.resume();
        assert_eq!(game_loop.advance(TICK), 1);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::default();
        game_loop.toggle_pause();
        assert!(game_loop.paused);
        game_loop.toggle_pause();
        assert!(!game_loop.paused);
    }

    #[test]
    fn test_custom_rate() {
        let mut game_loop = GameLoop::new(30);
        assert_eq!(game_loop.advance(Duration::from_millis(34)), 1);
    }

    #[test]
    fn test_zero_rate_clamped() {
        let game_loop = GameLoop::new(0);
        assert_eq!(game_loop.timestep, Duration::from_secs(1));
    }
}
