use std::thread;
use std::time::{Duration, Instant};

use game_core::{
    create_ball, create_paddle, render_scene, reset_match, step, Config, Events, Side, Time,
};
use hecs::World;
use log::{debug, info};

use crate::frontend::{Frontend, FrontendError};

/// Fixed-rate frame limiter: sleeps out the remainder of each frame.
/// A rate of 0 disables limiting, for headless runs and tests.
pub struct FrameLimiter {
    frame: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(tick_rate: u32) -> Self {
        let frame = if tick_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / tick_rate
        };
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    /// Block until the next frame deadline
    pub fn wait(&mut self) {
        if self.frame.is_zero() {
            return;
        }
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }
        self.next += self.frame;
        // After a long stall (the game-over pause) start fresh instead of
        // burning through the missed deadlines
        let now = Instant::now();
        if self.next < now {
            self.next = now + self.frame;
        }
    }
}

/// One seated game of Pong: the world, the clock, and the tick loop
pub struct Session {
    world: World,
    time: Time,
    events: Events,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config);
        Self {
            world,
            time: Time::new(),
            events: Events::new(),
            config,
        }
    }

    pub fn tick(&self) -> u64 {
        self.time.tick
    }

    /// Run the frame loop until the frontend requests quit or fails.
    ///
    /// Per tick: wait out the frame, draw the current state, poll input
    /// (quit is observed here, discarding the in-flight tick), then step
    /// the simulation. A finished game presents the winner, pauses, and
    /// resets the match.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<(), FrontendError> {
        let mut limiter = FrameLimiter::new(self.config.tick_rate);
        loop {
            limiter.wait();

            frontend.draw(&render_scene(&self.world))?;

            let input = frontend.poll()?;
            if input.quit {
                info!("quit requested at tick {}", self.time.tick);
                return Ok(());
            }

            let game_over = step(
                &mut self.world,
                &mut self.time,
                &self.config,
                &input.controls,
                &mut self.events,
            );

            if self.events.left_scored || self.events.right_scored {
                let scene = render_scene(&self.world);
                info!(
                    "goal at tick {}: {} - {}",
                    self.time.tick, scene.left_score, scene.right_score
                );
            } else if self.events.ball_hit_paddle {
                debug!("paddle return at tick {}", self.time.tick);
            }

            if let Some(over) = game_over {
                info!(
                    "game over: {:?} wins {} - {}",
                    over.winner, over.left_score, over.right_score
                );
                frontend.present_winner(over.winner, over.left_score, over.right_score)?;
                thread::sleep(Duration::from_millis(self.config.game_over_delay_ms));
                reset_match(&mut self.world, &self.config);
            }
        }
    }
}
