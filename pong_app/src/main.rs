//! Headless exhibition match: two scripted bots chase the ball until one
//! takes a game or the tick budget runs out.
//!
//! Run with `RUST_LOG=info cargo run -p pong_app`.

use game_core::{Config, InputState, Scene, Shape};
use log::info;
use pong_app::{FrameInput, Frontend, FrontendError, Session};

const TICK_BUDGET: u64 = 100_000;

/// Frontend stand-in: logs instead of drawing and steers both paddles
/// toward the ball's height. The right bot reacts late, so rallies end.
struct Exhibition {
    last_scene: Option<Scene>,
    half_court: f32,
    games_left: u32,
    polls: u64,
}

impl Exhibition {
    fn new(config: &Config, games: u32) -> Self {
        Self {
            last_scene: None,
            half_court: config.window_width / 2.0,
            games_left: games,
            polls: 0,
        }
    }
}

impl Frontend for Exhibition {
    fn poll(&mut self) -> Result<FrameInput, FrontendError> {
        self.polls += 1;
        if self.games_left == 0 || self.polls > TICK_BUDGET {
            return Ok(FrameInput {
                controls: InputState::default(),
                quit: true,
            });
        }

        let scene = match &self.last_scene {
            Some(scene) => scene,
            None => return Ok(FrameInput::default()),
        };

        let mut ball_y = None;
        let mut left_mid = None;
        let mut right_mid = None;
        for shape in &scene.shapes {
            match *shape {
                Shape::Circle { center, .. } => ball_y = Some(center.y),
                Shape::Rect { min, size } => {
                    let mid = min.y + size.y / 2.0;
                    if min.x < self.half_court {
                        left_mid = Some(mid);
                    } else {
                        right_mid = Some(mid);
                    }
                }
            }
        }

        let mut controls = InputState::default();
        if let (Some(ball_y), Some(left), Some(right)) = (ball_y, left_mid, right_mid) {
            controls.left_up = ball_y < left - 4.0;
            controls.left_down = ball_y > left + 4.0;
            // Sluggish: only chases once the ball is clearly away
            controls.right_up = ball_y < right - 36.0;
            controls.right_down = ball_y > right + 36.0;
        }
        Ok(FrameInput {
            controls,
            quit: false,
        })
    }

    fn draw(&mut self, scene: &Scene) -> Result<(), FrontendError> {
        self.last_scene = Some(scene.clone());
        Ok(())
    }

    fn present_winner(
        &mut self,
        winner: game_core::Side,
        left_score: u32,
        right_score: u32,
    ) -> Result<(), FrontendError> {
        info!("{winner:?} takes the game, {left_score} - {right_score}");
        self.games_left = self.games_left.saturating_sub(1);
        Ok(())
    }
}

fn main() {
    env_logger::init();

    // Headless: no frame cap, no game-over pause
    let config = Config {
        tick_rate: 0,
        game_over_delay_ms: 0,
        ..Config::default()
    };

    let mut exhibition = Exhibition::new(&config, 1);
    let mut session = Session::new(config);
    if let Err(err) = session.run(&mut exhibition) {
        log::error!("session aborted: {err}");
        std::process::exit(1);
    }
    info!("exhibition finished after {} ticks", session.tick());
}
