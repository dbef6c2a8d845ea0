use glam::Vec2;

use crate::components::Side;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 700.0;
    pub const WINDOW_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 4.0;
    pub const PADDLE_PADDING: f32 = 30.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    pub const MAX_BOUNCE_ANGLE_DEG: f32 = 45.0;

    // Match
    pub const WIN_SCORE: u32 = 10;
    pub const TICK_RATE: u32 = 60;
    pub const GAME_OVER_DELAY_MS: u64 = 3000;
}

/// Game configuration, fixed at startup and passed to every component
#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_padding: f32,
    pub ball_radius: f32,
    pub ball_start_speed: f32,
    pub max_bounce_angle_deg: f32,
    pub win_score: u32,
    pub tick_rate: u32,
    pub game_over_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_padding: Params::PADDLE_PADDING,
            ball_radius: Params::BALL_RADIUS,
            ball_start_speed: Params::BALL_START_SPEED,
            max_bounce_angle_deg: Params::MAX_BOUNCE_ANGLE_DEG,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            game_over_delay_ms: Params::GAME_OVER_DELAY_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting X (left edge) for a paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_padding,
            Side::Right => self.window_width - self.paddle_padding - self.paddle_width,
        }
    }

    /// Starting Y (top edge) that centers a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.window_height / 2.0 - self.paddle_height / 2.0
    }

    /// Center of the window, where the ball spawns and serves from
    pub fn window_center(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }
}
