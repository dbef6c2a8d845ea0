use glam::Vec2;

use crate::config::Config;

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle movement direction for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDir {
    Up,
    Down,
}

/// Paddle component - one per player
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub width: f32,
    pub height: f32,
    pub score: u32,
    pub hits: u32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_start_y()),
            width: config.paddle_width,
            height: config.paddle_height,
            score: 0,
            hits: 0,
        }
    }

    /// Move one paddle-speed increment, clamped so the paddle never
    /// leaves the vertical window bounds
    pub fn move_vertical(&mut self, dir: VerticalDir, config: &Config) {
        match dir {
            VerticalDir::Up => {
                self.pos.y = (self.pos.y - config.paddle_speed).max(0.0);
            }
            VerticalDir::Down => {
                self.pos.y =
                    (self.pos.y + config.paddle_speed).min(config.window_height - self.height);
            }
        }
    }

    /// Horizontal midline, used to decide which way a bounce sends the ball
    pub fn mid_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2,
    pub radius: f32,
    pub speed_max: f32,
}

impl Ball {
    /// Spawn centered, served toward the right side with no vertical motion
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.window_center(),
            vel: Vec2::new(config.ball_start_speed, 0.0),
            radius: config.ball_radius,
            speed_max: config.ball_start_speed,
        }
    }

    /// Integrate one tick of motion, keeping the ball fully inside the window
    pub fn advance(&mut self, config: &Config) {
        self.pos += self.vel;
        self.pos.x = self
            .pos
            .x
            .clamp(self.radius, config.window_width - self.radius);
        self.pos.y = self
            .pos
            .y
            .clamp(self.radius, config.window_height - self.radius);
    }
}

/// Per-tick movement intent for a paddle, filled from the input snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_starts_centered() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, &config);
        assert_eq!(paddle.pos, Vec2::new(30.0, 200.0));
        assert_eq!(paddle.score, 0);
        assert_eq!(paddle.hits, 0);
    }

    #[test]
    fn test_paddle_clamps_at_top() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, &config);
        for _ in 0..1000 {
            paddle.move_vertical(VerticalDir::Up, &config);
        }
        assert_eq!(paddle.pos.y, 0.0, "Paddle must stop at the top edge");
    }

    #[test]
    fn test_paddle_clamps_at_bottom() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Right, &config);
        for _ in 0..1000 {
            paddle.move_vertical(VerticalDir::Down, &config);
        }
        assert_eq!(
            paddle.pos.y,
            config.window_height - config.paddle_height,
            "Paddle must stop at the bottom edge"
        );
    }

    #[test]
    fn test_paddle_moves_by_speed() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, &config);
        let start_y = paddle.pos.y;
        paddle.move_vertical(VerticalDir::Down, &config);
        assert_eq!(paddle.pos.y, start_y + config.paddle_speed);
        paddle.move_vertical(VerticalDir::Up, &config);
        assert_eq!(paddle.pos.y, start_y);
    }

    #[test]
    fn test_ball_spawns_centered_moving_right() {
        let config = Config::new();
        let ball = Ball::new(&config);
        assert_eq!(ball.pos, config.window_center());
        assert_eq!(ball.vel, Vec2::new(config.ball_start_speed, 0.0));
    }

    #[test]
    fn test_ball_advance_adds_velocity() {
        let config = Config::new();
        let mut ball = Ball::new(&config);
        ball.vel = Vec2::new(3.0, -2.0);
        ball.advance(&config);
        assert_eq!(ball.pos, Vec2::new(353.0, 248.0));
    }

    #[test]
    fn test_ball_advance_clamps_to_window() {
        let config = Config::new();
        let mut ball = Ball::new(&config);
        ball.vel = Vec2::new(10_000.0, -10_000.0);
        ball.advance(&config);
        assert_eq!(ball.pos.x, config.window_width - ball.radius);
        assert_eq!(ball.pos.y, ball.radius);
    }
}
