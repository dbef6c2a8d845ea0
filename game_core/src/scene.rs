use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;

/// A primitive for the external renderer to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { min: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
}

/// Shared capability of the on-court entities: produce a draw primitive,
/// and restore the starting state between rounds
pub trait Drawable {
    fn draw(&self) -> Shape;
    fn reset(&mut self, config: &Config);
}

impl Drawable for Paddle {
    fn draw(&self) -> Shape {
        Shape::Rect {
            min: self.pos,
            size: Vec2::new(self.width, self.height),
        }
    }

    /// Restore the starting Y only; score and hit counters are untouched
    fn reset(&mut self, config: &Config) {
        self.pos.y = config.paddle_start_y();
    }
}

impl Drawable for Ball {
    fn draw(&self) -> Shape {
        Shape::Circle {
            center: self.pos,
            radius: self.radius,
        }
    }

    /// Recenter and serve away from the side the ball was travelling toward,
    /// with no vertical motion and the starting speed restored
    fn reset(&mut self, config: &Config) {
        self.pos = config.window_center();
        self.speed_max = config.ball_start_speed;
        self.vel.x = if self.vel.x < 0.0 {
            config.ball_start_speed
        } else {
            -config.ball_start_speed
        };
        self.vel.y = 0.0;
    }
}

/// Everything the external renderer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub left_score: u32,
    pub right_score: u32,
}

/// Collect the per-tick draw list and both scores.
/// The core never draws; the frontend consumes this.
pub fn render_scene(world: &World) -> Scene {
    let mut scene = Scene::default();
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        scene.shapes.push(paddle.draw());
        match paddle.side {
            Side::Left => scene.left_score = paddle.score,
            Side::Right => scene.right_score = paddle.score,
        }
    }
    for (_entity, ball) in world.query::<&Ball>().iter() {
        scene.shapes.push(ball.draw());
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    #[test]
    fn test_paddle_reset_restores_start_y_only() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, &config);
        paddle.pos.y = 0.0;
        paddle.score = 7;
        paddle.hits = 42;

        paddle.reset(&config);

        assert_eq!(paddle.pos.y, config.paddle_start_y());
        assert_eq!(paddle.score, 7, "Reset must not touch the score");
        assert_eq!(paddle.hits, 42, "Reset must not touch the hit counter");
    }

    #[test]
    fn test_paddle_reset_is_idempotent() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Right, &config);
        paddle.pos.y = 480.0;

        paddle.reset(&config);
        let once = paddle.pos.y;
        paddle.reset(&config);

        assert_eq!(paddle.pos.y, once, "Second reset must change nothing");
    }

    #[test]
    fn test_ball_reset_serves_opposite_to_previous_heading() {
        let config = Config::new();
        let mut ball = Ball::new(&config);

        ball.vel = Vec2::new(3.2, -1.5);
        ball.reset(&config);
        assert_eq!(ball.vel, Vec2::new(-config.ball_start_speed, 0.0));
        assert_eq!(ball.pos, config.window_center());

        ball.vel = Vec2::new(-2.0, 4.0);
        ball.reset(&config);
        assert_eq!(ball.vel, Vec2::new(config.ball_start_speed, 0.0));
    }

    #[test]
    fn test_ball_reset_restores_speed_max() {
        let config = Config::new();
        let mut ball = Ball::new(&config);
        ball.speed_max = 99.0;

        ball.reset(&config);

        assert_eq!(ball.speed_max, config.ball_start_speed);
    }

    #[test]
    fn test_render_scene_collects_shapes_and_scores() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config);

        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Left {
                paddle.score = 3;
            } else {
                paddle.score = 5;
            }
        }

        let scene = render_scene(&world);

        assert_eq!(scene.shapes.len(), 3, "Two paddles and one ball");
        assert_eq!(scene.left_score, 3);
        assert_eq!(scene.right_score, 5);
        let circles = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
            .count();
        assert_eq!(circles, 1);
    }
}
