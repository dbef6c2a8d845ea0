use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent, VerticalDir};
use crate::config::Config;

/// Apply paddle movement intents. Both directions held applies both moves
/// in sequence, clamping each time, so a paddle pinned to an edge still
/// drifts off it.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up {
            paddle.move_vertical(VerticalDir::Up, config);
        }
        if intent.down {
            paddle.move_vertical(VerticalDir::Down, config);
        }
    }
}

/// Move the ball one tick along its velocity
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance(config);
    }
}
