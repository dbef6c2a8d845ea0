use hecs::World;

use crate::components::{Paddle, Side};
use crate::config::Config;
use crate::scene::Drawable;

/// Final state of a finished game, handed to the shell for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub winner: Side,
    pub left_score: u32,
    pub right_score: u32,
}

/// Credit a goal to the scoring side. Reports game over once either score
/// reaches the winning threshold; presenting and resetting is the caller's
/// job.
pub fn apply_score(world: &mut World, scorer: Side, config: &Config) -> Option<GameOver> {
    let mut left_score = 0;
    let mut right_score = 0;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
        }
        match paddle.side {
            Side::Left => left_score = paddle.score,
            Side::Right => right_score = paddle.score,
        }
    }

    if left_score >= config.win_score || right_score >= config.win_score {
        Some(GameOver {
            winner: scorer,
            left_score,
            right_score,
        })
    } else {
        None
    }
}

/// Start a fresh game: zero both scores and recenter both paddles.
/// The ball is left alone; it was already reset when the goal was scored.
pub fn reset_match(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.score = 0;
        paddle.reset(config);
    }
}
