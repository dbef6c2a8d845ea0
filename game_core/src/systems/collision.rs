use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;
use crate::scene::Drawable;

/// Resolve ball collisions for one tick: walls first, then the goal lines,
/// then the paddles. Returns the side that scored, if any; a goal ends the
/// tick with no further checks.
pub fn resolve_collisions(
    world: &mut World,
    config: &Config,
    events: &mut Events,
) -> Option<Side> {
    // Work on a copy so paddle queries below don't fight the borrow
    let ball_data = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    };
    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return None, // no ball in world
    };

    // Top/bottom wall bounce: elastic, no corner handling
    if ball.pos.y - ball.radius <= 0.0 || ball.pos.y + ball.radius >= config.window_height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }

    // Goal lines: reset the ball and report the scorer
    if ball.pos.x + ball.radius >= config.window_width {
        ball.reset(config);
        events.left_scored = true;
        store_ball(world, ball);
        return Some(Side::Left);
    }
    if ball.pos.x - ball.radius <= 0.0 {
        ball.reset(config);
        events.right_scored = true;
        store_ball(world, ball);
        return Some(Side::Right);
    }

    // Paddle contacts. Simultaneous overlaps apply in sequence, last wins.
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if !overlaps(paddle, &ball) {
            continue;
        }

        paddle.hits += 1;

        // Contact point along the paddle height: 0 at the top edge, 1 at
        // the bottom. Unclamped when the ball center sits outside the span.
        let diff = (ball.pos.y - paddle.pos.y) / paddle.height;
        // Maps [0, 1] onto [-max_angle, +max_angle]
        let angle_deg = config.max_bounce_angle_deg * 2.0 * diff - config.max_bounce_angle_deg;
        let angle = angle_deg.to_radians();

        let dir = if ball.pos.x < paddle.mid_x() {
            -1.0
        } else {
            1.0
        };
        ball.vel.x = dir * ball.speed_max * angle.cos();
        ball.vel.y = ball.speed_max * angle.sin();
        events.ball_hit_paddle = true;
    }

    store_ball(world, ball);
    None
}

/// Paddle rectangle vs the ball's bounding square
fn overlaps(paddle: &Paddle, ball: &Ball) -> bool {
    !(paddle.pos.x + paddle.width <= ball.pos.x - ball.radius
        || paddle.pos.x >= ball.pos.x + ball.radius
        || paddle.pos.y >= ball.pos.y + ball.radius
        || paddle.pos.y + paddle.height <= ball.pos.y - ball.radius)
}

fn store_ball(world: &mut World, ball: Ball) {
    for (_entity, slot) in world.query_mut::<&mut Ball>() {
        *slot = ball;
    }
}
