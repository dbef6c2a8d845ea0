use hecs::World;

use crate::components::{Paddle, PaddleIntent, Side};
use crate::resources::InputState;

/// Copy this tick's control snapshot into each paddle's movement intent
pub fn apply_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = match paddle.side {
            Side::Left => PaddleIntent {
                up: input.left_up,
                down: input.left_down,
            },
            Side::Right => PaddleIntent {
                up: input.right_up,
                down: input.right_down,
            },
        };
    }
}
