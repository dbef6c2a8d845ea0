pub mod components;
pub mod config;
pub mod resources;
pub mod scene;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;
pub use scene::*;
pub use systems::*;

use hecs::World;

/// Advance the Pong simulation by exactly one tick
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    input: &InputState,
    events: &mut Events,
) -> Option<GameOver> {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest this tick's control snapshot
    apply_inputs(world, input);

    // 2. Move paddles, clamped to the window
    move_paddles(world, config);

    // 3. Move the ball
    move_ball(world, config);

    // 4. Walls, goal lines, paddle bounces
    let scorer = resolve_collisions(world, config, events);

    // 5. Credit the goal and check the winning score
    let game_over = scorer.and_then(|side| apply_score(world, side, config));

    time.tick += 1;
    game_over
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::default()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config),))
}
