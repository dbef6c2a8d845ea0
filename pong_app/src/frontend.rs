use game_core::{InputState, Scene, Side};
use thiserror::Error;

/// Failure surfaced by an external input or render backend. The simulation
/// itself has no fallible operations; any of these aborts the session loop.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("input backend failed: {0}")]
    Input(String),
    #[error("render backend failed: {0}")]
    Render(String),
}

/// Controls snapshot plus the process-level quit signal for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub controls: InputState,
    pub quit: bool,
}

/// The seam to the external collaborators: a key-state source, a renderer,
/// and a game-over presenter. The core hands over positions, sizes, and
/// scores; everything on the other side of this trait is I/O.
pub trait Frontend {
    /// Snapshot of the currently pressed controls, taken at the top of a tick
    fn poll(&mut self) -> Result<FrameInput, FrontendError>;

    /// Draw one frame
    fn draw(&mut self, scene: &Scene) -> Result<(), FrontendError>;

    /// Show the winner and final scores; the session pauses afterwards
    /// before resetting the match
    fn present_winner(
        &mut self,
        winner: Side,
        left_score: u32,
        right_score: u32,
    ) -> Result<(), FrontendError>;
}
