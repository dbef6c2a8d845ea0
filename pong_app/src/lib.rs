pub mod frontend;
pub mod session;

pub use frontend::*;
pub use session::*;
