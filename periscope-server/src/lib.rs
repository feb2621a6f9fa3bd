pub mod room;
pub mod signaling;

pub use room::*;
pub use signaling::*;
