pub mod model;

pub use model::{ClientMessage, ConnectionId, ServerMessage};
