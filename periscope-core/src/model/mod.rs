mod connection;
mod signaling;

pub use connection::ConnectionId;
pub use signaling::{ClientMessage, ServerMessage};
