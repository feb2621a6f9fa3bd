mod room;
mod room_command;
mod room_relay;

pub use room::*;
pub use room_command::*;
pub use room_relay::*;
