
pub use command_helpers::*;
pub use mock_signaling::*;
