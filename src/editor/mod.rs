pub mod connection;
pub mod drag;
pub mod inspector;
pub mod intent;
pub mod session;

pub use connection::*;
pub use drag::*;
pub use inspector::*;
pub use intent::*;
pub use session::*;
