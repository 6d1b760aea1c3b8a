pub mod document;
pub mod engine;
pub mod store;

pub use document::*;
pub use engine::*;
pub use store::*;
