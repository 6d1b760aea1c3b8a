pub mod model;
pub mod validate;

pub use model::*;
pub use validate::*;
