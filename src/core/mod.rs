pub mod error;
pub mod family;

pub use error::{ResolveError, Result};
pub use family::Family;
