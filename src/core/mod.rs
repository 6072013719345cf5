pub mod defaults;
pub mod error;
pub mod paths;
pub mod sequence;

pub use error::{Error, ErrorCode, Result};
