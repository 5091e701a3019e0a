mod error;
mod sample;

pub use error::*;
pub use sample::*;
