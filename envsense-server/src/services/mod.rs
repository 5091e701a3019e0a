mod page_service;
mod sample_service;

pub use page_service::*;
pub use sample_service::*;
