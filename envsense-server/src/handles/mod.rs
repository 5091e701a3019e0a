pub mod data_handle;
pub mod page_handle;

pub use data_handle::*;
pub use page_handle::*;
