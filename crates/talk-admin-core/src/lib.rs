pub mod config;
pub mod error;
pub mod pagination;
pub mod result;

pub use config::AdminConfig;
pub use error::AdminError;
pub use pagination::{Boundary, PageEntry, PageWindow, MAX_VISIBLE_PAGES};
pub use result::AdminResult;
