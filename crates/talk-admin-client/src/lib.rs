pub mod api;
pub mod http;
pub mod workflows;

pub use api::AdminApi;
pub use http::HttpAdminClient;
