use serde::Serialize;
use talk_admin_core::{PageEntry, PageWindow};

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

/// Pagination control as the command line presents it.
#[derive(Serialize)]
pub struct PaginationView {
    #[serde(flatten)]
    pub window: PageWindow,
    pub entries: Vec<PageEntry>,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
    pub bar: String,
}

impl From<PageWindow> for PaginationView {
    fn from(window: PageWindow) -> Self {
        Self {
            entries: window.entries(),
            prev_page: window.prev_target(),
            next_page: window.next_target(),
            bar: window.to_string(),
            window,
        }
    }
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    match serde_json::to_string(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => output_error(&format!("Failed to encode response: {}", e)),
    }
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    let list = ListResponse { items, count };
    output_success(list);
}

/// Outputs an error response to stderr and terminates the process.
///
/// Always exits with code 1 so shell scripts see the failure.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    let json = serde_json::to_string(&response)
        .unwrap_or_else(|_| format!("{{\"success\":false,\"error\":{:?}}}", message));
    eprintln!("{}", json);
    std::process::exit(1);
}
