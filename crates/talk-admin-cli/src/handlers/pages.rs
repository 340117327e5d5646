use talk_admin_core::PageWindow;

use crate::output::{self, PaginationView};

pub fn handle(current: i64, total: i64) -> anyhow::Result<()> {
    match PageWindow::calculate(current, total) {
        Ok(window) => output::output_success(PaginationView::from(window)),
        Err(e) => output::output_error(&e.to_string()),
    }
    Ok(())
}
