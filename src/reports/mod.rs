//! The monthly reports page: a bar chart of income and expenses followed by
//! the totals and transactions of each month.

mod chart;
mod reports_page;

pub use reports_page::get_reports_page;
