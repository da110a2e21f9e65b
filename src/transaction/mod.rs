//! Transactions: the data model, the operations on a loaded collection and
//! the pages and endpoints for listing, adding, editing, deleting and
//! exporting them.

mod aggregation;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod export;
mod form;
mod transactions_page;

pub use aggregation::{
    MonthSummary, MonthlyReport, Totals, month_key, monthly_report, sorted_by_date_descending,
    totals,
};
pub use core::{
    Transaction, TransactionFields, TransactionId, TransactionType, add_transaction,
    delete_transaction, edit_transaction, find_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use export::{export_csv_endpoint, to_csv};
pub use form::TransactionForm;
pub use transactions_page::{get_home, get_transactions_page};

pub(crate) use transactions_page::{signed_amount, totals_cards};
