//! CSV export of every stored transaction.

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    Error, endpoints,
    flash::redirect_with_alert,
    store::{StoreState, lock_store},
    transaction::Transaction,
};

const CSV_HEADER: [&str; 4] = ["Date", "Description", "Amount", "Type"];

/// Write `transactions` as CSV in their stored order.
///
/// The header is always written, even when there are no transactions.
/// Amounts use the shortest decimal form that parses back to the same value.
///
/// # Errors
/// Returns an [Error::Export] if the CSV writer fails.
pub fn to_csv(transactions: &[Transaction]) -> Result<String, Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|error| Error::Export(error.to_string()))?;

    for transaction in transactions {
        writer
            .write_record([
                transaction.date.as_str(),
                transaction.description.as_str(),
                transaction.amount.to_string().as_str(),
                transaction.type_.as_str(),
            ])
            .map_err(|error| Error::Export(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::Export(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::Export(error.to_string()))
}

/// Download every transaction as `transactions.csv`.
///
/// On failure the user is sent back to the transactions page with an alert.
pub async fn export_csv_endpoint(
    State(state): State<StoreState>,
    jar: PrivateCookieJar,
) -> Response {
    let result = lock_store(&state.store)
        .and_then(|store| store.load())
        .and_then(|transactions| to_csv(&transactions));

    match result {
        Ok(csv) => {
            tracing::info!("Exported transactions as CSV");
            (
                [
                    (CONTENT_TYPE, "text/csv"),
                    (CONTENT_DISPOSITION, "attachment; filename=transactions.csv"),
                ],
                csv,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not export transactions: {error}");
            redirect_with_alert(jar, endpoints::ROOT, error.into_alert())
        }
    }
}
