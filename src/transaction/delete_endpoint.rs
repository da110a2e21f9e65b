//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    Error,
    alert::Alert,
    endpoints,
    flash::redirect_with_alert,
    store::{SharedStore, StoreState, lock_store},
    transaction::delete_transaction,
};

fn remove_transaction(store: &SharedStore, id: &str) -> Result<(), Error> {
    let store = lock_store(store)?;
    let transactions = store.load()?;
    store.save(&delete_transaction(transactions, id))
}

/// A route handler for deleting a transaction, redirects to the transactions page.
///
/// Deleting an ID that does not exist still reports success.
pub async fn delete_transaction_endpoint(
    State(state): State<StoreState>,
    Path(transaction_id): Path<String>,
    jar: PrivateCookieJar,
) -> Response {
    match remove_transaction(&state.store, &transaction_id) {
        Ok(()) => {
            tracing::info!("Deleted transaction {transaction_id}");
            redirect_with_alert(
                jar,
                endpoints::ROOT,
                Alert::Warning {
                    message: "Transaction deleted!".to_owned(),
                },
            )
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            redirect_with_alert(jar, endpoints::ROOT, error.into_alert())
        }
    }
}
