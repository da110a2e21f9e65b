//! Defines the endpoint for updating an existing transaction.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    Error,
    alert::Alert,
    endpoints::{self, format_endpoint},
    flash::redirect_with_alert,
    store::{SharedStore, StoreState, lock_store},
    transaction::{
        TransactionFields, edit_transaction, find_transaction, form::TransactionForm,
    },
};

fn update_transaction(store: &SharedStore, id: &str, form: TransactionForm) -> Result<(), Error> {
    let store = lock_store(store)?;
    let transactions = store.load()?;

    if find_transaction(&transactions, id).is_none() {
        return Err(Error::TransactionNotFound(id.to_owned()));
    }

    let fields = TransactionFields::parse(form)?;
    let transactions = edit_transaction(transactions, id, fields)?;
    store.save(&transactions)
}

/// A route handler for replacing every field of a transaction except its ID.
///
/// Invalid form data sends the user back to the edit form. Every other
/// outcome redirects to the transactions page with an alert.
pub async fn edit_transaction_endpoint(
    State(state): State<StoreState>,
    Path(transaction_id): Path<String>,
    jar: PrivateCookieJar,
    Form(form): Form<TransactionForm>,
) -> Response {
    match update_transaction(&state.store, &transaction_id, form) {
        Ok(()) => {
            tracing::info!("Updated transaction {transaction_id}");
            redirect_with_alert(
                jar,
                endpoints::ROOT,
                Alert::SuccessSimple {
                    message: "Transaction updated!".to_owned(),
                },
            )
        }
        Err(error @ Error::Validation(_)) => {
            tracing::warn!("Rejected update to transaction {transaction_id}: {error}");
            let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION, &transaction_id);
            redirect_with_alert(jar, &edit_url, error.into_alert())
        }
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            redirect_with_alert(jar, endpoints::ROOT, error.into_alert())
        }
    }
}
