//! Defines the endpoint for creating a new transaction.

use axum::{Form, extract::State, response::Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    Error,
    alert::Alert,
    endpoints,
    flash::redirect_with_alert,
    store::{SharedStore, StoreState, lock_store},
    transaction::{TransactionFields, TransactionId, add_transaction, form::TransactionForm},
};

fn create_transaction(store: &SharedStore, form: TransactionForm) -> Result<TransactionId, Error> {
    let fields = TransactionFields::parse(form)?;

    let store = lock_store(store)?;
    let transactions = store.load()?;
    let (transactions, id) = add_transaction(transactions, fields);
    store.save(&transactions)?;

    Ok(id)
}

/// A route handler for creating a new transaction.
///
/// Redirects to the transactions page on success, or back to the form with an
/// alert if the form is invalid.
pub async fn create_transaction_endpoint(
    State(state): State<StoreState>,
    jar: PrivateCookieJar,
    Form(form): Form<TransactionForm>,
) -> Response {
    match create_transaction(&state.store, form) {
        Ok(id) => {
            tracing::info!("Created transaction {id}");
            redirect_with_alert(
                jar,
                endpoints::ROOT,
                Alert::SuccessSimple {
                    message: "Transaction added successfully!".to_owned(),
                },
            )
        }
        Err(error @ Error::Validation(_)) => {
            tracing::warn!("Rejected new transaction: {error}");
            redirect_with_alert(jar, endpoints::NEW_TRANSACTION, error.into_alert())
        }
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            redirect_with_alert(jar, endpoints::ROOT, error.into_alert())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Form, extract::State};
    use axum_extra::extract::PrivateCookieJar;
    use tempfile::TempDir;

    use crate::{
        alert::Alert,
        app_state::create_cookie_key,
        endpoints,
        flash::take_flash,
        test_utils::{assert_redirect, response_cookie_jar, sample_transactions, store_state},
        transaction::{TransactionType, form::TransactionForm},
    };

    use super::create_transaction_endpoint;

    fn form(amount: &str) -> TransactionForm {
        TransactionForm {
            date: Some("2024-02-01".to_owned()),
            description: Some("Rent, February".to_owned()),
            amount: Some(amount.to_owned()),
            type_: Some("Expense".to_owned()),
        }
    }

    #[tokio::test]
    async fn creates_transaction_and_redirects() {
        let dir = TempDir::new().unwrap();
        let state = store_state(&dir);
        state
            .store
            .lock()
            .unwrap()
            .save(&sample_transactions())
            .unwrap();
        let key = create_cookie_key("create endpoint tests");

        let response = create_transaction_endpoint(
            State(state.clone()),
            PrivateCookieJar::new(key.clone()),
            Form(form("850")),
        )
        .await;

        assert_redirect(&response, endpoints::ROOT);
        let (_, alert) = take_flash(response_cookie_jar(&response, key));
        assert_eq!(
            alert,
            Some(Alert::SuccessSimple {
                message: "Transaction added successfully!".to_owned()
            })
        );

        let transactions = state.store.lock().unwrap().load().unwrap();
        assert_eq!(transactions.len(), 3);
        let created = &transactions[2];
        assert_eq!(created.date, "2024-02-01");
        assert_eq!(created.description, "Rent, February");
        assert_eq!(created.amount, 850.0);
        assert_eq!(created.type_, TransactionType::Expense);
    }

    #[tokio::test]
    async fn invalid_amount_redirects_back_to_form() {
        let dir = TempDir::new().unwrap();
        let state = store_state(&dir);
        let key = create_cookie_key("create endpoint tests");

        let response = create_transaction_endpoint(
            State(state.clone()),
            PrivateCookieJar::new(key.clone()),
            Form(form("lots")),
        )
        .await;

        assert_redirect(&response, endpoints::NEW_TRANSACTION);
        let (_, alert) = take_flash(response_cookie_jar(&response, key));
        assert!(matches!(alert, Some(Alert::Error { .. })));
        assert!(state.store.lock().unwrap().load().unwrap().is_empty());
    }
}
