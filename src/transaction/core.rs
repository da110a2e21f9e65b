//! Defines the core data model for transactions and the operations that
//! create, update and remove them from a loaded collection.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The opaque, unique identifier of a transaction.
pub type TransactionId = String;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// The literal tag used in forms, the store file and CSV exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(TransactionType::Income),
            "Expense" => Ok(TransactionType::Expense),
            other => Err(Error::Validation(format!(
                "\"{other}\" is not a transaction type, expected \"Income\" or \"Expense\""
            ))),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [add_transaction] so that it receives a
/// fresh ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction. Never changes after creation.
    pub id: TransactionId,
    /// When the transaction happened as a `YYYY-MM-DD` string.
    ///
    /// The date is not validated. Ordering and monthly grouping rely on the
    /// fixed width of the format.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The magnitude of money spent or earned. The sign comes from `type_`.
    pub amount: f64,
    /// Whether the amount was earned or spent.
    #[serde(rename = "type")]
    pub type_: TransactionType,
}

/// Every field of a [Transaction] that the user can set.
///
/// `amount` must be finite. NaN and infinity cannot be written as JSON, so a
/// store holding one could never be saved. [TransactionFields::parse] rejects
/// them, and the operations below assert it in debug builds.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub type_: TransactionType,
}

impl TransactionFields {
    fn into_transaction(self, id: TransactionId) -> Transaction {
        debug_assert!(
            self.amount.is_finite(),
            "transaction amount must be finite, got {}",
            self.amount
        );

        Transaction {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            type_: self.type_,
        }
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Append a transaction built from `fields` with a freshly minted ID.
///
/// Returns the extended collection and the ID of the new transaction.
pub fn add_transaction(
    mut transactions: Vec<Transaction>,
    fields: TransactionFields,
) -> (Vec<Transaction>, TransactionId) {
    let id = mint_id(&transactions);
    transactions.push(fields.into_transaction(id.clone()));

    (transactions, id)
}

/// Replace every field except the ID of the transaction with `id`.
///
/// # Errors
/// Returns [Error::TransactionNotFound] if no transaction has the ID `id`.
pub fn edit_transaction(
    mut transactions: Vec<Transaction>,
    id: &str,
    fields: TransactionFields,
) -> Result<Vec<Transaction>, Error> {
    let transaction = transactions
        .iter_mut()
        .find(|transaction| transaction.id == id)
        .ok_or_else(|| Error::TransactionNotFound(id.to_owned()))?;

    *transaction = fields.into_transaction(transaction.id.clone());

    Ok(transactions)
}

/// Remove the transaction with `id`. An unknown ID leaves the collection unchanged.
pub fn delete_transaction(mut transactions: Vec<Transaction>, id: &str) -> Vec<Transaction> {
    transactions.retain(|transaction| transaction.id != id);
    transactions
}

pub fn find_transaction<'a>(transactions: &'a [Transaction], id: &str) -> Option<&'a Transaction> {
    transactions.iter().find(|transaction| transaction.id == id)
}

fn mint_id(existing: &[Transaction]) -> TransactionId {
    loop {
        let id = Uuid::new_v4().to_string();

        if find_transaction(existing, &id).is_none() {
            return id;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
