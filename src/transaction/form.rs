//! The add/edit transaction form: raw submitted values, their validation and
//! the shared input fields.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::{Transaction, TransactionFields, TransactionType},
};

/// The form data exactly as submitted.
///
/// Every field is optional so that a missing field becomes a validation
/// alert instead of a bare 422 response.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionForm {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

fn required(value: Option<String>, name: &str) -> Result<String, Error> {
    value.ok_or_else(|| Error::Validation(format!("the field \"{name}\" is missing")))
}

impl TransactionFields {
    /// Coerce submitted form values into transaction fields.
    ///
    /// # Errors
    /// Returns an [Error::Validation] if a field is missing, the amount is not
    /// a finite number or the type is not "Income" or "Expense".
    pub fn parse(form: TransactionForm) -> Result<Self, Error> {
        let date = required(form.date, "date")?;
        let description = required(form.description, "description")?;
        let amount = required(form.amount, "amount")?;
        let type_ = required(form.type_, "type")?;

        let amount = amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| Error::Validation(format!("\"{amount}\" is not a valid amount")))?;

        Ok(Self {
            date,
            description,
            amount,
            type_: type_.parse()?,
        })
    }
}

/// The values pre-filled in the form.
pub struct TransactionFormDefaults<'a> {
    pub type_: TransactionType,
    pub amount: Option<f64>,
    pub date: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionFormDefaults<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            type_: transaction.type_,
            amount: Some(transaction.amount),
            date: &transaction.date,
            description: &transaction.description,
        }
    }
}

fn type_radio(type_: TransactionType, is_checked: bool) -> Markup {
    let id = format!("transaction-type-{}", type_.as_str().to_lowercase());

    html! {
        div class="flex items-center gap-2"
        {
            input
                name="type"
                id=(id)
                type="radio"
                value=(type_.as_str())
                checked[is_checked]
                required
                class=(FORM_RADIO_INPUT_STYLE);

            label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (type_.as_str()) }
        }
    }
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let amount = defaults.amount.map(|amount| amount.to_string());

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                (type_radio(TransactionType::Expense, defaults.type_ == TransactionType::Expense))
                (type_radio(TransactionType::Income, defaults.type_ == TransactionType::Income))
            }
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

            input
                name="amount"
                id="amount"
                type="number"
                step="any"
                placeholder="0.00"
                required
                value=[amount.as_deref()]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="date" class=(FORM_LABEL_STYLE) { "Date" }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Description" }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Description"
                value=(defaults.description)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
