//! Defines the route handler for the home page: totals and the full transaction table.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    context::RequestContext,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, LINK_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, format_currency, link, page,
    },
    store::{StoreState, lock_store},
    transaction::{
        Transaction, TransactionType,
        aggregation::{Totals, sorted_by_date_descending, totals},
    },
};

/// Income, expenses and balance as a row of cards.
pub(crate) fn totals_cards(totals: &Totals) -> Markup {
    let card = |title: &str, amount: f64, text_style: &str| {
        html! {
            div class=(CARD_STYLE)
            {
                h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
                p class={ "text-2xl font-semibold " (text_style) } { (format_currency(amount)) }
            }
        }
    };

    let balance = totals.balance();
    let balance_style = if balance < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        "text-gray-900 dark:text-white"
    };

    html! {
        div class="flex flex-col sm:flex-row gap-4 w-full"
        {
            (card("Income", totals.income, "text-green-600 dark:text-green-400"))
            (card("Expenses", totals.expenses, "text-red-600 dark:text-red-400"))
            (card("Balance", balance, balance_style))
        }
    }
}

/// The amount with a sign matching its type, e.g. "-$4.50" for an expense.
pub(crate) fn signed_amount(transaction: &Transaction) -> Markup {
    let (amount, style) = match transaction.type_ {
        TransactionType::Income => (transaction.amount, "text-green-600 dark:text-green-400"),
        TransactionType::Expense => (-transaction.amount, "text-red-600 dark:text-red-400"),
    };

    html! { span class=(style) { (format_currency(amount)) } }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION, &transaction.id);
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, &transaction.id);
    let confirm = format!(
        "return confirm('Delete the transaction \"{}\"?')",
        transaction.description.replace(['\'', '"', '\\'], "")
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE) { (transaction.type_) }
            td class={ (TABLE_CELL_STYLE) " text-right" } { (signed_amount(transaction)) }
            td class={ (TABLE_CELL_STYLE) " flex gap-4" }
            {
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                a href=(delete_url) class=(BUTTON_DELETE_STYLE) onclick=(confirm) { "Delete" }
            }
        }
    }
}

fn transactions_view(context: RequestContext, totals: &Totals, transactions: &[Transaction]) -> Markup {
    let content = html! {
        div class="w-full max-w-5xl space-y-6"
        {
            div class="flex justify-between items-center"
            {
                h1 class="text-xl font-bold" { "Transactions" }
                a href=(endpoints::NEW_TRANSACTION) class=(LINK_STYLE) { "Add transaction" }
            }

            (totals_cards(totals))

            @if transactions.is_empty() {
                p class="text-gray-500 dark:text-gray-400"
                {
                    "No transactions yet. "
                    (link(endpoints::NEW_TRANSACTION, "Add your first transaction"))
                    "."
                }
            } @else {
                div class="relative overflow-x-auto shadow-md rounded-lg"
                {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                (transaction_row(transaction))
                            }
                        }
                    }
                }
            }
        }
    };

    page("Transactions", endpoints::ROOT, context, &[], &content)
}

/// Render the totals and every transaction, newest first.
///
/// If the transactions cannot be loaded the 500 page is shown, since
/// redirecting would loop back to this page.
pub async fn get_transactions_page(
    State(state): State<StoreState>,
    jar: PrivateCookieJar,
) -> Response {
    let transactions = match lock_store(&state.store).and_then(|store| store.load()) {
        Ok(transactions) => transactions,
        Err(error) => return error.into_response(),
    };

    let (jar, context) = RequestContext::from_jar(jar);
    let totals = totals(&transactions);
    let sorted = sorted_by_date_descending(&transactions);

    (jar, transactions_view(context, &totals, &sorted)).into_response()
}

/// `/home` is kept as an alias of the home page.
pub async fn get_home() -> Redirect {
    Redirect::to(endpoints::ROOT)
}
