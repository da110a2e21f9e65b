use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    context::RequestContext,
    endpoints,
    flash::redirect_with_alert,
    html::{
        HeadElement, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, link, page,
    },
    reports::chart::{chart_head_elements, chart_view, monthly_chart},
    store::{StoreState, lock_store},
    transaction::{MonthSummary, monthly_report, signed_amount, totals_cards},
};

fn month_section(key: &str, summary: &MonthSummary) -> Markup {
    html! {
        section class="w-full space-y-4" data-month=(key)
        {
            h2 class="text-lg font-semibold" { (key) }

            (totals_cards(&summary.totals))

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
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for transaction in &summary.transactions {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (transaction.date) }
                                td class=(TABLE_CELL_STYLE) { (transaction.description) }
                                td class={ (TABLE_CELL_STYLE) " text-right" } { (signed_amount(transaction)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn reports_view(context: RequestContext, months: &[(String, MonthSummary)]) -> Markup {
    let head_elements: Vec<HeadElement> = if months.is_empty() {
        Vec::new()
    } else {
        let oldest_first: Vec<(&str, &MonthSummary)> = months
            .iter()
            .rev()
            .map(|(key, summary)| (key.as_str(), summary))
            .collect();
        chart_head_elements(&monthly_chart(&oldest_first)).into()
    };

    let content = html! {
        div class="w-full max-w-5xl space-y-8"
        {
            h1 class="text-xl font-bold" { "Monthly Reports" }

            @if months.is_empty() {
                p class="text-gray-500 dark:text-gray-400"
                {
                    "Nothing to report yet. "
                    (link(endpoints::NEW_TRANSACTION, "Add a transaction"))
                    " to see monthly totals."
                }
            } @else {
                (chart_view())

                @for (key, summary) in months {
                    (month_section(key, summary))
                }
            }
        }
    };

    page("Reports", endpoints::REPORTS, context, &head_elements, &content)
}

/// Render the income, expenses and balance of every month, newest month first.
pub async fn get_reports_page(State(state): State<StoreState>, jar: PrivateCookieJar) -> Response {
    let transactions = match lock_store(&state.store).and_then(|store| store.load()) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Could not load transactions for the reports page: {error}");
            return redirect_with_alert(jar, endpoints::ROOT, error.into_alert());
        }
    };

    let months = monthly_report(&transactions).sorted_newest_first();
    let (jar, context) = RequestContext::from_jar(jar);

    (jar, reports_view(context, &months)).into_response()
}
