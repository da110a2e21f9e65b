//! The about page, visible with or without a session.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    context::RequestContext,
    endpoints,
    html::{CARD_STYLE, link, page},
};

fn about_view(context: RequestContext) -> Markup {
    let next_step = if context.is_logged_in {
        link(endpoints::ROOT, "Go to your transactions")
    } else {
        link(endpoints::LOG_IN, "Log in to get started")
    };

    let content = html! {
        div class={ (CARD_STYLE) " w-full max-w-2xl space-y-4" }
        {
            h1 class="text-xl font-bold" { "About Penny" }

            p
            {
                "Penny keeps track of your income and expenses. Record each "
                "transaction with a date, a description and an amount, and Penny "
                "shows your running totals and balance."
            }

            p
            {
                "The reports page groups transactions by month and charts your "
                "income against your expenses. Everything can be exported as CSV "
                "for use in a spreadsheet."
            }

            p { (next_step) }
        }
    };

    page("About", endpoints::ABOUT, context, &[], &content)
}

/// Display a short description of the app.
pub async fn get_about_page(jar: PrivateCookieJar) -> Response {
    let (jar, context) = RequestContext::from_jar(jar);

    (jar, about_view(context)).into_response()
}
