//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm md:bg-transparent
            md:text-blue-700 md:p-0 dark:text-white md:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
            md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0
            dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700
            dark:hover:text-white md:dark:hover:bg-transparent"
        };

        let aria_current = self.is_current.then_some("page");

        html!( a href=(self.url) class=(style) aria-current=[aria_current] { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    /// Logged-out visitors only see the public pages and a log-in link.
    pub fn new(active_endpoint: &str, is_logged_in: bool) -> NavBar<'_> {
        let link = |url: &'static str, title: &'static str| Link {
            url,
            title,
            is_current: active_endpoint == url,
        };

        let links = if is_logged_in {
            vec![
                link(endpoints::ROOT, "Transactions"),
                link(endpoints::NEW_TRANSACTION, "Add"),
                link(endpoints::REPORTS, "Reports"),
                link(endpoints::EXPORT_CSV, "Export CSV"),
                link(endpoints::ABOUT, "About"),
                link(endpoints::LOG_OUT, "Log out"),
            ]
        } else {
            vec![
                link(endpoints::ABOUT, "About"),
                link(endpoints::LOG_IN, "Log in"),
            ]
        };

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        img src="/static/favicon-32x32.png" alt="Penny Logo" class="h-8";

                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Penny"
                        }
                    }

                    ul
                        class="font-medium flex flex-col flex-wrap p-4 md:p-0 mt-4 border
                        border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8
                        rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800
                        md:dark:bg-gray-900 dark:border-gray-700"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::NavBar;

    fn links(html: &Html) -> Vec<(String, Option<String>)> {
        html.select(&Selector::parse("ul a").unwrap())
            .map(|a| {
                (
                    a.value().attr("href").unwrap_or_default().to_owned(),
                    a.value().attr("aria-current").map(str::to_owned),
                )
            })
            .collect()
    }

    #[test]
    fn logged_in_nav_marks_current_page() {
        let html = Html::parse_fragment(
            &NavBar::new(endpoints::REPORTS, true)
                .into_html()
                .into_string(),
        );

        let links = links(&html);

        assert_eq!(links.len(), 6);
        for (href, aria_current) in links {
            if href == endpoints::REPORTS {
                assert_eq!(aria_current.as_deref(), Some("page"));
            } else {
                assert_eq!(aria_current, None, "{href} should not be current");
            }
        }
    }

    #[test]
    fn logged_out_nav_offers_log_in() {
        let html = Html::parse_fragment(
            &NavBar::new(endpoints::ABOUT, false)
                .into_html()
                .into_string(),
        );

        let hrefs: Vec<String> = links(&html).into_iter().map(|(href, _)| href).collect();

        assert_eq!(hrefs, vec![endpoints::ABOUT, endpoints::LOG_IN]);
    }
}
