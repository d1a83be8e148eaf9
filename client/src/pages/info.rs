//! Static content pages.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use leptos::prelude::*;
use tourbook::routes::AppRoute;

/// Heading and body copy for a static route; `None` for anything else.
pub fn content(route: &AppRoute) -> Option<(&'static str, &'static str)> {
    match route {
        AppRoute::Community => Some(("Community", "Share trips, swap tips and meet fellow travellers.")),
        AppRoute::ContactUs => Some(("Contact Us", "Questions about a booking? Reach our team any day of the week.")),
        AppRoute::Blogs => Some(("Blogs", "Guides and stories from the places our tours visit.")),
        AppRoute::AboutUs => Some(("About Us", "We connect tourists with local guides for hand-planned tours.")),
        _ => None,
    }
}

#[component]
pub fn InfoPage(route: AppRoute) -> impl IntoView {
    let (title, body) = content(&route).unwrap_or(("", ""));
    view! {
        <section class="info">
            <h1>{title}</h1>
            <p>{body}</p>
        </section>
    }
}
