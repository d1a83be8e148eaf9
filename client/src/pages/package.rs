//! Package detail with tour plan, booking form and wishlist button.

#[cfg(test)]
#[path = "package_test.rs"]
mod package_test;

use leptos::prelude::*;
use tourbook::net::types::{Guide, NewBooking, Package};
use tourbook::routes::AppRoute;

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::state::auth::AuthState;
use crate::util::task::spawn;

/// Booking body from the form fields; `Err` names what is missing.
///
/// # Errors
///
/// Returns a user-facing message for a blank date or guide.
pub fn booking_request(package_id: &str, email: &str, start_date: &str, guide: &str) -> Result<NewBooking, &'static str> {
    let start_date = start_date.trim();
    let guide = guide.trim();
    if start_date.is_empty() {
        return Err("Pick a tour date.");
    }
    if guide.is_empty() {
        return Err("Pick a tour guide.");
    }
    Ok(NewBooking {
        package_id: package_id.to_owned(),
        email: email.to_owned(),
        start_date: start_date.to_owned(),
        guide: guide.to_owned(),
    })
}

#[component]
pub fn PackagePage(id: String) -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let package = RwSignal::new(None::<Package>);
    let guides = RwSignal::new(Vec::<Guide>::new());
    let status = RwSignal::new(Status::Busy("Loading package...".to_owned()));
    let start_date = RwSignal::new(String::new());
    let guide = RwSignal::new(String::new());

    let secure = services.secure.clone();
    let api = services.api.clone();
    let package_id = id.clone();
    spawn(async move {
        match secure.package(&package_id).await {
            Ok(found) => {
                package.set(Some(found));
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
        match api.guides().await {
            Ok(list) => guides.set(list),
            Err(e) => tracing::warn!(error = %e, "guide list failed"),
        }
    });

    let signed_in_email = move || auth.with_untracked(|s| s.session().map(|s| s.email.clone()));

    let secure = services.secure.clone();
    let booking_package = id.clone();
    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = signed_in_email() else {
            status.set(Status::Failed("Sign in to book this tour.".to_owned()));
            return;
        };
        let booking = match booking_request(&booking_package, &email, &start_date.get_untracked(), &guide.get_untracked()) {
            Ok(booking) => booking,
            Err(msg) => {
                status.set(Status::Failed(msg.to_owned()));
                return;
            }
        };
        let secure = secure.clone();
        status.set(Status::Busy("Booking...".to_owned()));
        spawn(async move {
            match secure.create_booking(&booking).await {
                Ok(()) => status.set(Status::Done("Booked! Find it under My Bookings.".to_owned())),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    let api = services.api.clone();
    let on_wishlist = move |_: leptos::ev::MouseEvent| {
        let Some(email) = signed_in_email() else {
            status.set(Status::Failed("Sign in to save packages.".to_owned()));
            return;
        };
        let api = api.clone();
        let id = id.clone();
        spawn(async move {
            match api.add_to_wishlist(&email, &id).await {
                Ok(()) => status.set(Status::Done("Added to your wishlist.".to_owned())),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <section class="package">
            <Notice status=status/>
            {move || {
                package.get().map(|p| {
                    view! {
                        <div class="package__gallery">
                            {p.images.into_iter().map(|src| view! { <img src=src/> }).collect_view()}
                        </div>
                        <h1>{p.package_name}</h1>
                        <a href=AppRoute::Tours(p.tour_type.clone()).to_string()>{p.tour_type.clone()}</a>
                        <p class="package__price">{format!("${:.2}", p.price)}</p>
                        <p>{p.about}</p>
                        <ol class="package__plan">
                            {p.tour_plan
                                .into_iter()
                                .map(|day| view! { <li><strong>{day.day}</strong> " " {day.info}</li> })
                                .collect_view()}
                        </ol>
                    }
                })
            }}
            <h2>"Guides"</h2>
            <ul class="package__guides">
                {move || {
                    guides
                        .get()
                        .into_iter()
                        .map(|g| view! { <li><a href=AppRoute::Guide(g.id.clone()).to_string()>{g.name}</a></li> })
                        .collect_view()
                }}
            </ul>
            <button class="button" on:click=on_wishlist>"Add to wishlist"</button>
            <form class="package__book" on:submit=on_book>
                <input type="date" on:input=move |ev| start_date.set(event_target_value(&ev))/>
                <select on:change=move |ev| guide.set(event_target_value(&ev))>
                    <option value="">"Choose a guide"</option>
                    {move || {
                        guides
                            .get()
                            .into_iter()
                            .map(|g| view! { <option value=g.name.clone()>{g.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <button class="button" type="submit">"Book now"</button>
            </form>
        </section>
    }
}
