//! Tourist dashboard pages: bookings, wishlist, guide-role request, story
//! sharing.

#[cfg(test)]
#[path = "dashboard_tourist_test.rs"]
mod dashboard_tourist_test;

use leptos::prelude::*;
use tourbook::checkout;
use tourbook::net::types::{Booking, BookingStatus, NewStory, WishlistItem};
use tourbook::routes::AppRoute;

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::state::auth::AuthState;
use crate::util::task::spawn;

/// Only pending bookings with a joined price can be paid or cancelled.
pub fn is_open(booking: &Booking) -> bool {
    matches!(booking.status, None | Some(BookingStatus::Pending)) && booking.price.is_some_and(|p| p > 0.0)
}

pub fn status_label(status: Option<BookingStatus>) -> &'static str {
    match status {
        None | Some(BookingStatus::Pending) => "In Review",
        Some(BookingStatus::Accepted) => "Accepted",
        Some(BookingStatus::Rejected) => "Rejected",
    }
}

fn session_email(auth: RwSignal<AuthState>) -> Option<String> {
    auth.with_untracked(|s| s.session().map(|s| s.email.clone()))
}

#[component]
pub fn MyBookings() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let current_page = RwSignal::new(1_usize);
    let status = RwSignal::new(Status::Idle);

    let Some(email) = session_email(auth) else {
        return view! { <p>"Sign in to see your bookings. " <a href="/login">"Login"</a></p> }.into_any();
    };

    status.set(Status::Busy("Loading bookings...".to_owned()));
    let secure = services.secure.clone();
    spawn(async move {
        match secure.bookings_with_packages(&email).await {
            Ok(list) => {
                bookings.set(list);
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    let secure = services.secure.clone();
    let cancel = move |booking_id: String| {
        let secure = secure.clone();
        spawn(async move {
            match secure.cancel_booking(&booking_id).await {
                Ok(()) => {
                    bookings.update(|list| list.retain(|b| b.id != booking_id));
                    status.set(Status::Done("Booking cancelled.".to_owned()));
                }
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    let pages = move || bookings.with(|list| checkout::page_count(list.len()));

    view! {
        <Notice status=status/>
        <table class="bookings">
            <thead>
                <tr><th>"Package"</th><th>"Guide"</th><th>"Date"</th><th>"Price"</th><th>"Status"</th><th></th></tr>
            </thead>
            <tbody>
                {move || {
                    let cancel = cancel.clone();
                    bookings.with(|list| {
                        checkout::page(list, current_page.get())
                            .iter()
                            .cloned()
                            .map(|b| {
                                let open = is_open(&b);
                                let pay = AppRoute::Payment(b.id.clone()).to_string();
                                let id = b.id.clone();
                                let cancel = cancel.clone();
                                view! {
                                    <tr>
                                        <td>{b.package_name.unwrap_or_default()}</td>
                                        <td>{b.guide.unwrap_or_default()}</td>
                                        <td>{b.start_date.unwrap_or_default()}</td>
                                        <td>{b.price.map(|p| format!("${p:.2}")).unwrap_or_default()}</td>
                                        <td>{status_label(b.status)}</td>
                                        <td>
                                            <Show when=move || open>
                                                <a class="button" href=pay.clone()>"Pay"</a>
                                                <button class="button" on:click={
                                                    let id = id.clone();
                                                    let cancel = cancel.clone();
                                                    move |_: leptos::ev::MouseEvent| cancel(id.clone())
                                                }>"Cancel"</button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    })
                }}
            </tbody>
        </table>
        <nav class="pager">
            <button
                disabled=move || current_page.get() <= 1
                on:click=move |_| current_page.update(|p| *p = p.saturating_sub(1).max(1))
            >"Prev"</button>
            <span>{move || format!("{} / {}", current_page.get(), pages().max(1))}</span>
            <button
                disabled=move || current_page.get() >= pages()
                on:click=move |_| current_page.update(|p| *p += 1)
            >"Next"</button>
        </nav>
    }
    .into_any()
}

#[component]
pub fn MyWishlist() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let items = RwSignal::new(Vec::<WishlistItem>::new());
    let status = RwSignal::new(Status::Busy("Loading wishlist...".to_owned()));
    let email = session_email(auth).unwrap_or_default();

    let secure = services.secure.clone();
    let owner = email.clone();
    spawn(async move {
        match secure.wishlist(&owner).await {
            Ok(list) => {
                items.set(list);
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    let secure = services.secure.clone();
    let remove = move |package_id: String| {
        let secure = secure.clone();
        let email = email.clone();
        spawn(async move {
            match secure.remove_from_wishlist(&email, &package_id).await {
                Ok(()) => items.update(|list| list.retain(|i| i.package_id != package_id)),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <Notice status=status/>
        <ul class="wishlist">
            {move || {
                let remove = remove.clone();
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let href = AppRoute::Package(item.package_id.clone()).to_string();
                        let remove = remove.clone();
                        let id = item.package_id.clone();
                        view! {
                            <li>
                                <a href=href>{item.package_id}</a>
                                <button class="button" on:click=move |_| remove(id.clone())>"Remove"</button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
pub fn RequestToAdmin() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = RwSignal::new(Status::Idle);

    let secure = services.secure.clone();
    let on_request = move |_: leptos::ev::MouseEvent| {
        let Some(email) = session_email(auth) else { return };
        let secure = secure.clone();
        status.set(Status::Busy("Sending request...".to_owned()));
        spawn(async move {
            match secure.request_tour_guide(&email).await {
                Ok(()) => status.set(Status::Done("Request sent. An admin will review it.".to_owned())),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <p>"Want to lead tours? Ask an admin to make you a tour guide."</p>
        <button class="button" on:click=on_request disabled=move || status.get().is_busy()>
            "Request to become a guide"
        </button>
        <Notice status=status/>
    }
}

#[component]
pub fn ShareStory() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let status = RwSignal::new(Status::Idle);

    let secure = services.secure.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = session_email(auth) else { return };
        let story = NewStory {
            email,
            title: title.get_untracked().trim().to_owned(),
            excerpt: excerpt.get_untracked().trim().to_owned(),
            content: content.get_untracked().trim().to_owned(),
        };
        if story.title.is_empty() || story.content.is_empty() {
            status.set(Status::Failed("A story needs a title and some content.".to_owned()));
            return;
        }
        let secure = secure.clone();
        spawn(async move {
            match secure.submit_story(&story).await {
                Ok(()) => {
                    title.set(String::new());
                    excerpt.set(String::new());
                    content.set(String::new());
                    status.set(Status::Done("Story shared.".to_owned()));
                }
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <form class="story-form" on:submit=on_submit>
            <h2>"Share a story"</h2>
            <input placeholder="Title" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
            <input placeholder="Excerpt" prop:value=move || excerpt.get() on:input=move |ev| excerpt.set(event_target_value(&ev))/>
            <textarea prop:value=move || content.get() on:input=move |ev| content.set(event_target_value(&ev))></textarea>
            <button class="button" type="submit">"Post story"</button>
            <Notice status=status/>
        </form>
    }
}
