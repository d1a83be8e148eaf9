//! Tour-guide dashboard pages.

use leptos::prelude::*;
use tourbook::net::types::{Booking, BookingStatus, GuideInfo};

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::pages::dashboard_tourist::status_label;
use crate::state::auth::AuthState;
use crate::util::task::spawn;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn MyAssignedTours() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let tours = RwSignal::new(Vec::<Booking>::new());
    let status = RwSignal::new(Status::Busy("Loading assigned tours...".to_owned()));

    // Bookings name their guide by display name.
    let guide_name = auth
        .with_untracked(|s| s.session().map(|s| s.label().to_owned()))
        .unwrap_or_default();
    let secure = services.secure.clone();
    spawn(async move {
        match secure.assigned_tours(&guide_name).await {
            Ok(list) => {
                status.set(if list.is_empty() { Status::Done("No tours assigned yet.".to_owned()) } else { Status::Idle });
                tours.set(list);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    let secure = services.secure.clone();
    let decide = move |booking_id: String, decision: BookingStatus| {
        let secure = secure.clone();
        spawn(async move {
            match secure.set_booking_status(&booking_id, decision).await {
                Ok(()) => tours.update(|list| {
                    if let Some(b) = list.iter_mut().find(|b| b.id == booking_id) {
                        b.status = Some(decision);
                    }
                }),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <Notice status=status/>
        <table class="assigned">
            <thead>
                <tr><th>"Package"</th><th>"Tourist"</th><th>"Date"</th><th>"Status"</th><th></th></tr>
            </thead>
            <tbody>
                {move || {
                    let decide = decide.clone();
                    tours
                        .get()
                        .into_iter()
                        .map(|b| {
                            let pending = matches!(b.status, None | Some(BookingStatus::Pending));
                            let accept = {
                                let decide = decide.clone();
                                let id = b.id.clone();
                                move |_: leptos::ev::MouseEvent| decide(id.clone(), BookingStatus::Accepted)
                            };
                            let reject = {
                                let decide = decide.clone();
                                let id = b.id.clone();
                                move |_: leptos::ev::MouseEvent| decide(id.clone(), BookingStatus::Rejected)
                            };
                            view! {
                                <tr>
                                    <td>{b.package_name.unwrap_or_default()}</td>
                                    <td>{b.tourist_email.or(b.email).unwrap_or_default()}</td>
                                    <td>{b.start_date.unwrap_or_default()}</td>
                                    <td>{status_label(b.status)}</td>
                                    <td>
                                        <button class="button" disabled=!pending on:click=accept>"Accept"</button>
                                        <button class="button" disabled=!pending on:click=reject>"Reject"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn GuideProfileForm() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let contact = RwSignal::new(String::new());
    let education = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let status = RwSignal::new(Status::Idle);

    let secure = services.secure.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = auth.with_untracked(|s| s.session().map(|s| s.email.clone())) else { return };
        let info = GuideInfo {
            email,
            contact: optional(contact.get_untracked()),
            education: optional(education.get_untracked()),
            skills: optional(skills.get_untracked()),
            experience: optional(experience.get_untracked()),
            bio: optional(bio.get_untracked()),
        };
        let secure = secure.clone();
        status.set(Status::Busy("Saving...".to_owned()));
        spawn(async move {
            match secure.update_guide_profile(&info).await {
                Ok(()) => status.set(Status::Done("Profile updated.".to_owned())),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    let field = |label: &'static str, value: RwSignal<String>| {
        view! {
            <label>
                <span>{label}</span>
                <input prop:value=move || value.get() on:input=move |ev| value.set(event_target_value(&ev))/>
            </label>
        }
    };

    view! {
        <form class="guide-form" on:submit=on_submit>
            <h2>"Guide details"</h2>
            {field("Contact", contact)}
            {field("Education", education)}
            {field("Skills", skills)}
            {field("Experience", experience)}
            {field("Bio", bio)}
            <button class="button" type="submit">"Save"</button>
            <Notice status=status/>
        </form>
    }
}
