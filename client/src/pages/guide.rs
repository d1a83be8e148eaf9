//! Tour-guide profile with reviews.

#[cfg(test)]
#[path = "guide_test.rs"]
mod guide_test;

use leptos::prelude::*;
use tourbook::net::types::{Guide, Review};

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::state::auth::AuthState;
use crate::util::task::spawn;

/// Mean rating to one decimal place, `None` without reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

#[component]
pub fn GuidePage(id: String) -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let guide = RwSignal::new(None::<Guide>);
    let status = RwSignal::new(Status::Busy("Loading guide...".to_owned()));
    let rating = RwSignal::new(5_u8);
    let comment = RwSignal::new(String::new());

    let api = services.api.clone();
    let guide_id = id.clone();
    spawn(async move {
        match api.guide(&guide_id).await {
            Ok(found) => {
                guide.set(Some(found));
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    let api = services.api.clone();
    let on_review = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = auth.with_untracked(|s| s.session().map(|s| s.email.clone())) else {
            status.set(Status::Failed("Sign in to leave a review.".to_owned()));
            return;
        };
        let review = Review { rating: rating.get_untracked(), comment: comment.get_untracked(), email };
        let api = api.clone();
        let id = id.clone();
        status.set(Status::Busy("Posting review...".to_owned()));
        spawn(async move {
            match api.review_guide(&id, &review).await {
                Ok(()) => {
                    guide.update(|g| {
                        if let Some(g) = g {
                            g.reviews.push(review);
                        }
                    });
                    comment.set(String::new());
                    status.set(Status::Done("Thanks for the review.".to_owned()));
                }
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <section class="guide">
            <Notice status=status/>
            {move || {
                guide.get().map(|g| {
                    let stars = average_rating(&g.reviews)
                        .map_or_else(|| "No reviews yet".to_owned(), |r| format!("{r} / 5"));
                    view! {
                        <img class="guide__photo" src=g.photo_url.unwrap_or_default() alt=g.name.clone()/>
                        <h1>{g.name}</h1>
                        <p>{stars}</p>
                        <dl>
                            <dt>"Contact"</dt><dd>{g.contact.unwrap_or_default()}</dd>
                            <dt>"Education"</dt><dd>{g.education.unwrap_or_default()}</dd>
                            <dt>"Skills"</dt><dd>{g.skills.unwrap_or_default()}</dd>
                            <dt>"Experience"</dt><dd>{g.experience.unwrap_or_default()}</dd>
                        </dl>
                        <ul class="guide__reviews">
                            {g.reviews
                                .into_iter()
                                .map(|r| view! { <li>{format!("{} stars", r.rating)} " " {r.comment}</li> })
                                .collect_view()}
                        </ul>
                    }
                })
            }}
            <form class="guide__review" on:submit=on_review>
                <select on:change=move |ev| rating.set(event_target_value(&ev).parse().unwrap_or(5))>
                    <option value="5">"5"</option>
                    <option value="4">"4"</option>
                    <option value="3">"3"</option>
                    <option value="2">"2"</option>
                    <option value="1">"1"</option>
                </select>
                <textarea
                    placeholder="How was the tour?"
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                <button class="button" type="submit">"Add review"</button>
            </form>
        </section>
    }
}
