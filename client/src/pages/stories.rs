//! Tourist stories: list and detail.

use leptos::prelude::*;
use tourbook::net::types::Story;
use tourbook::routes::AppRoute;

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::util::task::spawn;

#[component]
pub fn StoriesPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let stories = RwSignal::new(Vec::<Story>::new());
    let status = RwSignal::new(Status::Busy("Loading stories...".to_owned()));

    let api = services.api.clone();
    spawn(async move {
        match api.stories().await {
            Ok(list) => {
                stories.set(list);
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    view! {
        <section class="stories">
            <h1>"Tourist Stories"</h1>
            <Notice status=status/>
            <ul class="stories__list">
                {move || {
                    stories
                        .get()
                        .into_iter()
                        .map(|story| {
                            let href = AppRoute::Story(story.id.clone()).to_string();
                            view! {
                                <li>
                                    <a href=href>{story.title}</a>
                                    <p>{story.excerpt}</p>
                                    <small>{story.poster_name.unwrap_or_default()}</small>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn StoryPage(id: String) -> impl IntoView {
    let services = expect_context::<Services>();
    let story = RwSignal::new(None::<Story>);
    let status = RwSignal::new(Status::Busy("Loading story...".to_owned()));

    let api = services.api.clone();
    spawn(async move {
        match api.story(&id).await {
            Ok(found) => {
                story.set(Some(found));
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    view! {
        <article class="story">
            <Notice status=status/>
            {move || {
                story.get().map(|story| {
                    view! {
                        <h1>{story.title}</h1>
                        <p class="story__meta">
                            {story.poster_name.unwrap_or_default()} " " {story.created_at.unwrap_or_default()}
                        </p>
                        <p>{story.content}</p>
                    }
                })
            }}
        </article>
    }
}
