//! Inline status line for async page work.

use leptos::prelude::*;

/// Outcome of the last action a page started.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Busy(String),
    Done(String),
    Failed(String),
}

impl Status {
    pub fn failed(err: impl std::fmt::Display) -> Self {
        Self::Failed(err.to_string())
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy(_))
    }
}

#[component]
pub fn Notice(status: RwSignal<Status>) -> impl IntoView {
    move || match status.get() {
        Status::Idle => ().into_any(),
        Status::Busy(msg) => view! { <p class="notice notice--busy">{msg}</p> }.into_any(),
        Status::Done(msg) => view! { <p class="notice notice--ok">{msg}</p> }.into_any(),
        Status::Failed(msg) => view! { <p class="notice notice--error">{msg}</p> }.into_any(),
    }
}
