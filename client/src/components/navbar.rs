//! Top navigation bar: catalog links, theme toggle, session menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use tourbook::session::SessionPhase;
use tourbook::theme::Theme;

use crate::app::Services;
use crate::state::auth::AuthState;
use crate::util::dark_mode;
use crate::util::task::spawn;

/// Text for the session corner of the navbar.
pub fn session_label(phase: &SessionPhase) -> Option<String> {
    match phase {
        SessionPhase::Authenticating => None,
        SessionPhase::Unauthenticated => Some("Guest".to_owned()),
        SessionPhase::Authenticated(session) => Some(session.label().to_owned()),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<Services>();
    let theme = RwSignal::new(dark_mode::read_preference(services.store.as_ref()));

    let preference = services.theme.clone();
    let on_theme = move |_: leptos::ev::MouseEvent| {
        let next = dark_mode::toggle(&preference, theme.get_untracked());
        theme.set(next);
    };

    let session = services.session.clone();
    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        let session = session.clone();
        spawn(async move {
            if let Err(e) = session.sign_out().await {
                tracing::warn!(error = %e, "sign-out revocation failed");
            }
        });
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Tourbook"</a>
            <a href="/all-packages">"Packages"</a>
            <a href="/all-stories">"Stories"</a>
            <a href="/community">"Community"</a>
            <a href="/about-us">"About Us"</a>
            <a href="/contact-us">"Contact Us"</a>
            <button class="navbar__theme" on:click=on_theme>
                {move || if theme.get() == Theme::Dark { "Light mode" } else { "Dark mode" }}
            </button>
            <span class="navbar__user">{move || auth.with(|state| session_label(&state.phase))}</span>
            <Show
                when=move || auth.with(|state| state.session().is_some())
                fallback=|| view! { <a class="button" href="/login">"Login"</a> }
            >
                <Show when=move || auth.with(|state| state.dashboard_href().is_some())>
                    <a href=move || auth.with(|state| state.dashboard_href().unwrap_or("/"))>"Dashboard"</a>
                </Show>
                <button class="button" on:click=on_sign_out.clone()>"Sign out"</button>
            </Show>
        </nav>
    }
}
