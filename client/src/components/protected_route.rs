//! Access-rule wrapper for guarded subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision comes from `AppRoute::check`, which delegates to the core
//! `RouteGuard`. While the session resolves a loading indicator renders;
//! a refusal records the location in `AuthState::return_to` and replaces the
//! history entry with `/login`.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use tourbook::guard::GuardDecision;
use tourbook::routes::AppRoute;

use crate::state::auth::AuthState;

/// Path plus query string, however the router reports the query.
pub fn full_location(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

#[component]
pub fn ProtectedRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let here = full_location(&location.pathname.get(), &location.search.get());
        auth.with(|state| route.check(&state.phase, &here))
    });

    Effect::new(move || {
        if let GuardDecision::Redirect { to, from } = decision.get() {
            tracing::info!(%from, "route refused; redirecting to login");
            auth.update(|state| state.return_to = Some(from));
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect { .. } => ().into_any(),
    }
}
