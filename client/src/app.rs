//! Root component and service wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Services` is built once and provided through context together with the
//! `RwSignal<AuthState>` mirror. Two background tasks run for the life of
//! the page: the provider following identity changes, and a pump copying
//! each new session phase into the signal.
//!
//! Routing uses one catch-all route; the core `AppRoute` parser decides
//! which page renders and `ProtectedRoute` applies its access rule.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;
use tourbook::config::{AppConfig, ConfigError};
use tourbook::identity::{IdentityToolkit, ToolkitConfig};
use tourbook::nav::Navigator;
use tourbook::net::api::ApiClient;
use tourbook::net::secure::SecureClient;
use tourbook::net::transport::Transport;
use tourbook::routes::AppRoute;
use tourbook::session::SessionProvider;
use tourbook::storage::KeyValueStore;
use tourbook::theme::ThemePreference;
use tourbook::token::TokenStore;

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::browser::{BrowserTransport, LocalStore, build_config};
use crate::pages;
use crate::state::auth::AuthState;
use crate::util::dark_mode;
use crate::util::navigator::SignalNavigator;
use crate::util::task::spawn;

/// Everything a page needs to talk to the outside world.
#[derive(Clone)]
pub struct Services {
    pub session: Arc<SessionProvider>,
    pub api: ApiClient,
    pub secure: SecureClient,
    pub theme: ThemePreference,
    pub store: Arc<dyn KeyValueStore>,
}

impl Services {
    pub fn new(
        config: &AppConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let api = ApiClient::new(config.api_base_url.clone(), transport.clone());
        let tokens = TokenStore::new(store.clone());
        let toolkit = ToolkitConfig {
            base_url: config.identity_base_url.clone(),
            api_key: config.identity_api_key.clone().unwrap_or_default(),
        };
        let identity = Arc::new(IdentityToolkit::new(toolkit, transport).with_persistence(store.clone()));
        let session = Arc::new(SessionProvider::new(identity, api.clone(), tokens.clone()));
        let secure = SecureClient::new(api.clone(), tokens, session.clone(), navigator);
        Self { session, api, secure, theme: ThemePreference::new(store.clone()), store }
    }

    /// Browser wiring: build-time config, `fetch`, `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns an error if the baked-in configuration is invalid.
    pub fn browser(navigator: SignalNavigator) -> Result<Self, ConfigError> {
        let config = build_config()?;
        if config.identity_api_key.is_none() {
            tracing::warn!("TOURBOOK_IDENTITY_API_KEY was not set at build time; sign-in will fail");
        }
        Ok(Self::new(&config, Arc::new(BrowserTransport), Arc::new(LocalStore), Arc::new(navigator)))
    }
}

/// Keep `auth` in step with the provider and start following identity
/// changes.
fn start_session(services: &Services, auth: RwSignal<AuthState>) {
    let session = services.session.clone();
    let mut phases = session.subscribe();
    spawn(async move {
        loop {
            let phase = phases.borrow_and_update().clone();
            auth.update(|state| state.phase = phase);
            if phases.changed().await.is_err() {
                break;
            }
        }
    });
    spawn(async move {
        session.watch_identity().await;
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let navigator = SignalNavigator::new();
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(navigator);

    match Services::browser(navigator) {
        Ok(services) => {
            dark_mode::apply(dark_mode::read_preference(services.store.as_ref()));
            start_session(&services, auth);
            provide_context(services);
            view! {
                <Title text="Tourbook"/>
                <Router>
                    <Shell/>
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid build configuration");
            view! { <p class="fatal">{format!("Configuration error: {e}")}</p> }.into_any()
        }
    }
}

#[component]
fn Shell() -> impl IntoView {
    let navigator = expect_context::<SignalNavigator>();
    navigator.install(use_navigate());

    view! {
        <Navbar/>
        <main class="page">
            <Routes fallback=|| view! { <pages::not_found::NotFoundPage/> }>
                <Route path=path!("/") view=RouteView/>
                <Route path=path!("/*any") view=RouteView/>
            </Routes>
        </main>
    }
}

/// Render whatever `AppRoute` the current path parses to.
#[component]
fn RouteView() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| AppRoute::parse(&location.pathname.get()));

    move || {
        let route = route.get();
        match route.clone() {
            AppRoute::Home | AppRoute::AllPackages => view! { <pages::home::PackagesPage tour_type=None/> }.into_any(),
            AppRoute::Tours(kind) => view! { <pages::home::PackagesPage tour_type=Some(kind)/> }.into_any(),
            AppRoute::Package(id) => view! { <pages::package::PackagePage id=id/> }.into_any(),
            AppRoute::Guide(id) => view! { <pages::guide::GuidePage id=id/> }.into_any(),
            AppRoute::AllStories | AppRoute::TouristStories => view! { <pages::stories::StoriesPage/> }.into_any(),
            AppRoute::Story(id) => view! { <pages::stories::StoryPage id=id/> }.into_any(),
            AppRoute::Login => view! { <pages::login::LoginPage/> }.into_any(),
            AppRoute::Register => view! { <pages::register::RegisterPage/> }.into_any(),
            AppRoute::AuthCallback => view! { <pages::auth_callback::AuthCallbackPage/> }.into_any(),
            AppRoute::Community | AppRoute::ContactUs | AppRoute::Blogs | AppRoute::AboutUs => {
                view! { <pages::info::InfoPage route=route/> }.into_any()
            }
            AppRoute::MyBookings => view! { <pages::dashboard_tourist::MyBookings/> }.into_any(),
            AppRoute::Payment(booking_id) => view! {
                <ProtectedRoute route=route>
                    <pages::payment::PaymentPage booking_id=booking_id.clone()/>
                </ProtectedRoute>
            }
            .into_any(),
            AppRoute::Dashboard { role, page } => view! {
                <ProtectedRoute route=route>
                    <pages::dashboard::Dashboard role=role page=page/>
                </ProtectedRoute>
            }
            .into_any(),
            AppRoute::DashboardNotFound { .. } => view! {
                <ProtectedRoute route=route>
                    <pages::not_found::NotFoundPage/>
                </ProtectedRoute>
            }
            .into_any(),
            AppRoute::NotFound => view! { <pages::not_found::NotFoundPage/> }.into_any(),
        }
    }
}
