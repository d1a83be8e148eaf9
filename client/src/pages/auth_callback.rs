//! Return leg of Google/GitHub sign-in.
//!
//! The provider redirects here with its result in the query string. The
//! challenge parked by the login page is consumed and the exchange is
//! completed through the session provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::state::auth::AuthState;
use crate::util::auth::{current_href, take_challenge};
use crate::util::task::spawn;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let status = RwSignal::new(Status::Busy("Finishing sign-in...".to_owned()));

    match take_challenge(services.store.as_ref()) {
        None => status.set(Status::Failed("This sign-in link has expired. Please try again.".to_owned())),
        Some(challenge) => {
            let session = services.session.clone();
            let callback_url = current_href();
            spawn(async move {
                match session.finish_social_sign_in(&challenge, &callback_url).await {
                    Ok(signed_in) => {
                        tracing::info!(email = %signed_in.email, "social sign-in complete");
                        let to = auth.with_untracked(AuthState::after_login);
                        auth.update(|state| state.return_to = None);
                        navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => status.set(Status::failed(e)),
                }
            });
        }
    }

    view! {
        <div class="login-page">
            <div class="login-card">
                <Notice status=status/>
                <a href="/login">"Back to login"</a>
            </div>
        </div>
    }
}
