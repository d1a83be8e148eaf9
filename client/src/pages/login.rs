//! Login page: email + password, or Google/GitHub via redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tourbook::identity::SocialProvider;

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::state::auth::AuthState;
use crate::util::auth::{callback_uri, leave_for, origin, stash_challenge};
use crate::util::task::spawn;

/// Trimmed email and raw password, or a message naming the blank field.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(Status::Idle);

    let session = services.session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        let (email_value, password_value) = match credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(msg) => {
                status.set(Status::Failed(msg.to_owned()));
                return;
            }
        };
        status.set(Status::Busy("Signing in...".to_owned()));
        let session = session.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match session.sign_in_with_password(&email_value, &password_value).await {
                Ok(_) => {
                    status.set(Status::Idle);
                    let to = auth.with_untracked(AuthState::after_login);
                    auth.update(|state| state.return_to = None);
                    navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    password.set(String::new());
                    status.set(Status::failed(e));
                }
            }
        });
    };

    let social = move |provider: SocialProvider| {
        let services = services.clone();
        move |_: leptos::ev::MouseEvent| {
            let session = services.session.clone();
            let store = services.store.clone();
            status.set(Status::Busy(format!("Redirecting to {}...", provider.label())));
            spawn(async move {
                match session.begin_social_sign_in(provider, &callback_uri(&origin())).await {
                    Ok(challenge) => match stash_challenge(store.as_ref(), &challenge) {
                        Ok(()) => leave_for(&challenge.auth_uri),
                        Err(e) => status.set(Status::failed(e)),
                    },
                    Err(e) => status.set(Status::failed(e)),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || status.get().is_busy()>
                        "Login"
                    </button>
                </form>
                <Notice status=status/>
                <div class="login-divider"></div>
                <button class="login-button" on:click=social(SocialProvider::Google)>"Continue with Google"</button>
                <button class="login-button" on:click=social(SocialProvider::GitHub)>"Continue with GitHub"</button>
                <p>"New here? " <a href="/register">"Create an account"</a></p>
            </div>
        </div>
    }
}
