//! Sign-up page. The password policy is checked before any network call;
//! a successful sign-up sends the user to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tourbook::nav::LOGIN_PATH;
use tourbook::session::{PolicyError, SignUp};

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::util::task::spawn;

/// Validated form, with blank photo URL dropped.
///
/// # Errors
///
/// Returns the first missing field or the password policy failure.
pub fn sign_up_form(name: &str, email: &str, password: &str, photo_url: &str) -> Result<SignUp, PolicyError> {
    SignUp {
        email: email.to_owned(),
        password: password.to_owned(),
        name: name.to_owned(),
        photo_url: Some(photo_url.to_owned()),
    }
    .validated()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(Status::Idle);

    let session = services.session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        let form = match sign_up_form(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &photo_url.get_untracked(),
        ) {
            Ok(form) => form,
            Err(e) => {
                status.set(Status::failed(e));
                return;
            }
        };
        status.set(Status::Busy("Creating your account...".to_owned()));
        let session = session.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match session.sign_up_with_password(form).await {
                Ok(_) => {
                    status.set(Status::Done("Account created. Please log in.".to_owned()));
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    let field = |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="register-field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Create an account"</h1>
                {field("Name", "text", name)}
                {field("Email", "email", email)}
                {field("Photo URL", "url", photo_url)}
                {field("Password", "password", password)}
                <button class="login-button" type="submit" disabled=move || status.get().is_busy()>
                    "Register"
                </button>
                <Notice status=status/>
                <p>"Already have an account? " <a href="/login">"Login"</a></p>
            </form>
        </div>
    }
}
