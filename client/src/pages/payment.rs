//! Checkout for one booking.
//!
//! The page prices the booking (with the fourth-booking discount), asks the
//! API for a payment intent, hands the client secret to the processor's card
//! widget, and posts the payment record with the transaction id the widget
//! reports back.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tourbook::checkout::{self, Quote};
use tourbook::role::Role;
use tourbook::routes::{AppRoute, DashboardPage};

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::state::auth::AuthState;
use crate::util::task::spawn;

pub fn price_summary(quote: &Quote) -> String {
    if quote.discounted {
        format!("${:.2} (10% off ${:.2})", quote.amount, quote.list_price)
    } else {
        format!("${:.2}", quote.amount)
    }
}

#[component]
pub fn PaymentPage(booking_id: String) -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let quote = RwSignal::new(None::<Quote>);
    let client_secret = RwSignal::new(None::<String>);
    let transaction_id = RwSignal::new(String::new());
    let status = RwSignal::new(Status::Busy("Pricing booking...".to_owned()));

    let email = auth.with_untracked(|s| s.session().map(|s| s.email.clone())).unwrap_or_default();

    let secure = services.secure.clone();
    let owner = email.clone();
    spawn(async move {
        let priced = match secure.bookings_with_packages(&owner).await {
            Ok(bookings) => checkout::quote(&bookings, &booking_id),
            Err(e) => Err(e.into()),
        };
        match priced {
            Ok(q) => {
                quote.set(Some(q));
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    let secure = services.secure.clone();
    let on_intent = move |_: leptos::ev::MouseEvent| {
        let Some(q) = quote.get_untracked() else { return };
        let secure = secure.clone();
        status.set(Status::Busy("Contacting payment processor...".to_owned()));
        spawn(async move {
            match checkout::create_intent(&secure, &q).await {
                Ok(intent) => {
                    client_secret.set(Some(intent.client_secret));
                    status.set(Status::Done("Enter your card in the payment form.".to_owned()));
                }
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    let secure = services.secure.clone();
    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(q) = quote.get_untracked() else { return };
        let txn = transaction_id.get_untracked().trim().to_owned();
        if txn.is_empty() {
            status.set(Status::Failed("Waiting for the payment processor to confirm.".to_owned()));
            return;
        }
        let secure = secure.clone();
        let email = email.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match checkout::record_payment(&secure, &email, &q, &txn).await {
                Ok(_) => {
                    let bookings = AppRoute::Dashboard { role: Role::Tourist, page: DashboardPage::MyBookings };
                    navigate(&bookings.to_string(), NavigateOptions::default());
                }
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <section class="payment">
            <h1>"Payment"</h1>
            <Notice status=status/>
            {move || quote.get().map(|q| view! { <p class="payment__amount">{price_summary(&q)}</p> })}
            <Show
                when=move || client_secret.get().is_some()
                fallback=move || view! {
                    <button class="button" on:click=on_intent.clone() disabled=move || quote.get().is_none()>
                        "Pay"
                    </button>
                }
            >
                <div id="payment-element" data-client-secret=move || client_secret.get().unwrap_or_default()></div>
                <form on:submit=on_confirm.clone()>
                    <input
                        type="hidden"
                        id="payment-transaction-id"
                        on:change=move |ev| transaction_id.set(event_target_value(&ev))
                    />
                    <button class="button" type="submit">"Confirm payment"</button>
                </form>
            </Show>
        </section>
    }
}
