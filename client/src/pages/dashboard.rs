//! Role dashboards: sidebar of the role's pages plus the selected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Always rendered inside `ProtectedRoute`, so a session with the matching
//! role is present. The page list per role comes from
//! `DashboardPage::for_role`; the per-role pages live in the
//! `dashboard_*` modules.

use leptos::prelude::*;
use tourbook::net::types::Profile;
use tourbook::role::Role;
use tourbook::routes::{AppRoute, DashboardPage};

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::pages::{dashboard_admin, dashboard_guide, dashboard_tourist};
use crate::state::auth::AuthState;
use crate::util::task::spawn;

#[component]
pub fn Dashboard(role: Role, page: DashboardPage) -> impl IntoView {
    let links = DashboardPage::for_role(role)
        .iter()
        .map(|p| {
            let href = AppRoute::Dashboard { role, page: *p }.to_string();
            let class = if *p == page { "sidebar__link sidebar__link--active" } else { "sidebar__link" };
            view! { <a class=class href=href>{p.title()}</a> }
        })
        .collect_view();

    let body = match page {
        DashboardPage::MyProfile => view! { <MyProfile role=role/> }.into_any(),
        DashboardPage::MyBookings => view! { <dashboard_tourist::MyBookings/> }.into_any(),
        DashboardPage::MyWishlist => view! { <dashboard_tourist::MyWishlist/> }.into_any(),
        DashboardPage::RequestToAdmin => view! { <dashboard_tourist::RequestToAdmin/> }.into_any(),
        DashboardPage::MyAssignedTours => view! { <dashboard_guide::MyAssignedTours/> }.into_any(),
        DashboardPage::AddPackage => view! { <dashboard_admin::AddPackage/> }.into_any(),
        DashboardPage::ManageUsers => view! { <dashboard_admin::ManageUsers/> }.into_any(),
    };

    view! {
        <div class="dashboard">
            <aside class="sidebar">
                <h2>{format!("{} Dashboard", role.label())}</h2>
                {links}
                <a class="sidebar__link" href="/">"Home"</a>
            </aside>
            <section class="dashboard__body">
                <h1>{page.title()}</h1>
                {body}
            </section>
        </div>
    }
}

#[component]
fn MyProfile(role: Role) -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = RwSignal::new(None::<Profile>);
    let status = RwSignal::new(Status::Busy("Loading profile...".to_owned()));

    let email = auth.with_untracked(|s| s.session().map(|s| s.email.clone())).unwrap_or_default();
    let secure = services.secure.clone();
    spawn(async move {
        match secure.profile(&email).await {
            Ok(found) => {
                profile.set(Some(found));
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    view! {
        <Notice status=status/>
        {move || {
            profile.get().map(|p| {
                view! {
                    <div class="profile">
                        <img class="profile__photo" src=p.photo_url.unwrap_or_default()/>
                        <h2>{p.name.unwrap_or_default()}</h2>
                        <p>{p.email.unwrap_or_default()}</p>
                        <p class="profile__role">{p.role.unwrap_or(role).label()}</p>
                    </div>
                }
            })
        }}
        {(role == Role::TourGuide).then(|| view! { <dashboard_guide::GuideProfileForm/> })}
        {(role == Role::Tourist).then(|| view! { <dashboard_tourist::ShareStory/> })}
    }
}
