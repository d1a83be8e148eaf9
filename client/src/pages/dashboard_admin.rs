//! Admin dashboard pages: package authoring and user management.

#[cfg(test)]
#[path = "dashboard_admin_test.rs"]
mod dashboard_admin_test;

use leptos::prelude::*;
use tourbook::net::types::{NewPackage, RequestDecision, TourPlanDay, UserRecord};
use tourbook::role::Role;

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::util::task::spawn;

/// Raw form fields for a new package.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackageForm {
    pub name: String,
    pub tour_type: String,
    pub price: String,
    pub images: String,
    pub about: String,
    pub plan: String,
    pub guide: String,
}

/// One plan entry per non-blank line, `Day 1: Arrive` style. Lines without a
/// colon become an info-only day.
pub fn parse_tour_plan(raw: &str) -> Vec<TourPlanDay> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((day, info)) => TourPlanDay { day: day.trim().to_owned(), info: info.trim().to_owned() },
            None => TourPlanDay { day: String::new(), info: line.to_owned() },
        })
        .collect()
}

impl PackageForm {
    /// # Errors
    ///
    /// Returns a user-facing message for the first invalid field.
    pub fn build(&self) -> Result<NewPackage, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Package name is required.");
        }
        let tour_type = self.tour_type.trim();
        if tour_type.is_empty() {
            return Err("Tour type is required.");
        }
        let price = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => p,
            _ => return Err("Price must be a non-negative number."),
        };
        let images = self
            .images
            .split([',', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(NewPackage {
            package_name: name.to_owned(),
            tour_type: tour_type.to_owned(),
            price,
            images,
            about: self.about.trim().to_owned(),
            tour_plan: parse_tour_plan(&self.plan),
            guide: self.guide.trim().to_owned(),
        })
    }
}

#[component]
pub fn AddPackage() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(PackageForm::default());
    let status = RwSignal::new(Status::Idle);

    let secure = services.secure.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let package = match form.with_untracked(PackageForm::build) {
            Ok(package) => package,
            Err(msg) => {
                status.set(Status::Failed(msg.to_owned()));
                return;
            }
        };
        let secure = secure.clone();
        status.set(Status::Busy("Saving package...".to_owned()));
        spawn(async move {
            match secure.add_package(&package).await {
                Ok(()) => {
                    form.set(PackageForm::default());
                    status.set(Status::Done(format!("{} added.", package.package_name)));
                }
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    let input = move |label: &'static str, get: fn(&PackageForm) -> String, set: fn(&mut PackageForm, String)| {
        view! {
            <label>
                <span>{label}</span>
                <input
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <form class="package-form" on:submit=on_submit>
            {input("Package name", |f| f.name.clone(), |f, v| f.name = v)}
            {input("Tour type", |f| f.tour_type.clone(), |f, v| f.tour_type = v)}
            {input("Price", |f| f.price.clone(), |f, v| f.price = v)}
            {input("Image URLs (comma separated)", |f| f.images.clone(), |f, v| f.images = v)}
            {input("Guide", |f| f.guide.clone(), |f, v| f.guide = v)}
            <label>
                <span>"About"</span>
                <textarea
                    prop:value=move || form.with(|f| f.about.clone())
                    on:input=move |ev| form.update(|f| f.about = event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                <span>"Tour plan (one \"Day N: ...\" per line)"</span>
                <textarea
                    prop:value=move || form.with(|f| f.plan.clone())
                    on:input=move |ev| form.update(|f| f.plan = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="button" type="submit">"Add package"</button>
            <Notice status=status/>
        </form>
    }
}

#[component]
pub fn ManageUsers() -> impl IntoView {
    let services = expect_context::<Services>();
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let status = RwSignal::new(Status::Busy("Loading users...".to_owned()));

    let secure = services.secure.clone();
    spawn(async move {
        match secure.users().await {
            Ok(list) => {
                users.set(list);
                status.set(Status::Idle);
            }
            Err(e) => status.set(Status::failed(e)),
        }
    });

    let secure = services.secure.clone();
    let set_role = move |user_id: String, role: Role| {
        let secure = secure.clone();
        spawn(async move {
            match secure.set_user_role(&user_id, role).await {
                Ok(()) => users.update(|list| {
                    if let Some(u) = list.iter_mut().find(|u| u.id == user_id) {
                        u.role = Some(role);
                        u.request_role = None;
                    }
                }),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    let secure = services.secure.clone();
    let decide = move |user_id: String, requested: Option<Role>, decision: RequestDecision| {
        let secure = secure.clone();
        spawn(async move {
            let sent = match (decision, requested) {
                (RequestDecision::Approved, Some(role)) => secure.approve_role_request(&user_id, role).await,
                _ => secure.decide_role_request(&user_id, decision).await,
            };
            match sent {
                Ok(()) => users.update(|list| {
                    if let Some(u) = list.iter_mut().find(|u| u.id == user_id) {
                        if decision == RequestDecision::Approved {
                            u.role = requested.or(u.role);
                        }
                        u.request_role = None;
                    }
                }),
                Err(e) => status.set(Status::failed(e)),
            }
        });
    };

    view! {
        <Notice status=status/>
        <table class="users">
            <thead>
                <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th><th>"Request"</th><th></th></tr>
            </thead>
            <tbody>
                {move || {
                    let set_role = set_role.clone();
                    let decide = decide.clone();
                    users
                        .get()
                        .into_iter()
                        .map(|u| {
                            let role_label = u.role.map_or("-", Role::label);
                            let requested = u.request_role.map(Role::label);
                            let has_request = requested.is_some();
                            let make = |role: Role| {
                                let set_role = set_role.clone();
                                let id = u.id.clone();
                                move |_: leptos::ev::MouseEvent| set_role(id.clone(), role)
                            };
                            let answer = |decision: RequestDecision| {
                                let decide = decide.clone();
                                let id = u.id.clone();
                                let requested = u.request_role;
                                move |_: leptos::ev::MouseEvent| decide(id.clone(), requested, decision)
                            };
                            view! {
                                <tr>
                                    <td>{u.name.clone().unwrap_or_default()}</td>
                                    <td>{u.email.clone()}</td>
                                    <td>{role_label}</td>
                                    <td>{requested.unwrap_or("-")}</td>
                                    <td>
                                        <button class="button" disabled=!has_request
                                            on:click=answer(RequestDecision::Approved)>"Approve"</button>
                                        <button class="button" disabled=!has_request
                                            on:click=answer(RequestDecision::Rejected)>"Reject"</button>
                                        <button class="button" on:click=make(Role::TourGuide)>"Make Guide"</button>
                                        <button class="button" on:click=make(Role::Admin)>"Make Admin"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
