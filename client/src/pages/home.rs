//! Package catalog, optionally narrowed to one tour type.

use leptos::prelude::*;
use tourbook::net::types::Package;

use crate::app::Services;
use crate::components::notice::{Notice, Status};
use crate::components::package_card::PackageCard;
use crate::util::task::spawn;

#[component]
pub fn PackagesPage(tour_type: Option<String>) -> impl IntoView {
    let services = expect_context::<Services>();
    let packages = RwSignal::new(Vec::<Package>::new());
    let status = RwSignal::new(Status::Busy("Loading packages...".to_owned()));

    let heading = tour_type.as_deref().map_or_else(|| "All Packages".to_owned(), |t| format!("{t} Tours"));
    let api = services.api.clone();
    spawn(async move {
        let result = match tour_type {
            Some(kind) => api.packages_by_type(&kind).await,
            None => api.packages().await,
        };
        match result {
            Ok(list) => {
                status.set(if list.is_empty() { Status::Done("No packages yet.".to_owned()) } else { Status::Idle });
                packages.set(list);
            }
            Err(e) => {
                tracing::warn!(error = %e, "package catalog failed");
                status.set(Status::failed(e));
            }
        }
    });

    view! {
        <section class="catalog">
            <h1>{heading}</h1>
            <Notice status=status/>
            <div class="catalog__grid">
                {move || {
                    packages
                        .get()
                        .into_iter()
                        .map(|package| view! { <PackageCard package=package/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
