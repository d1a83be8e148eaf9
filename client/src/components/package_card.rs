//! Catalog tile linking to a package page.

use leptos::prelude::*;
use tourbook::net::types::Package;
use tourbook::routes::AppRoute;

#[component]
pub fn PackageCard(package: Package) -> impl IntoView {
    let href = AppRoute::Package(package.id.clone()).to_string();
    let tours = AppRoute::Tours(package.tour_type.clone()).to_string();
    let image = package.images.first().cloned().unwrap_or_default();

    view! {
        <article class="package-card">
            <img class="package-card__image" src=image alt=package.package_name.clone()/>
            <a class="package-card__type" href=tours>{package.tour_type.clone()}</a>
            <h3>{package.package_name.clone()}</h3>
            <p class="package-card__price">{format!("${:.2}", package.price)}</p>
            <a class="button" href=href>"View Package"</a>
        </article>
    }
}
