use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::data::catalog::SERVICES;
use crate::shared::icons::icon;

/// Service family tabs with one offering card per bookable variant.
/// "Book Now" stores the offering as the booking context and opens the
/// booking page; the flow over there never guesses a service on its
/// own.
#[component]
pub fn ServiceTabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let active = RwSignal::new(SERVICES.first().map(|s| s.id.clone()).unwrap_or_default());

    view! {
        <div class="service-tabs">
            <div class="service-tabs__bar">
                {SERVICES
                    .iter()
                    .map(|service| {
                        let tab_id = service.id.clone();
                        let select_id = service.id.clone();
                        view! {
                            <button
                                class=move || {
                                    if active.get() == tab_id {
                                        "service-tabs__tab service-tabs__tab--active"
                                    } else {
                                        "service-tabs__tab"
                                    }
                                }
                                on:click=move |_| active.set(select_id.clone())
                            >
                                {icon(&service.icon)}
                                {service.title.clone()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let current = active.get();
                SERVICES
                    .iter()
                    .find(|service| service.id == current)
                    .map(|service| {
                        view! {
                            <div class="service-tabs__panel">
                                <div class="service-tabs__icon">{icon(&service.icon)}</div>
                                <h4 class="service-tabs__title">{service.title.clone()}</h4>
                                <p class="service-tabs__description">
                                    {service.description.clone()}
                                </p>

                                <div class="offering-grid">
                                    {service
                                        .offerings
                                        .iter()
                                        .map(|entry| {
                                            let offering = entry.clone();
                                            view! {
                                                <div class="card offering-card">
                                                    <h5 class="offering-card__title">
                                                        {entry.title.clone()}
                                                    </h5>
                                                    <p class="offering-card__description">
                                                        {entry.description.clone()}
                                                    </p>
                                                    <div class="offering-card__meta">
                                                        <span class="offering-card__duration">
                                                            {icon("clock")}
                                                            {entry.duration.clone()}
                                                        </span>
                                                        <span class="offering-card__price">
                                                            {entry.price.clone()}
                                                        </span>
                                                    </div>
                                                    <button
                                                        class="button button--primary offering-card__book"
                                                        on:click=move |_| {
                                                            ctx.open_booking(offering.clone())
                                                        }
                                                    >
                                                        "Book Now"
                                                    </button>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
