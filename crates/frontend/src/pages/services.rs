use leptos::prelude::*;

use crate::domain::a002_service::ui::tabs::ServiceTabs;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"Our Services"</h2>
            <ServiceTabs />
        </div>
    }
}
