use leptos::prelude::*;

use crate::domain::a001_product::ui::grid::ProductGrid;

#[component]
pub fn ShopPage() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"Our Products"</h2>
            <ProductGrid />
        </div>
    }
}
