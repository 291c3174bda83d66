use leptos::prelude::*;

use crate::shared::components::gallery_grid::GalleryGrid;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"Our Gallery"</h2>
            <GalleryGrid />
        </div>
    }
}
