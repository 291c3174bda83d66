use leptos::prelude::*;

use crate::shared::data::catalog::GALLERY_ITEMS;

/// Gallery card grid; `limit` caps how many pieces render.
#[component]
pub fn GalleryGrid(#[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let items = match limit {
        Some(limit) => &GALLERY_ITEMS[..limit.min(GALLERY_ITEMS.len())],
        None => &GALLERY_ITEMS[..],
    };

    view! {
        <div class="gallery-grid">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div class="gallery-card">
                            <img src=item.image alt=item.title />
                            <div class="gallery-card__overlay">
                                <h4>{item.title}</h4>
                                <p>{item.category}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
