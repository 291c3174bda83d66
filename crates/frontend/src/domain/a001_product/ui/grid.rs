use contracts::shared::cart::CartItem;
use leptos::prelude::*;

use crate::shared::data::catalog::products_in;
use crate::shared::icons::icon;
use crate::shared::state::cart_context::use_cart;

/// Product card grid. `section` filters by catalog section; `limit`
/// caps how many cards render (the home page shows a teaser of three).
#[component]
pub fn ProductGrid(
    #[prop(optional)] section: Option<&'static str>,
    #[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
    let cart = use_cart();
    let expanded = RwSignal::new(None::<String>);

    let mut products = products_in(section);
    if let Some(limit) = limit {
        products.truncate(limit);
    }

    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| {
                    let item = CartItem::from(&product);
                    let card_id = product.id.clone();
                    let toggle_id = product.id.clone();
                    view! {
                        <div class="card product-card">
                            <div class="product-card__media">
                                <img src=product.image.clone() alt=product.name.clone() />
                                <span class="product-card__category">{product.category.clone()}</span>
                            </div>
                            <div class="product-card__body">
                                <h3 class="product-card__name">{product.name.clone()}</h3>
                                <div class="product-card__meta">
                                    <span class="product-card__price">
                                        {format!("${}", product.price)}
                                    </span>
                                    <span class="product-card__rating">
                                        {icon("star")}
                                        {format!("{:.1}", product.rating)}
                                    </span>
                                </div>
                                <div class="product-card__actions">
                                    <button
                                        class="button button--primary"
                                        on:click=move |_| cart.add_item(item.clone())
                                    >
                                        {icon("bag")}
                                        "Add to Cart"
                                    </button>
                                    <button
                                        class="button button--outline"
                                        aria-label="Details"
                                        on:click=move |_| {
                                            expanded
                                                .update(|current| {
                                                    *current = if current.as_deref()
                                                        == Some(toggle_id.as_str())
                                                    {
                                                        None
                                                    } else {
                                                        Some(toggle_id.clone())
                                                    };
                                                });
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </button>
                                </div>
                                <Show when=move || {
                                    expanded.get().as_deref() == Some(card_id.as_str())
                                }>
                                    <p class="product-card__details">
                                        "Handcrafted with love by the Bira family. Each piece is \
                                         unique and made with the finest materials, ensuring both \
                                         beauty and durability. Our commitment to quality \
                                         craftsmanship shows in every detail."
                                    </p>
                                </Show>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
