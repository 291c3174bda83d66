use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::shared::state::cart_context::use_cart;

/// Sticky top bar: brand, desktop nav, cart badge, mobile menu.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let cart = use_cart();

    view! {
        <header class="header">
            <div class="header__inner">
                <h1 class="header__brand" on:click=move |_| ctx.navigate(Page::Home)>
                    "Bira's"
                </h1>

                <nav class="header__nav">
                    <ul class="header__nav-list">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <li>
                                        <button
                                            class=move || {
                                                if ctx.active.get() == page {
                                                    "header__nav-link header__nav-link--active"
                                                } else {
                                                    "header__nav-link"
                                                }
                                            }
                                            on:click=move |_| ctx.navigate(page)
                                        >
                                            {page.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class="header__actions">
                    <button class="header__action" aria-label="Search">
                        {icon("search")}
                    </button>
                    <button class="header__action header__cart" aria-label="Cart">
                        {icon("bag")}
                        {move || {
                            let count = cart.item_count();
                            (count > 0)
                                .then(|| view! { <span class="header__cart-badge">{count}</span> })
                        }}
                    </button>
                    <button class="header__action" aria-label="Account">
                        {icon("user")}
                    </button>
                    <button
                        class="header__action header__menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| ctx.toggle_menu()
                    >
                        {move || icon(if ctx.menu_open.get() { "close" } else { "menu" })}
                    </button>
                </div>
            </div>

            <Show when=move || ctx.menu_open.get()>
                <nav class="header__mobile-menu">
                    <ul class="header__mobile-list">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <li>
                                        <button
                                            class="header__mobile-link"
                                            on:click=move |_| ctx.navigate(page)
                                        >
                                            {page.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </Show>
        </header>
    }
}
