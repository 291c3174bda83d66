use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::state::cart_context::CartContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state and the cart are shared app-wide via context;
    // the cart is the one resource crossing flow boundaries (the shop
    // and the booking flow both add to it).
    provide_context(AppGlobalContext::new());
    provide_context(CartContext::new());

    view! {
        <Shell />
    }
}
