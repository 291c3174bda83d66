use contracts::shared::cart::{Cart, CartItem};
use leptos::prelude::*;

/// App-wide cart shared by the shop and booking flows. The collection
/// semantics (dedupe by id, quantity bump) live in `contracts`; this
/// wraps them in one reactive signal.
#[derive(Clone, Copy)]
pub struct CartContext {
    pub cart: RwSignal<Cart>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
        }
    }

    pub fn add_item(&self, item: CartItem) {
        self.cart.update(|cart| cart.add(item));
    }

    pub fn remove_item(&self, id: &str) {
        let id = id.to_string();
        self.cart.update(|cart| cart.remove(&id));
    }

    /// Reactive unit count for the header badge.
    pub fn item_count(&self) -> u32 {
        self.cart.with(|cart| cart.item_count())
    }

    pub fn total(&self) -> u32 {
        self.cart.with(|cart| cart.total())
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext context not found")
}
