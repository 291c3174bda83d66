use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use contracts::domain::a002_service::Offering;

/// Top-level pages reachable from the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Shop,
    Services,
    Gallery,
    Book,
    SubmitArt,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Shop,
        Page::Services,
        Page::Gallery,
        Page::Book,
        Page::SubmitArt,
        Page::About,
        Page::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Shop => "Shop",
            Page::Services => "Services",
            Page::Gallery => "Gallery",
            Page::Book => "Book a Session",
            Page::SubmitArt => "Submit Art",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Stable value used in the `?page=` query.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Shop => "shop",
            Page::Services => "services",
            Page::Gallery => "gallery",
            Page::Book => "book",
            Page::SubmitArt => "submit-art",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub menu_open: RwSignal<bool>,
    /// Offering context the booking flow was entered with. `None`
    /// renders the explicit "no service selected" panel; nothing ever
    /// defaults silently.
    pub booking_offering: RwSignal<Option<Offering>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Home),
            menu_open: RwSignal::new(false),
            booking_offering: RwSignal::new(None),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active.set(page);
        self.menu_open.set(false);
    }

    /// "Book Now" entry point: stores the offering context, then opens
    /// the booking page.
    pub fn open_booking(&self, offering: Offering) {
        self.booking_offering.set(Some(offering));
        self.navigate(Page::Book);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Syncs the active page with the `?page=` URL query so views are
    /// deep-linkable without server routing. Runs once at mount.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|slug| Page::from_slug(slug)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let slug = this.active.get().slug();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), slug.to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Use untracked reads against the window so this effect only
            // depends on the active page
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("no-such-page"), None);
    }
}
