pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

use self::footer::Footer;
use self::global_context::{AppGlobalContext, Page};
use self::header::Header;
use crate::domain::a003_artwork::ui::submission::ArtistSubmissionPage;
use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::services::ServicesPage;
use crate::pages::shop::ShopPage;
use crate::usecases::u101_book_session::view::BookSessionPage;

/// Application shell: sticky header, active page, footer.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |             Active page body              |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Sync the active page with the ?page= query. Runs once when the
    // component is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {move || match ctx.active.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Shop => view! { <ShopPage /> }.into_any(),
                    Page::Services => view! { <ServicesPage /> }.into_any(),
                    Page::Gallery => view! { <GalleryPage /> }.into_any(),
                    Page::Book => view! { <BookSessionPage /> }.into_any(),
                    Page::SubmitArt => view! { <ArtistSubmissionPage /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Contact => view! { <ContactPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
