use leptos::prelude::*;

use crate::domain::a001_product::ui::grid::ProductGrid;
use crate::domain::a002_service::ui::tabs::ServiceTabs;
use crate::shared::components::forum::CommunityForum;
use crate::shared::components::gallery_grid::GalleryGrid;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <section class="hero">
                <div class="hero__content">
                    <h2>"Welcome to Bira's Family Business"</h2>
                    <p>
                        "We're a creative family bringing art, crafts, and knowledge to our \
                         lovely town. From woodworking to paper crafts, juggling to painting, \
                         we create with love."
                    </p>
                    <button class="button button--primary">"Explore Our Work"</button>
                </div>
            </section>

            <section class="card home__section">
                <h3 class="home__section-title">"Featured Products"</h3>
                <ProductGrid limit=3 />
            </section>

            <section class="card home__section">
                <h3 class="home__section-title">"Our Services"</h3>
                <ServiceTabs />
            </section>

            <section class="card home__section">
                <h3 class="home__section-title">"Latest from Our Gallery"</h3>
                <GalleryGrid limit=4 />
            </section>

            <section class="card home__section">
                <h3 class="home__section-title">"Community Forum"</h3>
                <CommunityForum />
            </section>
        </div>
    }
}
