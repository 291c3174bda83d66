use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <div class="page__intro">
                <h2 class="page__title">"Our Story"</h2>
                <p>
                    "Since 1980, the Bira family has been bringing creativity and craftsmanship \
                     to our community."
                </p>
            </div>

            <div class="about__columns">
                <div class="about__column">
                    <img
                        src="https://images.unsplash.com/photo-1581578731548-c64695cc6952?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
                        alt="Family Workshop"
                    />
                    <h3>"Our Values"</h3>
                    <p>
                        "We believe in quality craftsmanship, sustainable practices, and passing \
                         down traditional skills while embracing modern innovation."
                    </p>
                </div>
                <div class="about__column">
                    <img
                        src="https://images.unsplash.com/photo-1542744094-24638eff58bb?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
                        alt="Family Portrait"
                    />
                    <h3>"Our Team"</h3>
                    <p>
                        "Each member of our family brings unique skills and passion to our \
                         business, from traditional carpentry to modern software development."
                    </p>
                </div>
            </div>
        </div>
    }
}
