use chrono::Datelike;
use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Page};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h3 class="footer__heading">"About Us"</h3>
                    <p>"Bira's Family Business: Crafting love into every creation since 1980."</p>
                </div>
                <div class="footer__column">
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__links">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <li>
                                        <button
                                            class="footer__link"
                                            on:click=move |_| ctx.navigate(page)
                                        >
                                            {page.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer__column">
                    <h3 class="footer__heading">"Contact Us"</h3>
                    <p>"123 Craft Lane"</p>
                    <p>"Artisan Town, AT 12345"</p>
                    <p>"Phone: (555) 123-4567"</p>
                    <p>"Email: info@birasfamily.com"</p>
                </div>
            </div>
            <div class="footer__legal">
                <p>{format!("© {} Bira's Family Business. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
