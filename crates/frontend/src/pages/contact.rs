use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_send = move |_| {
        log::info!(
            "contact message from {} <{}>: {}",
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked()
        );
        sent.set(true);
    };

    view! {
        <div class="page page--narrow">
            <h2 class="page__title">"Contact Us"</h2>

            <div class="contact__columns">
                <div class="contact__info">
                    <h3>"Get in Touch"</h3>
                    <p>
                        "Have questions about our products or services? We'd love to hear from \
                         you!"
                    </p>
                    <p><strong>"Address: "</strong>"123 Craft Lane, Artisan Town, AT 12345"</p>
                    <p><strong>"Phone: "</strong>"(555) 123-4567"</p>
                    <p><strong>"Email: "</strong>"info@birasfamily.com"</p>
                </div>

                <div class="detail-form">
                    <div class="form__group">
                        <label class="form__label" for="contact-name">"Name"</label>
                        <input
                            class="form__input"
                            type="text"
                            id="contact-name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="contact-email">"Email"</label>
                        <input
                            class="form__input"
                            type="email"
                            id="contact-email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="contact-message">"Message"</label>
                        <textarea
                            class="form__textarea"
                            id="contact-message"
                            rows="4"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        />
                    </div>
                    <Show
                        when=move || !sent.get()
                        fallback=|| {
                            view! {
                                <div class="info-box text-success">
                                    "Thanks! We'll get back to you soon."
                                </div>
                            }
                        }
                    >
                        <button
                            class="button button--primary button--block"
                            on:click=on_send
                        >
                            "Send Message"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
