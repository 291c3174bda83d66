use contracts::domain::a003_artwork::{validate_upload, ArtistSubmission, ArtworkUpload};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// Artist submission form. File checks run client-side against the
/// contracts rules; a valid submission is logged, there is no backend
/// to receive it.
#[component]
pub fn ArtistSubmissionPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let uploads = RwSignal::new(Vec::<ArtworkUpload>::new());
    let upload_errors = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let on_files = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let mut picked = Vec::new();
        let mut rejected = Vec::new();
        if let Some(files) = input.and_then(|input| input.files()) {
            for index in 0..files.length() {
                if let Some(file) = files.get(index) {
                    let upload = ArtworkUpload {
                        file_name: file.name(),
                        size_bytes: file.size() as u64,
                        mime_type: file.type_(),
                    };
                    match validate_upload(&upload) {
                        Ok(()) => picked.push(upload),
                        Err(reason) => rejected.push(reason),
                    }
                }
            }
        }
        uploads.set(picked);
        upload_errors.set(rejected);
    };

    let on_submit = move |_| {
        let submission = ArtistSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            description: description.get_untracked(),
            uploads: uploads.get_untracked(),
        };
        match submission.validate() {
            Ok(()) => {
                match serde_json::to_string(&submission) {
                    Ok(json) => log::info!("artist submission received: {}", json),
                    Err(_) => log::info!("artist submission received from {}", submission.name),
                }
                error.set(None);
                submitted.set(true);
            }
            Err(reason) => error.set(Some(reason)),
        }
    };

    view! {
        <div class="page page--narrow">
            <div class="card submission-card">
                <div class="submission-card__intro">
                    <h3>"Share Your Art With Us"</h3>
                    <p>
                        "We love supporting local artists! Submit your artwork for consideration \
                         in our store."
                    </p>
                </div>

                <Show
                    when=move || !submitted.get()
                    fallback=|| {
                        view! {
                            <div class="info-box text-success">
                                "Thank you! We received your submission and will be in touch."
                            </div>
                        }
                    }
                >
                    <div class="detail-form">
                        <div class="form__group">
                            <label class="form__label" for="artist-name">"Your Name"</label>
                            <input
                                class="form__input"
                                type="text"
                                id="artist-name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                placeholder="Your Name"
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="artist-email">"Your Email"</label>
                            <input
                                class="form__input"
                                type="email"
                                id="artist-email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                placeholder="Your Email"
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="artwork-upload">"Your Artwork"</label>
                            <div class="upload-zone">
                                <input
                                    type="file"
                                    multiple=true
                                    accept="image/*"
                                    id="artwork-upload"
                                    class="upload-zone__input"
                                    on:change=on_files
                                />
                                <label class="upload-zone__prompt" for="artwork-upload">
                                    {icon("upload")}
                                    <p>"Drop your images here"</p>
                                    <p class="upload-zone__hint">"or click to upload"</p>
                                </label>
                            </div>
                            {move || {
                                let picked = uploads.get();
                                (!picked.is_empty())
                                    .then(|| {
                                        view! {
                                            <ul class="upload-zone__files">
                                                {picked
                                                    .into_iter()
                                                    .map(|file| {
                                                        view! {
                                                            <li>
                                                                {icon("image")}
                                                                {file.file_name}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })
                            }}
                            {move || {
                                upload_errors
                                    .get()
                                    .into_iter()
                                    .map(|reason| {
                                        view! { <div class="warning-box text-error">{reason}</div> }
                                    })
                                    .collect_view()
                            }}
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="artwork-description">
                                "Description"
                            </label>
                            <textarea
                                class="form__textarea"
                                id="artwork-description"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                                placeholder="Tell us about your artwork..."
                                rows="4"
                            />
                        </div>

                        {move || {
                            error
                                .get()
                                .map(|reason| {
                                    view! { <div class="warning-box text-error">{reason}</div> }
                                })
                        }}

                        <button class="button button--primary button--block" on:click=on_submit>
                            {icon("send")}
                            "Submit Artwork"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
