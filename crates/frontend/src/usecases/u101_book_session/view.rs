use contracts::domain::a002_service::Offering;
use leptos::prelude::*;

use super::view_model::{BookingViewModel, SubmitState};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::shared::state::cart_context::use_cart;

/// Booking page entry. Renders the form only when an offering context
/// was supplied (via "Book Now" on a service card); without one the
/// explicit empty-state panel shows instead. It never guesses a
/// default service.
#[component]
pub fn BookSessionPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="page page--narrow">
            {move || match ctx.booking_offering.get() {
                None => view! { <NoServiceSelected /> }.into_any(),
                Some(offering) => view! { <BookingForm offering=offering /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn NoServiceSelected() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="card empty-state">
            <h3>"No service selected"</h3>
            <p>"Pick a service first, then book a session for it."</p>
            <button
                class="button button--primary"
                on:click=move |_| ctx.navigate(Page::Services)
            >
                "Browse services"
            </button>
        </div>
    }
}

/// The booking form proper. A fresh ViewModel (and with it a fresh
/// selection) is created whenever the offering context changes.
#[component]
fn BookingForm(offering: Offering) -> impl IntoView {
    let cart = use_cart();
    let vm = BookingViewModel::new(offering.clone());

    // Create all clones needed before the view! macro
    let vm_date_value = vm.clone();
    let vm_date_input = vm.clone();
    let vm_time_value = vm.clone();
    let vm_time_input = vm.clone();
    let vm_slots = vm.clone();
    let vm_slots_empty = vm.clone();
    let vm_participants_value = vm.clone();
    let vm_participants_input = vm.clone();
    let vm_note_value = vm.clone();
    let vm_note_input = vm.clone();
    let vm_errors_date = vm.clone();
    let vm_errors_time = vm.clone();
    let vm_errors_participants = vm.clone();
    let vm_banner = vm.clone();
    let vm_banner_dismiss = vm.clone();
    let vm_submit_click = vm.clone();
    let vm_submit_disabled = vm.clone();
    let vm_submit_label = vm.clone();
    let vm_succeeded = vm.clone();
    let vm_book_another = vm.clone();

    let min_date = BookingViewModel::today_value();

    view! {
        <div class="card booking-card">
            <div class="booking-card__offering">
                <h3>{offering.title.clone()}</h3>
                <p>{offering.description.clone()}</p>
                <div class="booking-card__offering-meta">
                    <span>{icon("clock")} {offering.duration.clone()}</span>
                    <span class="booking-card__price">{offering.price.clone()}</span>
                </div>
            </div>

            <Show
                when=move || vm_succeeded.submit_state.get() != SubmitState::Succeeded
                fallback=move || {
                    let vm_reset = vm_book_another.clone();
                    view! {
                        <div class="info-box text-success booking-card__confirmation">
                            <p>"Your session is booked and waiting in the cart."</p>
                            <button
                                class="button button--secondary"
                                on:click=move |_| vm_reset.book_another()
                            >
                                "Book another session"
                            </button>
                        </div>
                    }
                }
            >
                {
                    let vm_date_value = vm_date_value.clone();
                    let vm_date_input = vm_date_input.clone();
                    let vm_time_value = vm_time_value.clone();
                    let vm_time_input = vm_time_input.clone();
                    let vm_slots = vm_slots.clone();
                    let vm_slots_empty = vm_slots_empty.clone();
                    let vm_participants_value = vm_participants_value.clone();
                    let vm_participants_input = vm_participants_input.clone();
                    let vm_note_value = vm_note_value.clone();
                    let vm_note_input = vm_note_input.clone();
                    let vm_errors_date = vm_errors_date.clone();
                    let vm_errors_time = vm_errors_time.clone();
                    let vm_errors_participants = vm_errors_participants.clone();
                    let vm_banner = vm_banner.clone();
                    let vm_banner_dismiss = vm_banner_dismiss.clone();
                    let vm_submit_click = vm_submit_click.clone();
                    let vm_submit_disabled = vm_submit_disabled.clone();
                    let vm_submit_label = vm_submit_label.clone();
                    let min_date = min_date.clone();

                    view! {
                        {move || {
                            vm_banner.banner.get().map(|message| {
                                let vm_dismiss = vm_banner_dismiss.clone();
                                view! {
                                    <div class="warning-box text-error booking-card__banner">
                                        {message}
                                        <button
                                            class="warning-box__dismiss"
                                            aria-label="Dismiss"
                                            on:click=move |_| vm_dismiss.dismiss_banner()
                                        >
                                            {icon("close")}
                                        </button>
                                    </div>
                                }
                            })
                        }}

                        <div class="detail-form">
                            <div class="form__group">
                                <label class="form__label" for="booking-date">
                                    {icon("calendar")}
                                    "Choose Date"
                                </label>
                                <input
                                    class="form__input"
                                    type="date"
                                    id="booking-date"
                                    min=min_date.clone()
                                    prop:value=move || {
                                        vm_date_value
                                            .selection
                                            .get()
                                            .date
                                            .map(|d| d.format("%Y-%m-%d").to_string())
                                            .unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        vm_date_input.set_date(event_target_value(&ev));
                                    }
                                />
                                {move || {
                                    vm_errors_date.errors.get().date.map(|message| {
                                        view! { <span class="form__error">{message}</span> }
                                    })
                                }}
                            </div>

                            <div class="form__group">
                                <label class="form__label" for="booking-time">
                                    {icon("clock")}
                                    "Choose Time"
                                </label>
                                <select
                                    class="form__input"
                                    id="booking-time"
                                    prop:value=move || {
                                        vm_time_value.selection.get().time.unwrap_or_default()
                                    }
                                    on:change=move |ev| {
                                        vm_time_input.set_time(event_target_value(&ev));
                                    }
                                >
                                    <option value="">"Select a time"</option>
                                    {move || {
                                        vm_slots
                                            .slots
                                            .get()
                                            .into_iter()
                                            .map(|slot| {
                                                view! {
                                                    <option value=slot.clone()>{slot.clone()}</option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                                {move || {
                                    let no_slots = vm_slots_empty.slots.get().is_empty()
                                        && vm_slots_empty
                                            .selection
                                            .with(|selection| selection.date.is_some());
                                    no_slots
                                        .then(|| {
                                            view! {
                                                <span class="form__hint">
                                                    "No sessions available on this day"
                                                </span>
                                            }
                                        })
                                }}
                                {move || {
                                    vm_errors_time.errors.get().time.map(|message| {
                                        view! { <span class="form__error">{message}</span> }
                                    })
                                }}
                            </div>

                            <div class="form__group">
                                <label class="form__label" for="booking-participants">
                                    {icon("users")}
                                    "Number of Participants"
                                </label>
                                <input
                                    class="form__input"
                                    type="number"
                                    id="booking-participants"
                                    min="1"
                                    max="10"
                                    prop:value=move || {
                                        vm_participants_value
                                            .selection
                                            .get()
                                            .participants
                                            .to_string()
                                    }
                                    on:input=move |ev| {
                                        vm_participants_input
                                            .set_participants(event_target_value(&ev));
                                    }
                                />
                                {move || {
                                    vm_errors_participants.errors.get().participants.map(|message| {
                                        view! { <span class="form__error">{message}</span> }
                                    })
                                }}
                            </div>

                            <div class="form__group">
                                <label class="form__label" for="booking-note">
                                    "Note (optional)"
                                </label>
                                <textarea
                                    class="form__textarea"
                                    id="booking-note"
                                    prop:value=move || vm_note_value.selection.get().note
                                    on:input=move |ev| {
                                        vm_note_input.set_note(event_target_value(&ev));
                                    }
                                    placeholder="Anything we should know?"
                                    rows="3"
                                />
                            </div>

                            <button
                                class="button button--primary button--block"
                                disabled=move || !vm_submit_disabled.can_submit()
                                on:click=move |_| vm_submit_click.submit_command(cart)
                            >
                                {move || {
                                    if vm_submit_label.submit_state.get() == SubmitState::Submitting {
                                        "Booking..."
                                    } else {
                                        "Book Session"
                                    }
                                }}
                            </button>
                        </div>
                    }
                }
            </Show>
        </div>
    }
}
