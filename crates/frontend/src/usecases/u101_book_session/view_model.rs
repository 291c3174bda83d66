use chrono::{Local, NaiveDate, NaiveDateTime};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::booking::{
    build_record, BookingRules, BookingSelection, FlowState, ValidationErrors,
};
use contracts::domain::a002_service::Offering;
use contracts::shared::cart::CartItem;

use crate::shared::state::cart_context::CartContext;

/// Simulated backend latency for the booking hand-off.
const SUBMIT_DELAY_MS: u32 = 800;

/// Where the submit side of the flow currently is. Field edits are
/// ignored while `Submitting`; `Succeeded` renders the confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
}

/// ViewModel for the booking flow.
///
/// Simplified MVVM as in the details forms: the selection lives as one
/// plain contracts value inside a signal, derived state (slots,
/// errors) is recomputed on every field change, and commands drive the
/// async hand-off. One instance exists per offering context; picking a
/// different offering builds a fresh one, which is what resets the
/// selection.
#[derive(Clone)]
pub struct BookingViewModel {
    pub offering: Offering,
    pub rules: BookingRules,
    pub selection: RwSignal<BookingSelection>,
    pub slots: RwSignal<Vec<String>>,
    pub errors: RwSignal<ValidationErrors>,
    pub submit_state: RwSignal<SubmitState>,
    /// Dismissible banner for submission failures; per-field messages
    /// go through `errors` instead.
    pub banner: RwSignal<Option<String>>,
}

impl BookingViewModel {
    pub fn new(offering: Offering) -> Self {
        let rules = BookingRules::default();
        if let Err(reason) = rules.validate() {
            log::warn!("booking rules table is inconsistent: {}", reason);
        }
        Self {
            offering,
            rules,
            selection: RwSignal::new(BookingSelection::new()),
            slots: RwSignal::new(Vec::new()),
            errors: RwSignal::new(ValidationErrors::default()),
            submit_state: RwSignal::new(SubmitState::Idle),
            banner: RwSignal::new(None),
        }
    }

    /// The one clock read point; the engine itself only ever sees
    /// explicit instants.
    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    pub fn today_value() -> String {
        crate::shared::date_utils::today_input_value(Self::now().date())
    }

    fn editable(&self) -> bool {
        self.submit_state.get_untracked() != SubmitState::Submitting
    }

    /// Date changes regenerate the slot list and clear a selected time
    /// the new date no longer offers.
    pub fn set_date(&self, raw: String) {
        if !self.editable() {
            return;
        }
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        let now = Self::now();
        let rules = self.rules.clone();
        let mut slots = Vec::new();
        self.selection.update(|selection| {
            slots = selection.set_date(date, &rules, now);
        });
        self.slots.set(slots);
        self.revalidate();
    }

    pub fn set_time(&self, raw: String) {
        if !self.editable() {
            return;
        }
        let time = Some(raw).filter(|value| !value.is_empty());
        self.selection.update(|selection| selection.time = time);
        self.revalidate();
    }

    pub fn set_participants(&self, raw: String) {
        if !self.editable() {
            return;
        }
        // anything unparsable counts as zero and fails validation
        let count = raw.trim().parse::<u32>().unwrap_or(0);
        self.selection
            .update(|selection| selection.participants = count);
        self.revalidate();
    }

    pub fn set_note(&self, raw: String) {
        if !self.editable() {
            return;
        }
        self.selection.update(|selection| selection.note = raw);
    }

    fn revalidate(&self) {
        let errors = self
            .selection
            .with_untracked(|selection| selection.validate(&self.rules, Self::now()));
        self.errors.set(errors);
    }

    /// Reactive gate for the submit button.
    pub fn can_submit(&self) -> bool {
        self.submit_state.get() == SubmitState::Idle
            && self.selection.with(|selection| {
                selection.flow_state(true, &self.rules, Self::now()) == FlowState::Valid
            })
    }

    /// Confirms the booking: one atomic validation pass, then the
    /// simulated backend call, then the hand-off to the cart. While the
    /// call is in flight the state stays `Submitting` and re-entrant
    /// submits return immediately; there is no cancellation.
    pub fn submit_command(&self, cart: CartContext) {
        if self.submit_state.get_untracked() == SubmitState::Submitting {
            return;
        }

        let now = Self::now();
        let errors = self
            .selection
            .with_untracked(|selection| selection.validate(&self.rules, now));
        if !errors.is_valid() {
            self.errors.set(errors);
            return;
        }

        self.submit_state.set(SubmitState::Submitting);
        self.banner.set(None);

        let this = self.clone();
        spawn_local(async move {
            // Stands in for the real backend round trip; always
            // completes.
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;

            let built = this
                .selection
                .with_untracked(|selection| build_record(&this.offering, selection));
            match built {
                Ok(record) => {
                    match serde_json::to_string(&record) {
                        Ok(json) => log::info!("booking confirmed: {}", json),
                        Err(_) => log::info!("booking confirmed: {}", record.id),
                    }
                    cart.add_item(CartItem::from(record));
                    this.selection.set(BookingSelection::new());
                    this.slots.set(Vec::new());
                    this.errors.set(ValidationErrors::default());
                    this.submit_state.set(SubmitState::Succeeded);
                }
                Err(reason) => {
                    // selection stays untouched so the user can retry
                    log::warn!("booking hand-off failed: {}", reason);
                    this.banner
                        .set(Some("Something went wrong, please try again.".to_string()));
                    this.submit_state.set(SubmitState::Idle);
                }
            }
        });
    }

    /// Back from the confirmation to a blank form for the same
    /// offering.
    pub fn book_another(&self) {
        if self.submit_state.get_untracked() == SubmitState::Succeeded {
            self.submit_state.set(SubmitState::Idle);
        }
    }

    pub fn dismiss_banner(&self) {
        self.banner.set(None);
    }
}
