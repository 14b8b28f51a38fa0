//! Inline validation/submission messages for forms.

use leptos::prelude::*;

use crate::state::submit::SubmitState;

/// Message for one field, shown only while that field has an error.
#[component]
pub fn FieldError(submit: RwSignal<SubmitState>, field: &'static str) -> impl IntoView {
    move || {
        submit
            .with(|s| s.field_error(field))
            .map(|message| view! { <p class="form__field-error">{message}</p> })
    }
}

/// Backend-provided (or fallback) error for the whole form.
#[component]
pub fn FormError(submit: RwSignal<SubmitState>) -> impl IntoView {
    move || {
        submit
            .with(|s| s.error().map(str::to_owned))
            .map(|message| view! { <p class="form__error" role="alert">{message}</p> })
    }
}
