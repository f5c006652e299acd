use crate::shared::icons::icon;
use leptos::prelude::*;

/// Inline error line shown under an invalid input
#[component]
pub fn FieldErrorText(
    /// Error message; nothing is rendered when absent
    #[prop(into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! { <p class="form__error">{message}"."</p> }
        })
    }
}

/// Exclamation mark placed inside an invalid input
#[component]
pub fn FieldErrorIcon(#[prop(into)] error: MaybeProp<String>) -> impl IntoView {
    move || {
        error.get().map(|_| {
            view! { <div class="form__error-icon">{icon("exclamation-circle")}</div> }
        })
    }
}

/// CSS modifier for inputs in error state
pub fn error_class(has_error: bool) -> &'static str {
    if has_error {
        "form__input--error"
    } else {
        ""
    }
}
