use super::field_error::{error_class, FieldErrorIcon, FieldErrorText};
use leptos::prelude::*;

/// Input component with label and inline error support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// inputmode hint for on-screen keyboards ("numeric" for masked inputs)
    #[prop(optional, into)]
    input_mode: MaybeProp<String>,
    /// ID for the input element (also the `name` attribute)
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Validation message for this field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_m = move || input_mode.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__control">
                <input
                    id=input_id
                    name=input_id
                    class=move || format!("form__input {} {}", error_class(has_error()), additional_class())
                    type=input_t
                    inputmode=input_m
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    aria-invalid=move || has_error().to_string()
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                <FieldErrorIcon error=error />
            </div>
            <FieldErrorText error=error />
        </div>
    }
}
