use super::field_error::{error_class, FieldErrorIcon, FieldErrorText};
use leptos::prelude::*;

/// Textarea component with label and inline error support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element (also the `name` attribute)
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Validation message for this field
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <div class="form__control">
                <textarea
                    id=textarea_id
                    name=textarea_id
                    class=move || format!("form__textarea {}", error_class(has_error()))
                    rows=textarea_rows
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                ></textarea>
                <FieldErrorIcon error=error />
            </div>
            <FieldErrorText error=error />
        </div>
    }
}
