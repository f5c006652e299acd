//! Combobox: text input paired with a filtered option list

use crate::shared::components::ui::{error_class, FieldErrorIcon, FieldErrorText};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches};
use contracts::domain::common::Choice;
use leptos::prelude::*;

#[component]
pub fn Combobox(
    /// Label text (optional, insurance slots have none)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Complete option list; filtering happens here
    #[prop(into)]
    options: Signal<Vec<Choice>>,
    /// Current filter query
    #[prop(into)]
    query: Signal<String>,
    /// Currently selected option
    #[prop(into)]
    selected: Signal<Option<Choice>>,
    /// Called on every keystroke in the input
    on_query: Callback<String>,
    /// Called when an option is picked
    on_select: Callback<Choice>,
    /// Renders a remove button next to the input when set
    #[prop(optional)]
    on_remove: Option<Callback<()>>,
    /// Validation message for this field
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let input_id = move || id.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    let filtered = Memo::new(move |_| options.with(|all| query.with(|q| filter_list(all, q))));

    // While the list is open the input shows the query, otherwise the
    // selected option's name.
    let display_value = move || {
        if open.get() {
            query.get()
        } else {
            selected.get().map(|c| c.name).unwrap_or_default()
        }
    };

    let is_selected = move |choice: &Choice| {
        selected.with(|s| s.as_ref().map(|c| c.key == choice.key).unwrap_or(false))
    };

    view! {
        <div class="combobox">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="combobox__control">
                <input
                    id=input_id
                    class=move || format!("form__input combobox__input {}", error_class(has_error()))
                    type="text"
                    role="combobox"
                    autocomplete="off"
                    aria-expanded=move || open.get().to_string()
                    prop:value=display_value
                    on:input=move |ev| {
                        open.set(true);
                        on_query.run(event_target_value(&ev));
                    }
                    on:blur=move |_| open.set(false)
                />
                <button
                    type="button"
                    class="combobox__toggle"
                    tabindex="-1"
                    on:mousedown=move |ev| {
                        ev.prevent_default();
                        open.update(|o| *o = !*o);
                    }
                >
                    {icon("selector")}
                </button>
                {on_remove.map(|remove| view! {
                    <button
                        type="button"
                        class="combobox__remove"
                        aria-label="Remove"
                        on:click=move |_| remove.run(())
                    >
                        {icon("minus")}
                    </button>
                })}
                <FieldErrorIcon error=error />

                <Show when=move || open.get() && filtered.with(|f| !f.is_empty())>
                    <ul class="combobox__options" role="listbox">
                        <For
                            each=move || filtered.get()
                            key=|choice| choice.key.clone()
                            children=move |choice| {
                                let picked = choice.clone();
                                let name = choice.name.clone();
                                let selected_now = {
                                    let choice = choice.clone();
                                    move || is_selected(&choice)
                                };
                                let selected_mark = selected_now.clone();
                                view! {
                                    <li
                                        class=move || {
                                            if selected_now() {
                                                "combobox__option combobox__option--selected"
                                            } else {
                                                "combobox__option"
                                            }
                                        }
                                        role="option"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            on_select.run(picked.clone());
                                            open.set(false);
                                        }
                                    >
                                        <span class="combobox__option-name">
                                            {move || highlight_matches(&name, &query.get())}
                                        </span>
                                        <Show when=selected_mark.clone()>
                                            <span class="combobox__check">{icon("check")}</span>
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
            <FieldErrorText error=error />
        </div>
    }
}
