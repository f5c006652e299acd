use crate::shared::icons::icon;
use leptos::prelude::*;

/// Red banner listing every error message
#[component]
pub fn ErrorBanner(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.is_empty())>
            <div class="alert alert--error" role="alert">
                <div class="alert__icon">{icon("x-circle")}</div>
                <div class="alert__body">
                    <h3 class="alert__title">
                        {move || format!("There were {} errors", errors.with(|e| e.len()))}
                    </h3>
                    <ul class="alert__list">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}

/// Green banner with a dismiss button
#[component]
pub fn SuccessBanner(
    /// Message to show; the banner is hidden when absent
    #[prop(into)]
    message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="alert alert--success" role="status">
                    <div class="alert__icon">{icon("check-circle")}</div>
                    <p class="alert__message">{text}</p>
                    <button
                        type="button"
                        class="alert__dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        <span class="sr-only">"Dismiss"</span>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
