use leptos::prelude::*;

use super::context::use_auth;

/// Renders its children only once a signed-in user is resolved.
///
/// Nothing is shown while the session is being checked; a short notice is
/// shown when there is no session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.user_info.is_some())
            fallback=move || {
                auth_state.with(|s| !s.resolving).then(|| view! {
                    <div class="auth-required">"Not authenticated. Please login."</div>
                })
            }
        >
            {children()}
        </Show>
    }
}
