use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{do_logout, use_auth};
use crate::shared::components::ui::Button;

/// Signed-in user name with a logout button
#[component]
pub fn UserMenu() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let display_name = move || {
        auth_state.with(|s| s.user_info.as_ref().map(|u| u.display_name().to_string()))
    };

    view! {
        <Show when=move || display_name().is_some()>
            <div class="user-menu">
                <span class="user-menu__name">{display_name}</span>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| spawn_local(do_logout(set_auth_state)))
                >
                    "Logout"
                </Button>
            </div>
        </Show>
    }
}
