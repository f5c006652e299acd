use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// True until the stored session has been checked
    pub resolving: bool,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        resolving: true,
        ..Default::default()
    });

    // Restore the session from localStorage on mount
    spawn_local(async move {
        let Some(access_token) = storage::get_access_token() else {
            log::debug!("No stored session");
            set_auth_state.set(AuthState::default());
            return;
        };

        match api::get_current_user(&access_token).await {
            Ok(user_info) => {
                log::debug!("Session resolved for {}", user_info.username);
                set_auth_state.set(AuthState {
                    access_token: Some(access_token),
                    user_info: Some(user_info),
                    resolving: false,
                });
            }
            Err(e) => {
                log::warn!("Stored session rejected: {}", e);
                storage::clear_tokens();
                set_auth_state.set(AuthState::default());
            }
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("{}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
