pub mod api;
pub mod context;
pub mod guard;
pub mod storage;
pub mod user_menu;

pub use context::{do_logout, use_auth, AuthProvider, AuthState};
pub use guard::RequireAuth;
pub use user_menu::UserMenu;
