use crate::routes::routes::AppRoutes;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
