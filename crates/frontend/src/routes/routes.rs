use crate::domain::a001_employee::ui::create::EmployeeCreate;
use crate::system::auth::{RequireAuth, UserMenu};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn EmployeeCreatePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <EmployeeCreate />
        </RequireAuth>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p class="page__empty">"Page not found."</p> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <header class="app__header">
                <UserMenu />
            </header>
            <main class="app">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=|| view! { <Redirect path="/employee/create" /> } />
                    <Route path=path!("/employee/create") view=EmployeeCreatePage />
                </Routes>
            </main>
        </Router>
    }
}
