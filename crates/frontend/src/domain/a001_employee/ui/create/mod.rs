//! Employee create page
//!
//! MVVM layout:
//! - model.rs: API functions (reference lookups, multipart store)
//! - state.rs: form state and its reducer
//! - insurance.rs: insurance slot editor
//! - view_model.rs: ViewModel with commands
//! - view.rs: Leptos components

mod insurance;
mod model;
mod state;
mod view;
mod view_model;

pub use view::EmployeeCreate;
pub use view_model::EmployeeCreateViewModel;
