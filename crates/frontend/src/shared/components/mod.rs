pub mod alert;
pub mod breadcrumb;
pub mod combobox;
pub mod ui;

pub use alert::{ErrorBanner, SuccessBanner};
pub use breadcrumb::{Breadcrumb, Crumb};
pub use combobox::Combobox;
