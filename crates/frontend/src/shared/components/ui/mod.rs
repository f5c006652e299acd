pub mod button;
pub mod field_error;
pub mod input;
pub mod textarea;

pub use button::Button;
pub use field_error::{error_class, FieldErrorIcon, FieldErrorText};
pub use input::Input;
pub use textarea::Textarea;
