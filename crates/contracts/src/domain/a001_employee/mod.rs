pub mod aggregate;
pub mod metadata;
pub mod response;
pub mod validation;

pub use aggregate::{BloodGroup, EmployeeDraft, EmployeeRecord, Gender, ImageMeta};
pub use response::{ErrorBody, StoreStatus};
pub use validation::validate_employee;
