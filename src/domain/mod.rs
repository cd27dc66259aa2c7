mod email;
mod first_name;
mod last_name;
mod submission;
mod validation;

pub use email::Email;
pub use first_name::FirstName;
pub use last_name::LastName;
pub use submission::ContactSubmission;
pub use validation::ValidationError;
