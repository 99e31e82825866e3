//! Shared value objects used across the domain.

mod department;
mod errors;
mod grade;
mod ids;
mod level;
mod status;

pub use department::Department;
pub use errors::ValidationError;
pub use grade::Grade;
pub use ids::{ProjectId, UserId};
pub use level::OrgLevel;
pub use status::ProjectStatus;
