//! Project aggregate and classification types.

#[allow(clippy::module_inception)]
mod project;
mod project_type;

pub use project::Project;
pub use project_type::ProjectType;
