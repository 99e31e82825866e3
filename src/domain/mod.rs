//! Domain layer - value objects, aggregates and the generated document.

pub mod company;
pub mod foundation;
pub mod project;
pub mod user;
