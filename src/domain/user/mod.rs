//! User aggregate and identity value object.

mod identity;
#[allow(clippy::module_inception)]
mod user;

pub use identity::Identity;
pub use user::User;
