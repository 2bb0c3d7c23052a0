//! Command implementations

mod activities;
mod assign;
mod auth;
mod auto_assign;
mod gear;
mod logout;
mod rules;
mod session;
mod status;

pub use activities::list_activities;
pub use assign::assign;
pub use auth::auth;
pub use auto_assign::{AutoAssignArgs, auto_assign};
pub use gear::list_gear;
pub use logout::logout;
pub use rules::rules;
pub use status::status;
