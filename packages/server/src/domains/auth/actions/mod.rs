//! Auth domain actions

mod login;

pub use login::{login, LoginOutcome};
