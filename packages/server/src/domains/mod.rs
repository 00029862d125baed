// Business domains
pub mod address;
pub mod auth;
pub mod diagnostics;
pub mod member;
pub mod messaging;
pub mod reports;
