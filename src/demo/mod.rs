//! Example consumer: a user lookup whose result is an explicit `Option`

pub mod handler;
pub mod user;

pub use handler::{HttpResponse, handle_get_user, respond_json};
pub use user::{User, UserDirectory};
