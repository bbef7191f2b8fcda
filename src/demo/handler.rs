//! Lookup handler that turns an optional record into an HTTP-style response

use super::user::UserDirectory;
use crate::option::Option;
use log::{debug, error, info};
use serde::Serialize;
use std::fmt;

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{StatusCode:{} Body:{}}}", self.status_code, self.body)
    }
}

/// Render a found record as JSON, or `404` with `<noun> not found` as the body
pub fn respond_json<T>(found: Option<T>, noun: &str) -> HttpResponse
where
    T: Serialize + Default,
{
    let (record, ok) = found.unwrap();
    if !ok {
        return HttpResponse::new(STATUS_NOT_FOUND, format!("{} not found", noun));
    }

    match serde_json::to_string(&record) {
        Ok(body) => HttpResponse::new(STATUS_OK, body),
        Err(e) => {
            error!("Failed to serialize {}: {}", noun, e);
            HttpResponse::new(STATUS_INTERNAL_ERROR, format!("marshalling {}: {}", noun, e))
        }
    }
}

pub fn handle_get_user(directory: &UserDirectory, id: &str) -> HttpResponse {
    let user = directory.get_user(id);
    if user.is_none() {
        info!("User not found: {}", id);
    } else {
        debug!("User found: {}", id);
    }
    respond_json(user, "user")
}
