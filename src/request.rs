//! Authenticated form-encoded POST requests.

use crate::cookie::get_cookie;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A same-origin POST as the page sends it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPost {
    pub url: String,
    pub body: Option<String>,
    /// `None` when the CSRF cookie is absent; sent as the literal `null`.
    pub csrf_token: Option<String>,
}

impl FormPost {
    pub fn new(url: impl Into<String>, body: Option<String>) -> Self {
        Self {
            url: url.into(),
            body,
            csrf_token: None,
        }
    }

    /// Attach the CSRF token read from `cookie_name` in `cookies`.
    pub fn authenticated(mut self, cookies: &str, cookie_name: &str) -> Self {
        self.csrf_token = get_cookie(cookies, cookie_name);
        self
    }

    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Content-Type", FORM_CONTENT_TYPE),
            ("X-Requested-With", "XMLHttpRequest"),
            ("X-CSRFToken", self.csrf_token.as_deref().unwrap_or("null")),
        ]
    }
}
