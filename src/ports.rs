//! Capabilities the handlers need from their environment.
//!
//! Handlers never touch `web_sys` directly: they talk HTTP through [`HttpPort`] and
//! resolve to a list of [`Mutation`]s that [`apply`] replays against a [`DomPort`].
//! The browser implementations live in [`crate::web`]; tests supply in-memory ones.

use crate::error::PageError;
use crate::request::FormPost;

/// Element addressing understood by every [`DomPort`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The control whose click started the handler.
    Activated,
    Id(String),
    /// First element matching a CSS selector.
    Selector(String),
    /// First `child` match inside the first `parent` match.
    Descendant { parent: String, child: String },
    /// N-th `.star-label` of the rating widget in scope.
    Star(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    SetText { target: Target, text: String },
    AddClass { target: Target, class: String },
    /// Remove `class` once `delay_ms` has elapsed.
    RemoveClassAfter { target: Target, class: String, delay_ms: u32 },
    SetClass { target: Target, class: String, on: bool },
    SetDisplay { target: Target, display: Display },
}

pub trait DomPort {
    fn exists(&self, target: &Target) -> bool;
    fn set_text(&self, target: &Target, text: &str);
    fn add_class(&self, target: &Target, class: &str);
    fn remove_class(&self, target: &Target, class: &str);
    fn remove_class_after(&self, target: &Target, class: &str, delay_ms: u32);
    fn set_display(&self, target: &Target, display: Display);
    /// Number of star labels in the rating widget in scope.
    fn star_count(&self) -> usize;
}

// Only ever driven from the single-threaded wasm event loop, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait HttpPort {
    /// Send `request` and return the response body.
    async fn post_form(&self, request: &FormPost) -> Result<String, PageError>;
}

/// Replay `mutations` in order. Targets that do not resolve are skipped.
pub fn apply(dom: &impl DomPort, mutations: &[Mutation]) {
    for m in mutations {
        match m {
            Mutation::SetText { target, text } => dom.set_text(target, text),
            Mutation::AddClass { target, class } => dom.add_class(target, class),
            Mutation::RemoveClassAfter {
                target,
                class,
                delay_ms,
            } => dom.remove_class_after(target, class, *delay_ms),
            Mutation::SetClass { target, class, on } => {
                if *on {
                    dom.add_class(target, class)
                } else {
                    dom.remove_class(target, class)
                }
            }
            Mutation::SetDisplay { target, display } => dom.set_display(target, *display),
        }
    }
}
