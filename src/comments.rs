//! Inline comment edit-mode toggling. Local visibility only, no requests.

use crate::ports::{DomPort, Display, Mutation, Target, apply};

fn text_id(comment_id: &str) -> Target {
    Target::Id(format!("comment-text-{comment_id}"))
}

fn form_id(comment_id: &str) -> Target {
    Target::Id(format!("edit-form-{comment_id}"))
}

fn visibility(comment_id: &str, editing: bool) -> Vec<Mutation> {
    let (text, form) = if editing {
        (Display::None, Display::Block)
    } else {
        (Display::Block, Display::None)
    };
    vec![
        Mutation::SetDisplay {
            target: text_id(comment_id),
            display: text,
        },
        Mutation::SetDisplay {
            target: form_id(comment_id),
            display: form,
        },
    ]
}

/// Switch `comment_id` into or out of edit mode. Does nothing unless both the text
/// and the form element exist; returns whether anything changed.
pub fn toggle(dom: &impl DomPort, comment_id: &str, editing: bool) -> bool {
    if !dom.exists(&text_id(comment_id)) || !dom.exists(&form_id(comment_id)) {
        return false;
    }
    apply(dom, &visibility(comment_id, editing));
    true
}

pub fn edit_comment(dom: &impl DomPort, comment_id: &str) -> bool {
    toggle(dom, comment_id, true)
}

pub fn cancel_edit(dom: &impl DomPort, comment_id: &str) -> bool {
    toggle(dom, comment_id, false)
}
