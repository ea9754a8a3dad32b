//! Star rating widget.
//!
//! Every update recomputes the full row: stars up to and including the selected
//! position are active, the rest are not. No selection state is kept between clicks.

use crate::ports::{DomPort, Mutation, Target, apply};

/// Active flag for each of `len` stars when the star at `clicked` is selected.
pub fn star_states(len: usize, clicked: usize) -> Vec<bool> {
    (0..len).map(|i| i <= clicked).collect()
}

fn row_mutations(states: &[bool], class: &str) -> Vec<Mutation> {
    states
        .iter()
        .enumerate()
        .map(|(i, &on)| Mutation::SetClass {
            target: Target::Star(i),
            class: class.to_string(),
            on,
        })
        .collect()
}

/// Handle a click on the star at `clicked`.
pub fn select_star(dom: &impl DomPort, clicked: usize, class: &str) {
    let states = star_states(dom.star_count(), clicked);
    apply(dom, &row_mutations(&states, class));
}

/// Leading integer of a rating input value; `" 4"`, `"4"` and `"4.5"` all give 4.
pub fn parse_rating(value: &str) -> Option<usize> {
    let s = value.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Show a previously chosen rating: the first `value` stars become active.
/// Stars beyond it are left as the markup rendered them.
pub fn init_rating(dom: &impl DomPort, value: &str, class: &str) {
    let Some(rating) = parse_rating(value) else {
        return;
    };
    let count = rating.min(dom.star_count());
    let mutations: Vec<Mutation> = (0..count)
        .map(|i| Mutation::AddClass {
            target: Target::Star(i),
            class: class.to_string(),
        })
        .collect();
    apply(dom, &mutations);
}
