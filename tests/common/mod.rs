// In-memory ports shared by the native integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use games_page::PageError;
use games_page::ports::{Display, DomPort, HttpPort, Target};
use games_page::request::FormPost;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FakeElement {
    pub text: String,
    pub classes: BTreeSet<String>,
    pub display: Option<Display>,
}

/// Elements keyed by the `Target` that addresses them. Timers are queued and only
/// run on `fire_timers`.
#[derive(Default)]
pub struct FakeDom {
    elements: RefCell<HashMap<Target, FakeElement>>,
    stars: RefCell<Vec<FakeElement>>,
    timers: RefCell<Vec<(Target, String, u32)>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, target: Target) -> Self {
        self.with_text(target, "")
    }

    pub fn with_text(self, target: Target, text: &str) -> Self {
        self.elements.borrow_mut().insert(
            target,
            FakeElement {
                text: text.to_string(),
                ..FakeElement::default()
            },
        );
        self
    }

    pub fn with_stars(self, count: usize) -> Self {
        *self.stars.borrow_mut() = vec![FakeElement::default(); count];
        self
    }

    pub fn element(&self, target: &Target) -> Option<FakeElement> {
        match target {
            Target::Star(i) => self.stars.borrow().get(*i).cloned(),
            _ => self.elements.borrow().get(target).cloned(),
        }
    }

    pub fn text(&self, target: &Target) -> String {
        self.element(target).map(|e| e.text).unwrap_or_default()
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.element(target).is_some_and(|e| e.classes.contains(class))
    }

    pub fn display(&self, target: &Target) -> Option<Display> {
        self.element(target).and_then(|e| e.display)
    }

    pub fn active_stars(&self) -> Vec<bool> {
        self.stars
            .borrow()
            .iter()
            .map(|s| s.classes.contains("active"))
            .collect()
    }

    pub fn pending_timers(&self) -> Vec<(Target, String, u32)> {
        self.timers.borrow().clone()
    }

    pub fn fire_timers(&self) {
        let due: Vec<_> = self.timers.borrow_mut().drain(..).collect();
        for (target, class, _) in due {
            self.remove_class(&target, &class);
        }
    }

    fn edit(&self, target: &Target, f: impl FnOnce(&mut FakeElement)) {
        match target {
            Target::Star(i) => {
                if let Some(el) = self.stars.borrow_mut().get_mut(*i) {
                    f(el);
                }
            }
            _ => {
                if let Some(el) = self.elements.borrow_mut().get_mut(target) {
                    f(el);
                }
            }
        }
    }
}

impl DomPort for FakeDom {
    fn exists(&self, target: &Target) -> bool {
        self.element(target).is_some()
    }

    fn set_text(&self, target: &Target, text: &str) {
        self.edit(target, |el| el.text = text.to_string());
    }

    fn add_class(&self, target: &Target, class: &str) {
        self.edit(target, |el| {
            el.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, target: &Target, class: &str) {
        self.edit(target, |el| {
            el.classes.remove(class);
        });
    }

    fn remove_class_after(&self, target: &Target, class: &str, delay_ms: u32) {
        if self.exists(target) {
            self.timers
                .borrow_mut()
                .push((target.clone(), class.to_string(), delay_ms));
        }
    }

    fn set_display(&self, target: &Target, display: Display) {
        self.edit(target, |el| el.display = Some(display));
    }

    fn star_count(&self) -> usize {
        self.stars.borrow().len()
    }
}

/// Records every request and answers all of them with the same scripted reply.
pub struct FakeHttp {
    pub requests: RefCell<Vec<FormPost>>,
    reply: Result<String, String>,
}

impl FakeHttp {
    pub fn replying(body: &str) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            reply: Ok(body.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            reply: Err(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<FormPost> {
        self.requests.borrow().clone()
    }
}

impl HttpPort for FakeHttp {
    async fn post_form(&self, request: &FormPost) -> Result<String, PageError> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone().map_err(PageError::Transport)
    }
}

pub fn like_count(game_id: &str) -> Target {
    games_page::likes::count_target("like", game_id)
}

pub fn dislike_count(game_id: &str) -> Target {
    games_page::likes::count_target("dislike", game_id)
}
