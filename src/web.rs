//! Browser implementations of the ports on top of `web-sys`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Headers, HtmlDocument, HtmlElement, NodeList, Request, RequestCredentials,
    RequestInit, Response,
};

use crate::error::PageError;
use crate::ports::{Display, DomPort, HttpPort, Target};
use crate::request::FormPost;

/// The live document, optionally scoped to the clicked control and the star row it
/// belongs to.
pub struct WebDom {
    document: Document,
    activated: Option<Element>,
    stars: Vec<Element>,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            activated: None,
            stars: Vec::new(),
        }
    }

    pub fn with_activated(mut self, element: Element) -> Self {
        self.activated = Some(element);
        self
    }

    pub fn with_stars(mut self, stars: Vec<Element>) -> Self {
        self.stars = stars;
        self
    }

    fn resolve(&self, target: &Target) -> Option<Element> {
        match target {
            Target::Activated => self.activated.clone(),
            Target::Id(id) => self.document.get_element_by_id(id),
            // An unparsable selector resolves to nothing rather than failing.
            Target::Selector(sel) => self.document.query_selector(sel).ok().flatten(),
            Target::Descendant { parent, child } => self
                .document
                .query_selector(parent)
                .ok()
                .flatten()?
                .query_selector(child)
                .ok()
                .flatten(),
            Target::Star(idx) => self.stars.get(*idx).cloned(),
        }
    }
}

impl DomPort for WebDom {
    fn exists(&self, target: &Target) -> bool {
        self.resolve(target).is_some()
    }

    fn set_text(&self, target: &Target, text: &str) {
        if let Some(el) = self.resolve(target) {
            el.set_text_content(Some(text));
        }
    }

    fn add_class(&self, target: &Target, class: &str) {
        if let Some(el) = self.resolve(target) {
            el.class_list().add_1(class).ok();
        }
    }

    fn remove_class(&self, target: &Target, class: &str) {
        if let Some(el) = self.resolve(target) {
            el.class_list().remove_1(class).ok();
        }
    }

    fn remove_class_after(&self, target: &Target, class: &str, delay_ms: u32) {
        if let Some(el) = self.resolve(target) {
            let class = class.to_string();
            Timeout::new(delay_ms, move || {
                el.class_list().remove_1(&class).ok();
            })
            .forget();
        }
    }

    fn set_display(&self, target: &Target, display: Display) {
        if let Some(el) = self.resolve(target).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
            el.style().set_property("display", display.as_css()).ok();
        }
    }

    fn star_count(&self) -> usize {
        self.stars.len()
    }
}

/// `fetch` with same-origin credentials.
pub struct WebHttp;

impl HttpPort for WebHttp {
    async fn post_form(&self, request: &FormPost) -> Result<String, PageError> {
        let win = web_sys::window().ok_or_else(|| PageError::Dom("no window".into()))?;

        let headers = Headers::new().map_err(|e| PageError::from_js(&e))?;
        for (name, value) in request.headers() {
            headers.set(name, value).map_err(|e| PageError::from_js(&e))?;
        }
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_credentials(RequestCredentials::SameOrigin);
        init.set_headers(&headers);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.url, &init)
            .map_err(|e| PageError::from_js(&e))?;
        let resp: Response = JsFuture::from(win.fetch_with_request(&req))
            .await
            .map_err(|e| PageError::from_js(&e))?
            .dyn_into()
            .map_err(|e| PageError::from_js(&e))?;
        if !resp.ok() {
            return Err(PageError::Status(resp.status()));
        }
        let text = JsFuture::from(resp.text().map_err(|e| PageError::from_js(&e))?)
            .await
            .map_err(|e| PageError::from_js(&e))?;
        text.as_string()
            .ok_or_else(|| PageError::Transport("response body is not text".into()))
    }
}

/// Current `document.cookie`, empty when unavailable.
pub fn document_cookie(document: &Document) -> String {
    document
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
