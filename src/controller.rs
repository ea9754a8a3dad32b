//! Page wiring: finds the interactive controls once the markup is ready and attaches
//! the click handlers. Each handler runs independently; failures are logged and the
//! page is left as it was.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement, window};

use crate::config::PageConfig;
use crate::error::{PageError, js_message};
use crate::likes::{self, LikeAction};
use crate::ports::apply;
use crate::web::{WebDom, WebHttp, document_cookie, elements};
use crate::{comments, log, play, rating};

pub fn init_page_with(config: PageConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = Rc::new(config);

    if doc.ready_state() != "loading" {
        return wire(&doc, &config);
    }
    let ready_doc = doc.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        if let Err(err) = wire(&ready_doc, &config) {
            log::error("init", &js_message(&err));
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire(doc: &Document, config: &Rc<PageConfig>) -> Result<(), JsValue> {
    wire_likes(doc, config)?;
    wire_play(doc, config)?;
    wire_comments(doc)?;
    wire_rating(doc, config)?;
    log::debug("page controls wired");
    Ok(())
}

fn on_click(
    el: &Element,
    handler: impl FnMut(web_sys::MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_likes(doc: &Document, config: &Rc<PageConfig>) -> Result<(), JsValue> {
    for button in elements(doc.query_selector_all(".like-btn, .dislike-btn")?) {
        let doc = doc.clone();
        let config = config.clone();
        let control = button.clone();
        on_click(&button, move |_evt| {
            let game_id = control.get_attribute("data-game-id");
            let action = control.get_attribute("data-action").unwrap_or_default();
            let cookies = document_cookie(&doc);
            let dom = WebDom::new(doc.clone()).with_activated(control.clone());
            let config = config.clone();
            spawn_local(async move {
                let result = match (game_id, action.parse::<LikeAction>()) {
                    (Some(id), Ok(action)) => {
                        likes::toggle_like(&WebHttp, &cookies, &config, &id, action).await
                    }
                    (None, _) => Err(PageError::MissingGameId),
                    (_, Err(err)) => Err(err),
                };
                match result {
                    Ok(mutations) => apply(&dom, &mutations),
                    Err(err) => log::error("toggle-like", &err),
                }
            });
        })?;
    }
    Ok(())
}

fn wire_play(doc: &Document, config: &Rc<PageConfig>) -> Result<(), JsValue> {
    let (Some(button), Some(_)) = (
        doc.get_element_by_id(play::START_BUTTON_ID),
        doc.get_element_by_id(play::FRAME_ID),
    ) else {
        return Ok(());
    };
    let doc = doc.clone();
    let config = config.clone();
    on_click(&button, move |_evt| {
        let dom = WebDom::new(doc.clone());
        apply(&dom, &play::reveal_game());

        let path = doc.location().and_then(|l| l.pathname().ok()).unwrap_or_default();
        let Some(game_id) = play::game_id_from_path(&path).map(str::to_owned) else {
            log::error("increment-play", &PageError::MissingGameId);
            return;
        };
        let cookies = document_cookie(&doc);
        let config = config.clone();
        spawn_local(async move {
            match play::increment_play(&WebHttp, &cookies, &config, &game_id).await {
                Ok(mutations) => apply(&dom, &mutations),
                Err(err) => log::error("increment-play", &err),
            }
        });
    })
}

fn wire_comments(doc: &Document) -> Result<(), JsValue> {
    for (selector, editing) in [(".btn-edit-comment", true), (".cancel-edit", false)] {
        for button in elements(doc.query_selector_all(selector)?) {
            let doc = doc.clone();
            let control = button.clone();
            on_click(&button, move |_evt| {
                if let Some(id) = control.get_attribute("data-comment-id") {
                    comments::toggle(&WebDom::new(doc.clone()), &id, editing);
                }
            })?;
        }
    }
    Ok(())
}

fn star_row(container: &Element) -> Vec<Element> {
    container
        .query_selector_all(".star-label")
        .map(elements)
        .unwrap_or_default()
}

fn wire_rating(doc: &Document, config: &Rc<PageConfig>) -> Result<(), JsValue> {
    for label in elements(doc.query_selector_all(".star-label")?) {
        let doc = doc.clone();
        let config = config.clone();
        let clicked = label.clone();
        on_click(&label, move |_evt| {
            let Some(container) = clicked.closest(".rating-stars").ok().flatten() else {
                return;
            };
            let stars = star_row(&container);
            if let Some(idx) = stars.iter().position(|s| *s == clicked) {
                let dom = WebDom::new(doc.clone()).with_stars(stars);
                rating::select_star(&dom, idx, &config.active_class);
            }
        })?;
    }

    let checked = doc
        .query_selector("input[name=\"rating\"]:checked")?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let (Some(input), Some(container)) = (checked, doc.query_selector(".rating-stars")?) {
        let dom = WebDom::new(doc.clone()).with_stars(star_row(&container));
        rating::init_rating(&dom, &input.value(), &config.active_class);
    }
    Ok(())
}
