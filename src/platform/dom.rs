//! DOM glue: score display and the message overlay

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::ui::Overlay;

const SCORE_ID: &str = "score";
const CONTAINER_ID: &str = "game-container";
const OVERLAY_SELECTOR: &str = ".game-message";
const OVERLAY_CLASS: &str = "game-message";
const BUTTON_ID: &str = "start-btn";

/// Handles to the page elements the game writes to
pub struct Hud {
    document: Document,
    score: Option<Element>,
    overlay: HtmlElement,
    title: Element,
    body: Element,
    button: Element,
}

impl Hud {
    /// Find the overlay (creating it inside `#game-container` if the page
    /// lacks one) and build its title/body/button children.
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let score = document.get_element_by_id(SCORE_ID);
        if score.is_none() {
            log::warn!("No #{} element, score will not be shown", SCORE_ID);
        }

        let overlay = match document.query_selector(OVERLAY_SELECTOR)? {
            Some(el) => el,
            None => {
                let el = document.create_element("div")?;
                el.set_class_name(OVERLAY_CLASS);
                let parent = document
                    .get_element_by_id(CONTAINER_ID)
                    .or_else(|| document.body().map(Into::into))
                    .ok_or_else(|| JsValue::from_str("nowhere to place the overlay"))?;
                parent.append_child(&el)?;
                el
            }
        };
        let overlay: HtmlElement = overlay.dyn_into()?;
        overlay.set_inner_html("");

        let title = document.create_element("h2")?;
        let body = document.create_element("div")?;
        let button = document.create_element("button")?;
        button.set_id(BUTTON_ID);
        overlay.append_child(&title)?;
        overlay.append_child(&body)?;
        overlay.append_child(&button)?;

        Ok(Self {
            document: document.clone(),
            score,
            overlay,
            title,
            body,
            button,
        })
    }

    /// The overlay's start/restart button
    pub fn button(&self) -> &Element {
        &self.button
    }

    pub fn set_score(&self, score: u64) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    /// Fill and show the overlay, or hide it
    pub fn show(&self, overlay: &Overlay) -> Result<(), JsValue> {
        if !overlay.is_visible() {
            return self.overlay.style().set_property("display", "none");
        }

        self.title.set_text_content(Some(overlay.title()));
        self.body.set_inner_html("");
        for line in overlay.lines() {
            let p = self.document.create_element("p")?;
            p.set_text_content(Some(&line));
            self.body.append_child(&p)?;
        }
        self.button.set_text_content(Some(overlay.button_label()));
        self.overlay.style().set_property("display", "block")
    }
}
