//! HUD text and menu visibility
//!
//! The page owns the markup; this module only updates the two live text
//! lines and hides the start menu. Missing elements degrade silently.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Handles to the score and high-score text lines
pub struct Hud {
    score: Element,
    high_score: Element,
}

impl Hud {
    pub fn new(document: &Document) -> Option<Self> {
        Some(Self {
            score: document.get_element_by_id("score")?,
            high_score: document.get_element_by_id("highscore")?,
        })
    }

    /// Refresh both lines for the current frame
    pub fn update(&self, score: u64, high_score: u64) {
        self.score.set_text_content(Some(&format!("Score: {score}")));
        self.high_score
            .set_text_content(Some(&format!("Highscore: {high_score}")));
    }
}

/// Hide the start menu once the session begins
pub fn hide_menu(document: &Document) {
    let wrapper = document.query_selector(".menu-wrapper").ok().flatten();
    if let Some(el) = wrapper {
        if let Ok(el) = el.dyn_into::<HtmlElement>() {
            let _ = el.style().set_property("display", "none");
        }
    }
}
