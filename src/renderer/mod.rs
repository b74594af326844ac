//! Canvas 2D rendering
//!
//! Reads the simulation state and draws one frame: background fill,
//! obstacle rectangles, player sprite. Never mutates game state.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::BACKGROUND;
use crate::sim::GameState;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sprite: HtmlImageElement,
}

impl CanvasRenderer {
    /// Bind to a canvas and start loading the player sprite. The sprite
    /// draws as soon as the image decodes; frames before that simply skip
    /// the blit.
    pub fn new(canvas: HtmlCanvasElement, sprite_src: &str) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let sprite = HtmlImageElement::new()?;
        sprite.set_src(sprite_src);

        Ok(Self {
            canvas,
            ctx,
            sprite,
        })
    }

    /// Match the drawing surface to the viewport
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Draw one frame: background, obstacles, then the player on top
    pub fn render(&self, state: &GameState) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        self.ctx.set_fill_style_str(&BACKGROUND.css());
        self.ctx.fill_rect(0.0, 0.0, width, height);

        for obstacle in &state.obstacles.obstacles {
            self.ctx.set_fill_style_str(&obstacle.color.css());
            self.ctx.fill_rect(
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
        }

        let player = &state.player;
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.sprite,
            player.pos.x as f64,
            player.pos.y as f64,
            player.size.x as f64,
            player.size.y as f64,
        );
    }
}
