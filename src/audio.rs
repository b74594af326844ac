//! Music playback
//!
//! One track: started at session init, rewound and restarted on every
//! collision. Browsers may refuse playback before a user gesture; the
//! session only starts from the play button, so the first `play` call
//! already has one.

use web_sys::HtmlAudioElement;

/// The session music track
pub struct MusicTrack {
    element: Option<HtmlAudioElement>,
}

impl MusicTrack {
    /// Create a track for an audio URL. Failure disables audio rather than
    /// erroring.
    pub fn new(src: &str, volume: f32) -> Self {
        let element = HtmlAudioElement::new_with_src(src).ok();
        match &element {
            Some(el) => el.set_volume(volume.clamp(0.0, 1.0) as f64),
            None => log::warn!("Failed to create audio element - music disabled"),
        }
        Self { element }
    }

    /// Begin playback from the current position
    pub fn play(&self) {
        if let Some(el) = &self.element {
            let _ = el.play();
        }
    }

    /// Rewind to the start and play again
    pub fn restart(&self) {
        if let Some(el) = &self.element {
            el.set_current_time(0.0);
            let _ = el.play();
        }
    }

    pub fn set_volume(&self, volume: f32) {
        if let Some(el) = &self.element {
            el.set_volume(volume.clamp(0.0, 1.0) as f64);
        }
    }
}
