use std::time::Duration;

use crate::traits::{Button, Clock, Indicator};

/// One player-facing color unit: a light, a tone, and a button.
///
/// Variants are configuration (backing pins, tone frequency baked into the
/// indicator), not distinct types. Channel order within the set matters only
/// for the attract animation direction and the judge's scan order.
pub struct Channel {
    name: String,
    indicator: Box<dyn Indicator>,
    button: Box<dyn Button>,
    lit: bool,
}

impl Channel {
    pub fn new(
        name: impl Into<String>,
        indicator: Box<dyn Indicator>,
        button: Box<dyn Button>,
    ) -> Self {
        Self {
            name: name.into(),
            indicator,
            button,
            lit: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_pressed(&self) -> bool {
        self.button.is_pressed()
    }

    pub fn set_light(&mut self, on: bool) {
        self.lit = on;
        self.indicator.set_light(on);
    }

    pub fn set_tone(&mut self, on: bool) {
        self.indicator.set_tone(on);
    }

    /// Light and tone together, the standard feedback pairing.
    pub fn set_feedback(&mut self, on: bool) {
        self.set_light(on);
        self.set_tone(on);
    }

    pub fn toggle_light(&mut self) {
        self.set_light(!self.lit);
    }

    /// Present this channel for `duration`: feedback on, hold, feedback off.
    /// Blocking; a show always completes once started.
    pub fn show(&mut self, clock: &dyn Clock, duration: Duration) {
        self.set_feedback(true);
        clock.sleep(duration);
        self.set_feedback(false);
    }
}
