use crate::domain::constants::SPEED_CURVE;

/// Converts a fractional ticks-per-frame rate into whole ticks per frame.
///
/// Each frame runs `floor(queued)` ticks and keeps the remainder; the rate
/// is added after the ticks are taken. Starts paused with one tick queued.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScheduler {
    ticks_per_frame: f32,
    queued: f32,
    playing: bool,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self {
            ticks_per_frame: 1.0,
            queued: 1.0,
            playing: false,
        }
    }
}

impl FrameScheduler {
    pub fn new(ticks_per_frame: f32) -> Self {
        let mut scheduler = Self::default();
        scheduler.set_ticks_per_frame(ticks_per_frame);
        scheduler
    }

    pub fn ticks_per_frame(&self) -> f32 {
        self.ticks_per_frame
    }

    /// Negative or non-finite rates are clamped to zero
    pub fn set_ticks_per_frame(&mut self, rate: f32) {
        self.ticks_per_frame = if rate.is_finite() { rate.max(0.0) } else { 0.0 };
    }

    /// Set the rate from the UI speed slider position
    pub fn set_slider(&mut self, slider: f32) {
        self.set_ticks_per_frame(speed_from_slider(slider));
    }

    pub fn slider(&self) -> f32 {
        slider_from_speed(self.ticks_per_frame)
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Whole ticks due this frame
    pub fn take_ticks(&mut self) -> u32 {
        let n = self.queued.floor().max(0.0);
        self.queued -= n;
        self.queued += self.ticks_per_frame;
        n as u32
    }
}

/// Slider position → ticks per frame: 3x+1 above zero, e^(3x) below
pub fn speed_from_slider(x: f32) -> f32 {
    if x >= 0.0 {
        SPEED_CURVE * x + 1.0
    } else {
        (SPEED_CURVE * x).exp()
    }
}

pub fn slider_from_speed(speed: f32) -> f32 {
    if speed >= 1.0 {
        (speed - 1.0) / SPEED_CURVE
    } else {
        speed.ln() / SPEED_CURVE
    }
}
