//! Animation signals forwarded by the controller.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnimationSignal {
    /// Smoothed speed used for blend trees
    Speed,
    Grounded,
    Jump,
    FreeFall,
    /// Input magnitude, 1.0 for digital input
    MotionSpeed,
}

impl AnimationSignal {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationSignal::Speed => "Speed",
            AnimationSignal::Grounded => "Grounded",
            AnimationSignal::Jump => "Jump",
            AnimationSignal::FreeFall => "FreeFall",
            AnimationSignal::MotionSpeed => "MotionSpeed",
        }
    }
}

/// Receiver of named animation parameters.
pub trait AnimationSink {
    fn set_bool(&mut self, signal: AnimationSignal, value: bool);
    fn set_float(&mut self, signal: AnimationSignal, value: f32);
}

/// Optional sink handle. Signals are dropped when no sink is attached.
pub struct Animator<'a> {
    sink: Option<&'a mut dyn AnimationSink>,
}

impl<'a> Animator<'a> {
    pub fn new(sink: Option<&'a mut dyn AnimationSink>) -> Self {
        Self { sink }
    }

    pub fn detached() -> Self {
        Self { sink: None }
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    pub fn set_bool(&mut self, signal: AnimationSignal, value: bool) {
        if let Some(sink) = self.sink.as_mut() {
            sink.set_bool(signal, value);
        }
    }

    pub fn set_float(&mut self, signal: AnimationSignal, value: f32) {
        if let Some(sink) = self.sink.as_mut() {
            sink.set_float(signal, value);
        }
    }
}
