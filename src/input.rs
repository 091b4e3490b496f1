//! Host input, queued until the next frame.

use crate::bounds::Bounds;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::collections::VecDeque;

/// One input from the host, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<F: Float = f64> {
    PointerDown(Vec2<F>),
    PointerMove(Vec2<F>),
    PointerUp,
    /// Translate every particle (current and previous position) by this delta.
    Translate(Vec2<F>),
    /// Replace the simulation area.
    Resize(Bounds<F>),
}

impl<F: Float> InputEvent<F> {
    /// `false` for non-finite coordinates and for areas that fail
    /// [`Bounds::validate`]. The cloth drops such events unapplied.
    pub fn is_valid(&self) -> bool {
        match self {
            InputEvent::PointerDown(pos) | InputEvent::PointerMove(pos) => pos.is_finite(),
            InputEvent::PointerUp => true,
            InputEvent::Translate(delta) => delta.is_finite(),
            InputEvent::Resize(bounds) => bounds.validate().is_ok(),
        }
    }
}

/// FIFO of pending input, drained at the start of each step.
#[derive(Clone, Debug, Default)]
pub struct InputQueue<F: Float = f64> {
    events: VecDeque<InputEvent<F>>,
}

impl<F: Float> InputQueue<F> {
    pub fn new() -> Self {
        InputQueue { events: VecDeque::new() }
    }

    pub fn push(&mut self, event: InputEvent<F>) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<InputEvent<F>> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
