//! Pointer drag: grab every free particle under the pointer and carry it.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Tracks the pointer and the particles it currently holds.
///
/// Held particles have their mass set to zero, which keeps integration and
/// their own side of every constraint off them until release.
#[derive(Clone, Debug)]
pub struct DragController<F: Float = f64> {
    state: DragState,
    pointer: Vec2<F>,
    radius: F,
    targets: AllocVec<usize>,
}

impl<F: Float> DragController<F> {
    pub fn new(radius: F) -> Self {
        DragController {
            state: DragState::Idle,
            pointer: Vec2::zero(),
            radius,
            targets: AllocVec::new(),
        }
    }

    /// Move the pointer, then capture every free particle within the pickup
    /// radius. Returns how many particles were captured by this call.
    pub fn pointer_down(&mut self, pointer: Vec2<F>, particles: &mut [Particle<F>]) -> usize {
        self.pointer_move(pointer, particles);

        let mut captured = 0;
        for (index, p) in particles.iter_mut().enumerate() {
            let offset = self.pointer - p.pos;
            if offset.length() <= self.radius && p.mass > F::zero() {
                p.drag_offset = offset;
                p.mass = F::zero();
                p.dragged = true;
                self.targets.push(index);
                captured += 1;
            }
        }
        if captured > 0 {
            self.state = DragState::Dragging;
            debug!(captured, x = self.pointer.x.to_f64(), y = self.pointer.y.to_f64(), "drag started");
        }
        captured
    }

    /// Move the pointer; held particles follow with zero velocity.
    pub fn pointer_move(&mut self, pointer: Vec2<F>, particles: &mut [Particle<F>]) {
        self.pointer = pointer;
        for &index in &self.targets {
            let p = &mut particles[index];
            p.reset_pos(pointer - p.drag_offset);
        }
    }

    /// Release everything held. Returns how many particles were released.
    pub fn pointer_up(&mut self, particles: &mut [Particle<F>]) -> usize {
        self.state = DragState::Idle;
        let released = self.targets.len();
        for index in self.targets.drain(..) {
            let p = &mut particles[index];
            p.mass = F::one();
            p.dragged = false;
        }
        if released > 0 {
            debug!(released, "drag ended");
        }
        released
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == DragState::Dragging
    }

    pub fn pointer(&self) -> Vec2<F> {
        self.pointer
    }

    pub fn radius(&self) -> F {
        self.radius
    }

    /// Indices of the particles currently held.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }
}
