//! The simulation context: particle arena, constraints, drag state and input.

use crate::bounds::Bounds;
use crate::config::ClothConfig;
use crate::constraint::{DistanceConstraint, Resolution};
use crate::drag::DragController;
use crate::error::ClothResult;
use crate::float::Float;
use crate::grid::{build_grid, GridConfig};
use crate::input::{InputEvent, InputQueue};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::vec::Vec2;
use crate::view::{PointerIndicator, Segment};
use crate::viewport::ViewportChange;
use alloc::vec::Vec as AllocVec;
use tracing::{debug, info, trace};

/// A pinned cloth, stepped once per frame.
///
/// Input handlers only enqueue; [`Cloth::step`] applies pending input in
/// arrival order, then integrates, clamps and relaxes. A host that shares a
/// `Cloth` across threads must guard it with a single lock covering both.
pub struct Cloth<F: Float = f64> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    config: ClothConfig<F>,
    bounds: Bounds<F>,
    drag: DragController<F>,
    input: InputQueue<F>,
    rows: usize,
    cols: usize,
    frame: u64,
}

impl<F: Float> Cloth<F> {
    /// Build the grid described by `config` with its top-left particle at the origin.
    pub fn new(config: ClothConfig<F>, bounds: Bounds<F>) -> ClothResult<Self> {
        Self::with_origin(config, bounds, Vec2::zero())
    }

    /// Build the grid described by `config` with its top-left particle at `origin`.
    pub fn with_origin(config: ClothConfig<F>, bounds: Bounds<F>, origin: Vec2<F>) -> ClothResult<Self> {
        config.validate()?;
        let grid = build_grid(&GridConfig::from_cloth(&config, origin))?;
        info!(
            rows = grid.rows,
            cols = grid.cols,
            particles = grid.particles.len(),
            constraints = grid.constraints.len(),
            "cloth built"
        );
        Ok(Cloth {
            particles: grid.particles,
            constraints: grid.constraints,
            drag: DragController::new(config.pickup_radius),
            config,
            bounds,
            input: InputQueue::new(),
            rows: grid.rows,
            cols: grid.cols,
            frame: 0,
        })
    }

    pub fn on_pointer_down(&mut self, x: F, y: F) {
        self.push_event(InputEvent::PointerDown(Vec2::new(x, y)));
    }

    pub fn on_pointer_move(&mut self, x: F, y: F) {
        self.push_event(InputEvent::PointerMove(Vec2::new(x, y)));
    }

    pub fn on_pointer_up(&mut self) {
        self.push_event(InputEvent::PointerUp);
    }

    /// Queue a translation of every particle by `(dx, dy)`.
    pub fn on_resize(&mut self, dx: F, dy: F) {
        self.push_event(InputEvent::Translate(Vec2::new(dx, dy)));
    }

    /// Queue a new simulation area. Margins and friction carry over.
    pub fn set_bounds(&mut self, width: F, height: F) -> ClothResult<()> {
        let bounds = Bounds { width, height, ..self.bounds };
        bounds.validate()?;
        self.push_event(InputEvent::Resize(bounds));
        Ok(())
    }

    /// Queue both halves of a viewport change: new area, then re-centring.
    pub fn apply_viewport(&mut self, change: &ViewportChange<F>) -> ClothResult<()> {
        self.set_bounds(change.width, change.height)?;
        self.on_resize(change.delta.x, change.delta.y);
        Ok(())
    }

    /// Queue `event` for the next step. Invalid events are dropped here.
    pub fn push_event(&mut self, event: InputEvent<F>) {
        if !event.is_valid() {
            debug!(?event, "dropping invalid input");
            return;
        }
        self.input.push(event);
    }

    pub fn pending_events(&self) -> usize {
        self.input.len()
    }

    /// Apply one event now, bypassing the queue.
    pub fn apply_event(&mut self, event: InputEvent<F>) {
        if !event.is_valid() {
            debug!(?event, "ignoring invalid input");
            return;
        }
        match event {
            InputEvent::PointerDown(pos) => {
                self.drag.pointer_down(pos, &mut self.particles);
            }
            InputEvent::PointerMove(pos) => self.drag.pointer_move(pos, &mut self.particles),
            InputEvent::PointerUp => {
                self.drag.pointer_up(&mut self.particles);
            }
            InputEvent::Translate(delta) => self.translate(delta),
            InputEvent::Resize(bounds) => {
                debug!(width = bounds.width.to_f64(), height = bounds.height.to_f64(), "bounds changed");
                self.bounds = bounds;
            }
        }
    }

    /// Shift every particle, keeping velocities.
    pub fn translate(&mut self, delta: Vec2<F>) {
        debug!(dx = delta.x.to_f64(), dy = delta.y.to_f64(), "translating cloth");
        for p in self.particles.iter_mut() {
            p.offset(delta);
        }
    }

    pub fn step(&mut self) {
        self.step_observed(&mut NoOpStepObserver);
    }

    /// Advance one frame.
    ///
    /// Order: drain input, integrate and clamp every free particle, then run
    /// `iterations` relaxation passes over the unbroken constraints.
    pub fn step_observed<O: StepObserver<F>>(&mut self, observer: &mut O) {
        while let Some(event) = self.input.pop() {
            self.apply_event(event);
            observer.on_input(&event);
        }

        let gravity = self.config.gravity;
        let damping = self.config.damping;
        for p in self.particles.iter_mut().filter(|p| p.is_free()) {
            p.integrate(gravity, damping);
            self.bounds.clamp(p);
        }
        observer.on_integrate();

        let stiffness = self.config.stiffness;
        let break_ratio = self.config.break_ratio;
        for i in 0..self.config.iterations {
            for (index, c) in self.constraints.iter_mut().enumerate() {
                if c.broken {
                    continue;
                }
                if c.resolve(&mut self.particles, stiffness, break_ratio) == Resolution::Broke {
                    debug!(index, a = c.a, b = c.b, frame = self.frame, "constraint broke");
                    observer.on_constraint_broken(index);
                }
            }
            observer.on_relax_iteration(i);
        }

        self.frame += 1;
        trace!(frame = self.frame, "step complete");
        observer.on_step_complete();
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Every constraint as a line, broken ones included.
    pub fn segments(&self) -> impl Iterator<Item = Segment<F>> + '_ {
        self.constraints.iter().map(move |c| Segment {
            a: self.particles[c.a].pos,
            b: self.particles[c.b].pos,
            broken: c.broken,
        })
    }

    /// The lines a renderer should draw.
    pub fn active_segments(&self) -> impl Iterator<Item = Segment<F>> + '_ {
        self.segments().filter(|s| !s.broken)
    }

    pub fn pointer(&self) -> PointerIndicator<F> {
        PointerIndicator {
            position: self.drag.pointer(),
            radius: self.drag.radius(),
            active: self.drag.is_active(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn drag_targets(&self) -> &[usize] {
        self.drag.targets()
    }

    pub fn broken_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.broken).count()
    }

    /// Index of the particle at (row, col).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn bounds(&self) -> &Bounds<F> { &self.bounds }
    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    /// Frames stepped so far.
    pub fn frame(&self) -> u64 { self.frame }
}
