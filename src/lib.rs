//! Real-time Verlet cloth.
//!
//! `drape` simulates a rectangular mass-spring grid hanging from its top row:
//! position-based (Verlet) integration under gravity, iterative relaxation of
//! breakable distance constraints, a floor and two walls, and pointer drag.
//! Rendering, windowing and the frame scheduler belong to the host; the crate
//! exposes the state they need.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, air damping, mass-scaled gravity
//! - **Tearing**: constraints stretched past `break_ratio` rest lengths break for good
//! - **Drag**: grab every free particle under the pointer and carry it
//! - **Deterministic input**: events queue up and apply at the start of the next step
//! - **Observable**: monitor steps and tears via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use drape::{Bounds, Cloth, ClothConfig};
//!
//! let config: ClothConfig<f64> = ClothConfig::new().with_grid(10, 10);
//! let mut cloth = Cloth::new(config, Bounds::new(800.0, 600.0)?)?;
//! cloth.on_pointer_down(30.0, 15.0);
//! cloth.on_pointer_move(60.0, 40.0);
//! cloth.step();
//! let lines = cloth.active_segments().count();
//! assert_eq!(lines, cloth.constraint_count());
//! # Ok::<(), drape::ClothError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod bounds;
pub mod grid;
pub mod drag;
pub mod input;
pub mod viewport;
pub mod cloth;
pub mod view;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{DistanceConstraint, Resolution};
pub use bounds::Bounds;
pub use grid::{build_grid, Grid, GridConfig};
pub use drag::{DragController, DragState};
pub use input::{InputEvent, InputQueue};
pub use viewport::{Viewport, ViewportChange};
pub use cloth::Cloth;
pub use view::{PointerIndicator, Segment};
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::{ClothError, ClothResult};
