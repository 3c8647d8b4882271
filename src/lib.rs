//! Grid raycaster core.
//!
//! Given a [`Pose`] and a [`Grid`] of walls, [`Renderer::render_frame`] casts
//! one ray per screen column with a DDA walk and draws a shaded vertical
//! stripe for each onto any [`Surface`]. The core owns no window, timer or
//! input; hosts drive it once per tick and feed input through [`Pose::update`].

pub mod dda;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pose;
pub mod renderer;
pub mod scalar;
pub mod stripe;
pub mod surface;

pub use dda::{cast_column, cast_ray, RayHit, Side, Walk, WalkStep};
pub use error::{MapError, RenderError};
pub use geometry::{GridLocation, Point2, Vector2};
pub use grid::Grid;
pub use pose::{Controls, Pose, Speeds};
pub use renderer::{RenderConfig, Renderer};
pub use scalar::Scalar;
pub use stripe::{Stripe, Surface};
pub use surface::{DrawCommand, FrameBuffer};
