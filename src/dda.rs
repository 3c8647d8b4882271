//! Column raycasting by grid traversal (DDA).
//!
//! A ray is walked one grid line at a time. For each axis we keep
//! `side_dist`, the ray length up to the next line crossed on that axis, and
//! `delta_dist`, the ray length between two consecutive lines on that axis.
//! Stepping always takes the axis whose next line is closer, so every cell the
//! ray touches is visited in order, with no trigonometry and no square roots.
//!
//! ```text
//!        │     │     │
//!   ─────┼─────┼─────●──   ● = crossings taken in order
//!        │     │   ╱ │
//!   ─────┼─────●─╱───┼──
//!        │   ╱ │     │
//!        │ ●   │     │
//!        ╱     │     │
//! ```
//!
//! `delta_dist` is `1 / |ray_dir|` per axis rather than the true length; only
//! the ratio between the two components matters for stepping, and the same
//! scaling makes the final distance come out perpendicular to the camera
//! plane, which keeps walls free of fisheye bulge.

use crate::error::RenderError;
use crate::geometry::{GridLocation, Point2, Vector2};
use crate::grid::Grid;
use crate::pose::Pose;
use crate::scalar::Scalar;

/// Which kind of grid line a ray crossed into its last cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    /// a vertical line (constant x), i.e. an east or west face
    X,
    /// a horizontal line (constant y), i.e. a north or south face
    Y,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayHit<T> {
    /// distance to the wall measured along the camera's forward axis
    pub distance: T,
    pub side: Side,
    pub wall_kind: u8,
    pub cell: GridLocation,
}

/// One grid line crossing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WalkStep<T> {
    pub cell: GridLocation,
    pub side: Side,
    /// side distances after the step
    pub side_dist: Vector2<T>,
}

/// Endless iterator over the cells a ray enters.
#[derive(Clone, Debug)]
pub struct Walk<T> {
    cell: GridLocation,
    side_dist: Vector2<T>,
    delta_dist: Vector2<T>,
    step: Vector2<T>,
}

impl<T: Scalar> Walk<T> {
    pub fn new(position: Point2<T>, ray_dir: Vector2<T>) -> Self {
        let cell = position.to_location();
        let corner = cell.to_vector::<T>();
        let pos = position.to_vector();
        let delta_dist = ray_dir.abs().recip();

        // per axis: walk backwards to the cell's near line, or forwards to its far line
        let (step_x, side_x) = if ray_dir.x < T::zero() {
            (-T::one(), (pos.x - corner.x) * delta_dist.x)
        } else {
            (T::one(), (corner.x + T::one() - pos.x) * delta_dist.x)
        };
        let (step_y, side_y) = if ray_dir.y < T::zero() {
            (-T::one(), (pos.y - corner.y) * delta_dist.y)
        } else {
            (T::one(), (corner.y + T::one() - pos.y) * delta_dist.y)
        };

        Self {
            cell,
            side_dist: Vector2::new(side_x, side_y),
            delta_dist,
            step: Vector2::new(step_x, step_y),
        }
    }

    pub fn cell(&self) -> GridLocation {
        self.cell
    }

    pub fn side_dist(&self) -> Vector2<T> {
        self.side_dist
    }

    pub fn delta_dist(&self) -> Vector2<T> {
        self.delta_dist
    }

    /// Cross the next grid line.
    pub fn advance(&mut self) -> WalkStep<T> {
        // ties (and NaN) go to Y
        let side = if self.side_dist.x < self.side_dist.y {
            self.side_dist += self.delta_dist.x_projection();
            self.cell = self.cell.step(self.step.x_projection());
            Side::X
        } else {
            self.side_dist += self.delta_dist.y_projection();
            self.cell = self.cell.step(self.step.y_projection());
            Side::Y
        };

        WalkStep {
            cell: self.cell,
            side,
            side_dist: self.side_dist,
        }
    }
}

impl<T: Scalar> Iterator for Walk<T> {
    type Item = WalkStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}

/// Horizontal camera-space coordinate of `column`, `-1` at the left edge.
///
/// Normalised by the screen height rather than the width; on non-square
/// screens this widens the sweep past `+1` on the right, and the renderer's
/// output depends on it.
pub fn camera_x<T: Scalar>(column: i32, screen_height: i32) -> T {
    T::from_i32(2 * column) / T::from_i32(screen_height) - T::one()
}

pub fn ray_direction<T: Scalar>(pose: &Pose<T>, column: i32, screen_height: i32) -> Vector2<T> {
    pose.direction + pose.plane * camera_x(column, screen_height)
}

/// Walk from `position` along `ray_dir` until a wall is entered.
///
/// Fails with [`RenderError::OutOfBounds`] if the walk leaves the grid first.
pub fn cast_ray<T: Scalar>(
    position: Point2<T>,
    ray_dir: Vector2<T>,
    grid: &Grid,
) -> Result<RayHit<T>, RenderError> {
    let mut walk = Walk::new(position, ray_dir);
    let delta_dist = walk.delta_dist();

    loop {
        let WalkStep {
            cell,
            side,
            side_dist,
        } = walk.advance();

        let wall_kind = grid.get(cell)?;
        if wall_kind > 0 {
            // back off the step taken into the wall
            let distance = match side {
                Side::X => side_dist.x - delta_dist.x,
                Side::Y => side_dist.y - delta_dist.y,
            };

            return Ok(RayHit {
                distance,
                side,
                wall_kind,
                cell,
            });
        }
    }
}

/// Cast the ray for one screen column.
pub fn cast_column<T: Scalar>(
    pose: &Pose<T>,
    column: i32,
    screen_height: i32,
    grid: &Grid,
) -> Result<RayHit<T>, RenderError> {
    cast_ray(pose.position, ray_direction(pose, column, screen_height), grid)
}
