use crate::error::RenderError;
use crate::geometry::{Point2, Vector2};
use crate::grid::Grid;
use crate::scalar::Scalar;

/// Camera state: where it stands, where it looks and how wide it sees.
///
/// `direction` and `plane` are only ever rotated together, so the field of
/// view set at construction never drifts.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pose<T> {
    pub position: Point2<T>,
    pub direction: Vector2<T>,
    pub plane: Vector2<T>,
}

/// Which movement keys are held for the current tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Controls {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl Controls {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.turn_left || self.turn_right)
    }
}

/// Movement rates, scaled by the frame time on every update.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Speeds<T> {
    /// squares per second
    pub movement: T,
    /// radians per second
    pub rotation: T,
}

impl<T: Scalar> Default for Speeds<T> {
    fn default() -> Self {
        Self {
            movement: T::from_f64(0.5),
            rotation: T::from_f64(0.3),
        }
    }
}

impl<T: Scalar> Pose<T> {
    pub fn new(position: Point2<T>, direction: Vector2<T>, plane: Vector2<T>) -> Self {
        Self {
            position,
            direction,
            plane,
        }
    }

    /// start of the demo world, looking west with a 0.66 plane
    pub fn classic() -> Self {
        Self::new(
            Point2::new(T::from_f64(22.0), T::from_f64(12.0)),
            Vector2::new(-T::one(), T::zero()),
            Vector2::new(T::zero(), T::from_f64(0.66)),
        )
    }

    /// full horizontal field of view in radians
    pub fn field_of_view(&self) -> T {
        let two = T::one() + T::one();
        two * (self.plane.length() / self.direction.length()).atan()
    }

    /// Move by `displacement`, one axis at a time.
    ///
    /// The X part and the Y part are each applied only if they land in a free
    /// cell, so a diagonal move into a wall slides along it. Returns whether
    /// the position changed.
    pub fn translate(
        &mut self,
        displacement: Vector2<T>,
        grid: &Grid,
    ) -> Result<bool, RenderError> {
        let mut moved = false;
        for axis in [displacement.x_projection(), displacement.y_projection()] {
            let candidate = self.position + axis;
            if grid.can_move(candidate)? {
                self.position = candidate;
                moved = true;
            }
        }

        Ok(moved)
    }

    /// turn counter-clockwise by `angle` radians
    pub fn rotate(&mut self, angle: T) {
        self.direction = self.direction.rotate(angle);
        self.plane = self.plane.rotate(angle);
    }

    /// Apply one tick of input, returning the new pose.
    pub fn update(
        mut self,
        controls: Controls,
        grid: &Grid,
        frame_time: T,
        speeds: Speeds<T>,
    ) -> Result<Self, RenderError> {
        let step = self.direction * (frame_time * speeds.movement);
        let turn = frame_time * speeds.rotation;

        if controls.forward {
            self.translate(step, grid)?;
        }
        if controls.backward {
            self.translate(-step, grid)?;
        }
        if controls.turn_left {
            self.rotate(turn);
        }
        if controls.turn_right {
            self.rotate(-turn);
        }

        Ok(self)
    }
}
