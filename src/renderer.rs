use crate::dda::cast_column;
use crate::error::RenderError;
use crate::grid::Grid;
use crate::pose::Pose;
use crate::scalar::Scalar;
use crate::stripe::{Stripe, Surface};
use crate::surface::DrawCommand;
use rayon::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    /// cast columns on the rayon pool; output is identical either way
    pub parallel: bool,
}

impl RenderConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            parallel: false,
        }
    }

    pub fn parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// Frame driver: one ray and one stripe per screen column.
#[derive(Clone, Debug)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        log::debug!(
            "renderer {}x{} (parallel: {})",
            config.width,
            config.height,
            config.parallel
        );
        Self { config }
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// reject a camera standing inside a wall or off the map
    pub fn check_pose<T: Scalar>(&self, pose: &Pose<T>, grid: &Grid) -> Result<(), RenderError> {
        let cell = pose.position.to_location();
        match grid.get(cell)? {
            0 => Ok(()),
            kind => Err(RenderError::CameraInWall { cell, kind }),
        }
    }

    pub fn cast_stripe<T: Scalar>(
        &self,
        pose: &Pose<T>,
        column: i32,
        grid: &Grid,
    ) -> Result<Stripe, RenderError> {
        let hit = cast_column(pose, column, self.config.height, grid)?;
        Ok(Stripe::from_hit(&hit, column, self.config.height))
    }

    /// Every column's stripe, left to right.
    pub fn cast_frame<T: Scalar>(
        &self,
        pose: &Pose<T>,
        grid: &Grid,
    ) -> Result<Vec<Stripe>, RenderError> {
        self.check_pose(pose, grid)?;

        if self.config.parallel {
            (0..self.config.width)
                .into_par_iter()
                .map(|column| self.cast_stripe(pose, column, grid))
                .collect()
        } else {
            (0..self.config.width)
                .map(|column| self.cast_stripe(pose, column, grid))
                .collect()
        }
    }

    /// Draw one frame onto `surface`.
    ///
    /// Each column issues exactly one `set_color` followed by one
    /// `draw_vertical_segment`, in column order. Nothing is drawn unless every
    /// column's ray found a wall.
    pub fn render_frame<T: Scalar>(
        &self,
        pose: &Pose<T>,
        grid: &Grid,
        mut surface: impl Surface,
    ) -> anyhow::Result<()> {
        log::trace!("rendering frame at {:?}", pose.position);

        // cast everything first so a failed frame leaves the surface untouched
        for stripe in self.cast_frame(pose, grid)? {
            stripe.draw(&mut surface)?;
        }

        Ok(())
    }

    /// the calls one frame makes, as data
    pub fn draw_calls<T: Scalar>(
        &self,
        pose: &Pose<T>,
        grid: &Grid,
    ) -> anyhow::Result<Vec<DrawCommand>> {
        let mut calls = Vec::with_capacity(2 * self.config.width.max(0) as usize);
        self.render_frame(pose, grid, &mut calls)?;
        Ok(calls)
    }
}
