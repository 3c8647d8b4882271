use crate::dda::{RayHit, Side};
use crate::scalar::Scalar;

pub const RED: u32 = 0xFF0000;
pub const GREEN: u32 = 0x00FF00;
pub const BLUE: u32 = 0x0000FF;
pub const YELLOW: u32 = 0xFFFF00;

/// Anything that can draw one-pixel-wide vertical lines.
pub trait Surface {
    /// packed `0xRRGGBB`
    fn set_color(&mut self, color: u32) -> anyhow::Result<()>;

    /// inclusive on both ends
    fn draw_vertical_segment(
        &mut self,
        column: i32,
        row_start: i32,
        row_end: i32,
    ) -> anyhow::Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_color(&mut self, color: u32) -> anyhow::Result<()> {
        (**self).set_color(color)
    }

    fn draw_vertical_segment(
        &mut self,
        column: i32,
        row_start: i32,
        row_end: i32,
    ) -> anyhow::Result<()> {
        (**self).draw_vertical_segment(column, row_start, row_end)
    }
}

/// base colour of a wall kind
pub fn palette(wall_kind: u8) -> u32 {
    match wall_kind {
        1 => RED,
        2 | 3 => GREEN,
        4 => BLUE,
        _ => YELLOW,
    }
}

/// Colour of a hit; north and south faces are darker.
///
/// The packed value is halved as a whole integer, so channels bleed into each
/// other's low bit (0xFF0000 becomes 0x7F8000). Output depends on this exact
/// value.
pub fn shade(wall_kind: u8, side: Side) -> u32 {
    let color = palette(wall_kind);
    match side {
        Side::X => color,
        Side::Y => color / 2,
    }
}

/// One screen column's worth of wall.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Stripe {
    pub column: i32,
    pub draw_start: i32,
    pub draw_end: i32,
    pub color: u32,
}

impl Stripe {
    pub fn from_hit<T: Scalar>(hit: &RayHit<T>, column: i32, screen_height: i32) -> Self {
        let line_height = line_height(hit.distance, screen_height);
        // i64 so a clamped i32::MAX height cannot overflow
        let half_line = i64::from(line_height) / 2;
        let half_screen = i64::from(screen_height) / 2;
        let draw_start = (-half_line + half_screen).max(0);
        let draw_end = (half_line + half_screen).min(i64::from(screen_height) - 1);

        Self {
            column,
            draw_start: draw_start as i32,
            draw_end: draw_end as i32,
            color: shade(hit.wall_kind, hit.side),
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) -> anyhow::Result<()> {
        surface.set_color(self.color)?;
        surface.draw_vertical_segment(self.column, self.draw_start, self.draw_end)
    }
}

/// Projected wall height in rows.
///
/// A distance of zero (the camera flush against a wall) or anything that is
/// not a positive number clamps to `i32::MAX`, i.e. a full-height stripe.
pub fn line_height<T: Scalar>(distance: T, screen_height: i32) -> i32 {
    if distance > T::zero() {
        (T::from_i32(screen_height) / distance).trunc_i32()
    } else {
        log::trace!("clamping wall distance {distance:?} to full height");
        i32::MAX
    }
}
