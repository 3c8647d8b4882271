use crate::stripe::Surface;

/// A recorded surface call.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DrawCommand {
    SetColor(u32),
    VerticalSegment {
        column: i32,
        row_start: i32,
        row_end: i32,
    },
}

/// Records every call in order; frames can then be compared exactly.
impl Surface for Vec<DrawCommand> {
    fn set_color(&mut self, color: u32) -> anyhow::Result<()> {
        self.push(DrawCommand::SetColor(color));
        Ok(())
    }

    fn draw_vertical_segment(
        &mut self,
        column: i32,
        row_start: i32,
        row_end: i32,
    ) -> anyhow::Result<()> {
        self.push(DrawCommand::VerticalSegment {
            column,
            row_start,
            row_end,
        });
        Ok(())
    }
}

/// In-memory `0xRRGGBB` pixel buffer, row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    color: u32,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            color: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

impl Surface for FrameBuffer {
    fn set_color(&mut self, color: u32) -> anyhow::Result<()> {
        self.color = color;
        Ok(())
    }

    fn draw_vertical_segment(
        &mut self,
        column: i32,
        row_start: i32,
        row_end: i32,
    ) -> anyhow::Result<()> {
        let x = usize::try_from(column)
            .ok()
            .filter(|x| *x < self.width)
            .ok_or_else(|| anyhow::anyhow!("column {column} outside {}px buffer", self.width))?;
        if row_start < 0 || row_end < row_start || row_end as usize >= self.height {
            anyhow::bail!(
                "rows {row_start}..={row_end} outside {}px buffer",
                self.height
            );
        }

        for y in row_start as usize..=row_end as usize {
            self.pixels[y * self.width + x] = self.color;
        }

        Ok(())
    }
}
