use crate::StringToAnyhow;
use raycast::{Controls, Grid, Pose, RenderConfig, Renderer, Speeds, Surface};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::collections::HashSet;
use std::time::{Duration, Instant};

// fps readings before this are start-up noise and never count as the minimum
const WARMUP: Duration = Duration::from_secs(3);

/// `Surface` over an SDL canvas
struct CanvasSurface<'a>(&'a mut Canvas<Window>);

impl Surface for CanvasSurface<'_> {
    fn set_color(&mut self, color: u32) -> anyhow::Result<()> {
        self.0.set_draw_color(Color::RGB(
            (color >> 16) as u8,
            (color >> 8) as u8,
            color as u8,
        ));
        Ok(())
    }

    fn draw_vertical_segment(
        &mut self,
        column: i32,
        row_start: i32,
        row_end: i32,
    ) -> anyhow::Result<()> {
        self.0
            .draw_line(Point::new(column, row_start), Point::new(column, row_end))
            .ah()
    }
}

/// frames per second over one second windows
struct FpsMeter {
    started: Instant,
    window_start: Instant,
    frames: u32,
    fps: f64,
    min_fps: Option<f64>,
}

impl FpsMeter {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            window_start: now,
            frames: 0,
            fps: 0.,
            min_fps: None,
        }
    }

    /// count a frame; returns true once per second when the reading changes
    fn frame(&mut self) -> bool {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed < Duration::from_secs(1) {
            return false;
        }

        self.fps = f64::from(self.frames) / elapsed.as_secs_f64();
        if self.started.elapsed() > WARMUP {
            self.min_fps = Some(self.min_fps.map_or(self.fps, |min| min.min(self.fps)));
        }
        self.window_start = Instant::now();
        self.frames = 0;

        true
    }
}

pub(crate) struct Game {
    grid: Grid,
    pose: Pose<f64>,
    speeds: Speeds<f64>,
    renderer: Renderer,
    keys: HashSet<Keycode>,
    meter: FpsMeter,
    last_tick: Instant,
    pub canvas: Canvas<Window>,
}

impl Game {
    /// initialize game, refusing maps that would let rays escape
    pub fn new(canvas: Canvas<Window>, grid: Grid, config: RenderConfig) -> anyhow::Result<Self> {
        if !grid.is_enclosed() {
            anyhow::bail!("map is not enclosed by walls");
        }

        let pose = Pose::classic();
        let renderer = Renderer::new(config);
        renderer.check_pose(&pose, &grid)?;

        Ok(Self {
            grid,
            pose,
            speeds: Speeds::default(),
            renderer,
            keys: HashSet::new(),
            meter: FpsMeter::new(),
            last_tick: Instant::now(),
            canvas,
        })
    }

    pub fn key_down(&mut self, key: Keycode) {
        self.keys.insert(key);
    }

    pub fn key_up(&mut self, key: Keycode) {
        self.keys.remove(&key);
    }

    fn controls(&self) -> Controls {
        Controls {
            forward: self.keys.contains(&Keycode::Up) || self.keys.contains(&Keycode::W),
            backward: self.keys.contains(&Keycode::Down) || self.keys.contains(&Keycode::S),
            turn_left: self.keys.contains(&Keycode::Left) || self.keys.contains(&Keycode::A),
            turn_right: self.keys.contains(&Keycode::Right) || self.keys.contains(&Keycode::D),
        }
    }

    /// advance the pose by the time since the previous tick
    pub fn update(&mut self) -> anyhow::Result<()> {
        let now = Instant::now();
        let frame_time = (now - self.last_tick).as_secs_f64();
        self.last_tick = now;

        let controls = self.controls();
        if !controls.is_idle() {
            self.pose = self
                .pose
                .update(controls, &self.grid, frame_time, self.speeds)?;
        }

        Ok(())
    }

    pub fn draw(&mut self) -> anyhow::Result<()> {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();
        self.renderer
            .render_frame(&self.pose, &self.grid, CanvasSurface(&mut self.canvas))?;
        self.canvas.present();

        if self.meter.frame() {
            let title = match self.meter.min_fps {
                Some(min) => format!("raycast - {:.1} fps (min {:.1})", self.meter.fps, min),
                None => format!("raycast - {:.1} fps", self.meter.fps),
            };
            log::debug!("{title}");
            self.canvas.window_mut().set_title(&title)?;
        }

        Ok(())
    }
}
