use game::Game;
use raycast::{Grid, RenderConfig};
use sdl2::event::Event;
use std::time::{Duration, Instant};

mod game;

// helper trait to convert strings into std::error types
trait StringToAnyhow<T> {
    fn ah(self) -> anyhow::Result<T>;
}

impl<T> StringToAnyhow<T> for Result<T, String> {
    fn ah(self) -> anyhow::Result<T> {
        self.map_err(|err| anyhow::anyhow!("{err}"))
    }
}

// dimensions of screen
const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

const TARGET_FPS: u64 = 60;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("RAYCAST_LOG");

    let grid = match std::env::args().nth(1) {
        Some(path) => Grid::load(path)?,
        None => {
            log::info!("no map given, using the classic map");
            Grid::classic()?
        }
    };

    // sdl boilerplate
    log::info!("initializing sdl2");
    let sdl_ctx = sdl2::init().ah()?;
    log::info!("initializing video");
    let video = sdl_ctx.video().ah()?;

    log::info!("initializing window");
    let mut window = video
        .window("raycast", WIDTH, HEIGHT)
        .position_centered()
        .build()?;
    window.set_resizable(false);
    log::info!("creating canvas");
    let canvas = window.into_canvas().build()?;
    log::info!("pumping events");
    let mut events = sdl_ctx.event_pump().ah()?;

    log::info!("initializing game state");
    let config = RenderConfig::new(WIDTH as i32, HEIGHT as i32).parallel(true);
    let mut game = Game::new(canvas, grid, config)?;

    let delta = Duration::from_millis(1_000 / TARGET_FPS);

    'main_loop: loop {
        let prev = Instant::now();

        // handle events
        for ev in events.poll_iter() {
            match ev {
                Event::Quit { .. } => break 'main_loop,
                Event::KeyDown {
                    keycode: Some(k), ..
                } => game.key_down(k),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => game.key_up(k),
                _ => {}
            }
        }

        game.update()?;
        if let Err(err) = game.draw() {
            log::error!("error while drawing: {err}");
            Err(err)?;
        }

        let diff = prev.elapsed();
        if diff < delta {
            std::thread::sleep(delta - diff);
        }
    }

    Ok(())
}
