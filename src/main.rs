//! Conway's Game of Life on a toroidal grid, drawn with wgpu in a winit window.

mod app;
mod config;
mod gpu;
mod input;
mod simulation;

use winit::event_loop::EventLoop;

use app::App;

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)
}
