use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{GRID_HEIGHT, GRID_WIDTH, TICK_INTERVAL, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::gpu::{GpuContext, GridBuffers, RenderPipeline};
use crate::input::{self, PointerState};
use crate::simulation::{Command, Grid, SimulationState};

const TITLE: &str = "Toroidal Life";

/// Application state: the simulation plus the window and GPU resources
/// that present it.
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    grid_buffers: Option<GridBuffers>,
    render_pipeline: Option<RenderPipeline>,
    /// Moved through each transition; only `None` inside one
    state: Option<SimulationState>,
    rng: StdRng,
    pointer: PointerState,
    clock: TickClock,
}

impl App {
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let grid = Grid::random(GRID_WIDTH, GRID_HEIGHT, &mut rng);

        Self {
            window: None,
            gpu: None,
            grid_buffers: None,
            render_pipeline: None,
            state: Some(SimulationState::new(grid)),
            rng,
            pointer: PointerState::default(),
            clock: TickClock::new(TICK_INTERVAL, Instant::now()),
        }
    }

    fn transition(&mut self, f: impl FnOnce(SimulationState, &mut StdRng) -> SimulationState) {
        if let Some(state) = self.state.take() {
            self.state = Some(f(state, &mut self.rng));
        }
    }

    /// One driver step: pointer edit, then generation advance, then redraw.
    fn tick(&mut self) {
        if let (Some(state), Some(gpu)) = (self.state.as_mut(), self.gpu.as_ref()) {
            let target = self
                .pointer
                .paint_target(gpu.size(), state.grid.width(), state.grid.height());
            if let Some((col, row, desired)) = target {
                if state.paint_cell(col, row, desired) {
                    log::debug!("Painted ({}, {}) {:?}", col, row, desired);
                }
            }
        }

        self.transition(|state, _| state.advance());

        if let Some(state) = &self.state {
            if !state.paused {
                log::debug!(
                    "Generation {}: {} alive",
                    state.generation,
                    state.grid.population()
                );
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn render(&mut self) {
        let (Some(gpu), Some(buffers), Some(pipeline), Some(state)) = (
            self.gpu.as_ref(),
            self.grid_buffers.as_ref(),
            self.render_pipeline.as_ref(),
            self.state.as_ref(),
        ) else {
            return;
        };

        buffers.upload_cells(&gpu.queue, &state.grid);
        let size = gpu.size();
        buffers.update_render_params(&gpu.queue, (size.width, size.height), state.show_overlay);

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        pipeline.draw(&mut encoder, &view);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if let Some(window) = &self.window {
            window.set_title(&window_title(state));
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        let Some(command) = input::command_for_key(key_code) else {
            return;
        };

        self.transition(|state, rng| state.apply(command, rng));

        if let Some(state) = &self.state {
            match command {
                Command::TogglePause => {
                    log::info!("{}", if state.paused { "Paused" } else { "Running" });
                }
                Command::ResetRandom => {
                    log::info!("Grid randomized: {} alive", state.grid.population());
                }
                Command::ResetBlank => log::info!("Grid cleared"),
                Command::ToggleOverlay => {
                    log::info!("Overlay: {}", if state.show_overlay { "ON" } else { "OFF" });
                }
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(state) = &self.state else {
            return;
        };

        log::info!("Initializing Toroidal Life...");
        log::info!("Grid size: {}x{}", state.grid.width(), state.grid.height());

        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        log::info!("Creating GPU context...");
        let gpu = match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("GPU initialization failed: {} ({:?})", e, e);
                event_loop.exit();
                return;
            }
        };

        let grid_buffers = GridBuffers::new(&gpu.device, &gpu.queue, &state.grid);
        let render_pipeline = RenderPipeline::new(&gpu.device, gpu.format(), &grid_buffers);

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Space: Pause/resume");
        log::info!("  R: Reset grid randomly");
        log::info!("  B: Reset grid blank");
        log::info!("  G: Toggle grid lines");
        log::info!("  Left click: Paint alive cell (while paused)");
        log::info!("  Right click: Paint dead cell (while paused)");
        log::info!("  Escape: Quit");

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.grid_buffers = Some(grid_buffers);
        self.render_pipeline = Some(render_pipeline);
        self.clock = TickClock::new(TICK_INTERVAL, Instant::now());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() && !event.repeat {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.pointer.moved(position),
            WindowEvent::CursorLeft { .. } => self.pointer.cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => self.pointer.button(button, state),
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    gpu.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.render(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.poll(Instant::now()) {
            self.tick();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }
}

fn window_title(state: &SimulationState) -> String {
    let paused = if state.paused { " [paused]" } else { "" };
    format!(
        "{} - Generation {} - {} alive{}",
        TITLE,
        state.generation,
        state.grid.population(),
        paused
    )
}

/// Fixed-rate tick schedule for the driver loop
struct TickClock {
    interval: Duration,
    next: Instant,
}

impl TickClock {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    /// Returns true once per elapsed interval. Missed ticks are dropped
    /// rather than replayed in a burst.
    fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }

    fn deadline(&self) -> Instant {
        self.next
    }
}
