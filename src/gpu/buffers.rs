use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::config::{ALIVE_COLOR, DEAD_COLOR, OVERLAY_COLOR, OVERLAY_LINE_WIDTH};
use crate::simulation::Grid;

/// Storage buffer holding the current generation plus the render uniforms.
///
/// The automaton runs on the CPU, so a single cell buffer is rewritten each
/// tick instead of ping-ponging between two.
pub struct GridBuffers {
    /// One `u32` per cell, row-major (0 = dead, 1 = alive)
    pub cells_buffer: Buffer,
    /// Uniform buffer for render parameters
    pub render_params_buffer: Buffer,
    pub width: u32,
    pub height: u32,
}

/// Render parameters passed to the render shader (80 bytes, aligned to 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    // Grid info (16 bytes)
    pub grid_width: u32,
    pub grid_height: u32,
    pub show_overlay: u32, // 0 = off, 1 = on
    pub line_width: f32,

    // Surface size in physical pixels (8 bytes + 8 padding)
    pub surface_width: f32,
    pub surface_height: f32,
    pub _padding: [f32; 2],

    // Colors, rgb + alpha (48 bytes)
    pub alive_color: [f32; 4],
    pub dead_color: [f32; 4],
    pub overlay_color: [f32; 4],
}

impl RenderParams {
    pub fn new(grid_width: u32, grid_height: u32, surface_size: (u32, u32), show_overlay: bool) -> Self {
        Self {
            grid_width,
            grid_height,
            show_overlay: show_overlay as u32,
            line_width: OVERLAY_LINE_WIDTH,
            surface_width: surface_size.0 as f32,
            surface_height: surface_size.1 as f32,
            _padding: [0.0, 0.0],
            alive_color: opaque(ALIVE_COLOR),
            dead_color: opaque(DEAD_COLOR),
            overlay_color: opaque(OVERLAY_COLOR),
        }
    }
}

fn opaque([r, g, b]: [f32; 3]) -> [f32; 4] {
    [r, g, b, 1.0]
}

impl GridBuffers {
    /// Create buffers sized for `grid` and upload its cells
    pub fn new(device: &Device, queue: &Queue, grid: &Grid) -> Self {
        let width = grid.width() as u32;
        let height = grid.height() as u32;
        let buffer_size = (grid.cells().len() * std::mem::size_of::<u32>()) as u64;

        let cells_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("grid-cells-buffer"),
            size: buffer_size,
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let render_params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("render-params-buffer"),
            size: std::mem::size_of::<RenderParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let buffers = Self {
            cells_buffer,
            render_params_buffer,
            width,
            height,
        };
        buffers.upload_cells(queue, grid);
        buffers
    }

    /// Write the current generation into the cell buffer
    pub fn upload_cells(&self, queue: &Queue, grid: &Grid) {
        assert_eq!(
            (grid.width() as u32, grid.height() as u32),
            (self.width, self.height),
            "Grid size mismatch"
        );
        let words = grid.to_gpu_words();
        queue.write_buffer(&self.cells_buffer, 0, bytemuck::cast_slice(words.as_slice()));
    }

    /// Update render parameters
    pub fn update_render_params(&self, queue: &Queue, surface_size: (u32, u32), show_overlay: bool) {
        let params = RenderParams::new(self.width, self.height, surface_size, show_overlay);
        queue.write_buffer(&self.render_params_buffer, 0, bytemuck::bytes_of(&params));
    }
}
