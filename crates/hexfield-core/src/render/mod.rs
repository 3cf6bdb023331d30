use crate::camera::Camera;
use crate::constants::CLEAR_COLOR;
use crate::grid::HexGrid;
use wgpu::util::DeviceExt;

mod grid_pass;
pub mod helpers;

use grid_pass::{create_grid_bind_group, create_grid_pass, GridPass, GridUniforms};

struct GridBuffers {
    vertices: wgpu::Buffer,
    vertex_count: u32,
    instances: wgpu::Buffer,
    instance_count: u32,
}

/// Surface, device and the single grid mesh.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pass: GridPass,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    // kept alive for the bind group
    _env_texture: wgpu::Texture,
    grid: Option<GridBuffers>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    view_proj: [[f32; 4]; 4],
    time: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::preferred_surface_format(&caps);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::preferred_alpha_mode(&caps),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pass = create_grid_pass(&device, format);
        let sampler = helpers::create_linear_sampler(&device);
        let (env_texture, env_view) = helpers::create_rgba_texture(
            &device,
            &queue,
            "env_placeholder",
            1,
            1,
            &helpers::PLACEHOLDER_TEXEL,
        );
        let bind_group = create_grid_bind_group(&device, &pass, &env_view, &sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pass,
            bind_group,
            sampler,
            _env_texture: env_texture,
            grid: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            time: 0.0,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn set_camera(&mut self, camera: &Camera) {
        self.view_proj = camera.view_proj_f32();
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    /// Upload the base tile and the per-instance attributes. Replaces any
    /// previously uploaded grid.
    pub fn upload_grid(&mut self, grid: &HexGrid) {
        let vertices = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("tile_vb"),
                contents: bytemuck::cast_slice(&grid.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let instances = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("grid_instances"),
                contents: bytemuck::cast_slice(&grid.instances),
                usage: wgpu::BufferUsages::VERTEX,
            });
        self.grid = Some(GridBuffers {
            vertices,
            vertex_count: grid.vertices.len() as u32,
            instances,
            instance_count: grid.instance_count() as u32,
        });
    }

    /// Swap the placeholder for a decoded RGBA image.
    pub fn set_env_texture(&mut self, width: u32, height: u32, rgba: &[u8]) {
        if width == 0 || height == 0 || rgba.len() != helpers::rgba_len(width, height) {
            log::warn!(
                "[render] ignoring env texture {}x{} with {} bytes",
                width,
                height,
                rgba.len()
            );
            return;
        }
        let (tex, view) =
            helpers::create_rgba_texture(&self.device, &self.queue, "env_texture", width, height, rgba);
        self.bind_group = create_grid_bind_group(&self.device, &self.pass, &view, &self.sampler);
        self._env_texture = tex;
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let u = GridUniforms {
            view_proj: self.view_proj,
            resolution: [self.width as f32, self.height as f32],
            time: self.time,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.pass.uniform_buffer, 0, bytemuck::bytes_of(&u));
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("grid_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(grid) = &self.grid {
                rpass.set_pipeline(&self.pass.pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, grid.vertices.slice(..));
                rpass.set_vertex_buffer(1, grid.instances.slice(..));
                rpass.draw(0..grid.vertex_count, 0..grid.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
