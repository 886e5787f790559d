pub mod batch;
pub mod pipeline;
pub mod texture;
pub mod utils;

use std::sync::Arc;

use image::RgbaImage;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use batch::build_batches;
use pipeline::{SpritePipeline, create_sprite_pipeline, orthographic_projection};
use texture::GpuTexture;
use utils::letterbox_viewport;

use crate::entities::TextureId;
use crate::error::GameError;
use crate::render::{Color, DrawCommand};
use crate::window::WindowConfig;

/// wgpu backend: owns the surface, the sprite pipeline and every texture the
/// game draws from. The game only ever sees [`TextureId`]s.
pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: SpritePipeline,
    /// Logical-resolution projection; fixed for the life of the renderer.
    projection_bind_group: wgpu::BindGroup,
    textures: Vec<GpuTexture>,
    /// Current logical/physical sizes, kept in step with `resize`.
    window_config: WindowConfig,
    clear_color: Color,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        window_config: WindowConfig,
        clear_color: Color,
    ) -> Result<Self, GameError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .map_err(|e| GameError::Renderer(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(|e| GameError::Renderer(format!("no suitable GPU adapter found: {e}")))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .map_err(|e| GameError::Renderer(format!("failed to create device: {e}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| GameError::Renderer("surface reports no formats".into()))?;
        let alpha_mode = caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_sprite_pipeline(&device, format);

        let proj = orthographic_projection(
            window_config.logical_width as f32,
            window_config.logical_height as f32,
        );
        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("projection_buffer"),
            contents: bytemuck::cast_slice(&proj),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("projection_bg"),
            layout: &pipeline.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        log::info!("renderer ready: {:?} {}x{}", format, config.width, config.height);

        Ok(Self {
            window_config: window_config.with_physical(config.width, config.height),
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            projection_bind_group,
            textures: Vec::new(),
            clear_color,
        })
    }

    /// Upload an image and return the handle sprites refer to it by.
    pub fn load_texture(&mut self, label: &str, img: &RgbaImage) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        let tex = GpuTexture::upload(
            &self.device,
            &self.queue,
            &self.pipeline.texture_bind_group_layout,
            label,
            img,
        );
        log::debug!("texture {label} -> {id:?} ({}x{})", tex.width, tex.height);
        self.textures.push(tex);
        id
    }

    fn texture(&self, id: TextureId) -> Option<&GpuTexture> {
        self.textures.get(id.0 as usize)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.window_config = self.window_config.with_physical(new_size.width, new_size.height);
    }

    /// Draw one frame from an ordered command list.
    ///
    /// Commands are batched by texture without reordering; the whole list is
    /// drawn in a single render pass into the letterboxed viewport.
    pub fn render(&mut self, commands: &[DrawCommand]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (vertices, batches) = build_batches(commands, |id| {
            self.texture(id).map(|t| (t.width, t.height))
        });

        let viewport = letterbox_viewport(&self.window_config);
        let [r, g, b, a] = self.clear_color.0;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !vertices.is_empty() && viewport.width >= 1.0 && viewport.height >= 1.0 {
                let vbuf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sprite_vertex_buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });

                pass.set_viewport(viewport.x, viewport.y, viewport.width, viewport.height, 0.0, 1.0);
                pass.set_pipeline(&self.pipeline.render_pipeline);
                pass.set_bind_group(0, &self.projection_bind_group, &[]);
                pass.set_vertex_buffer(0, vbuf.slice(..));

                for batch in &batches {
                    let Some(tex) = self.texture(batch.texture) else { continue };
                    pass.set_bind_group(1, &tex.bind_group, &[]);
                    pass.draw(batch.vertices.clone(), 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
