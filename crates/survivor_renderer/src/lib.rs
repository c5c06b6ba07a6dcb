//! `survivor_renderer`: draws a [`DrawList`] with one instanced `wgpu`
//! pipeline.
//!
//! | Module      | Responsibility                                   |
//! |-------------|--------------------------------------------------|
//! | `batch`     | `DrawList` → instance data + texture runs (CPU)  |
//! | `camera`    | View-projection uniform + bind group             |
//! | `pipeline`  | Bind-group layouts + compiled sprite pipeline    |
//! | `resources` | Buffer / texture allocation helpers              |

pub mod batch;
pub mod camera;
pub mod pipeline;
pub mod resources;

pub use batch::{BatchTexture, DrawBatch, SpriteBatcher, SpriteInstance};
pub use camera::GpuCamera;
pub use survivor_core::context::{ContextError, EngineContext};

use survivor_assets::ImageStore;
use survivor_core::{DrawList, View2D};

use pipeline::SpritePipeline;
use resources::buffer;
use resources::texture::{self, GpuTexture};

const INITIAL_INSTANCES: u32 = 256;

const QUAD_CORNERS: [[f32; 2]; 4] = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]];
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Owns the GPU context and every resource needed to draw a frame.
pub struct Renderer {
    pub context: EngineContext,
    pipeline: SpritePipeline,
    gpu_camera: GpuCamera,
    sampler: wgpu::Sampler,
    white: GpuTexture,
    /// Indexed by `TextureId`.
    textures: Vec<GpuTexture>,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    max_instances: u32,
    batcher: SpriteBatcher,
}

impl Renderer {
    pub fn new(
        context: EngineContext,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let device = &context.device;
        let pipeline = SpritePipeline::new(device, format);

        let initial_view = View2D::from_extent(glam::Vec2::new(width as f32, height as f32));
        let gpu_camera = GpuCamera::new(device, &initial_view, &pipeline.camera_layout);

        let sampler = texture::create_sampler(device);
        let white = GpuTexture::white(device, &context.queue, &pipeline.texture_layout, &sampler);

        let vertex_buffer = buffer::create_vertex(device, "Quad Vertex Buffer", &QUAD_CORNERS);
        let index_buffer = buffer::create_index(device, "Quad Index Buffer", &QUAD_INDICES);
        let instance_buffer = buffer::create_instance::<SpriteInstance>(
            device,
            "Sprite Instance Buffer",
            INITIAL_INSTANCES,
        );

        Self {
            context,
            pipeline,
            gpu_camera,
            sampler,
            white,
            textures: Vec::new(),
            vertex_buffer,
            index_buffer,
            instance_buffer,
            max_instances: INITIAL_INSTANCES,
            batcher: SpriteBatcher::new(),
        }
    }

    /// Create one GPU texture per stored image, replacing any previous set.
    /// Texture ids handed out by the store stay valid.
    pub fn upload_images(&mut self, store: &ImageStore) {
        let device = &self.context.device;
        let queue = &self.context.queue;
        self.textures = store
            .iter()
            .map(|(_, img)| {
                GpuTexture::from_rgba8(
                    device,
                    queue,
                    &self.pipeline.texture_layout,
                    &self.sampler,
                    &img.label,
                    img.width(),
                    img.height(),
                    img.image.as_raw(),
                )
            })
            .collect();
        log::info!("uploaded {} textures", self.textures.len());
    }

    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Clear `target` to the list's clear colour and draw its commands in
    /// order through `view`.
    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        view: &View2D,
        list: &DrawList,
    ) {
        self.batcher.build(list);
        self.gpu_camera.sync(&self.context.queue, view);

        let required = self.batcher.instances().len() as u32;
        if required > self.max_instances {
            let capacity = required.next_power_of_two();
            log::debug!("growing instance buffer to {capacity}");
            self.instance_buffer = buffer::create_instance::<SpriteInstance>(
                &self.context.device,
                "Sprite Instance Buffer (resized)",
                capacity,
            );
            self.max_instances = capacity;
        }
        if !self.batcher.is_empty() {
            self.context.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(self.batcher.instances()),
            );
        }

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sprite Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(list.clear_color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if self.batcher.is_empty() {
            return;
        }

        rpass.set_pipeline(&self.pipeline.pipeline);
        rpass.set_bind_group(0, &self.gpu_camera.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        for batch in self.batcher.batches() {
            let bind_group = match batch.texture {
                BatchTexture::White => &self.white.bind_group,
                BatchTexture::Image(id) => match self.textures.get(id.index()) {
                    Some(tex) => &tex.bind_group,
                    None => {
                        log::debug!("skipping sprite with unknown texture {id:?}");
                        continue;
                    }
                },
            };
            rpass.set_bind_group(1, bind_group, &[]);
            rpass.draw_indexed(0..6, 0, batch.instances.clone());
        }
    }
}
