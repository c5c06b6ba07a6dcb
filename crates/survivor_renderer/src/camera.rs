/// GPU-side camera: the view-projection uniform and its bind group at
/// group(0).
use std::sync::Arc;

use survivor_core::view::CameraUniform;
use survivor_core::View2D;

use crate::resources::buffer;

pub struct GpuCamera {
    pub uniform: CameraUniform,
    pub buffer: Arc<wgpu::Buffer>,
    pub bind_group: wgpu::BindGroup,
}

impl GpuCamera {
    pub fn new(device: &wgpu::Device, view: &View2D, layout: &wgpu::BindGroupLayout) -> Self {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(view);

        let buf = buffer::create_uniform(device, "Camera Uniform Buffer", &uniform);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buf.as_entire_binding(),
            }],
        });

        Self {
            uniform,
            buffer: buf,
            bind_group,
        }
    }

    /// Upload `view`.  Call once per frame before the render pass.
    pub fn sync(&mut self, queue: &wgpu::Queue, view: &View2D) {
        self.uniform.update_view_proj(view);
        buffer::update_uniform(queue, &self.buffer, &self.uniform);
    }
}
