use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::RendererOptions;
use crate::scene::{
    wireframe_sphere, SphereMeshState, SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS,
    SPHERE_WIDTH_SEGMENTS,
};

/// Vertex format for wireframe line geometry.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WireVertex {
    /// Position in model space.
    pub position: [f32; 3],
}

/// GPU uniform for the sphere mesh: model matrix plus the `time` value.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshUniform {
    model: [[f32; 4]; 4],
    time: f32,
    _pad: [f32; 3],
}

impl MeshUniform {
    fn new() -> Self {
        Self {
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
            time: 0.0,
            _pad: [0.0; 3],
        }
    }
}

/// Vertex buffer layout for [`WireVertex`].
fn wire_vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<WireVertex>()
            as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0, // position
        }],
    }
}

/// Multisampled color and depth attachments, recreated on resize.
struct FrameTargets {
    /// MSAA color target resolved into the swapchain (`None` when
    /// multisampling is disabled).
    msaa_view: Option<wgpu::TextureView>,
    depth_view: wgpu::TextureView,
}

impl FrameTargets {
    fn new(context: &RenderContext, sample_count: u32) -> Self {
        let size = wgpu::Extent3d {
            width: context.config.width.max(1),
            height: context.config.height.max(1),
            depth_or_array_layers: 1,
        };

        let msaa_view = (sample_count > 1).then(|| {
            context
                .device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some("MSAA Color Target"),
                    size,
                    mip_level_count: 1,
                    sample_count,
                    dimension: wgpu::TextureDimension::D2,
                    format: context.format(),
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        });

        let depth_view = context
            .device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Target"),
                size,
                mip_level_count: 1,
                sample_count,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth32Float,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            msaa_view,
            depth_view,
        }
    }
}

/// Renders the wireframe sphere as a line list with a time-animated shader.
pub struct WireSphereRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    uniform: MeshUniform,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    targets: FrameTargets,
    sample_count: u32,
    clear_color: wgpu::Color,
}

impl WireSphereRenderer {
    /// Build the sphere geometry, GPU buffers, and render pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        options: &RendererOptions,
    ) -> Self {
        let geometry = wireframe_sphere(
            SPHERE_RADIUS,
            SPHERE_WIDTH_SEGMENTS,
            SPHERE_HEIGHT_SEGMENTS,
        );
        let vertices: Vec<WireVertex> = geometry
            .positions
            .iter()
            .map(|p| WireVertex {
                position: p.to_array(),
            })
            .collect();

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Wire Sphere Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Wire Sphere Index Buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let uniform = MeshUniform::new();
        let uniform_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Wire Sphere Mesh Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let mesh_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Wire Sphere Mesh Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );
        let bind_group = context.device.create_bind_group(
            &wgpu::BindGroupDescriptor {
                layout: &mesh_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
                label: Some("Wire Sphere Mesh Bind Group"),
            },
        );

        let sample_count = options.sample_count.max(1);
        let pipeline = Self::create_pipeline(
            context,
            camera_layout,
            &mesh_layout,
            sample_count,
        );
        let targets = FrameTargets::new(context, sample_count);

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
            uniform,
            uniform_buffer,
            bind_group,
            targets,
            sample_count,
            clear_color: options.wgpu_clear_color(),
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        mesh_layout: &wgpu::BindGroupLayout,
        sample_count: u32,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/wire_sphere.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Wire Sphere Pipeline Layout"),
                bind_group_layouts: &[camera_layout, mesh_layout],
                push_constant_ranges: &[],
            },
        );

        context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Wire Sphere Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wire_vertex_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: sample_count,
                    ..Default::default()
                },
                multiview: None,
                cache: None,
            },
        )
    }

    /// Upload the mesh model matrix and `time` uniform for the given state.
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        sphere: &SphereMeshState,
    ) {
        self.uniform.model = sphere.model_matrix().to_cols_array_2d();
        self.uniform.time = sphere.time() as f32;
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }

    /// Recreate the MSAA/depth attachments for the current surface size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.targets = FrameTargets::new(context, self.sample_count);
    }

    /// Re-apply renderer options that do not require a pipeline rebuild.
    pub fn apply_options(&mut self, options: &RendererOptions) {
        self.clear_color = options.wgpu_clear_color();
    }

    /// Encode one render pass drawing the sphere into the given surface
    /// view (resolving from the MSAA target when enabled).
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        let (view, resolve_target) = match self.targets.msaa_view.as_ref() {
            Some(msaa) => (msaa, Some(surface_view)),
            None => (surface_view, None),
        };

        let mut rp =
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("wire sphere pass"),
                color_attachments: &[Some(
                    wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.clear_color),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    },
                )],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.targets.depth_view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

        rp.set_pipeline(&self.pipeline);
        rp.set_bind_group(0, camera_bind_group, &[]);
        rp.set_bind_group(1, &self.bind_group, &[]);
        rp.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rp.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        rp.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
