use std::borrow::Cow;

use facet_geom::{Mesh, Vertex};
use wgpu::util::DeviceExt;

use super::{build_shader, BuildError, RenderCtx, RenderTarget};

/// Pass-through WGSL used when no custom shader is configured.
pub const MESH_WGSL: &str = include_str!("shaders/mesh.wgsl");

/// Pipeline configuration for [`MeshRenderer`].
///
/// The shader must read `@location(0) vec2<f32>` position and
/// `@location(1) vec3<f32>` color, matching [`Vertex`].
#[derive(Debug, Clone)]
pub struct MeshPipelineConfig {
    pub label: String,
    pub shader_source: Cow<'static, str>,
    pub vertex_entry: String,
    pub fragment_entry: String,
}

impl Default for MeshPipelineConfig {
    fn default() -> Self {
        Self {
            label: "facet mesh".to_string(),
            shader_source: Cow::Borrowed(MESH_WGSL),
            vertex_entry: "vs_main".to_string(),
            fragment_entry: "fs_main".to_string(),
        }
    }
}

/// Handle to a mesh uploaded into a [`MeshRenderer`].
///
/// Only meaningful for the renderer that returned it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshHandle(usize);

impl MeshHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// GPU copy of one mesh; empty meshes get no buffers.
struct GpuMesh {
    buffers: Option<(wgpu::Buffer, wgpu::Buffer)>,
    index_count: u32,
}

/// Uploads meshes once and draws them as indexed triangle lists.
///
/// Buffers live in an arena owned by the renderer and are released when the
/// renderer is dropped.
pub struct MeshRenderer {
    config: MeshPipelineConfig,
    shader: wgpu::ShaderModule,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    meshes: Vec<GpuMesh>,
}

impl MeshRenderer {
    /// Compiles the configured shader and builds the pipeline for the current surface format.
    pub fn new(ctx: &RenderCtx<'_>, config: MeshPipelineConfig) -> Result<Self, BuildError> {
        let shader = build_shader(ctx.device, &config.label, &config.shader_source)?;

        let mut renderer = Self {
            config,
            shader,
            pipeline_format: None,
            pipeline: None,
            meshes: Vec::new(),
        };
        renderer.ensure_pipeline(ctx);
        Ok(renderer)
    }

    /// Number of uploaded meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Uploads `mesh` into new vertex/index buffers.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len());

        let buffers = (!mesh.is_empty()).then(|| {
            let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("facet mesh vbo"),
                contents: bytemuck::cast_slice(mesh.vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("facet mesh ibo"),
                contents: bytemuck::cast_slice(mesh.indices()),
                usage: wgpu::BufferUsages::INDEX,
            });
            (vbo, ibo)
        });

        log::debug!(
            "uploaded mesh #{}: {} vertices, {} indices",
            handle.0,
            mesh.vertex_count(),
            mesh.index_count()
        );

        self.meshes.push(GpuMesh {
            buffers,
            index_count: mesh.index_count() as u32,
        });
        handle
    }

    /// Draws the given meshes in order, on top of whatever the target holds.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, handles: &[MeshHandle]) {
        self.ensure_pipeline(ctx);
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("facet mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);

        for handle in handles {
            let Some(mesh) = self.meshes.get(handle.0) else {
                log::warn!("mesh handle #{} does not belong to this renderer", handle.0);
                continue;
            };
            let Some((vbo, ibo)) = mesh.buffers.as_ref() else { continue };

            rpass.set_vertex_buffer(0, vbo.slice(..));
            rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let label = self.config.label.as_str();

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &self.shader,
                entry_point: Some(self.config.vertex_entry.as_str()),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &self.shader,
                entry_point: Some(self.config.fragment_entry.as_str()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Generated winding is not normalized.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("built `{label}` pipeline for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x2, // position
    1 => Float32x3  // color
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}
