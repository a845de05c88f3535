use anyhow::Context;

use facet_engine::core::{App, AppControl, FrameCtx};
use facet_engine::render::{MeshHandle, MeshPipelineConfig, MeshRenderer, RenderCtx};
use facet_geom::{Rgb, ShapeId};

use crate::scenes::BuiltShape;

/// Uploads a built scene once and redraws it every frame.
pub struct SceneApp {
    clear: Rgb,
    pending: Vec<BuiltShape>,

    renderer: Option<MeshRenderer>,
    shapes: Vec<(ShapeId, Vec<MeshHandle>)>,
}

impl SceneApp {
    pub fn new(clear: Rgb, shapes: Vec<BuiltShape>) -> Self {
        Self {
            clear,
            pending: shapes,
            renderer: None,
            shapes: Vec::new(),
        }
    }

    fn handles(&self) -> Vec<MeshHandle> {
        self.shapes
            .iter()
            .flat_map(|(_, handles)| handles.iter().copied())
            .collect()
    }
}

impl App for SceneApp {
    fn on_gpu_ready(&mut self, ctx: &RenderCtx<'_>) -> anyhow::Result<()> {
        let mut renderer = MeshRenderer::new(ctx, MeshPipelineConfig::default())
            .context("failed to build mesh pipeline")?;

        for shape in self.pending.drain(..) {
            let handles = shape
                .meshes
                .iter()
                .map(|mesh| renderer.upload(ctx, mesh))
                .collect();
            self.shapes.push((shape.id, handles));
        }

        log::info!(
            "uploaded {} shape(s), {} mesh(es)",
            self.shapes.len(),
            renderer.len()
        );
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let handles = self.handles();
        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Continue;
        };

        ctx.render(self.clear, |rctx, target| {
            renderer.draw(rctx, target, &handles);
        })
    }
}
