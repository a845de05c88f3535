mod app;
mod cli;
mod scenes;

use anyhow::Context;
use clap::Parser;

use facet_engine::device::GpuInit;
use facet_engine::logging::init_logging;
use facet_engine::window::Runtime;

use app::SceneApp;
use cli::Arguments;
use scenes::{BuiltShape, Scene};

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    init_logging(args.logging_config());

    let scene = Scene::preset(args.scene);
    let shapes = scene
        .build()
        .with_context(|| format!("failed to generate scene `{}`", scene.title))?;

    if args.dump {
        dump(&scene, &shapes);
        return Ok(());
    }

    log::info!("opening `{}`", scene.title);
    Runtime::run(
        args.runtime_config(scene.title),
        GpuInit::default(),
        SceneApp::new(scene.clear, shapes),
    )
}

fn dump(scene: &Scene, shapes: &[BuiltShape]) {
    log::info!("scene `{}`: {} shape(s)", scene.title, shapes.len());
    for shape in shapes {
        for (layer, mesh) in shape.meshes.iter().enumerate() {
            log::info!(
                "{:>14}[{layer}] {:>3} vertices {:>3} indices {:>3} triangles",
                shape.id.name(),
                mesh.vertex_count(),
                mesh.index_count(),
                mesh.triangle_count(),
            );
        }
    }
}
