use facet_engine::logging::LoggingConfig;
use facet_engine::window::{LogicalSize, RuntimeConfig};

use crate::scenes::SceneKind;

#[derive(clap::Parser, Debug)]
#[command(name = "facet-demo", version, about = "Draws parametric 2D shapes", long_about = None)]
pub struct Arguments {
    /// Scene to draw
    #[arg(long, value_enum, default_value_t = SceneKind::Triangle)]
    pub scene: SceneKind,

    /// Log filter in env_logger syntax; overrides RUST_LOG
    #[arg(long = "log", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Generate the scene, log its mesh sizes and exit without opening a window
    #[arg(long)]
    pub dump: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 500.0, value_parser = parse_extent)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 500.0, value_parser = parse_extent)]
    pub height: f64,
}

impl Arguments {
    pub fn logging_config(&self) -> LoggingConfig {
        match &self.log_filter {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }

    pub fn runtime_config(&self, title: &str) -> RuntimeConfig {
        RuntimeConfig {
            title: title.to_string(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }
}

fn parse_extent(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v >= 1.0 {
        Ok(v)
    } else {
        Err(format!("`{s}` is not a usable window extent"))
    }
}
