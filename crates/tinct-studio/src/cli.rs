//! Command-line arguments for the studio.

use std::path::PathBuf;

use clap::Parser;
use tinct_engine::coords::Size;

/// Well-known system font locations, tried in order when `--font` is absent.
const FONT_FALLBACKS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Render the gradient label showcase to a PNG
#[derive(Parser, Debug)]
#[command(name = "tinct-studio", version, about)]
pub struct StudioArgs {
    /// TrueType/OpenType font to rasterize with
    #[arg(short, long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Where to write the PNG
    #[arg(short, long, value_name = "PATH", default_value = "gradient-labels.png")]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 820)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 560)]
    pub height: u32,

    /// Label font size in pixels
    #[arg(long, default_value_t = 50.0)]
    pub font_size: f32,

    /// Log filter (env_logger syntax), overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

/// Studio configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub font_candidates: Vec<PathBuf>,
    pub output: PathBuf,
    pub canvas: Size,
    pub font_size: f32,
    pub log_filter: Option<String>,
}

impl StudioArgs {
    pub fn into_config(self) -> Result<StudioConfig, String> {
        let canvas = Size::new(self.width, self.height);
        if canvas.is_empty() {
            return Err(format!("canvas size must be non-zero, got {canvas}"));
        }
        if !(self.font_size > 0.0 && self.font_size.is_finite()) {
            return Err(format!("font size must be positive, got {}", self.font_size));
        }

        let font_candidates = match self.font {
            Some(path) => vec![path],
            None => FONT_FALLBACKS.iter().map(PathBuf::from).collect(),
        };

        Ok(StudioConfig {
            font_candidates,
            output: self.output,
            canvas,
            font_size: self.font_size,
            log_filter: self.log,
        })
    }
}
