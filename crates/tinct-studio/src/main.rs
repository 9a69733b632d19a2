mod cli;
mod showcase;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tinct_engine::logging::{init_logging, LoggingConfig};
use tinct_engine::text::{FontId, FontSystem};
use tinct_engine::{generate_gradient, Canvas, Color, DisplaySink, GradientSpec};

use crate::cli::StudioArgs;

/// Upper bound on settle frames; labels only re-request after a property change.
const MAX_FRAMES: u32 = 8;

const BACKDROP_CENTER: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const BACKDROP_BORDER: Color = Color::new(0.85, 0.87, 0.9, 1.0);

fn main() -> Result<()> {
    let config = StudioArgs::parse().into_config().map_err(anyhow::Error::msg)?;

    init_logging(match &config.log_filter {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let mut fonts = FontSystem::new();
    let font = load_font(&mut fonts, &config.font_candidates)?;
    let face = fonts.face(font).context("loaded font is missing from the font system")?;

    let frame_requested = Rc::new(Cell::new(false));
    let scheduler = {
        let flag = frame_requested.clone();
        move || flag.set(true)
    };
    let mut labels = showcase::build_labels(config.canvas, config.font_size, scheduler);

    let started = Instant::now();
    let mut frames = 0;
    while frame_requested.replace(false) {
        if frames == MAX_FRAMES {
            bail!("labels still dirty after {MAX_FRAMES} frames");
        }
        frames += 1;
        for label in &mut labels {
            // The label already warned; the rest of the frame still renders.
            if let Err(e) = label.update(&face) {
                log::debug!("skipping {:?} this frame: {e}", label.text());
            }
        }
    }
    log::info!("{} labels settled in {frames} frame(s), {:?}", labels.len(), started.elapsed());

    let mut canvas = Canvas::new(config.canvas)?;
    let backdrop = generate_gradient(&GradientSpec::radial(config.canvas, BACKDROP_CENTER, BACKDROP_BORDER))?;
    canvas.present(&backdrop, Default::default());
    for label in &labels {
        label.paint(&mut canvas);
    }

    let out = canvas.into_bitmap();
    image::save_buffer(
        &config.output,
        out.as_bytes(),
        out.width(),
        out.height(),
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", config.output.display()))?;

    log::info!("wrote {} ({})", config.output.display(), out.size());
    Ok(())
}

/// Loads the first candidate that exists and parses as a font.
fn load_font(fonts: &mut FontSystem, candidates: &[PathBuf]) -> Result<FontId> {
    for path in candidates {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("skipping font {}: {e}", path.display());
                continue;
            }
        };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("using font {}", path.display());
                return Ok(id);
            }
            Err(e) => log::warn!("{}: {e}", path.display()),
        }
    }
    bail!("no usable font found; pass one with --font")
}
