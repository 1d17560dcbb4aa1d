use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use inkboard::brush::BrushStyle;
use inkboard::config::Config;
use inkboard::draw::{BLUE, GREEN, ORANGE, RED};
use inkboard::input::{InputState, PointerEvent, Tool};

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(
    version,
    about = "Raster sketch board engine with stylized brushes, live shape preview, and snapshot undo"
)]
struct Cli {
    /// Surface width in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Surface height in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Output path for the rendered demo sheet (PNG)
    #[arg(long, short = 'o', default_value = "inkboard.png")]
    out: PathBuf,

    /// Seed for the brush RNG; same seed, same strokes
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }

    let mut state = match cli.seed {
        Some(seed) => InputState::from_config_with_seed(&config, seed)?,
        None => InputState::from_config(&config)?,
    };

    log::info!(
        "Rendering demo sheet on a {}x{} surface",
        config.surface.width,
        config.surface.height
    );
    render_demo_sheet(&mut state);

    state
        .pixels()
        .save(&cli.out)
        .with_context(|| format!("Failed to write PNG to {}", cli.out.display()))?;

    let (width, height) = state.dimensions();
    println!(
        "Saved {width}x{height} drawing to {} ({} history entries)",
        cli.out.display(),
        state.history_len()
    );

    Ok(())
}

/// Replays a scripted set of gestures that exercises every tool and brush
/// style, standing in for the interactive UI shell.
fn render_demo_sheet(state: &mut InputState) {
    let (w, h) = state.dimensions();
    let (w, h) = (w as f64, h as f64);

    // A frame around the sheet.
    state.current_tool = Tool::Rectangle;
    state.current_color = BLUE;
    state.current_width = 4.0;
    drag(state, &[(w * 0.03, h * 0.05), (w * 0.97, h * 0.95)]);

    // One wave per brush style across the upper half.
    state.current_tool = Tool::Marker;
    for (row, style, color) in [
        (0.18, BrushStyle::Normal, RED),
        (0.32, BrushStyle::Crayon, ORANGE),
        (0.46, BrushStyle::Ink, GREEN),
    ] {
        state.brush_style = style;
        state.current_color = color;
        state.current_width = 8.0;
        let wave: Vec<(f64, f64)> = (0..=24)
            .map(|i| {
                let t = i as f64 / 24.0;
                (
                    w * (0.08 + 0.84 * t),
                    h * row + (t * std::f64::consts::TAU * 2.0).sin() * h * 0.04,
                )
            })
            .collect();
        drag(state, &wave);
        log::debug!(
            "{} wave committed in {}",
            style.label(),
            inkboard::util::color_to_name(&color)
        );
    }

    // Parametric shapes in the lower half, previewed live before committing.
    state.current_tool = Tool::Circle;
    state.current_color = RED;
    state.current_width = 5.0;
    drag(
        state,
        &[
            (w * 0.30, h * 0.72),
            (w * 0.34, h * 0.72),
            (w * 0.38, h * 0.72),
            (w * 0.42, h * 0.72),
        ],
    );

    state.current_tool = Tool::Line;
    state.current_color = GREEN;
    drag(state, &[(w * 0.55, h * 0.60), (w * 0.90, h * 0.85)]);

    // An eraser pass straight through the crayon wave.
    state.current_tool = Tool::Eraser;
    state.current_width = 20.0;
    let pass: Vec<(f64, f64)> = (0..=10)
        .map(|i| (w * (0.40 + 0.02 * i as f64), h * 0.32))
        .collect();
    drag(state, &pass);

    // A deliberate mistake, undone again: the sheet must not show it, but the
    // redo branch it replaced must be gone too.
    state.current_tool = Tool::Marker;
    state.brush_style = BrushStyle::Normal;
    drag(state, &[(w * 0.1, h * 0.9), (w * 0.9, h * 0.1)]);
    state.undo();
    log::info!(
        "After undo: can_undo={}, can_redo={}",
        state.can_undo(),
        state.can_redo()
    );
}

/// Feeds one full gesture (down, moves, up) through the engine.
fn drag(state: &mut InputState, points: &[(f64, f64)]) {
    let Some((&(x, y), rest)) = points.split_first() else {
        return;
    };
    state.handle_pointer_event(PointerEvent::Down { x, y });
    let mut last = (x, y);
    for &(x, y) in rest {
        state.handle_pointer_event(PointerEvent::Move { x, y });
        last = (x, y);
    }
    state.handle_pointer_event(PointerEvent::Up {
        x: last.0,
        y: last.1,
    });
}
