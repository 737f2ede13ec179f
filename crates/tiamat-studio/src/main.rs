//! Terminal playground for the tiamat wave loader.
//!
//! Cycles through the built-in presets, rasterizing each frame's outlines
//! into colored terminal cells. Pure glue: all geometry and paint decisions
//! come from the engine.

use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, event, execute, queue};

use tiamat_engine::coords::Vec2;
use tiamat_engine::logging::{LoggingConfig, init_logging};
use tiamat_engine::paint::{LinearGradient, Rgba8};
use tiamat_engine::presets;
use tiamat_engine::snippet::usage_snippet;
use tiamat_engine::time::FrameClock;
use tiamat_engine::wave::{WaveLoader, WaveLoaderConfig};

const FRAME_BUDGET: Duration = Duration::from_millis(33);
const CURVE_STEPS: usize = 12;
const BACKDROP: (f32, f32, f32) = (0.05, 0.06, 0.09);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut out = stdout();
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut out);

    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(out: &mut Stdout) -> Result<()> {
    let presets = presets::all();
    let mut index = 0usize;
    let mut loader = WaveLoader::new(presets[index].1.clone());
    let mut clock = FrameClock::new();
    let mut raster = Raster::default();

    loop {
        if event::poll(FRAME_BUDGET)? {
            match event::read()? {
                Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Right | KeyCode::Char(' ') => {
                        index = (index + 1) % presets.len();
                        loader.set_config(presets[index].1.clone());
                        log::debug!("preset -> {}", presets[index].0);
                    }
                    KeyCode::Left => {
                        index = (index + presets.len() - 1) % presets.len();
                        loader.set_config(presets[index].1.clone());
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        let frame = clock.tick();
        loader.advance(frame.clock_ms);
        draw(out, &loader, presets[index].0, &mut raster)?;
    }
}

/// Reused rasterization scratch: per-wave flattened polylines and the cell
/// color grid.
#[derive(Default)]
struct Raster {
    polyline: Vec<Vec2>,
    crests: Vec<f32>,
    cells: Vec<(f32, f32, f32)>,
}

fn draw(out: &mut Stdout, loader: &WaveLoader, preset_name: &str, raster: &mut Raster) -> Result<()> {
    let (term_cols, term_rows) = crossterm::terminal::size()?;
    let cols = term_cols as usize;
    let canvas_rows = (term_rows as usize).saturating_sub(4).max(1);

    let config = loader.config();
    let width = config.width;
    let height = config.height;

    raster.cells.clear();
    raster.cells.resize(cols * canvas_rows, BACKDROP);

    for render in loader.waves() {
        raster.polyline.clear();
        render.path.flatten_into(CURVE_STEPS, &mut raster.polyline);
        column_crests(&raster.polyline, cols, width, height, &mut raster.crests);

        let tint = gradient_top_color(render.gradient);
        for col in 0..cols {
            let crest = raster.crests[col];
            for row in 0..canvas_rows {
                let canvas_y = (row as f32 + 0.5) / canvas_rows as f32 * height;
                if canvas_y >= crest {
                    let cell = &mut raster.cells[row * cols + col];
                    *cell = blend(*cell, tint, render.opacity);
                }
            }
        }
    }

    apply_fade(loader.fade_mask(), cols, &mut raster.cells, canvas_rows);

    queue!(out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
    for row in 0..canvas_rows {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        for col in 0..cols {
            let (r, g, b) = raster.cells[row * cols + col];
            queue!(
                out,
                SetBackgroundColor(Color::Rgb {
                    r: (r * 255.0) as u8,
                    g: (g * 255.0) as u8,
                    b: (b * 255.0) as u8,
                }),
                Print(' ')
            )?;
        }
    }

    let summary = usage_snippet(config).replace('\n', " ");
    queue!(
        out,
        ResetColor,
        cursor::MoveTo(0, canvas_rows as u16 + 1),
        Print(format!(
            " preset: {preset_name}   waves: {}   [←/→] preset  [q] quit",
            loader.wave_count()
        )),
        cursor::MoveTo(0, canvas_rows as u16 + 2),
        Print(truncate(&summary, cols.saturating_sub(1)))
    )?;
    out.flush()?;
    Ok(())
}

/// Topmost outline y per terminal column, in canvas coordinates.
fn column_crests(polyline: &[Vec2], cols: usize, width: f32, height: f32, out: &mut Vec<f32>) {
    out.clear();
    out.resize(cols, height);

    for pair in polyline.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (x0, x1) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        if x1 - x0 < f32::EPSILON {
            // Vertical edge: credit the nearest column directly.
            let col = ((a.x / width) * cols as f32) as usize;
            if col < cols {
                out[col] = out[col].min(a.y.min(b.y));
            }
            continue;
        }

        let first = ((x0 / width) * cols as f32).floor().max(0.0) as usize;
        let last = (((x1 / width) * cols as f32).ceil() as usize).min(cols.saturating_sub(1));
        for col in first..=last.max(first) {
            let x = (col as f32 + 0.5) / cols as f32 * width;
            if x < x0 || x > x1 {
                continue;
            }
            let t = (x - a.x) / (b.x - a.x);
            let y = a.y + (b.y - a.y) * t;
            out[col] = out[col].min(y);
        }
    }
}

fn gradient_top_color(gradient: &LinearGradient) -> Rgba8 {
    gradient.stops.first().map(|s| s.color).unwrap_or(Rgba8::black())
}

fn blend(dst: (f32, f32, f32), src: Rgba8, opacity: f32) -> (f32, f32, f32) {
    let a = opacity.clamp(0.0, 1.0);
    (
        dst.0 + (src.r as f32 / 255.0 - dst.0) * a,
        dst.1 + (src.g as f32 / 255.0 - dst.1) * a,
        dst.2 + (src.b as f32 / 255.0 - dst.2) * a,
    )
}

/// Applies the engine's horizontal fade mask by darkening toward the
/// backdrop at the edges.
fn apply_fade(mask: &LinearGradient, cols: usize, cells: &mut [(f32, f32, f32)], rows: usize) {
    let inner_left = mask.stops[1].t;
    let inner_right = mask.stops[2].t;

    for col in 0..cols {
        let t = (col as f32 + 0.5) / cols as f32;
        let alpha = if t < inner_left && inner_left > 0.0 {
            t / inner_left
        } else if t > inner_right && inner_right < 1.0 {
            (1.0 - t) / (1.0 - inner_right)
        } else {
            1.0
        };

        if alpha >= 1.0 {
            continue;
        }
        for row in 0..rows {
            let cell = &mut cells[row * cols + col];
            cell.0 = BACKDROP.0 + (cell.0 - BACKDROP.0) * alpha;
            cell.1 = BACKDROP.1 + (cell.1 - BACKDROP.1) * alpha;
            cell.2 = BACKDROP.2 + (cell.2 - BACKDROP.2) * alpha;
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
