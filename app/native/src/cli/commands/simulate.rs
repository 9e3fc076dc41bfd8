//! Simulate CLI command.
//!
//! Replays close animations against the in-memory host and prints the
//! transform of every animating window, frame by frame.

use std::path::Path;
use std::time::Duration;

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::WindowSize;
use crate::cli::output;
use crate::config::load_or_default;
use crate::effect::{DisappearEffect, EffectEvent, frame_delta};
use crate::error::DisappearError;
use crate::host::WindowId;
use crate::host::sim::{SimWindow, SimulatedHost};

/// Frames simulated when `--frames` is not given and animations never end.
const MAX_FRAMES: usize = 10_000;

/// Arguments of the `simulate` command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of windows closed in the first frame.
    #[arg(long, short, default_value_t = 1)]
    pub windows: usize,

    /// Time between two frames, in milliseconds.
    #[arg(long, default_value_t = 16, value_name = "MS")]
    pub frame_ms: i64,

    /// Stop after this many frames even if windows are still animating.
    #[arg(long, value_name = "COUNT")]
    pub frames: Option<usize>,

    /// Delete the windows this many milliseconds into the animation.
    #[arg(long, value_name = "MS")]
    pub delete_at: Option<u64>,

    /// Window class (`"resource-name resource-class"`).
    #[arg(long, default_value = "kate kate")]
    pub class: String,

    /// Window size as WIDTHxHEIGHT.
    #[arg(long, default_value = "800x600")]
    pub size: WindowSize,

    /// Global animation speed factor of the simulated compositor.
    #[arg(long, default_value_t = 1.0, value_name = "FACTOR")]
    pub time_factor: f64,

    /// Output as JSON.
    #[arg(long, short)]
    pub json: bool,
}

/// A painted window in one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSample {
    pub frame: usize,
    pub time_ms: u64,
    pub window: WindowId,
    pub progress: f64,
    pub x_scale: f64,
    pub y_scale: f64,
    pub x_translation: f64,
    pub y_translation: f64,
    pub opacity: f64,
}

/// Reference accounting of one window after the simulation.
#[derive(Debug, Clone, Serialize)]
pub struct WindowSummary {
    pub window: WindowId,
    pub animated: bool,
    pub acquired: u32,
    pub released: u32,
}

/// Result of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub frames: Vec<FrameSample>,
    pub windows: Vec<WindowSummary>,
    /// Number of frames painted, including the one that ended the animations.
    pub painted_frames: usize,
    /// Whether animations were still running when the simulation stopped.
    pub unfinished: bool,
}

/// Runs the simulation described by `args` with the given configuration.
///
/// # Errors
///
/// Returns an error if the arguments are out of range.
pub fn simulate(
    args: &SimulateArgs,
    config: &crate::config::DisappearConfig,
) -> Result<SimulationReport, DisappearError> {
    if args.frame_ms <= 0 {
        return Err(DisappearError::InvalidArguments("--frame-ms must be positive".to_string()));
    }
    if args.windows == 0 {
        return Err(DisappearError::InvalidArguments("--windows must be at least 1".to_string()));
    }

    let host = SimulatedHost::new();
    host.set_time_factor(args.time_factor);

    let windows: Vec<WindowId> = (0..args.windows)
        .map(|_| host.add_window(SimWindow::normal(&args.class, args.size.into())))
        .collect();

    let mut effect = DisappearEffect::new(&host, config);
    for &window in &windows {
        effect.handle_event(&host, EffectEvent::WindowAdded(window));
    }
    for &window in &windows {
        host.close_window(window);
        effect.handle_event(&host, EffectEvent::WindowClosed(window));
    }
    let animated: Vec<bool> = windows.iter().map(|&w| effect.animations().contains(w)).collect();

    let delta = frame_delta(args.frame_ms);
    let delete_at = args.delete_at.map(Duration::from_millis);
    let max_frames = args.frames.unwrap_or(MAX_FRAMES);

    let mut samples = Vec::new();
    let mut now = Duration::ZERO;
    let mut deleted = false;
    let mut frame = 0;
    // A compositor keeps painting for as long as the effect asks it to
    let mut repaint = effect.is_active();

    while repaint && frame < max_frames {
        frame += 1;
        now += delta;

        if !deleted && delete_at.is_some_and(|at| now >= at) {
            for &window in &windows {
                host.delete_window(window);
                effect.handle_event(&host, EffectEvent::WindowDeleted(window));
            }
            deleted = true;
        }

        let screen = effect.pre_paint_screen(delta);
        if screen.transformed_windows {
            for &window in &windows {
                if !effect.pre_paint_window(window).transformed {
                    continue;
                }
                let Some(transform) = effect.paint_window(&host, window) else {
                    continue;
                };
                let progress = effect
                    .animations()
                    .get(window)
                    .map_or(1.0, |animation| animation.timeline().progress());

                samples.push(FrameSample {
                    frame,
                    time_ms: u64::try_from(now.as_millis()).unwrap_or(u64::MAX),
                    window,
                    progress,
                    x_scale: transform.x_scale,
                    y_scale: transform.y_scale,
                    x_translation: transform.x_translation,
                    y_translation: transform.y_translation,
                    opacity: transform.opacity,
                });
            }
        }
        repaint = effect.post_paint_screen().repaint_full;
    }

    let unfinished = repaint;

    // Ending the simulation drops the remaining animations and their pins
    drop(effect);

    let summaries = windows
        .iter()
        .zip(animated)
        .map(|(&window, animated)| {
            let refs = host.ref_counts(window);
            WindowSummary {
                window,
                animated,
                acquired: refs.acquired,
                released: refs.released,
            }
        })
        .collect();

    tracing::debug!(frames = frame, unfinished, "simulation finished");

    Ok(SimulationReport {
        frames: samples,
        windows: summaries,
        painted_frames: frame,
        unfinished,
    })
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the arguments are out of range or the report cannot
/// be serialized.
pub fn execute(args: &SimulateArgs, custom_path: Option<&Path>) -> Result<(), DisappearError> {
    let (config, _) = load_or_default(custom_path);
    let report = simulate(args, &config)?;

    if args.json {
        output::print_json(&serde_json::to_value(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Prints the report as a frame table followed by the reference summary.
fn print_report(report: &SimulationReport) {
    #[derive(Tabled)]
    struct FrameRow {
        #[tabled(rename = "Frame")]
        frame: usize,
        #[tabled(rename = "Time")]
        time: String,
        #[tabled(rename = "Window")]
        window: String,
        #[tabled(rename = "Progress")]
        progress: String,
        #[tabled(rename = "Scale")]
        scale: String,
        #[tabled(rename = "Translation")]
        translation: String,
        #[tabled(rename = "Opacity")]
        opacity: String,
    }

    #[derive(Tabled)]
    struct WindowRow {
        #[tabled(rename = "Window")]
        window: String,
        #[tabled(rename = "Animated")]
        animated: String,
        #[tabled(rename = "Acquired")]
        acquired: u32,
        #[tabled(rename = "Released")]
        released: u32,
    }

    if report.frames.is_empty() {
        println!("{}", "No window was animated.".dimmed());
    } else {
        let rows: Vec<FrameRow> = report
            .frames
            .iter()
            .map(|s| FrameRow {
                frame: s.frame,
                time: format!("{}ms", s.time_ms),
                window: s.window.to_string(),
                progress: format!("{:.0}%", s.progress * 100.0),
                scale: format!("{:.3} x {:.3}", s.x_scale, s.y_scale),
                translation: format!("{:.1}, {:.1}", s.x_translation, s.y_translation),
                opacity: format!("{:.3}", s.opacity),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(0..2)).with(Alignment::right()))
            .with(Modify::new(Columns::new(3..7)).with(Alignment::right()))
            .to_string();

        println!("{}", format!("Frames ({})", report.frames.len()).bold());
        println!("{table}");
    }

    let rows: Vec<WindowRow> = report
        .windows
        .iter()
        .map(|w| WindowRow {
            window: w.window.to_string(),
            animated: output::format_bool(w.animated),
            acquired: w.acquired,
            released: w.released,
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..2)).with(Alignment::center()))
        .with(Modify::new(Columns::new(2..4)).with(Alignment::right()))
        .to_string();

    println!();
    println!("{}", "Windows".bold());
    println!("{table}");

    if report.unfinished {
        println!("{}", "Stopped before all animations finished.".yellow());
    }
}
