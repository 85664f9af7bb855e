//! Knot Saver entry point
//!
//! Native headless driver: runs the animation at the configured frame rate
//! with a few seeded control points and logs what a renderer would draw.
//!
//! Usage: `knot-saver [settings.json] [frames]`

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use knot_saver::renderer::{
    HueCycle, curve_vertices, help_overlay, point_vertices, status_label, vertex_bytes,
};
use knot_saver::sim::{AnimationController, FrameInput, InputEvent, Vector2, step};
use knot_saver::Settings;

/// Frames to run when none are given on the command line (10 seconds at 60 FPS)
const DEFAULT_FRAMES: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Knot Saver (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Seed: {}", seed);

    let mut controller = AnimationController::from_settings(&settings, seed);
    let bounds = settings.bounds();
    let mut hue = HueCycle::new(settings.hue_step);
    let frame_time = Duration::from_secs_f64(settings.frame_dt());

    // Stand-in for user input: a pentagon of clicks around the window center,
    // unpause, and open the help overlay
    let center = Vector2::new(settings.width as f64 / 2.0, settings.height as f64 / 2.0);
    let radius = settings.width.min(settings.height) as f64 / 3.0;
    let mut input = FrameInput::clicks((0..5).map(|i| {
        let theta = i as f64 / 5.0 * std::f64::consts::TAU;
        center + Vector2::new(theta.cos(), theta.sin()) * radius
    }));
    if controller.is_paused() {
        input.push(InputEvent::TogglePause);
    }
    input.push(InputEvent::ToggleHelp);

    let mut show_help = false;
    for frame in 0..frames {
        let started = Instant::now();

        let outcome = step(&mut controller, &input, bounds);
        if outcome.quit {
            break;
        }
        if outcome.toggle_help {
            show_help = !show_help;
        }
        input = FrameInput::default();

        let color = hue.advance();
        let curve = curve_vertices(controller.current_curve(), settings.line_width, color);
        let points = point_vertices(
            &controller.current_control_points(),
            settings.point_radius,
            color,
        );
        let status = status_label(controller.resolution());
        let help = show_help.then(|| help_overlay(controller.resolution()));

        if frame % settings.target_fps as u64 == 0 {
            log::info!(
                "frame {}: {} | {} curve bytes, {} point bytes, hue {}",
                frame,
                status.text,
                vertex_bytes(&curve).len(),
                vertex_bytes(&points).len(),
                hue.hue
            );
            if let Some(help) = &help {
                log::info!(
                    "help overlay: {} vertices, {} labels",
                    help.vertices.len(),
                    help.labels.len()
                );
            }
        }

        if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!("Knot Saver finished");
}
