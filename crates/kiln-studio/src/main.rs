use anyhow::Result;

use kiln_engine::coords::ColorRgba;
use kiln_engine::core::{App, AppConfig, AppControl, AppCtx};
use kiln_engine::device::ContextKind;
use kiln_engine::input::{Key, KeyEvent, KeyEventKind, PointerEvent, PointerEventKind, TouchEvent};
use kiln_engine::logging::{init_logging, LoggingConfig};
use kiln_engine::resource::{FileFetcher, Resource, ResourceBundle, ResourceRequest};
use kiln_engine::time::{ClockEvent, ClockEventKind};
use kiln_engine::window::{PlatformFeature, Runtime};

/// Clears the window with a color driven by pointer, touches and time.
struct Studio {
    background: [f32; 3],
    pressed: [f32; 3],
    touch: [f32; 3],
    fullscreen: bool,
    paused: bool,
    stopped: bool,
}

impl Default for Studio {
    fn default() -> Self {
        Self {
            background: [0.05, 0.06, 0.09],
            pressed: [0.85, 0.35, 0.2],
            touch: [0.2, 0.6, 0.85],
            fullscreen: false,
            paused: false,
            stopped: false,
        }
    }
}

fn rgb(value: &serde_json::Value) -> Option<[f32; 3]> {
    let arr = value.as_array()?;
    let mut out = [0.0; 3];
    for (slot, v) in out.iter_mut().zip(arr) {
        *slot = v.as_f64()? as f32;
    }
    Some(out)
}

impl App for Studio {
    fn setup(&mut self, ctx: &mut AppCtx<'_>) {
        if let Some(Resource::Text(motd)) = ctx.resources.take("motd") {
            log::info!("{}", motd.trim());
        }
        if let Some(palette) = ctx.resources.json("palette") {
            if let Some(c) = rgb(&palette["background"]) {
                self.background = c;
            }
            if let Some(c) = rgb(&palette["pressed"]) {
                self.pressed = c;
            }
            if let Some(c) = rgb(&palette["touch"]) {
                self.touch = c;
            }
        }
        let size = ctx.window_size();
        log::info!("surface {}x{} (aspect {:.3})", size.x, size.y, ctx.window_aspect_ratio());
    }

    fn update(&mut self, ctx: &mut AppCtx<'_>) -> AppControl {
        let n = ctx.pointer.normalized;
        let pulse = (ctx.seconds_elapsed() as f32 * 1.5).sin() * 0.5 + 0.5;

        let base = if !ctx.touches.is_empty() {
            self.touch
        } else if ctx.pointer.down {
            self.pressed
        } else {
            self.background
        };
        let color = ColorRgba::new(
            (base[0] + n.x * 0.3).min(1.0),
            (base[1] + n.y * 0.3).min(1.0),
            (base[2] + pulse * 0.15).min(1.0),
            1.0,
        );

        if ctx.frames_elapsed() % 300 == 0 {
            log::debug!(
                "frame {} at {:.2}s (dt {:.4}s)",
                ctx.frames_elapsed(),
                ctx.seconds_elapsed(),
                ctx.delta()
            );
        }

        if let Some(gfx) = ctx.render_context() {
            match gfx.clear(color) {
                Err(e) if e.is_fatal() => {
                    log::error!("surface lost for good, exiting");
                    return AppControl::Exit;
                }
                Err(e) => log::debug!("frame not presented: {e:?}"),
                Ok(()) => {}
            }
        }
        AppControl::Continue
    }

    fn on_pointer(&mut self, event: &PointerEvent, _ctx: &mut AppCtx<'_>) {
        match event.kind {
            PointerEventKind::Press | PointerEventKind::Release => {
                log::info!(
                    "{} {:?} at ({:.0}, {:.0})",
                    event.kind.as_str(),
                    event.state.button,
                    event.state.position.x,
                    event.state.position.y
                );
            }
            PointerEventKind::Wheel => {
                log::info!("wheel {:+}", event.state.wheel_direction);
            }
            _ => {}
        }
    }

    fn on_touch(&mut self, event: &TouchEvent, _ctx: &mut AppCtx<'_>) {
        log::debug!("{} #{}", event.kind.as_str(), event.contact.id);
    }

    fn on_key(&mut self, event: &KeyEvent, ctx: &mut AppCtx<'_>) {
        if event.kind != KeyEventKind::Down || event.data.repeat || event.data.modifiers.any() {
            return;
        }
        match event.data.key {
            Key::Escape => ctx.exit(),
            Key::F => {
                self.fullscreen = !self.fullscreen;
                ctx.set_fullscreen(self.fullscreen);
            }
            Key::Space if !self.stopped => {
                if self.paused {
                    ctx.resume_update();
                } else {
                    ctx.pause_update();
                }
            }
            Key::S if !self.stopped => ctx.stop_update(),
            Key::R if self.stopped => ctx.restart_update(),
            _ => {}
        }
    }

    fn on_clock(&mut self, event: &ClockEvent, _ctx: &mut AppCtx<'_>) {
        log::info!("{} at {:.0}ms", event.kind.as_str(), event.timestamp);
        match event.kind {
            ClockEventKind::Pause => self.paused = true,
            ClockEventKind::Resume => self.paused = false,
            ClockEventKind::Stop => self.stopped = true,
            ClockEventKind::Start => {
                self.stopped = false;
                self.paused = false;
            }
        }
    }

    fn on_feature_unavailable(&mut self, feature: PlatformFeature) {
        log::warn!("{feature:?} unavailable, continuing without it");
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = AppConfig::new()
        .with_context(ContextKind::ThreeD)
        .with_title("kiln studio")
        .with_initial_size(960.0, 600.0)
        .strict(false);

    let bundle = ResourceBundle::new()
        .with("palette", ResourceRequest::json("palette.json"))
        .with("motd", ResourceRequest::text("motd.txt"));
    let fetcher = FileFetcher::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));

    Runtime::run(config, &bundle, &fetcher, Studio::default())
}
