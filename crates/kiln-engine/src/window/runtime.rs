use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App, AppConfig, AppControl, Application, ConfigurationError};
use crate::device::{ContextKind, GpuContext, GpuInit, RenderContext};
use crate::input::platform::WinitTranslator;
use crate::input::{InputTarget, RawInput};
use crate::resource::{load_bundle, Fetch, ResourceBundle, Resources};
use crate::time::HostTime;

use super::host::Host;

/// Entry point for native applications.
pub struct Runtime;

impl Runtime {
    /// Loads `bundle`, opens a window and runs `app` until it exits or the
    /// window is closed.
    pub fn run<A>(config: AppConfig, bundle: &ResourceBundle, fetcher: &dyn Fetch, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        Self::run_with(config, GpuInit::default(), bundle, fetcher, app)
    }

    /// Like [`run`](Self::run), with explicit GPU parameters.
    pub fn run_with<A>(
        config: AppConfig,
        gpu_init: GpuInit,
        bundle: &ResourceBundle,
        fetcher: &dyn Fetch,
        app: A,
    ) -> Result<()>
    where
        A: App + 'static,
    {
        config.validate()?;
        if config.context == ContextKind::TwoDVector {
            return Err(ConfigurationError::UnsupportedByHost(config.context).into());
        }

        let resources = load_bundle(bundle, fetcher, config.strict, |p| {
            log::info!("loading resources [{}/{}] {}", p.loaded, p.total, p.src);
        })?;

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, app, resources);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Host services backed by the window.
struct WinitHost {
    window: Arc<Window>,
    time: HostTime,
}

impl Host for WinitHost {
    fn now_ms(&self) -> f64 {
        self.time.now_ms()
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_fullscreen(&mut self, enable: bool) -> bool {
        let mode = enable.then_some(Fullscreen::Borderless(None));
        self.window.set_fullscreen(mode);
        true
    }
}

/// Values consumed when the window is created.
struct Pending<A> {
    app: A,
    resources: Resources,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: AppConfig,
    gpu_init: GpuInit,
    pending: Option<Pending<A>>,

    window: Option<Arc<Window>>,
    application: Option<Application<A>>,
    surface: InputTarget,
    translator: WinitTranslator,
    raw: Vec<RawInput>,
    time: HostTime,

    error: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: AppConfig, gpu_init: GpuInit, app: A, resources: Resources) -> Self {
        let surface = config.surface_or_default().id;
        Self {
            config,
            gpu_init,
            pending: Some(Pending { app, resources }),
            window: None,
            application: None,
            surface,
            translator: WinitTranslator::new(),
            raw: Vec::new(),
            time: HostTime::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(Pending { app, resources }) = self.pending.take() else {
            return Ok(());
        };

        let surface = self.config.surface_or_default();
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(surface.width as f64, surface.height as f64));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let context: Option<Box<dyn RenderContext>> = match self.config.context {
            kind @ (ContextKind::TwoD | ContextKind::ThreeD) => {
                let init = self.gpu_init.clone();
                match pollster::block_on(GpuContext::new(window.clone(), kind, init)) {
                    Ok(gpu) => Some(Box::new(gpu) as Box<dyn RenderContext>),
                    Err(e) => {
                        log::warn!("GPU initialization failed: {e:#}");
                        None
                    }
                }
            }
            ContextKind::TwoDVector | ContextKind::None => None,
        };

        let host = WinitHost {
            window: window.clone(),
            time: self.time,
        };

        let mut application =
            Application::new(self.config.clone(), app, Box::new(host), context, resources)?;

        let (w, h, scale) = logical_size(&window, window.inner_size());
        application.resize(w, h, scale);

        window.request_redraw();
        self.window = Some(window);
        self.application = Some(application);
        Ok(())
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e.context("failed to start application"));
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(application) = &self.application else {
            return;
        };
        if application.exit_requested() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);
        if application.wants_frame() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let (Some(window), Some(application)) = (&self.window, &mut self.application) else {
            return;
        };

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                event_loop.exit();
                return;
            }

            WindowEvent::Resized(size) => {
                let (w, h, scale) = logical_size(window, *size);
                if application.resize(w, h, scale) {
                    window.request_redraw();
                }
                return;
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let (w, h, scale) = logical_size(window, window.inner_size());
                if application.resize(w, h, scale) {
                    window.request_redraw();
                }
                return;
            }

            WindowEvent::RedrawRequested => {
                if application.frame(self.time.now_ms()) == AppControl::Exit {
                    event_loop.exit();
                }
                return;
            }

            _ => {}
        }

        self.translator
            .translate(&event, self.time.now_ms(), &mut self.raw);
        for raw in self.raw.drain(..) {
            application.handle_input(self.surface, raw);
        }

        if application.exit_requested() {
            event_loop.exit();
        }
    }
}

/// Logical window size and scale factor for a physical size.
fn logical_size(window: &Window, size: PhysicalSize<u32>) -> (f32, f32, f32) {
    let scale = window.scale_factor();
    let logical: LogicalSize<f64> = size.to_logical(scale);
    (logical.width as f32, logical.height as f32, scale as f32)
}
