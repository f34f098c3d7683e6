use crate::device::{ContextKind, RenderContext};
use crate::event::ListenerId;
use crate::input::{
    InputDevice, InputTarget, KeyEvent, KeyInput, PointerDevice, PointerEvent, RawInput, TouchEvent,
    TouchSet,
};
use crate::resource::{load_bundle, Fetch, LoadProgress, ResourceBundle, Resources};
use crate::KilnError;
use crate::time::{Clock, ClockEvent, ClockEventKind, FrameTime};
use crate::window::{FullscreenOutcome, Host, PlatformFeature, Viewport};

use super::app::{App, AppControl};
use super::config::{AppConfig, ConfigurationError, ResolvedInputTargets};
use super::ctx::{AppCtx, Command};

/// A running application: user code plus the components it is wired to.
///
/// The host drives it by calling [`frame`](Self::frame) once per scheduled
/// tick while [`wants_frame`](Self::wants_frame) is true, forwarding raw
/// input through [`handle_input`](Self::handle_input) and surface changes
/// through [`resize`](Self::resize).
///
/// Dropping the application releases it; [`into_parts`](Self::into_parts)
/// recovers the user value and its resources.
pub struct Application<A: App> {
    app: A,
    config: AppConfig,
    targets: ResolvedInputTargets,
    host: Box<dyn Host>,
    context: Option<Box<dyn RenderContext>>,

    viewport: Viewport,
    clock: Clock,
    pointer: PointerDevice,
    touches: TouchSet,
    keyboard: KeyInput,
    resources: Resources,

    commands: Vec<Command>,
    frame_requested: bool,
    exit_requested: bool,
}

impl<A: App> Application<A> {
    /// Validates `config`, starts the clock and runs `setup`.
    ///
    /// A missing `context` for a kind that needs one is reported through
    /// [`App::on_feature_unavailable`]; the application still starts.
    /// Non-looping applications run `update` once, right after `setup`.
    pub fn new(
        config: AppConfig,
        app: A,
        host: Box<dyn Host>,
        context: Option<Box<dyn RenderContext>>,
        resources: Resources,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;

        if let Some(ctx) = &context {
            if ctx.kind() != config.context {
                return Err(ConfigurationError::ContextMismatch {
                    expected: config.context,
                    actual: ctx.kind(),
                });
            }
        }

        let surface = config.surface_or_default();
        let targets = config.resolve_input_targets();
        let mut this = Self {
            app,
            targets,
            host,
            context,
            viewport: Viewport::new(surface.width, surface.height),
            clock: Clock::new(),
            pointer: PointerDevice::new(),
            touches: TouchSet::new(),
            keyboard: KeyInput::new(),
            resources,
            commands: Vec::new(),
            frame_requested: false,
            exit_requested: false,
            config,
        };

        if this.context.is_none() && this.config.context != ContextKind::None {
            log::warn!("{} context unavailable", this.config.context);
            this.app
                .on_feature_unavailable(PlatformFeature::RenderContext(this.config.context));
        }

        let now = this.host.now_ms();
        this.clock.start(now);
        log::info!(
            "application started: {} context, {}x{}",
            this.config.context,
            surface.width,
            surface.height
        );

        {
            let (app, mut ctx) = this.split();
            app.setup(&mut ctx);
        }
        this.apply_commands();

        if this.config.looping {
            this.frame_requested = true;
        } else {
            let control = {
                let (app, mut ctx) = this.split();
                app.update(&mut ctx)
            };
            if control == AppControl::Exit {
                this.exit_requested = true;
            }
            this.apply_commands();
        }

        Ok(this)
    }

    /// Loads `bundle` through `fetcher`, then builds the application with the
    /// loaded resources. Honors `config.strict`.
    pub fn launch(
        config: AppConfig,
        app: A,
        host: Box<dyn Host>,
        context: Option<Box<dyn RenderContext>>,
        bundle: &ResourceBundle,
        fetcher: &dyn Fetch,
        on_progress: impl FnMut(&LoadProgress),
    ) -> Result<Self, KilnError> {
        config.validate()?;
        let resources = load_bundle(bundle, fetcher, config.strict, on_progress)?;
        Ok(Self::new(config, app, host, context, resources)?)
    }

    /// True while the host should schedule another [`frame`](Self::frame).
    pub fn wants_frame(&self) -> bool {
        self.frame_requested && self.clock.is_running() && !self.exit_requested
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Advances the clock to `timestamp` (host ms) and runs `update`.
    ///
    /// Does nothing unless a frame is wanted.
    pub fn frame(&mut self, timestamp: f64) -> AppControl {
        if self.wants_frame() {
            let time = self.clock.tick(timestamp);
            let control = {
                let (app, mut ctx) = self.split_with(time);
                app.update(&mut ctx)
            };
            if control == AppControl::Exit {
                self.exit_requested = true;
            }
            self.apply_commands();
        }

        if self.exit_requested {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    /// Feeds one raw event delivered to `target`.
    ///
    /// Returns `false` when the event was ignored: the application is not
    /// interactive, or `target` is not the target the receiving device is
    /// wired to.
    pub fn handle_input(&mut self, target: InputTarget, raw: RawInput) -> bool {
        if !self.config.interactive {
            return false;
        }

        let device = raw.device();
        let expected = match device {
            InputDevice::Pointer => self.targets.pointer,
            InputDevice::Touch => self.targets.touch,
            InputDevice::Keyboard => self.targets.keyboard,
        };
        if target != expected {
            log::trace!("{device:?} input from {target:?} ignored, wired to {expected:?}");
            return false;
        }

        let size = self.viewport.size();
        match raw {
            RawInput::PointerPress { x, y, button } => {
                let ev = self.pointer.on_press(x, y, button, size);
                self.deliver_pointer(&ev);
            }
            RawInput::PointerMove { x, y } => {
                let ev = self.pointer.on_move(x, y, size);
                self.deliver_pointer(&ev);
            }
            RawInput::PointerRelease { x, y, button } => {
                let ev = self.pointer.on_release(x, y, button, size);
                self.deliver_pointer(&ev);
            }
            RawInput::PointerEnter => {
                let ev = self.pointer.on_enter();
                self.deliver_pointer(&ev);
            }
            RawInput::PointerExit => {
                let ev = self.pointer.on_exit();
                self.deliver_pointer(&ev);
            }
            RawInput::Wheel(delta) => {
                let ev = self.pointer.on_wheel(delta);
                self.deliver_pointer(&ev);
            }
            RawInput::TouchesBegin(list) => {
                let evs = self.touches.on_touches_begin(&list, size);
                self.deliver_touches(&evs);
            }
            RawInput::TouchesMove(list) => {
                let evs = self.touches.on_touches_move(&list, size);
                self.deliver_touches(&evs);
            }
            RawInput::TouchesEnd(list) => {
                let evs = self.touches.on_touches_end(&list);
                self.deliver_touches(&evs);
            }
            RawInput::Key { kind, data } => {
                let ev = self.keyboard.on_key(kind, data);
                let (app, mut ctx) = self.split();
                app.on_key(&ev, &mut ctx);
            }
        }

        self.apply_commands();
        true
    }

    /// Resizes the viewport to `width x height` logical pixels at
    /// `content_scale`, then resizes the context's backing surface if it
    /// needs it. Returns `false` when nothing changed.
    pub fn resize(&mut self, width: f32, height: f32, content_scale: f32) -> bool {
        let Some(size) = self.viewport.resize(width, height, content_scale) else {
            return false;
        };
        if let Some(ctx) = self.context.as_deref_mut() {
            if ctx.requires_size_sync() {
                ctx.sync_size(size.x.round() as u32, size.y.round() as u32);
            }
        }
        true
    }

    /// Enters or leaves fullscreen. A host without fullscreen support is
    /// reported through [`App::on_feature_unavailable`].
    pub fn set_fullscreen(&mut self, enable: bool) -> FullscreenOutcome {
        let outcome = self.viewport.set_fullscreen(enable, self.host.as_mut());
        if outcome == FullscreenOutcome::Unsupported {
            self.app.on_feature_unavailable(PlatformFeature::Fullscreen);
        }
        outcome
    }

    // ── update loop control ───────────────────────────────────────────────

    /// Stops the frame loop. Only valid while looping with a frame requested.
    pub fn stop_update(&mut self) -> bool {
        if !self.config.looping || !self.frame_requested {
            return false;
        }
        self.frame_requested = false;
        let now = self.host.now_ms();
        if self.clock.stop(now) {
            self.deliver_clock(ClockEventKind::Stop, now);
        }
        self.apply_commands();
        true
    }

    /// Resets the clock and restarts the frame loop. Only valid while looping
    /// with no frame requested.
    pub fn restart_update(&mut self) -> bool {
        if !self.config.looping || self.frame_requested {
            return false;
        }
        let now = self.host.now_ms();
        self.clock.restart(now);
        self.frame_requested = true;
        self.deliver_clock(ClockEventKind::Start, now);
        self.apply_commands();
        true
    }

    /// Suspends frames without stopping the loop; elapsed time keeps running.
    pub fn pause_update(&mut self) -> bool {
        let now = self.host.now_ms();
        if !self.clock.pause(now) {
            return false;
        }
        self.deliver_clock(ClockEventKind::Pause, now);
        self.apply_commands();
        true
    }

    pub fn resume_update(&mut self) -> bool {
        let now = self.host.now_ms();
        if !self.clock.resume(now) {
            return false;
        }
        self.deliver_clock(ClockEventKind::Resume, now);
        self.apply_commands();
        true
    }

    // ── subscriptions ─────────────────────────────────────────────────────

    pub fn subscribe_pointer(&mut self, f: impl FnMut(&PointerEvent) + 'static) -> ListenerId {
        self.pointer.subscribe(f)
    }

    pub fn unsubscribe_pointer(&mut self, id: ListenerId) -> bool {
        self.pointer.unsubscribe(id)
    }

    pub fn subscribe_touch(&mut self, f: impl FnMut(&TouchEvent) + 'static) -> ListenerId {
        self.touches.subscribe(f)
    }

    pub fn unsubscribe_touch(&mut self, id: ListenerId) -> bool {
        self.touches.unsubscribe(id)
    }

    pub fn subscribe_key(&mut self, f: impl FnMut(&KeyEvent) + 'static) -> ListenerId {
        self.keyboard.subscribe(f)
    }

    pub fn unsubscribe_key(&mut self, id: ListenerId) -> bool {
        self.keyboard.unsubscribe(id)
    }

    pub fn subscribe_clock(&mut self, f: impl FnMut(&ClockEvent) + 'static) -> ListenerId {
        self.clock.subscribe(f)
    }

    pub fn unsubscribe_clock(&mut self, id: ListenerId) -> bool {
        self.clock.unsubscribe(id)
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn input_targets(&self) -> ResolvedInputTargets {
        self.targets
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn pointer(&self) -> &PointerDevice {
        &self.pointer
    }

    pub fn touches(&self) -> &TouchSet {
        &self.touches
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn render_context(&mut self) -> Option<&mut (dyn RenderContext + 'static)> {
        self.context.as_deref_mut()
    }

    pub fn seconds_elapsed(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    pub fn frames_elapsed(&self) -> u64 {
        self.clock.frame_count()
    }

    pub fn delta(&self) -> f64 {
        self.clock.delta()
    }

    /// Tears the application down, returning the user value and resources.
    pub fn into_parts(self) -> (A, Resources) {
        log::debug!("application released after {} frames", self.clock.frame_count());
        (self.app, self.resources)
    }

    // ── internals ─────────────────────────────────────────────────────────

    /// Context for callbacks outside `update`, where no frame is in flight.
    fn split(&mut self) -> (&mut A, AppCtx<'_>) {
        self.split_with(FrameTime::default())
    }

    fn split_with(&mut self, time: FrameTime) -> (&mut A, AppCtx<'_>) {
        let Self {
            app,
            viewport,
            clock,
            pointer,
            touches,
            resources,
            context,
            commands,
            ..
        } = self;

        let ctx = AppCtx {
            viewport,
            clock,
            time,
            pointer: pointer.state(),
            touches,
            resources,
            context,
            commands,
        };
        (app, ctx)
    }

    fn deliver_pointer(&mut self, ev: &PointerEvent) {
        let (app, mut ctx) = self.split();
        app.on_pointer(ev, &mut ctx);
    }

    fn deliver_touches(&mut self, evs: &[TouchEvent]) {
        let (app, mut ctx) = self.split();
        for ev in evs {
            app.on_touch(ev, &mut ctx);
        }
    }

    fn deliver_clock(&mut self, kind: ClockEventKind, timestamp: f64) {
        let ev = ClockEvent { kind, timestamp };
        let (app, mut ctx) = self.split();
        app.on_clock(&ev, &mut ctx);
    }

    /// Applies buffered commands, including any queued while applying.
    fn apply_commands(&mut self) {
        while !self.commands.is_empty() {
            let batch = std::mem::take(&mut self.commands);
            for cmd in batch {
                match cmd {
                    Command::StopUpdate => {
                        self.stop_update();
                    }
                    Command::RestartUpdate => {
                        self.restart_update();
                    }
                    Command::PauseUpdate => {
                        self.pause_update();
                    }
                    Command::ResumeUpdate => {
                        self.resume_update();
                    }
                    Command::Fullscreen(enable) => {
                        self.set_fullscreen(enable);
                    }
                    Command::Exit => {
                        log::debug!("exit requested by application");
                        self.exit_requested = true;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SurfaceTarget;
    use crate::coords::{ColorRgba, Vec2};
    use crate::device::PresentError;
    use crate::input::{Key, KeyData, KeyEventKind, Modifiers, MouseButton, PointerEventKind, RawTouch};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const SURFACE: InputTarget = InputTarget(1);

    // ── fakes ─────────────────────────────────────────────────────────────

    /// Host with a hand-driven clock.
    #[derive(Clone, Default)]
    struct FakeHost {
        now: Rc<Cell<f64>>,
        fullscreen_supported: bool,
        fullscreen: Rc<Cell<bool>>,
    }

    impl Host for FakeHost {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen.get()
        }

        fn set_fullscreen(&mut self, enable: bool) -> bool {
            if self.fullscreen_supported {
                self.fullscreen.set(enable);
            }
            self.fullscreen_supported
        }
    }

    struct FakeContext {
        kind: ContextKind,
        synced: Rc<RefCell<Vec<(u32, u32)>>>,
    }

    impl RenderContext for FakeContext {
        fn kind(&self) -> ContextKind {
            self.kind
        }

        fn requires_size_sync(&self) -> bool {
            true
        }

        fn sync_size(&mut self, width: u32, height: u32) {
            self.synced.borrow_mut().push((width, height));
        }

        fn clear(&mut self, _color: ColorRgba) -> Result<(), PresentError> {
            Ok(())
        }
    }

    /// Records every callback it receives.
    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
        stop_after_frames: Option<u64>,
        restart_on_stop: bool,
        fullscreen_on_setup: bool,
        last_dt: f64,
        callback_dt: Vec<f64>,
        missing: Vec<PlatformFeature>,
    }

    impl App for Recorder {
        fn setup(&mut self, ctx: &mut AppCtx<'_>) {
            self.log.push("setup".into());
            if self.fullscreen_on_setup {
                ctx.set_fullscreen(true);
            }
        }

        fn update(&mut self, ctx: &mut AppCtx<'_>) -> AppControl {
            self.log.push(format!("update {}", ctx.frames_elapsed()));
            self.last_dt = ctx.time.dt;
            if Some(ctx.frames_elapsed()) == self.stop_after_frames {
                ctx.stop_update();
            }
            AppControl::Continue
        }

        fn on_pointer(&mut self, event: &PointerEvent, ctx: &mut AppCtx<'_>) {
            assert_eq!(*ctx.pointer, event.state);
            self.callback_dt.push(ctx.time.dt);
            self.log.push(event.kind.as_str().to_string());
        }

        fn on_touch(&mut self, event: &TouchEvent, _ctx: &mut AppCtx<'_>) {
            self.log.push(format!("{} {}", event.kind.as_str(), event.contact.id));
        }

        fn on_key(&mut self, event: &KeyEvent, ctx: &mut AppCtx<'_>) {
            self.callback_dt.push(ctx.time.dt);
            self.log.push(event.kind.as_str().to_string());
        }

        fn on_clock(&mut self, event: &ClockEvent, ctx: &mut AppCtx<'_>) {
            self.log.push(event.kind.as_str().to_string());
            self.callback_dt.push(ctx.time.dt);
            if event.kind == ClockEventKind::Stop && self.restart_on_stop {
                ctx.restart_update();
            }
        }

        fn on_feature_unavailable(&mut self, feature: PlatformFeature) {
            self.missing.push(feature);
        }
    }

    fn config() -> AppConfig {
        AppConfig::new()
            .with_context(ContextKind::None)
            .with_surface(SurfaceTarget::container(SURFACE, 800.0, 600.0))
    }

    fn start(config: AppConfig, app: Recorder) -> (Application<Recorder>, FakeHost) {
        let host = FakeHost::default();
        let application =
            Application::new(config, app, Box::new(host.clone()), None, Resources::new()).unwrap();
        (application, host)
    }

    fn key(kind: KeyEventKind) -> RawInput {
        RawInput::Key {
            kind,
            data: KeyData {
                key: Key::A,
                code: 30,
                text: Some("a".into()),
                modifiers: Modifiers::default(),
                timestamp: 0.0,
                repeat: false,
            },
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn looping_app_updates_every_frame() {
        let (mut a, host) = start(config(), Recorder::default());
        assert!(a.wants_frame());

        host.now.set(16.0);
        a.frame(16.0);
        a.frame(32.0);

        assert_eq!(a.app().log, vec!["setup", "update 1", "update 2"]);
        assert_eq!(a.frames_elapsed(), 2);
        assert!((a.delta() - 0.016).abs() < 1e-12);
        assert!((a.app().last_dt - 0.016).abs() < 1e-12);
    }

    #[test]
    fn non_looping_app_updates_once_with_zero_delta() {
        let (mut a, _host) = start(config().looping(false), Recorder::default());

        assert!(!a.wants_frame());
        a.frame(16.0);
        assert_eq!(a.app().log, vec!["setup", "update 0"]);
        assert_eq!(a.app().last_dt, 0.0);
        assert!(!a.stop_update());
        assert!(!a.restart_update());
    }

    #[test]
    fn stop_and_restart_from_host() {
        let (mut a, host) = start(config(), Recorder::default());
        a.frame(16.0);

        host.now.set(20.0);
        assert!(a.stop_update());
        assert!(!a.stop_update());
        assert!(!a.wants_frame());
        a.frame(32.0);
        assert_eq!(a.frames_elapsed(), 1);

        host.now.set(1000.0);
        assert!(a.restart_update());
        assert!(!a.restart_update());
        assert_eq!(a.frames_elapsed(), 0);

        a.frame(1016.0);
        assert_eq!(a.frames_elapsed(), 1);
        assert!((a.seconds_elapsed() - 0.016).abs() < 1e-12);
        assert_eq!(
            a.app().log,
            vec!["setup", "update 1", "clock-stop", "clock-start", "update 1"]
        );
    }

    #[test]
    fn stop_requested_from_update_and_restart_from_clock_handler() {
        let app = Recorder {
            stop_after_frames: Some(2),
            restart_on_stop: true,
            ..Recorder::default()
        };
        let (mut a, _host) = start(config(), app);
        a.frame(16.0);
        a.frame(32.0);

        assert!(a.wants_frame());
        assert_eq!(a.frames_elapsed(), 0);
        assert_eq!(
            a.app().log,
            vec!["setup", "update 1", "update 2", "clock-stop", "clock-start"]
        );
    }

    #[test]
    fn pause_skips_frames_until_resume() {
        let (mut a, host) = start(config(), Recorder::default());
        a.frame(16.0);

        host.now.set(20.0);
        assert!(a.pause_update());
        a.frame(32.0);
        assert_eq!(a.frames_elapsed(), 1);

        host.now.set(500.0);
        assert!(a.resume_update());
        a.frame(516.0);
        assert_eq!(a.clock().frame_ms(), 16.0);
        assert!(a.app().log.contains(&"clock-pause".to_string()));
        assert!(a.app().log.contains(&"clock-resume".to_string()));
    }

    #[test]
    fn exit_from_update_is_reported() {
        struct Quitter;
        impl App for Quitter {
            fn setup(&mut self, _ctx: &mut AppCtx<'_>) {}
            fn update(&mut self, ctx: &mut AppCtx<'_>) -> AppControl {
                ctx.exit();
                AppControl::Continue
            }
        }

        let mut a = Application::new(
            config(),
            Quitter,
            Box::new(FakeHost::default()),
            None,
            Resources::new(),
        )
        .unwrap();
        assert_eq!(a.frame(16.0), AppControl::Exit);
        assert!(!a.wants_frame());
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[test]
    fn missing_context_is_reported_not_fatal() {
        let cfg = AppConfig::new()
            .with_context(ContextKind::ThreeD)
            .with_surface(SurfaceTarget::canvas(SURFACE, 10.0, 10.0));
        let (a, _host) = start(cfg, Recorder::default());

        assert_eq!(
            a.app().missing,
            vec![PlatformFeature::RenderContext(ContextKind::ThreeD)]
        );
        assert_eq!(a.app().log, vec!["setup"]);
    }

    #[test]
    fn invalid_config_and_mismatched_context_are_rejected() {
        let cfg = AppConfig::new()
            .with_context(ContextKind::TwoDVector)
            .with_surface(SurfaceTarget::canvas(SURFACE, 10.0, 10.0));
        let err = Application::new(
            cfg,
            Recorder::default(),
            Box::new(FakeHost::default()),
            None,
            Resources::new(),
        )
        .err();
        assert!(matches!(err, Some(ConfigurationError::IncompatibleSurface { .. })));

        let ctx = FakeContext { kind: ContextKind::TwoD, synced: Rc::default() };
        let err = Application::new(
            AppConfig::new(),
            Recorder::default(),
            Box::new(FakeHost::default()),
            Some(Box::new(ctx)),
            Resources::new(),
        )
        .err();
        assert_eq!(
            err,
            Some(ConfigurationError::ContextMismatch {
                expected: ContextKind::ThreeD,
                actual: ContextKind::TwoD,
            })
        );
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn pointer_input_reaches_app_and_subscribers() {
        let (mut a, _host) = start(config(), Recorder::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        a.subscribe_pointer(move |e| s.borrow_mut().push(e.kind));

        assert!(a.handle_input(
            SURFACE,
            RawInput::PointerPress { x: 100.0, y: 150.0, button: MouseButton::Left }
        ));
        assert!(a.handle_input(SURFACE, RawInput::PointerMove { x: 110.0, y: 150.0 }));

        assert_eq!(a.pointer().normalized(), Vec2::new(0.1375, 0.25));
        assert_eq!(a.pointer().delta(), Vec2::new(10.0, 0.0));
        assert_eq!(*seen.borrow(), vec![PointerEventKind::Press, PointerEventKind::Drag]);
        assert_eq!(a.app().log, vec!["setup", "press", "drag"]);
    }

    #[test]
    fn callbacks_outside_update_see_zero_frame_time() {
        let (mut a, host) = start(config(), Recorder::default());
        a.frame(16.0);
        assert!((a.app().last_dt - 0.016).abs() < 1e-12);

        a.handle_input(
            SURFACE,
            RawInput::PointerPress { x: 10.0, y: 10.0, button: MouseButton::Left },
        );
        a.handle_input(SURFACE, key(KeyEventKind::Down));
        host.now.set(20.0);
        a.stop_update();

        assert_eq!(a.app().callback_dt, vec![0.0, 0.0, 0.0]);
        assert_eq!(a.app().log, vec!["setup", "update 1", "press", "key-down", "clock-stop"]);
    }

    #[test]
    fn touches_follow_resized_viewport() {
        let (mut a, _host) = start(config(), Recorder::default());
        a.resize(400.0, 300.0, 2.0);

        a.handle_input(SURFACE, RawInput::TouchesBegin(vec![RawTouch::new(3, 200.0, 300.0)]));
        a.handle_input(SURFACE, RawInput::TouchesEnd(vec![]));

        assert!(a.touches().is_empty());
        assert_eq!(a.app().log, vec!["setup", "touch-begin 3", "touch-end 3"]);
    }

    #[test]
    fn non_interactive_ignores_input() {
        let (mut a, _host) = start(config().interactive(false), Recorder::default());

        assert!(!a.handle_input(SURFACE, RawInput::PointerMove { x: 1.0, y: 1.0 }));
        assert!(!a.handle_input(SURFACE, key(KeyEventKind::Down)));
        assert_eq!(a.pointer().position(), Vec2::zero());
        assert_eq!(a.app().log, vec!["setup"]);
    }

    #[test]
    fn input_from_other_target_is_ignored() {
        let cfg = config().with_keyboard_input(InputTarget(7));
        let (mut a, _host) = start(cfg, Recorder::default());

        assert!(!a.handle_input(SURFACE, key(KeyEventKind::Down)));
        assert!(a.handle_input(InputTarget(7), key(KeyEventKind::Down)));
        assert!(a.handle_input(InputTarget(7), key(KeyEventKind::Press)));
        assert!(!a.handle_input(InputTarget(7), RawInput::PointerEnter));
        assert!(a.handle_input(SURFACE, RawInput::PointerEnter));

        assert_eq!(a.app().log, vec!["setup", "key-down", "key-press", "enter"]);
    }

    // ── viewport ──────────────────────────────────────────────────────────

    #[test]
    fn resize_syncs_context_only_on_change() {
        let synced = Rc::new(RefCell::new(Vec::new()));
        let ctx = FakeContext { kind: ContextKind::TwoD, synced: synced.clone() };
        let cfg = AppConfig::new()
            .with_context(ContextKind::TwoD)
            .with_surface(SurfaceTarget::canvas(SURFACE, 800.0, 600.0));
        let mut a = Application::new(
            cfg,
            Recorder::default(),
            Box::new(FakeHost::default()),
            Some(Box::new(ctx)),
            Resources::new(),
        )
        .unwrap();

        assert!(a.resize(400.0, 300.0, 2.0));
        assert!(!a.resize(400.0, 300.0, 2.0));
        assert!(a.resize(500.0, 300.0, 1.5));

        assert_eq!(*synced.borrow(), vec![(800, 600), (750, 450)]);
        assert_eq!(a.viewport().size(), Vec2::new(750.0, 450.0));
        assert!(a.render_context().is_some());
    }

    #[test]
    fn fullscreen_from_setup_without_host_support() {
        let app = Recorder { fullscreen_on_setup: true, ..Recorder::default() };
        let (a, _host) = start(config(), app);

        assert!(a.viewport().is_fullscreen());
        assert_eq!(a.app().missing, vec![PlatformFeature::Fullscreen]);
    }

    #[test]
    fn fullscreen_with_host_support() {
        let host = FakeHost { fullscreen_supported: true, ..FakeHost::default() };
        let mut a = Application::new(
            config(),
            Recorder::default(),
            Box::new(host.clone()),
            None,
            Resources::new(),
        )
        .unwrap();

        assert_eq!(a.set_fullscreen(true), FullscreenOutcome::Applied);
        assert!(host.fullscreen.get());
        assert_eq!(a.set_fullscreen(true), FullscreenOutcome::Unchanged);
        assert!(a.app().missing.is_empty());
    }

    #[test]
    fn launch_loads_resources_before_setup() {
        struct Reader(Option<String>);
        impl App for Reader {
            fn setup(&mut self, ctx: &mut AppCtx<'_>) {
                self.0 = ctx.resources.text("motd").map(str::to_string);
            }
        }

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("motd.txt"), "welcome").unwrap();
        let fetcher = crate::resource::FileFetcher::new(dir.path());
        let bundle = ResourceBundle::new()
            .with("motd", crate::resource::ResourceRequest::text("motd.txt"));

        let a = Application::launch(
            config(),
            Reader(None),
            Box::new(FakeHost::default()),
            None,
            &bundle,
            &fetcher,
            |_| {},
        )
        .unwrap();
        assert_eq!(a.app().0.as_deref(), Some("welcome"));

        let missing = ResourceBundle::new()
            .with("gone", crate::resource::ResourceRequest::text("gone.txt"));
        let err = Application::launch(
            config(),
            Reader(None),
            Box::new(FakeHost::default()),
            None,
            &missing,
            &fetcher,
            |_| {},
        )
        .err();
        assert!(matches!(err, Some(KilnError::Resource(ref e)) if e.key == "gone"));
    }

    #[test]
    fn into_parts_returns_app_and_resources() {
        let (a, _host) = start(config(), Recorder::default());
        let (app, resources) = a.into_parts();
        assert_eq!(app.log, vec!["setup"]);
        assert!(resources.is_empty());
    }
}
