use std::fmt;

use crate::device::ContextKind;
use crate::input::InputTarget;

/// Invalid application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Context kind name not recognized.
    UnknownContextKind(String),
    /// Context kind cannot be hosted by the configured surface.
    IncompatibleSurface {
        context: ContextKind,
        surface: SurfaceKind,
    },
    /// Context kind the host runtime cannot provide at all.
    UnsupportedByHost(ContextKind),
    /// Supplied render context is not of the configured kind.
    ContextMismatch {
        expected: ContextKind,
        actual: ContextKind,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::UnknownContextKind(name) => {
                write!(f, "unknown context kind '{name}'")
            }
            ConfigurationError::IncompatibleSurface { context, surface } => {
                write!(f, "context '{context}' cannot be hosted by a {surface} surface")
            }
            ConfigurationError::UnsupportedByHost(kind) => {
                write!(f, "context '{kind}' is not supported by this host")
            }
            ConfigurationError::ContextMismatch { expected, actual } => {
                write!(f, "expected a '{expected}' context, got '{actual}'")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Kind of host surface the application renders into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SurfaceKind {
    /// Pixel surface for raster contexts.
    Canvas,
    /// Element that hosts retained vector content.
    Container,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SurfaceKind::Canvas => "canvas",
            SurfaceKind::Container => "container",
        })
    }
}

/// Surface supplied by the embedder.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceTarget {
    /// Input target identifying this surface.
    pub id: InputTarget,
    pub kind: SurfaceKind,
    /// Initial size in logical pixels.
    pub width: f32,
    pub height: f32,
}

impl SurfaceTarget {
    pub fn canvas(id: InputTarget, width: f32, height: f32) -> Self {
        Self { id, kind: SurfaceKind::Canvas, width, height }
    }

    pub fn container(id: InputTarget, width: f32, height: f32) -> Self {
        Self { id, kind: SurfaceKind::Container, width, height }
    }
}

/// Explicit input targets; `None` entries fall back to defaults.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct InputTargets {
    /// Shared target for every device without an explicit one.
    pub shared: Option<InputTarget>,
    pub pointer: Option<InputTarget>,
    pub touch: Option<InputTarget>,
    pub keyboard: Option<InputTarget>,
}

/// Input target each device listens on after defaults are applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolvedInputTargets {
    pub pointer: InputTarget,
    pub touch: InputTarget,
    pub keyboard: InputTarget,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub context: ContextKind,
    /// Surface to render into; `None` lets the host create one.
    pub surface: Option<SurfaceTarget>,
    pub input: InputTargets,
    /// Run `update` every frame. When false it runs once after `setup`.
    pub looping: bool,
    /// Accept input. When false every raw input event is ignored.
    pub interactive: bool,
    /// Abort start-up when a resource fails to load.
    pub strict: bool,
    /// Window title for native hosts.
    pub title: String,
    /// Size of a host-created surface, in logical pixels.
    pub initial_size: (f32, f32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            context: ContextKind::ThreeD,
            surface: None,
            input: InputTargets::default(),
            looping: true,
            interactive: true,
            strict: true,
            title: "kiln".to_string(),
            initial_size: (800.0, 600.0),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: ContextKind) -> Self {
        self.context = context;
        self
    }

    pub fn with_surface(mut self, surface: SurfaceTarget) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_shared_input(mut self, target: InputTarget) -> Self {
        self.input.shared = Some(target);
        self
    }

    pub fn with_pointer_input(mut self, target: InputTarget) -> Self {
        self.input.pointer = Some(target);
        self
    }

    pub fn with_touch_input(mut self, target: InputTarget) -> Self {
        self.input.touch = Some(target);
        self
    }

    pub fn with_keyboard_input(mut self, target: InputTarget) -> Self {
        self.input.keyboard = Some(target);
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_initial_size(mut self, width: f32, height: f32) -> Self {
        self.initial_size = (width, height);
        self
    }

    /// The configured surface, or the one a host creates when none is given:
    /// a container for `2d-vector` and `none`, a canvas otherwise, sized to
    /// `initial_size`.
    pub fn surface_or_default(&self) -> SurfaceTarget {
        if let Some(s) = self.surface {
            return s;
        }
        let (w, h) = self.initial_size;
        match self.context {
            ContextKind::TwoDVector | ContextKind::None => {
                SurfaceTarget::container(InputTarget::default(), w, h)
            }
            ContextKind::TwoD | ContextKind::ThreeD => {
                SurfaceTarget::canvas(InputTarget::default(), w, h)
            }
        }
    }

    /// Checks the context kind against the surface kind.
    ///
    /// Vector content cannot be hosted by a canvas, and raster contexts need one.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let surface = self.surface_or_default();
        let ok = match self.context {
            ContextKind::TwoDVector => surface.kind == SurfaceKind::Container,
            ContextKind::TwoD | ContextKind::ThreeD => surface.kind == SurfaceKind::Canvas,
            ContextKind::None => true,
        };
        if ok {
            Ok(())
        } else {
            Err(ConfigurationError::IncompatibleSurface {
                context: self.context,
                surface: surface.kind,
            })
        }
    }

    /// Applies input target defaults.
    ///
    /// shared = explicit shared, else the surface; pointer = explicit, else
    /// shared; touch = explicit, else pointer; keyboard = explicit, else shared.
    pub fn resolve_input_targets(&self) -> ResolvedInputTargets {
        let shared = self.input.shared.unwrap_or(self.surface_or_default().id);
        let pointer = self.input.pointer.unwrap_or(shared);
        let touch = self.input.touch.unwrap_or(pointer);
        let keyboard = self.input.keyboard.unwrap_or(shared);
        ResolvedInputTargets { pointer, touch, keyboard }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let c = AppConfig::default();
        assert_eq!(c.context, ContextKind::ThreeD);
        assert!(c.looping && c.interactive && c.strict);
        assert_eq!(c.initial_size, (800.0, 600.0));
        assert_eq!(c.surface_or_default().kind, SurfaceKind::Canvas);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn vector_context_gets_container_by_default() {
        let c = AppConfig::new().with_context(ContextKind::TwoDVector);
        assert_eq!(c.surface_or_default().kind, SurfaceKind::Container);
        assert!(c.validate().is_ok());
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn vector_context_on_canvas_is_rejected() {
        let c = AppConfig::new()
            .with_context(ContextKind::TwoDVector)
            .with_surface(SurfaceTarget::canvas(InputTarget(1), 100.0, 100.0));

        assert_eq!(
            c.validate(),
            Err(ConfigurationError::IncompatibleSurface {
                context: ContextKind::TwoDVector,
                surface: SurfaceKind::Canvas,
            })
        );
    }

    #[test]
    fn raster_context_on_container_is_rejected() {
        let c = AppConfig::new()
            .with_context(ContextKind::TwoD)
            .with_surface(SurfaceTarget::container(InputTarget(1), 100.0, 100.0));
        assert!(c.validate().is_err());

        let c = c.with_context(ContextKind::None);
        assert!(c.validate().is_ok());
    }

    // ── input targets ─────────────────────────────────────────────────────

    #[test]
    fn targets_default_to_surface() {
        let c = AppConfig::new().with_surface(SurfaceTarget::canvas(InputTarget(4), 1.0, 1.0));
        let r = c.resolve_input_targets();
        assert_eq!(r.pointer, InputTarget(4));
        assert_eq!(r.touch, InputTarget(4));
        assert_eq!(r.keyboard, InputTarget(4));
    }

    #[test]
    fn touch_follows_pointer_keyboard_follows_shared() {
        let c = AppConfig::new()
            .with_surface(SurfaceTarget::canvas(InputTarget(1), 1.0, 1.0))
            .with_shared_input(InputTarget(2))
            .with_pointer_input(InputTarget(3));
        let r = c.resolve_input_targets();
        assert_eq!(r.pointer, InputTarget(3));
        assert_eq!(r.touch, InputTarget(3));
        assert_eq!(r.keyboard, InputTarget(2));

        let r = c.with_touch_input(InputTarget(9)).resolve_input_targets();
        assert_eq!(r.touch, InputTarget(9));
    }

    #[test]
    fn error_messages() {
        let e: Result<ContextKind, _> = "webgpu".parse();
        assert_eq!(e.unwrap_err().to_string(), "unknown context kind 'webgpu'");
    }
}
