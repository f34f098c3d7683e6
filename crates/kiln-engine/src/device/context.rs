use std::fmt;
use std::str::FromStr;

use crate::coords::ColorRgba;
use crate::core::ConfigurationError;

/// Kind of rendering context an application asks for.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ContextKind {
    /// Raster 2D drawing.
    TwoD,
    /// Retained vector graphics mounted in a container surface.
    TwoDVector,
    /// GPU 3D rendering.
    #[default]
    ThreeD,
    /// No rendering context; input and the frame loop only.
    None,
}

impl ContextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::TwoD => "2d",
            ContextKind::TwoDVector => "2d-vector",
            ContextKind::ThreeD => "3d",
            ContextKind::None => "none",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2d" => Ok(ContextKind::TwoD),
            "2d-vector" | "2d-svg" => Ok(ContextKind::TwoDVector),
            "3d" => Ok(ContextKind::ThreeD),
            "none" => Ok(ContextKind::None),
            other => Err(ConfigurationError::UnknownContextKind(other.to_string())),
        }
    }
}

/// Why a [`RenderContext::clear`] did not reach the screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentError {
    /// The surface went stale and was configured again; the next frame draws.
    Reconfigured,
    /// Nothing was presented this frame.
    Skipped,
    /// The surface cannot be recovered (out of GPU memory).
    Unrecoverable,
}

impl PresentError {
    pub fn is_fatal(self) -> bool {
        self == PresentError::Unrecoverable
    }
}

/// A rendering context bound to the application's surface.
pub trait RenderContext {
    fn kind(&self) -> ContextKind;

    /// True when the backing surface does not follow viewport size changes on
    /// its own and must be resized through [`sync_size`](Self::sync_size).
    fn requires_size_sync(&self) -> bool {
        false
    }

    /// New backing size in surface pixels.
    fn sync_size(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Clears the surface and presents it.
    fn clear(&mut self, color: ColorRgba) -> Result<(), PresentError> {
        let _ = color;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unrecoverable_is_fatal() {
        assert!(PresentError::Unrecoverable.is_fatal());
        assert!(!PresentError::Reconfigured.is_fatal());
        assert!(!PresentError::Skipped.is_fatal());
    }

    #[test]
    fn parses_known_kinds() {
        assert_eq!("2d".parse::<ContextKind>().unwrap(), ContextKind::TwoD);
        assert_eq!("2d-vector".parse::<ContextKind>().unwrap(), ContextKind::TwoDVector);
        assert_eq!("2d-svg".parse::<ContextKind>().unwrap(), ContextKind::TwoDVector);
        assert_eq!("3d".parse::<ContextKind>().unwrap(), ContextKind::ThreeD);
        assert_eq!("none".parse::<ContextKind>().unwrap(), ContextKind::None);
    }

    #[test]
    fn unknown_kind_is_configuration_error() {
        let err = "webgl9".parse::<ContextKind>().unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownContextKind("webgl9".into()));
    }

    #[test]
    fn display_round_trips_wire_name() {
        for kind in [ContextKind::TwoD, ContextKind::TwoDVector, ContextKind::ThreeD, ContextKind::None] {
            assert_eq!(kind.to_string().parse::<ContextKind>().unwrap(), kind);
        }
    }
}
