use std::fmt;

/// Why a single resource failed to load.
#[derive(Debug)]
pub enum LoadFailure {
    Fetch(std::io::Error),
    Utf8(std::string::FromUtf8Error),
    Json(serde_json::Error),
    Image(image::ImageError),
    /// Video file with a container other than ogg, mp4 or webm.
    UnsupportedVideo(String),
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::Fetch(e) => write!(f, "fetch failed: {e}"),
            LoadFailure::Utf8(e) => write!(f, "invalid utf-8: {e}"),
            LoadFailure::Json(e) => write!(f, "invalid json: {e}"),
            LoadFailure::Image(e) => write!(f, "image decode failed: {e}"),
            LoadFailure::UnsupportedVideo(ext) => write!(f, "video type not supported '{ext}'"),
        }
    }
}

impl std::error::Error for LoadFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadFailure::Fetch(e) => Some(e),
            LoadFailure::Utf8(e) => Some(e),
            LoadFailure::Json(e) => Some(e),
            LoadFailure::Image(e) => Some(e),
            LoadFailure::UnsupportedVideo(_) => None,
        }
    }
}

/// A bundle entry failed to load in strict mode.
#[derive(Debug)]
pub struct ResourceLoadError {
    /// Bundle key of the failed entry.
    pub key: String,
    /// Normalized source path.
    pub src: String,
    pub failure: LoadFailure,
}

impl fmt::Display for ResourceLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load resource '{}' ({}): {}", self.key, self.src, self.failure)
    }
}

impl std::error::Error for ResourceLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.failure)
    }
}
