use std::fmt;

use crate::core::ConfigurationError;
use crate::resource::ResourceLoadError;

/// Anything that prevents an application from starting.
#[derive(Debug)]
pub enum KilnError {
    Configuration(ConfigurationError),
    Resource(ResourceLoadError),
}

impl fmt::Display for KilnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KilnError::Configuration(e) => write!(f, "configuration error: {e}"),
            KilnError::Resource(e) => write!(f, "resource error: {e}"),
        }
    }
}

impl std::error::Error for KilnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KilnError::Configuration(e) => Some(e),
            KilnError::Resource(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for KilnError {
    fn from(e: ConfigurationError) -> Self {
        KilnError::Configuration(e)
    }
}

impl From<ResourceLoadError> for KilnError {
    fn from(e: ResourceLoadError) -> Self {
        KilnError::Resource(e)
    }
}
