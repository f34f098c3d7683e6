use std::collections::HashMap;

/// Video reference produced by a video request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub src: String,
    /// `video/ogg`, `video/mp4` or `video/webm`.
    pub mime: String,
}

/// A decoded resource.
#[derive(Debug, Clone)]
pub enum Resource {
    Text(String),
    Image(image::DynamicImage),
    Json(serde_json::Value),
    Video(VideoSource),
    Binary(Vec<u8>),
}

impl Resource {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Resource::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&image::DynamicImage> {
        match self {
            Resource::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Resource::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_video(&self) -> Option<&VideoSource> {
        match self {
            Resource::Video(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Resource::Binary(b) => Some(b),
            _ => None,
        }
    }
}

/// Loaded resources keyed by bundle key.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    entries: HashMap<String, Resource>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, resource: Resource) -> Option<Resource> {
        self.entries.insert(key.into(), resource)
    }

    pub fn get(&self, key: &str) -> Option<&Resource> {
        self.entries.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Resource::as_text)
    }

    pub fn image(&self, key: &str) -> Option<&image::DynamicImage> {
        self.get(key).and_then(Resource::as_image)
    }

    pub fn json(&self, key: &str) -> Option<&serde_json::Value> {
        self.get(key).and_then(Resource::as_json)
    }

    pub fn video(&self, key: &str) -> Option<&VideoSource> {
        self.get(key).and_then(Resource::as_video)
    }

    pub fn bytes(&self, key: &str) -> Option<&[u8]> {
        self.get(key).and_then(Resource::as_bytes)
    }

    /// Removes and returns a resource, handing ownership to the caller.
    pub fn take(&mut self, key: &str) -> Option<Resource> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every loaded resource.
    pub fn dispose(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("disposing {} resources", self.entries.len());
        }
        self.entries.clear();
    }
}
