use std::fmt;

/// How a fetched resource is decoded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ResourceKind {
    /// UTF-8 text.
    #[default]
    Text,
    /// Raster image, decoded with the `image` crate.
    Image,
    /// JSON document.
    Json,
    /// Video file; only the container is checked, the bytes are not read.
    Video,
    /// Raw bytes.
    Binary,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Text => "text",
            ResourceKind::Image => "image",
            ResourceKind::Json => "json",
            ResourceKind::Video => "video",
            ResourceKind::Binary => "binary",
        }
    }

    /// Parses a kind name. `arraybuffer` is accepted as an alias of `binary`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(ResourceKind::Text),
            "image" => Some(ResourceKind::Image),
            "json" => Some(ResourceKind::Json),
            "video" => Some(ResourceKind::Video),
            "binary" | "arraybuffer" => Some(ResourceKind::Binary),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub kind: ResourceKind,
    /// Path relative to the fetcher root.
    pub src: String,
}

impl ResourceRequest {
    pub fn new(kind: ResourceKind, src: impl Into<String>) -> Self {
        Self { kind, src: src.into() }
    }

    pub fn text(src: impl Into<String>) -> Self {
        Self::new(ResourceKind::Text, src)
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(ResourceKind::Image, src)
    }

    pub fn json(src: impl Into<String>) -> Self {
        Self::new(ResourceKind::Json, src)
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self::new(ResourceKind::Video, src)
    }

    pub fn binary(src: impl Into<String>) -> Self {
        Self::new(ResourceKind::Binary, src)
    }

    /// Builds a request from a kind name as found in a manifest.
    ///
    /// Unknown names are logged and fall back to [`ResourceKind::Text`].
    pub fn parse(kind: &str, src: impl Into<String>) -> Self {
        let src = src.into();
        let kind = match ResourceKind::from_name(kind) {
            Some(k) => k,
            None => {
                log::warn!("resource '{src}' has unsupported kind '{kind}', loading as text");
                ResourceKind::Text
            }
        };
        Self { kind, src }
    }
}

/// Ordered set of named resource requests.
///
/// Keys are unique; inserting an existing key replaces its request in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBundle {
    entries: Vec<(String, ResourceRequest)>,
}

impl ResourceBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, request: ResourceRequest) -> Self {
        self.insert(key, request);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, request: ResourceRequest) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = request,
            None => self.entries.push((key, request)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ResourceRequest> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceRequest)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }
}
