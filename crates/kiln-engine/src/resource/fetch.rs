use std::io;
use std::path::PathBuf;

/// Byte source for resource loading.
pub trait Fetch {
    /// Reads the whole resource at `src` (already normalized).
    fn fetch(&self, src: &str) -> io::Result<Vec<u8>>;
}

/// Reads resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self, src: &str) -> io::Result<Vec<u8>> {
        let path = self.root.join(src.trim_start_matches('/'));
        log::trace!("reading {}", path.display());
        std::fs::read(path)
    }
}

/// Lexically normalizes a `/`-separated path.
///
/// Collapses repeated separators and `.` segments and resolves `..` against
/// the preceding segment. Leading `..` segments of a relative path are kept;
/// on an absolute path they are dropped. An empty result becomes `"."`.
pub fn normalize_src(src: &str) -> String {
    let absolute = src.starts_with('/');
    let trailing = src.len() > 1 && src.ends_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for seg in src.split('/') {
        match seg {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut out = parts.join("/");
    if absolute {
        out.insert(0, '/');
    }
    if out.is_empty() {
        out.push('.');
    }
    if trailing && !out.ends_with('/') {
        out.push('/');
    }
    out
}
