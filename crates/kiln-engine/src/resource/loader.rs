use super::error::{LoadFailure, ResourceLoadError};
use super::fetch::{normalize_src, Fetch};
use super::kind::{ResourceBundle, ResourceKind};
use super::store::{Resource, Resources, VideoSource};

/// Progress report, sent after every successfully loaded resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadProgress {
    /// Resources loaded so far, this one included.
    pub loaded: usize,
    /// Resources expected in total. Shrinks when an entry is skipped.
    pub total: usize,
    /// Normalized source of the resource just loaded.
    pub src: String,
}

impl LoadProgress {
    pub fn is_complete(&self) -> bool {
        self.loaded == self.total
    }
}

/// Loads every entry of `bundle` in order.
///
/// Entries with an empty source are logged and skipped. A failing entry
/// aborts the whole load in `strict` mode; otherwise it is logged, skipped,
/// and no longer counted in [`LoadProgress::total`].
pub fn load_bundle(
    bundle: &ResourceBundle,
    fetcher: &dyn Fetch,
    strict: bool,
    mut on_progress: impl FnMut(&LoadProgress),
) -> Result<Resources, ResourceLoadError> {
    let mut resources = Resources::new();
    let mut total = bundle.len();
    let mut loaded = 0;

    if total == 0 {
        return Ok(resources);
    }

    for (index, (key, request)) in bundle.iter().enumerate() {
        if request.src.is_empty() {
            log::warn!("resource '{key}' of kind '{}' at index {index} has no path", request.kind);
            total -= 1;
            continue;
        }

        let src = normalize_src(&request.src);
        match load_one(request.kind, &src, fetcher) {
            Ok(resource) => {
                resources.insert(key, resource);
                loaded += 1;
                log::debug!("loaded resource '{key}' ({src}) [{loaded}/{total}]");
                on_progress(&LoadProgress {
                    loaded,
                    total,
                    src,
                });
            }
            Err(failure) => {
                log::warn!(
                    "failed to load resource '{src}' of kind '{}' at index {index}: {failure}",
                    request.kind
                );
                if strict {
                    return Err(ResourceLoadError {
                        key: key.to_string(),
                        src,
                        failure,
                    });
                }
                total -= 1;
            }
        }
    }

    log::info!("loaded {loaded} of {} resources", bundle.len());
    Ok(resources)
}

fn load_one(kind: ResourceKind, src: &str, fetcher: &dyn Fetch) -> Result<Resource, LoadFailure> {
    let fetch = || fetcher.fetch(src).map_err(LoadFailure::Fetch);
    match kind {
        ResourceKind::Video => video_source(src).map(Resource::Video),
        ResourceKind::Text => {
            String::from_utf8(fetch()?).map(Resource::Text).map_err(LoadFailure::Utf8)
        }
        ResourceKind::Json => serde_json::from_slice(&fetch()?)
            .map(Resource::Json)
            .map_err(LoadFailure::Json),
        ResourceKind::Image => image::load_from_memory(&fetch()?)
            .map(Resource::Image)
            .map_err(LoadFailure::Image),
        ResourceKind::Binary => fetch().map(Resource::Binary),
    }
}

/// Maps the file extension to a video container; `ogm`/`ogv` are ogg.
fn video_source(src: &str) -> Result<VideoSource, LoadFailure> {
    let name = src.rsplit('/').next().unwrap_or(src);
    let ext = match name.rfind('.') {
        Some(i) if i > 0 => &name[i + 1..],
        _ => "",
    };

    let container = match ext {
        "ogm" | "ogv" | "ogg" => "ogg",
        "mp4" => "mp4",
        "webm" => "webm",
        other => return Err(LoadFailure::UnsupportedVideo(other.to_string())),
    };

    Ok(VideoSource {
        src: src.to_string(),
        mime: format!("video/{container}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{FileFetcher, ResourceRequest};

    fn fixture() -> (tempfile::TempDir, FileFetcher) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("hello.txt"), "hello").unwrap();
        std::fs::write(root.join("data.json"), r#"{"n": 3, "tags": ["a"]}"#).unwrap();
        std::fs::write(root.join("blob.bin"), [0u8, 1, 2, 255]).unwrap();
        std::fs::write(root.join("broken.json"), "{ nope").unwrap();
        image::RgbaImage::from_pixel(2, 3, image::Rgba([255, 0, 0, 255]))
            .save(root.join("dot.png"))
            .unwrap();
        let fetcher = FileFetcher::new(root);
        (dir, fetcher)
    }

    // ── success ───────────────────────────────────────────────────────────

    #[test]
    fn empty_bundle_succeeds_without_progress() {
        let (_dir, fetcher) = fixture();
        let mut calls = 0;
        let res = load_bundle(&ResourceBundle::new(), &fetcher, true, |_| calls += 1).unwrap();
        assert!(res.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn loads_every_kind() {
        let (_dir, fetcher) = fixture();
        let bundle = ResourceBundle::new()
            .with("greeting", ResourceRequest::text("./hello.txt"))
            .with("data", ResourceRequest::json("data.json"))
            .with("blob", ResourceRequest::binary("blob.bin"))
            .with("dot", ResourceRequest::image("sub/../dot.png"))
            .with("clip", ResourceRequest::video("movies/intro.ogv"));

        let mut progress = Vec::new();
        let res = load_bundle(&bundle, &fetcher, true, |p| progress.push(p.clone())).unwrap();

        assert_eq!(res.text("greeting"), Some("hello"));
        assert_eq!(res.json("data").and_then(|v| v["n"].as_u64()), Some(3));
        assert_eq!(res.bytes("blob"), Some(&[0u8, 1, 2, 255][..]));
        let img = res.image("dot").unwrap();
        assert_eq!((img.width(), img.height()), (2, 3));
        assert_eq!(res.video("clip").unwrap().mime, "video/ogg");

        assert_eq!(progress.len(), 5);
        assert_eq!(progress[0].src, "hello.txt");
        assert_eq!(progress[3].src, "dot.png");
        assert!(progress.last().unwrap().is_complete());
    }

    #[test]
    fn empty_src_is_skipped_and_not_counted() {
        let (_dir, fetcher) = fixture();
        let bundle = ResourceBundle::new()
            .with("nothing", ResourceRequest::text(""))
            .with("greeting", ResourceRequest::text("hello.txt"));

        let mut last = None;
        let res = load_bundle(&bundle, &fetcher, true, |p| last = Some(p.clone())).unwrap();

        assert!(!res.contains("nothing"));
        let last = last.unwrap();
        assert_eq!((last.loaded, last.total), (1, 1));
    }

    // ── failure ───────────────────────────────────────────────────────────

    #[test]
    fn strict_failure_reports_key() {
        let (_dir, fetcher) = fixture();
        let bundle = ResourceBundle::new()
            .with("greeting", ResourceRequest::text("hello.txt"))
            .with("gone", ResourceRequest::text("missing.txt"));

        let err = load_bundle(&bundle, &fetcher, true, |_| {}).unwrap_err();
        assert_eq!(err.key, "gone");
        assert_eq!(err.src, "missing.txt");
        assert!(matches!(err.failure, LoadFailure::Fetch(_)));
    }

    #[test]
    fn lenient_failure_shrinks_total() {
        let (_dir, fetcher) = fixture();
        let bundle = ResourceBundle::new()
            .with("bad", ResourceRequest::json("broken.json"))
            .with("greeting", ResourceRequest::text("hello.txt"));

        let mut progress = Vec::new();
        let res = load_bundle(&bundle, &fetcher, false, |p| progress.push(p.clone())).unwrap();

        assert_eq!(res.len(), 1);
        assert_eq!(progress.len(), 1);
        assert_eq!((progress[0].loaded, progress[0].total), (1, 1));
    }

    #[test]
    fn unsupported_video_container_fails() {
        let (_dir, fetcher) = fixture();
        let bundle = ResourceBundle::new().with("clip", ResourceRequest::video("clip.avi"));

        let err = load_bundle(&bundle, &fetcher, true, |_| {}).unwrap_err();
        assert!(matches!(err.failure, LoadFailure::UnsupportedVideo(ref e) if e == "avi"));
    }

    #[test]
    fn video_containers() {
        assert_eq!(video_source("a.ogm").unwrap().mime, "video/ogg");
        assert_eq!(video_source("a.mp4").unwrap().mime, "video/mp4");
        assert_eq!(video_source("dir.v/a.webm").unwrap().mime, "video/webm");
        assert!(video_source("noext").is_err());
    }

    // ── dispose ───────────────────────────────────────────────────────────

    #[test]
    fn dispose_clears_everything() {
        let (_dir, fetcher) = fixture();
        let bundle = ResourceBundle::new().with("greeting", ResourceRequest::text("hello.txt"));
        let mut res = load_bundle(&bundle, &fetcher, true, |_| {}).unwrap();

        res.dispose();
        assert!(res.is_empty());
        assert_eq!(res.text("greeting"), None);
    }
}
