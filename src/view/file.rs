use crate::api::endpoint;
use crate::config::StoreConfig;
use crate::model::{self, Stat};

/// Preview classification for a file node, keyed off the display name's
/// extension. Anything unrecognized, including a missing extension, falls
/// back to `Other`; classification never fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MediaKind {
    Video,
    Image,
    Other,
}

pub fn classify(path: &str) -> MediaKind {
    let name = model::display_name(path);
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return MediaKind::Other,
    };

    match ext.as_str() {
        "mov" | "mp4" => MediaKind::Video,
        "png" | "jpg" | "jpeg" => MediaKind::Image,
        _ => MediaKind::Other,
    }
}

/// Type-specific preview for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaPreview {
    Video {
        src: String,
        autoplay: bool,
        muted: bool,
        controls: bool,
    },
    Image {
        src: String,
        alt: String,
    },
    /// Fallback: no preview, just the display name.
    Name(String),
}

/// Everything needed to render a file page: the preview plus the two egress
/// links, both keyed by content id and carrying the filename hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePage {
    pub name: String,
    pub preview: MediaPreview,
    pub share_url: String,
    pub download_url: String,
}

pub fn render(config: &StoreConfig, stat: &Stat) -> FilePage {
    let name = stat.display_name().to_string();
    let preview = match classify(&stat.path) {
        MediaKind::Video => MediaPreview::Video {
            src: endpoint::raw_url(config, &stat.cid),
            autoplay: true,
            muted: true,
            controls: true,
        },
        MediaKind::Image => MediaPreview::Image {
            src: endpoint::raw_url(config, &stat.cid),
            alt: stat.path.clone(),
        },
        MediaKind::Other => MediaPreview::Name(name.clone()),
    };

    FilePage {
        share_url: endpoint::share_url(&stat.cid, &name),
        download_url: endpoint::download_url(config, &stat.cid, &name),
        name,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, render, MediaKind, MediaPreview};
    use crate::config::StoreConfig;
    use crate::error::CidnavError;
    use crate::model::{EntryKind, Stat};

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("/movies/movie.MP4"), MediaKind::Video);
        assert_eq!(classify("/movies/clip.mov"), MediaKind::Video);
        assert_eq!(classify("/pics/pic.JPG"), MediaKind::Image);
        assert_eq!(classify("/pics/pic.jpeg"), MediaKind::Image);
    }

    #[test]
    fn test_classify_falls_back_for_unknown_or_missing_extension() {
        assert_eq!(classify("/docs/notes.txt"), MediaKind::Other);
        assert_eq!(classify("/README"), MediaKind::Other);
    }

    #[test]
    fn test_classify_ignores_dots_in_parent_directories() {
        assert_eq!(classify("/v1.2/README"), MediaKind::Other);
    }

    fn file_stat(path: &str) -> Stat {
        Stat {
            cid: "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_string(),
            path: path.to_string(),
            mode: 420,
            size: 51200,
            blocks: 1,
            cumulative_size: 51200,
            children: None,
            kind: EntryKind::File,
            with_locality: false,
        }
    }

    #[test]
    fn test_render_video_preview() -> Result<(), CidnavError> {
        let config = StoreConfig::new("http://localhost:7131", "http://localhost:3001")?;
        let stat = file_stat("/movies/movie.mp4");

        let page = render(&config, &stat);
        match page.preview {
            MediaPreview::Video {
                src,
                autoplay,
                muted,
                controls,
            } => {
                assert_eq!(src, format!("http://localhost:7131/raw/{}", stat.cid));
                assert!(autoplay);
                assert!(muted);
                assert!(controls);
            }
            other => panic!("expected a video preview, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_render_fallback_keeps_egress_links() -> Result<(), CidnavError> {
        let config = StoreConfig::new("http://localhost:7131", "http://localhost:3001")?;
        let stat = file_stat("/docs/notes.txt");

        let page = render(&config, &stat);
        assert_eq!(page.preview, MediaPreview::Name("notes.txt".to_string()));
        assert_eq!(
            page.share_url,
            format!("https://ipfs.io/ipfs/{}?filename=notes.txt", stat.cid)
        );
        assert_eq!(
            page.download_url,
            format!(
                "http://localhost:7131/raw/{}?filename=notes.txt",
                stat.cid
            )
        );
        Ok(())
    }
}
