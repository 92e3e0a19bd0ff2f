//! Image handling - resolves image sources and converts image elements.

use crate::theme::{StyleRole, Theme};
use crate::{error::Error, ImageHandling, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves the `src` of each image according to [`ImageHandling`].
pub struct ImageResolver {
    mode: ImageMode,
    counter: usize,
}

enum ImageMode {
    Keep,
    Inline(PathBuf),
    Skip,
}

impl ImageResolver {
    /// `base_dir` is where relative image paths are looked up when inlining.
    pub fn new(handling: &ImageHandling, base_dir: Option<&Path>) -> Self {
        let mode = match handling {
            ImageHandling::Keep => ImageMode::Keep,
            ImageHandling::Inline => ImageMode::Inline(
                base_dir
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(".")),
            ),
            ImageHandling::Skip => ImageMode::Skip,
        };
        Self { mode, counter: 0 }
    }

    /// Number of images embedded as data URIs so far.
    pub fn inlined_count(&self) -> usize {
        self.counter
    }

    /// Returns the source to render, or `None` when the image is dropped.
    pub fn resolve(&mut self, src: &str) -> Result<Option<String>> {
        match &self.mode {
            ImageMode::Skip => Ok(None),
            ImageMode::Keep => Ok(Some(src.to_string())),
            ImageMode::Inline(_) if is_remote(src) => Ok(Some(src.to_string())),
            ImageMode::Inline(base_dir) => {
                let path = base_dir.join(src);
                let data = fs::read(&path).map_err(|e| match e.kind() {
                    ErrorKind::NotFound => Error::MediaNotFound(path.display().to_string()),
                    _ => Error::Io(e),
                })?;

                self.counter += 1;
                tracing::debug!(path = %path.display(), bytes = data.len(), "Inlined image");

                Ok(Some(format!(
                    "data:{};base64,{}",
                    mime_type(&path),
                    BASE64.encode(&data)
                )))
            }
        }
    }
}

fn is_remote(src: &str) -> bool {
    src.starts_with("http://")
        || src.starts_with("https://")
        || src.starts_with("//")
        || src.starts_with("data:")
}

fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Converts an image element. A non-empty `alt` is repeated as a caption.
///
/// The result is phrasing content only, so it stays valid inside paragraphs
/// and link text; block layout comes from the theme's `display` rules.
pub fn image_converter(styles: &Theme, src: &str, title: &str, alt: &str) -> String {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{title}""#)
    };
    let caption = if alt.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span style="{}">{}</span>"#,
            styles.style_text(StyleRole::ImageCaption),
            alt
        )
    };
    format!(
        r#"<img src="{}" alt="{}"{} style="{}">{}"#,
        src,
        alt,
        title_attr,
        styles.style_text(StyleRole::Image),
        caption
    )
}
