//! Input discovery and manifest generation.
//!
//! Stage 1 of the build. Reads the images folder, the optional intro and the
//! optional caption file, and produces a [`Manifest`] the later stages
//! consume.
//!
//! ## Ordering
//!
//! Images listed in the caption file come first, in the order of the file.
//! The remaining images follow in filename order. Directory listing order
//! never leaks into the output, so the same inputs always give the same page.
//!
//! ## Validation
//!
//! - The images folder must exist.
//! - Captions that name no existing image are kept aside as
//!   `orphan_captions` for `check` to report.

use crate::captions::{self, Captions};
use crate::config::SiteConfig;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Captions(#[from] captions::CaptionsError),
    #[error("Images folder not found: {0}")]
    ImagesNotFound(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub title: String,
    /// Raw Markdown of the intro, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub images: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphan_captions: Vec<String>,
    pub config: SiteConfig,
}

/// One gallery entry.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub filename: String,
    pub source_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

pub fn scan(root: &Path, config: &SiteConfig) -> Result<Manifest, ScanError> {
    let images_dir = config.paths.images_dir(root);
    if !images_dir.is_dir() {
        return Err(ScanError::ImagesNotFound(images_dir));
    }

    let intro = read_intro(&config.paths.intro_file(root))?;
    let captions = read_captions(&config.paths.captions_file(root))?;

    let filenames = collect_images(&images_dir, config)?;
    let orphan_captions = captions
        .iter()
        .map(|(f, _)| f)
        .filter(|f| !filenames.iter().any(|name| name == f))
        .map(String::from)
        .collect();

    let images = order_images(filenames, &captions)
        .into_iter()
        .map(|filename| GalleryImage {
            source_path: images_dir.join(&filename),
            caption: captions.get(&filename).map(String::from),
            filename,
        })
        .collect();

    Ok(Manifest {
        title: config.title.clone(),
        intro,
        images,
        orphan_captions,
        config: config.clone(),
    })
}

/// Order filenames for display: captioned images in caption-file order, then
/// the rest by name.
pub fn order_images(mut filenames: Vec<String>, captions: &Captions) -> Vec<String> {
    filenames.sort_by(|a, b| {
        let pa = captions.position(a).unwrap_or(usize::MAX);
        let pb = captions.position(b).unwrap_or(usize::MAX);
        pa.cmp(&pb).then_with(|| a.cmp(b))
    });
    filenames
}

fn read_intro(path: &Path) -> Result<Option<String>, ScanError> {
    if !path.is_file() {
        log::debug!("No intro at {}", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(content))
    }
}

fn read_captions(path: &Path) -> Result<Captions, ScanError> {
    if !path.is_file() {
        log::debug!("No caption file at {}", path.display());
        return Ok(Captions::default());
    }
    Ok(Captions::load(path)?)
}

fn collect_images(images_dir: &Path, config: &SiteConfig) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(images_dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let Some(name) = file_name.to_str() else {
            if config.images.matches(&path) {
                log::warn!("Skipping {}: filename is not valid UTF-8", path.display());
            }
            continue;
        };
        if name.starts_with('.') || !path.is_file() || !config.images.matches(&path) {
            continue;
        }
        if breaks_url(name) {
            log::warn!("{name}: '#' and '?' in filenames break the image URL");
        }
        names.push(name.to_string());
    }
    Ok(names)
}

/// Whether `name` used unencoded in a relative URL would be cut short.
fn breaks_url(name: &str) -> bool {
    name.contains(['#', '?'])
}
