//! File copying for a build: the output directory, images, the Lightbox
//! distribution and extra static assets.
//!
//! The output directory is wiped at the start of every build. Because that
//! is a recursive delete, [`prepare_output_dir`] refuses any output path that
//! is, or contains, one of the input paths.

use crate::generate::{IMAGES_DIR, LIGHTBOX_CSS, LIGHTBOX_JS};
use crate::scan::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Refusing to clear output {output}: it contains input {input}")]
    UnsafeOutput { output: PathBuf, input: PathBuf },
}

/// Delete and recreate `output`.
///
/// `guarded` lists input paths that must survive; when any of them lies
/// inside `output` (or is `output`) nothing is deleted.
pub fn prepare_output_dir(output: &Path, guarded: &[&Path]) -> Result<(), AssetError> {
    if output.exists() {
        let output_abs = output.canonicalize()?;
        for input in guarded {
            let Ok(input_abs) = input.canonicalize() else {
                continue;
            };
            if input_abs.starts_with(&output_abs) {
                return Err(AssetError::UnsafeOutput {
                    output: output.to_path_buf(),
                    input: input.to_path_buf(),
                });
            }
        }
        log::debug!("Removing {}", output.display());
        fs::remove_dir_all(output)?;
    }
    fs::create_dir_all(output)?;
    Ok(())
}

/// Copy every gallery image into `<output>/images/`. Returns the count.
pub fn copy_images(manifest: &Manifest, output: &Path) -> Result<usize, AssetError> {
    let images_dir = output.join(IMAGES_DIR);
    fs::create_dir_all(&images_dir)?;
    for image in &manifest.images {
        fs::copy(&image.source_path, images_dir.join(&image.filename))?;
    }
    Ok(manifest.images.len())
}

/// Copy the Lightbox stylesheet and script from a Lightbox2 `dist/` folder
/// to the output root. Returns the names of the files copied.
///
/// A missing `dist/` is not an error: the page still works as a plain grid.
pub fn copy_lightbox(dist: &Path, output: &Path) -> Result<Vec<String>, AssetError> {
    if !dist.is_dir() {
        log::warn!(
            "Lightbox folder {} not found; the gallery will open images without an overlay",
            dist.display()
        );
        return Ok(vec![]);
    }

    let mut copied = Vec::new();
    for (subdir, name) in [("css", LIGHTBOX_CSS), ("js", LIGHTBOX_JS)] {
        let src = dist.join(subdir).join(name);
        if !src.is_file() {
            log::warn!("Lightbox file {} not found, skipping", src.display());
            continue;
        }
        fs::copy(&src, output.join(name))?;
        copied.push(name.to_string());
    }
    Ok(copied)
}

/// Recursively copy `assets` into the output root, keeping relative paths.
/// Returns the relative paths of the copied files, sorted.
///
/// Runs after the page and images are written into a freshly cleared
/// output, so any file already at the destination is generated output. Such
/// assets are skipped with a warning.
pub fn copy_static_assets(assets: &Path, output: &Path) -> Result<Vec<PathBuf>, AssetError> {
    if !assets.is_dir() {
        return Ok(vec![]);
    }

    let mut copied = Vec::new();
    for entry in WalkDir::new(assets).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(assets)
            .map_err(std::io::Error::other)?;
        let dst = output.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else if dst.exists() {
            log::warn!(
                "Asset {} would overwrite generated {}, skipping",
                entry.path().display(),
                rel.display()
            );
        } else {
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst)?;
            copied.push(rel.to_path_buf());
        }
    }
    Ok(copied)
}
