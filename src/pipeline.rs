//! The full build: scan → prepare output → copy images → generate → assets.
//!
//! Inputs are scanned before the output directory is touched, so a project
//! with a missing images folder leaves any previous output in place.

use crate::assets::{self, AssetError};
use crate::config::SiteConfig;
use crate::generate::{self, GenerateError, IMAGES_DIR};
use crate::scan::{self, Manifest, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub index_path: PathBuf,
    pub manifest: Manifest,
    pub images_copied: usize,
    pub lightbox_files: Vec<String>,
    pub static_assets: Vec<PathBuf>,
}

/// Build the gallery for the project at `root` into `output`.
pub fn build(root: &Path, output: &Path, config: &SiteConfig) -> Result<BuildReport, BuildError> {
    let manifest = scan::scan(root, config)?;
    log::info!(
        "Scanned {} images ({} captioned)",
        manifest.images.len(),
        manifest.images.iter().filter(|i| i.caption.is_some()).count()
    );

    let inputs = [
        config.paths.images_dir(root),
        config.paths.intro_file(root),
        config.paths.captions_file(root),
        config.paths.lightbox_dir(root),
        config.paths.assets_dir(root),
    ];
    let mut guarded: Vec<&Path> = inputs.iter().map(PathBuf::as_path).collect();
    guarded.push(root);
    assets::prepare_output_dir(output, &guarded)?;

    let images_copied = assets::copy_images(&manifest, output)?;
    log::info!(
        "Copied {images_copied} images to {}",
        output.join(IMAGES_DIR).display()
    );

    let index_path = generate::generate(&manifest, output)?;
    let lightbox_files = assets::copy_lightbox(&config.paths.lightbox_dir(root), output)?;
    let static_assets = assets::copy_static_assets(&config.paths.assets_dir(root), output)?;

    Ok(BuildReport {
        output_dir: output.to_path_buf(),
        index_path,
        manifest,
        images_copied,
        lightbox_files,
        static_assets,
    })
}
