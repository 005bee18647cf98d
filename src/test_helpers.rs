//! Shared test utilities for the art-gallery test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
//!
//! let image = find_image(&manifest, "01-dawn.jpg");
//! assert_eq!(image.caption.as_deref(), Some("First light"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::{GalleryImage, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/project/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find an image by filename. Panics if not found.
pub fn find_image<'a>(manifest: &'a Manifest, filename: &str) -> &'a GalleryImage {
    manifest
        .images
        .iter()
        .find(|i| i.filename == filename)
        .unwrap_or_else(|| {
            let names = image_filenames(manifest);
            panic!("image '{filename}' not found. Available: {names:?}")
        })
}

/// All image filenames in gallery order.
pub fn image_filenames(manifest: &Manifest) -> Vec<&str> {
    manifest.images.iter().map(|i| i.filename.as_str()).collect()
}
