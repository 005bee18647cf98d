//! # Art Gallery
//!
//! Builds a single static HTML page from a folder of images, an optional
//! Markdown intro, and an optional tab-separated caption file. Clicking a
//! thumbnail opens the full image in a [Lightbox2](https://lokeshdhakar.com/projects/lightbox2/)
//! overlay with its caption.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      project/  →  Manifest       (images, intro, captions, order)
//! 2. Copy      Manifest  →  output/images/
//! 3. Generate  Manifest  →  output/index.html
//! 4. Assets    dist/, assets/  →  output/
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`captions`] | Tab-separated caption file → ordered filename/caption mapping |
//! | [`scan`] | Discovers images, reads intro and captions, fixes gallery order |
//! | [`markdown`] | Markdown → HTML for the intro and (HTML-stripped) captions |
//! | [`generate`] | Renders `index.html` with Maud |
//! | [`assets`] | Output directory preparation and file copying |
//! | [`pipeline`] | Runs the stages in order and reports what was produced |
//! | [`config`] | `config.toml` loading, validation, and theme CSS |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Caption order is gallery order
//!
//! The caption file doubles as the running order. Images it lists appear in
//! its order; the rest follow alphabetically. Nothing depends on directory
//! listing order, so rebuilding the same inputs gives a byte-identical page.
//!
//! ## Two layers of escaping for captions
//!
//! Lightbox reads `data-title` as HTML. Captions are therefore rendered from
//! Markdown (with raw HTML demoted to text) and the result is escaped again
//! for the attribute. The `title` tooltip carries the plain caption, escaped
//! once. Maud does the attribute escaping, so no value reaches the page
//! unescaped.
//!
//! ## Copy, don't transform
//!
//! Images are copied byte-for-byte. Thumbnails are the originals scaled by
//! CSS; there is no resizing, re-encoding or caching.

pub mod assets;
pub mod captions;
pub mod config;
pub mod generate;
pub mod markdown;
pub mod output;
pub mod pipeline;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
