//! CLI output formatting.
//!
//! Output is information-first: each image is shown by its position in the
//! gallery and its filename, with the caption as an indented context line.
//!
//! ## Scan
//!
//! ```text
//! Intro
//!     input/intro.md
//!
//! Images (4, 2 captioned)
//! 001 03-harbour.jpg
//!     Harbour at dusk
//! 002 01-dawn.jpg
//!     First light
//! 003 02-still-life.png
//! 004 sketch.gif
//!
//! Unmatched captions
//!     missing.jpg
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → output/index.html
//! Images: 4 → output/images/
//! Lightbox: lightbox.min.css, lightbox-plus-jquery.min.js
//! Assets: favicon.ico
//! ```
//!
//! Each `format_*` function returns `Vec<String>` and does no I/O; the
//! `print_*` wrappers write to stdout.

use crate::generate::IMAGES_DIR;
use crate::pipeline::BuildReport;
use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Plain-text preview of a Markdown caption.
fn caption_preview(caption: &str) -> String {
    let html = crate::markdown::render_caption(caption);
    let plain = strip_html_tags(&html);
    let plain = plain
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    truncate_desc(plain.trim(), 60)
}

/// Format scan output: intro, images in gallery order, unmatched captions.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    if manifest.intro.is_some() {
        lines.push("Intro".to_string());
        lines.push(format!("    {}", manifest.config.paths.intro));
        lines.push(String::new());
    }

    let captioned = manifest
        .images
        .iter()
        .filter(|i| i.caption.is_some())
        .count();
    lines.push(format!(
        "Images ({}, {} captioned)",
        manifest.images.len(),
        captioned
    ));
    for (i, image) in manifest.images.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), image.filename));
        if let Some(caption) = &image.caption {
            let preview = caption_preview(caption);
            if !preview.is_empty() {
                lines.push(format!("    {}", preview));
            }
        }
    }

    if !manifest.orphan_captions.is_empty() {
        lines.push(String::new());
        lines.push("Unmatched captions".to_string());
        for name in &manifest.orphan_captions {
            lines.push(format!("    {}", name));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

/// Format build output showing the generated files.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![
        format!("Home \u{2192} {}", report.index_path.display()),
        format!(
            "Images: {} \u{2192} {}/",
            report.images_copied,
            report.output_dir.join(IMAGES_DIR).display()
        ),
    ];

    if report.lightbox_files.is_empty() {
        lines.push("Lightbox: not bundled".to_string());
    } else {
        lines.push(format!("Lightbox: {}", report.lightbox_files.join(", ")));
    }

    if !report.static_assets.is_empty() {
        let names: Vec<String> = report
            .static_assets
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        lines.push(format!("Assets: {}", names.join(", ")));
    }

    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
