//! HTML page generation.
//!
//! Stage 2 of the build. Renders the manifest into a single `index.html`:
//!
//! ```text
//! <head>   title, theme CSS, lightbox.min.css
//! <body>   intro (optional) + <hr>
//!          div.gallery → a[data-lightbox] > img, one per image
//!          lightbox-plus-jquery.min.js
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every interpolated value is escaped, which is what keeps captions and
//! filenames from injecting markup. The one place that needs a second layer
//! is `data-title`: Lightbox reads it as HTML, so it carries the caption's
//! rendered Markdown, escaped once more for the attribute.

use crate::config;
use crate::markdown;
use crate::scan::{GalleryImage, Manifest};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Stylesheet shipped with Lightbox2, expected at the output root.
pub const LIGHTBOX_CSS: &str = "lightbox.min.css";
/// Lightbox2 bundle with jQuery, expected at the output root.
pub const LIGHTBOX_JS: &str = "lightbox-plus-jquery.min.js";

/// Folder (relative to the output root) holding the copied images.
pub const IMAGES_DIR: &str = "images";

const LIGHTBOX_LICENSE: &str = "<!--
    LICENSE
    Lightbox2 is licensed under The MIT License.
    100% Free. Lightbox is free to use in both commercial and non-commercial work.
    Attribution is required. This means you must leave my name, my homepage link, and the license info intact. None of these items have to be user-facing and can remain within the code.
    Attribution:
    Lightbox by Lokesh Dhakar (https://lokeshdhakar.com)
-->";

/// Write `index.html` into `output_dir` and return its path.
pub fn generate(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, render_page(manifest).into_string())?;
    log::info!("Wrote {}", index_path.display());
    Ok(index_path)
}

/// Renders the complete gallery document.
pub fn render_page(manifest: &Manifest) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_theme_css(&manifest.config.theme),
        CSS_STATIC
    );

    html! {
        (DOCTYPE)
        html lang=(manifest.config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (manifest.title) }
                style { (PreEscaped(css)) }
                link rel="stylesheet" href=(LIGHTBOX_CSS);
            }
            body {
                @if let Some(intro) = &manifest.intro {
                    (render_intro(intro))
                }
                div.gallery {
                    @for image in &manifest.images {
                        (render_entry(image))
                    }
                }
                script src=(LIGHTBOX_JS) {}
            }
            (PreEscaped(LIGHTBOX_LICENSE))
        }
    }
}

fn render_intro(intro: &str) -> Markup {
    html! {
        div.intro-text {
            (PreEscaped(markdown::render(intro)))
        }
        hr;
    }
}

/// Renders one gallery link with its thumbnail.
fn render_entry(image: &GalleryImage) -> Markup {
    let src = format!("{}/{}", IMAGES_DIR, image.filename);
    let caption = image.caption.as_deref().unwrap_or_default();
    let data_title = markdown::render_caption(caption);

    html! {
        a href=(src) data-lightbox="gallery" data-title=(data_title) {
            img src=(src) alt=(image.filename) title=(caption);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn image(filename: &str, caption: Option<&str>) -> GalleryImage {
        GalleryImage {
            filename: filename.to_string(),
            source_path: PathBuf::from("input/images").join(filename),
            caption: caption.map(String::from),
        }
    }

    fn manifest(intro: Option<&str>, images: Vec<GalleryImage>) -> Manifest {
        let config = SiteConfig::default();
        Manifest {
            title: config.title.clone(),
            intro: intro.map(String::from),
            images,
            orphan_captions: vec![],
            config,
        }
    }

    #[test]
    fn page_has_doctype_and_head() {
        let html = render_page(&manifest(None, vec![])).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Art Gallery</title>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="lightbox.min.css">"#));
    }

    #[test]
    fn page_embeds_theme_css() {
        let html = render_page(&manifest(None, vec![])).into_string();
        assert!(html.contains("--column-min-width: 200px"));
        assert!(html.contains(".gallery"));
        assert!(html.contains(".lb-caption"));
    }

    #[test]
    fn script_comes_after_gallery() {
        let html = render_page(&manifest(None, vec![image("a.jpg", None)])).into_string();
        let gallery = html.find(r#"class="gallery""#).unwrap();
        let script = html
            .find(r#"<script src="lightbox-plus-jquery.min.js"></script>"#)
            .unwrap();
        assert!(gallery < script);
    }

    #[test]
    fn keeps_lightbox_attribution() {
        let html = render_page(&manifest(None, vec![])).into_string();
        assert!(html.contains("Lightbox by Lokesh Dhakar (https://lokeshdhakar.com)"));
        assert!(html.contains("Lightbox2 is licensed under The MIT License."));
    }

    #[test]
    fn intro_rendered_with_rule() {
        let html = render_page(&manifest(Some("# Welcome\n\nHello *there*"), vec![]))
            .into_string();
        assert!(html.contains(r#"<div class="intro-text"><h1>Welcome</h1>"#));
        assert!(html.contains("<em>there</em>"));
        assert!(html.contains("<hr>"));
    }

    #[test]
    fn no_intro_no_rule() {
        let html = render_page(&manifest(None, vec![])).into_string();
        assert!(!html.contains("intro-text\""));
        assert!(!html.contains("<hr>"));
    }

    #[test]
    fn entry_links_image_with_caption() {
        let html = render_entry(&image("dawn.jpg", Some("First light"))).into_string();
        assert_eq!(
            html,
            concat!(
                r#"<a href="images/dawn.jpg" data-lightbox="gallery" data-title="&lt;p&gt;First light&lt;/p&gt;">"#,
                r#"<img src="images/dawn.jpg" alt="dawn.jpg" title="First light">"#,
                "</a>"
            )
        );
    }

    #[test]
    fn uncaptioned_entry_has_empty_titles() {
        let html = render_entry(&image("a.png", None)).into_string();
        assert!(html.contains(r#"data-title="""#));
        assert!(html.contains(r#"title="""#));
    }

    #[test]
    fn caption_markdown_reaches_lightbox_escaped() {
        let html = render_entry(&image("a.jpg", Some("Oil on *canvas*"))).into_string();
        assert!(html.contains(r#"data-title="&lt;p&gt;Oil on &lt;em&gt;canvas&lt;/em&gt;&lt;/p&gt;""#));
        assert!(html.contains(r#"title="Oil on *canvas*""#));
    }

    #[test]
    fn caption_quotes_cannot_break_attributes() {
        let html = render_entry(&image("a.jpg", Some(r#"He said "hi" & left"#))).into_string();
        assert!(html.contains(r#"title="He said &quot;hi&quot; &amp; left""#));
        assert!(!html.contains(r#""hi""#));
    }

    #[test]
    fn caption_html_is_double_escaped_in_data_title() {
        let html =
            render_entry(&image("a.jpg", Some("<script>alert(1)</script>"))).into_string();
        assert!(!html.contains("<script>"));
        // Demoted to text, then escaped for the attribute
        assert!(html.contains("&amp;lt;script&amp;gt;"));
        assert!(html.contains(r#"title="&lt;script&gt;alert(1)&lt;/script&gt;""#));
    }

    #[test]
    fn filename_is_escaped() {
        let html = render_entry(&image(r#"a"b&c.jpg"#, None)).into_string();
        assert!(html.contains(r#"href="images/a&quot;b&amp;c.jpg""#));
        assert!(html.contains(r#"alt="a&quot;b&amp;c.jpg""#));
    }

    #[test]
    fn entries_follow_manifest_order() {
        let html = render_page(&manifest(
            None,
            vec![image("z.jpg", Some("Z")), image("a.jpg", None)],
        ))
        .into_string();
        let z = html.find("images/z.jpg").unwrap();
        let a = html.find("images/a.jpg").unwrap();
        assert!(z < a);
    }

    #[test]
    fn title_and_lang_from_config() {
        let mut m = manifest(None, vec![]);
        m.title = "Prints <2024>".to_string();
        m.config.lang = "fr".to_string();
        let html = render_page(&m).into_string();
        assert!(html.contains("<title>Prints &lt;2024&gt;</title>"));
        assert!(html.contains(r#"<html lang="fr">"#));
    }

    #[test]
    fn generate_writes_index() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("output");
        let path = generate(&manifest(None, vec![image("a.jpg", None)]), &out).unwrap();

        assert_eq!(path, out.join("index.html"));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("images/a.jpg"));
    }
}
