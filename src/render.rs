//! Index page rendering.
//!
//! Stage 2 of the utildex build. Takes the sorted utility list and a base URL
//! and produces a single self-contained HTML document: inline styles, no
//! external assets, one card per utility linking to its canonical URL.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, so metadata
//! content (names, descriptions) cannot inject markup into the page, and a
//! malformed template is a compile error rather than a runtime failure.
//!
//! ## Link Construction
//!
//! Every card links to [`link_for`]`(base_url, slug)`. The slug is cleaned as
//! an absolute path (`.`/`..`/repeated separators collapse, edges are
//! stripped) before joining, so `/foo/bar/` and `foo/bar` produce the same
//! link. Produced links always end with exactly one `/`. An empty base URL
//! yields relative `./…/` links for same-host deployment.

use crate::types::Utility;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const TITLE: &str = "Utilities";
const INTRO: &str = "Small self-contained tools, each deployed under its own path.";

const CSS: &str = include_str!("../static/style.css");

/// Card model handed to the template, one per utility.
struct IndexEntry<'a> {
    name: &'a str,
    description: &'a str,
    url: String,
}

/// Render the catalogue index markup for the provided utilities.
///
/// Input order is preserved; callers pass the already-sorted output of
/// [`crate::discover::discover`].
pub fn render_index(base_url: &str, utils: &[Utility]) -> Vec<u8> {
    let entries: Vec<IndexEntry<'_>> = utils
        .iter()
        .map(|util| IndexEntry {
            name: &util.name,
            description: &util.description,
            url: link_for(base_url, &util.slug),
        })
        .collect();

    index_page(&entries).into_string().into_bytes()
}

fn index_page(entries: &[IndexEntry<'_>]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                style { (PreEscaped(CSS)) }
            }
            body {
                header {
                    h1 { (TITLE) }
                    p { (INTRO) }
                }
                main {
                    section.utilities {
                        @for entry in entries {
                            article.utility {
                                h2 { (entry.name) }
                                p { (entry.description) }
                                a href=(entry.url) { "Open utility →" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Canonical link for a slug under `base_url`.
///
/// The base URL may or may not carry a trailing slash; both forms produce the
/// same link. An empty base URL produces relative links (`./…/`). Every
/// returned link ends with `/` and has no double slash at the join point.
pub fn link_for(base_url: &str, slug: &str) -> String {
    let clean = clean_slug(slug);

    if base_url.is_empty() {
        if clean.is_empty() {
            return "./".to_string();
        }
        return format!("./{clean}/");
    }

    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    if clean.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{clean}/")
    }
}

/// Normalize a slug as if it were an absolute path: empty and `.` segments
/// drop out, `..` pops the previous segment (and cannot climb above the
/// root), and the edges carry no separators. `""`, `"."` and `"/"` all
/// normalize to the empty string.
fn clean_slug(slug: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in slug.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utility(name: &str, description: &str, slug: &str) -> Utility {
        Utility {
            name: name.to_string(),
            description: description.to_string(),
            slug: slug.to_string(),
        }
    }

    // =========================================================================
    // link_for() tests
    // =========================================================================

    #[test]
    fn link_relative() {
        assert_eq!(link_for("", "foo"), "./foo/");
    }

    #[test]
    fn link_relative_root() {
        assert_eq!(link_for("", ""), "./");
    }

    #[test]
    fn link_absolute() {
        assert_eq!(link_for("https://example.com", "foo"), "https://example.com/foo/");
    }

    #[test]
    fn link_base_trailing_slash_idempotent() {
        assert_eq!(
            link_for("https://example.com/", "foo"),
            link_for("https://example.com", "foo")
        );
    }

    #[test]
    fn link_slug_separators_normalized() {
        assert_eq!(
            link_for("https://example.com", "/foo/bar/"),
            "https://example.com/foo/bar/"
        );
    }

    #[test]
    fn link_absolute_root() {
        assert_eq!(
            link_for("https://example.com/utilities/", ""),
            "https://example.com/utilities/"
        );
    }

    #[test]
    fn link_slug_dot_segments_collapse() {
        assert_eq!(link_for("", "./foo/./bar"), "./foo/bar/");
        assert_eq!(link_for("", "foo/../bar"), "./bar/");
    }

    #[test]
    fn link_slug_cannot_climb_above_root() {
        assert_eq!(link_for("https://example.com", "../../etc"), "https://example.com/etc/");
    }

    #[test]
    fn link_dot_only_slug_is_root() {
        assert_eq!(link_for("", "."), "./");
        assert_eq!(link_for("", "//"), "./");
    }

    // =========================================================================
    // render_index() tests
    // =========================================================================

    #[test]
    fn render_contains_entries_and_links() {
        let utils = vec![
            utility("One", "first util", "util-one"),
            utility("Two", "second util", "util-two"),
        ];

        let html = String::from_utf8(render_index("https://example.com", &utils)).unwrap();

        assert!(html.contains("One"));
        assert!(html.contains("first util"));
        assert!(html.contains("Two"));
        assert!(html.contains("second util"));
        assert!(html.contains("https://example.com/util-one/"));
        assert!(html.contains("https://example.com/util-two/"));
    }

    #[test]
    fn render_escapes_metadata_markup() {
        let utils = vec![utility("<script>alert(1)</script>", "a & b", "x")];

        let html = String::from_utf8(render_index("", &utils)).unwrap();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn render_empty_list_is_still_a_page() {
        let html = String::from_utf8(render_index("", &[])).unwrap();

        assert!(!html.is_empty());
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(TITLE));
    }

    #[test]
    fn render_inlines_stylesheet() {
        let html = String::from_utf8(render_index("", &[])).unwrap();

        assert!(html.contains("<style>"));
        assert!(html.contains(".utility"));
    }
}
