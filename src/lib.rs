//! # utildex
//!
//! Build-time catalog generator for a personal collection of independently
//! deployed utilities. Your filesystem is the data source: each immediate
//! child directory of the root that contains a `util.yaml` metadata file
//! becomes one card on a single static index page.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Discover   root/  →  Vec<Utility>     (filesystem → validated entries)
//! 2. Render     entries →  index.html      (entries → self-contained HTML)
//! ```
//!
//! Discovery owns all filesystem access and validation; rendering is a pure
//! function from the sorted entry list (plus a base URL) to bytes. The entry
//! point wires the two together and writes the result — it is the only place
//! that touches the output path.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The [`types::Utility`] entry, metadata filename, validation |
//! | [`discover`] | Stage 1 — walks the root's children, loads and sorts entries |
//! | [`render`] | Stage 2 — renders the index page with Maud, computes canonical links |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error, template variables are Rust
//! expressions, and all interpolation is auto-escaped — metadata content cannot
//! inject markup into the page. There is no template directory to ship.
//!
//! ## One Shot, No State
//!
//! This is a batch build step. Entries live in memory for the duration of one
//! run, rendering produces a single self-contained document (inline styles, no
//! external assets), and any failure other than "metadata file absent" aborts
//! the whole build. There are no retries, no caches, no partial results.

pub mod discover;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
