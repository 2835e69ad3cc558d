//! Directive editing for Dockerfile-style descriptors.
//!
//! # Edit pipeline
//!
//! ```text
//! kube-dock dockerfile
//!   1. Load     ── read the whole descriptor (missing file is fatal)
//!   2. EXPOSE   ── scan lines, refuse if >1 match, rewrite, replace file
//!   3. ENV      ── one append per key=value item
//!   4. ADD      ── one append per key=value item
//!   5. COPY     ── one append per key=value item
//! ```
//!
//! # Failure model
//!
//! Each category succeeds or fails on its own. A failing category stops
//! only its own remaining items; earlier categories and already appended
//! lines stay on disk. Items without `=` are skipped, not reported as errors.

pub mod document;
pub mod editor;
pub mod scan;

pub use document::DocumentError;
pub use editor::{Applied, CategoryReport, DockerfileEditor, EditError, EditReport};
