//! Conversion tests
//!
//! End-to-end Markdown → SSML output and the reference metadata collected on the way.

mod references;
mod render;
