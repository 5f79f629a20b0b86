//! HTML input tests
//!
//! HTML detection and the HTML → Markdown → SSML path.

mod input;
