//! Markdown and HTML to SSML conversion
//!
//!     This crate turns authored content (Markdown, HTML or plain text) into SSML fragments a
//!     speech synthesizer can read, and composes podcast episodes out of them.
//!
//!     TLDR: For renderer authors:
//!         - We never parse Markdown or HTML ourselves, comrak and html5ever do that.
//!         - The engine walks the comrak AST bottom-up and hands each node, with its children
//!           already rendered, to a Renderer. The renderer only decides the markup.
//!         - Anything that cannot be spoken as-is (links, images) is replaced by a label and
//!           recorded, so callers can show what was replaced.
//!         - Per-document state lives in the renderer value. Build one per conversion.
//!
//! Architecture
//!
//!     content ──► is_html? ──► html_to_markdown ──► render_markdown(SsmlRenderer) ──► SSML
//!                    │                                    ▲                │
//!                    └──────────── (Markdown) ────────────┘                └──► links, thumb html
//!
//!     The podcast composer sits on top: it wraps the converted body between an opening and an
//!     ending section, each laid over a background track with add_bgm.
//!
//!     This is a pure lib, it powers md2ssml but is shell agnostic: no code here reads env vars,
//!     prints or touches the file system.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── markup.rs               # XML escaping
//!     ├── html
//!     │   ├── mod.rs              # HTML detection
//!     │   └── to_markdown.rs      # HTML → Markdown normalizer
//!     ├── markdown
//!     │   ├── nodes.rs            # Node kinds handed to renderers
//!     │   └── parser.rs           # comrak walk, escaping, dispatch
//!     ├── ssml
//!     │   ├── mod.rs              # SsmlRenderer dispatch table
//!     │   ├── phrases.rs          # Spoken words for labels and checkboxes
//!     │   └── references.rs       # Link/image labels, counters, previews
//!     ├── convert.rs              # md_to_ssml orchestration
//!     ├── bgm.rs                  # Background-music envelopes
//!     └── podcast.rs              # Episode composition
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── convert
//!     ├── html
//!     └── podcast
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Library Choices
//!
//!     Parsing is offloaded: comrak for CommonMark + GFM (tables, strikethrough, task lists,
//!     autolinks), html5ever + markup5ever_rcdom for HTML. URL classification uses the url crate.
//!     Dates go through chrono, media ids through rand.
//!
pub mod bgm;
pub mod convert;
pub mod error;
pub mod html;
pub mod markdown;
pub mod markup;
pub mod podcast;
pub mod ssml;

pub use bgm::{add_bgm, AudioSpec, MediaIdSource, RandomMediaIds};
pub use convert::{md_to_ssml, ConversionInfo, ConversionResult, Converter};
pub use error::ConvertError;
pub use html::{html_to_markdown, is_html};
pub use markdown::{render_markdown, Node, Renderer};
pub use podcast::{compose_podcast, Channel, PodcastContent, PodcastOptions};
pub use ssml::{Link, Phrases, SsmlRenderer};
