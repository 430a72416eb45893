//! Tagged block components for markdown preprocessing.
//!
//! Components are block-level extensions embedded in markdown source as
//! bracketed tags carrying a JSON payload:
//!
//! ```markdown
//! [BUTTON]
//! { "text": "Click me", "link": "/docs", "type": "primary" }
//! [/BUTTON]
//! ```
//!
//! Each component kind implements [`ComponentHandler`]: it owns the regex
//! locating its tagged blocks and turns one block's payload plus the
//! current [`Theme`](tagdown_theme::Theme) into a [`RenderOutput`] of
//! literal HTML and optional companion script text. Handlers never fail —
//! a malformed payload renders as inline error markup so one bad block
//! cannot abort conversion of the rest of the document.
//!
//! Handlers are collected in a [`ComponentRegistry`]; the substitution
//! engine in `tagdown-renderer` applies them in registration order before
//! standard markdown conversion.

mod align;
mod button;
mod code;
mod handler;
mod map;
mod registry;
mod util;

pub use align::Alignment;
pub use button::{ButtonComponent, ButtonKind};
pub use code::CodeComponent;
pub use handler::{ComponentHandler, RenderOutput};
pub use map::MapComponent;
pub use registry::ComponentRegistry;
pub use util::{escape_html, escape_js};
