//! Component-aware markdown to HTML conversion pipeline.
//!
//! The pipeline runs in two phases:
//!
//! 1. **Substitution** ([`ComponentProcessor`]): registered component
//!    handlers are applied in registration order over the raw markdown,
//!    replacing each tagged block with literal HTML and collecting
//!    companion script fragments in document order.
//!
//! 2. **Conversion** ([`MarkdownConverter`]): the substituted markdown is
//!    converted through pulldown-cmark (the injected HTML passes through
//!    untouched) and the collected scripts are appended after the body.
//!
//! # Example
//!
//! ```
//! use tagdown_components::ComponentRegistry;
//! use tagdown_renderer::MarkdownConverter;
//! use tagdown_theme::{StaticThemeProvider, Theme};
//!
//! let converter = MarkdownConverter::new(
//!     ComponentRegistry::with_defaults(),
//!     StaticThemeProvider::new(Theme::new().with_class("error", "text-red-500")),
//! );
//!
//! let html = converter.convert("# Hello\n\n[CODE]\n{\"text\": \"ls\"}\n[/CODE]");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<code"));
//! ```

mod converter;
mod processor;

pub use converter::MarkdownConverter;
pub use processor::{ComponentProcessor, SubstitutionResult};
