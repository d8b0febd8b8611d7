//! htmlgen
//!
//! HTML 5 generation with typed element builders instead of string
//! templates. Elements are plain values: build a tree, then render it as a
//! whole or stream its fragments.
//!
//! ```text
//! Document ─┬─ Head ─┬─ Title
//!           │        ├─ Meta (charset)
//!           │        └─ HeadLink / Script ...
//!           └─ Body ─── Division / Form / Span / ...
//! ```
//!
//! # Example
//!
//! ```
//! use htmlgen::{ContainerElement, Document, Emphasis, Generator, Span};
//!
//! let mut doc = Document::with_title("Greeting");
//! let mut span = Span::new();
//! span.append(Emphasis::with("Hello"));
//! span.append(", World & friends!");
//! doc.append_body(span);
//! assert!(doc
//!     .render()
//!     .ends_with("<body><span><em>Hello</em>, World &amp; friends!</span></body></html>"));
//! ```

pub mod block;
pub mod document;
pub mod form;
pub mod inline;

pub use block::{Division, Main};
pub use document::{Body, Document, Head, HeadLink, HtmlRoot, Meta, Script, Title};
pub use form::{
    Button, DateInput, Form, Input, InputElement, NumberInput, OptionGroup, PasswordInput,
    Select, SelectChild, SelectOption, SubmitButton, TextArea, TextInput,
};
pub use htmlgen_core::escape::{escape_attribute, escape_text};
pub use htmlgen_core::{
    delegate_element, is_void_element, Attributes, BooleanAttribute, Child, ChildGenerator,
    ContainerElement, Element, FloatAttribute, Fragment, Fragments, Generator, HtmlElement,
    IntAttribute, ParseError, ShortElement, StringAttribute, VoidElement,
};
pub use inline::{Alternate, Emphasis, Highlight, Small, Span, Strong};

/// A selection list has no option matching the request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("no option with value '{0}' found")]
    Value(String),
    #[error("no option at index {0}")]
    Index(usize),
}
