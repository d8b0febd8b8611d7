//! htmlgen core
//!
//! The element, attribute and generator model that every htmlgen element is
//! built from. Elements store attributes as strings, expose typed accessors
//! on top of them and render lazily into a stream of markup fragments.
//!
//! ```text
//! Element { attributes, classes, styles, children } → generate() → fragments → String
//! ```
//!
//! # Example
//!
//! ```
//! use htmlgen_core::{ContainerElement, Element, Generator, HtmlElement};
//!
//! let mut span = Element::new("span");
//! span.add_css_class("my-css");
//! span.set_style("color", "red");
//! span.append("Test & Test");
//! assert_eq!(
//!     span.render(),
//!     "<span class=\"my-css\" style=\"color: red\">Test &amp; Test</span>"
//! );
//! ```

pub mod attribute;
pub mod element;
pub mod escape;
pub mod generator;

pub use attribute::{
    AttributeNumber, Attributes, BooleanAttribute, FloatAttribute, IntAttribute,
    NumericAttribute, StringAttribute,
};
pub use element::{
    is_void_element, ContainerElement, Element, HtmlElement, ShortElement, VoidElement,
    VOID_ELEMENTS,
};
pub use generator::{Child, ChildGenerator, Flatten, Fragment, Fragments, Generator};

/// A stored attribute value that does not parse as the accessor's type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid value for attribute '{attribute}': {value:?} is not a valid {expected}")]
pub struct ParseError {
    pub attribute: String,
    pub value: String,
    pub expected: &'static str,
}
