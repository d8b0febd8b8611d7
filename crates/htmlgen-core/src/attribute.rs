//! Attribute storage and typed attribute accessors.
//!
//! Every element stores its attributes as plain strings keyed by name. The
//! accessors in this module convert between those strings and typed values,
//! and remove the attribute when a value equals its declared default, so the
//! rendered markup stays minimal.
//!
//! ```
//! use htmlgen_core::attribute::{Attributes, BooleanAttribute, IntAttribute};
//!
//! const DISABLED: BooleanAttribute = BooleanAttribute::new("disabled");
//! const SIZE: IntAttribute = IntAttribute::with_default("size", 20);
//!
//! let mut attributes = Attributes::new();
//! DISABLED.set(&mut attributes, true);
//! SIZE.set(&mut attributes, Some(20));
//! assert_eq!(attributes.get("disabled"), Some("disabled"));
//! assert_eq!(attributes.get("size"), None);
//! assert_eq!(SIZE.get(&attributes), Ok(Some(20)));
//! ```

use crate::escape::escape_attribute;
use crate::ParseError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::str::FromStr;

/// The raw attribute, CSS class and inline style storage of an element.
///
/// All three collections iterate in name order, which makes rendering
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
    css_classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Remove an attribute. Removing an unset attribute does nothing.
    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn add_css_class(&mut self, css_class: impl Into<String>) {
        self.css_classes.insert(css_class.into());
    }

    pub fn remove_css_class(&mut self, css_class: &str) {
        self.css_classes.remove(css_class);
    }

    pub fn has_css_class(&self, css_class: &str) -> bool {
        self.css_classes.contains(css_class)
    }

    pub fn css_classes(&self) -> impl Iterator<Item = &str> {
        self.css_classes.iter().map(String::as_str)
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.styles.insert(property.into(), value.into());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn remove_style(&mut self, property: &str) {
        self.styles.remove(property);
    }

    /// True if nothing at all would be rendered inside the start tag.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.css_classes.is_empty() && self.styles.is_empty()
    }

    /// Render `<name attr="..." class="..." style="..."`, without the
    /// closing `>` or `/>`.
    pub fn render_start_tag(&self, element_name: &str) -> String {
        let mut html = String::new();
        html.push('<');
        html.push_str(element_name);
        for (name, value) in &self.values {
            push_attribute(&mut html, name, value);
        }
        if !self.css_classes.is_empty() {
            let classes: Vec<&str> = self.css_classes().collect();
            push_attribute(&mut html, "class", &classes.join(" "));
        }
        if !self.styles.is_empty() {
            let styles: Vec<String> = self
                .styles
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect();
            push_attribute(&mut html, "style", &styles.join("; "));
        }
        html
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

// =========================================================================
// Typed accessors
// =========================================================================

/// A string attribute with an optional default.
///
/// Reading an unset attribute returns the default. Writing `None` or the
/// default removes the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringAttribute {
    name: &'static str,
    default: Option<&'static str>,
}

impl StringAttribute {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'a>(&self, attributes: &'a Attributes) -> Option<&'a str> {
        attributes.get(self.name).or(self.default)
    }

    pub fn set(&self, attributes: &mut Attributes, value: Option<&str>) {
        match value {
            Some(value) if Some(value) != self.default => attributes.set(self.name, value),
            _ => attributes.remove(self.name),
        }
    }
}

/// A boolean attribute.
///
/// True is stored as the attribute's own name (`disabled="disabled"`),
/// false as absence. Any other stored value reads as false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanAttribute {
    name: &'static str,
}

impl BooleanAttribute {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, attributes: &Attributes) -> bool {
        attributes.get(self.name) == Some(self.name)
    }

    pub fn set(&self, attributes: &mut Attributes, value: bool) {
        if value {
            attributes.set(self.name, self.name);
        } else {
            attributes.remove(self.name);
        }
    }
}

/// Numeric types that can be stored in an attribute.
pub trait AttributeNumber: Copy + PartialEq + FromStr + Display {
    /// Used in parse error messages.
    const TYPE_NAME: &'static str;
}

impl AttributeNumber for i64 {
    const TYPE_NAME: &'static str = "integer";
}

impl AttributeNumber for u32 {
    const TYPE_NAME: &'static str = "unsigned integer";
}

impl AttributeNumber for f64 {
    const TYPE_NAME: &'static str = "number";
}

/// A numeric attribute with an optional default.
///
/// Reading fails with [`ParseError`] if the stored text is not a valid
/// number. Writing `None` or the default removes the attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericAttribute<T> {
    name: &'static str,
    default: Option<T>,
}

pub type IntAttribute = NumericAttribute<i64>;
pub type FloatAttribute = NumericAttribute<f64>;

impl<T> NumericAttribute<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    pub const fn with_default(name: &'static str, default: T) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: AttributeNumber> NumericAttribute<T> {
    pub fn get(&self, attributes: &Attributes) -> Result<Option<T>, ParseError> {
        let Some(raw) = attributes.get(self.name) else {
            return Ok(self.default);
        };
        raw.parse::<T>().map(Some).map_err(|_| {
            tracing::debug!(attribute = self.name, value = raw, "unparsable numeric attribute");
            ParseError {
                attribute: self.name.to_string(),
                value: raw.to_string(),
                expected: T::TYPE_NAME,
            }
        })
    }

    pub fn set(&self, attributes: &mut Attributes, value: Option<T>) {
        match value {
            Some(value) if Some(value) != self.default => {
                attributes.set(self.name, value.to_string())
            }
            _ => attributes.remove(self.name),
        }
    }
}
