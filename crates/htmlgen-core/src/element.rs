//! Generic HTML elements.
//!
//! [`Element`] has content and renders a start tag, its children and an end
//! tag. [`VoidElement`] has no content and self-closes. Both share the
//! attribute, CSS class and style storage of [`Attributes`].
//!
//! Specific elements wrap one of these and forward to it with
//! [`delegate_element!`](crate::delegate_element). An element that computes
//! its children from other owned state implements [`Generator`] itself and
//! calls [`Element::generate_with`].

use crate::attribute::{Attributes, StringAttribute};
use crate::generator::{Child, ChildGenerator, Fragment, Fragments, Generator};
use std::borrow::Cow;
use std::fmt;
use std::iter;

/// HTML5 void elements (self-closing, no children).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Check if a tag name is an HTML5 void element.
pub fn is_void_element(element_name: &str) -> bool {
    VOID_ELEMENTS.contains(&element_name)
}

const ID: StringAttribute = StringAttribute::new("id");

/// Attribute, class and style operations shared by all elements.
pub trait HtmlElement: Generator {
    fn element_name(&self) -> &str;
    fn attributes(&self) -> &Attributes;
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Set an HTML attribute to a string value.
    ///
    /// ```
    /// use htmlgen_core::{Element, Generator, HtmlElement};
    ///
    /// let mut element = Element::new("div");
    /// element.set_attribute("title", "Test Title");
    /// assert_eq!(element.render(), "<div title=\"Test Title\"></div>");
    /// ```
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes_mut().set(name, value);
    }

    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }

    /// Remove an attribute. Does nothing if it is not set.
    fn remove_attribute(&mut self, name: &str) {
        self.attributes_mut().remove(name);
    }

    fn add_css_class(&mut self, css_class: &str) {
        self.attributes_mut().add_css_class(css_class);
    }

    fn add_css_classes(&mut self, css_classes: &[&str]) {
        for css_class in css_classes {
            self.add_css_class(css_class);
        }
    }

    fn remove_css_class(&mut self, css_class: &str) {
        self.attributes_mut().remove_css_class(css_class);
    }

    fn has_css_class(&self, css_class: &str) -> bool {
        self.attributes().has_css_class(css_class)
    }

    /// Set an inline CSS property.
    ///
    /// ```
    /// use htmlgen_core::{Element, Generator, HtmlElement};
    ///
    /// let mut element = Element::new("div");
    /// element.set_style("background-color", "green");
    /// assert_eq!(element.render(), "<div style=\"background-color: green\"></div>");
    /// ```
    fn set_style(&mut self, property: &str, value: &str) {
        self.attributes_mut().set_style(property, value);
    }

    fn style(&self, property: &str) -> Option<&str> {
        self.attributes().style(property)
    }

    fn remove_style(&mut self, property: &str) {
        self.attributes_mut().remove_style(property);
    }

    fn id(&self) -> Option<&str> {
        ID.get(self.attributes())
    }

    fn set_id(&mut self, id: Option<&str>) {
        ID.set(self.attributes_mut(), id);
    }
}

/// Child operations of elements with content.
///
/// These forward to the element's [`ChildGenerator`].
pub trait ContainerElement: HtmlElement {
    fn children(&self) -> &ChildGenerator;
    fn children_mut(&mut self) -> &mut ChildGenerator;

    /// Append a child. Text is escaped, elements are kept as they are.
    fn append(&mut self, child: impl Into<Child>)
    where
        Self: Sized,
    {
        self.children_mut().append(child);
    }

    /// Append a child without escaping. Never use this with untrusted text.
    fn append_raw(&mut self, child: impl Into<Child>)
    where
        Self: Sized,
    {
        self.children_mut().append_raw(child);
    }

    fn extend<C: Into<Child>>(&mut self, children: impl IntoIterator<Item = C>)
    where
        Self: Sized,
    {
        self.children_mut().extend(children);
    }

    fn extend_raw<C: Into<Child>>(&mut self, children: impl IntoIterator<Item = C>)
    where
        Self: Sized,
    {
        self.children_mut().extend_raw(children);
    }

    /// Number of children. A nested element counts as one.
    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Implement the element traits for a wrapper type by forwarding to one of
/// its fields.
///
/// - `container Type => field` forwards [`Generator`], [`HtmlElement`] and
///   [`ContainerElement`].
/// - `void Type => field` forwards [`Generator`] and [`HtmlElement`].
/// - `attributes Type => field` forwards only [`HtmlElement`], for types
///   that generate their own children.
///
/// All forms also implement `Display` and `From<Type> for Child`.
#[macro_export]
macro_rules! delegate_element {
    (container $ty:ty => $field:ident) => {
        $crate::delegate_element!(void $ty => $field);

        impl $crate::element::ContainerElement for $ty {
            fn children(&self) -> &$crate::generator::ChildGenerator {
                $crate::element::ContainerElement::children(&self.$field)
            }

            fn children_mut(&mut self) -> &mut $crate::generator::ChildGenerator {
                $crate::element::ContainerElement::children_mut(&mut self.$field)
            }
        }
    };
    (void $ty:ty => $field:ident) => {
        $crate::delegate_element!(attributes $ty => $field);

        impl $crate::generator::Generator for $ty {
            fn generate(&self) -> $crate::generator::Fragments<'_> {
                $crate::generator::Generator::generate(&self.$field)
            }
        }
    };
    (attributes $ty:ty => $field:ident) => {
        impl $crate::element::HtmlElement for $ty {
            fn element_name(&self) -> &str {
                $crate::element::HtmlElement::element_name(&self.$field)
            }

            fn attributes(&self) -> &$crate::attribute::Attributes {
                $crate::element::HtmlElement::attributes(&self.$field)
            }

            fn attributes_mut(&mut self) -> &mut $crate::attribute::Attributes {
                $crate::element::HtmlElement::attributes_mut(&mut self.$field)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::generator::Generator::write_to(self, f)
            }
        }

        impl ::std::convert::From<$ty> for $crate::generator::Child {
            fn from(element: $ty) -> Self {
                $crate::generator::Child::node(element)
            }
        }
    };
}

/// An HTML element with children.
///
/// ```
/// use htmlgen_core::{ContainerElement, Element, Generator, HtmlElement};
///
/// let mut link = Element::new("a");
/// link.set_attribute("href", "http://www.example.com/");
/// link.append("Test Link");
/// assert_eq!(link.render(), "<a href=\"http://www.example.com/\">Test Link</a>");
/// ```
#[derive(Debug)]
pub struct Element {
    element_name: Cow<'static, str>,
    attributes: Attributes,
    children: ChildGenerator,
}

impl Element {
    pub fn new(element_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            element_name: element_name.into(),
            attributes: Attributes::new(),
            children: ChildGenerator::new(),
        }
    }

    /// Generate this element's tags around `children` instead of the stored
    /// child list.
    pub fn generate_with<'a>(
        &'a self,
        children: impl Iterator<Item = Fragment<'a>> + 'a,
    ) -> Fragments<'a> {
        let start = iter::once_with(move || {
            let mut tag = self.attributes.render_start_tag(&self.element_name);
            tag.push('>');
            Fragment::Text(Cow::Owned(tag))
        });
        let end = iter::once_with(move || {
            Fragment::Text(Cow::Owned(format!("</{}>", self.element_name)))
        });
        Box::new(start.chain(children).chain(end))
    }
}

impl Generator for Element {
    fn generate(&self) -> Fragments<'_> {
        self.generate_with(self.children.generate())
    }
}

impl HtmlElement for Element {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl ContainerElement for Element {
    fn children(&self) -> &ChildGenerator {
        &self.children
    }

    fn children_mut(&mut self) -> &mut ChildGenerator {
        &mut self.children
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::node(element)
    }
}

/// A content-less HTML element such as `<br>` or `<link>`.
///
/// ```
/// use htmlgen_core::{Generator, HtmlElement, VoidElement};
///
/// let mut link = VoidElement::new("link");
/// link.set_attribute("rel", "stylesheet");
/// assert_eq!(link.render(), "<link rel=\"stylesheet\"/>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidElement {
    element_name: Cow<'static, str>,
    attributes: Attributes,
}

/// Older name of [`VoidElement`].
pub type ShortElement = VoidElement;

impl VoidElement {
    pub fn new(element_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            element_name: element_name.into(),
            attributes: Attributes::new(),
        }
    }
}

impl Generator for VoidElement {
    fn generate(&self) -> Fragments<'_> {
        Box::new(iter::once_with(move || {
            let mut tag = self.attributes.render_start_tag(&self.element_name);
            tag.push_str("/>");
            Fragment::Text(Cow::Owned(tag))
        }))
    }
}

impl HtmlElement for VoidElement {
    fn element_name(&self) -> &str {
        &self.element_name
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl fmt::Display for VoidElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl From<VoidElement> for Child {
    fn from(element: VoidElement) -> Self {
        Child::node(element)
    }
}
