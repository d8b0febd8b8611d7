//! Block-level container elements.

use htmlgen_core::{delegate_element, Child, ContainerElement, Element};

/// A `<div>` element.
///
/// ```
/// use htmlgen::{Child, Division, Generator, TextInput};
///
/// let division = Division::with_children([Child::from("Name: "), TextInput::new("name").into()]);
/// assert_eq!(
///     division.render(),
///     "<div>Name: <input name=\"name\" type=\"text\"/></div>"
/// );
/// ```
#[derive(Debug)]
pub struct Division {
    element: Element,
}

impl Division {
    pub fn new() -> Self {
        Self {
            element: Element::new("div"),
        }
    }

    pub fn with_children<C: Into<Child>>(children: impl IntoIterator<Item = C>) -> Self {
        let mut division = Self::new();
        division.extend(children);
        division
    }
}

impl Default for Division {
    fn default() -> Self {
        Self::new()
    }
}

delegate_element!(container Division => element);

/// The `<main>` content of a document.
#[derive(Debug)]
pub struct Main {
    element: Element,
}

impl Main {
    pub fn new() -> Self {
        Self {
            element: Element::new("main"),
        }
    }
}

impl Default for Main {
    fn default() -> Self {
        Self::new()
    }
}

delegate_element!(container Main => element);
