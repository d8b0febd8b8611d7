//! In-line text markup elements.

use htmlgen_core::{delegate_element, Child, ContainerElement, Element};

macro_rules! inline_element {
    ($(#[$meta:meta])* $name:ident => $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            element: Element,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    element: Element::new($tag),
                }
            }

            /// Create the element with one child.
            pub fn with(content: impl Into<Child>) -> Self {
                let mut element = Self::new();
                element.append(content);
                element
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        delegate_element!(container $name => element);
    };
}

inline_element! {
    /// An in-line `<span>` element.
    ///
    /// Spans have no semantic meaning. They are containers for styling or
    /// scripting.
    ///
    /// ```
    /// use htmlgen::{ContainerElement, Generator, Span};
    ///
    /// let mut span = Span::new();
    /// span.append("Example text");
    /// assert_eq!(span.render(), Span::with("Example text").render());
    /// ```
    Span => "span"
}

inline_element! {
    /// An in-line highlighting (`<b>`) element.
    ///
    /// Highlights words without giving them more importance. Not necessarily
    /// displayed in bold; use CSS for styling.
    ///
    /// ```
    /// use htmlgen::{Alternate, ContainerElement, Generator, Highlight, Span};
    ///
    /// let mut span = Span::new();
    /// span.append("The ");
    /// span.append(Highlight::with("swordfish"));
    /// span.append(" is a member of the ");
    /// span.append(Alternate::with("Xiphiidae"));
    /// span.append(" family.");
    /// assert_eq!(
    ///     span.render(),
    ///     "<span>The <b>swordfish</b> is a member of the <i>Xiphiidae</i> family.</span>"
    /// );
    /// ```
    Highlight => "b"
}

inline_element! {
    /// An in-line element for strong importance or urgency (`<strong>`).
    Strong => "strong"
}

inline_element! {
    /// An in-line element for alternate voice text (`<i>`), such as a term
    /// being introduced.
    Alternate => "i"
}

inline_element! {
    /// A stress emphasis (`<em>`) element.
    Emphasis => "em"
}

inline_element! {
    /// Side comments and small print (`<small>`).
    Small => "small"
}
