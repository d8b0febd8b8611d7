//! The fragment generation protocol.
//!
//! A [`Generator`] produces a lazy sequence of [`Fragment`]s each time it is
//! asked. Fragments are either text or another generator, which is expanded
//! in place when the sequence is flattened. Nothing is consumed: generating
//! twice from unchanged state yields the same output.
//!
//! ```text
//! Element ─ generate() ─→ "<div>" Nested(child) "</div>"
//!                                   └─ generate() ─→ "<b>" "x" "</b>"
//! fragments()          ─→ "<div>" "<b>" "x" "</b>" "</div>"
//! ```

use crate::escape::escape_text;
use std::borrow::Cow;
use std::fmt;

/// One unit of generated output.
pub enum Fragment<'a> {
    /// Markup text, emitted verbatim.
    Text(Cow<'a, str>),
    /// A nested generator, expanded when flattening.
    Nested(&'a dyn Generator),
}

impl<'a> Fragment<'a> {
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Fragment::Text(text.into())
    }
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Fragment::Nested(generator) => f
                .debug_tuple("Nested")
                .field(&generator.render())
                .finish(),
        }
    }
}

/// A boxed, lazily evaluated fragment sequence.
pub type Fragments<'a> = Box<dyn Iterator<Item = Fragment<'a>> + 'a>;

/// Something that can produce markup on demand.
pub trait Generator {
    /// Produce this generator's top-level fragments.
    ///
    /// Must be re-invocable: each call re-derives the sequence from the
    /// current state.
    fn generate(&self) -> Fragments<'_>;

    /// The fully flattened sequence of text fragments.
    fn fragments(&self) -> Flatten<'_> {
        Flatten {
            stack: vec![self.generate()],
        }
    }

    /// Render to a single string.
    fn render(&self) -> String {
        self.fragments().collect()
    }

    /// Render to UTF-8 bytes.
    fn render_bytes(&self) -> Vec<u8> {
        self.render().into_bytes()
    }

    /// Stream the rendered markup into `out` without building one string.
    fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for fragment in self.fragments() {
            out.write_str(&fragment)?;
        }
        Ok(())
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self) -> Fragments<'_> {
        (**self).generate()
    }
}

impl<G: Generator + ?Sized> Generator for &G {
    fn generate(&self) -> Fragments<'_> {
        (**self).generate()
    }
}

/// Depth-first flattening of a fragment tree into text.
pub struct Flatten<'a> {
    stack: Vec<Fragments<'a>>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Fragment::Text(text)) => return Some(text),
                Some(Fragment::Nested(generator)) => self.stack.push(generator.generate()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A child to be inserted into a [`ChildGenerator`].
///
/// Text is escaped by [`ChildGenerator::append`] and kept literal by
/// [`ChildGenerator::append_raw`]. Nodes are always kept verbatim, since a
/// nested generator escapes its own content.
pub enum Child {
    Text(String),
    Node(Box<dyn Generator>),
}

impl Child {
    pub fn node(generator: impl Generator + 'static) -> Self {
        Child::Node(Box::new(generator))
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&String> for Child {
    fn from(text: &String) -> Self {
        Child::Text(text.clone())
    }
}

impl From<Box<dyn Generator>> for Child {
    fn from(generator: Box<dyn Generator>) -> Self {
        Child::Node(generator)
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Child::Node(node) => f.debug_tuple("Node").field(&node.render()).finish(),
        }
    }
}

/// A stored child: markup that is ready to emit, or a nested generator.
enum Entry {
    Markup(String),
    Node(Box<dyn Generator>),
}

/// An ordered, mutable list of children.
///
/// Insertion order is render order. Text children are escaped when they are
/// inserted, so rendering never escapes twice.
#[derive(Default)]
pub struct ChildGenerator {
    entries: Vec<Entry>,
}

impl ChildGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child, escaping it if it is text.
    pub fn append(&mut self, child: impl Into<Child>) {
        let entry = match child.into() {
            Child::Text(text) => Entry::Markup(escape_text(&text).into_owned()),
            Child::Node(node) => Entry::Node(node),
        };
        self.entries.push(entry);
    }

    /// Append a child without escaping.
    ///
    /// Only use this with trusted content: the text is emitted as markup.
    pub fn append_raw(&mut self, child: impl Into<Child>) {
        let entry = match child.into() {
            Child::Text(text) => Entry::Markup(text),
            Child::Node(node) => Entry::Node(node),
        };
        self.entries.push(entry);
    }

    pub fn extend<C: Into<Child>>(&mut self, children: impl IntoIterator<Item = C>) {
        for child in children {
            self.append(child);
        }
    }

    pub fn extend_raw<C: Into<Child>>(&mut self, children: impl IntoIterator<Item = C>) {
        for child in children {
            self.append_raw(child);
        }
    }

    /// Number of top-level children. A nested generator counts as one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Generator for ChildGenerator {
    fn generate(&self) -> Fragments<'_> {
        Box::new(self.entries.iter().map(|entry| match entry {
            Entry::Markup(markup) => Fragment::Text(Cow::Borrowed(markup.as_str())),
            Entry::Node(node) => Fragment::Nested(node.as_ref()),
        }))
    }
}

impl fmt::Debug for ChildGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildGenerator")
            .field("len", &self.len())
            .field("markup", &self.render())
            .finish()
    }
}

impl fmt::Display for ChildGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
