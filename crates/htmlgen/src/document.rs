//! Document structure: the `<html>` root, `<head>` and `<body>`.
//!
//! A [`Document`] is built with its whole skeleton in place:
//!
//! ```text
//! <!DOCTYPE html>
//! <html lang xml:lang xmlns>
//!   <head> <title/> <meta charset/> stylesheets, scripts, ... </head>
//!   <body> ... </body>
//! </html>
//! ```

use htmlgen_core::escape::escape_text;
use htmlgen_core::{
    delegate_element, Child, ChildGenerator, ContainerElement, Element, Fragment,
    Fragments, Generator, HtmlElement, StringAttribute, VoidElement,
};
use std::borrow::Cow;
use std::iter;

const DOCTYPE: &str = "<!DOCTYPE html>";
const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_CHARSET: &str = "utf-8";

/// A complete HTML document.
///
/// ```
/// use htmlgen::{Document, Generator};
///
/// let mut doc = Document::with_title("Test Title");
/// doc.add_stylesheet("style.css");
/// doc.append_body("Hello & welcome");
/// assert_eq!(
///     doc.render(),
///     "<!DOCTYPE html>\
///      <html lang=\"en\" xml:lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\">\
///      <head><title>Test Title</title><meta charset=\"utf-8\"/>\
///      <link href=\"style.css\" rel=\"stylesheet\"/></head>\
///      <body>Hello &amp; welcome</body></html>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Document {
    root: HtmlRoot,
}

impl Document {
    pub fn new() -> Self {
        tracing::trace!("creating document");
        Self {
            root: HtmlRoot::new(),
        }
    }

    pub fn with_title(title: &str) -> Self {
        let mut doc = Self::new();
        doc.set_title(title);
        doc
    }

    /// Set the `lang` and `xml:lang` attributes of the root element.
    pub fn with_language(mut self, language: &str) -> Self {
        self.root.set_language(language);
        self
    }

    pub fn root(&self) -> &HtmlRoot {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut HtmlRoot {
        &mut self.root
    }

    pub fn title(&self) -> &str {
        self.root.head().title().title()
    }

    pub fn set_title(&mut self, title: &str) {
        self.root.head_mut().title_mut().set_title(title);
    }

    pub fn add_stylesheet(&mut self, url: &str) {
        self.root.head_mut().add_stylesheet(url);
    }

    pub fn add_stylesheets<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        self.root.head_mut().add_stylesheets(urls);
    }

    pub fn add_script(&mut self, url: &str) {
        self.root.head_mut().add_script(url);
    }

    pub fn add_scripts<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        self.root.head_mut().add_scripts(urls);
    }

    pub fn append_head(&mut self, child: impl Into<Child>) {
        self.root.head_mut().append(child);
    }

    pub fn append_body(&mut self, child: impl Into<Child>) {
        self.root.body_mut().append(child);
    }

    /// Append to the body without escaping. Never use with untrusted text.
    pub fn append_body_raw(&mut self, child: impl Into<Child>) {
        self.root.body_mut().append_raw(child);
    }
}

impl Generator for Document {
    fn generate(&self) -> Fragments<'_> {
        Box::new(
            iter::once(Fragment::text(DOCTYPE)).chain(iter::once(Fragment::Nested(&self.root))),
        )
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_to(f)
    }
}

/// The `<html>` root element, holding the head and the body.
#[derive(Debug)]
pub struct HtmlRoot {
    element: Element,
    head: Head,
    body: Body,
}

impl HtmlRoot {
    pub fn new() -> Self {
        let mut root = Self {
            element: Element::new("html"),
            head: Head::new(),
            body: Body::new(),
        };
        root.element.set_attribute("xmlns", XHTML_NAMESPACE);
        root.set_language(DEFAULT_LANGUAGE);
        root
    }

    pub fn with_title(title: &str) -> Self {
        let mut root = Self::new();
        root.head.title_mut().set_title(title);
        root
    }

    pub fn language(&self) -> Option<&str> {
        self.element.get_attribute("lang")
    }

    pub fn set_language(&mut self, language: &str) {
        self.element.set_attribute("lang", language);
        self.element.set_attribute("xml:lang", language);
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Head {
        &mut self.head
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Default for HtmlRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for HtmlRoot {
    fn generate(&self) -> Fragments<'_> {
        let children = [Fragment::Nested(&self.head), Fragment::Nested(&self.body)];
        self.element.generate_with(children.into_iter())
    }
}

delegate_element!(attributes HtmlRoot => element);

/// The document `<head>`.
///
/// Its children are the title, a charset declaration and then everything
/// appended to it.
#[derive(Debug)]
pub struct Head {
    element: Element,
    title: Title,
    charset: Meta,
}

impl Head {
    pub fn new() -> Self {
        Self {
            element: Element::new("head"),
            title: Title::new(""),
            charset: Meta::charset(DEFAULT_CHARSET),
        }
    }

    pub fn with_title(title: &str) -> Self {
        let mut head = Self::new();
        head.title.set_title(title);
        head
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut Title {
        &mut self.title
    }

    /// Replace the title element.
    pub fn set_title_element(&mut self, title: Title) {
        self.title = title;
    }

    pub fn add_stylesheet(&mut self, url: &str) {
        self.append(HeadLink::stylesheet(url));
    }

    pub fn add_stylesheets<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        for url in urls {
            self.add_stylesheet(url);
        }
    }

    pub fn add_script(&mut self, url: &str) {
        self.append(Script::external(url));
    }

    pub fn add_scripts<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        for url in urls {
            self.add_script(url);
        }
    }
}

impl Default for Head {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Head {
    fn generate(&self) -> Fragments<'_> {
        let fixed = [Fragment::Nested(&self.title), Fragment::Nested(&self.charset)];
        self.element
            .generate_with(fixed.into_iter().chain(self.element.children().generate()))
    }
}

delegate_element!(attributes Head => element);

impl ContainerElement for Head {
    fn children(&self) -> &ChildGenerator {
        self.element.children()
    }

    fn children_mut(&mut self) -> &mut ChildGenerator {
        self.element.children_mut()
    }

    /// Includes the title and charset declaration.
    fn len(&self) -> usize {
        2 + self.element.len()
    }
}

/// The document `<body>`.
#[derive(Debug)]
pub struct Body {
    element: Element,
}

impl Body {
    pub fn new() -> Self {
        Self {
            element: Element::new("body"),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

delegate_element!(container Body => element);

/// The document `<title>`.
#[derive(Debug)]
pub struct Title {
    element: Element,
    title: String,
}

impl Title {
    pub fn new(title: &str) -> Self {
        Self {
            element: Element::new("title"),
            title: title.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

impl Default for Title {
    fn default() -> Self {
        Self::new("")
    }
}

impl Generator for Title {
    fn generate(&self) -> Fragments<'_> {
        let text = (!self.title.is_empty()).then(|| Fragment::Text(escape_text(&self.title)));
        self.element.generate_with(text.into_iter())
    }
}

delegate_element!(attributes Title => element);

const CHARSET: StringAttribute = StringAttribute::new("charset");
const META_NAME: StringAttribute = StringAttribute::new("name");
const META_CONTENT: StringAttribute = StringAttribute::new("content");

/// A `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    element: VoidElement,
}

impl Meta {
    pub fn new() -> Self {
        Self {
            element: VoidElement::new("meta"),
        }
    }

    /// `<meta charset="..."/>`
    pub fn charset(charset: &str) -> Self {
        let mut meta = Self::new();
        CHARSET.set(meta.attributes_mut(), Some(charset));
        meta
    }

    /// `<meta name="..." content="..."/>`
    pub fn named(name: &str, content: &str) -> Self {
        let mut meta = Self::new();
        META_NAME.set(meta.attributes_mut(), Some(name));
        META_CONTENT.set(meta.attributes_mut(), Some(content));
        meta
    }

    pub fn charset_value(&self) -> Option<&str> {
        CHARSET.get(self.attributes())
    }

    pub fn name(&self) -> Option<&str> {
        META_NAME.get(self.attributes())
    }

    pub fn content(&self) -> Option<&str> {
        META_CONTENT.get(self.attributes())
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new()
    }
}

delegate_element!(void Meta => element);

const SRC: StringAttribute = StringAttribute::new("src");

/// A `<script>` element, either referencing a URL or carrying inline code.
///
/// Inline code is emitted as is, without escaping.
#[derive(Debug)]
pub struct Script {
    element: Element,
    script: Option<String>,
}

impl Script {
    pub fn new() -> Self {
        Self {
            element: Element::new("script"),
            script: None,
        }
    }

    pub fn external(url: &str) -> Self {
        let mut script = Self::new();
        script.set_url(Some(url));
        script
    }

    pub fn inline(code: &str) -> Self {
        let mut script = Self::new();
        script.set_script(Some(code));
        script
    }

    pub fn url(&self) -> Option<&str> {
        SRC.get(self.attributes())
    }

    pub fn set_url(&mut self, url: Option<&str>) {
        SRC.set(self.attributes_mut(), url);
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn set_script(&mut self, code: Option<&str>) {
        self.script = code.map(str::to_string);
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Script {
    fn generate(&self) -> Fragments<'_> {
        let code = self
            .script
            .as_deref()
            .map(|code| Fragment::Text(Cow::Borrowed(code)));
        self.element.generate_with(code.into_iter())
    }
}

delegate_element!(attributes Script => element);

const REL: StringAttribute = StringAttribute::new("rel");
const HREF: StringAttribute = StringAttribute::new("href");

/// A `<link>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadLink {
    element: VoidElement,
}

impl HeadLink {
    pub fn new(relation: &str, url: &str) -> Self {
        let mut link = Self {
            element: VoidElement::new("link"),
        };
        link.set_relation(Some(relation));
        link.set_url(Some(url));
        link
    }

    pub fn stylesheet(url: &str) -> Self {
        Self::new("stylesheet", url)
    }

    pub fn relation(&self) -> Option<&str> {
        REL.get(self.attributes())
    }

    pub fn set_relation(&mut self, relation: Option<&str>) {
        REL.set(self.attributes_mut(), relation);
    }

    pub fn url(&self) -> Option<&str> {
        HREF.get(self.attributes())
    }

    pub fn set_url(&mut self, url: Option<&str>) {
        HREF.set(self.attributes_mut(), url);
    }
}

delegate_element!(void HeadLink => element);
