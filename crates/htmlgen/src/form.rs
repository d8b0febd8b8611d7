//! Form elements: `<form>`, the `<input>` family, buttons, text areas and
//! selection lists.

use crate::LookupError;
use chrono::NaiveDate;
use htmlgen_core::escape::escape_text;
use htmlgen_core::{
    delegate_element, BooleanAttribute, Child, ContainerElement, Element, FloatAttribute,
    Fragment, Fragments, Generator, HtmlElement, IntAttribute, ParseError, StringAttribute,
    VoidElement,
};
use std::borrow::Cow;

const ENC_TYPE_URL_ENCODED: &str = "application/x-www-form-urlencoded";
const ENC_TYPE_MULTI_PART: &str = "multipart/form-data";
const DATE_FORMAT: &str = "%Y-%m-%d";

const METHOD: StringAttribute = StringAttribute::with_default("method", "GET");
const ACTION: StringAttribute = StringAttribute::with_default("action", "");
const ENCTYPE: StringAttribute = StringAttribute::with_default("enctype", ENC_TYPE_URL_ENCODED);

const NAME: StringAttribute = StringAttribute::with_default("name", "");
const FIELD_NAME: StringAttribute = StringAttribute::new("name");
const VALUE: StringAttribute = StringAttribute::with_default("value", "");
const TYPE: StringAttribute = StringAttribute::new("type");
const PLACEHOLDER: StringAttribute = StringAttribute::new("placeholder");
const LABEL: StringAttribute = StringAttribute::new("label");
const SIZE: IntAttribute = IntAttribute::new("size");
const COLS: IntAttribute = IntAttribute::new("cols");
const ROWS: IntAttribute = IntAttribute::new("rows");
const MIN: FloatAttribute = FloatAttribute::new("min");
const MAX: FloatAttribute = FloatAttribute::new("max");
const STEP: FloatAttribute = FloatAttribute::new("step");
const READONLY: BooleanAttribute = BooleanAttribute::new("readonly");
const DISABLED: BooleanAttribute = BooleanAttribute::new("disabled");
const AUTOFOCUS: BooleanAttribute = BooleanAttribute::new("autofocus");
const SELECTED: BooleanAttribute = BooleanAttribute::new("selected");

// =========================================================================
// Form
// =========================================================================

/// A `<form>` element.
///
/// ```
/// use htmlgen::{Child, ContainerElement, Division, Form, SubmitButton, TextInput};
///
/// let mut form = Form::new("POST", "/feedback");
/// form.append(Division::with_children([Child::from("Name: "), TextInput::new("name").into()]));
/// form.append(Division::with_children([SubmitButton::new("Submit")]));
///
/// // Forms containing file inputs must be multipart.
/// form.set_multipart(true);
/// assert_eq!(form.encryption_type(), "multipart/form-data");
/// ```
#[derive(Debug)]
pub struct Form {
    element: Element,
}

impl Form {
    pub fn new(method: &str, url: &str) -> Self {
        let mut form = Self {
            element: Element::new("form"),
        };
        form.set_method(method);
        form.set_url(url);
        form
    }

    pub fn method(&self) -> &str {
        METHOD.get(self.attributes()).unwrap_or_default()
    }

    pub fn set_method(&mut self, method: &str) {
        METHOD.set(self.attributes_mut(), Some(method));
    }

    /// The `action` URL.
    pub fn url(&self) -> &str {
        ACTION.get(self.attributes()).unwrap_or_default()
    }

    pub fn set_url(&mut self, url: &str) {
        ACTION.set(self.attributes_mut(), Some(url));
    }

    /// The `enctype`.
    pub fn encryption_type(&self) -> &str {
        ENCTYPE.get(self.attributes()).unwrap_or_default()
    }

    pub fn set_encryption_type(&mut self, encryption_type: &str) {
        ENCTYPE.set(self.attributes_mut(), Some(encryption_type));
    }

    pub fn multipart(&self) -> bool {
        self.encryption_type() == ENC_TYPE_MULTI_PART
    }

    pub fn set_multipart(&mut self, multipart: bool) {
        if multipart {
            self.set_encryption_type(ENC_TYPE_MULTI_PART);
        } else {
            self.set_encryption_type(ENC_TYPE_URL_ENCODED);
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new("GET", "")
    }
}

delegate_element!(container Form => element);

// =========================================================================
// Inputs
// =========================================================================

/// Attributes shared by every `<input>` element.
pub trait InputElement: HtmlElement {
    /// The name used when submitting the form. Empty if unset.
    fn name(&self) -> &str {
        NAME.get(self.attributes()).unwrap_or_default()
    }

    fn set_name(&mut self, name: &str) {
        NAME.set(self.attributes_mut(), Some(name));
    }

    /// The current value. Empty if unset.
    fn value(&self) -> &str {
        VALUE.get(self.attributes()).unwrap_or_default()
    }

    fn set_value(&mut self, value: &str) {
        VALUE.set(self.attributes_mut(), Some(value));
    }

    /// The `type` attribute.
    fn input_type(&self) -> Option<&str> {
        TYPE.get(self.attributes())
    }

    fn set_input_type(&mut self, input_type: Option<&str>) {
        TYPE.set(self.attributes_mut(), input_type);
    }

    fn placeholder(&self) -> Option<&str> {
        PLACEHOLDER.get(self.attributes())
    }

    fn set_placeholder(&mut self, placeholder: Option<&str>) {
        PLACEHOLDER.set(self.attributes_mut(), placeholder);
    }

    fn size(&self) -> Result<Option<i64>, ParseError> {
        SIZE.get(self.attributes())
    }

    fn set_size(&mut self, size: Option<i64>) {
        SIZE.set(self.attributes_mut(), size);
    }

    fn readonly(&self) -> bool {
        READONLY.get(self.attributes())
    }

    fn set_readonly(&mut self, readonly: bool) {
        READONLY.set(self.attributes_mut(), readonly);
    }

    fn disabled(&self) -> bool {
        DISABLED.get(self.attributes())
    }

    fn set_disabled(&mut self, disabled: bool) {
        DISABLED.set(self.attributes_mut(), disabled);
    }

    /// The `autofocus` attribute.
    fn focus(&self) -> bool {
        AUTOFOCUS.get(self.attributes())
    }

    fn set_focus(&mut self, focus: bool) {
        AUTOFOCUS.set(self.attributes_mut(), focus);
    }
}

/// An `<input>` element.
///
/// Most input types have a more specific wrapper, such as [`TextInput`].
///
/// ```
/// use htmlgen::{Generator, Input, InputElement};
///
/// let mut input = Input::new("text", "description");
/// input.set_size(Some(20));
/// input.set_placeholder(Some("Enter description..."));
/// assert_eq!(
///     input.render(),
///     "<input name=\"description\" placeholder=\"Enter description...\" size=\"20\" type=\"text\"/>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    element: VoidElement,
}

impl Input {
    pub fn new(input_type: &str, name: &str) -> Self {
        let mut input = Self {
            element: VoidElement::new("input"),
        };
        input.set_input_type(Some(input_type));
        input.set_name(name);
        input
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new("text", "")
    }
}

delegate_element!(void Input => element);
impl InputElement for Input {}

/// A text input (`<input type="text">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    input: Input,
}

impl TextInput {
    pub fn new(name: &str) -> Self {
        Self {
            input: Input::new("text", name),
        }
    }

    pub fn with_value(name: &str, value: &str) -> Self {
        let mut input = Self::new(name);
        input.set_value(value);
        input
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new("")
    }
}

delegate_element!(void TextInput => input);
impl InputElement for TextInput {}

/// A password input (`<input type="password">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordInput {
    input: Input,
}

impl PasswordInput {
    pub fn new(name: &str) -> Self {
        Self {
            input: Input::new("password", name),
        }
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new("")
    }
}

delegate_element!(void PasswordInput => input);
impl InputElement for PasswordInput {}

/// A number input (`<input type="number">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInput {
    input: Input,
}

impl NumberInput {
    pub fn new(name: &str) -> Self {
        Self {
            input: Input::new("number", name),
        }
    }

    pub fn with_value(name: &str, value: f64) -> Self {
        let mut input = Self::new(name);
        input.set_value(&value.to_string());
        input
    }

    /// The `min` attribute.
    pub fn minimum(&self) -> Result<Option<f64>, ParseError> {
        MIN.get(self.attributes())
    }

    pub fn set_minimum(&mut self, minimum: Option<f64>) {
        MIN.set(self.attributes_mut(), minimum);
    }

    /// The `max` attribute.
    pub fn maximum(&self) -> Result<Option<f64>, ParseError> {
        MAX.get(self.attributes())
    }

    pub fn set_maximum(&mut self, maximum: Option<f64>) {
        MAX.set(self.attributes_mut(), maximum);
    }

    pub fn step(&self) -> Result<Option<f64>, ParseError> {
        STEP.get(self.attributes())
    }

    pub fn set_step(&mut self, step: Option<f64>) {
        STEP.set(self.attributes_mut(), step);
    }
}

impl Default for NumberInput {
    fn default() -> Self {
        Self::new("")
    }
}

delegate_element!(void NumberInput => input);
impl InputElement for NumberInput {}

/// A date input (`<input type="date">`).
///
/// The date is stored in the `value` attribute as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInput {
    input: Input,
}

impl DateInput {
    pub fn new(name: &str) -> Self {
        Self {
            input: Input::new("date", name),
        }
    }

    pub fn with_date(name: &str, date: NaiveDate) -> Self {
        let mut input = Self::new(name);
        input.set_date(Some(date));
        input
    }

    /// The value parsed as a date.
    ///
    /// Only the leading `YYYY-MM-DD` is read, so `2014-03-22T10:00` gives
    /// 2014-03-22. `None` if the value does not start with a valid date. The
    /// raw value is left untouched either way.
    pub fn date(&self) -> Option<NaiveDate> {
        let value = self.value();
        let Some(prefix) = value.get(..10).filter(|prefix| is_date_shaped(prefix)) else {
            tracing::trace!(value, "date input value does not start with YYYY-MM-DD");
            return None;
        };
        NaiveDate::parse_from_str(prefix, DATE_FORMAT)
            .inspect_err(|_| tracing::trace!(value, "date input value is not a date"))
            .ok()
    }

    /// Set the value to a date, or clear it.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(date) => self.set_value(&date.format(DATE_FORMAT).to_string()),
            None => self.set_value(""),
        }
    }
}

/// `DDDD-DD-DD` with ASCII digits.
fn is_date_shaped(text: &str) -> bool {
    text.len() == 10
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl Default for DateInput {
    fn default() -> Self {
        Self::new("")
    }
}

delegate_element!(void DateInput => input);
impl InputElement for DateInput {}

/// A submit button (`<input type="submit">`).
///
/// The label is the input's value.
///
/// ```
/// use htmlgen::{InputElement, SubmitButton};
///
/// let button = SubmitButton::new("My Label");
/// assert_eq!(button.label(), "My Label");
/// assert_eq!(button.value(), "My Label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    input: Input,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        let mut button = Self {
            input: Input::new("submit", ""),
        };
        button.set_label(label);
        button
    }

    pub fn label(&self) -> &str {
        self.value()
    }

    pub fn set_label(&mut self, label: &str) {
        self.set_value(label);
    }
}

delegate_element!(void SubmitButton => input);
impl InputElement for SubmitButton {}

// =========================================================================
// Buttons and text areas
// =========================================================================

/// A `<button>` element.
#[derive(Debug)]
pub struct Button {
    element: Element,
}

impl Button {
    pub fn new() -> Self {
        Self {
            element: Element::new("button"),
        }
    }

    pub fn with_children<C: Into<Child>>(children: impl IntoIterator<Item = C>) -> Self {
        let mut button = Self::new();
        button.extend(children);
        button
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

delegate_element!(container Button => element);

/// A `<textarea>` element.
#[derive(Debug)]
pub struct TextArea {
    element: Element,
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            element: Element::new("textarea"),
        }
    }

    pub fn with_name(name: &str) -> Self {
        let mut text_area = Self::new();
        text_area.set_name(Some(name));
        text_area
    }

    pub fn name(&self) -> Option<&str> {
        FIELD_NAME.get(self.attributes())
    }

    pub fn set_name(&mut self, name: Option<&str>) {
        FIELD_NAME.set(self.attributes_mut(), name);
    }

    pub fn readonly(&self) -> bool {
        READONLY.get(self.attributes())
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        READONLY.set(self.attributes_mut(), readonly);
    }

    pub fn disabled(&self) -> bool {
        DISABLED.get(self.attributes())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        DISABLED.set(self.attributes_mut(), disabled);
    }

    /// The `cols` attribute.
    pub fn columns(&self) -> Result<Option<i64>, ParseError> {
        COLS.get(self.attributes())
    }

    pub fn set_columns(&mut self, columns: Option<i64>) {
        COLS.set(self.attributes_mut(), columns);
    }

    pub fn rows(&self) -> Result<Option<i64>, ParseError> {
        ROWS.get(self.attributes())
    }

    pub fn set_rows(&mut self, rows: Option<i64>) {
        ROWS.set(self.attributes_mut(), rows);
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

delegate_element!(container TextArea => element);

// =========================================================================
// Selection lists
// =========================================================================

/// A child of a selection list or option group.
enum Item {
    Option(SelectOption),
    Group(OptionGroup),
    Markup(String),
    Node(Box<dyn Generator>),
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Option(option) => std::fmt::Debug::fmt(option, f),
            Item::Group(group) => std::fmt::Debug::fmt(group, f),
            Item::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
            Item::Node(node) => f.debug_tuple("Node").field(&node.render()).finish(),
        }
    }
}

impl Item {
    fn options(&self) -> Box<dyn Iterator<Item = &SelectOption> + '_> {
        match self {
            Item::Option(option) => Box::new(std::iter::once(option)),
            Item::Group(group) => Box::new(group.items.direct_options()),
            Item::Markup(_) | Item::Node(_) => Box::new(std::iter::empty()),
        }
    }

    fn options_mut(&mut self) -> Box<dyn Iterator<Item = &mut SelectOption> + '_> {
        match self {
            Item::Option(option) => Box::new(std::iter::once(option)),
            Item::Group(group) => Box::new(group.items.direct_options_mut()),
            Item::Markup(_) | Item::Node(_) => Box::new(std::iter::empty()),
        }
    }
}

/// Something that can be appended to a [`Select`] or an [`OptionGroup`].
///
/// Options and groups stay selectable. Anything else is opaque content:
/// options nested inside it are not part of the selection.
///
/// Other elements convert through [`Child`], as in
/// `select.append(Child::from(division))`.
#[derive(Debug)]
pub enum SelectChild {
    Option(SelectOption),
    Group(OptionGroup),
    Other(Child),
}

impl From<SelectOption> for SelectChild {
    fn from(option: SelectOption) -> Self {
        SelectChild::Option(option)
    }
}

impl From<OptionGroup> for SelectChild {
    fn from(group: OptionGroup) -> Self {
        SelectChild::Group(group)
    }
}

impl From<Child> for SelectChild {
    fn from(child: Child) -> Self {
        SelectChild::Other(child)
    }
}

impl From<&str> for SelectChild {
    fn from(text: &str) -> Self {
        SelectChild::Other(text.into())
    }
}

impl From<String> for SelectChild {
    fn from(text: String) -> Self {
        SelectChild::Other(text.into())
    }
}

impl From<Element> for SelectChild {
    fn from(element: Element) -> Self {
        SelectChild::Other(element.into())
    }
}

/// The children of a `<select>` or `<optgroup>`, in render order.
///
/// Options are found directly in the list or directly inside an option
/// group, never inside any other nested element.
#[derive(Debug, Default)]
struct Items {
    items: Vec<Item>,
}

impl Items {
    fn push(&mut self, child: SelectChild) {
        let item = match child {
            SelectChild::Option(option) => Item::Option(option),
            SelectChild::Group(group) => Item::Group(group),
            SelectChild::Other(Child::Text(text)) => {
                Item::Markup(escape_text(&text).into_owned())
            }
            SelectChild::Other(Child::Node(node)) => Item::Node(node),
        };
        self.items.push(item);
    }

    fn push_option(&mut self, option: SelectOption) -> &mut SelectOption {
        self.items.push(Item::Option(option));
        match self.items.last_mut() {
            Some(Item::Option(option)) => option,
            _ => unreachable!("an option was just pushed"),
        }
    }

    fn push_group(&mut self, group: OptionGroup) -> &mut OptionGroup {
        self.items.push(Item::Group(group));
        match self.items.last_mut() {
            Some(Item::Group(group)) => group,
            _ => unreachable!("a group was just pushed"),
        }
    }

    fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.items.iter().flat_map(Item::options)
    }

    fn options_mut(&mut self) -> impl Iterator<Item = &mut SelectOption> {
        self.items.iter_mut().flat_map(Item::options_mut)
    }

    fn direct_options(&self) -> impl Iterator<Item = &SelectOption> {
        self.items.iter().filter_map(|item| match item {
            Item::Option(option) => Some(option),
            _ => None,
        })
    }

    fn direct_options_mut(&mut self) -> impl Iterator<Item = &mut SelectOption> {
        self.items.iter_mut().filter_map(|item| match item {
            Item::Option(option) => Some(option),
            _ => None,
        })
    }

    fn generate(&self) -> impl Iterator<Item = Fragment<'_>> {
        self.items.iter().map(|item| match item {
            Item::Option(option) => Fragment::Nested(option),
            Item::Group(group) => Fragment::Nested(group),
            Item::Markup(markup) => Fragment::Text(Cow::Borrowed(markup.as_str())),
            Item::Node(node) => Fragment::Nested(node.as_ref()),
        })
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// A single-selection list (`<select>`).
///
/// At most one option is selected after any selection change made through
/// the list.
///
/// ```
/// use htmlgen::Select;
///
/// let mut select = Select::with_name("element-name");
/// select.create_option("Option 1", Some("v1"), false);
/// select.create_option("Option 2", Some("v2"), true);
/// assert_eq!(select.selected_index(), Some(1));
/// assert_eq!(select.selected_value().as_deref(), Some("v2"));
/// select.set_selected_value("v1").unwrap();
/// assert_eq!(select.selected_index(), Some(0));
///
/// let group = select.create_group("Group 1");
/// group.create_option("Option 3", None);
/// assert_eq!(select.options().count(), 3);
/// ```
///
/// Multiple selection lists are not supported.
#[derive(Debug)]
pub struct Select {
    element: Element,
    items: Items,
}

impl Select {
    pub fn new() -> Self {
        Self {
            element: Element::new("select"),
            items: Items::default(),
        }
    }

    pub fn with_name(name: &str) -> Self {
        let mut select = Self::new();
        select.set_name(Some(name));
        select
    }

    pub fn name(&self) -> Option<&str> {
        FIELD_NAME.get(self.attributes())
    }

    pub fn set_name(&mut self, name: Option<&str>) {
        FIELD_NAME.set(self.attributes_mut(), name);
    }

    pub fn disabled(&self) -> bool {
        DISABLED.get(self.attributes())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        DISABLED.set(self.attributes_mut(), disabled);
    }

    /// Append an option, a group or other content. Text is escaped.
    ///
    /// Appended options keep their selection state.
    pub fn append(&mut self, child: impl Into<SelectChild>) {
        self.items.push(child.into());
    }

    /// Append an option as is, keeping its selection state.
    pub fn append_option(&mut self, option: SelectOption) -> &mut SelectOption {
        self.items.push_option(option)
    }

    pub fn append_group(&mut self, group: OptionGroup) -> &mut OptionGroup {
        self.items.push_group(group)
    }

    /// Create and append an option group.
    pub fn create_group(&mut self, label: &str) -> &mut OptionGroup {
        self.items.push_group(OptionGroup::new(label))
    }

    /// Create and append an option, making it the only selected option if
    /// `selected` is true.
    pub fn create_option(
        &mut self,
        label: &str,
        value: Option<&str>,
        selected: bool,
    ) -> &mut SelectOption {
        if selected {
            self.deselect_all();
        }
        let mut option = SelectOption::new(label, value);
        option.set_selected(selected);
        self.items.push_option(option)
    }

    /// All selectable options, including those inside option groups.
    pub fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.items.options()
    }

    pub fn options_mut(&mut self) -> impl Iterator<Item = &mut SelectOption> {
        self.items.options_mut()
    }

    /// The first selected option.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options().find(|option| option.selected())
    }

    /// The position of the first selected option in [`options`](Self::options).
    pub fn selected_index(&self) -> Option<usize> {
        self.options().position(|option| option.selected())
    }

    /// Select the option at `index` in [`options`](Self::options) and
    /// deselect all others.
    pub fn set_selected_index(&mut self, index: usize) -> Result<(), LookupError> {
        let count = self.options().count();
        if index >= count {
            tracing::debug!(index, count, "no option at index");
            return Err(LookupError::Index(index));
        }
        for (i, option) in self.options_mut().enumerate() {
            if option.selected() && i != index {
                tracing::trace!(index = i, "deselecting option");
            }
            option.set_selected(i == index);
        }
        tracing::debug!(index, "selected option");
        Ok(())
    }

    /// The value of the first selected option.
    pub fn selected_value(&self) -> Option<Cow<'_, str>> {
        self.selected_option().map(SelectOption::value)
    }

    /// Select the first option with the given value.
    ///
    /// Fails with [`LookupError::Value`] if no option has that value. The
    /// selection is unchanged in that case.
    pub fn set_selected_value(&mut self, value: &str) -> Result<(), LookupError> {
        let Some(index) = self.options().position(|option| option.value() == value) else {
            tracing::debug!(value, "no option with value");
            return Err(LookupError::Value(value.to_string()));
        };
        self.set_selected_index(index)
    }

    /// Number of top-level children. A group counts as one.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn deselect_all(&mut self) {
        for option in self.options_mut() {
            option.set_selected(false);
        }
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Select {
    fn generate(&self) -> Fragments<'_> {
        self.element.generate_with(self.items.generate())
    }
}

delegate_element!(attributes Select => element);

/// An option group (`<optgroup>`) inside a selection list.
#[derive(Debug)]
pub struct OptionGroup {
    element: Element,
    items: Items,
}

impl OptionGroup {
    pub fn new(label: &str) -> Self {
        let mut group = Self {
            element: Element::new("optgroup"),
            items: Items::default(),
        };
        group.set_label(Some(label));
        group
    }

    pub fn label(&self) -> Option<&str> {
        LABEL.get(self.attributes())
    }

    pub fn set_label(&mut self, label: Option<&str>) {
        LABEL.set(self.attributes_mut(), label);
    }

    pub fn disabled(&self) -> bool {
        DISABLED.get(self.attributes())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        DISABLED.set(self.attributes_mut(), disabled);
    }

    /// Append an option or other content. Text is escaped.
    pub fn append(&mut self, child: impl Into<SelectChild>) {
        self.items.push(child.into());
    }

    pub fn append_option(&mut self, option: SelectOption) -> &mut SelectOption {
        self.items.push_option(option)
    }

    /// Create and append an option.
    pub fn create_option(&mut self, label: &str, value: Option<&str>) -> &mut SelectOption {
        self.items.push_option(SelectOption::new(label, value))
    }

    pub fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.items.direct_options()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Generator for OptionGroup {
    fn generate(&self) -> Fragments<'_> {
        self.element.generate_with(self.items.generate())
    }
}

delegate_element!(attributes OptionGroup => element);

/// A selection list option (`<option>`).
///
/// ```
/// use htmlgen::{Generator, SelectOption};
///
/// assert_eq!(SelectOption::new("Label", None).render(), "<option>Label</option>");
/// assert_eq!(
///     SelectOption::new("Label", Some("test-value")).render(),
///     "<option value=\"test-value\">Label</option>"
/// );
/// ```
#[derive(Debug)]
pub struct SelectOption {
    element: Element,
}

impl SelectOption {
    pub fn new(label: &str, value: Option<&str>) -> Self {
        let mut option = Self {
            element: Element::new("option"),
        };
        option.set_value(value);
        option.append(label);
        option
    }

    /// The `value` attribute, or the rendered label if it is unset.
    pub fn value(&self) -> Cow<'_, str> {
        match self.get_attribute("value") {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(self.children().render()),
        }
    }

    pub fn set_value(&mut self, value: Option<&str>) {
        match value {
            Some(value) => self.set_attribute("value", value),
            None => self.remove_attribute("value"),
        }
    }

    pub fn selected(&self) -> bool {
        SELECTED.get(self.attributes())
    }

    pub fn set_selected(&mut self, selected: bool) {
        SELECTED.set(self.attributes_mut(), selected);
    }

    pub fn disabled(&self) -> bool {
        DISABLED.get(self.attributes())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        DISABLED.set(self.attributes_mut(), disabled);
    }
}

delegate_element!(container SelectOption => element);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragments(generator: &dyn Generator) -> Vec<String> {
        generator.fragments().map(Cow::into_owned).collect()
    }

    fn selected_labels(select: &Select) -> Vec<String> {
        select
            .options()
            .filter(|option| option.selected())
            .map(|option| option.children().render())
            .collect()
    }

    // =========================================================================
    // Form
    // =========================================================================

    #[test]
    fn test_form_arguments() {
        let form = Form::new("PUT", "/test");
        assert_eq!(form.method(), "PUT");
        assert_eq!(form.url(), "/test");
        assert_eq!(
            fragments(&form),
            vec!["<form action=\"/test\" method=\"PUT\">", "</form>"]
        );
    }

    #[test]
    fn test_form_defaults() {
        let form = Form::default();
        assert_eq!(form.method(), "GET");
        assert_eq!(form.url(), "");
        assert_eq!(fragments(&form), vec!["<form>", "</form>"]);
    }

    #[test]
    fn test_form_multipart() {
        let mut form = Form::default();
        assert!(!form.multipart());
        assert_eq!(form.encryption_type(), "application/x-www-form-urlencoded");
        form.set_multipart(true);
        assert_eq!(form.encryption_type(), "multipart/form-data");
        assert_eq!(form.render(), "<form enctype=\"multipart/form-data\"></form>");
        form.set_multipart(false);
        assert_eq!(form.encryption_type(), "application/x-www-form-urlencoded");
        assert_eq!(form.render(), "<form></form>");
        form.set_encryption_type("multipart/form-data");
        assert!(form.multipart());
    }

    // =========================================================================
    // Input family
    // =========================================================================

    #[test]
    fn test_input_with_name() {
        let input = Input::new("number", "my-name");
        assert_eq!(input.input_type(), Some("number"));
        assert_eq!(input.name(), "my-name");
        assert_eq!(input.value(), "");
        assert_eq!(
            fragments(&input),
            vec!["<input name=\"my-name\" type=\"number\"/>"]
        );
    }

    #[test]
    fn test_input_defaults() {
        let input = Input::default();
        assert_eq!(input.input_type(), Some("text"));
        assert_eq!(input.name(), "");
        assert_eq!(input.render(), "<input type=\"text\"/>");
    }

    #[test]
    fn test_number_type_only() {
        assert_eq!(Input::new("number", "").render(), "<input type=\"number\"/>");
    }

    #[test]
    fn test_input_attributes() {
        let mut input = Input::default();
        input.set_placeholder(Some("Foo"));
        input.set_size(Some(5));
        input.set_value("My Value");
        assert_eq!(input.size(), Ok(Some(5)));
        assert_eq!(
            input.render(),
            "<input placeholder=\"Foo\" size=\"5\" type=\"text\" value=\"My Value\"/>"
        );
    }

    #[test]
    fn test_input_size_parse_error() {
        let mut input = Input::default();
        input.set_attribute("size", "large");
        assert!(input.size().is_err());
        assert_eq!(input.render(), "<input size=\"large\" type=\"text\"/>");
    }

    #[test]
    fn test_input_boolean_attributes() {
        let mut input = Input::default();
        input.set_disabled(true);
        input.set_focus(true);
        input.set_readonly(true);
        assert!(input.disabled() && input.focus() && input.readonly());
        assert_eq!(
            input.render(),
            "<input autofocus=\"autofocus\" disabled=\"disabled\" readonly=\"readonly\" type=\"text\"/>"
        );
        input.set_disabled(false);
        assert!(!input.disabled());
        assert_eq!(
            input.render(),
            "<input autofocus=\"autofocus\" readonly=\"readonly\" type=\"text\"/>"
        );
    }

    #[test]
    fn test_input_empty_value_elided() {
        let mut input = Input::default();
        input.set_value("x");
        input.set_value("");
        assert_eq!(input.render(), "<input type=\"text\"/>");
    }

    #[test]
    fn test_text_input() {
        let input = TextInput::default();
        assert_eq!(input.input_type(), Some("text"));
        assert_eq!(input.render(), "<input type=\"text\"/>");

        let input = TextInput::with_value("my-text", "Default Value");
        assert_eq!(input.name(), "my-text");
        assert_eq!(input.value(), "Default Value");
        assert_eq!(
            input.render(),
            "<input name=\"my-text\" type=\"text\" value=\"Default Value\"/>"
        );
    }

    #[test]
    fn test_password_input() {
        assert_eq!(
            PasswordInput::default().render(),
            "<input type=\"password\"/>"
        );
        let input = PasswordInput::new("my-pw");
        assert_eq!(input.name(), "my-pw");
        assert_eq!(input.render(), "<input name=\"my-pw\" type=\"password\"/>");
    }

    #[test]
    fn test_number_input() {
        let number = NumberInput::default();
        assert_eq!(number.value(), "");
        assert_eq!(number.render(), "<input type=\"number\"/>");

        let number = NumberInput::with_value("my-number", 3.4);
        assert_eq!(number.value(), "3.4");
        assert_eq!(
            number.render(),
            "<input name=\"my-number\" type=\"number\" value=\"3.4\"/>"
        );
    }

    #[test]
    fn test_number_input_zero() {
        let number = NumberInput::with_value("", 0.0);
        assert_eq!(number.value(), "0");
        assert_eq!(number.render(), "<input type=\"number\" value=\"0\"/>");
    }

    #[test]
    fn test_number_input_limits() {
        let mut number = NumberInput::default();
        number.set_minimum(Some(4.1));
        number.set_maximum(Some(10.5));
        number.set_step(Some(0.8));
        assert_eq!(number.minimum(), Ok(Some(4.1)));
        assert_eq!(number.maximum(), Ok(Some(10.5)));
        assert_eq!(number.step(), Ok(Some(0.8)));
        assert_eq!(
            number.render(),
            "<input max=\"10.5\" min=\"4.1\" step=\"0.8\" type=\"number\"/>"
        );
    }

    #[test]
    fn test_date_input_defaults() {
        let input = DateInput::default();
        assert_eq!(input.input_type(), Some("date"));
        assert_eq!(input.date(), None);
        assert_eq!(input.value(), "");
        assert_eq!(input.render(), "<input type=\"date\"/>");
    }

    #[test]
    fn test_date_input_with_date() {
        let date = NaiveDate::from_ymd_opt(2014, 3, 22).unwrap();
        let input = DateInput::with_date("my-date", date);
        assert_eq!(input.date(), Some(date));
        assert_eq!(input.value(), "2014-03-22");
        assert_eq!(
            input.render(),
            "<input name=\"my-date\" type=\"date\" value=\"2014-03-22\"/>"
        );
    }

    #[test]
    fn test_date_input_requires_fixed_pattern() {
        let mut input = DateInput::default();
        for value in ["2014-3-2", "14-03-22", "+2014-03-22", "2014/03/22", "2014-13-40"] {
            input.set_value(value);
            assert_eq!(input.date(), None, "{value}");
            assert_eq!(input.value(), value);
        }
    }

    #[test]
    fn test_date_input_reads_leading_date() {
        let mut input = DateInput::default();
        input.set_value("2014-03-22T10:00");
        assert_eq!(input.date(), NaiveDate::from_ymd_opt(2014, 3, 22));
        assert_eq!(input.value(), "2014-03-22T10:00");
    }

    #[test]
    fn test_date_input_raw_value() {
        let mut input = DateInput::default();
        input.set_value("2012-03-08");
        assert_eq!(input.date(), NaiveDate::from_ymd_opt(2012, 3, 8));
        input.set_value("invalid");
        assert_eq!(input.date(), None);
        assert_eq!(input.value(), "invalid");
        assert_eq!(input.render(), "<input type=\"date\" value=\"invalid\"/>");
        input.set_date(None);
        assert_eq!(input.value(), "");
        assert_eq!(input.render(), "<input type=\"date\"/>");
    }

    #[test]
    fn test_submit_button() {
        let button = SubmitButton::new("My Label");
        assert_eq!(button.label(), "My Label");
        assert_eq!(button.value(), "My Label");
        assert_eq!(
            fragments(&button),
            vec!["<input type=\"submit\" value=\"My Label\"/>"]
        );
    }

    #[test]
    fn test_submit_button_label_alias() {
        let mut button = SubmitButton::new("");
        button.set_label("My Label");
        assert_eq!(button.label(), "My Label");
        assert_eq!(button.value(), "My Label");
        button.set_value("New Label");
        assert_eq!(button.label(), "New Label");
    }

    // =========================================================================
    // Button, TextArea
    // =========================================================================

    #[test]
    fn test_button_children() {
        let button = Button::with_children(["Foo", "bar"]);
        assert_eq!(button.render(), "<button>Foobar</button>");
    }

    #[test]
    fn test_text_area() {
        assert_eq!(
            TextArea::with_name("my-name").render(),
            "<textarea name=\"my-name\"></textarea>"
        );
        assert_eq!(TextArea::new().render(), "<textarea></textarea>");
    }

    #[test]
    fn test_text_area_attributes() {
        let mut text_area = TextArea::new();
        text_area.set_columns(Some(40));
        text_area.set_rows(Some(3));
        text_area.set_readonly(true);
        text_area.append("Initial <content>");
        assert_eq!(text_area.columns(), Ok(Some(40)));
        assert_eq!(text_area.rows(), Ok(Some(3)));
        assert_eq!(
            text_area.render(),
            "<textarea cols=\"40\" readonly=\"readonly\" rows=\"3\">Initial &lt;content&gt;</textarea>"
        );
    }

    // =========================================================================
    // Select
    // =========================================================================

    #[test]
    fn test_select_name() {
        let select = Select::with_name("my-name");
        assert_eq!(select.name(), Some("my-name"));
        assert!(!select.disabled());
        assert_eq!(select.render(), "<select name=\"my-name\"></select>");
        let select = Select::new();
        assert_eq!(select.name(), None);
        assert_eq!(select.render(), "<select></select>");
    }

    #[test]
    fn test_create_group() {
        let mut select = Select::new();
        let group = select.create_group("Group Label");
        assert_eq!(group.label(), Some("Group Label"));
        assert_eq!(
            select.render(),
            "<select><optgroup label=\"Group Label\"></optgroup></select>"
        );
    }

    #[test]
    fn test_create_option() {
        let mut select = Select::new();
        select.create_option("Option Label", None, false);
        assert_eq!(
            select.render(),
            "<select><option>Option Label</option></select>"
        );
    }

    #[test]
    fn test_create_option_selected() {
        let mut select = Select::new();
        let option = select.create_option("Option Label", Some("test-value"), true);
        assert_eq!(option.element_name(), "option");
        assert_eq!(option.value(), "test-value");
        assert!(option.selected());
        assert_eq!(select.selected_index(), Some(0));
        assert_eq!(
            select.render(),
            "<select><option selected=\"selected\" value=\"test-value\">Option Label</option></select>"
        );
    }

    #[test]
    fn test_create_option_default_value() {
        let mut select = Select::new();
        let option = select.create_option("Option Label", None, false);
        assert_eq!(option.value(), "Option Label");
    }

    #[test]
    fn test_create_option_deselects_others() {
        let mut select = Select::new();
        select.create_option("L1", None, false);
        select.create_option("L2", None, true);
        select.create_option("L3", None, true);
        assert_eq!(selected_labels(&select), vec!["L3"]);
        assert_eq!(select.selected_index(), Some(2));
    }

    #[test]
    fn test_create_option_deselects_in_groups() {
        let mut select = Select::new();
        let group = select.create_group("G");
        group.create_option("L1", None).set_selected(true);
        select.create_option("L2", None, true);
        assert_eq!(selected_labels(&select), vec!["L2"]);
    }

    #[test]
    fn test_selected_option() {
        let mut select = Select::new();
        select.create_option("L1", Some("v1"), false);
        select.create_option("L2", Some("v2"), true);
        select.create_option("L3", Some("v3"), false);
        let option = select.selected_option().unwrap();
        assert_eq!(option.value(), "v2");
    }

    #[test]
    fn test_selected_option_returns_first() {
        let mut select = Select::new();
        let mut option1 = SelectOption::new("L1", None);
        option1.set_selected(true);
        let mut option2 = SelectOption::new("L2", None);
        option2.set_selected(true);
        select.append_option(option1);
        select.append_option(option2);
        assert_eq!(select.selected_index(), Some(0));
        assert_eq!(select.selected_value().as_deref(), Some("L1"));
    }

    #[test]
    fn test_selected_option_none() {
        let mut select = Select::new();
        select.create_option("L1", Some("v1"), false);
        select.create_option("L2", Some("v2"), false);
        assert!(select.selected_option().is_none());
        assert_eq!(select.selected_value(), None);
    }

    #[test]
    fn test_selected_option_text_children() {
        let mut select = Select::new();
        select.append("String Content");
        assert!(select.selected_option().is_none());
        select.create_option("L1", None, false);
        select.set_selected_index(0).unwrap();
        assert_eq!(select.len(), 2);
        assert_eq!(
            select.render(),
            "<select>String Content<option selected=\"selected\">L1</option></select>"
        );
    }

    #[test]
    fn test_selected_option_in_group() {
        let mut select = Select::new();
        let group = select.create_group("");
        group.create_option("", None).set_selected(true);
        assert_eq!(select.selected_index(), Some(0));
    }

    #[test]
    fn test_group_with_text_child() {
        let mut select = Select::new();
        select.create_group("").append("XXX");
        assert!(select.selected_option().is_none());
        assert_eq!(select.options().count(), 0);
    }

    #[test]
    fn test_nested_container_options_ignored() {
        let mut select = Select::new();
        let mut division = Element::new("div");
        division.append(SelectOption::new("Hidden", None));
        select.append(division);
        assert_eq!(select.options().count(), 0);
        assert_eq!(
            select.set_selected_value("Hidden"),
            Err(LookupError::Value("Hidden".into()))
        );
    }

    #[test]
    fn test_appended_option_is_selectable() {
        let mut select = Select::new();
        let mut option = SelectOption::new("A", Some("a"));
        option.set_selected(true);
        select.append(option);
        assert_eq!(select.selected_value().as_deref(), Some("a"));
        select.create_option("B", Some("b"), true);
        assert_eq!(selected_labels(&select), vec!["B"]);
        assert_eq!(
            select.render(),
            "<select><option value=\"a\">A</option>\
             <option selected=\"selected\" value=\"b\">B</option></select>"
        );
        select.set_selected_value("a").unwrap();
        assert_eq!(selected_labels(&select), vec!["A"]);
    }

    #[test]
    fn test_appended_group_is_selectable() {
        let mut group = OptionGroup::new("G");
        group.append(SelectOption::new("In Group", Some("g1")));
        let mut select = Select::new();
        select.create_option("Top", Some("t"), true);
        select.append(group);
        assert_eq!(select.options().count(), 2);
        select.set_selected_value("g1").unwrap();
        assert_eq!(selected_labels(&select), vec!["In Group"]);
        assert_eq!(select.selected_index(), Some(1));
    }

    #[test]
    fn test_set_selected_index_deselects_others() {
        let mut select = Select::new();
        select.create_option("L1", None, true);
        select.create_option("L2", None, false);
        select.set_selected_index(1).unwrap();
        assert_eq!(selected_labels(&select), vec!["L2"]);
    }

    #[test]
    fn test_set_selected_index_out_of_range() {
        let mut select = Select::new();
        select.create_option("L1", None, true);
        assert_eq!(select.set_selected_index(3), Err(LookupError::Index(3)));
        assert_eq!(selected_labels(&select), vec!["L1"]);
    }

    #[test]
    fn test_selected_value() {
        let mut select = Select::new();
        select.create_option("L1", Some("v1"), false);
        select.create_option("L2", Some("v2"), true);
        assert_eq!(select.selected_value().as_deref(), Some("v2"));
    }

    #[test]
    fn test_selected_value_implicit() {
        let mut select = Select::new();
        select.create_option("L1", None, false);
        select.create_option("L2", None, true);
        assert_eq!(select.selected_value().as_deref(), Some("L2"));
    }

    #[test]
    fn test_set_selected_value() {
        let mut select = Select::new();
        select.create_option("L1", Some("v1"), false);
        select.create_option("L2", Some("v2"), false);
        select.create_option("L3", Some("v3"), false);
        select.set_selected_value("v2").unwrap();
        assert_eq!(select.selected_value().as_deref(), Some("v2"));
        assert_eq!(select.selected_index(), Some(1));
    }

    #[test]
    fn test_set_selected_value_not_found() {
        let mut select = Select::new();
        select.create_option("L1", Some("v1"), false);
        select.create_option("L2", Some("v2"), true);
        let err = select.set_selected_value("not-found").unwrap_err();
        assert_eq!(err.to_string(), "no option with value 'not-found' found");
        assert_eq!(select.selected_value().as_deref(), Some("v2"));
    }

    #[test]
    fn test_single_selection_over_mixed_calls() {
        let mut select = Select::new();
        select.create_option("a", None, true);
        select.create_group("g").create_option("b", None);
        select.create_option("c", None, true);
        assert!(selected_labels(&select).len() <= 1);
        select.set_selected_value("b").unwrap();
        assert_eq!(selected_labels(&select), vec!["b"]);
        select.create_option("d", None, false);
        assert_eq!(selected_labels(&select), vec!["b"]);
        select.set_selected_index(0).unwrap();
        assert_eq!(selected_labels(&select), vec!["a"]);
    }

    // =========================================================================
    // OptionGroup, SelectOption
    // =========================================================================

    #[test]
    fn test_option_group() {
        let mut group = OptionGroup::new("Test Label");
        assert_eq!(group.label(), Some("Test Label"));
        assert!(!group.disabled());
        assert_eq!(group.render(), "<optgroup label=\"Test Label\"></optgroup>");
        group.set_disabled(true);
        assert_eq!(
            group.render(),
            "<optgroup disabled=\"disabled\" label=\"Test Label\"></optgroup>"
        );
    }

    #[test]
    fn test_option_group_create_option() {
        let mut group = OptionGroup::new("");
        group.create_option("Option Label", None);
        assert_eq!(group.len(), 1);
        assert_eq!(
            group.render(),
            "<optgroup label=\"\"><option>Option Label</option></optgroup>"
        );
    }

    #[test]
    fn test_option_default_value() {
        let option = SelectOption::new("Test Label", None);
        assert_eq!(option.value(), "Test Label");
        assert_eq!(option.render(), "<option>Test Label</option>");
        assert!(!option.selected());
        assert!(!option.disabled());
    }

    #[test]
    fn test_option_escaped_label_value() {
        let option = SelectOption::new("A & B", None);
        assert_eq!(option.value(), "A &amp; B");
    }

    #[test]
    fn test_option_set_value() {
        let mut option = SelectOption::new("Test Label", None);
        option.set_value(Some("test-value"));
        assert_eq!(option.value(), "test-value");
        assert_eq!(
            option.render(),
            "<option value=\"test-value\">Test Label</option>"
        );
        option.set_value(None);
        assert_eq!(option.value(), "Test Label");
        assert_eq!(option.render(), "<option>Test Label</option>");
    }
}
