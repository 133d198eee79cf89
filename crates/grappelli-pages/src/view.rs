//! View tree: the unified representation of renderable content.
//!
//! A [`View`] is either an element, a text node, a fragment, or nothing.
//! Elements carry their attributes, children, and event handlers, which
//! makes the tree inspectable by the test harness without a browser DOM.

use std::borrow::Cow;

use crate::events::{Event, EventHandler, EventType};

/// A unified representation of renderable content.
///
/// View is the core abstraction for all UI elements in the component
/// system. It can represent elements, text nodes, or fragments.
#[derive(Debug)]
pub enum View {
	/// An element node.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View>),
	/// An empty view (renders nothing).
	Empty,
}

/// An element in the view tree.
pub struct ElementView {
	/// The tag name (e.g., "div", "button").
	tag: Cow<'static, str>,
	/// Attributes, in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Event handlers attached to this element.
	event_handlers: Vec<(EventType, EventHandler)>,
}

impl std::fmt::Debug for ElementView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Attaches an event handler.
	pub fn on(mut self, event_type: EventType, handler: EventHandler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the named attribute, if set.
	///
	/// When an attribute was set more than once the first value wins,
	/// matching how the string renderer emits it.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, EventHandler)] {
		&self.event_handlers
	}

	/// Invokes every handler registered for the given event type.
	pub fn fire(&self, event_type: EventType, event: &Event) {
		for (ty, handler) in &self.event_handlers {
			if *ty == event_type {
				handler(event.clone());
			}
		}
	}

	/// Returns the concatenated text content of this element's subtree.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			View::Element(el) => {
				for child in el.child_views() {
					child.collect_text(out);
				}
			}
			View::Text(text) => out.push_str(text),
			View::Fragment(children) => {
				for child in children {
					child.collect_text(out);
				}
			}
			View::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a View.
///
/// This is the primary abstraction for renderable content. Implementing
/// this trait allows any type to be used in the view tree.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<A: IntoView, B: IntoView> IntoView for (A, B) {
	fn into_view(self) -> View {
		View::Fragment(vec![self.0.into_view(), self.1.into_view()])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView> IntoView for (A, B, C) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
		])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView, D: IntoView> IntoView for (A, B, C, D) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
			self.3.into_view(),
		])
	}
}

/// Escapes HTML special characters.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn test_element_view_creation() {
		let el = ElementView::new("div");
		assert_eq!(el.tag_name(), "div");
		assert!(!el.is_void());
		assert!(el.attrs().is_empty());
		assert!(el.child_views().is_empty());
	}

	#[test]
	fn test_void_element_detection() {
		assert!(ElementView::new("br").is_void());
		assert!(ElementView::new("input").is_void());
		assert!(!ElementView::new("button").is_void());
		assert!(!ElementView::new("form").is_void());
	}

	#[test]
	fn test_attr_value_first_wins() {
		let el = ElementView::new("div")
			.attr("class", "container")
			.attr("class", "shadowed");
		assert_eq!(el.attr_value("class"), Some("container"));
		assert_eq!(el.attr_value("id"), None);
	}

	#[test]
	fn test_render_simple_element() {
		let view = ElementView::new("div").into_view();
		assert_eq!(view.render_to_string(), "<div></div>");
	}

	#[test]
	fn test_render_element_with_attrs() {
		let view = ElementView::new("div")
			.attr("class", "container")
			.attr("id", "main")
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<div class=\"container\" id=\"main\"></div>"
		);
	}

	#[test]
	fn test_render_void_element() {
		let view = ElementView::new("input").attr("type", "text").into_view();
		assert_eq!(view.render_to_string(), "<input type=\"text\" />");
	}

	#[test]
	fn test_render_nested_elements() {
		let view = ElementView::new("div")
			.child("Hello, ")
			.child(ElementView::new("strong").child("World"))
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[test]
	fn test_render_text_with_escaping() {
		let view = View::text("<script>alert('xss')</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[test]
	fn test_render_attr_escaping() {
		let view = ElementView::new("input")
			.attr("value", "a\"b & c")
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<input value=\"a&quot;b &amp; c\" />"
		);
	}

	#[test]
	fn test_render_fragment_and_empty() {
		assert_eq!(
			View::fragment(["One", "Two", "Three"]).render_to_string(),
			"OneTwoThree"
		);
		assert_eq!(View::empty().render_to_string(), "");
	}

	#[test]
	fn test_text_content() {
		let el = ElementView::new("div")
			.child(ElementView::new("span").child("Hello"))
			.child(" ")
			.child(ElementView::new("span").child("World"));
		assert_eq!(el.text_content(), "Hello World");
	}

	#[test]
	fn test_into_view_conversions() {
		assert_eq!("Hello".into_view().render_to_string(), "Hello");
		assert_eq!(Some("Hi").into_view().render_to_string(), "Hi");
		assert_eq!(None::<String>.into_view().render_to_string(), "");
		assert_eq!(vec!["A", "B"].into_view().render_to_string(), "AB");
		assert_eq!(("a", "b", "c").into_view().render_to_string(), "abc");
	}

	#[test]
	fn test_fire_invokes_matching_handlers_only() {
		let clicks = Arc::new(AtomicUsize::new(0));
		let handler: EventHandler = {
			let clicks = Arc::clone(&clicks);
			Arc::new(move |_| {
				clicks.fetch_add(1, Ordering::SeqCst);
			})
		};
		let el = ElementView::new("button")
			.on(EventType::Click, Arc::clone(&handler))
			.on(EventType::Click, handler);

		el.fire(EventType::Click, &Event::new(EventType::Click));
		assert_eq!(clicks.load(Ordering::SeqCst), 2);

		el.fire(EventType::Focus, &Event::new(EventType::Focus));
		assert_eq!(clicks.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	#[case("Hello", "Hello")]
	#[case("a & b", "a &amp; b")]
	#[case("<tag>", "&lt;tag&gt;")]
	#[case("say \"hi\"", "say &quot;hi&quot;")]
	#[case("it's", "it&#x27;s")]
	fn test_html_escape_cases(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[test]
	fn test_html_escape_borrows_when_clean() {
		assert!(matches!(html_escape("Hello"), Cow::Borrowed(_)));
	}
}
