//! Tree queries for rendered components.
//!
//! Testing Library-style queries over the in-memory view tree. Queries
//! prioritize accessibility (role) over implementation details (test
//! IDs), and all of them return matches in document order (depth-first
//! preorder).

use std::sync::Arc;

use grappelli_pages::{ElementView, View};

/// An owned handle to one element inside a rendered snapshot.
///
/// The handle keeps the whole tree alive and records the path to its
/// element, so query results can outlive the `Screen` that produced
/// them and still be dispatched to later.
#[derive(Debug, Clone)]
pub struct ElementRef {
	root: Arc<View>,
	path: Vec<usize>,
}

impl ElementRef {
	fn new(root: Arc<View>, path: Vec<usize>) -> Self {
		Self { root, path }
	}

	/// Resolves the handle to its element.
	fn resolve(&self) -> &ElementView {
		let mut view: &View = &self.root;
		for &index in &self.path {
			view = match view {
				View::Element(el) => &el.child_views()[index],
				View::Fragment(children) => &children[index],
				_ => panic!("element path descends into a leaf view"),
			};
		}
		match view {
			View::Element(el) => el,
			_ => panic!("element path does not resolve to an element"),
		}
	}

	/// Every element on the path from the root to this element,
	/// inclusive, in document order. Used for event bubbling.
	pub(crate) fn element_chain(&self) -> Vec<&ElementView> {
		let mut chain = Vec::new();
		let mut view: &View = &self.root;
		if let View::Element(el) = view {
			chain.push(el);
		}
		for &index in &self.path {
			view = match view {
				View::Element(el) => &el.child_views()[index],
				View::Fragment(children) => &children[index],
				_ => panic!("element path descends into a leaf view"),
			};
			if let View::Element(el) = view {
				chain.push(el);
			}
		}
		chain
	}

	/// Returns the element's tag name.
	pub fn tag_name(&self) -> &str {
		self.resolve().tag_name()
	}

	/// Returns the value of the named attribute, if set.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.resolve().attr_value(name)
	}

	/// Returns whether the element carries the named attribute.
	pub fn has_attr(&self, name: &str) -> bool {
		self.resolve().attr_value(name).is_some()
	}

	/// Returns the concatenated text content of the element's subtree.
	pub fn text_content(&self) -> String {
		self.resolve().text_content()
	}
}

/// Result of a tree query.
///
/// Contains zero or more elements matching the query criteria, plus a
/// human-readable description used in panic messages.
#[derive(Debug, Clone)]
pub struct QueryResult {
	hits: Vec<ElementRef>,
	query_description: String,
}

impl QueryResult {
	fn new(hits: Vec<ElementRef>, description: impl Into<String>) -> Self {
		Self {
			hits,
			query_description: description.into(),
		}
	}

	/// Get the first matching element.
	///
	/// # Panics
	///
	/// Panics if no elements match. Use [`QueryResult::query`] for a
	/// non-panicking alternative.
	pub fn get(&self) -> ElementRef {
		self.hits
			.first()
			.cloned()
			.unwrap_or_else(|| panic!("No element found for query: {}", self.query_description))
	}

	/// Get the first matching element, or `None` if no match.
	pub fn query(&self) -> Option<ElementRef> {
		self.hits.first().cloned()
	}

	/// Get all matching elements, in document order.
	pub fn get_all(&self) -> Vec<ElementRef> {
		self.hits.clone()
	}

	/// Get the number of matching elements.
	pub fn count(&self) -> usize {
		self.hits.len()
	}

	/// Check if any elements matched the query.
	pub fn exists(&self) -> bool {
		!self.hits.is_empty()
	}

	/// Assert that exactly one element was found and return it.
	///
	/// # Panics
	///
	/// Panics if zero or more than one element is found.
	pub fn get_only(&self) -> ElementRef {
		match self.hits.len() {
			0 => panic!("No element found for query: {}", self.query_description),
			1 => self.hits[0].clone(),
			n => panic!(
				"Expected exactly one element for query '{}', but found {}",
				self.query_description, n
			),
		}
	}

	/// Assert that at least one element matched.
	///
	/// # Panics
	///
	/// Panics if no elements match.
	pub fn should_exist(&self) {
		if self.hits.is_empty() {
			panic!(
				"Expected element to exist for query: {}",
				self.query_description
			);
		}
	}

	/// Assert that no elements matched.
	///
	/// # Panics
	///
	/// Panics if any elements match.
	pub fn should_not_exist(&self) {
		if !self.hits.is_empty() {
			panic!(
				"Expected no elements for query '{}', but found {}",
				self.query_description,
				self.hits.len()
			);
		}
	}

	/// Get the query description.
	pub fn description(&self) -> &str {
		&self.query_description
	}
}

/// Query handle over one rendered snapshot.
#[derive(Debug, Clone)]
pub struct Screen {
	root: Arc<View>,
}

impl Screen {
	pub(crate) fn new(root: Arc<View>) -> Self {
		Self { root }
	}

	fn collect(
		&self,
		description: String,
		mut pred: impl FnMut(&ElementView) -> bool,
	) -> QueryResult {
		let mut hits = Vec::new();
		let mut path = Vec::new();
		visit(&self.root, &mut path, &mut |el, path| {
			if pred(el) {
				hits.push(ElementRef::new(Arc::clone(&self.root), path.to_vec()));
			}
		});
		QueryResult::new(hits, description)
	}

	/// Query elements by tag name.
	pub fn get_by_tag(&self, tag: &str) -> QueryResult {
		self.collect(format!("tag=\"{}\"", tag), |el| el.tag_name() == tag)
	}

	/// Query elements by their ARIA role.
	///
	/// Matches both explicit `role` attributes and the implicit roles of
	/// common HTML elements (a `button` tag, an `input type="submit"`,
	/// and so on).
	pub fn get_by_role(&self, role: &str) -> QueryResult {
		let role = role.to_string();
		self.collect(format!("role=\"{}\"", role), move |el| {
			matches_role(el, &role)
		})
	}

	/// Query elements by their text content.
	///
	/// Performs a case-insensitive substring match, returning the
	/// leaf-most elements containing the text.
	pub fn get_by_text(&self, text: &str) -> QueryResult {
		let needle = text.to_lowercase();
		self.collect(format!("text=\"{}\"", text), move |el| {
			el.text_content().to_lowercase().contains(&needle)
				&& !el
					.child_views()
					.iter()
					.any(|child| child_element_contains(child, &needle))
		})
	}

	/// Query elements by their placeholder attribute.
	pub fn get_by_placeholder_text(&self, placeholder: &str) -> QueryResult {
		let needle = placeholder.to_lowercase();
		self.collect(format!("placeholder=\"{}\"", placeholder), move |el| {
			el.attr_value("placeholder")
				.is_some_and(|p| p.to_lowercase().contains(&needle))
		})
	}

	/// Query elements by their `data-testid` attribute.
	///
	/// Fallback for when accessibility-based queries are not practical.
	pub fn get_by_test_id(&self, test_id: &str) -> QueryResult {
		let test_id = test_id.to_string();
		self.collect(format!("data-testid=\"{}\"", test_id), move |el| {
			el.attr_value("data-testid") == Some(test_id.as_str())
		})
	}
}

/// Depth-first preorder walk handing each element and its path to `f`.
fn visit(view: &View, path: &mut Vec<usize>, f: &mut impl FnMut(&ElementView, &[usize])) {
	match view {
		View::Element(el) => {
			f(el, path);
			for (index, child) in el.child_views().iter().enumerate() {
				path.push(index);
				visit(child, path, f);
				path.pop();
			}
		}
		View::Fragment(children) => {
			for (index, child) in children.iter().enumerate() {
				path.push(index);
				visit(child, path, f);
				path.pop();
			}
		}
		View::Text(_) | View::Empty => {}
	}
}

/// Whether any element at or below `view` contains the needle.
fn child_element_contains(view: &View, needle: &str) -> bool {
	match view {
		View::Element(el) => el.text_content().to_lowercase().contains(needle),
		View::Fragment(children) => children
			.iter()
			.any(|child| child_element_contains(child, needle)),
		View::Text(_) | View::Empty => false,
	}
}

/// Explicit `role` attribute match, or the implicit role of the tag.
fn matches_role(el: &ElementView, role: &str) -> bool {
	if el.attr_value("role") == Some(role) {
		return true;
	}
	match role {
		"button" => {
			el.tag_name() == "button"
				|| (el.tag_name() == "input"
					&& matches!(el.attr_value("type"), Some("button") | Some("submit")))
		}
		"textbox" => {
			(el.tag_name() == "input"
				&& matches!(el.attr_value("type"), None | Some("text")))
				|| el.tag_name() == "textarea"
		}
		"checkbox" => el.tag_name() == "input" && el.attr_value("type") == Some("checkbox"),
		"radio" => el.tag_name() == "input" && el.attr_value("type") == Some("radio"),
		"link" => el.tag_name() == "a" && el.attr_value("href").is_some(),
		"heading" => matches!(el.tag_name(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6"),
		"form" => el.tag_name() == "form",
		_ => false,
	}
}
