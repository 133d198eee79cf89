//! Rendering components into an inspectable snapshot.
//!
//! [`RenderedPage::render`] performs a fresh render on every call, so a
//! test's `setup()` factory can be invoked repeatedly with no cross-call
//! interference; two rendered pages never share state.

use std::sync::Arc;

use grappelli_pages::{Component, IntoView, View};
use tracing::debug;

use crate::query::Screen;

/// One rendered snapshot of a component under test.
///
/// # Example
///
/// ```ignore
/// let page = RenderedPage::render(&RegisterForm::new(props));
/// let buttons = page.screen().get_by_tag("button").get_all();
/// ```
#[derive(Debug, Clone)]
pub struct RenderedPage {
	root: Arc<View>,
}

impl RenderedPage {
	/// Renders a component into a fresh snapshot.
	pub fn render<C: Component>(component: &C) -> Self {
		debug!(component = C::name(), "rendering component under test");
		Self {
			root: Arc::new(component.render()),
		}
	}

	/// Wraps an already-built view in a snapshot.
	pub fn from_view(view: impl IntoView) -> Self {
		Self {
			root: Arc::new(view.into_view()),
		}
	}

	/// Renders the snapshot to an HTML string.
	pub fn html(&self) -> String {
		self.root.render_to_string()
	}

	/// Returns a query handle over the snapshot.
	pub fn screen(&self) -> Screen {
		Screen::new(Arc::clone(&self.root))
	}
}
