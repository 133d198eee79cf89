//! Component trait definition.

use crate::view::View;

/// Trait for reusable UI components.
///
/// Components are the building blocks of the UI. They encapsulate
/// state and rendering logic into reusable units.
///
/// # Example
///
/// ```
/// use grappelli_pages::{Component, ElementView, IntoView, View};
///
/// struct Greeting {
/// 	name: String,
/// }
///
/// impl Component for Greeting {
/// 	fn render(&self) -> View {
/// 		ElementView::new("div")
/// 			.attr("class", "greeting")
/// 			.child(format!("Hello, {}!", self.name))
/// 			.into_view()
/// 	}
///
/// 	fn name() -> &'static str {
/// 		"Greeting"
/// 	}
/// }
///
/// let greeting = Greeting { name: "World".to_string() };
/// assert_eq!(
/// 	greeting.render().render_to_string(),
/// 	"<div class=\"greeting\">Hello, World!</div>"
/// );
/// ```
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
