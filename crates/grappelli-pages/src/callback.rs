//! Callback types and event handler conversion traits.
//!
//! [`Callback<Args, Ret>`] is a type-safe, cloneable wrapper for handlers
//! passed into components as props. [`IntoEventHandler`] converts
//! closures, callbacks, and bare [`EventHandler`]s into the handler type
//! stored on elements.

use std::sync::Arc;

use crate::events::{Event, EventHandler};

/// A type-safe, cloneable callback wrapper for event handlers.
///
/// `Callback` wraps a function in an `Arc`, making it cheaply cloneable
/// while providing a stable reference that won't change between renders.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives (defaults to [`Event`])
/// - `Ret`: The return type of the callback (defaults to `()`)
///
/// ## Example
///
/// ```
/// use grappelli_pages::Callback;
///
/// let on_click: Callback = Callback::new(|_event| {});
/// let translate = Callback::new(|key: String| key.to_uppercase());
/// assert_eq!(translate.call("submit".to_string()), "SUBMIT");
/// ```
pub struct Callback<Args = Event, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Trait for converting various handler types to [`EventHandler`].
///
/// Implemented for:
/// - Closures taking an [`Event`] argument
/// - [`Callback<Event, ()>`]
/// - [`EventHandler`] (identity conversion)
pub trait IntoEventHandler {
	/// Converts self into an [`EventHandler`].
	fn into_event_handler(self) -> EventHandler;
}

impl<F> IntoEventHandler for F
where
	F: Fn(Event) + Send + Sync + 'static,
{
	fn into_event_handler(self) -> EventHandler {
		Arc::new(self)
	}
}

impl IntoEventHandler for Callback<Event, ()> {
	fn into_event_handler(self) -> EventHandler {
		self.inner
	}
}

impl IntoEventHandler for EventHandler {
	fn into_event_handler(self) -> EventHandler {
		self
	}
}

/// Convenience function for converting handlers when attaching them.
///
/// # Example
///
/// ```
/// use grappelli_pages::{Callback, ElementView, EventType, into_event_handler};
///
/// let on_click: Callback = Callback::new(|_event| {});
/// let button = ElementView::new("button")
/// 	.on(EventType::Click, into_event_handler(on_click));
/// assert_eq!(button.event_handlers().len(), 1);
/// ```
pub fn into_event_handler<H: IntoEventHandler>(handler: H) -> EventHandler {
	handler.into_event_handler()
}

/// Event handler helper with a concrete closure argument type.
///
/// Unlike [`into_event_handler`], this function has a concrete argument
/// type, allowing the closure parameter type to be inferred.
pub fn event_handler(f: impl Fn(Event) + Send + Sync + 'static) -> EventHandler {
	Arc::new(f)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::events::EventType;
	use std::sync::Mutex;

	#[test]
	fn test_callback_creation() {
		let callback = Callback::new(|x: i32| x * 2);
		assert_eq!(callback.call(21), 42);
	}

	#[test]
	fn test_callback_clone_shares_function() {
		let callback1 = Callback::new(|x: i32| x + 1);
		let callback2 = callback1.clone();

		assert_eq!(callback1.call(5), 6);
		assert_eq!(callback2.call(5), 6);
	}

	#[test]
	fn test_callback_with_captured_state() {
		let log = Arc::new(Mutex::new(Vec::new()));
		let callback = Callback::new({
			let log = Arc::clone(&log);
			move |msg: String| {
				log.lock().unwrap().push(msg);
			}
		});

		callback.call("first".to_string());
		callback.call("second".to_string());

		assert_eq!(
			*log.lock().unwrap(),
			vec!["first".to_string(), "second".to_string()]
		);
	}

	#[test]
	fn test_callback_debug() {
		let callback = Callback::new(|_: ()| {});
		assert!(format!("{:?}", callback).contains("Callback"));
	}

	#[test]
	fn test_into_event_handler_closure() {
		let handler: EventHandler = (|_: Event| {}).into_event_handler();
		handler(Event::new(EventType::Click));
	}

	#[test]
	fn test_into_event_handler_callback() {
		let callback = Callback::new(|_: Event| {});
		let handler: EventHandler = callback.into_event_handler();
		handler(Event::new(EventType::Click));
	}

	#[test]
	fn test_into_event_handler_identity() {
		let handler = event_handler(|_| {});
		let same: EventHandler = into_event_handler(handler);
		same(Event::new(EventType::Submit));
	}
}
