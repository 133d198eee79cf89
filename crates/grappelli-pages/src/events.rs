//! Event types shared by the view tree and the test harness.
//!
//! Rendering is driven by an in-memory view tree, so events are plain
//! values dispatched synchronously to the handlers registered on an
//! element. Handlers receive a clone of the dispatched [`Event`]; the
//! prevent-default and stop-propagation flags are shared between clones
//! so the dispatcher observes what a handler decided.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The kind of DOM-style event an element handler is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Pointer click on an element.
	Click,
	/// Value typed into an input.
	Input,
	/// Committed value change of a form control.
	Change,
	/// Form submission.
	Submit,
	/// Element gained focus.
	Focus,
	/// Element lost focus.
	Blur,
}

impl EventType {
	/// Returns the DOM event name for this type.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::Input => "input",
			Self::Change => "change",
			Self::Submit => "submit",
			Self::Focus => "focus",
			Self::Blur => "blur",
		}
	}

	/// Parses a DOM event name back into an [`EventType`].
	///
	/// Unknown names return `None`.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"click" => Some(Self::Click),
			"input" => Some(Self::Input),
			"change" => Some(Self::Change),
			"submit" => Some(Self::Submit),
			"focus" => Some(Self::Focus),
			"blur" => Some(Self::Blur),
			_ => None,
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A dispatched event.
///
/// Events carry their type, an optional string payload (the typed value
/// for input/change events), and shared control flags. Cloning an event
/// is cheap and clones share the same flags, so a handler calling
/// [`Event::prevent_default`] is visible to the dispatcher afterwards.
#[derive(Debug, Clone)]
pub struct Event {
	event_type: EventType,
	value: Option<String>,
	default_prevented: Arc<AtomicBool>,
	propagation_stopped: Arc<AtomicBool>,
}

impl Event {
	/// Creates an event of the given type with no payload.
	pub fn new(event_type: EventType) -> Self {
		Self {
			event_type,
			value: None,
			default_prevented: Arc::new(AtomicBool::new(false)),
			propagation_stopped: Arc::new(AtomicBool::new(false)),
		}
	}

	/// Creates an event carrying a string payload.
	pub fn with_value(event_type: EventType, value: impl Into<String>) -> Self {
		Self {
			value: Some(value.into()),
			..Self::new(event_type)
		}
	}

	/// Returns the event's type.
	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	/// Returns the event payload, if any.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Marks the event's default action as cancelled.
	pub fn prevent_default(&self) {
		self.default_prevented.store(true, Ordering::SeqCst);
	}

	/// Returns whether a handler cancelled the default action.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.load(Ordering::SeqCst)
	}

	/// Stops the event from bubbling to ancestor elements.
	pub fn stop_propagation(&self) {
		self.propagation_stopped.store(true, Ordering::SeqCst);
	}

	/// Returns whether a handler stopped propagation.
	pub fn propagation_stopped(&self) -> bool {
		self.propagation_stopped.load(Ordering::SeqCst)
	}
}

/// Type alias for event handler functions attached to elements.
pub type EventHandler = Arc<dyn Fn(Event) + Send + Sync + 'static>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_event_name_round_trip() {
		for ty in [
			EventType::Click,
			EventType::Input,
			EventType::Change,
			EventType::Submit,
			EventType::Focus,
			EventType::Blur,
		] {
			assert_eq!(EventType::from_name(ty.as_str()), Some(ty));
		}
	}

	#[test]
	fn test_unknown_event_name() {
		assert_eq!(EventType::from_name("mouseover"), None);
		assert_eq!(EventType::from_name(""), None);
	}

	#[test]
	fn test_flags_shared_between_clones() {
		let event = Event::new(EventType::Click);
		let clone = event.clone();

		assert!(!event.default_prevented());
		clone.prevent_default();
		assert!(event.default_prevented());

		clone.stop_propagation();
		assert!(event.propagation_stopped());
	}

	#[test]
	fn test_event_payload() {
		let event = Event::with_value(EventType::Input, "hello");
		assert_eq!(event.event_type(), EventType::Input);
		assert_eq!(event.value(), Some("hello"));

		let bare = Event::new(EventType::Click);
		assert_eq!(bare.value(), None);
	}
}
