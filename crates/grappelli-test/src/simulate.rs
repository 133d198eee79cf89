//! Synthetic event dispatch.
//!
//! Events are dispatched synchronously: the target's handlers run first,
//! then the event bubbles through ancestor elements in reverse document
//! order. Everything completes before the `simulate::*` call returns, so
//! assertions directly after it observe all handler effects.
//!
//! Disabled controls receive no dispatch at all, matching browser
//! behavior for `disabled` form controls.

use grappelli_pages::{Event, EventType};
use tracing::debug;

use crate::query::ElementRef;

/// Simulates a click on the target element.
pub fn click(target: &ElementRef) -> Event {
	dispatch(target, Event::new(EventType::Click))
}

/// Simulates typing a value into the target element.
pub fn input(target: &ElementRef, value: &str) -> Event {
	dispatch(target, Event::with_value(EventType::Input, value))
}

/// Simulates submitting the target element.
pub fn submit(target: &ElementRef) -> Event {
	dispatch(target, Event::new(EventType::Submit))
}

/// Dispatches an already-built event at the target element.
///
/// The returned event exposes [`Event::default_prevented`] so tests can
/// assert on handler decisions.
pub fn dispatch(target: &ElementRef, event: Event) -> Event {
	let chain = target.element_chain();
	let (target_el, ancestors) = chain
		.split_last()
		.expect("an element handle always resolves to its target");

	if target_el.attr_value("disabled").is_some() {
		debug!(
			event = %event.event_type(),
			tag = target_el.tag_name(),
			"target is disabled, suppressing dispatch"
		);
		return event;
	}

	debug!(
		event = %event.event_type(),
		tag = target_el.tag_name(),
		"dispatching simulated event"
	);
	target_el.fire(event.event_type(), &event);

	// Bubble phase, innermost ancestor first.
	for ancestor in ancestors.iter().rev() {
		if event.propagation_stopped() {
			break;
		}
		ancestor.fire(event.event_type(), &event);
	}

	event
}
