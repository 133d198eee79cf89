//! Call-recording spies for component callbacks.
//!
//! A [`Spy`] stands in for a real callback so a test can observe whether
//! and how it was invoked. Handles are cheap clones sharing one record:
//! keep the spy in the test, hand [`Spy::callback`] to the component.

use std::sync::Arc;

use grappelli_pages::Callback;
use grappelli_pages::Event;
use parking_lot::Mutex;

/// A call recorder standing in for a component callback.
///
/// Records every invocation's arguments and produces return values from
/// a supplied factory (or `Ret::default()`).
///
/// # Example
///
/// ```
/// use grappelli_test::Spy;
///
/// let spy: Spy<String, String> = Spy::new();
/// let callback = spy.callback();
///
/// assert!(!spy.was_called());
/// callback.call("auth.register.submit".to_string());
/// assert_eq!(spy.call_count(), 1);
/// assert_eq!(spy.last_call().as_deref(), Some("auth.register.submit"));
/// ```
pub struct Spy<Args = Event, Ret = ()> {
	calls: Arc<Mutex<Vec<Args>>>,
	produce: Arc<dyn Fn(&Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Clone for Spy<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			calls: Arc::clone(&self.calls),
			produce: Arc::clone(&self.produce),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Spy<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Spy")
			.field("call_count", &self.calls.lock().len())
			.finish()
	}
}

impl<Args, Ret> Default for Spy<Args, Ret>
where
	Args: Clone + Send + 'static,
	Ret: Default + Send + Sync + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<Args, Ret> Spy<Args, Ret>
where
	Args: Clone + Send + 'static,
	Ret: Default + Send + Sync + 'static,
{
	/// Creates a spy whose callback returns `Ret::default()`.
	pub fn new() -> Self {
		Self::returning(|_| Ret::default())
	}
}

impl<Args, Ret> Spy<Args, Ret>
where
	Args: Clone + Send + 'static,
	Ret: 'static,
{
	/// Creates a spy producing return values from the given function.
	pub fn returning(produce: impl Fn(&Args) -> Ret + Send + Sync + 'static) -> Self {
		Self {
			calls: Arc::new(Mutex::new(Vec::new())),
			produce: Arc::new(produce),
		}
	}

	/// Records one invocation and produces the return value.
	pub fn record(&self, args: Args) -> Ret {
		self.calls.lock().push(args.clone());
		(self.produce)(&args)
	}

	/// Returns whether the spy was invoked at least once.
	pub fn was_called(&self) -> bool {
		!self.calls.lock().is_empty()
	}

	/// Returns the number of recorded invocations.
	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}

	/// Returns the arguments of every recorded invocation, in order.
	pub fn calls(&self) -> Vec<Args> {
		self.calls.lock().clone()
	}

	/// Returns the arguments of the most recent invocation, if any.
	pub fn last_call(&self) -> Option<Args> {
		self.calls.lock().last().cloned()
	}

	/// Clears the recorded invocations.
	pub fn reset(&self) {
		self.calls.lock().clear();
	}
}

impl<Args, Ret> Spy<Args, Ret>
where
	Args: Clone + Send + Sync + 'static,
	Ret: 'static,
{
	/// Hands out a callback recording into this spy.
	pub fn callback(&self) -> Callback<Args, Ret> {
		let spy = self.clone();
		Callback::new(move |args: Args| spy.record(args))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use grappelli_pages::EventType;

	#[test]
	fn test_spy_starts_uncalled() {
		let spy: Spy<Event> = Spy::new();
		assert!(!spy.was_called());
		assert_eq!(spy.call_count(), 0);
		assert!(spy.last_call().is_none());
	}

	#[test]
	fn test_spy_records_calls_in_order() {
		let spy: Spy<String, ()> = Spy::new();
		spy.record("first".to_string());
		spy.record("second".to_string());

		assert_eq!(spy.call_count(), 2);
		assert_eq!(
			spy.calls(),
			vec!["first".to_string(), "second".to_string()]
		);
		assert_eq!(spy.last_call().as_deref(), Some("second"));
	}

	#[test]
	fn test_spy_returning() {
		let spy: Spy<String, String> = Spy::returning(|key: &String| key.to_uppercase());
		assert_eq!(spy.record("submit".to_string()), "SUBMIT");
		assert_eq!(spy.call_count(), 1);
	}

	#[test]
	fn test_callback_records_into_shared_state() {
		let spy: Spy<Event> = Spy::new();
		let callback = spy.callback();

		callback.call(Event::new(EventType::Click));
		callback.call(Event::new(EventType::Click));

		assert_eq!(spy.call_count(), 2);
		assert_eq!(
			spy.last_call().map(|e| e.event_type()),
			Some(EventType::Click)
		);
	}

	#[test]
	fn test_reset_clears_record() {
		let spy: Spy<Event> = Spy::new();
		spy.record(Event::new(EventType::Click));
		assert!(spy.was_called());

		spy.reset();
		assert!(!spy.was_called());
		assert_eq!(spy.call_count(), 0);
	}

	#[test]
	fn test_independent_spies_do_not_share_state() {
		let a: Spy<Event> = Spy::new();
		let b: Spy<Event> = Spy::new();

		a.record(Event::new(EventType::Click));
		assert_eq!(a.call_count(), 1);
		assert_eq!(b.call_count(), 0);
	}
}
