//! Grappelli Pages - declarative view and component layer.
//!
//! A small, server-renderable component system in the Reinhardt style: a
//! [`View`] tree built from [`ElementView`]s, a [`Component`] trait for
//! reusable units, [`Callback`] props for handlers, form-field metadata,
//! and a gettext-flavored message catalog.
//!
//! ## Modules
//!
//! - [`view`](mod@view): View tree, `IntoView`, HTML string rendering
//! - [`component`](mod@component): the `Component` trait
//! - [`events`](mod@events): event types and handler aliases
//! - [`callback`](mod@callback): typed callback props and handler conversion
//! - [`form`](mod@form): field metadata and input rendering
//! - [`i18n`](mod@i18n): message catalogs and translation callbacks
//!
//! ## Example
//!
//! ```
//! use grappelli_pages::{Callback, Component, ElementView, EventType, IntoView, View};
//! use grappelli_pages::into_event_handler;
//!
//! struct Counter {
//! 	on_increment: Callback,
//! }
//!
//! impl Component for Counter {
//! 	fn render(&self) -> View {
//! 		ElementView::new("button")
//! 			.attr("type", "button")
//! 			.on(EventType::Click, into_event_handler(self.on_increment.clone()))
//! 			.child("Increment")
//! 			.into_view()
//! 	}
//!
//! 	fn name() -> &'static str {
//! 		"Counter"
//! 	}
//! }
//! ```

#![warn(missing_docs)]

pub mod callback;
pub mod component;
pub mod events;
pub mod form;
pub mod i18n;
pub mod view;

pub use callback::{Callback, IntoEventHandler, event_handler, into_event_handler};
pub use component::Component;
pub use events::{Event, EventHandler, EventType};
pub use view::{ElementView, IntoView, View};
