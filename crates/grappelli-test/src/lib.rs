//! Grappelli Test - harness for exercising components without a browser.
//!
//! Renders a component into an inspectable snapshot, queries the tree
//! Testing Library-style, dispatches synthetic events synchronously, and
//! records callback invocations with spies.
//!
//! ## Example
//!
//! ```
//! use grappelli_pages::{ElementView, EventType, into_event_handler};
//! use grappelli_test::{RenderedPage, Spy, simulate};
//!
//! let clicked: Spy = Spy::new();
//! let page = RenderedPage::from_view(
//! 	ElementView::new("button")
//! 		.on(EventType::Click, into_event_handler(clicked.callback()))
//! 		.child("Go"),
//! );
//!
//! let button = page.screen().get_by_tag("button").get();
//! simulate::click(&button);
//! assert_eq!(clicked.call_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod query;
pub mod render;
pub mod simulate;
pub mod spy;

pub use query::{ElementRef, QueryResult, Screen};
pub use render::RenderedPage;
pub use spy::Spy;
