//! Form field metadata and input rendering.
//!
//! A [`FieldConfig`] describes one form control: its name, input kind,
//! and presentation details. The struct is serde-(de)serializable so a
//! server can hand field metadata to a client renderer. Validation is
//! out of scope here; `error` carries an already-produced message for
//! display only.

use serde::{Deserialize, Serialize};

use crate::view::{ElementView, IntoView, View};

/// The HTML input type a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
	/// `<input type="text">`
	Text,
	/// `<input type="email">`
	Email,
	/// `<input type="password">`
	Password,
}

impl InputKind {
	/// Returns the value for the input's `type` attribute.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Password => "password",
		}
	}
}

/// Metadata for a single form field.
///
/// # Example
///
/// ```
/// use grappelli_pages::form::{FieldConfig, InputKind};
///
/// let field = FieldConfig::new("email", InputKind::Email).required();
/// assert_eq!(field.html_id(), "id_email");
/// assert!(field.required);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
	/// Field name, used for the `name` attribute and the derived id.
	pub name: String,
	/// Translation key for the field's label, if any.
	pub label: Option<String>,
	/// Input kind rendered for this field.
	pub kind: InputKind,
	/// Whether the control carries the `required` attribute.
	pub required: bool,
	/// Placeholder text, if any.
	pub placeholder: Option<String>,
	/// Initial value rendered into the control.
	pub initial: Option<String>,
	/// Display-only error message for the field.
	pub error: Option<String>,
}

impl FieldConfig {
	/// Creates a new field with the given name and input kind.
	pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
		Self {
			name: name.into(),
			label: None,
			kind,
			required: false,
			placeholder: None,
			initial: None,
			error: None,
		}
	}

	/// Marks the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Sets the label translation key.
	pub fn label(mut self, key: impl Into<String>) -> Self {
		self.label = Some(key.into());
		self
	}

	/// Sets the placeholder text.
	pub fn placeholder(mut self, text: impl Into<String>) -> Self {
		self.placeholder = Some(text.into());
		self
	}

	/// Sets the initial value.
	pub fn initial(mut self, value: impl Into<String>) -> Self {
		self.initial = Some(value.into());
		self
	}

	/// Sets a display-only error message.
	pub fn error(mut self, message: impl Into<String>) -> Self {
		self.error = Some(message.into());
		self
	}

	/// Returns the id attribute derived from the field name.
	///
	/// Follows the Django `auto_id` convention of `id_<name>`.
	pub fn html_id(&self) -> String {
		format!("id_{}", self.name)
	}
}

/// Renders a field's `<input>` element.
///
/// Attribute order is fixed: `type`, `name`, `id`, then `value`,
/// `placeholder`, and `required` when present.
pub fn render_input(field: &FieldConfig) -> View {
	let mut input = ElementView::new("input")
		.attr("type", field.kind.as_str())
		.attr("name", field.name.clone())
		.attr("id", field.html_id());

	if let Some(value) = &field.initial {
		input = input.attr("value", value.clone());
	}
	if let Some(placeholder) = &field.placeholder {
		input = input.attr("placeholder", placeholder.clone());
	}
	if field.required {
		input = input.attr("required", "");
	}

	input.into_view()
}
