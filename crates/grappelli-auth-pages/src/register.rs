//! Registration form component.
//!
//! Renders username, email, and password fields plus a submit button.
//! Validation and submission live behind the `handle_submit` callback;
//! this component only presents field metadata and wires the button.

use grappelli_pages::form::{FieldConfig, InputKind, render_input};
use grappelli_pages::{
	Callback, Component, ElementView, Event, EventType, IntoView, View, into_event_handler,
};

/// Translation key for the username field label.
const LABEL_USERNAME: &str = "auth.register.username";
/// Translation key for the email field label.
const LABEL_EMAIL: &str = "auth.register.email";
/// Translation key for the password field label.
const LABEL_PASSWORD: &str = "auth.register.password";
/// Translation key for the submit button label.
const LABEL_SUBMIT: &str = "auth.register.submit";
/// Translation key for the submit button label while submitting.
const LABEL_SUBMITTING: &str = "auth.register.submitting";

/// Field metadata for the three registration inputs.
#[derive(Debug, Clone)]
pub struct RegisterFields {
	/// Username field.
	pub username: FieldConfig,
	/// Email field.
	pub email: FieldConfig,
	/// Password field.
	pub password: FieldConfig,
}

impl Default for RegisterFields {
	fn default() -> Self {
		Self {
			username: FieldConfig::new("username", InputKind::Text).required(),
			email: FieldConfig::new("email", InputKind::Email).required(),
			password: FieldConfig::new("password", InputKind::Password).required(),
		}
	}
}

/// Props for [`RegisterForm`].
#[derive(Debug, Clone)]
pub struct RegisterFormProps {
	/// Invoked when the submit button is clicked.
	pub handle_submit: Callback<Event>,
	/// Metadata for the rendered fields.
	pub fields: RegisterFields,
	/// Translation callback consulted for every label.
	pub translate: Callback<String, String>,
	/// Whether a submission is currently in flight.
	pub submitting: bool,
}

/// The registration form component.
///
/// While `submitting` is true the button carries the `disabled`
/// attribute and its label switches to the submitting key, so a click
/// does not reach `handle_submit`.
pub struct RegisterForm {
	props: RegisterFormProps,
}

impl RegisterForm {
	/// Creates the component from its props.
	pub fn new(props: RegisterFormProps) -> Self {
		Self { props }
	}

	fn render_field(&self, field: &FieldConfig, default_label_key: &str) -> View {
		let label_key = field
			.label
			.clone()
			.unwrap_or_else(|| default_label_key.to_string());
		let label_text = self.props.translate.call(label_key);

		let mut wrapper = ElementView::new("div")
			.attr("class", "form-field")
			.child(
				ElementView::new("label")
					.attr("for", field.html_id())
					.child(label_text),
			)
			.child(render_input(field));

		if let Some(message) = &field.error {
			wrapper = wrapper.child(
				ElementView::new("span")
					.attr("class", "field-error")
					.child(message.clone()),
			);
		}

		wrapper.into_view()
	}

	fn render_submit_button(&self) -> View {
		let label_key = if self.props.submitting {
			LABEL_SUBMITTING
		} else {
			LABEL_SUBMIT
		};
		let label_text = self.props.translate.call(label_key.to_string());

		let mut button = ElementView::new("button")
			.attr("type", "submit")
			.attr("class", "btn btn-primary");
		if self.props.submitting {
			button = button.attr("disabled", "");
		}

		button
			.on(
				EventType::Click,
				into_event_handler(self.props.handle_submit.clone()),
			)
			.child(label_text)
			.into_view()
	}
}

impl Component for RegisterForm {
	fn render(&self) -> View {
		ElementView::new("form")
			.attr("class", "register-form")
			.child(self.render_field(&self.props.fields.username, LABEL_USERNAME))
			.child(self.render_field(&self.props.fields.email, LABEL_EMAIL))
			.child(self.render_field(&self.props.fields.password, LABEL_PASSWORD))
			.child(self.render_submit_button())
			.into_view()
	}

	fn name() -> &'static str {
		"RegisterForm"
	}
}
