//! Message catalog for storing translations.
//!
//! Components receive translations through a `Callback<String, String>`
//! prop, which keeps them testable with a plain spy. A real application
//! backs that prop with a [`MessageCatalog`] via
//! [`MessageCatalog::into_callback`].

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::callback::Callback;

/// Error produced when loading a catalog fails.
#[derive(Debug, Error)]
pub enum I18nError {
	/// The catalog document was not valid JSON or had the wrong shape.
	#[error("malformed message catalog: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// A message catalog containing translations for a specific locale.
///
/// # Example
///
/// ```
/// use grappelli_pages::i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("auth.register.submit", "S'inscrire");
///
/// assert_eq!(catalog.translate("auth.register.submit"), "S'inscrire");
/// // Unknown keys fall back to the key itself.
/// assert_eq!(catalog.translate("auth.register.email"), "auth.register.email");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Creates a new, empty catalog for the given locale.
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
		}
	}

	/// Loads a catalog from a JSON object of key -> translation.
	pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, I18nError> {
		let messages: HashMap<String, String> = serde_json::from_str(json)?;
		Ok(Self {
			locale: locale.into(),
			messages,
		})
	}

	/// Returns the catalog's locale.
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Adds a translation for a message key.
	pub fn add_translation(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(key.into(), translation.into());
	}

	/// Returns the translation for a key, if present.
	pub fn get(&self, key: &str) -> Option<&String> {
		self.messages.get(key)
	}

	/// Translates a key, falling back to the key itself when missing.
	pub fn translate(&self, key: &str) -> String {
		match self.messages.get(key) {
			Some(translation) => translation.clone(),
			None => {
				debug!(locale = %self.locale, key, "missing translation, falling back to key");
				key.to_string()
			}
		}
	}

	/// Converts the catalog into a translation callback prop.
	pub fn into_callback(self) -> Callback<String, String> {
		Callback::new(move |key: String| self.translate(&key))
	}
}
