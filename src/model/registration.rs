//! New-user registration payloads.

// self
use crate::{_prelude::*, auth::Secret};

/// Caller-supplied registration details.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserRegistration {
	/// Login name; normalized to lowercase.
	pub username: String,
	/// Contact email; normalized to lowercase.
	pub email: String,
	/// Display name.
	pub full_name: String,
	/// Initial password.
	pub password: Secret,
	/// Two-factor identifier, if already provisioned.
	pub twilio_factor_id: String,
	/// Phone number used for two-factor enrollment.
	pub phone_number: String,
}
impl UserRegistration {
	/// Creates a registration with the required fields.
	pub fn new(
		username: impl Into<String>,
		email: impl Into<String>,
		full_name: impl Into<String>,
		password: impl Into<Secret>,
	) -> Self {
		Self {
			username: username.into(),
			email: email.into(),
			full_name: full_name.into(),
			password: password.into(),
			..Default::default()
		}
	}

	/// Sets the phone number.
	pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
		self.phone_number = phone_number.into();

		self
	}

	/// Sets the two-factor identifier.
	pub fn with_twilio_factor_id(mut self, factor_id: impl Into<String>) -> Self {
		self.twilio_factor_id = factor_id.into();

		self
	}

	/// Produces the normalized wire body for `site_code`.
	pub(crate) fn normalized(&self, site_code: &str) -> RegistrationBody {
		RegistrationBody {
			username: self.username.trim().to_lowercase(),
			email: self.email.trim().to_lowercase(),
			full_name: self.full_name.trim().to_owned(),
			password: Secret::new(self.password.expose().trim()),
			twilio_factor_id: self.twilio_factor_id.trim().to_owned(),
			phone_number: self.phone_number.trim().to_owned(),
			site_code: site_code.trim().to_owned(),
		}
	}
}

/// Wire body sent to `POST /users/register`.
#[derive(Debug, Serialize)]
pub(crate) struct RegistrationBody {
	pub(crate) username: String,
	pub(crate) email: String,
	pub(crate) full_name: String,
	pub(crate) password: Secret,
	pub(crate) twilio_factor_id: String,
	pub(crate) phone_number: String,
	pub(crate) site_code: String,
}
