// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages;
use regex::Regex;
use std::error::Error;
use std::fmt;
use std::sync::OnceLock;

pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Field values read from the registration form at the moment it was submitted
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormSnapshot {
	pub email: String,
	pub password: String,
	pub terms_accepted: bool,
}

/// Reasons a registration form can be rejected, in the order they're checked
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	EmptyFields,
	TermsNotAccepted,
	InvalidEmail,
	PasswordTooShort,
}

impl ValidationError {
	pub fn message(&self) -> &'static str {
		match self {
			Self::EmptyFields => messages::FILL_ALL_FIELDS,
			Self::TermsNotAccepted => messages::ACCEPT_TERMS,
			Self::InvalidEmail => messages::INVALID_EMAIL,
			Self::PasswordTooShort => messages::PASSWORD_TOO_SHORT,
		}
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message())
	}
}

impl Error for ValidationError {}

fn email_pattern() -> &'static Regex {
	static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
	EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"))
}

/// Checks that the address has the rough shape `local@domain.tld`. This is a structural check only; whether the
/// address can receive mail isn't something the page can know.
pub fn is_valid_email(email: &str) -> bool {
	email_pattern().is_match(email)
}

/// Runs the registration rules against a snapshot. The first rule that fails is reported and nothing after it is
/// checked.
pub fn validate(snapshot: &FormSnapshot) -> Result<(), ValidationError> {
	if snapshot.email.is_empty() || snapshot.password.is_empty() {
		return Err(ValidationError::EmptyFields);
	}
	if !snapshot.terms_accepted {
		return Err(ValidationError::TermsNotAccepted);
	}
	if !is_valid_email(&snapshot.email) {
		return Err(ValidationError::InvalidEmail);
	}
	if snapshot.password.chars().count() < PASSWORD_MIN_LENGTH {
		return Err(ValidationError::PasswordTooShort);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn snapshot(email: &str, password: &str, terms_accepted: bool) -> FormSnapshot {
		FormSnapshot {
			email: String::from(email),
			password: String::from(password),
			terms_accepted,
		}
	}

	#[rstest]
	#[case("", "abcdef", true)]
	#[case("a@b.co", "", true)]
	#[case("", "", false)]
	#[case("not an email", "", false)]
	fn empty_fields_are_reported_first(#[case] email: &str, #[case] password: &str, #[case] terms: bool) {
		assert_eq!(validate(&snapshot(email, password, terms)), Err(ValidationError::EmptyFields));
	}

	#[rstest]
	#[case("a@b.co", "abcdef")]
	#[case("bogus", "abcdef")]
	#[case("a@b.co", "abc")]
	#[case("bogus", "x")]
	fn unchecked_terms_win_over_other_problems(#[case] email: &str, #[case] password: &str) {
		assert_eq!(validate(&snapshot(email, password, false)), Err(ValidationError::TermsNotAccepted));
	}

	#[rstest]
	#[case("plainaddress")]
	#[case("missing-at.example.com")]
	#[case("user@nodot")]
	#[case("user@@example.com")]
	#[case("user name@example.com")]
	#[case("user@exa mple.com")]
	#[case("@example.com")]
	#[case("user@.com")]
	#[case("user@example.")]
	#[case(" user@example.com")]
	fn malformed_emails_are_rejected(#[case] email: &str) {
		assert!(!is_valid_email(email));
		assert_eq!(validate(&snapshot(email, "x", true)), Err(ValidationError::InvalidEmail));
	}

	#[rstest]
	#[case("a@b.co")]
	#[case("first.last@sub.example.org")]
	#[case("user+tag@example.ir")]
	#[case("a@b.c.d")]
	fn well_formed_emails_are_accepted(#[case] email: &str) {
		assert!(is_valid_email(email));
	}

	#[rstest]
	#[case("a")]
	#[case("abcde")]
	#[case("۱۲۳۴۵")]
	fn short_passwords_are_rejected(#[case] password: &str) {
		assert_eq!(validate(&snapshot("a@b.co", password, true)), Err(ValidationError::PasswordTooShort));
	}

	#[test]
	fn password_length_counts_characters_not_bytes() {
		// Six Persian digits take twelve bytes but are six characters.
		assert_eq!(validate(&snapshot("a@b.co", "۱۲۳۴۵۶", true)), Ok(()));
	}

	#[test]
	fn email_pattern_compiles() {
		assert!(email_pattern().is_match("a@b.co"));
	}

	#[test]
	fn complete_form_passes() {
		assert_eq!(validate(&snapshot("a@b.co", "abcdef", true)), Ok(()));
	}

	#[test]
	fn errors_display_their_messages() {
		assert_eq!(ValidationError::EmptyFields.to_string(), messages::FILL_ALL_FIELDS);
		assert_eq!(ValidationError::PasswordTooShort.to_string(), messages::PASSWORD_TOO_SHORT);
	}
}
