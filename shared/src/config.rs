// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Timings and animation values for the registration page. Pages can override any of these with a JSON document;
/// whatever they leave out keeps its default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
	pub processing_delay_ms: u32,
	pub ripple_lifetime_ms: u32,
	#[serde(deserialize_with = "non_negative")]
	pub lift_px: f64,
	#[serde(deserialize_with = "non_negative")]
	pub transition_secs: f64,
}

fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
	let value = f64::deserialize(deserializer)?;
	if value.is_finite() && value >= 0.0 {
		Ok(value)
	} else {
		Err(D::Error::custom(format!("expected a non-negative number, got {}", value)))
	}
}

impl Default for ControllerConfig {
	fn default() -> Self {
		Self {
			processing_delay_ms: 2000,
			ripple_lifetime_ms: 600,
			lift_px: 2.0,
			transition_secs: 0.3,
		}
	}
}

impl ControllerConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	pub fn processing_delay(&self) -> u32 {
		self.processing_delay_ms
	}

	pub fn ripple_lifetime(&self) -> u32 {
		self.ripple_lifetime_ms
	}

	/// CSS transform applied to a field's container while the field has focus
	pub fn lift_transform(&self) -> String {
		format!("translateY(-{}px)", self.lift_px)
	}

	pub fn transition(&self) -> String {
		format!("transform {}s ease", self.transition_secs)
	}
}

/// CSS transform that puts a lifted container back in place
pub const REST_TRANSFORM: &str = "translateY(0)";

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_page_design() {
		let config = ControllerConfig::default();
		assert_eq!(config.processing_delay(), 2000);
		assert_eq!(config.ripple_lifetime(), 600);
		assert_eq!(config.lift_transform(), "translateY(-2px)");
		assert_eq!(config.transition(), "transform 0.3s ease");
	}

	#[test]
	fn partial_documents_keep_other_defaults() {
		let config = ControllerConfig::from_json(r#"{ "processing_delay_ms": 50 }"#).unwrap();
		assert_eq!(config.processing_delay(), 50);
		assert_eq!(config.ripple_lifetime(), 600);
		assert_eq!(config.lift_px, 2.0);
	}

	#[test]
	fn empty_document_is_the_default() {
		assert_eq!(ControllerConfig::from_json("{}").unwrap(), ControllerConfig::default());
	}

	#[test]
	fn malformed_documents_are_errors() {
		assert!(ControllerConfig::from_json("{ processing_delay_ms: 5 }").is_err());
		assert!(ControllerConfig::from_json(r#"{ "processing_delay_ms": -5 }"#).is_err());
		assert!(ControllerConfig::from_json(r#"{ "ripple_ms": 5 }"#).is_err());
	}

	#[test]
	fn negative_animation_values_are_rejected() {
		assert!(ControllerConfig::from_json(r#"{ "lift_px": -2 }"#).is_err());
		assert!(ControllerConfig::from_json(r#"{ "transition_secs": -0.3 }"#).is_err());
		let config = ControllerConfig::from_json(r#"{ "lift_px": 0, "transition_secs": 0.5 }"#).unwrap();
		assert_eq!(config.lift_transform(), "translateY(-0px)");
		assert_eq!(config.transition(), "transform 0.5s ease");
	}
}
