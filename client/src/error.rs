// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that keep the registration controller from being set up
#[derive(Debug)]
pub enum ControllerError {
	NoWindow,
	NoDocument,
	MissingElement(String),
	WrongElementType { selector: String, expected: &'static str },
	Config(serde_json::Error),
	Js(String),
}

impl From<serde_json::Error> for ControllerError {
	fn from(error: serde_json::Error) -> Self {
		Self::Config(error)
	}
}

impl From<JsValue> for ControllerError {
	fn from(value: JsValue) -> Self {
		let description = value.as_string().unwrap_or_else(|| format!("{:?}", value));
		Self::Js(description)
	}
}

impl fmt::Display for ControllerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "No browser window is available"),
			Self::NoDocument => write!(f, "No document is loaded in the browser window"),
			Self::MissingElement(selector) => write!(f, "The page has no element matching {}", selector),
			Self::WrongElementType { selector, expected } => {
				write!(f, "The element matching {} is not a {}", selector, expected)
			}
			Self::Config(error) => write!(f, "The page configuration is invalid: {}", error),
			Self::Js(description) => write!(f, "A browser operation failed: {}", description),
		}
	}
}

impl Error for ControllerError {}
