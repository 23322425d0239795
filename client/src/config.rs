// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ControllerError;
use registration_shared::config::ControllerConfig;
use web_sys::Document;

/// ID of the optional `<script type="application/json">` element holding page configuration
pub const CONFIG_ELEMENT_ID: &str = "registrationConfig";

pub fn load_config(document: &Document) -> Result<ControllerConfig, ControllerError> {
	let Some(config_element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
		log::debug!("No #{} element; using default configuration", CONFIG_ELEMENT_ID);
		return Ok(ControllerConfig::default());
	};
	let config_json = config_element.text_content().unwrap_or_default();
	Ok(ControllerConfig::from_json(&config_json)?)
}
