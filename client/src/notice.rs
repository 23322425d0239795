// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::Window;

/// Shows a message the user has to acknowledge before continuing
pub trait Notifier {
	fn notify(&self, message: &str);
}

/// Notifies through the browser's `alert` dialog
pub struct AlertNotifier {
	window: Window,
}

impl AlertNotifier {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl Notifier for AlertNotifier {
	fn notify(&self, message: &str) {
		if let Err(error) = self.window.alert_with_message(message) {
			log::warn!("Failed to show notice \"{}\": {:?}", message, error);
		}
	}
}
