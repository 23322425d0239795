// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ControllerState;
use crate::error::ControllerError;
use crate::listener::EventListener;
use registration_shared::messages::SIGN_UP_LABEL_MARKUP;
use std::rc::Rc;
use web_sys::Event as WebEvent;

/// Swaps the account icon for a sign up / log in label while the pointer is over it.
pub(super) fn bind(state: &Rc<ControllerState>) -> Result<Vec<EventListener>, ControllerError> {
	let Some(icon) = state.elements.account_icon.clone() else {
		return Ok(Vec::new());
	};
	let icon_markup = icon.inner_html();

	let enter_listener = EventListener::new(&icon, "mouseenter", {
		let icon = icon.clone();
		move |_event: WebEvent| icon.set_inner_html(SIGN_UP_LABEL_MARKUP)
	})?;
	let leave_listener = EventListener::new(&icon, "mouseleave", {
		let icon = icon.clone();
		move |_event: WebEvent| icon.set_inner_html(&icon_markup)
	})?;

	Ok(vec![enter_listener, leave_listener])
}
