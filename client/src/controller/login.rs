// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ControllerState;
use crate::error::ControllerError;
use crate::listener::EventListener;
use registration_shared::messages::LOGIN_REDIRECT;
use std::rc::Rc;
use web_sys::Event as WebEvent;

// The login page isn't part of this flow yet, so following the link only shows a notice.
pub(super) fn bind(state: &Rc<ControllerState>) -> Result<Vec<EventListener>, ControllerError> {
	let Some(login_link) = state.elements.login_link.clone() else {
		return Ok(Vec::new());
	};

	let notifier = state.notifier.clone();
	let click_listener = EventListener::new(&login_link, "click", move |event: WebEvent| {
		event.prevent_default();
		notifier.notify(LOGIN_REDIRECT);
	})?;
	Ok(vec![click_listener])
}
