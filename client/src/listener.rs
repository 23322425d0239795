// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ControllerError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An event listener registered on a DOM node. The listener stays registered for as long as this value lives and is
/// removed when it's dropped.
pub struct EventListener {
	target: EventTarget,
	event_type: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	pub fn new(
		target: &EventTarget,
		event_type: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, ControllerError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event_type,
			callback,
		})
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let removal = self
			.target
			.remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
		if let Err(error) = removal {
			log::warn!("Failed to remove {} listener: {:?}", self.event_type, error);
		}
	}
}
