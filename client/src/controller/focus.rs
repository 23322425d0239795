// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ControllerState;
use crate::error::ControllerError;
use crate::listener::EventListener;
use registration_shared::config::REST_TRANSFORM;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlElement};

fn set_style(container: &HtmlElement, property: &str, value: &str) {
	if let Err(error) = container.style().set_property(property, value) {
		log::warn!("Failed to set {} on form control container: {:?}", property, error);
	}
}

/// Lifts each form control's container while the control has focus.
pub(super) fn bind(state: &Rc<ControllerState>) -> Result<Vec<EventListener>, ControllerError> {
	let lift_transform = state.config.lift_transform();
	let transition = state.config.transition();
	let mut listeners = Vec::with_capacity(state.elements.form_controls.len() * 2);

	for control in state.elements.form_controls.iter() {
		let Some(container) = control
			.parent_element()
			.and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};

		listeners.push(EventListener::new(control, "focus", {
			let container = container.clone();
			let lift_transform = lift_transform.clone();
			let transition = transition.clone();
			move |_event: WebEvent| {
				set_style(&container, "transform", &lift_transform);
				set_style(&container, "transition", &transition);
			}
		})?);
		listeners.push(EventListener::new(control, "blur", move |_event: WebEvent| {
			set_style(&container, "transform", REST_TRANSFORM);
		})?);
	}

	Ok(listeners)
}
