// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ControllerState;
use crate::error::ControllerError;
use crate::listener::EventListener;
use registration_shared::ripple::{BoxRect, RippleGeometry, RIPPLE_CLASS};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event as WebEvent, HtmlElement, MouseEvent};

pub(super) fn bind(state: &Rc<ControllerState>) -> Result<Vec<EventListener>, ControllerError> {
	let click_listener = EventListener::new(&state.elements.submit_button, "click", {
		let state = Rc::clone(state);
		move |event: WebEvent| {
			let Some(mouse_event) = event.dyn_ref::<MouseEvent>() else {
				return;
			};
			if let Err(error) = spawn_ripple(&state, mouse_event) {
				log::warn!("Failed to show ripple on submit button: {}", error);
			}
		}
	})?;
	Ok(vec![click_listener])
}

fn create_ripple(button: &HtmlElement, geometry: &RippleGeometry) -> Result<Element, ControllerError> {
	let document = button.owner_document().ok_or(ControllerError::NoDocument)?;
	let ripple: HtmlElement = document.create_element("span")?.unchecked_into();
	ripple.set_class_name(RIPPLE_CLASS);
	let style = ripple.style();
	for (property, value) in geometry.style_declarations() {
		style.set_property(property, &value)?;
	}
	Ok(ripple.into())
}

fn spawn_ripple(state: &Rc<ControllerState>, mouse_event: &MouseEvent) -> Result<(), ControllerError> {
	let button = &state.elements.submit_button;
	let bounds = button.get_bounding_client_rect();
	let rect = BoxRect {
		left: bounds.left(),
		top: bounds.top(),
		width: bounds.width(),
		height: bounds.height(),
	};
	// A click with no press count came from the keyboard and has no meaningful pointer position.
	let geometry = if mouse_event.detail() == 0 {
		RippleGeometry::centered(rect)
	} else {
		RippleGeometry::from_click(rect, mouse_event.client_x().into(), mouse_event.client_y().into())
	};

	let ripple = create_ripple(button, &geometry)?;
	button.append_child(&ripple)?;

	let weak_state = Rc::downgrade(state);
	let timer_id = state.timers.schedule(state.config.ripple_lifetime(), move |timer_id| {
		let Some(state) = weak_state.upgrade() else {
			return;
		};
		let ripple = state.ripples.borrow_mut().remove(&timer_id);
		if let Some(ripple) = ripple {
			ripple.remove();
		}
	});
	state.ripples.borrow_mut().insert(timer_id, ripple);
	Ok(())
}
