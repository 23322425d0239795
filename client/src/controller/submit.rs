// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ControllerState;
use crate::error::ControllerError;
use crate::listener::EventListener;
use registration_shared::messages::REGISTRATION_SUCCESS;
use registration_shared::ripple::RIPPLE_CLASS;
use registration_shared::validation::{validate, FormSnapshot};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event as WebEvent};

pub(super) fn bind(state: &Rc<ControllerState>) -> Result<Vec<EventListener>, ControllerError> {
	let submit_listener = EventListener::new(&state.elements.form, "submit", {
		let state = Rc::clone(state);
		move |event: WebEvent| {
			event.prevent_default();
			handle_submission(&state);
		}
	})?;
	Ok(vec![submit_listener])
}

fn form_snapshot(state: &ControllerState) -> FormSnapshot {
	FormSnapshot {
		email: state.elements.email_input.value(),
		password: state.elements.password_input.value(),
		terms_accepted: state.elements.terms_checkbox.checked(),
	}
}

/// Gets the submit button's label without any ripples that happen to be on it at the moment.
fn button_label_markup(state: &ControllerState) -> String {
	let button = &state.elements.submit_button;
	let label_copy = match button.clone_node_with_deep(true) {
		Ok(node) => node.unchecked_into::<Element>(),
		Err(error) => {
			log::warn!("Failed to copy submit button label: {:?}", error);
			return button.inner_html();
		}
	};
	if let Ok(ripples) = label_copy.query_selector_all(&format!(".{}", RIPPLE_CLASS)) {
		for index in 0..ripples.length() {
			if let Some(ripple) = ripples.get(index) {
				if let Some(parent) = ripple.parent_node() {
					if let Err(error) = parent.remove_child(&ripple) {
						log::warn!("Failed to strip ripple from saved submit button label: {:?}", error);
					}
				}
			}
		}
	}
	label_copy.inner_html()
}

fn handle_submission(state: &Rc<ControllerState>) {
	let snapshot = form_snapshot(state);
	if let Err(rejection) = validate(&snapshot) {
		state.notifier.notify(rejection.message());
		return;
	}

	let label_markup = button_label_markup(state);
	let processing_appearance = state.submit_phase.borrow_mut().begin(&label_markup);
	let Some(processing_appearance) = processing_appearance else {
		log::debug!("Ignoring registration submission while another one is processing");
		return;
	};
	state.apply_button_appearance(&processing_appearance);

	log::debug!(
		"Simulating registration submission for {} ms",
		state.config.processing_delay()
	);
	let weak_state = Rc::downgrade(state);
	state.timers.schedule(state.config.processing_delay(), move |_| {
		if let Some(state) = weak_state.upgrade() {
			complete_submission(&state);
		}
	});
}

fn complete_submission(state: &ControllerState) {
	state.notifier.notify(REGISTRATION_SUCCESS);
	state.restore_submit_button();
	state.elements.form.reset();
	log::debug!("Simulated registration submission complete");
}
