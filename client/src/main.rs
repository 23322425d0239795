// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registration_client::config::load_config;
use registration_client::controller::{RegistrationController, RegistrationElements};
use registration_client::dom::{document_of, window};
use registration_client::error::ControllerError;
use registration_client::notice::AlertNotifier;
use registration_client::pages::error::error_message_view;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
	static CONTROLLER: RefCell<Option<RegistrationController>> = const { RefCell::new(None) };
}

fn start() -> Result<RegistrationController, ControllerError> {
	let window = window()?;
	let document = document_of(&window)?;
	let config = load_config(&document)?;
	let elements = RegistrationElements::from_document(&document)?;
	let notifier = Rc::new(AlertNotifier::new(window));
	RegistrationController::attach(elements, config, notifier)
}

fn main() {
	console_error_panic_hook::set_once();
	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	match start() {
		Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
		Err(error) => {
			log::error!("Failed to set up the registration page: {}", error);
			sycamore::render(|ctx| {
				error_message_view(
					ctx,
					String::from("Unable to load the registration form. Please refresh the page."),
					Some(error),
				)
			});
		}
	}
}
