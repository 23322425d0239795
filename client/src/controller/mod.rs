// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{optional_query_selector, query_selector_all, require_element_by_id, require_query_selector};
use crate::error::ControllerError;
use crate::listener::EventListener;
use crate::notice::Notifier;
use crate::timers::{PendingTimers, TimerId};
use registration_shared::config::ControllerConfig;
use registration_shared::submit_state::{ButtonAppearance, SubmitPhase};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

mod focus;
mod hover;
mod login;
mod ripple;
mod submit;

pub const FORM_ID: &str = "registrationForm";
pub const TERMS_CHECKBOX_SELECTOR: &str = "#termsCheck";
pub const EMAIL_INPUT_SELECTOR: &str = r#"input[type="email"]"#;
pub const PASSWORD_INPUT_SELECTOR: &str = r#"input[type="password"]"#;
pub const SUBMIT_BUTTON_SELECTOR: &str = ".btn-register";
pub const FORM_CONTROL_SELECTOR: &str = ".form-control";
pub const ACCOUNT_ICON_SELECTOR: &str = ".user-account";
pub const LOGIN_LINK_SELECTOR: &str = "#loginLink";

/// The page elements the registration controller works with
pub struct RegistrationElements {
	pub form: HtmlFormElement,
	pub email_input: HtmlInputElement,
	pub password_input: HtmlInputElement,
	pub terms_checkbox: HtmlInputElement,
	pub submit_button: HtmlButtonElement,
	pub form_controls: Vec<HtmlElement>,
	pub account_icon: Option<HtmlElement>,
	pub login_link: Option<HtmlElement>,
}

impl RegistrationElements {
	/// Looks up every element the controller needs. The form and everything in it are required; the account icon
	/// and the login link aren't on every page that carries the form.
	pub fn from_document(document: &Document) -> Result<Self, ControllerError> {
		let form: HtmlFormElement = require_element_by_id(document, FORM_ID)?;
		let email_input = require_query_selector(&form, EMAIL_INPUT_SELECTOR)?;
		let password_input = require_query_selector(&form, PASSWORD_INPUT_SELECTOR)?;
		let terms_checkbox = require_query_selector(&form, TERMS_CHECKBOX_SELECTOR)?;
		let submit_button = require_query_selector(&form, SUBMIT_BUTTON_SELECTOR)?;
		let form_controls = query_selector_all(document, FORM_CONTROL_SELECTOR)?;

		let account_icon = optional_query_selector(document, ACCOUNT_ICON_SELECTOR)?;
		if account_icon.is_none() {
			log::debug!("No account icon on this page");
		}
		let login_link = optional_query_selector(document, LOGIN_LINK_SELECTOR)?;
		if login_link.is_none() {
			log::debug!("No login link on this page");
		}

		Ok(Self {
			form,
			email_input,
			password_input,
			terms_checkbox,
			submit_button,
			form_controls,
			account_icon,
			login_link,
		})
	}
}

struct ControllerState {
	elements: RegistrationElements,
	config: ControllerConfig,
	notifier: Rc<dyn Notifier>,
	submit_phase: RefCell<SubmitPhase>,
	timers: PendingTimers,
	// Ripples still on the button, keyed by the timer that removes them
	ripples: RefCell<HashMap<TimerId, Element>>,
}

impl ControllerState {
	fn apply_button_appearance(&self, appearance: &ButtonAppearance) {
		let button = &self.elements.submit_button;
		button.set_inner_html(&appearance.label_markup);
		button.set_disabled(appearance.disabled);
	}

	fn restore_submit_button(&self) {
		let restored = self.submit_phase.borrow_mut().finish();
		if let Some(appearance) = restored {
			self.apply_button_appearance(&appearance);
		}
	}
}

/// Interactivity for the registration page: the account icon, field animations, form validation with a simulated
/// submission, the login link, and ripples on the submit button.
///
/// Everything is wired up by [`RegistrationController::attach`] and torn down when the controller is dropped: event
/// listeners are removed, pending timers are cancelled, remaining ripples are removed, and a submit button stuck
/// mid-submission gets its label back.
pub struct RegistrationController {
	state: Rc<ControllerState>,
	listeners: Vec<EventListener>,
}

impl RegistrationController {
	pub fn attach(
		elements: RegistrationElements,
		config: ControllerConfig,
		notifier: Rc<dyn Notifier>,
	) -> Result<Self, ControllerError> {
		let state = Rc::new(ControllerState {
			elements,
			config,
			notifier,
			submit_phase: RefCell::new(SubmitPhase::Idle),
			timers: PendingTimers::new(),
			ripples: RefCell::new(HashMap::new()),
		});

		let mut listeners = Vec::new();
		listeners.extend(hover::bind(&state)?);
		listeners.extend(focus::bind(&state)?);
		listeners.extend(submit::bind(&state)?);
		listeners.extend(ripple::bind(&state)?);
		listeners.extend(login::bind(&state)?);

		log::debug!("Registration controller attached with {} listeners", listeners.len());
		Ok(Self { state, listeners })
	}

	pub fn is_processing(&self) -> bool {
		self.state.submit_phase.borrow().is_processing()
	}

	pub fn pending_timers(&self) -> usize {
		self.state.timers.pending()
	}

	pub fn detach(self) {
		log::debug!("Detaching registration controller");
	}
}

impl Drop for RegistrationController {
	fn drop(&mut self) {
		self.state.timers.cancel_all();
		let ripples: Vec<Element> = self.state.ripples.borrow_mut().drain().map(|(_, ripple)| ripple).collect();
		for ripple in ripples {
			ripple.remove();
		}
		self.state.restore_submit_button();
		self.listeners.clear();
	}
}
