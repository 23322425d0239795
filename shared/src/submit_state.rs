// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::PROCESSING_LABEL_MARKUP;

/// What the submit button should look like
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ButtonAppearance {
	pub label_markup: String,
	pub disabled: bool,
}

/// Where the submit button is in a submission attempt
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SubmitPhase {
	#[default]
	Idle,
	Processing {
		original_label: String,
	},
}

impl SubmitPhase {
	pub fn is_processing(&self) -> bool {
		matches!(self, Self::Processing { .. })
	}

	/// Moves from idle to processing, remembering the button's current label. Returns the appearance the button
	/// should take on, or `None` if a submission is already in progress.
	pub fn begin(&mut self, current_label: &str) -> Option<ButtonAppearance> {
		if self.is_processing() {
			return None;
		}
		*self = Self::Processing {
			original_label: String::from(current_label),
		};
		Some(ButtonAppearance {
			label_markup: String::from(PROCESSING_LABEL_MARKUP),
			disabled: true,
		})
	}

	/// Moves back to idle. Returns the appearance that restores the button, or `None` if nothing was in progress.
	pub fn finish(&mut self) -> Option<ButtonAppearance> {
		match std::mem::take(self) {
			Self::Idle => None,
			Self::Processing { original_label } => Some(ButtonAppearance {
				label_markup: original_label,
				disabled: false,
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn begin_then_finish_restores_the_label() {
		let mut phase = SubmitPhase::default();
		let processing = phase.begin("ثبت نام").unwrap();
		assert!(processing.disabled);
		assert_eq!(processing.label_markup, PROCESSING_LABEL_MARKUP);
		assert!(phase.is_processing());

		let restored = phase.finish().unwrap();
		assert_eq!(
			restored,
			ButtonAppearance {
				label_markup: String::from("ثبت نام"),
				disabled: false
			}
		);
		assert_eq!(phase, SubmitPhase::Idle);
	}

	#[test]
	fn second_begin_keeps_the_first_label() {
		let mut phase = SubmitPhase::default();
		phase.begin("Register").unwrap();
		assert!(phase.begin(PROCESSING_LABEL_MARKUP).is_none());
		assert_eq!(phase.finish().unwrap().label_markup, "Register");
	}

	#[test]
	fn finish_while_idle_does_nothing() {
		let mut phase = SubmitPhase::Idle;
		assert!(phase.finish().is_none());
		assert_eq!(phase, SubmitPhase::Idle);
	}
}
