// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

/// Builds a view explaining that the page couldn't finish loading, with the underlying error if there is one.
pub fn error_message_view<G: Html>(ctx: Scope<'_>, message: String, error: Option<impl Display>) -> View<G> {
	if let Some(error) = error {
		let error_display = error.to_string();
		return view! {
			ctx,
			div(id="app_error") {
				(message)
				br {}
				(error_display)
			}
		};
	}

	view! {
		ctx,
		div(id="app_error") { (message) }
	}
}
