// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ControllerError;
use std::any::type_name;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, ControllerError> {
	web_sys::window().ok_or(ControllerError::NoWindow)
}

pub fn document_of(window: &Window) -> Result<Document, ControllerError> {
	window.document().ok_or(ControllerError::NoDocument)
}

pub fn document() -> Result<Document, ControllerError> {
	document_of(&window()?)
}

fn cast_element<T: JsCast>(element: Element, selector: &str) -> Result<T, ControllerError> {
	element.dyn_into::<T>().map_err(|_| ControllerError::WrongElementType {
		selector: String::from(selector),
		expected: type_name::<T>().rsplit("::").next().unwrap_or("element"),
	})
}

pub fn require_element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, ControllerError> {
	let selector = format!("#{}", id);
	let element = document
		.get_element_by_id(id)
		.ok_or_else(|| ControllerError::MissingElement(selector.clone()))?;
	cast_element(element, &selector)
}

/// Finds the first element under `root` that matches the selector, failing if there isn't one.
pub fn require_query_selector<T: JsCast>(root: &Element, selector: &str) -> Result<T, ControllerError> {
	let element = root
		.query_selector(selector)?
		.ok_or_else(|| ControllerError::MissingElement(String::from(selector)))?;
	cast_element(element, selector)
}

/// Finds the first element in the document that matches the selector, if there is one.
pub fn optional_query_selector<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, ControllerError> {
	match document.query_selector(selector)? {
		Some(element) => Ok(Some(cast_element(element, selector)?)),
		None => Ok(None),
	}
}

/// Collects every HTML element in the document matching the selector.
pub fn query_selector_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, ControllerError> {
	let nodes = document.query_selector_all(selector)?;
	let mut elements = Vec::with_capacity(nodes.length() as usize);
	for index in 0..nodes.length() {
		if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
			elements.push(element);
		}
	}
	Ok(elements)
}
