// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// CSS class given to every ripple element
pub const RIPPLE_CLASS: &str = "ripple";

/// A rectangle in viewport coordinates, as reported by `getBoundingClientRect`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxRect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

/// Size and offset of a ripple, in pixels relative to the element it's placed in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
	pub size: f64,
	pub left: f64,
	pub top: f64,
}

impl RippleGeometry {
	/// Sizes a ripple to cover the element's longer side and centers it on the pointer.
	pub fn from_click(rect: BoxRect, pointer_x: f64, pointer_y: f64) -> Self {
		let size = rect.width.max(rect.height);
		let half = size / 2.0;
		Self {
			size,
			left: pointer_x - rect.left - half,
			top: pointer_y - rect.top - half,
		}
	}

	/// Centers a ripple on the element itself. Clicks that come from the keyboard carry no pointer position, so
	/// this is used for them.
	pub fn centered(rect: BoxRect) -> Self {
		Self::from_click(rect, rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
	}

	pub fn style_declarations(&self) -> [(&'static str, String); 4] {
		[
			("width", format!("{}px", self.size)),
			("height", format!("{}px", self.size)),
			("left", format!("{}px", self.left)),
			("top", format!("{}px", self.top)),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn center(geometry: &RippleGeometry) -> (f64, f64) {
		let half = geometry.size / 2.0;
		(geometry.left + half, geometry.top + half)
	}

	const BUTTON: BoxRect = BoxRect {
		left: 100.0,
		top: 40.0,
		width: 200.0,
		height: 50.0,
	};

	#[rstest]
	#[case(100.0, 40.0)]
	#[case(300.0, 90.0)]
	#[case(150.0, 65.0)]
	#[case(299.5, 40.5)]
	fn ripple_is_centered_on_the_pointer(#[case] x: f64, #[case] y: f64) {
		let geometry = RippleGeometry::from_click(BUTTON, x, y);
		assert_eq!(geometry.size, 200.0);
		assert_eq!(center(&geometry), (x - BUTTON.left, y - BUTTON.top));
	}

	#[test]
	fn tall_elements_use_their_height() {
		let rect = BoxRect {
			left: 0.0,
			top: 0.0,
			width: 30.0,
			height: 80.0,
		};
		let geometry = RippleGeometry::from_click(rect, 15.0, 40.0);
		assert_eq!(geometry.size, 80.0);
		assert_eq!(geometry.left, -25.0);
		assert_eq!(geometry.top, 0.0);
	}

	#[test]
	fn keyboard_clicks_center_on_the_element() {
		let geometry = RippleGeometry::centered(BUTTON);
		assert_eq!(geometry.size, 200.0);
		assert_eq!(center(&geometry), (100.0, 25.0));
		assert_eq!(geometry.left, 0.0);
		assert_eq!(geometry.top, -75.0);
	}

	#[test]
	fn style_uses_pixel_units() {
		let geometry = RippleGeometry::from_click(BUTTON, 110.0, 50.0);
		let styles = geometry.style_declarations();
		assert_eq!(styles[0], ("width", String::from("200px")));
		assert_eq!(styles[1], ("height", String::from("200px")));
		assert_eq!(styles[2], ("left", String::from("-90px")));
		assert_eq!(styles[3], ("top", String::from("-90px")));
	}
}
