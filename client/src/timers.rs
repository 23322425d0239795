// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

pub type TimerId = u64;

#[derive(Default)]
struct TimerTable {
	next_id: TimerId,
	pending: HashMap<TimerId, Timeout>,
	// Timeouts that already ran. They're dropped on the next change to the table rather than from inside their own
	// callback.
	fired: Vec<TimerId>,
}

impl TimerTable {
	fn prune(&mut self) {
		for id in self.fired.drain(..) {
			self.pending.remove(&id);
		}
	}
}

/// The set of timeouts a component has scheduled. Dropping the set cancels everything that hasn't run yet.
#[derive(Default)]
pub struct PendingTimers {
	table: Rc<RefCell<TimerTable>>,
}

impl PendingTimers {
	pub fn new() -> Self {
		Self::default()
	}

	/// Runs `callback` once after `millis` milliseconds unless it's cancelled first. The callback receives the same
	/// ID this returns.
	pub fn schedule(&self, millis: u32, callback: impl FnOnce(TimerId) + 'static) -> TimerId {
		let mut table = self.table.borrow_mut();
		table.prune();
		let id = table.next_id;
		table.next_id += 1;

		let weak_table: Weak<RefCell<TimerTable>> = Rc::downgrade(&self.table);
		let timeout = Timeout::new(millis, move || {
			if let Some(table) = weak_table.upgrade() {
				table.borrow_mut().fired.push(id);
			}
			callback(id);
		});
		table.pending.insert(id, timeout);
		id
	}

	pub fn cancel_all(&self) {
		let cancelled: Vec<Timeout> = {
			let mut table = self.table.borrow_mut();
			table.fired.clear();
			table.pending.drain().map(|(_, timeout)| timeout).collect()
		};
		for timeout in cancelled {
			timeout.cancel();
		}
	}

	/// Number of timeouts that haven't run or been cancelled
	pub fn pending(&self) -> usize {
		let mut table = self.table.borrow_mut();
		table.prune();
		table.pending.len()
	}
}
