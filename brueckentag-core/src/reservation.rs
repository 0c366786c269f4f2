//! Accumulated selection state handed from one planning phase to the next.

use crate::calendar::DateSet;
use crate::window::{Range, Window};

/// Dates chosen so far plus the index ranges of the windows they came from.
///
/// Phases never mutate a reservation they were given; they return an
/// extended copy. The date set only grows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reservation {
    pub selected: DateSet,
    pub ranges: Vec<Range>,
}

impl Reservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn used(&self) -> i32 {
        self.selected.len() as i32
    }

    /// Take every working day of `window` and commit its range.
    pub fn reserve(&mut self, window: &Window) {
        self.selected.extend(window.iso_set.iter().copied());
        self.ranges.push(window.range());
    }
}
