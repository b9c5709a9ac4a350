use core::cell::Cell;

use super::MenuError;

/// One bounded integer setting.
///
/// `value` is caller storage; the controller reads and writes it in place,
/// and the caller can read it between input events.
#[derive(Clone, Copy, Debug)]
pub struct MenuItem<'a> {
    pub name: &'a str,
    pub value: &'a Cell<i32>,
    pub unit: &'a str,
    pub min: i32,
    pub max: i32,
    pub increment: i32,
}

impl<'a> MenuItem<'a> {
    pub const fn new(
        name: &'a str,
        value: &'a Cell<i32>,
        unit: &'a str,
        min: i32,
        max: i32,
        increment: i32,
    ) -> Self {
        Self {
            name,
            value,
            unit,
            min,
            max,
            increment,
        }
    }

    pub fn value(&self) -> i32 {
        self.value.get()
    }

    /// Checks `min <= max` and `increment > 0`. `index` is reported back in the error.
    pub fn validate(&self, index: usize) -> Result<(), MenuError> {
        if self.min > self.max {
            return Err(MenuError::InvalidRange { index });
        }
        if self.increment <= 0 {
            return Err(MenuError::InvalidIncrement { index });
        }
        Ok(())
    }

    /// Adds one increment unless the result would pass `max`.
    ///
    /// Returns whether the value changed.
    pub fn step_up(&self) -> bool {
        let next = self
            .value
            .get()
            .checked_add(self.increment)
            .filter(|next| *next <= self.max);
        self.apply(next)
    }

    /// Subtracts one increment unless the result would pass `min`.
    ///
    /// Returns whether the value changed.
    pub fn step_down(&self) -> bool {
        let next = self
            .value
            .get()
            .checked_sub(self.increment)
            .filter(|next| *next >= self.min);
        self.apply(next)
    }

    fn apply(&self, next: Option<i32>) -> bool {
        match next {
            Some(next) => {
                self.value.set(next);
                true
            }
            None => false,
        }
    }
}
