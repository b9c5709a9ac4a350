use log::debug;

use super::MenuController;
use crate::display::Display;

impl<D> MenuController<'_, D>
where
    D: Display,
{
    pub(super) fn step_value_up(&mut self) {
        let Some(item) = self.current_item() else {
            return;
        };

        if !item.step_up() {
            debug!(
                "menu-edit: refused {} {}+{} > max {}",
                item.name,
                item.value(),
                item.increment,
                item.max
            );
        }
    }

    pub(super) fn step_value_down(&mut self) {
        let Some(item) = self.current_item() else {
            return;
        };

        if !item.step_down() {
            debug!(
                "menu-edit: refused {} {}-{} < min {}",
                item.name,
                item.value(),
                item.increment,
                item.min
            );
        }
    }
}
