//! Property tests: cursor and viewport invariants hold for any input sequence.

use core::cell::Cell;

use proptest::prelude::*;
use reflow_core::{
    InputEvent, MenuConfig, MenuController, MenuItem, display::mock::TextGridDisplay,
};

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        Just(InputEvent::Up),
        Just(InputEvent::Down),
        Just(InputEvent::Select),
    ]
}

fn assert_window_invariants(menu: &MenuController<'_, TextGridDisplay>) {
    let count = menu.item_count();
    let viewport = menu.viewport();

    assert!(menu.cursor_pos() < count, "cursor {} escaped list of {}", menu.cursor_pos(), count);
    assert_eq!(viewport.len(), menu.visible_rows().min(count));
    assert!(viewport.indices().end <= count, "viewport {:?} past list of {}", viewport, count);
    assert!(viewport.contains(menu.cursor_pos()));
}

proptest! {
    /// Browsing and editing never break the cursor/window relationship.
    #[test]
    fn window_always_contains_cursor(
        count in 1usize..24,
        header in any::<bool>(),
        events in proptest::collection::vec(event_strategy(), 0..200),
    ) {
        let values: Vec<Cell<i32>> = (0..count).map(|_| Cell::new(50)).collect();
        let items: Vec<MenuItem<'_>> = values
            .iter()
            .map(|value| MenuItem::new("Item", value, "", 0, 100, 7))
            .collect();
        let mut menu = MenuController::new(TextGridDisplay::default(), MenuConfig::default());
        menu.set_contents(&items).unwrap();
        if header {
            menu.set_header(Some("Header"));
        }

        assert_window_invariants(&menu);
        for event in events {
            menu.handle(event);
            assert_window_invariants(&menu);
        }
    }

    /// Edits never leave `[min, max]`, whatever the step size.
    #[test]
    fn edits_stay_in_range(
        min in -500i32..500,
        span in 0i32..500,
        increment in 1i32..200,
        start_offset in 0i32..500,
        events in proptest::collection::vec(event_strategy(), 0..100),
    ) {
        let max = min + span;
        let value = Cell::new(min + start_offset.min(span));
        let items = [MenuItem::new("Temp", &value, "C", min, max, increment)];
        let mut menu = MenuController::new(TextGridDisplay::default(), MenuConfig::default());
        menu.set_contents(&items).unwrap();
        menu.select();

        for event in events {
            let before = value.get();
            menu.handle(event);
            let after = value.get();
            prop_assert!((min..=max).contains(&after));
            prop_assert!(after == before || (after - before).abs() == increment);
        }
    }

    /// Shrinking the list at any point keeps the state valid.
    #[test]
    fn rebinding_shorter_list_reclamps(
        count in 2usize..24,
        keep in 1usize..24,
        downs in 0usize..40,
    ) {
        let keep = keep.min(count);
        let values: Vec<Cell<i32>> = (0..count).map(|_| Cell::new(0)).collect();
        let items: Vec<MenuItem<'_>> = values
            .iter()
            .map(|value| MenuItem::new("Item", value, "", 0, 10, 1))
            .collect();
        let mut menu = MenuController::new(TextGridDisplay::default(), MenuConfig::default());
        menu.set_contents(&items).unwrap();
        for _ in 0..downs {
            menu.down();
        }

        menu.set_contents(&items[..keep]).unwrap();

        assert_window_invariants(&menu);
    }
}

#[test]
fn round_trip_wrap_for_every_list_length() {
    for count in 1..20 {
        let values: Vec<Cell<i32>> = (0..count).map(|_| Cell::new(0)).collect();
        let items: Vec<MenuItem<'_>> = values
            .iter()
            .map(|value| MenuItem::new("Item", value, "", 0, 10, 1))
            .collect();
        let mut menu = MenuController::new(TextGridDisplay::default(), MenuConfig::default());
        menu.set_contents(&items).unwrap();

        menu.up();
        assert_eq!(menu.cursor_pos(), count - 1);
        menu.down();
        assert_eq!(menu.cursor_pos(), 0);
    }
}
