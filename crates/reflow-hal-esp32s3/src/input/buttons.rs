use embedded_hal::digital::InputPin;
use heapless::Deque;

use reflow_core::input::{InputEvent, InputProvider};

#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    active_low: bool,
    debounce_polls: u8,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            debounce_polls: 3,
        }
    }
}

impl ButtonConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn with_debounce_polls(mut self, debounce_polls: u8) -> Self {
        self.debounce_polls = debounce_polls;
        self
    }
}

#[derive(Debug)]
pub enum ButtonInputError<UpErr, DownErr, SelErr> {
    Up(UpErr),
    Down(DownErr),
    Select(SelErr),
}

type ButtonResult<UpErr, DownErr, SelErr, T> = Result<T, ButtonInputError<UpErr, DownErr, SelErr>>;

/// Press detector for one button: a level must hold for `threshold` extra
/// polls before it becomes the stable state.
#[derive(Debug, Clone, Copy)]
struct Debouncer {
    raw: bool,
    stable: bool,
    stable_count: u8,
}

impl Debouncer {
    const fn new(pressed: bool) -> Self {
        Self {
            raw: pressed,
            stable: pressed,
            stable_count: 0,
        }
    }

    /// Returns true on a debounced press edge.
    fn update(&mut self, pressed: bool, threshold: u8) -> bool {
        if pressed == self.raw {
            self.stable_count = self.stable_count.saturating_add(1);
        } else {
            self.raw = pressed;
            self.stable_count = 0;
        }

        if self.stable_count >= threshold.max(1) && self.stable != self.raw {
            self.stable = self.raw;
            return self.stable;
        }

        false
    }
}

/// Three push buttons (up, down, select) polled from GPIO.
///
/// Buttons held at construction must be released before they fire.
#[derive(Debug)]
pub struct ButtonInput<UP, DOWN, SEL> {
    up: UP,
    down: DOWN,
    select: SEL,
    config: ButtonConfig,
    up_state: Debouncer,
    down_state: Debouncer,
    select_state: Debouncer,
    pending: Deque<InputEvent, 3>,
}

impl<UP, DOWN, SEL> ButtonInput<UP, DOWN, SEL>
where
    UP: InputPin,
    DOWN: InputPin,
    SEL: InputPin,
{
    pub fn new(
        mut up: UP,
        mut down: DOWN,
        mut select: SEL,
        config: ButtonConfig,
    ) -> ButtonResult<UP::Error, DOWN::Error, SEL::Error, Self> {
        let up_high = up.is_high().map_err(ButtonInputError::Up)?;
        let down_high = down.is_high().map_err(ButtonInputError::Down)?;
        let select_high = select.is_high().map_err(ButtonInputError::Select)?;

        Ok(Self {
            up,
            down,
            select,
            config,
            up_state: Debouncer::new(pressed_from_level(up_high, config.active_low)),
            down_state: Debouncer::new(pressed_from_level(down_high, config.active_low)),
            select_state: Debouncer::new(pressed_from_level(select_high, config.active_low)),
            pending: Deque::new(),
        })
    }

    pub fn config(&self) -> ButtonConfig {
        self.config
    }

    /// Returns the pins.
    pub fn release(self) -> (UP, DOWN, SEL) {
        (self.up, self.down, self.select)
    }

    fn poll_pins(&mut self) -> ButtonResult<UP::Error, DOWN::Error, SEL::Error, ()> {
        let active_low = self.config.active_low;
        let threshold = self.config.debounce_polls;

        let up_high = self.up.is_high().map_err(ButtonInputError::Up)?;
        let down_high = self.down.is_high().map_err(ButtonInputError::Down)?;
        let select_high = self.select.is_high().map_err(ButtonInputError::Select)?;

        let edges = [
            (
                self.up_state
                    .update(pressed_from_level(up_high, active_low), threshold),
                InputEvent::Up,
            ),
            (
                self.down_state
                    .update(pressed_from_level(down_high, active_low), threshold),
                InputEvent::Down,
            ),
            (
                self.select_state
                    .update(pressed_from_level(select_high, active_low), threshold),
                InputEvent::Select,
            ),
        ];

        for (pressed, event) in edges {
            // Capacity matches the button count, one edge each per poll.
            if pressed && self.pending.push_back(event).is_err() {
                break;
            }
        }

        Ok(())
    }
}

impl<UP, DOWN, SEL> InputProvider for ButtonInput<UP, DOWN, SEL>
where
    UP: InputPin,
    DOWN: InputPin,
    SEL: InputPin,
{
    type Error = ButtonInputError<UP::Error, DOWN::Error, SEL::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }

        self.poll_pins()?;
        Ok(self.pending.pop_front())
    }
}

#[inline]
fn pressed_from_level(high: bool, active_low: bool) -> bool {
    if active_low { !high } else { high }
}
