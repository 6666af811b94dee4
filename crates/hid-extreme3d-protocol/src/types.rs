//! Decoded joystick state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::report::{BUTTON_COUNT, HAT_CENTERED, ROTATION_MAX, SLIDER_MAX, STICK_MAX};

/// Hat switch position.
///
/// Nibbles 0..=7 run clockwise from north; every other nibble is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HatDirection {
    #[default]
    Centered,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl HatDirection {
    pub const ALL: [HatDirection; 9] = [
        Self::Centered,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    pub fn from_nibble(nibble: u8) -> Self {
        match nibble {
            0 => Self::North,
            1 => Self::NorthEast,
            2 => Self::East,
            3 => Self::SouthEast,
            4 => Self::South,
            5 => Self::SouthWest,
            6 => Self::West,
            7 => Self::NorthWest,
            _ => Self::Centered,
        }
    }

    /// Wire value; [`HAT_CENTERED`] for no direction.
    pub fn nibble(self) -> u8 {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
            Self::Centered => HAT_CENTERED,
        }
    }

    /// Unit step `(dx, dy)` with north as `(0, 1)`.
    pub fn vector(self) -> (i8, i8) {
        match self {
            Self::Centered => (0, 0),
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }

    pub fn is_centered(self) -> bool {
        self == Self::Centered
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for HatDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// States of the 12 buttons, addressed by their 1-based printed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[bool; 12]", into = "[bool; 12]")]
pub struct ButtonSet {
    bits: u16,
}

impl ButtonSet {
    const MASK: u16 = (1 << BUTTON_COUNT) - 1;

    /// Bit `i` of `bits` is button `i + 1`. Bits above button 12 are dropped.
    pub fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & Self::MASK,
        }
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// Always [`BUTTON_COUNT`].
    pub fn len(&self) -> usize {
        BUTTON_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `false` for indices outside `1..=12`.
    pub fn is_pressed(&self, button: usize) -> bool {
        match button.checked_sub(1) {
            Some(i) if i < BUTTON_COUNT => self.bits & (1 << i) != 0,
            _ => false,
        }
    }

    pub fn set(&mut self, button: usize, pressed: bool) {
        if let Some(i) = button.checked_sub(1).filter(|i| *i < BUTTON_COUNT) {
            if pressed {
                self.bits |= 1 << i;
            } else {
                self.bits &= !(1 << i);
            }
        }
    }

    /// Every button state in order, button 1 first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (1..=BUTTON_COUNT).map(|b| self.is_pressed(b))
    }

    /// 1-based numbers of the pressed buttons, ascending.
    pub fn pressed(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=BUTTON_COUNT).filter(|b| self.is_pressed(*b))
    }

    pub fn count_pressed(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl From<[bool; BUTTON_COUNT]> for ButtonSet {
    fn from(states: [bool; BUTTON_COUNT]) -> Self {
        let bits = states
            .iter()
            .enumerate()
            .filter(|(_, pressed)| **pressed)
            .fold(0u16, |acc, (i, _)| acc | (1 << i));
        Self { bits }
    }
}

impl From<ButtonSet> for [bool; BUTTON_COUNT] {
    fn from(set: ButtonSet) -> Self {
        let mut states = [false; BUTTON_COUNT];
        for (slot, pressed) in states.iter_mut().zip(set.iter()) {
            *slot = pressed;
        }
        states
    }
}

impl fmt::Display for ButtonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (n, button) in self.pressed().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{button}")?;
        }
        f.write_str("]")
    }
}

/// One decoded input report, in raw device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct JoystickState {
    /// Stick left/right, 0..=1023.
    pub x: u16,
    /// Stick forward/back, 0..=1023.
    pub y: u16,
    /// Twist, 0..=255.
    pub rotation: u8,
    /// Throttle slider on the base, 0..=255.
    pub slider: u8,
    pub hat: HatDirection,
    pub buttons: ButtonSet,
}

/// Axis values scaled to unit ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedState {
    /// -1.0..=1.0
    pub x: f32,
    /// -1.0..=1.0
    pub y: f32,
    /// -1.0..=1.0
    pub twist: f32,
    /// 0.0..=1.0
    pub slider: f32,
}

fn bipolar(raw: f32, max: f32) -> f32 {
    raw * 2.0 / max - 1.0
}

impl JoystickState {
    pub fn normalized(&self) -> NormalizedState {
        NormalizedState {
            x: bipolar(f32::from(self.x), f32::from(STICK_MAX)),
            y: bipolar(f32::from(self.y), f32::from(STICK_MAX)),
            twist: bipolar(f32::from(self.rotation), f32::from(ROTATION_MAX)),
            slider: f32::from(self.slider) / f32::from(SLIDER_MAX),
        }
    }

    /// Normalized `(x, y)`.
    pub fn stick(&self) -> (f32, f32) {
        let n = self.normalized();
        (n.x, n.y)
    }

    pub fn is_pressed(&self, button: usize) -> bool {
        self.buttons.is_pressed(button)
    }
}

impl fmt::Display for JoystickState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normalized();
        write!(
            f,
            "stick: ({:.4}, {:.4}), hat: {}, buttons: {}, twist: {:.4}, slider: {:.4}",
            n.x, n.y, self.hat, self.buttons, n.twist, n.slider
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hat_nibble_table() {
        assert_eq!(HatDirection::from_nibble(0), HatDirection::North);
        assert_eq!(HatDirection::from_nibble(2), HatDirection::East);
        assert_eq!(HatDirection::from_nibble(4), HatDirection::South);
        assert_eq!(HatDirection::from_nibble(6), HatDirection::West);
        assert_eq!(HatDirection::from_nibble(7), HatDirection::NorthWest);
        for nibble in 8..=15 {
            assert_eq!(HatDirection::from_nibble(nibble), HatDirection::Centered);
        }
    }

    #[test]
    fn test_hat_nibble_inverse() {
        for dir in HatDirection::ALL {
            assert_eq!(HatDirection::from_nibble(dir.nibble()), dir);
        }
        assert_eq!(HatDirection::Centered.nibble(), HAT_CENTERED);
    }

    #[test]
    fn test_hat_vectors_run_clockwise() {
        let expected = [
            (0, 1),
            (1, 1),
            (1, 0),
            (1, -1),
            (0, -1),
            (-1, -1),
            (-1, 0),
            (-1, 1),
        ];
        for (nibble, vector) in (0u8..8).zip(expected) {
            assert_eq!(HatDirection::from_nibble(nibble).vector(), vector);
        }
        assert_eq!(HatDirection::Centered.vector(), (0, 0));
    }

    #[test]
    fn test_button_set_access() {
        let mut buttons = ButtonSet::default();
        assert_eq!(buttons.count_pressed(), 0);

        buttons.set(1, true);
        buttons.set(12, true);
        assert!(buttons.is_pressed(1));
        assert!(buttons.is_pressed(12));
        assert!(!buttons.is_pressed(2));
        assert_eq!(buttons.bits(), 0x0801);

        buttons.set(1, false);
        assert!(!buttons.is_pressed(1));
        assert_eq!(buttons.pressed().collect::<Vec<_>>(), vec![12]);
    }

    #[test]
    fn test_button_set_out_of_range() {
        let mut buttons = ButtonSet::from_bits(u16::MAX);
        assert_eq!(buttons.bits(), 0x0FFF);
        assert_eq!(buttons.count_pressed(), 12);
        assert!(!buttons.is_pressed(0));
        assert!(!buttons.is_pressed(13));

        buttons.set(0, false);
        buttons.set(13, false);
        assert_eq!(buttons.bits(), 0x0FFF);
    }

    #[test]
    fn test_button_set_always_twelve_entries() {
        assert_eq!(ButtonSet::default().iter().count(), BUTTON_COUNT);
        assert_eq!(ButtonSet::from_bits(0x0FFF).iter().count(), BUTTON_COUNT);
        assert_eq!(ButtonSet::default().len(), BUTTON_COUNT);
    }

    #[test]
    fn test_button_set_display() {
        assert_eq!(ButtonSet::default().to_string(), "[]");
        assert_eq!(ButtonSet::from_bits(0b1000_0000_0101).to_string(), "[1, 3, 12]");
    }

    #[test]
    fn test_button_set_serde_as_array() -> Result<(), serde_json::Error> {
        let buttons = ButtonSet::from_bits(0b11);
        let json = serde_json::to_string(&buttons)?;
        assert_eq!(
            json,
            "[true,true,false,false,false,false,false,false,false,false,false,false]"
        );
        let back: ButtonSet = serde_json::from_str(&json)?;
        assert_eq!(back, buttons);
        Ok(())
    }

    #[test]
    fn test_normalized_extremes() {
        let low = JoystickState::default().normalized();
        assert!((low.x + 1.0).abs() < 1e-6);
        assert!((low.y + 1.0).abs() < 1e-6);
        assert!((low.twist + 1.0).abs() < 1e-6);
        assert!(low.slider.abs() < 1e-6);

        let high = JoystickState {
            x: STICK_MAX,
            y: STICK_MAX,
            rotation: ROTATION_MAX,
            slider: SLIDER_MAX,
            ..JoystickState::default()
        }
        .normalized();
        assert!((high.x - 1.0).abs() < 1e-6);
        assert!((high.y - 1.0).abs() < 1e-6);
        assert!((high.twist - 1.0).abs() < 1e-6);
        assert!((high.slider - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_stick_near_center() {
        let state = JoystickState {
            x: 512,
            y: 511,
            ..JoystickState::default()
        };
        let (x, y) = state.stick();
        assert!(x.abs() < 0.002);
        assert!(y.abs() < 0.002);
    }
}
