//! Resize deltas under minimum-size constraints

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::ShellError;
use crate::math::{Rect, Size, Vec2};

/// Compass components of a resize handle, e.g. `"nw"` for the top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResizeDirection {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl ResizeDirection {
    pub const N: Self = Self::from_flags(true, false, false, false);
    pub const S: Self = Self::from_flags(false, true, false, false);
    pub const E: Self = Self::from_flags(false, false, true, false);
    pub const W: Self = Self::from_flags(false, false, false, true);
    pub const NE: Self = Self::from_flags(true, false, true, false);
    pub const NW: Self = Self::from_flags(true, false, false, true);
    pub const SE: Self = Self::from_flags(false, true, true, false);
    pub const SW: Self = Self::from_flags(false, true, false, true);

    const fn from_flags(north: bool, south: bool, east: bool, west: bool) -> Self {
        Self { north, south, east, west }
    }

    /// Handles that move the window origin
    #[inline]
    pub fn moves_origin(self) -> bool {
        self.north || self.west
    }
}

impl FromStr for ResizeDirection {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut direction = ResizeDirection::default();
        for c in s.chars() {
            let flag = match c.to_ascii_lowercase() {
                'n' => &mut direction.north,
                's' => &mut direction.south,
                'e' => &mut direction.east,
                'w' => &mut direction.west,
                _ => return Err(ShellError::InvalidDirection(s.to_string())),
            };
            *flag = true;
        }

        let empty = direction == ResizeDirection::default();
        let opposed = (direction.north && direction.south) || (direction.east && direction.west);
        if empty || opposed {
            return Err(ShellError::InvalidDirection(s.to_string()));
        }
        Ok(direction)
    }
}

impl TryFrom<String> for ResizeDirection {
    type Error = ShellError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [(self.north, 'n'), (self.south, 's'), (self.east, 'e'), (self.west, 'w')];
        for (set, c) in flags {
            if set {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl From<ResizeDirection> for String {
    fn from(direction: ResizeDirection) -> Self {
        direction.to_string()
    }
}

/// New origin and size for a resize gesture
///
/// East/south handles only change size. North/west handles move the origin
/// and change size by the same amount; the delta is capped before it is
/// applied so the size never drops below `min`.
pub fn compute_resize(
    direction: ResizeDirection,
    start: Rect,
    start_pointer: Vec2,
    current_pointer: Vec2,
    min: Size,
) -> (Vec2, Size) {
    let delta = current_pointer - start_pointer;
    let mut position = start.position();
    let mut size = start.size();

    if direction.east {
        size.width = (start.width + delta.x).max(min.width);
    }
    if direction.west {
        let dx = delta.x.min(start.width - min.width);
        position.x = start.x + dx;
        size.width = start.width - dx;
    }
    if direction.south {
        size.height = (start.height + delta.y).max(min.height);
    }
    if direction.north {
        let dy = delta.y.min(start.height - min.height);
        position.y = start.y + dy;
        size.height = start.height - dy;
    }

    (position, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(300.0, 200.0);

    fn start() -> Rect {
        Rect::new(100.0, 100.0, 400.0, 300.0)
    }

    fn resize(direction: ResizeDirection, dx: f32, dy: f32) -> (Vec2, Size) {
        let pointer = Vec2::new(500.0, 500.0);
        compute_resize(direction, start(), pointer, pointer + Vec2::new(dx, dy), MIN)
    }

    #[test]
    fn test_parse_directions() {
        assert_eq!("nw".parse::<ResizeDirection>().unwrap(), ResizeDirection::NW);
        assert_eq!("SE".parse::<ResizeDirection>().unwrap(), ResizeDirection::SE);
        assert_eq!("e".parse::<ResizeDirection>().unwrap(), ResizeDirection::E);
        assert!("".parse::<ResizeDirection>().is_err());
        assert!("ns".parse::<ResizeDirection>().is_err());
        assert!("x".parse::<ResizeDirection>().is_err());
    }

    #[test]
    fn test_resize_south_east_only_changes_size() {
        let (pos, size) = resize(ResizeDirection::SE, 50.0, 30.0);
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert!((size.width - 450.0).abs() < 0.001);
        assert!((size.height - 330.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_west_grows() {
        let (pos, size) = resize(ResizeDirection::NW, -50.0, -50.0);
        assert!((pos.x - 50.0).abs() < 0.001);
        assert!((pos.y - 50.0).abs() < 0.001);
        assert!((size.width - 450.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_west_caps_delta() {
        let (pos, size) = resize(ResizeDirection::NW, 250.0, 250.0);
        assert!((size.width - 300.0).abs() < 0.001);
        assert!((size.height - 200.0).abs() < 0.001);
        // Origin moved only as far as the size allowed
        assert!((pos.x - 200.0).abs() < 0.001);
        assert!((pos.y - 200.0).abs() < 0.001);
        // Opposite edges stay put
        assert!((pos.x + size.width - 500.0).abs() < 0.001);
        assert!((pos.y + size.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_east_floors_at_minimum() {
        let (pos, size) = resize(ResizeDirection::E, -500.0, 0.0);
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert!((size.width - 300.0).abs() < 0.001);
        assert!((size.height - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_min_size_holds_for_every_handle() {
        let handles = [
            ResizeDirection::N,
            ResizeDirection::S,
            ResizeDirection::E,
            ResizeDirection::W,
            ResizeDirection::NE,
            ResizeDirection::NW,
            ResizeDirection::SE,
            ResizeDirection::SW,
        ];
        for handle in handles {
            for (dx, dy) in [(-900.0, -900.0), (900.0, 900.0), (-900.0, 900.0), (900.0, -900.0)] {
                let (_, size) = resize(handle, dx, dy);
                assert!(size.fits_min(MIN), "{handle:?} by ({dx}, {dy}) gave {size:?}");
            }
        }
    }

    #[test]
    fn test_moves_origin() {
        assert!(ResizeDirection::NE.moves_origin());
        assert!(ResizeDirection::W.moves_origin());
        assert!(!ResizeDirection::SE.moves_origin());
    }

    #[test]
    fn test_direction_json_uses_handle_names() {
        let json = serde_json::to_string(&ResizeDirection::NE).unwrap();
        assert_eq!(json, "\"ne\"");
        let parsed: ResizeDirection = serde_json::from_str("\"sw\"").unwrap();
        assert_eq!(parsed, ResizeDirection::SW);
        assert!(serde_json::from_str::<ResizeDirection>("\"ns\"").is_err());
    }
}
