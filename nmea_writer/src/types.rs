use core::fmt;

/// Represents a world position in signed decimal degrees.
///
/// Latitude is expected within [-90, 90] and longitude within [-180, 180]; values outside are
/// encoded as given, without clamping.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees, negative is South
    pub lat: f64,

    /// Longitude in degrees, negative is West
    pub lon: f64,
}

impl Position {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat_hemisphere(&self) -> Hemisphere {
        if self.lat < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    pub fn lon_hemisphere(&self) -> Hemisphere {
        Hemisphere::east_west(self.lon)
    }
}

/// Direction letter carried next to an unsigned magnitude
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// `W` for negative values, `E` otherwise
    pub fn east_west(value: f64) -> Self {
        if value < 0.0 {
            Hemisphere::West
        } else {
            Hemisphere::East
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemispheres_follow_sign() {
        let pos = Position::new(38.25, -122.5);
        assert_eq!(pos.lat_hemisphere(), Hemisphere::North);
        assert_eq!(pos.lon_hemisphere(), Hemisphere::West);

        let pos = Position::new(-33.8568, 151.2153);
        assert_eq!(pos.lat_hemisphere(), Hemisphere::South);
        assert_eq!(pos.lon_hemisphere(), Hemisphere::East);
    }

    #[test]
    fn test_zero_is_north_east() {
        let pos = Position::new(0.0, 0.0);
        assert_eq!(pos.lat_hemisphere().as_str(), "N");
        assert_eq!(pos.lon_hemisphere().as_str(), "E");
    }
}
