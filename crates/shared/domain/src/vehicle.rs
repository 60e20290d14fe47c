use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Console token that selects [`VehicleKind::Motorcycle`] when parking.
pub const MOTORCYCLE_TOKEN: &str = "Motor";

/// The kind of vehicle occupying a slot.
///
/// `Car` is the default: an empty slot always reports `Car`, regardless of
/// what was parked there before.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum VehicleKind {
    #[default]
    Car,
    Motorcycle,
}

impl VehicleKind {
    /// Maps a console token to a vehicle kind.
    ///
    /// Only the exact, case-sensitive token `"Motor"` selects a motorcycle;
    /// every other token (including `"Car"`, `"motor"` or garbage) is a car.
    ///
    /// # Example
    /// ```rust
    /// use phub_domain::VehicleKind;
    ///
    /// assert_eq!(VehicleKind::from_token("Motor"), VehicleKind::Motorcycle);
    /// assert_eq!(VehicleKind::from_token("Truck"), VehicleKind::Car);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == MOTORCYCLE_TOKEN { Self::Motorcycle } else { Self::Car }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
