use phub_domain::VehicleKind;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Text shown in place of a missing registration or color.
pub const EMPTY_FIELD: &str = "-";

/// A 1-based slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotNumber(NonZeroUsize);

impl SlotNumber {
    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(number: usize) -> Option<Self> {
        match NonZeroUsize::new(number) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Position of this slot in a zero-based slot list.
    pub(crate) const fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A parked vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub registration: String,
    pub color: String,
    pub kind: VehicleKind,
}

/// One fixed parking space.
///
/// The number never changes. Occupancy is the presence of a [`Vehicle`], so an
/// empty slot cannot carry a stale registration or color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    number: SlotNumber,
    vehicle: Option<Vehicle>,
}

impl Slot {
    pub(crate) const fn empty(number: SlotNumber) -> Self {
        Self { number, vehicle: None }
    }

    #[must_use]
    pub const fn number(&self) -> SlotNumber {
        self.number
    }

    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    #[must_use]
    pub const fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Kind of the parked vehicle, or the default kind (`Car`) when empty.
    #[must_use]
    pub fn kind(&self) -> VehicleKind {
        self.vehicle.as_ref().map_or_else(VehicleKind::default, |v| v.kind)
    }

    #[must_use]
    pub fn registration(&self) -> Option<&str> {
        self.vehicle.as_ref().map(|v| v.registration.as_str())
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.vehicle.as_ref().map(|v| v.color.as_str())
    }

    pub(crate) fn occupy(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
    }

    pub(crate) fn vacate(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }

    #[must_use]
    pub fn view(&self) -> SlotView<'_> {
        SlotView {
            number: self.number,
            kind: self.kind(),
            registration: self.registration().unwrap_or(EMPTY_FIELD),
            color: self.color().unwrap_or(EMPTY_FIELD),
        }
    }
}

/// A display row for one slot, with [`EMPTY_FIELD`] standing in for absent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView<'a> {
    pub number: SlotNumber,
    pub kind: VehicleKind,
    pub registration: &'a str,
    pub color: &'a str,
}
