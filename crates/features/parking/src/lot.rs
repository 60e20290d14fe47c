use crate::error::ParkingError;
use crate::plate::PlateParity;
use crate::slot::{Slot, SlotNumber, SlotView, Vehicle};
use phub_domain::VehicleKind;
use tracing::{debug, info};

/// A fixed-capacity parking lot.
///
/// Slots are numbered `1..=capacity`, created empty, and kept in number order for
/// the lifetime of the lot. There is no way to resize a lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingLot {
    slots: Vec<Slot>,
}

impl ParkingLot {
    /// Creates a lot with `capacity` empty slots.
    ///
    /// # Errors
    /// Returns [`ParkingError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ParkingError> {
        if capacity == 0 {
            return Err(ParkingError::InvalidCapacity { capacity: 0 });
        }

        let slots = (1..=capacity).filter_map(SlotNumber::new).map(Slot::empty).collect();
        info!(capacity, "Parking lot created");
        Ok(Self { slots })
    }

    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.total_slots() - self.occupied_slots()
    }

    /// Looks up a slot by its 1-based number.
    #[must_use]
    pub fn slot(&self, number: usize) -> Option<&Slot> {
        number.checked_sub(1).and_then(|index| self.slots.get(index))
    }

    /// All slots in ascending number order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Parks a vehicle in the lowest-numbered free slot and returns that slot.
    ///
    /// # Errors
    /// Returns [`ParkingError::LotFull`] when no slot is free; the lot is unchanged.
    pub fn park(
        &mut self,
        registration: impl Into<String>,
        color: impl Into<String>,
        kind: VehicleKind,
    ) -> Result<SlotNumber, ParkingError> {
        let capacity = self.total_slots();
        let Some(slot) = self.slots.iter_mut().find(|slot| !slot.is_occupied()) else {
            debug!(capacity, "Park rejected, lot is full");
            return Err(ParkingError::LotFull { capacity });
        };

        let vehicle = Vehicle { registration: registration.into(), color: color.into(), kind };
        debug!(
            slot = slot.number().get(),
            registration = %vehicle.registration,
            color = %vehicle.color,
            %kind,
            "Vehicle parked"
        );
        slot.occupy(vehicle);
        Ok(slot.number())
    }

    /// Frees slot `number` and returns the vehicle that left.
    ///
    /// The slot returns to its default state: no registration, no color, and
    /// kind `Car` whatever was parked before.
    ///
    /// # Errors
    /// Returns [`ParkingError::SlotAlreadyEmpty`] when the slot does not exist
    /// (zero, negative, or past the last slot) or is not occupied. Nothing is
    /// modified in that case.
    pub fn leave(&mut self, number: i64) -> Result<Vehicle, ParkingError> {
        let vehicle = usize::try_from(number)
            .ok()
            .and_then(SlotNumber::new)
            .and_then(|n| self.slots.get_mut(n.index()))
            .and_then(Slot::vacate)
            .ok_or(ParkingError::SlotAlreadyEmpty { slot: number })?;

        debug!(slot = number, registration = %vehicle.registration, "Slot freed");
        Ok(vehicle)
    }

    /// One row per slot, occupied or not, in ascending number order.
    #[must_use]
    pub fn status(&self) -> Vec<SlotView<'_>> {
        self.slots.iter().map(Slot::view).collect()
    }

    /// Registrations of vehicles whose color equals `color` exactly (case-sensitive).
    #[must_use]
    pub fn registration_numbers_for_color(&self, color: &str) -> Vec<&str> {
        self.occupied()
            .filter(|(_, vehicle)| vehicle.color == color)
            .map(|(_, vehicle)| vehicle.registration.as_str())
            .collect()
    }

    /// Slot numbers holding vehicles whose color equals `color` exactly.
    #[must_use]
    pub fn slot_numbers_for_color(&self, color: &str) -> Vec<SlotNumber> {
        self.occupied()
            .filter(|(_, vehicle)| vehicle.color == color)
            .map(|(number, _)| number)
            .collect()
    }

    /// Registrations whose plate classifies as `parity`.
    #[must_use]
    pub fn registration_numbers_with_parity(&self, parity: PlateParity) -> Vec<&str> {
        self.occupied()
            .filter(|(_, vehicle)| PlateParity::of(&vehicle.registration) == parity)
            .map(|(_, vehicle)| vehicle.registration.as_str())
            .collect()
    }

    #[must_use]
    pub fn registration_numbers_with_odd_plate(&self) -> Vec<&str> {
        self.registration_numbers_with_parity(PlateParity::Odd)
    }

    #[must_use]
    pub fn registration_numbers_with_even_plate(&self) -> Vec<&str> {
        self.registration_numbers_with_parity(PlateParity::Even)
    }

    /// Kind of every parked vehicle, in slot order.
    #[must_use]
    pub fn types_of_vehicles(&self) -> Vec<VehicleKind> {
        self.occupied().map(|(_, vehicle)| vehicle.kind).collect()
    }

    fn occupied(&self) -> impl Iterator<Item = (SlotNumber, &Vehicle)> {
        self.slots.iter().filter_map(|slot| slot.vehicle().map(|vehicle| (slot.number(), vehicle)))
    }
}
