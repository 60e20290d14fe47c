use crate::error::ParkingError;
use crate::lot::ParkingLot;
use crate::slot::{SlotNumber, Vehicle};
use parking_lot::Mutex;
use phub_domain::VehicleKind;
use std::sync::Arc;

/// A cloneable, thread-safe handle to one [`ParkingLot`].
///
/// Every operation takes the single lot-wide lock, so a park and a leave can
/// never interleave inside the slot scan.
///
/// # Example
/// ```rust
/// use phub_parking::{ParkingLot, SharedParkingLot, VehicleKind};
///
/// let shared = SharedParkingLot::new(ParkingLot::new(3)?);
/// let handle = shared.clone();
/// std::thread::spawn(move || handle.park("KA-01-HH-1234", "White", VehicleKind::Car))
///     .join()
///     .unwrap()?;
///
/// assert_eq!(shared.with(|lot| lot.occupied_slots()), 1);
/// # Ok::<(), phub_parking::ParkingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SharedParkingLot {
    inner: Arc<Mutex<ParkingLot>>,
}

impl SharedParkingLot {
    #[must_use]
    pub fn new(lot: ParkingLot) -> Self {
        Self { inner: Arc::new(Mutex::new(lot)) }
    }

    /// Runs `f` with exclusive access to the lot.
    ///
    /// Keep `f` short; all other handles wait while it runs.
    pub fn with<R>(&self, f: impl FnOnce(&mut ParkingLot) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`ParkingLot::park`].
    ///
    /// # Errors
    /// Returns [`ParkingError::LotFull`] when no slot is free.
    pub fn park(
        &self,
        registration: impl Into<String>,
        color: impl Into<String>,
        kind: VehicleKind,
    ) -> Result<SlotNumber, ParkingError> {
        self.with(|lot| lot.park(registration, color, kind))
    }

    /// See [`ParkingLot::leave`].
    ///
    /// # Errors
    /// Returns [`ParkingError::SlotAlreadyEmpty`] for an unknown or empty slot.
    pub fn leave(&self, number: i64) -> Result<Vehicle, ParkingError> {
        self.with(|lot| lot.leave(number))
    }

    /// A point-in-time copy of the lot.
    #[must_use]
    pub fn snapshot(&self) -> ParkingLot {
        self.inner.lock().clone()
    }
}

impl From<ParkingLot> for SharedParkingLot {
    fn from(lot: ParkingLot) -> Self {
        Self::new(lot)
    }
}
