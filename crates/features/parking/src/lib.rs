//! # Parking
//!
//! The parking lot slice: a fixed number of numbered slots, filled on arrival
//! and cleared on departure.
//!
//! ## Allocation policy
//!
//! [`ParkingLot::park`] always takes the **lowest-numbered** free slot. A slot
//! freed near the entrance wins over higher slots even if those were freed
//! earlier or never used.
//!
//! ## Queries
//!
//! All queries look at occupied slots only and report in ascending slot order:
//! by color, by [`PlateParity`], and by [`VehicleKind`].
//!
//! ## Concurrency
//!
//! [`ParkingLot`] is a plain value mutated through `&mut self`. Callers sharing a
//! lot across threads use [`SharedParkingLot`], which guards the whole lot with a
//! single mutex.
//!
//! ## Example
//!
//! ```rust
//! use phub_parking::{ParkingLot, VehicleKind};
//!
//! let mut lot = ParkingLot::new(2)?;
//! let first = lot.park("KA-01-HH-1234", "White", VehicleKind::Car)?;
//! assert_eq!(first.get(), 1);
//!
//! lot.leave(1)?;
//! assert_eq!(lot.available_slots(), 2);
//! # Ok::<(), phub_parking::ParkingError>(())
//! ```

mod error;
mod lot;
mod plate;
mod shared;
mod slot;

pub use crate::error::ParkingError;
pub use crate::lot::ParkingLot;
pub use crate::plate::PlateParity;
pub use crate::shared::SharedParkingLot;
pub use crate::slot::{EMPTY_FIELD, Slot, SlotNumber, SlotView, Vehicle};
pub use phub_domain::VehicleKind;
