//! # Session
//!
//! The console front of the parking lot. A [`Session`] owns at most one
//! [`ParkingLot`](phub_parking::ParkingLot), turns text commands into calls on it,
//! and answers with the lines an operator sees.
//!
//! | Command | Arguments |
//! |---|---|
//! | `create_parking_lot` | capacity |
//! | `park` | registration color, optional `Motor` |
//! | `leave` | slot number |
//! | `status` | |
//! | `registration_numbers_for_vehicles_with_color` | color |
//! | `slot_numbers_for_vehicles_with_color` | color |
//! | `registration_numbers_for_vehicles_with_odd_plate` | |
//! | `registration_numbers_for_vehicles_with_even_plate` | |
//! | `type_of_vehicles` | |
//! | `exit` | |
//!
//! Every command except `create_parking_lot` and `exit` answers
//! `Parking lot is not created yet` until a lot exists.
//!
//! ## Example
//!
//! ```rust
//! use phub_session::{Reply, Session};
//!
//! let mut session = Session::default();
//! assert_eq!(session.execute_line("status"), Reply::line("Parking lot is not created yet"));
//! assert_eq!(
//!     session.execute_line("create_parking_lot 2"),
//!     Reply::line("Created a parking lot with 2 slots")
//! );
//! assert_eq!(
//!     session.execute_line("park KA-01-HH-1234 White Car"),
//!     Reply::line("Allocated slot number: 1")
//! );
//! ```

mod command;
mod error;
mod render;
mod runner;
mod session;

pub use crate::command::{Command, CommandKind, ParseError};
pub use crate::error::SessionError;
pub use crate::render::{LIST_SEPARATOR, STATUS_HEADER, join_list, status_lines};
pub use crate::runner::{RunSummary, run};
pub use crate::session::{Reply, Session};
