use crate::command::{Command, ParseError};
use crate::error::SessionError;
use crate::render::{join_list, status_lines};
use phub_domain::config::LotConfig;
use phub_parking::{ParkingError, ParkingLot};
use tracing::{info, warn};

/// What the console should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines and keep reading.
    Lines(Vec<String>),
    /// Stop reading commands.
    Exit,
}

impl Reply {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Lines(vec![text.into()])
    }
}

/// One operator's console session and the lot it manages.
///
/// The lot is created by `create_parking_lot` (or up front from [`LotConfig`])
/// and replaced if the command is issued again.
#[derive(Debug, Default)]
pub struct Session {
    lot: Option<ParkingLot>,
    config: LotConfig,
}

impl Session {
    /// Creates a session, pre-building a lot when `config.capacity` is set.
    ///
    /// # Errors
    /// Returns [`SessionError::Parking`] or [`SessionError::CapacityTooLarge`]
    /// when the configured capacity is unusable.
    pub fn new(config: LotConfig) -> Result<Self, SessionError> {
        let mut session = Self { lot: None, config };
        if let Some(capacity) = session.config.capacity {
            session.install(capacity)?;
        }
        Ok(session)
    }

    #[must_use]
    pub const fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Parses and executes one console line.
    ///
    /// A known command issued before any lot exists answers
    /// `Parking lot is not created yet` even when its arguments are malformed.
    pub fn execute_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(err) => {
                let err = self.reject(err);
                warn!(line, "{err}");
                Reply::line(err.to_string())
            },
        }
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: Command) -> Reply {
        let kind = command.kind();
        self.respond(command).unwrap_or_else(|err| {
            warn!(command = %kind, "{err}");
            Reply::line(err.to_string())
        })
    }

    fn respond(&mut self, command: Command) -> Result<Reply, SessionError> {
        let reply = match command {
            Command::CreateParkingLot { capacity } => {
                self.create(capacity)?;
                format!("Created a parking lot with {capacity} slots")
            },
            Command::Park { registration, color, kind } => {
                let slot = self.lot_mut()?.park(registration, color, kind)?;
                format!("Allocated slot number: {slot}")
            },
            Command::Leave { slot } => {
                self.lot_mut()?.leave(slot)?;
                format!("Slot number {slot} is free")
            },
            Command::Status => {
                return Ok(Reply::Lines(status_lines(&self.lot_ref()?.status())));
            },
            Command::RegistrationNumbersForColor { color } => {
                join_list(self.lot_ref()?.registration_numbers_for_color(&color))
            },
            Command::SlotNumbersForColor { color } => {
                join_list(self.lot_ref()?.slot_numbers_for_color(&color))
            },
            Command::OddPlateRegistrations => {
                join_list(self.lot_ref()?.registration_numbers_with_odd_plate())
            },
            Command::EvenPlateRegistrations => {
                join_list(self.lot_ref()?.registration_numbers_with_even_plate())
            },
            Command::TypeOfVehicles => self.lot_ref()?.types_of_vehicles().len().to_string(),
            Command::Exit => return Ok(Reply::Exit),
        };

        Ok(Reply::line(reply))
    }

    fn create(&mut self, capacity: i64) -> Result<(), SessionError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ParkingError::InvalidCapacity { capacity })?;
        self.install(capacity)
    }

    fn install(&mut self, capacity: usize) -> Result<(), SessionError> {
        let max = self.config.max_capacity;
        if capacity > max {
            return Err(SessionError::CapacityTooLarge { capacity, max });
        }

        let lot = ParkingLot::new(capacity)?;
        if self.lot.replace(lot).is_some() {
            info!(capacity, "Existing parking lot replaced");
        }
        Ok(())
    }

    fn reject(&self, err: ParseError) -> SessionError {
        match err.command() {
            Some(kind) if kind.requires_lot() && self.lot.is_none() => {
                SessionError::LotNotInitialized
            },
            _ => SessionError::Parse(err),
        }
    }

    fn lot_ref(&self) -> Result<&ParkingLot, SessionError> {
        self.lot.as_ref().ok_or(SessionError::LotNotInitialized)
    }

    fn lot_mut(&mut self) -> Result<&mut ParkingLot, SessionError> {
        self.lot.as_mut().ok_or(SessionError::LotNotInitialized)
    }
}
