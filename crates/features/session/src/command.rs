use phub_domain::VehicleKind;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Command keywords, spelled as typed at the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CommandKind {
    CreateParkingLot,
    Park,
    Leave,
    Status,
    RegistrationNumbersForVehiclesWithColor,
    SlotNumbersForVehiclesWithColor,
    RegistrationNumbersForVehiclesWithOddPlate,
    RegistrationNumbersForVehiclesWithEvenPlate,
    TypeOfVehicles,
    Exit,
}

impl CommandKind {
    /// Whether the command needs an existing lot.
    #[must_use]
    pub const fn requires_lot(self) -> bool {
        !matches!(self, Self::CreateParkingLot | Self::Exit)
    }
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParkingLot { capacity: i64 },
    Park { registration: String, color: String, kind: VehicleKind },
    Leave { slot: i64 },
    Status,
    RegistrationNumbersForColor { color: String },
    SlotNumbersForColor { color: String },
    OddPlateRegistrations,
    EvenPlateRegistrations,
    TypeOfVehicles,
    Exit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command")]
    Unknown { keyword: String },

    #[error("Missing argument <{argument}> for {command}")]
    MissingArgument { command: CommandKind, argument: &'static str },

    #[error("Invalid number '{value}' for {command}")]
    InvalidNumber { command: CommandKind, value: String },
}

impl ParseError {
    /// The recognized keyword, if parsing got that far.
    #[must_use]
    pub const fn command(&self) -> Option<CommandKind> {
        match self {
            Self::Unknown { .. } => None,
            Self::MissingArgument { command, .. } | Self::InvalidNumber { command, .. } => {
                Some(*command)
            },
        }
    }
}

impl Command {
    /// Parses one console line.
    ///
    /// Tokens are separated by whitespace; the first is the keyword and
    /// surplus tokens are ignored. The vehicle token of `park` is optional and
    /// anything other than `Motor` means a car.
    ///
    /// # Errors
    /// Returns [`ParseError`] for an unknown keyword, a missing argument, or a
    /// capacity/slot that is not an integer. Out-of-range integers (zero or
    /// negative) parse fine and are rejected when the command runs.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default();
        let kind = CommandKind::from_str(keyword)
            .map_err(|_| ParseError::Unknown { keyword: keyword.to_owned() })?;

        let mut arg = |argument: &'static str| {
            tokens.next().ok_or(ParseError::MissingArgument { command: kind, argument })
        };

        let command = match kind {
            CommandKind::CreateParkingLot => {
                Self::CreateParkingLot { capacity: number(kind, arg("capacity")?)? }
            },
            CommandKind::Park => {
                let registration = arg("registration")?.to_owned();
                let color = arg("color")?.to_owned();
                let vehicle = arg("vehicle").map_or(VehicleKind::Car, VehicleKind::from_token);
                Self::Park { registration, color, kind: vehicle }
            },
            CommandKind::Leave => Self::Leave { slot: number(kind, arg("slot")?)? },
            CommandKind::Status => Self::Status,
            CommandKind::RegistrationNumbersForVehiclesWithColor => {
                Self::RegistrationNumbersForColor { color: arg("color")?.to_owned() }
            },
            CommandKind::SlotNumbersForVehiclesWithColor => {
                Self::SlotNumbersForColor { color: arg("color")?.to_owned() }
            },
            CommandKind::RegistrationNumbersForVehiclesWithOddPlate => Self::OddPlateRegistrations,
            CommandKind::RegistrationNumbersForVehiclesWithEvenPlate => {
                Self::EvenPlateRegistrations
            },
            CommandKind::TypeOfVehicles => Self::TypeOfVehicles,
            CommandKind::Exit => Self::Exit,
        };

        Ok(command)
    }

    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::CreateParkingLot { .. } => CommandKind::CreateParkingLot,
            Self::Park { .. } => CommandKind::Park,
            Self::Leave { .. } => CommandKind::Leave,
            Self::Status => CommandKind::Status,
            Self::RegistrationNumbersForColor { .. } => {
                CommandKind::RegistrationNumbersForVehiclesWithColor
            },
            Self::SlotNumbersForColor { .. } => CommandKind::SlotNumbersForVehiclesWithColor,
            Self::OddPlateRegistrations => CommandKind::RegistrationNumbersForVehiclesWithOddPlate,
            Self::EvenPlateRegistrations => CommandKind::RegistrationNumbersForVehiclesWithEvenPlate,
            Self::TypeOfVehicles => CommandKind::TypeOfVehicles,
            Self::Exit => CommandKind::Exit,
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line)
    }
}

fn number(command: CommandKind, value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber { command, value: value.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn keywords_round_trip_through_snake_case() {
        for kind in CommandKind::iter() {
            let keyword: &'static str = kind.into();
            assert_eq!(CommandKind::from_str(keyword), Ok(kind));
        }
        assert_eq!(
            CommandKind::RegistrationNumbersForVehiclesWithOddPlate.to_string(),
            "registration_numbers_for_vehicles_with_odd_plate"
        );
    }

    #[test]
    fn only_create_and_exit_work_without_a_lot() {
        let free: Vec<CommandKind> = CommandKind::iter().filter(|k| !k.requires_lot()).collect();
        assert_eq!(free, [CommandKind::CreateParkingLot, CommandKind::Exit]);
    }

    #[test]
    fn parsed_commands_report_their_kind() {
        for line in [
            "create_parking_lot 3",
            "park A-1 Red",
            "leave 1",
            "status",
            "registration_numbers_for_vehicles_with_color Red",
            "slot_numbers_for_vehicles_with_color Red",
            "registration_numbers_for_vehicles_with_odd_plate",
            "registration_numbers_for_vehicles_with_even_plate",
            "type_of_vehicles",
            "exit",
        ] {
            let command = Command::parse(line).unwrap();
            let keyword = line.split(' ').next().unwrap();
            assert_eq!(command.kind().to_string(), keyword);
        }
    }
}
