use phub_session::{Command, CommandKind, ParseError};
use phub_domain::VehicleKind;

#[test]
fn park_reads_registration_color_and_vehicle_token() {
    assert_eq!(
        Command::parse("park KA-01-HH-9999 Black Motor"),
        Ok(Command::Park {
            registration: "KA-01-HH-9999".into(),
            color: "Black".into(),
            kind: VehicleKind::Motorcycle,
        })
    );

    for token in ["Car", "motor", "Truck", "MOTOR"] {
        let command = Command::parse(&format!("park KA-01-HH-1234 White {token}")).unwrap();
        assert!(matches!(command, Command::Park { kind: VehicleKind::Car, .. }), "{token}");
    }
}

#[test]
fn park_without_vehicle_token_is_a_car() {
    assert!(matches!(
        Command::parse("park KA-01-HH-1234 White"),
        Ok(Command::Park { kind: VehicleKind::Car, .. })
    ));
}

#[test]
fn tokens_split_on_any_whitespace_and_extras_are_ignored() {
    assert_eq!(
        Command::parse("  create_parking_lot\t6   spare "),
        Ok(Command::CreateParkingLot { capacity: 6 })
    );
    assert_eq!(Command::parse("status now"), Ok(Command::Status));
}

#[test]
fn missing_arguments_are_named() {
    let err = Command::parse("park KA-01-HH-1234").unwrap_err();
    assert_eq!(err, ParseError::MissingArgument { command: CommandKind::Park, argument: "color" });
    assert_eq!(err.to_string(), "Missing argument <color> for park");

    let err = Command::parse("leave").unwrap_err();
    assert_eq!(err.to_string(), "Missing argument <slot> for leave");
    assert_eq!(err.command(), Some(CommandKind::Leave));
}

#[test]
fn non_integer_numbers_are_rejected() {
    let err = Command::parse("create_parking_lot six").unwrap_err();
    assert_eq!(err.to_string(), "Invalid number 'six' for create_parking_lot");

    let err = Command::parse("leave 1.5").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidNumber { command: CommandKind::Leave, value: "1.5".into() }
    );
}

#[test]
fn negative_numbers_parse_as_integers() {
    assert_eq!(Command::parse("leave -1"), Ok(Command::Leave { slot: -1 }));
    assert_eq!(
        Command::parse("create_parking_lot -3"),
        Ok(Command::CreateParkingLot { capacity: -3 })
    );
}

#[test]
fn unknown_and_empty_lines_are_invalid_commands() {
    for line in ["", "   ", "Status", "park_car A-1 Red", "exit!"] {
        let err = Command::parse(line).unwrap_err();
        assert_eq!(err.to_string(), "Invalid command", "{line:?}");
        assert_eq!(err.command(), None);
    }
}

#[test]
fn from_str_matches_parse() {
    let command: Command = "slot_numbers_for_vehicles_with_color White".parse().unwrap();
    assert_eq!(command, Command::SlotNumbersForColor { color: "White".into() });
}
