use phub_parking::{EMPTY_FIELD, ParkingError, ParkingLot, PlateParity, VehicleKind};

fn numbers(slots: &[phub_parking::SlotNumber]) -> Vec<usize> {
    slots.iter().map(|n| n.get()).collect()
}

#[test]
fn fresh_lot_is_empty() {
    let lot = ParkingLot::new(6).unwrap();
    assert_eq!(lot.total_slots(), 6);
    assert_eq!(lot.available_slots(), 6);
    assert_eq!(lot.occupied_slots(), 0);
}

#[test]
fn zero_capacity_is_rejected() {
    assert_eq!(ParkingLot::new(0), Err(ParkingError::InvalidCapacity { capacity: 0 }));
}

#[test]
fn park_fills_lowest_slot_then_reports_full() {
    let mut lot = ParkingLot::new(2).unwrap();
    assert_eq!(lot.park("KA-01-HH-1234", "White", VehicleKind::Car).unwrap().get(), 1);
    assert_eq!(lot.park("KA-01-HH-9999", "White", VehicleKind::Car).unwrap().get(), 2);

    let before = lot.clone();
    let err = lot.park("KA-01-BB-0001", "Black", VehicleKind::Car).unwrap_err();
    assert_eq!(err, ParkingError::LotFull { capacity: 2 });
    assert_eq!(err.to_string(), "Sorry, parking lot is full");
    assert_eq!(lot, before, "a rejected park must not mutate the lot");
}

#[test]
fn freed_low_slot_is_preferred_over_unused_high_slot() {
    let mut lot = ParkingLot::new(3).unwrap();
    lot.park("KA-01-HH-1234", "White", VehicleKind::Car).unwrap();
    lot.park("KA-01-HH-9999", "Black", VehicleKind::Motorcycle).unwrap();

    lot.leave(1).unwrap();
    let slot = lot.park("KA-01-HH-0001", "White", VehicleKind::Car).unwrap();
    assert_eq!(slot.get(), 1);
}

#[test]
fn lowest_freed_slot_wins_over_earlier_freed_higher_slot() {
    let mut lot = ParkingLot::new(4).unwrap();
    for plate in ["A-1", "B-2", "C-3", "D-4"] {
        lot.park(plate, "Blue", VehicleKind::Car).unwrap();
    }
    lot.leave(3).unwrap();
    lot.leave(2).unwrap();

    assert_eq!(lot.park("E-5", "Blue", VehicleKind::Car).unwrap().get(), 2);
    assert_eq!(lot.park("F-6", "Blue", VehicleKind::Car).unwrap().get(), 3);
}

#[test]
fn leave_on_empty_or_unknown_slot_reports_already_empty() {
    let mut lot = ParkingLot::new(2).unwrap();
    lot.park("KA-01-HH-1234", "White", VehicleKind::Car).unwrap();
    let before = lot.clone();

    for slot in [0, 2, 3, 99, -1, i64::MIN] {
        let err = lot.leave(slot).unwrap_err();
        assert_eq!(err, ParkingError::SlotAlreadyEmpty { slot });
        assert_eq!(err.to_string(), format!("Slot number {slot} is already empty"));
    }
    assert_eq!(lot, before);
}

#[test]
fn leave_twice_reports_already_empty_the_second_time() {
    let mut lot = ParkingLot::new(1).unwrap();
    lot.park("KA-01-HH-1234", "White", VehicleKind::Car).unwrap();

    let vehicle = lot.leave(1).unwrap();
    assert_eq!(vehicle.registration, "KA-01-HH-1234");
    assert!(matches!(lot.leave(1), Err(ParkingError::SlotAlreadyEmpty { slot: 1 })));
}

#[test]
fn status_lists_every_slot_with_placeholders() {
    let mut lot = ParkingLot::new(3).unwrap();
    lot.park("KA-01-HH-1234", "White", VehicleKind::Car).unwrap();
    lot.park("KA-01-HH-9999", "Black", VehicleKind::Motorcycle).unwrap();
    lot.leave(1).unwrap();

    let status = lot.status();
    assert_eq!(status.len(), 3);

    assert_eq!(status[0].number.get(), 1);
    assert_eq!(status[0].kind, VehicleKind::Car);
    assert_eq!(status[0].registration, EMPTY_FIELD);
    assert_eq!(status[0].color, EMPTY_FIELD);

    assert_eq!(status[1].kind, VehicleKind::Motorcycle);
    assert_eq!(status[1].registration, "KA-01-HH-9999");
    assert_eq!(status[1].color, "Black");

    assert_eq!(status[2].registration, EMPTY_FIELD);
}

#[test]
fn status_rows_serialize_for_machine_consumers() {
    let mut lot = ParkingLot::new(1).unwrap();
    lot.park("KA-01-HH-9999", "Black", VehicleKind::Motorcycle).unwrap();

    let json = serde_json::to_value(lot.status()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "number": 1,
            "kind": "Motorcycle",
            "registration": "KA-01-HH-9999",
            "color": "Black"
        }])
    );
}

#[test]
fn color_queries_are_exact_and_ordered() {
    let mut lot = ParkingLot::new(5).unwrap();
    lot.park("KA-01-HH-1234", "White", VehicleKind::Car).unwrap();
    lot.park("KA-01-HH-9999", "white", VehicleKind::Car).unwrap();
    lot.park("KA-01-BB-0001", "Black", VehicleKind::Car).unwrap();
    lot.park("KA-01-HH-7777", "White", VehicleKind::Motorcycle).unwrap();

    assert_eq!(lot.registration_numbers_for_color("White"), ["KA-01-HH-1234", "KA-01-HH-7777"]);
    assert_eq!(numbers(&lot.slot_numbers_for_color("White")), [1, 4]);
    assert_eq!(lot.registration_numbers_for_color("white"), ["KA-01-HH-9999"]);
    assert!(lot.registration_numbers_for_color("Red").is_empty());
}

#[test]
fn queries_never_include_departed_vehicles() {
    let mut lot = ParkingLot::new(3).unwrap();
    lot.park("KA-01-HH-1231", "White", VehicleKind::Car).unwrap();
    lot.park("KA-01-HH-1233", "White", VehicleKind::Motorcycle).unwrap();
    lot.leave(1).unwrap();

    assert_eq!(lot.registration_numbers_for_color("White"), ["KA-01-HH-1233"]);
    assert_eq!(numbers(&lot.slot_numbers_for_color("White")), [2]);
    assert_eq!(lot.registration_numbers_with_odd_plate(), ["KA-01-HH-1233"]);
    assert!(lot.registration_numbers_with_even_plate().is_empty());
    assert_eq!(lot.types_of_vehicles(), [VehicleKind::Motorcycle]);
}

#[test]
fn parity_queries_split_occupied_plates() {
    let mut lot = ParkingLot::new(6).unwrap();
    for plate in ["KA-01-HH-1231", "KA-01-HH-1232", "KA-01-HH-123A", "KA-01-HH-1230", "KA-01-HH-1239"]
    {
        lot.park(plate, "Grey", VehicleKind::Car).unwrap();
    }

    assert_eq!(lot.registration_numbers_with_odd_plate(), ["KA-01-HH-1231", "KA-01-HH-1239"]);
    assert_eq!(
        lot.registration_numbers_with_even_plate(),
        ["KA-01-HH-1232", "KA-01-HH-123A", "KA-01-HH-1230"]
    );
    assert_eq!(
        lot.registration_numbers_with_parity(PlateParity::Odd),
        lot.registration_numbers_with_odd_plate()
    );
}

#[test]
fn types_of_vehicles_follow_slot_order() {
    let mut lot = ParkingLot::new(4).unwrap();
    lot.park("A-1", "Red", VehicleKind::Motorcycle).unwrap();
    lot.park("B-2", "Red", VehicleKind::Car).unwrap();
    lot.park("C-3", "Red", VehicleKind::Motorcycle).unwrap();

    assert_eq!(
        lot.types_of_vehicles(),
        [VehicleKind::Motorcycle, VehicleKind::Car, VehicleKind::Motorcycle]
    );
}
