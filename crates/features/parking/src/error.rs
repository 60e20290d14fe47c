/// Outcomes of lot operations that leave the lot unchanged.
///
/// The `Display` text of each variant is the message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParkingError {
    /// A lot needs at least one slot. Carries the requested value, which may be negative.
    #[error("Capacity must be a positive integer, got {capacity}")]
    InvalidCapacity { capacity: i64 },

    /// Every slot is occupied.
    #[error("Sorry, parking lot is full")]
    LotFull { capacity: usize },

    /// The slot does not exist or holds no vehicle. Both cases are reported alike.
    #[error("Slot number {slot} is already empty")]
    SlotAlreadyEmpty { slot: i64 },
}
