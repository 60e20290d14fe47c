use phub_parking::SlotView;
use std::fmt::Display;

/// Header row printed by `status`.
pub const STATUS_HEADER: &str = "Slot\tNo.\tType\tRegistration No\tColour";
/// Separator between items of a list reply.
pub const LIST_SEPARATOR: &str = ", ";

/// Renders the `status` table: the header, then one tab-separated row per slot.
#[must_use]
pub fn status_lines(rows: &[SlotView<'_>]) -> Vec<String> {
    std::iter::once(STATUS_HEADER.to_owned())
        .chain(rows.iter().map(|row| {
            format!("{}\t{}\t{}\t{}", row.number, row.kind, row.registration, row.color)
        }))
        .collect()
}

/// Joins items with `", "`. An empty list renders as an empty line.
#[must_use]
pub fn join_list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|item| item.to_string()).collect::<Vec<_>>().join(LIST_SEPARATOR)
}
