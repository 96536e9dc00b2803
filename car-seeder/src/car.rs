use serde::Serialize;

/// Partition key shared by every record in a run; the delegations table this
/// seeds is keyed on `(delegationId, operation)`.
pub const DELEGATION_ID: &str = "DELEG#001";

pub const MAKES: [&str; 5] = ["Toyota", "Honda", "Ford", "Chevrolet", "Nissan"];
pub const MODELS: [&str; 5] = ["Camry", "Civic", "Mustang", "Impala", "Altima"];
pub const COLORS: [&str; 5] = ["Blue", "Red", "Black", "White", "Green"];

/// Years eligible for both the `operation` sort key and the `year` field.
pub const YEARS: [i32; 3] = [2023, 2024, 2025];

pub const MIN_PRICE: u32 = 10;
pub const MAX_PRICE: u32 = 50;

/// One synthetic car entry, serialized with the key names the delegations
/// table expects.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub delegation_id: String,
    pub operation: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub rented: bool,
    pub price: u32,
}

impl Car {
    /// Format the `operation` sort key: `car#{year}#{NNN}` with a zero-padded
    /// 3-digit sequence index.
    #[must_use]
    pub fn operation_key(year: i32, index: usize) -> String {
        format!("car#{year}#{index:03}")
    }
}
