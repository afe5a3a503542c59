//! The fixed cuisine list.

use crate::error::Result;

/// Identifier of the cuisine-list resource.
pub const CUISINES_URI: &str = "config://cuisines";

/// Hard-coded cuisine names. Order is array order only.
pub const CUISINES: [&str; 10] = [
    "Italian",
    "French",
    "Mexican",
    "Japanese",
    "Mediterranean",
    "Indian",
    "Thai",
    "Spanish",
    "Korean",
    "Moroccan",
];

/// Borrow the cuisine list.
pub fn cuisines() -> &'static [&'static str] {
    &CUISINES
}

/// Compact JSON array of the cuisine list, as served by the resource.
pub fn cuisines_json() -> Result<String> {
    Ok(serde_json::to_string(&CUISINES)?)
}
