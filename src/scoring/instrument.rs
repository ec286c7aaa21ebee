/// Number of items in the questionnaire.
pub const ITEM_COUNT: usize = 10;

/// Lowest answer an item accepts.
pub const MIN_RESPONSE: i64 = 0;

/// Highest answer an item accepts.
pub const MAX_RESPONSE: i64 = 3;

/// Highest total score the instrument can produce.
pub const MAX_SCORE: u32 = ITEM_COUNT as u32 * MAX_RESPONSE as u32;

/// Reverse-coding mask, aligned 1:1 with item position.
///
/// Items 5 and 9 (zero-indexed 4 and 8) are phrased in the opposite
/// direction from the rest of the questionnaire, so their raw answer is
/// inverted before it counts towards the total.
pub const REVERSE_CODED: [bool; ITEM_COUNT] = [
    false, false, false, false, true, //
    false, false, false, true, false,
];

/// Whether the item at `position` (0-based) is reverse-coded.
/// Positions past the end of the instrument are never reverse-coded.
pub fn is_reverse_coded(position: usize) -> bool {
    REVERSE_CODED.get(position).copied().unwrap_or(false)
}

/// Whether `value` is an acceptable answer for any item.
pub fn in_range(value: i64) -> bool {
    (MIN_RESPONSE..=MAX_RESPONSE).contains(&value)
}

/// Points an in-range answer contributes at the given position.
pub fn contribution(position: usize, value: u8) -> u8 {
    if is_reverse_coded(position) {
        MAX_RESPONSE as u8 - value
    } else {
        value
    }
}
