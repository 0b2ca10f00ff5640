use byte_unit::Byte;

/// Values accepted as "true" for boolean switches, compared case-insensitively.
const TRUTHY: [&str; 5] = ["true", "1", "t", "y", "yes"];

/// Anything outside of [`TRUTHY`] is false.
pub fn parse_bool(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    TRUTHY.contains(&value.as_str())
}

/// Parses a byte count, either plain (`52428800`) or with a unit (`50MiB`, `8 MB`).
pub fn parse_byte_size(value: &str) -> Result<u64, String> {
    let value = value.trim();
    if let Ok(bytes) = value.parse::<u64>() {
        return Ok(bytes);
    }
    Byte::parse_str(value, true)
        .map(|byte| byte.as_u64())
        .map_err(|error| format!("Invalid byte size '{value}': {error}"))
}

/// Splits a comma separated list, skipping blank entries.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

pub fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|error| format!("Invalid number '{value}': {error}"))
}
