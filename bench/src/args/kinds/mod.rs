pub mod size_sweep;
pub mod tune;

use crate::utils::parse_bool;

pub(crate) fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(parse_bool(value))
}
