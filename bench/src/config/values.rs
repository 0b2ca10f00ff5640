//! Lenient deserializers for values that may come from TOML, from prefixed
//! environment variables or from the plain variables of the original scripts,
//! where a list is a comma separated string and a byte size may carry a unit.

use crate::utils::{parse_bool, parse_byte_size, parse_number, split_list};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use transfer_bench_report::direction::TransferDirection;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Flag(bool),
    Number(u64),
    Text(String),
}

/// Environment values that look like numbers or flags reach string fields
/// already typed.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Flag(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<RawText> for String {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Text(text) => text,
            RawText::Flag(flag) => flag.to_string(),
            RawText::Unsigned(value) => value.to_string(),
            RawText::Signed(value) => value.to_string(),
            RawText::Float(value) => value.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Many(Vec<Raw>),
    One(Raw),
}

impl Raw {
    fn into_number<T: TryFrom<u64>>(self) -> Result<T, String> {
        let value = match self {
            Raw::Number(value) => value,
            Raw::Text(text) => parse_number::<u64>(&text)?,
            Raw::Flag(flag) => return Err(format!("Expected a number, got: {flag}")),
        };
        T::try_from(value).map_err(|_| format!("Number out of range: {value}"))
    }

    fn into_byte_size(self) -> Result<u64, String> {
        match self {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => parse_byte_size(&text),
            Raw::Flag(flag) => Err(format!("Expected a byte size, got: {flag}")),
        }
    }

    fn into_flag(self) -> Result<bool, String> {
        match self {
            Raw::Flag(flag) => Ok(flag),
            Raw::Number(value) => Ok(value == 1),
            Raw::Text(text) => Ok(parse_bool(&text)),
        }
    }
}

impl RawList {
    fn into_items(self) -> Vec<Raw> {
        match self {
            RawList::Many(items) => items,
            RawList::One(Raw::Text(text)) => split_list(&text)
                .map(|item| Raw::Text(item.to_owned()))
                .collect(),
            RawList::One(item) => vec![item],
        }
    }
}

fn list<'de, D, T, F>(deserializer: D, convert: F) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    F: Fn(Raw) -> Result<T, String>,
{
    RawList::deserialize(deserializer)?
        .into_items()
        .into_iter()
        .map(convert)
        .collect::<Result<Vec<_>, _>>()
        .map_err(D::Error::custom)
}

pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    Raw::deserialize(deserializer)?
        .into_number()
        .map_err(D::Error::custom)
}

pub(crate) fn number_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    list(deserializer, Raw::into_number)
}

pub(crate) fn byte_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Raw::deserialize(deserializer)?
        .into_byte_size()
        .map_err(D::Error::custom)
}

pub(crate) fn byte_size_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<u64>, D::Error> {
    list(deserializer, Raw::into_byte_size)
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Raw::deserialize(deserializer)?
        .into_flag()
        .map_err(D::Error::custom)
}

pub(crate) fn flag_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<bool>, D::Error> {
    list(deserializer, Raw::into_flag)
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawText::deserialize(deserializer).map(String::from)
}

pub(crate) fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawText>::deserialize(deserializer)?.map(String::from))
}

pub(crate) fn direction<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<TransferDirection, D::Error> {
    String::deserialize(deserializer)?
        .parse()
        .map_err(D::Error::custom)
}
