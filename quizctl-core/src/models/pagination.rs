//! Seek pagination over question ids

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Default page size when the caller gives none.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Seek pagination cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Last id the caller has seen. `0` means "no cursor": list everything.
    pub last_id: i64,
    /// Maximum number of questions returned when seeking.
    pub size: u32,
}

impl Page {
    pub fn new(last_id: i64, size: u32) -> Self {
        Self { last_id, size }
    }

    /// Whether this page seeks below `last_id` (newest first, limited).
    ///
    /// Without a cursor the whole table is returned and `size` is ignored.
    pub fn is_seek(&self) -> bool {
        self.last_id != 0
    }

    /// Whether a question id falls inside this page's range.
    pub fn admits(&self, id: i64) -> bool {
        !self.is_seek() || id < self.last_id
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            last_id: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query parameters for pagination
///
/// An empty value (`?last_id=&size=`) counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub last_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub size: Option<u32>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::new(
            params.last_id.unwrap_or(0),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
