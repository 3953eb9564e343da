//! Per-server release dates and date-range filtering.
//!
//! Master data records dates as raw `yyyy/MM/dd` strings, one per server.
//! Strings that do not parse are kept verbatim and simply treated as "no
//! date" when queried.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

const DATE_FORMAT: &str = "%Y/%m/%d";

/// Game server region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Server {
    China,
    #[default]
    Global,
}

impl Server {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::China => "China",
            Self::Global => "Global",
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Server {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "china" | "cn" => Ok(Self::China),
            "global" | "en" => Ok(Self::Global),
            _ => Err(DomainError::parse(format!("Unknown server: {}", s))),
        }
    }
}

/// Parse a `yyyy/MM/dd` date string.
pub fn parse_server_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Release date of something on each server, as recorded in master data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerDate {
    china: String,
    global: String,
}

impl ServerDate {
    pub fn new(china: impl Into<String>, global: impl Into<String>) -> Self {
        Self {
            china: china.into(),
            global: global.into(),
        }
    }

    pub fn raw(&self, server: Server) -> &str {
        match server {
            Server::China => &self.china,
            Server::Global => &self.global,
        }
    }

    /// Date on `server`, or `None` when the recorded string does not parse
    /// (including "not released yet" blanks).
    pub fn date(&self, server: Server) -> Option<NaiveDate> {
        parse_server_date(self.raw(server))
    }

    /// True if the date on `server` exists and lies within `[start, end]`.
    pub fn is_in_range(&self, server: Server, start: NaiveDate, end: NaiveDate) -> bool {
        self.date(server)
            .is_some_and(|date| date >= start && date <= end)
    }
}

impl fmt::Display for ServerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.global)
    }
}

/// Inclusive date window on one server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    server: Server,
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(server: Server, start: NaiveDate, end: NaiveDate) -> Self {
        Self { server, start, end }
    }

    /// Window covering every representable date.
    pub fn unbounded(server: Server) -> Self {
        Self::new(server, NaiveDate::MIN, NaiveDate::MAX)
    }

    pub fn server(&self) -> Server {
        self.server
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: &ServerDate) -> bool {
        date.is_in_range(self.server, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_slash_format_only() {
        assert_eq!(parse_server_date("2019/04/30"), Some(ymd(2019, 4, 30)));
        assert_eq!(parse_server_date("2019-04-30"), None);
        assert_eq!(parse_server_date(""), None);
    }

    #[test]
    fn date_is_resolved_per_server() {
        let date = ServerDate::new("2019/04/30", "2020/01/16");
        assert_eq!(date.date(Server::China), Some(ymd(2019, 4, 30)));
        assert_eq!(date.date(Server::Global), Some(ymd(2020, 1, 16)));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let date = ServerDate::new("", "2020/01/16");
        assert!(date.is_in_range(Server::Global, ymd(2020, 1, 16), ymd(2020, 1, 16)));
        assert!(!date.is_in_range(Server::Global, ymd(2020, 1, 17), ymd(2020, 2, 1)));
    }

    #[test]
    fn unparseable_dates_are_never_in_range() {
        let date = ServerDate::new("TBD", "");
        let range = DateRange::unbounded(Server::China);
        assert!(!range.contains(&date));
    }

    #[test]
    fn server_from_str() {
        assert_eq!("China".parse::<Server>(), Ok(Server::China));
        assert_eq!("global".parse::<Server>(), Ok(Server::Global));
        assert!("Korea".parse::<Server>().is_err());
    }
}
