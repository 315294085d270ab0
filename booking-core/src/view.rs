//! Derived views over the appointment collection.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::error::BookingError;

/// How appointments are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
}

impl FromStr for ViewMode {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "calendar" => Ok(ViewMode::Calendar),
            other => Err(BookingError::UnknownViewMode(other.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::List => f.write_str("list"),
            ViewMode::Calendar => f.write_str("calendar"),
        }
    }
}

/// Appointments whose name, phone or service contain `query`, ignoring case.
/// An empty query keeps everything. Order is preserved.
pub fn filter<'a>(appointments: &'a [Appointment], query: &str) -> Vec<&'a Appointment> {
    let query = query.to_lowercase();

    appointments
        .iter()
        .filter(|a| a.search_text().contains(&query))
        .collect()
}

/// Bucket appointments by day key. Days iterate in ascending order; each
/// bucket keeps the input order.
pub fn group_by_day<'a>(appointments: &[&'a Appointment]) -> BTreeMap<&'a str, Vec<&'a Appointment>> {
    let mut days: BTreeMap<&'a str, Vec<&'a Appointment>> = BTreeMap::new();

    for &appt in appointments {
        days.entry(appt.day_key()).or_default().push(appt);
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(id: u64, name: &str, phone: &str, service: &str, date: &str) -> Appointment {
        Appointment {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            service: service.to_string(),
            date: date.to_string(),
        }
    }

    fn sample() -> Vec<Appointment> {
        vec![
            appt(1, "Ana", "555-1234", "Haircut", "2024-06-01T10:00"),
            appt(2, "Bo", "555-5678", "Massage", "2024-06-01T14:00"),
            appt(3, "Cleo", "555-0000", "Physiotherapy", "2024-05-30T09:30"),
        ]
    }

    fn ids(appointments: &[&Appointment]) -> Vec<u64> {
        appointments.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let all = sample();
        assert_eq!(ids(&filter(&all, "")), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let all = sample();
        assert_eq!(ids(&filter(&all, "haircut")), vec![1]);
        assert_eq!(ids(&filter(&all, "MASSAGE")), vec![2]);
        assert_eq!(ids(&filter(&all, "555-")), vec![1, 2, 3]);
        assert!(filter(&all, "pedicure").is_empty());
    }

    #[test]
    fn test_filter_ignores_date() {
        let all = sample();
        assert!(filter(&all, "2024-06").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = sample();
        let once = filter(&all, "an");
        let owned: Vec<Appointment> = once.iter().map(|a| (*a).clone()).collect();
        let twice = filter(&owned, "an");
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&once), ids(&filter(&all, "an")));
    }

    #[test]
    fn test_group_same_day_keeps_insertion_order() {
        let all = sample();
        let filtered = filter(&all, "");
        let days = group_by_day(&filtered[..2]);

        assert_eq!(days.len(), 1);
        assert_eq!(ids(&days["2024-06-01"]), vec![1, 2]);
    }

    #[test]
    fn test_group_partitions_every_record() {
        let all = sample();
        let filtered = filter(&all, "");
        let days = group_by_day(&filtered);

        let keys: Vec<&str> = days.keys().copied().collect();
        assert_eq!(keys, vec!["2024-05-30", "2024-06-01"]);

        let total: usize = days.values().map(Vec::len).sum();
        assert_eq!(total, filtered.len());
        for (day, members) in &days {
            assert!(members.iter().all(|a| a.day_key() == *day));
        }
    }

    #[test]
    fn test_group_of_filtered_records() {
        let all = sample();
        let days = group_by_day(&filter(&all, "haircut"));
        assert_eq!(days.len(), 1);
        assert_eq!(ids(&days["2024-06-01"]), vec![1]);
    }

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("list".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert_eq!(" Calendar ".parse::<ViewMode>().unwrap(), ViewMode::Calendar);
        assert!("agenda".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::default(), ViewMode::List);
        assert_eq!(ViewMode::Calendar.to_string(), "calendar");
    }
}
