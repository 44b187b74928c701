//! Processing context
//!
//! Shared metadata referenced by specifications: calendars (for holiday
//! regressors) and groups of user-defined regression variables. The context
//! is read-only for the whole export.

use super::series::Ts;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A holiday of a national calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Holiday {
    /// Same day every year
    FixedDay {
        month: u32,
        day: u32,
        #[serde(default = "default_weight")]
        weight: f64,
    },
    /// Offset in days from Easter Sunday
    EasterRelated {
        offset: i32,
        #[serde(default = "default_weight")]
        weight: f64,
    },
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarDefinition {
    National {
        holidays: Vec<Holiday>,
    },
    /// Switches from `first` to `second` at `break_date`; both name other
    /// calendars of the same context
    Chained {
        first: String,
        second: String,
        break_date: NaiveDate,
    },
}

/// Calendars and regression variables shared by the items of a processing
///
/// # Examples
///
/// ```
/// use sa_requests::domain::{CalendarDefinition, Holiday, ProcessingContext};
///
/// let mut context = ProcessingContext::default();
/// context.add_calendar(
///     "be",
///     CalendarDefinition::National {
///         holidays: vec![Holiday::FixedDay { month: 7, day: 21, weight: 1.0 }],
///     },
/// );
/// assert!(context.calendar("be").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProcessingContext {
    #[serde(default)]
    pub calendars: BTreeMap<String, CalendarDefinition>,

    /// Variable groups, each mapping a variable name to its series
    #[serde(default)]
    pub variables: BTreeMap<String, BTreeMap<String, Ts>>,
}

impl ProcessingContext {
    pub fn add_calendar(&mut self, name: impl Into<String>, calendar: CalendarDefinition) {
        self.calendars.insert(name.into(), calendar);
    }

    pub fn add_variable(&mut self, group: impl Into<String>, name: impl Into<String>, ts: Ts) {
        self.variables
            .entry(group.into())
            .or_default()
            .insert(name.into(), ts);
    }

    pub fn calendar(&self, name: &str) -> Option<&CalendarDefinition> {
        self.calendars.get(name)
    }

    /// Resolves a `group.variable` reference
    pub fn variable(&self, reference: &str) -> Option<&Ts> {
        let (group, name) = reference.split_once('.')?;
        self.variables.get(group)?.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty() && self.variables.is_empty()
    }
}
