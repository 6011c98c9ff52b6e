//! Oracle interval value types.
//!
//! Oracle's INTERVAL YEAR TO MONTH and INTERVAL DAY TO SECOND have no
//! direct analog in the host value model, so they are bound as literal
//! strings in Oracle's textual interval syntax. These types render that
//! syntax and lower into the generic record shape consumed by the
//! conversion layer.

use super::value::{Field, Record, TypeKind, Value};
use std::fmt;

/// Oracle INTERVAL YEAR TO MONTH span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalYearToMonth {
    /// Years component.
    pub years: i64,
    /// Months component.
    pub months: i64,
}

impl IntervalYearToMonth {
    /// Create a new year-to-month interval.
    pub fn new(years: i64, months: i64) -> Self {
        Self { years, months }
    }
}

impl fmt::Display for IntervalYearToMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.years, self.months)
    }
}

impl From<IntervalYearToMonth> for Value {
    fn from(interval: IntervalYearToMonth) -> Self {
        Value::Record(Record::new(vec![
            Field::new("years", TypeKind::Int, Value::Int(interval.years)),
            Field::new("months", TypeKind::Int, Value::Int(interval.months)),
        ]))
    }
}

/// Oracle INTERVAL DAY TO SECOND span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalDayToSecond {
    /// Days component.
    pub days: i64,
    /// Hours component.
    pub hours: i64,
    /// Minutes component.
    pub minutes: i64,
    /// Seconds component.
    pub seconds: i64,
}

impl IntervalDayToSecond {
    /// Create a new day-to-second interval.
    pub fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for IntervalDayToSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}:{}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

impl From<IntervalDayToSecond> for Value {
    fn from(interval: IntervalDayToSecond) -> Self {
        Value::Record(Record::new(vec![
            Field::new("days", TypeKind::Int, Value::Int(interval.days)),
            Field::new("hours", TypeKind::Int, Value::Int(interval.hours)),
            Field::new("minutes", TypeKind::Int, Value::Int(interval.minutes)),
            Field::new("seconds", TypeKind::Int, Value::Int(interval.seconds)),
        ]))
    }
}
