use serde::{Deserialize, Serialize};

/// Which of the three on-call rates applies to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnCallKind {
    Weekday,
    Saturday,
    Holiday,
}

/// Day of the week within a pay-period week. Index 0 is Monday, 5 is
/// Saturday and 6 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All seven days in week order, for zipping against a week of entries.
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Selects the on-call rate category: Saturday and Sunday each have
    /// their own flat rate, everything else pays the weekday rate.
    pub fn on_call_kind(&self) -> OnCallKind {
        match self {
            Self::Saturday => OnCallKind::Saturday,
            Self::Sunday => OnCallKind::Holiday,
            _ => OnCallKind::Weekday,
        }
    }
}
