//! User domain types.

use serde::{Deserialize, Serialize};

/// User permission level.
///
/// Wire format: `i16` column value (0 = Student, 1 = Organizer, 2 = Admin).
/// Fixed at account creation; there is no role-change operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student = 0,
    Organizer = 1,
    Admin = 2,
}

impl UserRole {
    /// Convert from the stored wire value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Student),
            1 => Some(Self::Organizer),
            2 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to the stored wire value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Whether this role may create, update, or delete events.
    pub fn can_manage_events(self) -> bool {
        self >= Self::Organizer
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_i16().cmp(&other.as_i16())
    }
}
