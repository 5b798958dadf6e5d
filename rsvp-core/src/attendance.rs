//! Attendance summaries.

use serde::Serialize;

use crate::event::RsvpStatus;
use crate::ledger::ResolveStatus;

/// Number of guests per status for one event.
///
/// The four counters always add up to the size of the guest list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub going: usize,
    pub maybe: usize,
    pub declined: usize,
    #[serde(rename = "no-response")]
    pub no_response: usize,
}

impl StatusCounts {
    pub fn get(&self, status: RsvpStatus) -> usize {
        match status {
            RsvpStatus::Going => self.going,
            RsvpStatus::Maybe => self.maybe,
            RsvpStatus::Declined => self.declined,
            RsvpStatus::NoResponse => self.no_response,
        }
    }

    fn increment(&mut self, status: RsvpStatus) {
        match status {
            RsvpStatus::Going => self.going += 1,
            RsvpStatus::Maybe => self.maybe += 1,
            RsvpStatus::Declined => self.declined += 1,
            RsvpStatus::NoResponse => self.no_response += 1,
        }
    }

    /// Guests who are going or might go
    pub fn attending(&self) -> usize {
        self.going + self.maybe
    }

    pub fn total(&self) -> usize {
        self.going + self.maybe + self.declined + self.no_response
    }
}

/// Count each guest's resolved status for `event_id`.
///
/// Every guest is counted exactly once, so an event nobody has answered
/// counts entirely as `no_response`.
pub fn count_statuses(
    event_id: &str,
    ledger: &impl ResolveStatus,
    guests: &[&str],
) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for guest in guests {
        counts.increment(ledger.status(event_id, guest));
    }
    counts
}

/// Counts plus who is in each group, in guest-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attendance {
    pub counts: StatusCounts,
    pub going: Vec<String>,
    pub maybe: Vec<String>,
    pub declined: Vec<String>,
    pub no_response: Vec<String>,
}

impl Attendance {
    pub fn guests_with(&self, status: RsvpStatus) -> &[String] {
        match status {
            RsvpStatus::Going => &self.going,
            RsvpStatus::Maybe => &self.maybe,
            RsvpStatus::Declined => &self.declined,
            RsvpStatus::NoResponse => &self.no_response,
        }
    }
}

pub fn attendance(event_id: &str, ledger: &impl ResolveStatus, guests: &[&str]) -> Attendance {
    let mut attendance = Attendance::default();

    for guest in guests {
        let status = ledger.status(event_id, guest);
        attendance.counts.increment(status);

        let group = match status {
            RsvpStatus::Going => &mut attendance.going,
            RsvpStatus::Maybe => &mut attendance.maybe,
            RsvpStatus::Declined => &mut attendance.declined,
            RsvpStatus::NoResponse => &mut attendance.no_response,
        };
        group.push(guest.to_string());
    }

    attendance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guests::GUESTS;
    use crate::ledger::Ledger;

    #[test]
    fn test_empty_ledger_is_all_no_response() {
        let counts = count_statuses("karaoke-1", &Ledger::new(), &GUESTS);
        assert_eq!(
            counts,
            StatusCounts {
                going: 0,
                maybe: 0,
                declined: 0,
                no_response: 16,
            }
        );
    }

    #[test]
    fn test_counts_sum_to_guest_count() {
        let mut ledger = Ledger::new();
        ledger.set("karaoke-1", "Liza", RsvpStatus::Going);
        ledger.set("karaoke-1", "Gus", RsvpStatus::Maybe);
        ledger.set("karaoke-1", "Fay", RsvpStatus::Declined);
        ledger.set("karaoke-1", "Stranger", RsvpStatus::Going);
        ledger.set("trivia-2", "Mo", RsvpStatus::Going);

        for event_id in ["karaoke-1", "trivia-2", "never-created"] {
            let counts = count_statuses(event_id, &ledger, &GUESTS);
            assert_eq!(counts.total(), GUESTS.len());
        }

        let counts = count_statuses("karaoke-1", &ledger, &GUESTS);
        assert_eq!(counts.going, 1);
        assert_eq!(counts.attending(), 2);
        assert_eq!(counts.get(RsvpStatus::Declined), 1);
    }

    #[test]
    fn test_attendance_groups_in_guest_order() {
        let mut ledger = Ledger::new();
        ledger.set("potluck-1", "Saul", RsvpStatus::Going);
        ledger.set("potluck-1", "Liza", RsvpStatus::Going);
        ledger.set("potluck-1", "Dave", RsvpStatus::Maybe);

        let attendance = attendance("potluck-1", &ledger, &GUESTS);
        assert_eq!(attendance.going, vec!["Liza".to_string(), "Saul".to_string()]);
        assert_eq!(attendance.guests_with(RsvpStatus::Maybe), ["Dave".to_string()]);
        assert_eq!(attendance.no_response.len(), 13);
        assert_eq!(attendance.counts.total(), 16);
    }

    #[test]
    fn test_counts_serialize_with_wire_names() {
        let json = serde_json::to_value(StatusCounts::default()).unwrap();
        assert!(json.get("no-response").is_some());
    }
}
