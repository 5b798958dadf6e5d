//! The fixed guest list.

use crate::error::{RsvpError, RsvpResult};

/// Every guest tracked for every event, in display order.
pub static GUESTS: [&str; 16] = [
    "Liza", "Gbenga", "Kamilah", "Gus", "Sean", "Carlos", "Eamon", "Papa", "Jason", "Mo", "Grant",
    "Fay", "David", "Dave", "Mihail", "Saul",
];

/// Canonical spelling of a guest name, matched case-insensitively.
pub fn find_guest(name: &str) -> Option<&'static str> {
    let name = name.trim();
    GUESTS
        .iter()
        .copied()
        .find(|guest| guest.eq_ignore_ascii_case(name))
}

/// Like [`find_guest`], failing for names not on the list.
pub fn require_guest(name: &str) -> RsvpResult<&'static str> {
    find_guest(name).ok_or_else(|| RsvpError::UnknownGuest(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_guest() {
        assert_eq!(find_guest("liza"), Some("Liza"));
        assert_eq!(find_guest(" Dave "), Some("Dave"));
        assert_eq!(find_guest("Davey"), None);
        assert!(matches!(require_guest("Davey"), Err(RsvpError::UnknownGuest(_))));
    }
}
