//! Encounter and odds model.
//!
//! Each encounter with the adversary carries a fixed capture probability.
//! Surviving the journey requires avoiding capture at every encounter, so
//! the success probability after `n` encounters is `(1 - p)^n`.

/// Probability of being captured at a single encounter.
pub const CAPTURE_PROBABILITY: f64 = 0.1;

/// Success odds, as an integer percentage, for an itinerary.
///
/// Itineraries that end after the deadline have no chance at all, whatever
/// the number of encounters. Otherwise the percentage is rounded half to
/// even.
///
/// # Examples
///
/// ```
/// use odds_server::domain::success_odds;
///
/// assert_eq!(success_odds(0, 8, 10), 100);
/// assert_eq!(success_odds(1, 8, 10), 90);
/// assert_eq!(success_odds(2, 8, 10), 81);
/// assert_eq!(success_odds(3, 8, 10), 73);
///
/// // Too late
/// assert_eq!(success_odds(0, 11, 10), 0);
/// ```
pub fn success_odds(encounters: usize, total_days: u32, deadline: u32) -> u8 {
    if total_days > deadline {
        return 0;
    }

    let exponent = i32::try_from(encounters).unwrap_or(i32::MAX);
    let survival = (1.0 - CAPTURE_PROBABILITY).powi(exponent);

    (100.0 * survival).round_ties_even().clamp(0.0, 100.0) as u8
}
