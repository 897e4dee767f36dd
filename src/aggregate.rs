//! Folds raw match results into per-team totals.
//!
//! This is the aggregation step that runs before the indexes and the sorter:
//! it owns the only score mutation in the crate. The output is one [`Team`]
//! per distinct name, accumulated over every match the name appears in, in
//! deterministic (name-sorted) order.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Team;

/// One played match: the two team names and their goal counts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchRecord {
    /// Name of the home team.
    pub home_team: String,
    /// Name of the away team.
    pub away_team: String,
    /// Goals scored by the home team.
    pub home_goals: u32,
    /// Goals scored by the away team.
    pub away_goals: u32,
}

impl MatchRecord {
    /// Creates a match record.
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
        }
    }

    /// League points awarded to (home, away): win = 3, draw = 1, loss = 0.
    #[must_use]
    pub const fn points(&self) -> (u32, u32) {
        match self.home_goals.checked_sub(self.away_goals) {
            Some(0) => (1, 1),
            Some(_) => (3, 0),
            None => (0, 3),
        }
    }
}

/// Accumulates league points per team over all matches.
///
/// Teams come back in name order, one per distinct name appearing anywhere
/// in the input. An empty input yields an empty list.
///
/// # Examples
///
/// ```
/// use standings::aggregate::{MatchRecord, team_points};
/// use standings::Team;
///
/// let matches = [
///     MatchRecord::new("Brazil", "Japan", 2, 0),
///     MatchRecord::new("Japan", "Brazil", 1, 1),
/// ];
/// let teams = team_points(&matches);
/// assert_eq!(teams, [Team::new("Brazil", 4), Team::new("Japan", 1)]);
/// ```
#[must_use]
pub fn team_points(matches: &[MatchRecord]) -> Vec<Team> {
    let mut totals: BTreeMap<String, u32> = BTreeMap::new();

    for record in matches {
        let (home_points, away_points) = record.points();
        *totals.entry(record.home_team.clone()).or_insert(0) += home_points;
        *totals.entry(record.away_team.clone()).or_insert(0) += away_points;
    }

    totals.into_iter().map(|(name, score)| Team { name, score }).collect()
}

/// Accumulates goals scored per team over all matches.
///
/// Same shape as [`team_points`], with the team's `score` holding its goal
/// total instead of its league points.
#[must_use]
pub fn team_goals(matches: &[MatchRecord]) -> Vec<Team> {
    let mut totals: BTreeMap<String, u32> = BTreeMap::new();

    for record in matches {
        *totals.entry(record.home_team.clone()).or_insert(0) += record.home_goals;
        *totals.entry(record.away_team.clone()).or_insert(0) += record.away_goals;
    }

    totals.into_iter().map(|(name, score)| Team { name, score }).collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn points_rule() {
        assert_eq!(MatchRecord::new("A", "B", 2, 0).points(), (3, 0));
        assert_eq!(MatchRecord::new("A", "B", 1, 1).points(), (1, 1));
        assert_eq!(MatchRecord::new("A", "B", 0, 4).points(), (0, 3));
    }

    #[test]
    fn points_accumulate_per_name() {
        let matches = [
            MatchRecord::new("A", "B", 1, 0), // A wins
            MatchRecord::new("B", "A", 2, 2), // draw
            MatchRecord::new("C", "A", 0, 3), // A wins away
        ];
        let teams = team_points(&matches);
        assert_eq!(
            teams,
            vec![Team::new("A", 7), Team::new("B", 1), Team::new("C", 0)]
        );
    }

    #[test]
    fn goals_accumulate_per_name() {
        let matches = [
            MatchRecord::new("A", "B", 1, 0),
            MatchRecord::new("B", "A", 2, 2),
        ];
        let teams = team_goals(&matches);
        assert_eq!(teams, vec![Team::new("A", 3), Team::new("B", 2)]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(team_points(&[]), vec![]);
        assert_eq!(team_goals(&[]), vec![]);
    }
}
