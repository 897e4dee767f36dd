use alloc::string::String;

/// A team with an accumulated integer score.
///
/// The name is the team's identity; the score is whatever total the
/// aggregation step produced (points or goals). Inside the indexes and the
/// ranking pipeline a `Team` is read-only; [`add_score`](Team::add_score)
/// exists for the aggregation side.
///
/// `Team` deliberately implements no ordering of its own: every index, sort,
/// and search takes an explicit key-extraction function instead.
///
/// # Examples
///
/// ```
/// use standings::Team;
///
/// let mut team = Team::new("Brazil", 0);
/// team.add_score(3);
/// assert_eq!(team.score, 3);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Team {
    /// The team's name.
    pub name: String,
    /// Accumulated score (points or goals), never negative.
    pub score: u32,
}

impl Team {
    /// Creates a team with the given name and starting score.
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Adds to the team's accumulated score.
    pub const fn add_score(&mut self, amount: u32) {
        self.score += amount;
    }
}
