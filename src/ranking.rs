use alloc::string::String;
use alloc::vec::Vec;

use crate::search::binary_search;
use crate::sort::merge_sort;
use crate::{BalancedIndex, OrderedIndex, Team};

/// How many teams the top and bottom slices hold unless told otherwise.
pub const DEFAULT_TOP_N: usize = 10;

fn name_key(team: &Team) -> String {
    team.name.clone()
}

const fn score_key(team: &Team) -> u32 {
    team.score
}

/// The assembled ranking output for one batch of teams.
///
/// [`build`](Rankings::build) composes the whole engine: both unbalanced
/// indexes (name-keyed and score-keyed), the balanced score index, the
/// stable sort, and the derived top-N / bottom-N slices. The score trees are
/// discarded once their traversals are materialized; the name index is kept
/// so [`lookup_name`](Rankings::lookup_name) can answer membership queries.
///
/// Built once, then only read. Nothing here is synchronized: callers that
/// share a `Rankings` across threads after the build phase are fine
/// (everything is `&self`), but the build itself is single-threaded batch
/// work.
///
/// # Examples
///
/// ```
/// use standings::{Rankings, Team};
///
/// let teams = [Team::new("A", 3), Team::new("B", 5), Team::new("C", 3)];
/// let rankings = Rankings::build(&teams, 2);
///
/// let by_score: Vec<u32> = rankings.by_score().iter().map(|(score, _)| *score).collect();
/// assert_eq!(by_score, [3, 3, 5]);
/// assert_eq!(rankings.balanced_height(), 2);
///
/// assert_eq!(rankings.top()[0].name, "B");
/// assert_eq!(rankings.lookup_name("C"), Some(&Team::new("C", 3)));
/// assert_eq!(rankings.lookup_name("D"), None);
/// ```
pub struct Rankings {
    name_index: OrderedIndex<String, Team, fn(&Team) -> String>,
    by_name: Vec<(String, Team)>,
    by_score: Vec<(u32, Team)>,
    balanced_by_score: Vec<(u32, Team)>,
    balanced_height: usize,
    sorted: Vec<Team>,
    top: Vec<Team>,
    bottom: Vec<Team>,
}

impl Rankings {
    /// Builds every index and ranking view from one batch of teams.
    ///
    /// `top_n` bounds the top and bottom slices; when fewer than `top_n`
    /// teams exist, the slices hold all of them. An empty input is not an
    /// error: every view comes back empty and the balanced height is 0.
    #[must_use]
    pub fn build(teams: &[Team], top_n: usize) -> Self {
        let mut name_index: OrderedIndex<String, Team, fn(&Team) -> String> =
            OrderedIndex::new(name_key);
        let mut score_index: OrderedIndex<u32, Team, fn(&Team) -> u32> =
            OrderedIndex::new(score_key);
        let mut balanced_index: BalancedIndex<u32, Team, fn(&Team) -> u32> =
            BalancedIndex::new(score_key);

        for team in teams {
            name_index.insert(team.clone());
            score_index.insert(team.clone());
            balanced_index.insert(team.clone());
        }

        let by_name = name_index
            .inorder()
            .into_iter()
            .map(|(key, team)| (key.clone(), team.clone()))
            .collect();
        let by_score = score_index
            .inorder()
            .into_iter()
            .map(|(key, team)| (*key, team.clone()))
            .collect();
        let balanced_by_score = balanced_index
            .inorder()
            .into_iter()
            .map(|(key, team)| (*key, team.clone()))
            .collect();
        let balanced_height = balanced_index.height();

        let sorted = merge_sort(teams, score_key);
        // Top-N: the last N of the ascending sequence, highest first.
        let top: Vec<Team> = sorted.iter().rev().take(top_n).cloned().collect();
        let bottom: Vec<Team> = sorted.iter().take(top_n).cloned().collect();

        Self {
            name_index,
            by_name,
            by_score,
            balanced_by_score,
            balanced_height,
            sorted,
            top,
            bottom,
        }
    }

    /// [`build`](Rankings::build) with the default slice size of
    /// [`DEFAULT_TOP_N`].
    #[must_use]
    pub fn build_default(teams: &[Team]) -> Self {
        Self::build(teams, DEFAULT_TOP_N)
    }

    /// Teams ascending by name, from the unbalanced name index.
    #[must_use]
    pub fn by_name(&self) -> &[(String, Team)] {
        &self.by_name
    }

    /// Teams ascending by score, from the unbalanced score index.
    #[must_use]
    pub fn by_score(&self) -> &[(u32, Team)] {
        &self.by_score
    }

    /// Teams ascending by score, from the balanced index.
    #[must_use]
    pub fn balanced_by_score(&self) -> &[(u32, Team)] {
        &self.balanced_by_score
    }

    /// Height of the balanced score index, for diagnostics. 0 when empty.
    #[must_use]
    pub const fn balanced_height(&self) -> usize {
        self.balanced_height
    }

    /// All teams, stably sorted ascending by score.
    #[must_use]
    pub fn sorted(&self) -> &[Team] {
        &self.sorted
    }

    /// The highest-scoring teams, highest first.
    #[must_use]
    pub fn top(&self) -> &[Team] {
        &self.top
    }

    /// The lowest-scoring teams, lowest first.
    #[must_use]
    pub fn bottom(&self) -> &[Team] {
        &self.bottom
    }

    /// Looks a team up by name in the name index.
    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<&Team> {
        self.name_index.search(&String::from(name))
    }

    /// Locates a position holding `score` in the sorted sequence via binary
    /// search, or `None` if no team has that score.
    #[must_use]
    pub fn score_rank(&self, score: u32) -> Option<usize> {
        binary_search(&self.sorted, score_key, &score)
    }
}
