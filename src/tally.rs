//! Vote counting over the `votes.csv` table
//!
//! `votes.csv` has one row per nation and one column per resolution id.
//! A cell of `1` is a vote for, `0` a vote against, and an empty cell
//! means the nation did not vote on that resolution.

use serde::Serialize;
use std::collections::HashMap;
use wavotes_core::types::{NATION_FIELD, Record, VoteChoice};

/// For/against counts for one resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub votes_for: usize,
    pub votes_against: usize,
}

impl VoteTally {
    /// Record one vote
    pub fn add(&mut self, choice: VoteChoice) {
        match choice {
            VoteChoice::For => self.votes_for += 1,
            VoteChoice::Against => self.votes_against += 1,
        }
    }

    /// Total votes cast
    pub fn total(&self) -> usize {
        self.votes_for + self.votes_against
    }
}

/// Count votes cast on resolution `id`
pub fn tally_resolution(votes: &[Record], id: &str) -> VoteTally {
    let mut tally = VoteTally::default();
    for choice in votes
        .iter()
        .filter_map(|row| row.get(id).and_then(VoteChoice::from_cell))
    {
        tally.add(choice);
    }
    tally
}

/// Count votes for every resolution column in one pass
pub fn tally_all(votes: &[Record], header: &[String]) -> HashMap<String, VoteTally> {
    let mut tallies: HashMap<String, VoteTally> = resolution_columns(header)
        .map(|id| (id.to_string(), VoteTally::default()))
        .collect();

    for row in votes {
        for (id, tally) in tallies.iter_mut() {
            if let Some(choice) = row.get(id).and_then(VoteChoice::from_cell) {
                tally.add(choice);
            }
        }
    }

    tallies
}

/// One recorded vote by a nation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationVote {
    pub resolution_id: String,
    pub choice: VoteChoice,
}

/// A nation's recorded votes in `votes.csv` column order.
///
/// Nation names match case-insensitively, treating spaces and
/// underscores alike. Returns `None` when the nation has no row.
pub fn nation_votes(
    votes: &[Record],
    header: &[String],
    nation: &str,
) -> Option<Vec<NationVote>> {
    let wanted = canonical_nation(nation);
    let row = votes.iter().find(|row| {
        row.get(NATION_FIELD)
            .is_some_and(|name| canonical_nation(name) == wanted)
    })?;

    Some(
        resolution_columns(header)
            .filter_map(|id| {
                let choice = row.get(id).and_then(VoteChoice::from_cell)?;
                Some(NationVote {
                    resolution_id: id.to_string(),
                    choice,
                })
            })
            .collect(),
    )
}

/// Normalize a nation name the way the game does for URLs
pub fn canonical_nation(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn resolution_columns(header: &[String]) -> impl Iterator<Item = &str> {
    header
        .iter()
        .map(String::as_str)
        .filter(|column| *column != NATION_FIELD)
}
