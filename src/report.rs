//! Display-ready views over loaded vote records

use crate::authors::{author_names, render_author_links};
use crate::tally::{VoteTally, nation_votes, tally_all, tally_resolution};
use serde::Serialize;
use wavotes_core::chamber::Chamber;
use wavotes_core::error::{Result, WavotesError};
use wavotes_core::timestamp::{timestamp_to_date, voting_end_date};
use wavotes_core::types::{
    COAUTHOR_FIELD, COUNCIL_FIELD, CoreData, DATE_PART_FIELD, ID_FIELD, PROMOTED_FIELD, Record,
    VoteChoice,
};

/// One resolution with its derived fields and vote counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    pub id: String,
    pub chamber: Option<Chamber>,
    pub name: String,
    pub proposed_by: String,
    pub coauthors: Vec<String>,
    /// HTML links for the co-authors
    pub coauthor_links: String,
    /// Promotion date, `YYYY-MM-DD` or `N/A`
    pub date: String,
    /// Date voting closed (or closes)
    pub voting_ends: String,
    pub tally: VoteTally,
}

impl ResolutionSummary {
    /// Build a summary from a resolution record and its tally
    pub fn from_record(record: &Record, tally: VoteTally) -> Self {
        let field = |name: &str| record.get(name).unwrap_or_default().to_string();
        let promoted = record.get(PROMOTED_FIELD).unwrap_or_default();
        let coauthor = record.get(COAUTHOR_FIELD).unwrap_or_default();

        Self {
            id: field(ID_FIELD),
            chamber: record
                .get(COUNCIL_FIELD)
                .and_then(Chamber::from_council_id),
            name: field("name"),
            proposed_by: field("proposed_by"),
            coauthors: author_names(coauthor)
                .into_iter()
                .map(str::to_string)
                .collect(),
            coauthor_links: render_author_links(coauthor),
            date: record
                .get(DATE_PART_FIELD)
                .map(str::to_string)
                .unwrap_or_else(|| timestamp_to_date(promoted)),
            voting_ends: voting_end_date(promoted),
            tally,
        }
    }
}

/// Summaries for all resolutions in file order, optionally limited to one chamber
pub fn summarize(data: &CoreData, chamber: Option<Chamber>) -> Vec<ResolutionSummary> {
    let tallies = tally_all(&data.all_votes, &data.votes_header);

    data.resolutions
        .iter()
        .map(|record| {
            let id = record.get(ID_FIELD).unwrap_or_default();
            let tally = tallies.get(id).copied().unwrap_or_default();
            ResolutionSummary::from_record(record, tally)
        })
        .filter(|summary| chamber.is_none() || summary.chamber == chamber)
        .collect()
}

/// Summary for a single resolution
pub fn summarize_one(data: &CoreData, id: &str) -> Result<ResolutionSummary> {
    let record = data
        .resolution(id)
        .ok_or_else(|| WavotesError::NotFound(format!("resolution {id}")))?;
    Ok(ResolutionSummary::from_record(
        record,
        tally_resolution(&data.all_votes, id),
    ))
}

/// A nation's vote joined with the resolution it was cast on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationVoteRow {
    pub resolution_id: String,
    pub chamber: Option<Chamber>,
    pub name: String,
    pub date: String,
    pub choice: VoteChoice,
}

/// Vote history for `nation`, newest resolution column last
pub fn nation_history(data: &CoreData, nation: &str) -> Result<Vec<NationVoteRow>> {
    let votes = nation_votes(&data.all_votes, &data.votes_header, nation)
        .ok_or_else(|| WavotesError::NotFound(format!("nation {nation}")))?;

    Ok(votes
        .into_iter()
        .map(|vote| {
            let record = data.resolution(&vote.resolution_id);
            let get = |name: &str| {
                record
                    .and_then(|r| r.get(name))
                    .unwrap_or_default()
                    .to_string()
            };
            NationVoteRow {
                chamber: record
                    .and_then(|r| r.get(COUNCIL_FIELD))
                    .and_then(Chamber::from_council_id),
                name: get("name"),
                date: get(DATE_PART_FIELD),
                resolution_id: vote.resolution_id,
                choice: vote.choice,
            }
        })
        .collect())
}
