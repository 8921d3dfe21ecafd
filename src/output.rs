//! Output formatting module for wavotes
//!
//! This module provides formatters for displaying vote records in different formats:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```no_run
//! use wavotes::output::get_formatter;
//! use wavotes::report::summarize;
//! use wavotes::types::CoreData;
//!
//! let data = CoreData::default();
//! let summaries = summarize(&data, None);
//!
//! // Table for terminals, JSON for scripts
//! println!("{}", get_formatter(false).format_resolutions(&summaries)?);
//! println!("{}", get_formatter(true).format_resolutions(&summaries)?);
//! # Ok::<(), wavotes::WavotesError>(())
//! ```

use crate::report::{NationVoteRow, ResolutionSummary};
use colored::Colorize;
use prettytable::{Cell, Row, Table, format, row};
use serde_json::json;
use wavotes_core::chamber::Chamber;
use wavotes_core::error::Result;
use wavotes_core::types::{CoreData, VoteChoice};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the resolution listing
    fn format_resolutions(&self, data: &[ResolutionSummary]) -> Result<String>;

    /// Format a single resolution in detail
    fn format_resolution(&self, summary: &ResolutionSummary) -> Result<String>;

    /// Format a nation's vote history
    fn format_nation(&self, nation: &str, votes: &[NationVoteRow]) -> Result<String>;

    /// Format the raw loaded tables
    fn format_raw(&self, data: &CoreData) -> Result<String>;
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl TableFormatter {
    /// Chamber label cell, colored per chamber
    fn chamber_cell(chamber: Option<Chamber>) -> Cell {
        match chamber {
            Some(Chamber::GeneralAssembly) => Cell::new("GA").style_spec("cFb"),
            Some(Chamber::SecurityCouncil) => Cell::new("SC").style_spec("cFr"),
            None => Cell::new("-").style_spec("c"),
        }
    }

    fn choice_cell(choice: VoteChoice) -> Cell {
        match choice {
            VoteChoice::For => Cell::new("For").style_spec("Fg"),
            VoteChoice::Against => Cell::new("Against").style_spec("Fr"),
        }
    }

    fn colored_choice(choice: VoteChoice) -> String {
        match choice {
            VoteChoice::For => choice.to_string().green().to_string(),
            VoteChoice::Against => choice.to_string().red().to_string(),
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_resolutions(&self, data: &[ResolutionSummary]) -> Result<String> {
        if data.is_empty() {
            return Ok("No resolutions found.".to_string());
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![
            b -> "ID",
            b -> "Chamber",
            b -> "Name",
            b -> "Proposed By",
            b -> "Promoted",
            b -> "For",
            b -> "Against"
        ]);

        for summary in data {
            table.add_row(Row::new(vec![
                Cell::new(&summary.id).style_spec("r"),
                Self::chamber_cell(summary.chamber),
                Cell::new(&summary.name),
                Cell::new(&summary.proposed_by),
                Cell::new(&summary.date),
                Cell::new(&summary.tally.votes_for.to_string()).style_spec("r"),
                Cell::new(&summary.tally.votes_against.to_string()).style_spec("r"),
            ]));
        }

        Ok(table.to_string())
    }

    fn format_resolution(&self, summary: &ResolutionSummary) -> Result<String> {
        let chamber = summary.chamber.map_or("-", |c| c.label());
        let coauthors = if summary.coauthors.is_empty() {
            "-".to_string()
        } else {
            summary.coauthors.join(", ")
        };

        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            format!("[{chamber}#{}]", summary.id).bold(),
            summary.name.bold()
        ));
        output.push_str(&format!("  Proposed by: {}\n", summary.proposed_by));
        output.push_str(&format!("  Co-authors:  {coauthors}\n"));
        output.push_str(&format!("  Promoted:    {}\n", summary.date));
        output.push_str(&format!("  Voting ends: {}\n", summary.voting_ends));
        output.push_str(&format!(
            "  Votes:       {} {} / {} {}\n",
            summary.tally.votes_for,
            Self::colored_choice(VoteChoice::For),
            summary.tally.votes_against,
            Self::colored_choice(VoteChoice::Against),
        ));
        Ok(output)
    }

    fn format_nation(&self, nation: &str, votes: &[NationVoteRow]) -> Result<String> {
        if votes.is_empty() {
            return Ok(format!("No recorded votes for {nation}."));
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![
            b -> "ID",
            b -> "Chamber",
            b -> "Name",
            b -> "Promoted",
            b -> "Vote"
        ]);

        for vote in votes {
            table.add_row(Row::new(vec![
                Cell::new(&vote.resolution_id).style_spec("r"),
                Self::chamber_cell(vote.chamber),
                Cell::new(&vote.name),
                Cell::new(&vote.date),
                Self::choice_cell(vote.choice),
            ]));
        }

        Ok(format!("Votes cast by {nation}\n{table}"))
    }

    fn format_raw(&self, data: &CoreData) -> Result<String> {
        Ok(format!(
            "{} resolutions, {} vote rows, {} vote columns",
            data.resolutions.len(),
            data.all_votes.len(),
            data.votes_header.len()
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_resolutions(&self, data: &[ResolutionSummary]) -> Result<String> {
        let output = json!({
            "resolutions": data,
            "count": data.len(),
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_resolution(&self, summary: &ResolutionSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }

    fn format_nation(&self, nation: &str, votes: &[NationVoteRow]) -> Result<String> {
        let output = json!({
            "nation": nation,
            "votes": votes,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_raw(&self, data: &CoreData) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Get the appropriate formatter based on output preference
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
