//! Leaderboard table builder.
//!
//! Turns one ranking view of a round's leaderboard into rows:
//!
//! ```text
//! [Rank, Pilot, Fastest, Total]         <- header (localized)
//! [1,    "Ace", "0:20.9", "1:02.3"]     <- one row per ranked pilot
//! ```
//!
//! The last column depends on the race format. Staggered starts
//! (`meta.start_behavior == 2`) report "Laps Total" from `total_time_laps`,
//! every other format reports "Total" from `total_time`.

use log::debug;

use crate::error::{ExportError, Result};
use crate::host::Translate;
use crate::results::{Leaderboard, LeaderboardEntry, LeaderboardMeta};
use crate::table::{Cell, Row};

/// Column holding the pilot callsign in a leaderboard row.
pub const CALLSIGN_COLUMN: usize = 1;

/// Which total the last column reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalColumn {
    /// Total race time, from `total_time`.
    RaceTime,
    /// Time spent on laps only, from `total_time_laps`.
    LapsTime,
}

impl TotalColumn {
    pub fn for_meta(meta: &LeaderboardMeta) -> Self {
        if meta.is_staggered_start() {
            TotalColumn::LapsTime
        } else {
            TotalColumn::RaceTime
        }
    }

    /// Untranslated header label.
    pub fn label(self) -> &'static str {
        match self {
            TotalColumn::RaceTime => "Total",
            TotalColumn::LapsTime => "Laps Total",
        }
    }

    pub fn value(self, entry: &LeaderboardEntry) -> Cell {
        match self {
            TotalColumn::RaceTime => entry.total_time.clone(),
            TotalColumn::LapsTime => entry.total_time_laps.clone(),
        }
    }
}

/// Resolves which ranking view to render.
///
/// An override wins only if the leaderboard actually has a view by that name.
fn select_view<'a>(
    leaderboard: &'a Leaderboard,
    primary_override: Option<&str>,
) -> Result<&'a [LeaderboardEntry]> {
    if let Some(entries) = primary_override.and_then(|name| leaderboard.view(name)) {
        return Ok(entries);
    }
    if let Some(name) = primary_override {
        debug!("Ranking view '{name}' not in leaderboard, using primary view");
    }

    let primary = &leaderboard.meta.primary_leaderboard;
    leaderboard
        .view(primary)
        .ok_or_else(|| ExportError::missing_view(primary.as_str()))
}

/// Builds the header and one row per entry of the selected ranking view.
///
/// Returns `Ok(None)` for an absent or empty leaderboard.
pub fn build_leaderboard(
    leaderboard: Option<&Leaderboard>,
    tr: &dyn Translate,
    primary_override: Option<&str>,
) -> Result<Option<Vec<Row>>> {
    let Some(leaderboard) = leaderboard.filter(|lb| !lb.is_empty()) else {
        return Ok(None);
    };

    let entries = select_view(leaderboard, primary_override)?;
    let total = TotalColumn::for_meta(&leaderboard.meta);

    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(vec![
        Cell::text(tr.translate("Rank")),
        Cell::text(tr.translate("Pilot")),
        Cell::text(tr.translate("Fastest")),
        Cell::text(tr.translate(total.label())),
    ]);

    for entry in entries {
        rows.push(vec![
            entry.position.clone(),
            Cell::text(entry.callsign.as_str()),
            entry.fastest_lap.clone(),
            total.value(entry),
        ]);
    }

    Ok(Some(rows))
}
