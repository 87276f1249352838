//! Session result recording and aggregates.
//!
//! The Rust counterpart of the app's "last session" record: one row per
//! finished quiz session, queried by the review surface for the latest
//! result and per-mode totals.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params};

use crate::domain::{ModeTotals, QuizMode, SessionResult};

pub fn insert_session_result(conn: &Connection, result: &SessionResult) -> Result<i64> {
    conn.execute(
        r#"
    INSERT INTO session_results (mode, correct, wrong, updated_at)
    VALUES (?1, ?2, ?3, ?4)
    "#,
        params![
            result.mode,
            result.correct,
            result.wrong,
            result.updated_at.to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// The most recently recorded session, if any.
pub fn latest_session_result(conn: &Connection) -> Result<Option<SessionResult>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, mode, correct, wrong, updated_at
    FROM session_results
    ORDER BY updated_at DESC, id DESC
    LIMIT 1
    "#,
    )?;

    let mut rows = stmt.query([])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_session_result(row)?))
    } else {
        Ok(None)
    }
}

/// Recent sessions for one mode, newest first.
pub fn session_results_for_mode(
    conn: &Connection,
    mode: QuizMode,
    limit: usize,
) -> Result<Vec<SessionResult>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, mode, correct, wrong, updated_at
    FROM session_results
    WHERE mode = ?1
    ORDER BY updated_at DESC, id DESC
    LIMIT ?2
    "#,
    )?;

    let results = stmt
        .query_map(params![mode, limit as i64], row_to_session_result)?
        .collect::<Result<Vec<_>>>()?;

    Ok(results)
}

/// Per-mode aggregates across all recorded sessions.
///
/// Rows with an unrecognized mode string are skipped with a warning rather
/// than failing the whole query.
pub fn mode_totals(conn: &Connection) -> Result<Vec<ModeTotals>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT mode, COUNT(*), SUM(correct), SUM(wrong)
    FROM session_results
    GROUP BY mode
    ORDER BY mode
    "#,
    )?;

    let rows = stmt
        .query_map([], |row| {
            let mode: String = row.get(0)?;
            Ok((mode, row.get::<_, i64>(1)?, row.get::<_, i64>(2)?, row.get::<_, i64>(3)?))
        })?
        .collect::<Result<Vec<_>>>()?;

    let mut totals = Vec::with_capacity(rows.len());
    for (mode_str, sessions, correct, wrong) in rows {
        match mode_str.parse::<QuizMode>() {
            Ok(mode) => totals.push(ModeTotals { mode, sessions, correct, wrong }),
            Err(e) => tracing::warn!("Skipping session_results aggregate row: {}", e),
        }
    }

    Ok(totals)
}

fn row_to_session_result(row: &Row<'_>) -> Result<SessionResult> {
    let updated_at_str: String = row.get(4)?;
    let updated_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&updated_at_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(SessionResult {
        id: row.get(0)?,
        mode: row.get(1)?,
        correct: row.get(2)?,
        wrong: row.get(3)?,
        updated_at,
    })
}
