//! Response-shape normalization
//!
//! The provider serves the same game log in a few equivalent shapes
//! depending on endpoint and version: a normalized keyed form, a raw
//! headers/rowSet form, and a bare tabular array. Each shape gets one
//! parsing strategy, tried in fixed priority order; the first recognized
//! shape wins. A recognized shape with a broken record is a hard
//! `MalformedRecord` error, never skipped and never retried against the
//! next strategy.

use crate::error::{GameLogError, GameLogResult};
use serde_json::{Map, Value};
use stats_core::GameRecord;

/// Stat columns every game record must carry.
pub const REQUIRED_FIELDS: [&str; 11] =
    ["PTS", "REB", "AST", "STL", "BLK", "TOV", "FG3M", "FGM", "FGA", "FTM", "FTA"];

/// Normalize a raw provider response into game records, most-recent-first
/// (the provider's own ordering is preserved).
pub fn extract_game_records(body: &Value) -> GameLogResult<Vec<GameRecord>> {
    if let Some(records) = try_normalized(body)? {
        return Ok(records);
    }
    if let Some(records) = try_result_sets(body)? {
        return Ok(records);
    }
    if let Some(records) = try_row_array(body)? {
        return Ok(records);
    }

    Err(GameLogError::Unparseable(
        "no PlayerGameLog, resultSets/resultSet, or row array in response".to_string(),
    ))
}

/// Shape 1: `{"PlayerGameLog": [{"PTS": 30, ...}, ...]}`
fn try_normalized(body: &Value) -> GameLogResult<Option<Vec<GameRecord>>> {
    let Some(rows) = body.get("PlayerGameLog").and_then(Value::as_array) else {
        return Ok(None);
    };
    records_from_rows(rows).map(Some)
}

/// Shape 2: `{"resultSets": [{"headers": [...], "rowSet": [[...], ...]}]}`,
/// also accepting a singular `resultSet` object.
fn try_result_sets(body: &Value) -> GameLogResult<Option<Vec<GameRecord>>> {
    let set = match (body.get("resultSets"), body.get("resultSet")) {
        (Some(Value::Array(sets)), _) => sets.first(),
        (_, Some(set @ Value::Object(_))) => Some(set),
        (_, Some(Value::Array(sets))) => sets.first(),
        _ => None,
    };
    let Some(set) = set else {
        return Ok(None);
    };

    let headers = set.get("headers").and_then(Value::as_array);
    let row_set = set.get("rowSet").and_then(Value::as_array);
    let (Some(headers), Some(row_set)) = (headers, row_set) else {
        return Ok(None);
    };

    let headers: Vec<&str> = headers.iter().map(|h| h.as_str().unwrap_or_default()).collect();

    let mut records = Vec::with_capacity(row_set.len());
    for (index, row) in row_set.iter().enumerate() {
        let Some(cells) = row.as_array() else {
            return Err(GameLogError::Unparseable(format!(
                "rowSet entry {index} is not an array"
            )));
        };

        let mut keyed = Map::new();
        for (header, cell) in headers.iter().zip(cells) {
            keyed.insert(header.to_string(), cell.clone());
        }
        records.push(record_from_row(&keyed, index)?);
    }
    Ok(Some(records))
}

/// Shape 3: a bare top-level array of keyed row objects.
fn try_row_array(body: &Value) -> GameLogResult<Option<Vec<GameRecord>>> {
    let Some(rows) = body.as_array() else {
        return Ok(None);
    };
    records_from_rows(rows).map(Some)
}

fn records_from_rows(rows: &[Value]) -> GameLogResult<Vec<GameRecord>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let Some(keyed) = row.as_object() else {
                return Err(GameLogError::Unparseable(format!(
                    "game log row {index} is not an object"
                )));
            };
            record_from_row(keyed, index)
        })
        .collect()
}

fn record_from_row(row: &Map<String, Value>, index: usize) -> GameLogResult<GameRecord> {
    let stat = |field: &'static str| -> GameLogResult<f64> {
        row.get(field)
            .and_then(numeric)
            .ok_or(GameLogError::MalformedRecord { index, field })
    };

    Ok(GameRecord {
        points: stat("PTS")?,
        rebounds: stat("REB")?,
        assists: stat("AST")?,
        steals: stat("STL")?,
        blocks: stat("BLK")?,
        turnovers: stat("TOV")?,
        threes_made: stat("FG3M")?,
        fg_made: stat("FGM")?,
        fg_attempted: stat("FGA")?,
        ft_made: stat("FTM")?,
        ft_attempted: stat("FTA")?,
    })
}

/// Stat cells are usually JSON numbers but show up as strings in some
/// provider responses.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
