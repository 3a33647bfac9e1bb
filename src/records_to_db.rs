use rusqlite::{Connection, Error as SqliteError, params};
use tracing::debug;

use crate::config;
use crate::records::SyllableRecord;

/// Creates the text replacement table and inserts the records in their order.
/// A repeated shortcut violates the unique index and fails the whole transaction.
pub fn records_to_db(conn: &mut Connection, records: &[SyllableRecord]) -> Result<(), SqliteError> {
    let tx = conn.transaction()?;
    tx.execute_batch(config::DB_SCHEMA)?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO text_replacement (shortcut, phrase, rank) VALUES (?1, ?2, ?3)",
        )?;
        for (rank, record) in (0_i64..).zip(records) {
            stmt.execute(params![record.shortcut, record.phrase, rank])?;
        }
    }
    tx.commit()?;
    debug!(num_records = records.len(), "inserted records into db");
    Ok(())
}
