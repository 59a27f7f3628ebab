use anyhow::Result;
use chrono::NaiveDate;
use gistsched_core::matcher;

use super::Connection;

/// Load the gist and print the record for `date` as the form would save it.
pub async fn run(conn: &Connection, date: NaiveDate) -> Result<()> {
    let mut editor = conn.editor(date, true)?;
    editor.load().await?;

    let date_key = editor.form().date_key();
    let events = editor.session().events().unwrap_or_default();
    if matcher::find(events, &date_key).is_none() {
        eprintln!("No event stored for {}; saving would add one.", date_key);
    }
    Ok(())
}
