use anyhow::Result;

use super::{Connection, today};
use crate::render::render_event_line;

/// Load the gist and print one line per stored event.
pub async fn run(conn: &Connection) -> Result<()> {
    let mut editor = conn.editor(today(), false)?;
    editor.load().await?;

    let session = editor.session();
    let events = session.events().unwrap_or_default();
    if events.is_empty() {
        println!("No events in {}.", session.path().display_path());
        return Ok(());
    }

    for event in events {
        println!("{}", render_event_line(event));
    }
    Ok(())
}
