//! Interactive form: pick a date, edit the fields, confirm, save.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveTime};
use dialoguer::{Confirm, Input, Select};
use gistsched_core::{CoreError, FormFields, PracticeLocation, matcher};
use owo_colors::OwoColorize;

use super::Connection;
use crate::render::pretty;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub async fn run(conn: &Connection, date: NaiveDate, new_file: bool) -> Result<()> {
    let mut editor = conn.editor(date, false)?;
    if !new_file {
        match editor.load().await {
            Ok(()) => {}
            // Saving without a loaded document writes a fresh one.
            Err(e @ CoreError::FileNotFound(_)) => {
                let create = Confirm::new()
                    .with_prompt(format!("  Start a new {} instead?", conn.target.filename))
                    .default(false)
                    .interact()?;
                if !create {
                    return Err(e.into());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    // --- Date ---
    let date = prompt_date(editor.form().date, super::today().year())?;
    editor.select_date(date)?;

    let date_key = editor.form().date_key();
    let stored = editor
        .session()
        .events()
        .is_some_and(|events| matcher::find(events, &date_key).is_some());
    if stored {
        println!("\n{}", pretty(&editor.form().preview()).dimmed());
        let blank = Confirm::new()
            .with_prompt("  Start from a blank form?")
            .default(false)
            .interact()?;
        if blank {
            editor.clear();
        }
    }

    // --- Fields ---
    prompt_fields(editor.form_mut())?;

    println!("\n{}", pretty(&editor.form().preview()));
    let save = Confirm::new()
        .with_prompt(format!("  Save {} to the gist?", date_key))
        .default(true)
        .interact()?;
    if !save {
        println!("Not saved.");
        return Ok(());
    }

    editor.save().await?;
    Ok(())
}

fn prompt_date(current: NaiveDate, this_year: i32) -> Result<NaiveDate> {
    let years: Vec<i32> = year_choices(this_year);
    let year_idx = years.iter().position(|&y| y == current.year()).unwrap_or(1);
    let year = years[Select::new()
        .with_prompt("  Year")
        .items(&years)
        .default(year_idx)
        .interact()?];

    let month_labels: Vec<String> = MONTHS
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{:02} - {}", i + 1, m))
        .collect();
    let month = Select::new()
        .with_prompt("  Month")
        .items(&month_labels)
        .default(current.month0() as usize)
        .interact()? as u32
        + 1;

    let last = days_in_month(year, month);
    let days: Vec<String> = (1..=last).map(|d| format!("{:02}", d)).collect();
    let day = Select::new()
        .with_prompt("  Day")
        .items(&days)
        .default((current.day().min(last) - 1) as usize)
        .interact()? as u32
        + 1;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::anyhow!("Invalid date {}-{}-{}", year, month, day))
}

fn prompt_fields(form: &mut FormFields) -> Result<()> {
    form.event_type = text("  Type (game, practice, …)", &form.event_type)?;
    form.label = text("  Label", &form.label)?;
    form.time = Input::<String>::new()
        .with_prompt("  Time (HH:MM, 24-hour)")
        .with_initial_text(form.time.clone())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            let t = input.trim();
            if t.is_empty() || is_clock_time(t) {
                Ok(())
            } else {
                Err("use HH:MM, e.g. 18:30")
            }
        })
        .interact_text()?;

    if form.is_practice() {
        let mut items: Vec<String> = PracticeLocation::ALL.iter().map(|l| l.to_string()).collect();
        items.push("Other…".to_string());
        let default = form
            .location_choice
            .and_then(|c| PracticeLocation::ALL.iter().position(|&l| l == c))
            .unwrap_or(items.len() - 1);
        let pick = Select::new()
            .with_prompt("  Location")
            .items(&items)
            .default(default)
            .interact()?;
        match PracticeLocation::ALL.get(pick) {
            Some(&choice) => form.location_choice = Some(choice),
            None => {
                form.location_choice = None;
                form.location_text = text("  Where?", &form.location_text)?;
            }
        }
    } else {
        form.location_text = text("  Location", &form.location_text)?;
    }

    form.notes = text("  Notes", &form.notes)?;
    Ok(())
}

fn text(prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

/// Strict `HH:MM` check for typed input. Stored values are not held to this.
fn is_clock_time(input: &str) -> bool {
    input.len() == 5 && NaiveTime::parse_from_str(input, "%H:%M").is_ok()
}

/// Last year, this year, and the next two.
fn year_choices(this_year: i32) -> Vec<i32> {
    (this_year - 1..=this_year + 2).collect()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}
