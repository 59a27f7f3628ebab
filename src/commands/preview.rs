use anyhow::Result;
use chrono::NaiveDate;
use gistsched_core::FormFields;

use super::FieldArgs;
use crate::render::pretty;

pub fn run(date: NaiveDate, fields: &FieldArgs) -> Result<()> {
    let mut form = FormFields::new(date);
    fields.apply(&mut form);
    println!("{}", pretty(&form.preview()));
    Ok(())
}
