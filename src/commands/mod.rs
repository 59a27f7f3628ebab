pub mod edit;
pub mod list;
pub mod preview;
pub mod set;
pub mod show;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use gistsched_core::{Editor, FormFields, PracticeLocation, Target};

use crate::config::Config;
use crate::gist::GistClient;
use crate::render::TerminalSurface;

/// Where to load from and save to, after merging flags over the config file.
pub struct Connection {
    pub target: Target,
    pub api_url: String,
}

impl Connection {
    pub fn resolve(cfg: &Config, gist_id: Option<String>, filename: Option<String>, token: Option<String>) -> Self {
        let target = Target::new(
            gist_id.or_else(|| cfg.gist_id.clone()).unwrap_or_default(),
            filename.or_else(|| cfg.filename.clone()).unwrap_or_default(),
            token.unwrap_or_default(),
        );
        Self {
            target,
            api_url: cfg.api_url.clone(),
        }
    }

    /// Editor for `date`, not yet loaded.
    pub fn editor(&self, date: NaiveDate, show_preview: bool) -> Result<Editor<GistClient, TerminalSurface>> {
        let client = GistClient::new(&self.api_url)?;
        Ok(Editor::new(
            client,
            TerminalSurface::new(show_preview),
            self.target.clone(),
            date,
        ))
    }
}

/// Event fields settable from the command line. Unset flags leave the form alone.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Event type (e.g. "game", "practice")
    #[arg(long = "type", value_name = "TYPE")]
    pub event_type: Option<String>,

    /// Display label, e.g. the opponent
    #[arg(long)]
    pub label: Option<String>,

    /// Start time as HH:MM (24-hour)
    #[arg(long)]
    pub time: Option<String>,

    /// Free-text location
    #[arg(long)]
    pub location: Option<String>,

    /// Practice venue; takes precedence over --location for practices
    #[arg(long, value_enum)]
    pub practice_location: Option<PracticeArg>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl FieldArgs {
    pub fn apply(&self, form: &mut FormFields) {
        if let Some(v) = &self.event_type {
            form.event_type = v.clone();
        }
        if let Some(v) = &self.label {
            form.label = v.clone();
        }
        if let Some(v) = &self.time {
            form.time = v.clone();
        }
        if let Some(v) = &self.location {
            form.location_text = v.clone();
        }
        if let Some(v) = self.practice_location {
            form.location_choice = Some(v.into());
        }
        if let Some(v) = &self.notes {
            form.notes = v.clone();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PracticeArg {
    HighSchool,
    JrHigh,
}

impl From<PracticeArg> for PracticeLocation {
    fn from(arg: PracticeArg) -> Self {
        match arg {
            PracticeArg::HighSchool => PracticeLocation::HighSchool,
            PracticeArg::JrHigh => PracticeLocation::JrHigh,
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| format!("'{}' is not a YYYY-MM-DD date", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cfg = Config {
            gist_id: Some("from-config".into()),
            filename: Some("schedule.json".into()),
            ..Config::default()
        };
        let conn = Connection::resolve(&cfg, Some("from-flag".into()), None, Some(" tok ".into()));

        assert_eq!(conn.target.gist_id, "from-flag");
        assert_eq!(conn.target.filename, "schedule.json");
        assert_eq!(conn.target.token, "tok");
        assert_eq!(conn.api_url, crate::config::DEFAULT_API_URL);
    }

    #[test]
    fn missing_everything_fails_validation() {
        let conn = Connection::resolve(&Config::default(), None, None, None);
        assert!(conn.target.validate().is_err());
    }

    #[test]
    fn parses_dates() {
        assert_eq!(parse_date("2024-06-01"), Ok(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("06/01/2024").is_err());
    }

    #[test]
    fn unset_fields_leave_form_alone() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut form = FormFields::new(date);
        form.label = "Tigers".into();
        form.notes = "bus at 5".into();

        let args = FieldArgs {
            label: Some("Wolves".into()),
            practice_location: Some(PracticeArg::JrHigh),
            ..FieldArgs::default()
        };
        args.apply(&mut form);

        assert_eq!(form.label, "Wolves");
        assert_eq!(form.notes, "bus at 5");
        assert_eq!(form.location_choice, Some(PracticeLocation::JrHigh));
    }
}
