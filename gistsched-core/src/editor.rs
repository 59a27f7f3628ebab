//! Load / select / clear / save lifecycle for one schedule file.

use chrono::{NaiveDate, Utc};

use crate::error::{CoreError, CoreResult};
use crate::form::FormFields;
use crate::session::Session;
use crate::store::{RemoteStore, Target};
use crate::surface::Surface;
use crate::upsert::UpsertOutcome;

/// Ties a session and its form to a remote store and an output surface.
///
/// Every transition reports to the surface. Failures are reported as a
/// status message and also returned, and never poison the editor: the
/// next call starts from whatever state the failed one left behind.
pub struct Editor<S, U> {
    store: S,
    surface: U,
    target: Target,
    session: Session,
    form: FormFields,
}

impl<S: RemoteStore, U: Surface> Editor<S, U> {
    pub fn new(store: S, surface: U, target: Target, date: NaiveDate) -> Self {
        Self {
            store,
            surface,
            target,
            session: Session::new(),
            form: FormFields::new(date),
        }
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    /// Direct field access. Call [`Editor::refresh_preview`] after editing.
    pub fn form_mut(&mut self) -> &mut FormFields {
        &mut self.form
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn refresh_preview(&mut self) {
        self.surface.preview(&self.form.preview());
    }

    /// Fetch the remote file and show the record for the selected date.
    pub async fn load(&mut self) -> CoreResult<()> {
        if let Err(e) = self.target.validate() {
            return self.fail(e);
        }

        self.surface.status("Loading gist…");
        let raw = match self.store.read(&self.target).await {
            Ok(raw) => raw,
            Err(e) => return self.fail(e),
        };
        match self.session.load(&raw) {
            Ok(path) => {
                tracing::info!(path = path.display_path(), "loaded {}", self.target.filename);
            }
            Err(e) => return self.fail(e),
        }

        self.surface.status("Loaded. Pick a date to view or edit.");
        self.select_date(self.form.date)
    }

    /// Switch the form to `date`, filling it from the stored record if any.
    pub fn select_date(&mut self, date: NaiveDate) -> CoreResult<()> {
        self.form.date = date;
        if !self.session.is_loaded() {
            self.surface.status(
                "Tip: load your gist first. Saving without loading will create a new JSON document.",
            );
            return Ok(());
        }

        match self.session.record_for(&self.form.date_key()) {
            Ok(stored) => self.form.populate(stored.as_ref()),
            Err(e) => return self.fail(e),
        }
        self.refresh_preview();
        Ok(())
    }

    /// Blank every editable field without touching the session.
    pub fn clear(&mut self) {
        self.form.clear();
        self.surface.status("Cleared pending fields.");
        self.refresh_preview();
    }

    /// Merge the form into the working copy and return the text that would
    /// be saved, without writing it.
    pub fn stage(&mut self) -> CoreResult<(UpsertOutcome, String)> {
        let record = self.form.build();
        match self.session.apply(&record, Utc::now()) {
            Ok(staged) => Ok(staged),
            Err(e) => self.fail(e),
        }
    }

    /// Merge the form into the working copy and write it back.
    ///
    /// The working copy is not rolled back if the write fails.
    pub async fn save(&mut self) -> CoreResult<UpsertOutcome> {
        if let Err(e) = self.target.validate() {
            return self.fail(e);
        }

        let (outcome, raw) = self.stage()?;

        self.surface.status("Saving to gist…");
        if let Err(e) = self.store.write(&self.target, &raw).await {
            return self.fail(e);
        }

        tracing::info!(?outcome, "saved {}", self.target.filename);
        self.surface.status("Saved. Your schedule file has been updated.");
        self.refresh_preview();
        Ok(outcome)
    }

    fn fail<T>(&mut self, error: CoreError) -> CoreResult<T> {
        tracing::warn!(%error, "operation failed");
        self.surface.status(&error.to_string());
        Err(error)
    }
}
