use thiserror::Error;

use crate::{ExtractError, ExtractionOutcome, FormatTag, UploadedFile};

/// Where a session is in its extraction lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    Extracting,
    Extracted,
    ExtractionFailed,
}

/// Token for one extraction attempt, stamped with the selection generation
/// it was started against. Settlement only applies while the stamp still
/// matches; an outcome arriving after the file has been replaced is
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    generation: u64,
}

/// Why an extraction attempt could not begin.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BeginError {
    #[error("no file selected")]
    NoFile,
    /// Callers must serialize triggers (e.g. disable the button while
    /// `Extracting`); a second begin while one attempt is in flight is
    /// refused rather than producing interleaved results.
    #[error("an extraction is already in flight")]
    AlreadyExtracting,
}

/// Single-file, single-result extraction context owned by the UI
/// collaborator.
///
/// Owns at most one [`UploadedFile`] and at most one outcome at a time.
/// Created `Idle`; transitions on selection, on the explicit extraction
/// trigger, and on settlement. Selecting a new file discards any prior
/// outcome.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    file: Option<UploadedFile>,
    outcome: Option<ExtractionOutcome>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn outcome(&self) -> Option<&ExtractionOutcome> {
        self.outcome.as_ref()
    }

    /// The latest successfully extracted text, if any.
    pub fn extracted_text(&self) -> Option<&str> {
        match self.outcome.as_ref() {
            Some(Ok(text)) => Some(text),
            _ => None,
        }
    }

    pub fn is_extracting(&self) -> bool {
        self.phase == Phase::Extracting
    }

    /// Select a file, replacing any previous selection wholesale and
    /// discarding any prior outcome. An unsupported name is rejected and
    /// leaves the session `Idle` with no file held.
    ///
    /// Bumps the attempt generation either way, so an attempt still in
    /// flight against the old selection settles as stale.
    pub fn select_file(&mut self, file: UploadedFile) -> Result<FormatTag, ExtractError> {
        self.generation += 1;
        self.outcome = None;
        match FormatTag::from_name(&file.name) {
            Some(tag) => {
                tracing::debug!(name = %file.name, format = %tag, "file selected");
                self.file = Some(file);
                self.phase = Phase::FileSelected;
                Ok(tag)
            }
            None => {
                tracing::debug!(name = %file.name, "rejected unsupported file");
                self.file = None;
                self.phase = Phase::Idle;
                Err(ExtractError::UnsupportedFormat(file.name))
            }
        }
    }

    /// Begin an extraction attempt against the current selection.
    pub fn begin_extraction(&mut self) -> Result<Attempt, BeginError> {
        if self.phase == Phase::Extracting {
            return Err(BeginError::AlreadyExtracting);
        }
        if self.file.is_none() {
            return Err(BeginError::NoFile);
        }
        self.phase = Phase::Extracting;
        Ok(Attempt {
            generation: self.generation,
        })
    }

    /// Apply an attempt's outcome. Returns `false` and leaves the session
    /// untouched when the selection has changed since the attempt began;
    /// the in-flight decode is never aborted, its result is simply dropped
    /// on arrival.
    pub fn settle(&mut self, attempt: Attempt, outcome: ExtractionOutcome) -> bool {
        if attempt.generation != self.generation {
            tracing::debug!("discarding stale extraction outcome");
            return false;
        }
        self.phase = match outcome {
            Ok(_) => Phase::Extracted,
            Err(_) => Phase::ExtractionFailed,
        };
        self.outcome = Some(outcome);
        true
    }
}
