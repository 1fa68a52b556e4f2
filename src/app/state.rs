use super::toast::{Toast, Toasts};
use crate::config::NotificationConfig;
use crate::upload::{SelectedFile, UploadError};
use std::time::Instant;

pub const SUCCESS_MESSAGE: &str = "Dataset loaded successfully";
pub const REJECTED_TITLE: &str = "Some records are missing";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetStatus {
    #[default]
    Idle,
    FileChosen,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Succeeded,
    Failed,
}

/// Display state of the upload widget.
///
/// Every transition goes through one of the handlers below; the enabled and
/// visible flags of the controls are derived from [`WidgetStatus`] so they
/// can never disagree with it.
#[derive(Debug, Default)]
pub struct UploadWidget {
    status: WidgetStatus,
    selection: Option<SelectedFile>,
    file_name: String,
    visual: String,
    last_outcome: Option<AttemptOutcome>,
    toasts: Toasts,
    notifications: NotificationConfig,
}

impl UploadWidget {
    pub fn new(notifications: NotificationConfig) -> Self {
        Self {
            notifications,
            ..Self::default()
        }
    }

    pub fn status(&self) -> WidgetStatus {
        self.status
    }

    pub fn upload_enabled(&self) -> bool {
        self.status == WidgetStatus::FileChosen
    }

    pub fn input_enabled(&self) -> bool {
        self.status != WidgetStatus::InFlight
    }

    pub fn spinner_visible(&self) -> bool {
        self.status == WidgetStatus::InFlight
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn visual(&self) -> &str {
        &self.visual
    }

    pub fn last_outcome(&self) -> Option<AttemptOutcome> {
        self.last_outcome
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn select(&mut self, selection: Option<SelectedFile>) {
        if !self.input_enabled() {
            tracing::debug!("ignoring selection change while an upload is running");
            return;
        }

        self.visual.clear();
        match selection {
            Some(file) => {
                tracing::debug!(file = %file.name, "file chosen");
                self.file_name = file.name.clone();
                self.selection = Some(file);
                self.status = WidgetStatus::FileChosen;
            }
            None => {
                tracing::debug!("selection cleared");
                self.file_name.clear();
                self.selection = None;
                self.status = WidgetStatus::Idle;
            }
        }
    }

    /// Starts an attempt and hands back the file to send.
    ///
    /// Returns `None` without touching any state when nothing is selected.
    pub fn begin_submit(&mut self) -> Option<SelectedFile> {
        if self.status != WidgetStatus::FileChosen {
            return None;
        }
        let file = self.selection.clone()?;

        self.status = WidgetStatus::InFlight;
        self.last_outcome = None;
        Some(file)
    }

    pub fn resolve(
        &mut self,
        result: Result<(), UploadError>,
        now: Instant,
    ) -> Option<AttemptOutcome> {
        if self.status != WidgetStatus::InFlight {
            tracing::warn!("received an upload result with no attempt in flight");
            return None;
        }

        self.reset();

        let outcome = match result {
            Ok(()) => {
                self.toasts.push(Toast::success(
                    SUCCESS_MESSAGE,
                    self.notifications.success_timeout(),
                    now,
                ));
                AttemptOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(error = %e, "upload attempt failed");
                let rejection = e.into_rejection();
                self.visual = rejection.visual;
                self.toasts.push(Toast::error(
                    REJECTED_TITLE,
                    rejection.message,
                    self.notifications.error_timeout(),
                    now,
                ));
                AttemptOutcome::Failed
            }
        };

        self.last_outcome = Some(outcome);
        Some(outcome)
    }

    fn reset(&mut self) {
        self.status = WidgetStatus::Idle;
        self.file_name.clear();
        self.selection = None;
    }
}
