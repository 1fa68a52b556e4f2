mod state;
mod toast;
mod ui;

use crate::config::{ConfigError, LoaderConfig};
use crate::upload::{DatasetUploader, SelectedFile, UploadError};
use derivative::Derivative;
use eframe::{egui, App};
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self as std_mpsc, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

pub use state::{AttemptOutcome, UploadWidget, WidgetStatus, REJECTED_TITLE, SUCCESS_MESSAGE};
pub use toast::{Toast, ToastKind, Toasts};

const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(100);

pub trait FilePicker {
    fn pick_file(&self) -> Option<PathBuf>;
}

pub struct DialogPicker;

impl FilePicker for DialogPicker {
    fn pick_file(&self) -> Option<PathBuf> {
        FileDialog::new().set_title("Choose a dataset").pick_file()
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct DatasetLoader {
    widget: UploadWidget,
    uploader: Arc<DatasetUploader>,
    runtime: Handle,
    #[derivative(Debug = "ignore")]
    picker: Box<dyn FilePicker>,
    #[derivative(Debug = "ignore")]
    attempt_receiver: Option<Receiver<Result<(), UploadError>>>,
    show_raw_visual: bool,
}

impl DatasetLoader {
    pub fn new(
        config: &LoaderConfig,
        runtime: Handle,
        picker: Box<dyn FilePicker>,
    ) -> Result<Self, ConfigError> {
        let uploader = DatasetUploader::new(&config.server)?;
        tracing::info!(url = %uploader.url(), "initializing dataset loader");

        Ok(Self {
            widget: UploadWidget::new(config.notifications.clone()),
            uploader: Arc::new(uploader),
            runtime,
            picker,
            attempt_receiver: None,
            show_raw_visual: false,
        })
    }

    pub fn widget(&self) -> &UploadWidget {
        &self.widget
    }

    pub fn open_file_chooser(&mut self) {
        if !self.widget.input_enabled() {
            return;
        }

        match self.picker.pick_file() {
            Some(path) => self.choose_file(&path),
            None => tracing::debug!("file chooser closed without a selection"),
        }
    }

    pub fn choose_file(&mut self, path: &Path) {
        match SelectedFile::from_path(path) {
            Ok(file) => self.widget.select(Some(file)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot use chosen file");
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.widget.select(None);
    }

    pub fn submit_upload(&mut self) -> bool {
        let Some(file) = self.widget.begin_submit() else {
            return false;
        };

        let (sender, receiver) = std_mpsc::channel();
        self.attempt_receiver = Some(receiver);
        let uploader = Arc::clone(&self.uploader);

        self.runtime.spawn(async move {
            let result = uploader.upload(&file).await;
            if sender.send(result).is_err() {
                tracing::debug!("loader went away before the upload finished");
            }
        });

        true
    }

    pub fn poll_attempt(&mut self, now: Instant) -> Option<AttemptOutcome> {
        self.widget.toasts_mut().prune(now);

        let receiver = self.attempt_receiver.as_ref()?;
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(UploadError::Abandoned),
        };

        self.attempt_receiver = None;
        self.widget.resolve(result, now)
    }
}

impl App for DatasetLoader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_attempt(now);
        self.render(ctx);

        if self.widget.spinner_visible() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        } else if let Some(remaining) = self.widget.toasts().next_expiry(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
