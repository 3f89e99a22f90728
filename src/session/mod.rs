// src/session/mod.rs

pub mod store;
pub mod upload;

use std::{
    future::Future,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::task::JoinSet;
use validator::Validate;

use crate::{
    api::RankingApi,
    error::AppError,
    models::{
        exam_record::{ExamRecord, ExamRecordFields},
        ranking::RankingEntry,
        upload::{BulkUploadResult, SelectedFile},
    },
};

pub use store::ViewSessions;
pub use upload::{UploadPanel, UploadState};

/// Data shown by the page. Each field is one slice; a fetch replaces its
/// slice wholesale and never touches the others.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub exam_data: Vec<ExamRecord>,
    pub rankings: Vec<RankingEntry>,
    pub certifications: Vec<String>,
    pub course_types: Vec<String>,
}

/// The Skill Ranking System page for one browser.
///
/// Fetches run as tasks owned by the view. Dropping the view aborts the ones
/// still in flight, so a response arriving late never writes into a view
/// nobody is looking at.
pub struct RankingSystemView {
    api: Arc<dyn RankingApi>,
    state: Arc<Mutex<ViewState>>,
    tasks: JoinSet<()>,
    upload: UploadPanel,
    form_message: Option<String>,
}

impl RankingSystemView {
    pub fn new(api: Arc<dyn RankingApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(ViewState::default())),
            tasks: JoinSet::new(),
            upload: UploadPanel::default(),
            form_message: None,
        }
    }

    /// Issues the four initial fetches. None waits on another.
    pub fn mount(&mut self) {
        self.refresh_records();
        self.spawn_fetch(
            "certifications",
            |api| async move { api.list_certifications().await },
            |state, certifications| state.certifications = certifications,
        );
        self.spawn_fetch(
            "course types",
            |api| async move { api.list_course_types().await },
            |state, course_types| state.course_types = course_types,
        );
    }

    /// Re-fetches exam data and rankings, which the API recomputes after
    /// every write.
    pub fn refresh_records(&mut self) {
        self.spawn_fetch(
            "exam data",
            |api| async move { api.list_exam_records().await },
            |state, records| state.exam_data = records,
        );
        self.spawn_fetch(
            "rankings",
            |api| async move { api.list_rankings().await },
            |state, rankings| state.rankings = rankings,
        );
    }

    /// Waits for every fetch in flight to land.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                if e.is_panic() {
                    tracing::error!("Fetch task panicked: {}", e);
                }
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Copy of the current view state.
    pub fn snapshot(&self) -> ViewState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn form_message(&self) -> Option<&str> {
        self.form_message.as_deref()
    }

    pub fn upload_panel(&self) -> &UploadPanel {
        &self.upload
    }

    /// Handles the entry form.
    ///
    /// A submission missing a required field is refused without calling the
    /// API. Otherwise the record is sent once. Either way exam data and
    /// rankings are re-fetched afterwards, and any failure is kept as the
    /// form message.
    pub async fn submit_record(&mut self, fields: ExamRecordFields) -> Result<ExamRecord, AppError> {
        let result = match fields.validate() {
            Ok(()) => self.api.create_exam_record(&fields).await,
            Err(validation_errors) => Err(AppError::BadRequest(validation_errors.to_string())),
        };

        match &result {
            Ok(record) => {
                tracing::info!("Created exam record {} for {}", record.id, record.name);
                self.form_message = None;
            }
            Err(e) => {
                tracing::warn!("Failed to create exam record: {}", e);
                self.form_message = Some(format!("Could not add exam data. {}", e.user_message()));
            }
        }

        self.refresh_records();
        result
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.upload.select_file(file);
    }

    /// Uploads the selected file; re-fetches records when it went through.
    pub async fn upload(&mut self) -> Result<BulkUploadResult, AppError> {
        let result = self.upload.upload(self.api.as_ref()).await;
        if result.is_ok() {
            self.refresh_records();
        }
        result
    }

    fn spawn_fetch<T, F, Fut, A>(&mut self, label: &'static str, fetch: F, apply: A)
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn RankingApi>) -> Fut,
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
        A: FnOnce(&mut ViewState, T) + Send + 'static,
    {
        let request = fetch(Arc::clone(&self.api));
        let state = Arc::clone(&self.state);

        self.tasks.spawn(async move {
            match request.await {
                Ok(value) => {
                    let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
                    apply(&mut *guard, value);
                }
                // The slice keeps whatever it held before.
                Err(e) => tracing::warn!("Failed to fetch {}: {}", label, e),
            }
        });
    }
}

impl Drop for RankingSystemView {
    fn drop(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!("Cancelling {} fetches of a closed view", self.tasks.len());
            self.tasks.abort_all();
        }
    }
}
