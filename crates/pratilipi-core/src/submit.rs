//! The submission flow, generic over how requests are sent and where
//! downloads go.
//!
//! [`submit`] is the only async step in the system: validate and raise
//! the busy flag, await the service once, save the reply, lower the
//! flag. The form is only borrowed for the synchronous steps, never
//! across the await, so a second click during the request sees the busy
//! flag and is turned away instead of queued.

use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;

use crate::config::ApiConfig;
use crate::error::SubmitError;
use crate::form::{Rejection, UploadForm};
use crate::wire::{Download, HealthReply, ServiceReply, TranslationRequest};

/// Sends requests to the translation service.
///
/// Futures need not be `Send`; the browser implementation holds JS
/// values across its await points.
pub trait Transport {
    /// Failure to get any reply (network down, CORS, unreadable body).
    type Error: Display;

    /// `POST` the multipart request and read the whole reply.
    fn send(
        &self,
        request: &TranslationRequest,
    ) -> impl Future<Output = Result<ServiceReply, Self::Error>>;

    /// `GET` `url` and read the whole reply.
    fn get(&self, url: &str) -> impl Future<Output = Result<ServiceReply, Self::Error>>;
}

/// Saves a translated document (browser download, file on disk).
pub trait DownloadSink {
    /// Failure to save.
    type Error: Display;

    /// Save `download` under its suggested name.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn save(&self, download: &Download) -> Result<(), Self::Error>;
}

/// Short-lived mutable access to an [`UploadForm`] owned elsewhere.
///
/// Implemented for `RefCell<UploadForm>` here and for reactive signals
/// in the UI crate. Implementations must not hold the borrow beyond
/// the closure.
pub trait FormCell {
    /// Run `f` with the form borrowed mutably.
    fn update<R>(&self, f: impl FnOnce(&mut UploadForm) -> R) -> R;
}

impl FormCell for RefCell<UploadForm> {
    fn update<R>(&self, f: impl FnOnce(&mut UploadForm) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Result of one call to [`submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Submission {
    /// No request was made.
    Rejected(Rejection),
    /// A request was made; `Ok` carries the saved file name.
    Finished(Result<String, SubmitError>),
}

/// Run one submission of the form in `cell`.
///
/// Makes at most one request. The outcome is applied to the form
/// (error message or cleared selection) before returning.
#[allow(clippy::future_not_send)] // single-threaded; transports hold !Send JS values
pub async fn submit<C, T, S>(cell: &C, config: &ApiConfig, transport: &T, sink: &S) -> Submission
where
    C: FormCell,
    T: Transport,
    S: DownloadSink,
{
    let request = match cell.update(|form| form.begin_submit(config)) {
        Ok(request) => request,
        Err(rejection) => return Submission::Rejected(rejection),
    };

    let outcome = deliver(&request, transport, sink).await;
    cell.update(|form| form.complete(&outcome));
    Submission::Finished(outcome)
}

#[allow(clippy::future_not_send)]
async fn deliver<T, S>(
    request: &TranslationRequest,
    transport: &T,
    sink: &S,
) -> Result<String, SubmitError>
where
    T: Transport,
    S: DownloadSink,
{
    let reply = transport
        .send(request)
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    let download = reply.into_download(request)?;
    sink.save(&download)
        .map_err(|e| SubmitError::Download(e.to_string()))?;
    Ok(download.file_name)
}

/// Reachability of the translation service, for the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    /// Probe not finished yet.
    #[default]
    Checking,
    /// `GET /health` answered `healthy`.
    Online,
    /// The probe failed or reported anything else.
    Offline,
}

impl ServiceStatus {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking service…",
            Self::Online => "Service online",
            Self::Offline => "Service offline",
        }
    }
}

/// Probe `GET /health` once.
#[allow(clippy::future_not_send)]
pub async fn check_health<T>(config: &ApiConfig, transport: &T) -> ServiceStatus
where
    T: Transport,
{
    match transport.get(&config.health_url()).await {
        Ok(reply) if HealthReply::is_healthy(&reply) => ServiceStatus::Online,
        _ => ServiceStatus::Offline,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;

    struct Canned(Result<ServiceReply, &'static str>);

    impl Transport for Canned {
        type Error = &'static str;

        async fn send(&self, _: &TranslationRequest) -> Result<ServiceReply, Self::Error> {
            self.0.clone()
        }

        async fn get(&self, _: &str) -> Result<ServiceReply, Self::Error> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct Counting(Cell<usize>);

    impl DownloadSink for Counting {
        type Error = &'static str;

        fn save(&self, _: &Download) -> Result<(), Self::Error> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    struct Refusing;

    impl DownloadSink for Refusing {
        type Error = &'static str;

        fn save(&self, _: &Download) -> Result<(), Self::Error> {
            Err("no document body")
        }
    }

    fn ready_form() -> RefCell<UploadForm> {
        let mut form = UploadForm::new();
        form.select_file(crate::FileCandidate::new(
            "doc.pdf",
            Some(crate::PDF_MEDIA_TYPE.into()),
            b"%PDF".to_vec(),
        ))
        .unwrap();
        RefCell::new(form)
    }

    #[test]
    fn network_failure_surfaces_generic_message() {
        let cell = ready_form();
        let sink = Counting::default();
        let outcome = block_on(submit(
            &cell,
            &ApiConfig::default(),
            &Canned(Err("Failed to fetch")),
            &sink,
        ));

        assert_eq!(
            outcome,
            Submission::Finished(Err(SubmitError::Transport("Failed to fetch".into())))
        );
        let form = cell.borrow();
        assert_eq!(form.error(), Some(crate::GENERIC_TRANSPORT_MESSAGE));
        assert!(form.selected().is_some());
        assert!(!form.is_submitting());
        assert_eq!(sink.0.get(), 0);
    }

    #[test]
    fn save_failure_keeps_selection() {
        let cell = ready_form();
        let reply = ServiceReply {
            status: 200,
            body: b"PDF".to_vec(),
        };
        let outcome = block_on(submit(
            &cell,
            &ApiConfig::default(),
            &Canned(Ok(reply)),
            &Refusing,
        ));

        assert!(matches!(
            outcome,
            Submission::Finished(Err(SubmitError::Download(_)))
        ));
        let form = cell.borrow();
        assert_eq!(form.error(), Some(crate::GENERIC_DOWNLOAD_MESSAGE));
        assert!(form.selected().is_some());
    }

    #[test]
    fn health_probe_maps_replies() {
        let config = ApiConfig::default();
        let healthy = Canned(Ok(ServiceReply {
            status: 200,
            body: br#"{"status":"healthy"}"#.to_vec(),
        }));
        assert_eq!(block_on(check_health(&config, &healthy)), ServiceStatus::Online);
        assert_eq!(
            block_on(check_health(&config, &Canned(Err("refused")))),
            ServiceStatus::Offline
        );
    }

    #[test]
    fn status_defaults_to_checking() {
        assert_eq!(ServiceStatus::default(), ServiceStatus::Checking);
        assert_eq!(ServiceStatus::Offline.label(), "Service offline");
    }
}
