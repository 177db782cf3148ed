//! Client facade: one method per supported cluster operation.
//!
//! Each method builds a request from an `Endpoint` descriptor, validates
//! path parameters locally, and hands the request to the injected
//! `Transport`. The client holds no mutable state, so one instance can be
//! shared across threads.

use crate::config::ClientConfig;
use crate::descriptor::{Endpoint, PathParameter};
use crate::error::ClientError;
use crate::model::{
    JarId, JarList, JarRunResponse, JarUploadResponse, JobExceptionsInfo, JobId, JobRunRequest,
    JobStatus, JobStatusInfo,
};
use crate::retry::{self, ExponentialWait, RetryPolicy, WaitStrategy};
use crate::transport::{CurlTransport, FileUpload, HttpRequest, HttpResponse, RequestBody, Transport};
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

pub struct JobClient<T = CurlTransport, W = ExponentialWait> {
    transport: T,
    retry: RetryPolicy<W>,
}

impl JobClient<CurlTransport, ExponentialWait> {
    /// Curl transport and retry policy taken from `cfg`.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ClientError> {
        Ok(JobClient {
            transport: CurlTransport::from_config(cfg)?,
            retry: cfg.retry_policy(),
        })
    }
}

impl<T: Transport> JobClient<T, ExponentialWait> {
    pub fn new(transport: T) -> Self {
        JobClient {
            transport,
            retry: RetryPolicy::default(),
        }
    }
}

impl<T: Transport, W: WaitStrategy> JobClient<T, W> {
    pub fn with_retry_policy<W2: WaitStrategy>(self, retry: RetryPolicy<W2>) -> JobClient<T, W2> {
        JobClient {
            transport: self.transport,
            retry,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Root cause and exception history of a (typically failed) job.
    pub fn job_exceptions(&self, job_id: &JobId) -> Result<JobExceptionsInfo, ClientError> {
        self.send(&Endpoint::JOB_EXCEPTIONS, &[job_id.binding()], RequestBody::Empty)?
            .json()
    }

    /// Upload a jar; transient failures are retried. Returns the server-assigned jar id.
    pub fn upload_jar(&self, path: impl AsRef<Path>) -> Result<JarId, ClientError> {
        let path = path.as_ref();
        check_readable_file(path)?;
        let body = RequestBody::Multipart(vec![FileUpload::jar(path)]);
        let response: JarUploadResponse = self
            .send_retriable(&Endpoint::JAR_UPLOAD, &[], body)?
            .json()?;
        let jar_id = response.jar_id()?;
        tracing::info!(path = %path.display(), %jar_id, "jar uploaded");
        Ok(jar_id)
    }

    pub fn list_jars(&self) -> Result<JarList, ClientError> {
        self.send(&Endpoint::JAR_LIST, &[], RequestBody::Empty)?.json()
    }

    /// Delete an uploaded jar. `jar_id` must be a bare filename.
    pub fn delete_jar(&self, jar_id: &str) -> Result<(), ClientError> {
        let jar_id = JarId::parse(jar_id)?;
        self.send(&Endpoint::JAR_DELETE, &[jar_id.binding()], RequestBody::Empty)?;
        tracing::info!(%jar_id, "jar deleted");
        Ok(())
    }

    /// Submit an uploaded jar as a new job. `jar_id` must be a bare filename.
    ///
    /// Without an entry class the cluster falls back to the jar manifest's
    /// `Main-Class`; a blank one is rejected.
    pub fn run_job(&self, jar_id: &str, request: &JobRunRequest) -> Result<JobId, ClientError> {
        let jar_id = JarId::parse(jar_id)?;
        if request.entry_class.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(ClientError::Validation("entry class must not be blank".to_string()));
        }
        let body = RequestBody::Json(serde_json::to_vec(request).map_err(ClientError::Encode)?);
        let response: JarRunResponse = self
            .send(&Endpoint::JAR_RUN, &[jar_id.binding()], body)?
            .json()?;
        tracing::info!(%jar_id, job_id = %response.job_id, "job submitted");
        Ok(response.job_id)
    }

    pub fn job_status(&self, job_id: &JobId) -> Result<JobStatus, ClientError> {
        let info: JobStatusInfo = self
            .send(&Endpoint::JOB_STATUS, &[job_id.binding()], RequestBody::Empty)?
            .json()?;
        Ok(info.status)
    }

    /// False once the job reached a terminal status; status errors propagate unchanged.
    pub fn is_job_running(&self, job_id: &JobId) -> Result<bool, ClientError> {
        Ok(!self.job_status(job_id)?.is_terminal())
    }

    /// Poll the job status every `poll_interval` until it is terminal.
    /// Fails with `Timeout` if that has not happened within `timeout`.
    pub fn wait_for_terminal(
        &self,
        job_id: &JobId,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<JobStatus, ClientError> {
        let started = Instant::now();
        loop {
            let status = self.job_status(job_id)?;
            if status.is_terminal() {
                return Ok(status);
            }
            if started.elapsed().saturating_add(poll_interval) > timeout {
                tracing::warn!(%job_id, status = status.as_str(), "gave up waiting for job");
                return Err(ClientError::Timeout);
            }
            tracing::debug!(%job_id, status = status.as_str(), "job not terminal yet");
            std::thread::sleep(poll_interval);
        }
    }

    fn build(
        endpoint: &Endpoint,
        bindings: &[(&str, String)],
        body: RequestBody,
    ) -> Result<HttpRequest, ClientError> {
        let path = endpoint.resolve(bindings)?;
        if matches!(body, RequestBody::Multipart(_)) && !endpoint.accepts_file_uploads {
            return Err(ClientError::Validation(format!(
                "{} does not accept file uploads",
                endpoint.template
            )));
        }
        Ok(HttpRequest {
            method: endpoint.method,
            path,
            body,
        })
    }

    fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        self.transport.execute(request)?.into_result()
    }

    fn send(
        &self,
        endpoint: &Endpoint,
        bindings: &[(&str, String)],
        body: RequestBody,
    ) -> Result<HttpResponse, ClientError> {
        let request = Self::build(endpoint, bindings, body)?;
        self.dispatch(&request)
    }

    fn send_retriable(
        &self,
        endpoint: &Endpoint,
        bindings: &[(&str, String)],
        body: RequestBody,
    ) -> Result<HttpResponse, ClientError> {
        let request = Self::build(endpoint, bindings, body)?;
        retry::run_with_retry(&self.retry, || self.dispatch(&request))
    }
}

fn check_readable_file(path: &Path) -> Result<(), ClientError> {
    let io_err = |source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    };
    let meta = fs::metadata(path).map_err(io_err)?;
    if !meta.is_file() {
        return Err(io_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    fs::File::open(path).map_err(io_err)?;
    Ok(())
}
