//! Jar upload, listing and run payloads.

use super::ids::{JarId, JobId};
use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// Response of `POST /jars/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarUploadResponse {
    /// Storage path on the server; its filename is the jar id.
    pub filename: String,
    pub status: String,
}

impl JarUploadResponse {
    pub fn jar_id(&self) -> Result<JarId, ClientError> {
        JarId::from_upload_path(&self.filename)
    }
}

/// Body of `POST /jars/:jarid/run`.
///
/// Unset optionals are left out of the JSON entirely, so "not given" and
/// "given as zero/false/empty" stay distinguishable on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRunRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_class: Option<String>,
    #[serde(default)]
    pub program_args_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallelism: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_non_restored_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savepoint_path: Option<String>,
}

impl JobRunRequest {
    pub fn new(entry_class: impl Into<String>) -> Self {
        Self {
            entry_class: Some(entry_class.into()),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.program_args_list.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.program_args_list.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn parallelism(mut self, parallelism: u32) -> Self {
        self.parallelism = Some(parallelism);
        self
    }

    pub fn allow_non_restored_state(mut self, allow: bool) -> Self {
        self.allow_non_restored_state = Some(allow);
        self
    }

    pub fn savepoint_path(mut self, path: impl Into<String>) -> Self {
        self.savepoint_path = Some(path.into());
        self
    }
}

/// Response of `POST /jars/:jarid/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarRunResponse {
    #[serde(rename = "jobid")]
    pub job_id: JobId,
}

/// Response of `GET /jars`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JarList {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub files: Vec<JarFileInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarFileInfo {
    pub id: String,
    pub name: String,
    /// Upload time, epoch millis.
    #[serde(default)]
    pub uploaded: Option<i64>,
    #[serde(default)]
    pub entry: Vec<JarEntryPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarEntryPoint {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn parallelism_omitted_vs_set_differs_on_wire() {
        let unset = serde_json::to_value(JobRunRequest::new("com.example.Job")).unwrap();
        let zero = serde_json::to_value(JobRunRequest::new("com.example.Job").parallelism(0)).unwrap();
        let four = serde_json::to_value(JobRunRequest::new("com.example.Job").parallelism(4)).unwrap();

        assert!(unset.get("parallelism").is_none());
        assert_eq!(zero.get("parallelism"), Some(&Value::from(0)));
        assert_eq!(four.get("parallelism"), Some(&Value::from(4)));
        assert_ne!(unset, zero);
    }

    #[test]
    fn savepoint_and_restore_flag_are_independent() {
        let only_flag = serde_json::to_value(
            JobRunRequest::new("C").allow_non_restored_state(false),
        )
        .unwrap();
        assert_eq!(only_flag["allowNonRestoredState"], Value::Bool(false));
        assert!(only_flag.get("savepointPath").is_none());

        let only_path =
            serde_json::to_value(JobRunRequest::new("C").savepoint_path("s3://sp/1")).unwrap();
        assert_eq!(only_path["savepointPath"], Value::from("s3://sp/1"));
        assert!(only_path.get("allowNonRestoredState").is_none());

        let empty_path = serde_json::to_value(JobRunRequest::new("C").savepoint_path("")).unwrap();
        assert_eq!(empty_path["savepointPath"], Value::from(""));
    }

    #[test]
    fn args_keep_order() {
        let req = JobRunRequest::new("C").arg("--input").arg("a b").args(["--n", "3"]);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["programArgsList"], serde_json::json!(["--input", "a b", "--n", "3"]));
        assert_eq!(v["entryClass"], Value::from("C"));
    }

    #[test]
    fn upload_response_yields_jar_id() {
        let r: JarUploadResponse = serde_json::from_str(
            r#"{"filename":"/tmp/flink-web/upload/d2c1_wordcount.jar","status":"success"}"#,
        )
        .unwrap();
        assert_eq!(r.jar_id().unwrap().as_str(), "d2c1_wordcount.jar");
    }

    #[test]
    fn parses_jar_list() {
        let list: JarList = serde_json::from_str(
            r#"{"address":"http://jm:8081","files":[{"id":"a_x.jar","name":"x.jar","uploaded":1,"entry":[{"name":"com.X","description":null}]}]}"#,
        )
        .unwrap();
        assert_eq!(list.files.len(), 1);
        assert_eq!(list.files[0].entry[0].name, "com.X");
    }
}
