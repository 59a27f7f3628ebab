//! GitHub Gist API client.

use std::collections::HashMap;

use gistsched_core::{CoreError, CoreResult, RemoteStore, Target};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// HTTP client for the gists endpoint
pub struct GistClient {
    http: reqwest::Client,
    api_url: Url,
}

// Response / request types matching the GitHub API

#[derive(Deserialize)]
pub struct Gist {
    #[serde(default)]
    pub files: HashMap<String, GistFile>,
}

#[derive(Deserialize)]
pub struct GistFile {
    pub content: Option<String>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Serialize)]
struct UpdateGist<'a> {
    files: HashMap<&'a str, FileContent<'a>>,
}

#[derive(Serialize)]
struct FileContent<'a> {
    content: &'a str,
}

impl GistClient {
    pub fn new(api_url: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gistsched/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        let api_url = Url::parse(api_url)?;
        Ok(Self { http, api_url })
    }

    /// {api}/gists/{id}, with the id encoded as one path segment
    pub fn gist_url(&self, gist_id: &str) -> CoreResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::Transport(format!("Invalid API URL: {}", self.api_url)))?
            .pop_if_empty()
            .extend(["gists", gist_id]);
        Ok(url)
    }

    /// GET /gists/:id
    async fn fetch(&self, target: &Target) -> CoreResult<Gist> {
        let url = self.gist_url(&target.gist_id)?;
        tracing::debug!(%url, "fetching gist");

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, bearer(&target.token))
            .send()
            .await
            .map_err(transport)?;

        let resp = check(resp).await?;
        resp.json().await.map_err(transport)
    }

    /// PATCH /gists/:id
    async fn update(&self, target: &Target, content: &str) -> CoreResult<()> {
        let url = self.gist_url(&target.gist_id)?;
        tracing::debug!(%url, bytes = content.len(), "updating gist");

        let body = UpdateGist {
            files: HashMap::from([(target.filename.as_str(), FileContent { content })]),
        };

        let resp = self
            .http
            .patch(url)
            .header(AUTHORIZATION, bearer(&target.token))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        check(resp).await?;
        Ok(())
    }
}

impl RemoteStore for GistClient {
    async fn read(&self, target: &Target) -> CoreResult<String> {
        let gist = self.fetch(target).await?;
        file_content(gist, &target.filename)
    }

    async fn write(&self, target: &Target, content: &str) -> CoreResult<()> {
        self.update(target, content).await
    }
}

/// Content of `filename`, unless it is missing or truncated.
pub fn file_content(mut gist: Gist, filename: &str) -> CoreResult<String> {
    match gist.files.remove(filename) {
        Some(GistFile {
            content: Some(content),
            truncated: false,
        }) => Ok(content),
        _ => Err(CoreError::FileNotFound(filename.to_string())),
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn check(resp: reqwest::Response) -> CoreResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(CoreError::Remote {
        status: status.as_u16(),
        body,
    })
}

fn transport(err: reqwest::Error) -> CoreError {
    CoreError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gist(json: &str) -> Gist {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn builds_gist_url() {
        let client = GistClient::new("https://api.github.com").unwrap();
        assert_eq!(
            client.gist_url("abc123").unwrap().as_str(),
            "https://api.github.com/gists/abc123"
        );
    }

    #[test]
    fn keeps_enterprise_base_path() {
        let client = GistClient::new("https://github.example.com/api/v3/").unwrap();
        assert_eq!(
            client.gist_url("abc").unwrap().as_str(),
            "https://github.example.com/api/v3/gists/abc"
        );
    }

    #[test]
    fn encodes_gist_id_as_one_segment() {
        let client = GistClient::new("https://api.github.com").unwrap();
        assert_eq!(
            client.gist_url("a/b c").unwrap().as_str(),
            "https://api.github.com/gists/a%2Fb%20c"
        );
    }

    #[test]
    fn reads_named_file() {
        let g = gist(r#"{"files":{"schedule.json":{"content":"{}","truncated":false},"other.md":{"content":"x"}}}"#);
        assert_eq!(file_content(g, "schedule.json").unwrap(), "{}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let g = gist(r#"{"files":{"other.md":{"content":"x"}}}"#);
        assert!(matches!(file_content(g, "schedule.json"), Err(CoreError::FileNotFound(_))));
        assert!(matches!(file_content(gist("{}"), "schedule.json"), Err(CoreError::FileNotFound(_))));
    }

    #[test]
    fn truncated_file_is_not_found() {
        let g = gist(r#"{"files":{"schedule.json":{"content":"{\"ev","truncated":true}}}"#);
        let err = file_content(g, "schedule.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find 'schedule.json' in this gist (or it is truncated)."
        );
    }

    #[test]
    fn update_body_names_only_target_file() {
        let body = UpdateGist {
            files: HashMap::from([("schedule.json", FileContent { content: "[]" })]),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"files":{"schedule.json":{"content":"[]"}}}"#
        );
    }
}
