//! Remote planner API.
//!
//! `PlannerApi` is the transport seam: the sync service only talks to this
//! trait, so tests can swap the HTTP client for a mock or an in-memory
//! fake. `HttpPlannerApi` is the production implementation against the
//! REST endpoints (`GET/POST {base}/todos`, `DELETE {base}/todos/{id}`,
//! symmetric for notes).

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::models::{NewNote, NewToDo, Note, ToDo};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlannerApi: Send + Sync {
    async fn fetch_todos(&self) -> AppResult<Vec<ToDo>>;

    /// Posts the draft; the server responds with the generated id.
    async fn create_todo(&self, draft: &NewToDo) -> AppResult<String>;

    async fn delete_todo(&self, id: &str) -> AppResult<()>;

    async fn fetch_notes(&self) -> AppResult<Vec<Note>>;

    /// Posts the draft; the server responds with the generated id.
    async fn create_note(&self, draft: &NewNote) -> AppResult<String>;

    async fn delete_note(&self, id: &str) -> AppResult<()>;
}

/// POST /todos response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedToDo {
    #[serde(default)]
    message: String,
    to_do_id: String,
}

/// POST /notes response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedNote {
    #[serde(default)]
    message: String,
    note_id: String,
}

pub struct HttpPlannerApi {
    client: Client,
    config: ApiConfig,
}

impl HttpPlannerApi {
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        let client = HttpConfig::planner_api().build_client()?;
        Ok(Self { client, config })
    }

    /// Use a caller-supplied client, e.g. one with custom timeouts.
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.post(url).json(body).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, url: Url) -> AppResult<()> {
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl PlannerApi for HttpPlannerApi {
    async fn fetch_todos(&self) -> AppResult<Vec<ToDo>> {
        self.get_json(self.config.todos_url()).await
    }

    async fn create_todo(&self, draft: &NewToDo) -> AppResult<String> {
        let created: CreatedToDo = self.post_json(self.config.todos_url(), draft).await?;
        log::debug!("server: {}", created.message);
        Ok(created.to_do_id)
    }

    async fn delete_todo(&self, id: &str) -> AppResult<()> {
        self.delete(self.config.todo_url(id)).await
    }

    async fn fetch_notes(&self) -> AppResult<Vec<Note>> {
        self.get_json(self.config.notes_url()).await
    }

    async fn create_note(&self, draft: &NewNote) -> AppResult<String> {
        let created: CreatedNote = self.post_json(self.config.notes_url(), draft).await?;
        log::debug!("server: {}", created.message);
        Ok(created.note_id)
    }

    async fn delete_note(&self, id: &str) -> AppResult<()> {
        self.delete(self.config.note_url(id)).await
    }
}

async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string());
    Err(AppError::api(status.as_u16(), body))
}
