//! Backend Layer
//!
//! `TodoBackend` abstracts the remote collection store; `HttpBackend`
//! talks to it over REST.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{List, NewList, NewTodo, Todo, TodoPatch};

const LIST_RESOURCE: &str = "list";
const TODO_RESOURCE: &str = "todo";

/// Remote store for lists and todos
///
/// Futures are not `Send`: in the browser they run on the UI thread.
#[async_trait(?Send)]
pub trait TodoBackend {
    async fn fetch_lists(&self) -> ApiResult<Vec<List>>;

    async fn insert_list(&self, list: &NewList) -> ApiResult<List>;

    /// The deleted record is returned by the store but not needed
    async fn remove_list(&self, id: &str) -> ApiResult<()>;

    async fn fetch_todos(&self) -> ApiResult<Vec<Todo>>;

    async fn insert_todo(&self, todo: &NewTodo) -> ApiResult<Todo>;

    async fn remove_todo(&self, id: &str) -> ApiResult<()>;

    async fn patch_todo(&self, id: &str, patch: &TodoPatch) -> ApiResult<()>;
}

/// REST implementation over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        resource: &str,
        id: Option<&str>,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        let url = self.config.resource_url(resource, id)?;
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!("{} {} -> {}", method, url, status);
            Err(ApiError::from_status(status, body))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TodoBackend for HttpBackend {
    async fn fetch_lists(&self) -> ApiResult<Vec<List>> {
        let response = self.send::<()>(Method::GET, LIST_RESOURCE, None, None).await?;
        Self::decode(response).await
    }

    async fn insert_list(&self, list: &NewList) -> ApiResult<List> {
        let response = self.send(Method::POST, LIST_RESOURCE, None, Some(list)).await?;
        Self::decode(response).await
    }

    async fn remove_list(&self, id: &str) -> ApiResult<()> {
        self.send::<()>(Method::DELETE, LIST_RESOURCE, Some(id), None).await?;
        Ok(())
    }

    async fn fetch_todos(&self) -> ApiResult<Vec<Todo>> {
        let response = self.send::<()>(Method::GET, TODO_RESOURCE, None, None).await?;
        Self::decode(response).await
    }

    async fn insert_todo(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let response = self.send(Method::POST, TODO_RESOURCE, None, Some(todo)).await?;
        Self::decode(response).await
    }

    async fn remove_todo(&self, id: &str) -> ApiResult<()> {
        self.send::<()>(Method::DELETE, TODO_RESOURCE, Some(id), None).await?;
        Ok(())
    }

    async fn patch_todo(&self, id: &str, patch: &TodoPatch) -> ApiResult<()> {
        self.send(Method::PUT, TODO_RESOURCE, Some(id), Some(patch)).await?;
        Ok(())
    }
}
