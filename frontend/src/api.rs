//! Browser side of the API client.
//!
//! `GlooTransport` moves requests through `gloo-net` (the browser's
//! `fetch`). The `fetch_*`, `submit` and `delete` helpers spawn the request
//! on the local executor and report the result back to the calling
//! component as a message, which is how every page talks to the backend.

use std::rc::Rc;

use gloo_net::http::Request;
use inventory_common::api::{
    ApiClient, ApiError, ApiRequest, ApiResponse, HttpTransport, ListScope, Method, Submission,
};
use inventory_common::config::ClientConfig;
use inventory_common::model::{Record, RecordId, ResourceKind};
use inventory_common::view::FetchTicket;
use wasm_bindgen_futures::spawn_local;
use yew::{Component, Context};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        let prepared = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

pub type Client = ApiClient<GlooTransport>;

/// Shared handle to the client, passed to pages as a prop.
#[derive(Clone)]
pub struct ApiHandle(Rc<Client>);

impl ApiHandle {
    pub fn from_build_env() -> Self {
        Self(Rc::new(ApiClient::new(GlooTransport, ClientConfig::from_build_env())))
    }

    pub fn client(&self) -> &Client {
        &self.0
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn fetch_list<C, R>(
    ctx: &Context<C>,
    api: &ApiHandle,
    scope: ListScope,
    ticket: FetchTicket,
    to_msg: fn(FetchTicket, Result<Vec<R>, ApiError>) -> C::Message,
) where
    C: Component,
    R: Record,
{
    let api = api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.client().list::<R>(&scope).await;
        link.send_message(to_msg(ticket, result));
    });
}

/// Spawns a fetch of one aggregate. `request` picks the client call.
pub fn fetch_one<C, T, F, Fut>(
    ctx: &Context<C>,
    api: &ApiHandle,
    ticket: FetchTicket,
    request: F,
    to_msg: fn(FetchTicket, Result<T, ApiError>) -> C::Message,
) where
    C: Component,
    T: 'static,
    F: FnOnce(ApiHandle) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<T, ApiError>> + 'static,
{
    let api = api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = request(api).await;
        link.send_message(to_msg(ticket, result));
    });
}

pub fn submit<C, R>(
    ctx: &Context<C>,
    api: &ApiHandle,
    ticket: FetchTicket,
    submission: Submission<R>,
    to_msg: fn(FetchTicket, Result<(), ApiError>) -> C::Message,
) where
    C: Component,
    R: Record,
{
    let api = api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.client().submit(&submission).await;
        link.send_message(to_msg(ticket, result));
    });
}

pub fn delete<C>(
    ctx: &Context<C>,
    api: &ApiHandle,
    ticket: FetchTicket,
    kind: ResourceKind,
    id: RecordId,
    to_msg: fn(FetchTicket, Result<(), ApiError>) -> C::Message,
) where
    C: Component,
{
    let api = api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.client().delete(kind, &id).await;
        link.send_message(to_msg(ticket, result));
    });
}
