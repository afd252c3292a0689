//! The provider: request plumbing over any [`Connection`].

use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};

use ethkit_rpc_types::json::Element;
use ethkit_transports::{
    common::{ErrorObjectOwned, RawRpcResult, Request},
    transports::Http,
    utils::{from_json_val, to_json_raw_value},
    Connection, TransportError,
};

/// An `HttpProvider` is a [`Provider`] backed by an [`Http`] transport.
pub type HttpProvider = Provider<Http>;

/// Typed JSON-RPC methods over a transport.
#[derive(Clone, Debug)]
pub struct Provider<T> {
    transport: T,
}

impl<T> Provider<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl FromStr for Provider<Http> {
    type Err = <Http as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl<T> Provider<T>
where
    T: Connection,
{
    /// Send one request with positional `params`, decoding the `result`
    /// into `R`.
    pub async fn request<P, R>(&self, method: &'static str, params: P) -> Result<R, ProviderError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = to_json_raw_value(&params).map_err(ProviderError::Params)?;
        let req = Request::owned(self.transport.next_id(), method, Some(params));
        tracing::debug!(method, "dispatching json-rpc request");
        match self.transport.json_rpc_request(&req).await? {
            Ok(raw) => Ok(from_json_val(raw.get())?),
            Err(err) => Err(ProviderError::JsonRpc(err)),
        }
    }

    /// Send one request, keeping the `result` as a dynamic element for
    /// inspection before any typed decode.
    pub async fn request_dyn<P>(
        &self,
        method: &'static str,
        params: P,
    ) -> Result<Element, ProviderError>
    where
        P: Serialize,
    {
        self.request(method, params).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl<T> Connection for Provider<T>
where
    T: Connection,
{
    fn is_local(&self) -> bool {
        self.transport.is_local()
    }

    fn increment_id(&self) -> u64 {
        self.transport.increment_id()
    }

    async fn json_rpc_request(&self, req: &Request<'_>) -> Result<RawRpcResult, TransportError> {
        self.transport.json_rpc_request(req).await
    }

    async fn batch_request(
        &self,
        reqs: &[Request<'_>],
    ) -> Result<Vec<RawRpcResult>, TransportError> {
        self.transport.batch_request(reqs).await
    }
}

/// Failure of a provider call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The positional parameters could not be serialized.
    #[error("failed to serialize request params: {0}")]
    Params(#[source] serde_json::Error),

    /// The transport failed before a response was decoded.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The node answered with a JSON-RPC error object.
    #[error("json-rpc error {}: {}", .0.code(), .0.message())]
    JsonRpc(ErrorObjectOwned),

    /// The result payload did not match the expected shape.
    #[error("failed to decode result: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ProviderError {
    /// The payload the node attached to a JSON-RPC error, as an
    /// inspectable element. Provider-specific shapes (nested error
    /// objects included) decode permissively rather than failing.
    pub fn error_data(&self) -> Option<Element> {
        match self {
            Self::JsonRpc(err) => err
                .data()
                .and_then(|raw| serde_json::from_str(raw.get()).ok()),
            _ => None,
        }
    }
}
