use base64::{engine::general_purpose, Engine};
use serde::Serialize;
use serde_json::value::RawValue;
use std::{borrow::Cow, fmt};

pub use jsonrpsee_types::{ErrorObject, ErrorObjectOwned, Id, TwoPointZero};

/// A JSON-RPC 2.0 request envelope with positional parameters.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    /// Protocol version marker, always `"2.0"`.
    pub jsonrpc: TwoPointZero,
    /// Request id, echoed back in the response.
    pub id: Id<'a>,
    /// Method name.
    pub method: Cow<'a, str>,
    /// Already-serialized positional parameter array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Cow<'a, RawValue>>,
}

impl Request<'static> {
    /// Build an owned request.
    pub fn owned(
        id: Id<'static>,
        method: impl Into<Cow<'static, str>>,
        params: Option<Box<RawValue>>,
    ) -> Self {
        Self {
            jsonrpc: TwoPointZero,
            id,
            method: method.into(),
            params: params.map(Cow::Owned),
        }
    }
}

/// One parsed response: the `result` payload, or the node's error object.
pub type RpcResult<T> = Result<T, ErrorObjectOwned>;
/// A response whose `result` is kept as raw JSON.
pub type RawRpcResult = RpcResult<Box<RawValue>>;

/// Basic or bearer authentication in http or websocket transport
///
/// Use to inject username and password or an auth token into requests
#[derive(Clone, Debug)]
pub enum Authorization {
    /// HTTP Basic Auth
    Basic(String),
    /// Bearer Auth
    Bearer(String),
}

impl Authorization {
    /// Make a new basic auth
    pub fn basic(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let username = username.as_ref();
        let password = password.as_ref();
        let auth_secret = general_purpose::STANDARD.encode(format!("{username}:{password}"));
        Self::Basic(auth_secret)
    }

    /// Make a new bearer auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authorization::Basic(auth_secret) => write!(f, "Basic {auth_secret}"),
            Authorization::Bearer(token) => write!(f, "Bearer {token}"),
        }
    }
}
