use serde::{de::DeserializeOwned, de::Error as _, Deserialize, Serialize};
use serde_json::value::RawValue;

use jsonrpsee_types::{ErrorObject, Id};

use crate::{common::RawRpcResult, TransportError};

pub fn to_json_raw_value<S>(s: &S) -> Result<Box<RawValue>, serde_json::Error>
where
    S: Serialize,
{
    RawValue::from_string(serde_json::to_string(s)?)
}

pub fn from_json_val<'de, T, S>(s: S) -> Result<T, TransportError>
where
    T: DeserializeOwned,
    S: AsRef<str> + 'de,
{
    let s = s.as_ref();
    match serde_json::from_str(s) {
        Ok(val) => Ok(val),
        Err(err) => Err(TransportError::SerdeJson {
            err,
            text: s.to_owned(),
        }),
    }
}

/// The response envelope: exactly one of `result` and `error` is present in
/// a conforming reply.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope<'a> {
    #[serde(borrow, default)]
    result: Option<&'a RawValue>,
    #[serde(borrow, default)]
    error: Option<ErrorObject<'a>>,
    #[serde(borrow, default)]
    #[allow(dead_code)]
    id: Option<Id<'a>>,
}

pub fn resp_to_raw_result(resp: &str) -> Result<RawRpcResult, TransportError> {
    let envelope: ResponseEnvelope<'_> = match serde_json::from_str(resp) {
        Ok(envelope) => envelope,
        Err(err) => {
            return Err(TransportError::SerdeJson {
                err,
                text: resp.to_owned(),
            })
        }
    };
    if let Some(err) = envelope.error {
        return Ok(Err(err.into_owned()));
    }
    match envelope.result {
        Some(raw) => Ok(Ok(raw.to_owned())),
        None => Err(TransportError::SerdeJson {
            err: <serde_json::Error as serde::de::Error>::custom(
                "response carries neither result nor error",
            ),
            text: resp.to_owned(),
        }),
    }
}

/// Splits a batch response body and parses each entry on its own. Entries
/// stay in server order; callers match them to requests by id if the server
/// reorders.
pub fn batch_to_raw_results(resp: &str) -> Result<Vec<RawRpcResult>, TransportError> {
    let parts: Vec<&RawValue> = match serde_json::from_str(resp) {
        Ok(parts) => parts,
        Err(err) => {
            return Err(TransportError::SerdeJson {
                err,
                text: resp.to_owned(),
            })
        }
    };
    parts.into_iter().map(|part| resp_to_raw_result(part.get())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_result_and_error_responses() {
        let ok = resp_to_raw_result(r#"{"jsonrpc":"2.0","result":"0x10","id":1}"#).unwrap();
        assert_eq!(ok.unwrap().get(), r#""0x10""#);

        let err = resp_to_raw_result(
            r#"{"jsonrpc":"2.0","error":{"code":-32000,"message":"out of gas"},"id":1}"#,
        )
        .unwrap()
        .unwrap_err();
        assert_eq!(err.code(), -32000);
        assert_eq!(err.message(), "out of gas");
    }

    #[test]
    fn parses_batches_in_order() {
        let body = r#"[
            {"jsonrpc":"2.0","result":"0x1","id":1},
            {"jsonrpc":"2.0","error":{"code":-32601,"message":"method not found"},"id":2}
        ]"#;
        let parts = batch_to_raw_results(body).unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].is_ok());
        assert!(parts[1].is_err());
    }

    #[test]
    fn garbage_body_is_a_transport_error() {
        let err = resp_to_raw_result("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::SerdeJson { .. }));

        // a body with neither result nor error is also malformed
        let err = resp_to_raw_result(r#"{"jsonrpc":"2.0","id":1}"#).unwrap_err();
        assert!(matches!(err, TransportError::SerdeJson { .. }));
    }
}
