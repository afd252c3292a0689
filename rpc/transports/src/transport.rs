use std::fmt::Debug;

use crate::{
    common::{Id, RawRpcResult, Request},
    TransportError,
};

/// A JSON-RPC connection: send one request or a batch, get raw responses.
///
/// The returned futures resolve exactly once. No particular thread or queue
/// is implied by completion; callers dispatch to their own executor as
/// needed.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Connection: Debug + Send + Sync {
    /// Whether the endpoint lives on this machine.
    fn is_local(&self) -> bool;

    /// Take the next request id.
    fn increment_id(&self) -> u64;

    /// The next request id, wrapped for the envelope.
    fn next_id(&self) -> Id<'static> {
        Id::Number(self.increment_id())
    }

    /// Send one request.
    async fn json_rpc_request(&self, req: &Request<'_>) -> Result<RawRpcResult, TransportError>;

    /// Send a batch. Responses come back in server order.
    async fn batch_request(
        &self,
        reqs: &[Request<'_>],
    ) -> Result<Vec<RawRpcResult>, TransportError>;
}

#[cfg(test)]
mod test {
    use crate::Connection;

    fn __compile_check() -> Box<dyn Connection> {
        todo!()
    }
}
