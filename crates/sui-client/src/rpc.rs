//! JSON-RPC 2.0 message plumbing.

use serde::{Deserialize, Serialize};

/// Protocol version string sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// A single JSON-RPC request.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// Request id, unique per client instance.
    pub id: u64,
    /// Method name, e.g. `"suix_getCoins"`.
    pub method: &'a str,
    /// Positional parameters.
    pub params: serde_json::Value,
}

impl<'a> RpcRequest<'a> {
    /// Build a request for the given method and positional parameters.
    ///
    /// # Arguments
    /// * `id` - Unique request id.
    /// * `method` - The RPC method name.
    /// * `params` - Positional parameters as a JSON array.
    ///
    /// # Returns
    /// A serializable request message.
    pub fn new(id: u64, method: &'a str, params: serde_json::Value) -> Self {
        RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// A single JSON-RPC response.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    /// Result payload, absent when the call failed.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error object, absent when the call succeeded.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// The error object carried in a failed JSON-RPC response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

/// Errors surfaced by the JSON-RPC transport.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The HTTP request itself failed (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The response body, for diagnostics.
        body: String,
    },

    /// The server returned a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// Numeric error code.
        code: i64,
        /// Human-readable message.
        message: String,
    },

    /// The response carried neither a result nor an error.
    #[error("no result in JSON-RPC response")]
    NoResult,

    /// The result payload did not match the expected shape.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<RpcErrorObject> for RpcError {
    fn from(e: RpcErrorObject) -> Self {
        RpcError::Rpc {
            code: e.code,
            message: e.message,
        }
    }
}
