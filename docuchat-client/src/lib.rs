//! DocuChat Client - request wrappers over the RAG backend HTTP API
//!
//! The backend is an opaque collaborator reached over HTTP. This crate
//! provides one thin wrapper per backend operation and the [`RagBackend`]
//! trait seam the application layer is written against.

pub mod api;

pub use api::{
    Ack, ApiConfig, AskResponse, BackendFile, FileListResponse, HttpRagClient, RagBackend,
    StatsResponse, UploadResponse,
};
