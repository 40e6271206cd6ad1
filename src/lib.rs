//! AWS client plumbing for the MetaGuard metadata-consistency layer.
//!
//! MetaGuard fronts an eventually consistent object store with a strongly
//! consistent DynamoDB metadata store. This crate owns the construction of
//! the DynamoDB client handles the rest of the system talks through: region
//! resolution, credential-chain lookup and transport settings all come from
//! one configuration surface.

pub mod aws_clients;
pub mod config;
