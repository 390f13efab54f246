pub mod client;
pub mod config;
pub mod errors;
pub mod services;

pub use client::UpstreamClient;
pub use config::UpstreamConfig;
pub use errors::UpstreamError;
pub use services::{RemoteAuthenticator, RemoteGroupsService, RemoteUsersService};
