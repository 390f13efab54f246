pub mod app;
pub mod authn;
pub mod config;
pub mod constants;
pub mod decode;
pub mod error;
pub mod methods;
pub mod openapi;
pub mod query;
pub mod shutdown;
pub mod state;
pub mod upstream;

pub use app::build_router;
pub use error::ApiError;
pub use state::AppState;
