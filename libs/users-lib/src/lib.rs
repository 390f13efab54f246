pub mod entities;
pub mod errors_service;
pub mod page;
pub mod session;
pub mod traits;

pub use entities::*;
pub use errors_service::*;
pub use page::*;
pub use session::*;
pub use traits::*;
