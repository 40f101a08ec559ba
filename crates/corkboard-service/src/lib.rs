pub mod context;
pub mod response;
pub mod service;

pub use context::{DataSet, ServiceContext};
pub use response::ApiResponse;
pub use service::BoardService;
