pub mod model;
pub mod service;
pub mod http;

pub use model::{CreateGroupResponse, GroupRecord};
pub use service::*;
pub use http::*;
