pub mod model;
pub mod service;
pub mod http;

pub use model::{CreateImageResponse, ImageRecord};
pub use service::*;
pub use http::*;
