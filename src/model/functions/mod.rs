mod feeds;
pub use feeds::*;

pub mod image_proxy;
pub use image_proxy::*;

mod search;
pub use search::*;

pub mod seo;
pub use seo::*;

pub mod steam;
