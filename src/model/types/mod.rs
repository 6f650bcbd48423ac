pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod feed;
pub use feed::*;

pub mod game;
pub use game::*;

pub mod i18n;
pub use i18n::*;

pub mod image;
pub use image::*;

pub mod popup;
pub use popup::*;

pub mod sources;
pub use sources::*;

#[cfg(feature = "ssr")]
pub mod app_state;
#[cfg(feature = "ssr")]
pub use app_state::*;
