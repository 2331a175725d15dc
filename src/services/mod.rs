// Service exports
pub mod download;

pub use download::{DownloadLinkResolver, StaticPathResolver};
