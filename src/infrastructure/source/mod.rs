//! Document source implementations (file system, HTTP)

mod fs;
mod http;

pub use fs::FsDocumentSource;
pub use http::HttpDocumentSource;
