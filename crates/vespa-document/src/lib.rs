pub mod console;
pub mod error;
pub mod http;
pub mod target;
pub mod telemetry;

pub use console::Console;
pub use error::DocumentError;
pub use http::document::client::Outcome;
pub use target::{ServiceContext, Target};
