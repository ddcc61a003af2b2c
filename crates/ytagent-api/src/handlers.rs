//! Request handlers.

pub mod health;
pub mod page;
pub mod seo;
pub mod upload;

pub use health::*;
pub use page::*;
pub use seo::*;
pub use upload::*;
