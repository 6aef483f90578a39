pub mod api;
pub mod client;
pub mod dialog;
pub mod validation;

pub use api::{ToQueryParameter, ValidationErrors};
