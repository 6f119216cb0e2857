//! Form submission over HTTP

mod client;
mod traits;

pub use client::{HttpSubmitClient, SubmitError, SubmitResponse};
pub use traits::SubmitClientTrait;

#[cfg(test)]
pub use traits::MockSubmitClientTrait;
