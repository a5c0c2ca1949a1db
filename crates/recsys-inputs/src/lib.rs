#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Input module contracts for recommender-system models.
//!
//! Every input module turns one kind of raw feature into an embedding that the rest of a
//! model consumes. The [Inputs] trait carries what all of them share: the size of the
//! produced embedding and the names of the batch fields they read. Specialised contracts,
//! such as [TimeseriesInputs], add the forward pass on top.

mod base;
mod config;
mod error;
mod schema;
mod timeseries;

pub use base::*;
pub use config::*;
pub use error::*;
pub use schema::*;
pub use timeseries::*;

/// Backend for test cases
#[cfg(test)]
pub(crate) type TestBackend = burn::backend::NdArray<f32>;
