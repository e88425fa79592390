pub mod convert;
pub mod dataset;
pub mod encoding;
pub mod pipeline;
pub mod sanitize;
pub mod writer;
