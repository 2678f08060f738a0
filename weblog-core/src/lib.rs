pub mod analysis;
pub mod cli;
pub mod conf;
pub mod input;
pub mod logging;
pub mod parse;
pub mod pipeline;
pub mod store;
