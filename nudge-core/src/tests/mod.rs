mod common;
mod properties;

pub use common::mk_config;
