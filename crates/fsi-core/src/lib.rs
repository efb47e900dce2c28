pub mod config;
pub mod logging;

pub mod checksum;
pub mod fetch;
pub mod installer;
pub mod listing;
pub mod paths;
pub mod probe;
pub mod storage;
