//! Data acquisition from the Codeforces problemset API.

pub mod codeforces;

pub use codeforces::CfClient;
