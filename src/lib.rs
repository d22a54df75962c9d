pub mod cli;
pub mod config;
pub mod convert;
pub mod numeric;
pub mod samples;

pub use config::Config;
pub use convert::{normalize, to_camel_case, to_kebab_case, Case, ConvertError};
pub use numeric::{add_validated, SumError};

#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}
