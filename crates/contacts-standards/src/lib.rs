#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::error::{Result, StandardsError};
pub use crate::loaders::{
    Standards, load_country_allow_list, load_default_standards, load_tag_rules,
};
pub use crate::paths::{STANDARDS_ENV_VAR, standards_root};
