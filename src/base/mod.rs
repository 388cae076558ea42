//! Foundation utilities for the ktdecl toolchain.
//!
//! This module provides the primitives used throughout the converter:
//! - String transforms ([`capitalize`], [`snake_to_camel_case`], [`escape_identifier`])
//! - Path helpers ([`common_prefix`], [`glob_to_regex`])
//! - The Kotlin reserved-word table ([`is_kotlin_keyword`])
//!
//! This module has NO dependencies on other ktdecl modules.

mod keywords;
mod strings;

pub use keywords::is_kotlin_keyword;
pub use strings::{capitalize, common_prefix, escape_identifier, glob_to_regex, snake_to_camel_case};
