//! Library side of the `mapdraw` command-line tool.

#![deny(unsafe_code)]

pub mod logging;
pub mod script;
