//! songforge CLI - library half of the command-line interface.
//!
//! The `songforge` binary (`main.rs`) stays a thin dispatcher; argument
//! definitions live in [`cli_args`], command implementations in
//! [`commands`], and the export boundary (WAV + delegated MP3) in
//! [`export`].

pub mod cli_args;
pub mod commands;
pub mod export;
