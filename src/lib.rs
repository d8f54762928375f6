//! newsdeck: a terminal news reader.
//!
//! Remote headlines come from a NewsAPI-compatible endpoint; any remote
//! failure falls back to the last good snapshot on disk, and only when
//! both sources fail does an error surface, as a one-shot UI effect.

pub mod cache;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod mapper;
pub mod paging;
pub mod remote;
pub mod ui;
