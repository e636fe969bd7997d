//! Core library for the epicor-user-sync command line application.
//!
//! The library keeps each concern in a narrow module: employee files are read
//! by [`epicor::users::io`], user identifiers are derived in
//! [`epicor::users::identity`], the ERP REST calls live in
//! [`epicor::users::client`], and [`epicor::users::sync`] drives the create
//! and deactivate phases.

pub mod epicor;

pub use epicor::users::{Result, SyncError, client, config, error, identity, io, logging, model, sync};
