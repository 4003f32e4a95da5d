// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image acquisition and static hosting for visage.
//!
//! [`ImageStore`] downloads remote images into a local directory and the
//! axum server in [`server`] exposes that directory read-only under
//! `/images`, making the files reachable by the remote swap service.

pub mod server;
pub mod store;

pub use server::{start_server, StaticHostConfig};
pub use store::ImageStore;
