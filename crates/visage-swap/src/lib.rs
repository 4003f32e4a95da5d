// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Face-swap service client for visage.
//!
//! Implements [`SwapService`](visage_core::traits::SwapService) against
//! the remote face-swap HTTP API: a create-task request followed by a
//! bounded, strictly sequential poll loop.

pub mod client;
pub mod types;

pub use client::SwapClient;
