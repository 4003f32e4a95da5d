// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions decoupling the conversation workflow from its
//! collaborators: session storage, image acquisition, the remote swap
//! service, and reply delivery.

pub mod acquire;
pub mod reply;
pub mod session;
pub mod swap;

pub use acquire::ImageAcquirer;
pub use reply::ReplySink;
pub use session::SessionStore;
pub use swap::SwapService;
