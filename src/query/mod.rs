// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a finalized model.
//!
//! Relationships are treated as undirected edges here; cycles are expected.

pub mod graph;

pub use graph::{
    reachable, related, related_components, related_containers, related_people,
    related_software_systems,
};
