// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence of workspace documents on disk.
//!
//! A workspace is stored as a single pretty-printed JSON file, written through
//! a temp file and renamed into place.

pub mod workspace_file;

pub use workspace_file::{StoreError, WorkspaceFile, WriteDurability};
