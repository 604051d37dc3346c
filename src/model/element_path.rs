// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Symbolic reference to an element by name, used for relationship
/// destinations declared before the destination exists.
///
/// Examples:
/// - `Customer`
/// - `Internet Banking/API Application`
/// - `Internet Banking/API Application/Accounts Controller`
///
/// Resolution rules live in [`crate::build::resolve_destination`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementPath {
    segments: Vec<String>,
}

impl ElementPath {
    pub fn new(segments: Vec<String>) -> Result<Self, ElementPathError> {
        if segments.is_empty() {
            return Err(ElementPathError::Empty);
        }
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(ElementPathError::EmptySegment);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// A single segment path may also be an element id.
    pub fn as_single(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementPathError {
    #[error("element path must not be empty")]
    Empty,
    #[error("element path must not contain empty segments")]
    EmptySegment,
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl FromStr for ElementPath {
    type Err = ElementPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ElementPathError::Empty);
        }
        let segments = s
            .split('/')
            .map(|segment| segment.trim().to_owned())
            .collect::<Vec<_>>();
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementPath, ElementPathError};

    #[test]
    fn parses_nested_path() {
        let path: ElementPath = "Banking / API".parse().expect("path");
        assert_eq!(path.segments(), &["Banking".to_owned(), "API".to_owned()]);
        assert_eq!(path.to_string(), "Banking/API");
        assert_eq!(path.as_single(), None);
    }

    #[test]
    fn rejects_empty_segments() {
        assert_eq!("".parse::<ElementPath>(), Err(ElementPathError::Empty));
        assert_eq!("a//b".parse::<ElementPath>(), Err(ElementPathError::EmptySegment));
    }
}
