// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tag-keyed style cascade.
//!
//! Rules are scanned in declaration order; each matching rule overlays the
//! fields it sets onto the result. Unset fields never clear earlier values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{ElementId, Model, RelationshipId, Tags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Shape {
    Box,
    RoundedBox,
    Circle,
    Ellipse,
    Hexagon,
    Cylinder,
    Pipe,
    Person,
    Robot,
    Folder,
    WebBrowser,
    MobileDevicePortrait,
    MobileDeviceLandscape,
    Component,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Border {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Routing {
    Direct,
    Orthogonal,
    Curved,
}

macro_rules! overlay_fields {
    ($target:ident, $layer:ident, $($field:ident),+ $(,)?) => {
        $(
            if $layer.$field.is_some() {
                $target.$field = $layer.$field.clone();
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<bool>,
}

impl ElementStyle {
    /// Copies every field `layer` sets onto `self`.
    pub fn overlay(&mut self, layer: &ElementStyle) {
        overlay_fields!(
            self, layer, background, color, stroke, shape, icon, width, height, font_size,
            border, opacity, metadata, description,
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<Routing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
}

impl RelationshipStyle {
    pub fn overlay(&mut self, layer: &RelationshipStyle) {
        overlay_fields!(
            self, layer, thickness, color, dashed, routing, font_size, width, position, opacity,
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ElementStyleRule {
    pub tag: String,
    #[serde(flatten)]
    pub style: ElementStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelationshipStyleRule {
    pub tag: String,
    #[serde(flatten)]
    pub style: RelationshipStyle,
}

/// Model-wide, ordered style rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Styles {
    #[serde(default)]
    pub elements: Vec<ElementStyleRule>,
    #[serde(default)]
    pub relationships: Vec<RelationshipStyleRule>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element_rule(&mut self, tag: impl Into<String>, style: ElementStyle) {
        self.elements.push(ElementStyleRule {
            tag: tag.into(),
            style,
        });
    }

    pub fn add_relationship_rule(&mut self, tag: impl Into<String>, style: RelationshipStyle) {
        self.relationships.push(RelationshipStyleRule {
            tag: tag.into(),
            style,
        });
    }

    /// Effective style for an entity carrying `tags`.
    pub fn resolve_element(&self, tags: &Tags) -> ElementStyle {
        let mut style = ElementStyle::default();
        for rule in self.elements.iter().filter(|rule| tags.contains(&rule.tag)) {
            style.overlay(&rule.style);
        }
        style
    }

    pub fn resolve_relationship(&self, tags: &Tags) -> RelationshipStyle {
        let mut style = RelationshipStyle::default();
        for rule in self
            .relationships
            .iter()
            .filter(|rule| tags.contains(&rule.tag))
        {
            style.overlay(&rule.style);
        }
        style
    }

    /// Element style by id; `None` for unknown elements.
    pub fn element_style(&self, model: &Model, id: &ElementId) -> Option<ElementStyle> {
        model
            .element(id)
            .map(|element| self.resolve_element(element.tags()))
    }

    pub fn relationship_style(&self, model: &Model, id: &RelationshipId) -> Option<RelationshipStyle> {
        model
            .relationship(id)
            .map(|rel| self.resolve_relationship(rel.tags()))
    }
}
