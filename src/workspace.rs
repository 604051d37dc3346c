// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::info;

use crate::build::ModelBuilder;
use crate::config::Settings;
use crate::error::{BuildError, ModelError, ValidationErrors};
use crate::model::Model;
use crate::style::Styles;
use crate::view::Views;

/// A finalized model together with its views and styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    model: Model,
    views: Views,
    pub styles: Styles,
}

impl Workspace {
    pub fn new(name: impl Into<String>, model: Model, views: Views) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: None,
            model,
            views,
            styles: Styles::default(),
        }
    }

    /// Runs the whole pipeline: finalize the model, let `declare_views`
    /// populate the views, then validate them.
    pub fn build<F>(
        name: impl Into<String>,
        builder: ModelBuilder,
        settings: Settings,
        declare_views: F,
    ) -> Result<Self, BuildError>
    where
        F: FnOnce(&Model, &mut Views) -> Result<(), ModelError>,
    {
        let name = name.into();
        let model = builder.finalize()?;
        let mut views = Views::new(settings);
        declare_views(&model, &mut views)?;
        views.validate(&model).into_result()?;

        info!(
            workspace = name.as_str(),
            elements = model.elements().len(),
            views = views.len();
            "workspace built"
        );
        Ok(Self::new(name, model, views))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut Views {
        &mut self.views
    }

    /// Split borrow for view mutation against the shared model.
    pub fn model_and_views_mut(&mut self) -> (&Model, &mut Views) {
        (&self.model, &mut self.views)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.views.validate(&self.model).into_result()
    }
}
