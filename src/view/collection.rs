// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::{debug, info};

use super::filtered::{filter_view, FilteredContent};
use super::{View, ViewKind, ViewScope};
use crate::config::Settings;
use crate::error::{ModelError, ValidationErrors};
use crate::model::{ElementId, ElementKind, Model, ViewKey};

/// All views of a workspace, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Views {
    settings: Settings,
    views: Vec<View>,
}

impl Views {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            views: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Declares a new, empty view.
    ///
    /// The scope must name an element of the right kind; filtered views may
    /// name a base view declared later.
    pub fn declare(
        &mut self,
        model: &Model,
        key: ViewKey,
        scope: ViewScope,
    ) -> Result<&mut View, ModelError> {
        if self.view(&key).is_some() {
            return Err(ModelError::DuplicateViewKey { view_key: key });
        }
        let expected = match &scope {
            ViewScope::Context { .. } | ViewScope::Container { .. } => {
                Some(ElementKind::SoftwareSystem)
            }
            ViewScope::Component { .. } => Some(ElementKind::Container),
            ViewScope::Deployment { .. } => Some(ElementKind::SoftwareSystem),
            ViewScope::Landscape | ViewScope::Dynamic { .. } | ViewScope::Filtered { .. } => None,
        };
        if let Some(scope_id) = scope.scope_element_id() {
            check_scope(model, &key, scope.kind(), scope_id, expected)?;
        }

        debug!(view:% = key, kind:% = scope.kind(); "view declared");
        let mut view = View::new(key, scope);
        view.set_edge_completion(self.settings.edge_completion);
        self.views.push(view);
        let index = self.views.len() - 1;
        Ok(&mut self.views[index])
    }

    pub fn view(&self, key: &ViewKey) -> Option<&View> {
        self.views.iter().find(|view| view.key() == key)
    }

    pub fn view_mut(&mut self, key: &ViewKey) -> Option<&mut View> {
        self.views.iter_mut().find(|view| view.key() == key)
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut [View] {
        &mut self.views
    }

    pub fn of_kind(&self, kind: ViewKind) -> impl Iterator<Item = &View> {
        self.views.iter().filter(move |view| view.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// The derived content of a filtered view.
    pub fn filtered_content(
        &self,
        model: &Model,
        key: &ViewKey,
    ) -> Result<FilteredContent, ModelError> {
        let view = self.view(key).ok_or_else(|| ModelError::UnknownView {
            view_key: key.to_string(),
        })?;
        let ViewScope::Filtered {
            base_key,
            mode,
            tags,
        } = view.scope()
        else {
            return Err(ModelError::UnknownView {
                view_key: key.to_string(),
            });
        };
        let base = self.view(base_key).ok_or_else(|| ModelError::UnknownView {
            view_key: base_key.to_string(),
        })?;
        Ok(filter_view(model, base, *mode, tags))
    }

    /// Validates every view, accumulating all failures.
    pub fn validate(&self, model: &Model) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for view in &self.views {
            errors.merge(view.validate(model));
            if let ViewScope::Filtered { base_key, .. } = view.scope() {
                let base_ok = self
                    .view(base_key)
                    .is_some_and(|base| base.kind() != ViewKind::Filtered);
                if !base_ok {
                    errors.add(
                        format!("view {}", view.key()),
                        ModelError::UnknownView {
                            view_key: base_key.to_string(),
                        },
                    );
                }
            }
        }
        info!(views = self.views.len(), errors = errors.len(); "views validated");
        errors
    }
}

fn check_scope(
    model: &Model,
    key: &ViewKey,
    view_kind: ViewKind,
    scope_id: &ElementId,
    expected: Option<ElementKind>,
) -> Result<(), ModelError> {
    let element_kind = model
        .element_kind(scope_id)
        .ok_or_else(|| ModelError::UnknownElement {
            id: scope_id.to_string(),
        })?;
    match expected {
        Some(expected) if expected != element_kind => Err(ModelError::TypeMismatch {
            view_key: key.clone(),
            view_kind,
            element_id: scope_id.clone(),
            element_kind,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::Views;
    use crate::config::{EdgeCompletion, Settings};
    use crate::error::ModelError;
    use crate::model::fixtures::{bank_model, eid};
    use crate::model::ViewKey;
    use crate::view::{FilterMode, ViewScope};

    fn key(value: &str) -> ViewKey {
        ViewKey::new(value).expect("view key")
    }

    #[test]
    fn declare_checks_key_and_scope() {
        let model = bank_model();
        let mut views = Views::default();
        views
            .declare(&model, key("ctx"), ViewScope::Context { software_system_id: eid("bank") })
            .expect("declare");

        let duplicate = views
            .declare(&model, key("ctx"), ViewScope::Landscape)
            .expect_err("duplicate");
        assert_eq!(duplicate, ModelError::DuplicateViewKey { view_key: key("ctx") });

        let wrong_kind = views
            .declare(&model, key("cmp"), ViewScope::Component { container_id: eid("bank") })
            .expect_err("scope kind");
        assert!(matches!(wrong_kind, ModelError::TypeMismatch { .. }));

        let unknown = views
            .declare(&model, key("dyn"), ViewScope::Dynamic { element_id: Some(eid("ghost")) })
            .expect_err("unknown scope");
        assert_eq!(unknown, ModelError::UnknownElement { id: "ghost".to_owned() });
        assert_eq!(views.len(), 1);
    }

    #[test]
    fn declared_views_take_the_completion_mode_from_settings() {
        let model = bank_model();
        let mut views = Views::new(Settings {
            edge_completion: EdgeCompletion::Batch,
        });
        let view = views
            .declare(&model, key("l"), ViewScope::Landscape)
            .expect("declare");
        assert_eq!(view.edge_completion(), EdgeCompletion::Batch);
    }

    #[test]
    fn filtered_views_resolve_against_their_base() {
        let model = bank_model();
        let mut views = Views::default();
        views
            .declare(&model, key("l"), ViewScope::Landscape)
            .expect("declare")
            .add_elements(&model, &[eid("customer"), eid("bank"), eid("mail")])
            .expect("add");
        views
            .declare(
                &model,
                key("people"),
                ViewScope::Filtered {
                    base_key: key("l"),
                    mode: FilterMode::Include,
                    tags: vec!["Person".to_owned()],
                },
            )
            .expect("declare");
        views
            .declare(
                &model,
                key("broken"),
                ViewScope::Filtered {
                    base_key: key("missing"),
                    mode: FilterMode::Exclude,
                    tags: Vec::new(),
                },
            )
            .expect("declare");

        let content = views.filtered_content(&model, &key("people")).expect("content");
        assert_eq!(content.element_ids, vec![eid("customer")]);

        let errors = views.validate(&model);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.errors()[0].error,
            ModelError::UnknownView { view_key: "missing".to_owned() }
        );
    }
}
