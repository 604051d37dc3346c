// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use log::debug;

use super::{
    AnimationStepDocument, ComponentDocument, ConfigurationDocument, ContainerDocument,
    ContainerInstanceDocument, DeploymentNodeDocument, ElementFields, ElementViewDocument,
    EnterpriseDocument, FilteredViewDocument, InfrastructureNodeDocument, ModelDocument,
    PersonDocument, RelationshipDocument, RelationshipViewDocument, SoftwareSystemDocument,
    ViewDocument, ViewsDocument, WorkspaceDocument,
};
use crate::model::{Element, ElementData, ElementId, ElementKind, Model, Relationship};
use crate::view::{View, ViewScope, Views};
use crate::workspace::Workspace;

impl WorkspaceDocument {
    pub fn from_workspace(workspace: &Workspace) -> Self {
        let model = workspace.model();
        let document = Self {
            name: workspace.name.clone(),
            description: workspace.description.clone(),
            version: workspace.version.clone(),
            model: model_document(model),
            views: views_document(workspace.views(), workspace),
        };
        debug!(
            workspace = document.name.as_str(),
            people = document.model.people.len(),
            systems = document.model.software_systems.len();
            "workspace exported"
        );
        document
    }
}

struct Exporter<'a> {
    model: &'a Model,
    relationships_by_source: HashMap<&'a ElementId, Vec<&'a Relationship>>,
}

impl<'a> Exporter<'a> {
    fn new(model: &'a Model) -> Self {
        let mut relationships_by_source: HashMap<&ElementId, Vec<&Relationship>> = HashMap::new();
        for rel in model.relationships() {
            relationships_by_source
                .entry(rel.source_id())
                .or_default()
                .push(rel);
        }
        Self {
            model,
            relationships_by_source,
        }
    }

    fn fields(&self, element: &Element) -> ElementFields {
        let relationships = self
            .relationships_by_source
            .get(element.id())
            .map(|rels| rels.iter().map(|rel| relationship_document(rel)).collect())
            .unwrap_or_default();
        ElementFields {
            id: element.id().to_string(),
            name: element.name().to_owned(),
            description: element.description().map(ToOwned::to_owned),
            technology: element.technology().map(ToOwned::to_owned),
            tags: element.tags().joined(),
            url: element.url().map(ToOwned::to_owned),
            properties: element.properties().clone(),
            relationships,
        }
    }

    fn children(&self, element: &'a Element, kind: ElementKind) -> Vec<&'a Element> {
        self.model.children_of_kind(element.id(), kind).collect()
    }

    fn software_system(&self, system: &'a Element) -> SoftwareSystemDocument {
        let containers = self
            .children(system, ElementKind::Container)
            .into_iter()
            .map(|container| ContainerDocument {
                element: self.fields(container),
                components: self
                    .children(container, ElementKind::Component)
                    .into_iter()
                    .map(|component| ComponentDocument {
                        element: self.fields(component),
                    })
                    .collect(),
            })
            .collect();
        SoftwareSystemDocument {
            element: self.fields(system),
            location: system.location(),
            containers,
        }
    }

    fn deployment_node(&self, node: &'a Element) -> DeploymentNodeDocument {
        let (environment, instances) = match node.data() {
            ElementData::DeploymentNode {
                environment,
                instances,
            } => (environment.clone(), *instances),
            _ => (String::new(), 0),
        };
        DeploymentNodeDocument {
            element: self.fields(node),
            environment,
            instances,
            children: self
                .children(node, ElementKind::DeploymentNode)
                .into_iter()
                .map(|child| self.deployment_node(child))
                .collect(),
            infrastructure_nodes: self
                .children(node, ElementKind::InfrastructureNode)
                .into_iter()
                .map(|infra| InfrastructureNodeDocument {
                    element: self.fields(infra),
                    environment: infra.environment().unwrap_or_default().to_owned(),
                })
                .collect(),
            container_instances: self
                .children(node, ElementKind::ContainerInstance)
                .into_iter()
                .filter_map(|instance| match instance.data() {
                    ElementData::ContainerInstance {
                        container_id,
                        instance_id,
                        environment,
                    } => Some(ContainerInstanceDocument {
                        element: self.fields(instance),
                        container_id: container_id.to_string(),
                        instance_id: *instance_id,
                        environment: environment.clone(),
                    }),
                    _ => None,
                })
                .collect(),
        }
    }
}

fn model_document(model: &Model) -> ModelDocument {
    let exporter = Exporter::new(model);
    ModelDocument {
        enterprise: model.enterprise().map(|name| EnterpriseDocument {
            name: name.to_owned(),
        }),
        people: model
            .elements_of_kind(ElementKind::Person)
            .map(|person| PersonDocument {
                element: exporter.fields(person),
                location: person.location(),
            })
            .collect(),
        software_systems: model
            .elements_of_kind(ElementKind::SoftwareSystem)
            .map(|system| exporter.software_system(system))
            .collect(),
        deployment_nodes: model
            .root_deployment_nodes()
            .map(|node| exporter.deployment_node(node))
            .collect(),
    }
}

fn relationship_document(rel: &Relationship) -> RelationshipDocument {
    RelationshipDocument {
        id: rel.id().to_string(),
        source_id: rel.source_id().to_string(),
        destination_id: rel.destination_id().to_string(),
        description: rel.description().map(ToOwned::to_owned),
        technology: rel.technology().map(ToOwned::to_owned),
        interaction_style: rel.interaction_style(),
        tags: rel.tags().joined(),
        url: rel.url().map(ToOwned::to_owned),
        linked_relationship_id: rel.linked_relationship_id().map(ToString::to_string),
    }
}

fn views_document(views: &Views, workspace: &Workspace) -> ViewsDocument {
    let mut document = ViewsDocument {
        configuration: ConfigurationDocument {
            styles: workspace.styles.clone(),
        },
        ..ViewsDocument::default()
    };
    for view in views.views() {
        match view.scope() {
            ViewScope::Landscape => document.system_landscape_views.push(view_document(view)),
            ViewScope::Context { .. } => document.system_context_views.push(view_document(view)),
            ViewScope::Container { .. } => document.container_views.push(view_document(view)),
            ViewScope::Component { .. } => document.component_views.push(view_document(view)),
            ViewScope::Dynamic { .. } => document.dynamic_views.push(view_document(view)),
            ViewScope::Deployment { .. } => document.deployment_views.push(view_document(view)),
            ViewScope::Filtered {
                base_key,
                mode,
                tags,
            } => document.filtered_views.push(FilteredViewDocument {
                key: view.key().to_string(),
                base_view_key: base_key.to_string(),
                mode: mode.to_string(),
                tags: tags.clone(),
                title: view.title().map(ToOwned::to_owned),
                description: view.description().map(ToOwned::to_owned),
            }),
        }
    }
    document
}

fn view_document(view: &View) -> ViewDocument {
    let mut document = ViewDocument {
        key: view.key().to_string(),
        title: view.title().map(ToOwned::to_owned),
        description: view.description().map(ToOwned::to_owned),
        paper_size: view.paper_size().map(ToOwned::to_owned),
        elements: view
            .element_views()
            .iter()
            .map(|ev| ElementViewDocument {
                id: ev.element_id().to_string(),
                x: ev.position().map(|p| p.x),
                y: ev.position().map(|p| p.y),
            })
            .collect(),
        relationships: view
            .relationship_views()
            .iter()
            .map(|rv| RelationshipViewDocument {
                id: rv.relationship_id().to_string(),
                description: rv.description.clone(),
                order: rv.order.clone(),
                vertices: rv.vertices.clone(),
                routing: rv.routing.clone(),
                position: rv.position,
            })
            .collect(),
        animations: view
            .animation()
            .iter()
            .map(|step| AnimationStepDocument {
                order: step.order(),
                elements: step.element_ids().iter().map(ToString::to_string).collect(),
                relationships: step
                    .relationship_ids()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect(),
        ..ViewDocument::default()
    };

    match view.scope() {
        ViewScope::Context { software_system_id } | ViewScope::Container { software_system_id } => {
            document.software_system_id = Some(software_system_id.to_string());
        }
        ViewScope::Component { container_id } => {
            document.container_id = Some(container_id.to_string());
        }
        ViewScope::Dynamic { element_id } => {
            document.element_id = element_id.as_ref().map(ToString::to_string);
        }
        ViewScope::Deployment {
            software_system_id,
            environment,
        } => {
            document.software_system_id = software_system_id.as_ref().map(ToString::to_string);
            document.environment = Some(environment.clone());
        }
        ViewScope::Landscape | ViewScope::Filtered { .. } => {}
    }
    document
}
