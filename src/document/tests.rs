// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{workspace_schema, RelationshipDocument, WorkspaceDocument};
use crate::model::fixtures::{bank_model, eid};
use crate::model::{InteractionStyle, Location, ViewKey};
use crate::style::{ElementStyle, Shape};
use crate::view::{FilterMode, Vertex, ViewScope, Views};
use crate::workspace::Workspace;

fn key(value: &str) -> ViewKey {
    ViewKey::new(value).expect("view key")
}

#[fixture]
fn workspace() -> Workspace {
    let model = bank_model();
    let mut views = Views::default();
    let containers = views
        .declare(
            &model,
            key("containers"),
            ViewScope::Container {
                software_system_id: eid("bank"),
            },
        )
        .expect("containers");
    containers.set_title(Some("Containers"));
    containers
        .add_elements(&model, &[eid("customer"), eid("web"), eid("api")])
        .expect("add");
    containers.set_position(&eid("web"), Vertex { x: 100, y: 200 });
    containers
        .append_step(&model, &[eid("customer")])
        .expect("step 1");
    containers.append_step(&model, &[eid("web")]).expect("step 2");

    views
        .declare(
            &model,
            key("live"),
            ViewScope::Deployment {
                software_system_id: Some(eid("bank")),
                environment: "Live".to_owned(),
            },
        )
        .expect("live");
    views
        .declare(
            &model,
            key("no-stores"),
            ViewScope::Filtered {
                base_key: key("containers"),
                mode: FilterMode::Exclude,
                tags: vec!["Store".to_owned()],
            },
        )
        .expect("filtered");

    let mut workspace = Workspace::new("Big Bank", model, views);
    workspace.version = Some("1".to_owned());
    workspace.styles.add_element_rule(
        "Person",
        ElementStyle {
            shape: Some(Shape::Person),
            ..ElementStyle::default()
        },
    );
    workspace
}

#[rstest]
fn elements_nest_by_containment(workspace: Workspace) {
    let document = WorkspaceDocument::from_workspace(&workspace);
    let model = &document.model;

    assert_eq!(
        model.enterprise.as_ref().map(|e| e.name.as_str()),
        Some("Big Bank")
    );
    let people: Vec<_> = model.people.iter().map(|p| p.element.id.as_str()).collect();
    assert_eq!(people, ["customer", "staff"]);
    assert_eq!(model.people[0].location, Location::External);

    let bank = &model.software_systems[0];
    assert_eq!(bank.element.id, "bank");
    let containers: Vec<_> = bank.containers.iter().map(|c| c.element.id.as_str()).collect();
    assert_eq!(containers, ["web", "api", "db"]);
    let components: Vec<_> = bank.containers[1]
        .components
        .iter()
        .map(|c| c.element.id.as_str())
        .collect();
    assert_eq!(components, ["ctrl", "repo"]);
    assert_eq!(bank.containers[2].element.tags, "Element,Container,Store");
}

#[rstest]
fn relationships_are_listed_under_their_source(workspace: Workspace) {
    let document = WorkspaceDocument::from_workspace(&workspace);
    let customer = &document.model.people[0].element;
    let ids: Vec<_> = customer.relationships.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r-cw", "r-cb"]);
    assert!(customer
        .relationships
        .iter()
        .all(|r| r.source_id == "customer" && r.tags.starts_with("Relationship")));

    let staff = &document.model.people[1].element;
    assert!(staff.relationships.is_empty());
}

#[rstest]
fn deployment_nodes_nest_recursively(workspace: Workspace) {
    let document = WorkspaceDocument::from_workspace(&workspace);
    let roots: Vec<_> = document
        .model
        .deployment_nodes
        .iter()
        .map(|n| n.element.id.as_str())
        .collect();
    assert_eq!(roots, ["live", "dev"]);

    let live = &document.model.deployment_nodes[0];
    assert_eq!(live.environment, "Live");
    assert_eq!(live.instances, 1);
    let children: Vec<_> = live.children.iter().map(|n| n.element.id.as_str()).collect();
    assert_eq!(children, ["live-web", "live-db", "live-spare"]);
    assert_eq!(live.infrastructure_nodes[0].element.id, "live-lb");
    assert_eq!(live.infrastructure_nodes[0].environment, "Live");

    let live_web = &live.children[0];
    let instances: Vec<_> = live_web
        .container_instances
        .iter()
        .map(|i| (i.container_id.as_str(), i.instance_id))
        .collect();
    assert_eq!(instances, [("web", 1), ("api", 1)]);

    let web_instance = &live_web.container_instances[0];
    assert_eq!(web_instance.element.relationships.len(), 1);
    assert_eq!(
        web_instance.element.relationships[0].linked_relationship_id.as_deref(),
        Some("r-wa")
    );
}

#[rstest]
fn views_are_grouped_by_kind(workspace: Workspace) {
    let document = WorkspaceDocument::from_workspace(&workspace);
    let views = &document.views;

    assert_eq!(views.container_views.len(), 1);
    let containers = &views.container_views[0];
    assert_eq!(containers.key, "containers");
    assert_eq!(containers.title.as_deref(), Some("Containers"));
    assert_eq!(containers.software_system_id.as_deref(), Some("bank"));

    let web = containers
        .elements
        .iter()
        .find(|e| e.id == "web")
        .expect("web member");
    assert_eq!((web.x, web.y), (Some(100), Some(200)));
    assert_eq!(containers.animations.len(), 2);
    assert_eq!(containers.animations[1].elements, ["web"]);
    assert_eq!(containers.animations[1].relationships, ["r-cw"]);

    let live = &views.deployment_views[0];
    assert_eq!(live.environment.as_deref(), Some("Live"));
    assert_eq!(live.software_system_id.as_deref(), Some("bank"));

    let filtered = &views.filtered_views[0];
    assert_eq!(filtered.base_view_key, "containers");
    assert_eq!(filtered.mode, "Exclude");
    assert_eq!(filtered.tags, ["Store"]);

    assert_eq!(views.configuration.styles.elements[0].tag, "Person");
    assert!(views.system_landscape_views.is_empty());
}

#[rstest]
fn json_round_trip_keeps_the_document(workspace: Workspace) {
    let document = WorkspaceDocument::from_workspace(&workspace);
    let json = document.to_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    assert_eq!(value["model"]["people"][0]["location"], "External");
    assert_eq!(
        value["model"]["softwareSystems"][0]["containers"][0]["relationships"][0]
            ["interactionStyle"],
        "Undefined"
    );
    assert_eq!(value["views"]["filteredViews"][0]["baseViewKey"], "containers");

    let back = WorkspaceDocument::from_json(&json).expect("deserialize");
    assert_eq!(back, document);
}

#[rstest]
#[case("Synchronous", InteractionStyle::Synchronous)]
#[case("Asynchronous", InteractionStyle::Asynchronous)]
#[case("Undefined", InteractionStyle::Undefined)]
#[case("sometimes", InteractionStyle::Undefined)]
fn interaction_style_decodes_leniently(#[case] raw: &str, #[case] expected: InteractionStyle) {
    let json = format!(
        r#"{{"id":"r1","sourceId":"a","destinationId":"b","interactionStyle":"{raw}"}}"#
    );
    let rel: RelationshipDocument = serde_json::from_str(&json).expect("relationship");
    assert_eq!(rel.interaction_style, expected);
}

#[test]
fn unknown_location_decodes_to_undefined() {
    let json = r#"{"name":"w","model":{"people":[{"id":"p","name":"P","location":"Mars"}]}}"#;
    let document = WorkspaceDocument::from_json(json).expect("document");
    assert_eq!(document.model.people[0].location, Location::Undefined);
}

#[test]
fn schema_describes_the_top_level_shape() {
    let schema = workspace_schema();
    let properties = &schema["properties"];
    assert!(properties.get("name").is_some());
    assert!(properties.get("model").is_some());
    assert!(properties.get("views").is_some());
    let required = schema["required"].as_array().expect("required");
    assert!(required.contains(&serde_json::json!("name")));
}
