// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{ElementId, ElementKind, Location, Model, RelationshipAttrs, RelationshipId};
use crate::build::{ElementSpec, ModelBuilder};

pub(crate) fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

pub(crate) fn rid(value: &str) -> RelationshipId {
    RelationshipId::new(value).expect("relationship id")
}

/// Internet banking model with explicit ids.
///
/// ```text
/// customer -> web -> api -> db
///                    api -> mail -> customer
/// ctrl -> repo -> db            (components of api)
/// customer -> bank
/// staff                          (unrelated)
///
/// live [Live]
///   live-web: web, api instances
///   live-db:  db instance
///   live-lb   (infrastructure)
///   live-spare (empty)
/// dev [Development]: api instance
/// ```
pub(crate) fn bank_model() -> Model {
    let mut b = ModelBuilder::new();
    b.set_enterprise("Big Bank");

    let customer = b
        .add_person(
            ElementSpec::named("Customer")
                .id("customer")
                .location(Location::External),
        )
        .expect("customer");
    b.add_person(
        ElementSpec::named("Back Office Staff")
            .id("staff")
            .location(Location::Internal),
    )
    .expect("staff");
    let bank = b
        .add_software_system(
            ElementSpec::named("Internet Banking")
                .id("bank")
                .location(Location::Internal),
        )
        .expect("bank");
    let mail = b
        .add_software_system(
            ElementSpec::named("E-mail System")
                .id("mail")
                .location(Location::External),
        )
        .expect("mail");
    let web = b
        .add_container(&bank, ElementSpec::named("Web App").id("web"))
        .expect("web");
    let api = b
        .add_container(&bank, ElementSpec::named("API").id("api"))
        .expect("api");
    let db = b
        .add_container(&bank, ElementSpec::named("Database").id("db").tag("Store"))
        .expect("db");
    let ctrl = b
        .add_component(&api, ElementSpec::named("Controller").id("ctrl"))
        .expect("ctrl");
    let repo = b
        .add_component(&api, ElementSpec::named("Repository").id("repo"))
        .expect("repo");

    let live = b
        .add_deployment_node(None, ElementSpec::named("Live").id("live").environment("Live"))
        .expect("live");
    let live_web = b
        .add_deployment_node(Some(&live), ElementSpec::named("Web Server").id("live-web"))
        .expect("live-web");
    let live_db = b
        .add_deployment_node(Some(&live), ElementSpec::named("DB Server").id("live-db"))
        .expect("live-db");
    b.add_infrastructure_node(&live, ElementSpec::named("Load Balancer").id("live-lb"))
        .expect("live-lb");
    b.add_deployment_node(Some(&live), ElementSpec::named("Spare").id("live-spare"))
        .expect("live-spare");
    let dev = b
        .add_deployment_node(
            None,
            ElementSpec::named("Dev Laptop")
                .id("dev")
                .environment("Development"),
        )
        .expect("dev");

    b.add_relationship_with_id(Some("r-cw"), &customer, &web, RelationshipAttrs::described("Uses"))
        .expect("r-cw");
    b.add_relationship_with_id(
        Some("r-wa"),
        &web,
        &api,
        RelationshipAttrs::described("Calls").with_technology("JSON/HTTPS"),
    )
    .expect("r-wa");
    b.add_relationship_with_id(Some("r-ad"), &api, &db, RelationshipAttrs::described("Reads"))
        .expect("r-ad");
    b.add_relationship_with_id(Some("r-am"), &api, &mail, RelationshipAttrs::described("Sends"))
        .expect("r-am");
    b.add_relationship_with_id(
        Some("r-mc"),
        &mail,
        &customer,
        RelationshipAttrs::described("Delivers"),
    )
    .expect("r-mc");
    b.add_relationship_with_id(Some("r-cr"), &ctrl, &repo, RelationshipAttrs::described("Uses"))
        .expect("r-cr");
    b.add_relationship_with_id(Some("r-rd"), &repo, &db, RelationshipAttrs::described("Queries"))
        .expect("r-rd");
    b.add_relationship_with_id(Some("r-cb"), &customer, &bank, RelationshipAttrs::described("Banks"))
        .expect("r-cb");

    b.add_container_instance(&live_web, &web, &[]).expect("web instance");
    b.add_container_instance(&live_web, &api, &[]).expect("api instance");
    b.add_container_instance(&live_db, &db, &[]).expect("db instance");
    b.add_container_instance(&dev, &api, &[]).expect("dev api instance");

    b.finalize().expect("finalize")
}

/// The container instance of `container` deployed in `environment`.
pub(crate) fn instance_of(model: &Model, container: &str, environment: &str) -> ElementId {
    model
        .elements_of_kind(ElementKind::ContainerInstance)
        .find(|element| {
            element.instantiated_container_id().map(|id| id.as_str()) == Some(container)
                && element.environment() == Some(environment)
        })
        .map(|element| element.id().clone())
        .expect("container instance")
}
