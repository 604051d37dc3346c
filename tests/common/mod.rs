// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

use archscope::{
    ElementId, ElementKind, ElementSpec, Location, Model, ModelBuilder, RelationshipAttrs,
    RelationshipId, ViewKey,
};

/// Online shop declared only through the public builder, with symbolic
/// destinations (including a forward reference) resolved at finalize.
///
/// ```text
/// customer -> storefront -> api -> db
///                           api -> payments -> customer
/// checkout -> ledger -> db          (components of api)
///
/// production [Production]
///   app-server: storefront, api instances
///   db-server:  db instance
///   gateway     (infrastructure)
///   rack        (empty)
/// ```
pub struct Shop {
    pub model: Model,
    pub customer: ElementId,
    pub shop: ElementId,
    pub payments: ElementId,
    pub storefront: ElementId,
    pub api: ElementId,
    pub db: ElementId,
    pub checkout: ElementId,
    pub ledger: ElementId,
    pub production: ElementId,
    pub app_server: ElementId,
    pub db_server: ElementId,
    pub gateway: ElementId,
    pub rack: ElementId,
    pub browses: RelationshipId,
    pub calls: RelationshipId,
}

pub fn shop() -> Shop {
    let mut b = ModelBuilder::new();
    b.set_enterprise("Shop Inc");

    let customer = b
        .add_person(ElementSpec::named("Customer").location(Location::External))
        .expect("customer");
    // declared before Storefront exists
    let browses = b
        .uses(&customer, "Shop/Storefront", "Browses")
        .expect("browses");

    let shop = b
        .add_software_system(ElementSpec::named("Shop").location(Location::Internal))
        .expect("shop");
    let payments = b
        .add_software_system(ElementSpec::named("Payments").location(Location::External))
        .expect("payments");
    let storefront = b
        .add_container(&shop, ElementSpec::named("Storefront").technology("Rust"))
        .expect("storefront");
    let api = b
        .add_container(&shop, ElementSpec::named("Orders API"))
        .expect("api");
    let db = b
        .add_container(&shop, ElementSpec::named("Orders DB").tag("Store"))
        .expect("db");
    let checkout = b
        .add_component(&api, ElementSpec::named("Checkout"))
        .expect("checkout");
    let ledger = b
        .add_component(&api, ElementSpec::named("Ledger"))
        .expect("ledger");

    let calls = b
        .add_relationship(
            &storefront,
            "Orders API".parse::<archscope::ElementPath>().expect("path"),
            RelationshipAttrs::described("Calls").with_technology("JSON/HTTPS"),
        )
        .expect("calls");
    b.uses(&api, "Orders DB", "Stores orders").expect("stores");
    b.uses(&api, "Payments", "Charges").expect("charges");
    b.uses(&payments, "Customer", "Sends receipts").expect("receipts");
    b.uses(&checkout, "Ledger", "Books").expect("books");
    b.add_relationship(&ledger, &db, RelationshipAttrs::described("Writes"))
        .expect("writes");

    let production = b
        .add_deployment_node(None, ElementSpec::named("Production").environment("Production"))
        .expect("production");
    let app_server = b
        .add_deployment_node(Some(&production), ElementSpec::named("App Server").instances(2))
        .expect("app server");
    let db_server = b
        .add_deployment_node(Some(&production), ElementSpec::named("DB Server"))
        .expect("db server");
    let gateway = b
        .add_infrastructure_node(&production, ElementSpec::named("Gateway"))
        .expect("gateway");
    let rack = b
        .add_deployment_node(Some(&production), ElementSpec::named("Rack"))
        .expect("rack");
    b.add_container_instance(&app_server, &storefront, &[])
        .expect("storefront instance");
    b.add_container_instance(&app_server, &api, &[])
        .expect("api instance");
    b.add_container_instance(&db_server, &db, &[])
        .expect("db instance");

    let model = b.finalize().expect("finalize");
    Shop {
        model,
        customer,
        shop,
        payments,
        storefront,
        api,
        db,
        checkout,
        ledger,
        production,
        app_server,
        db_server,
        gateway,
        rack,
        browses,
        calls,
    }
}

pub fn key(value: &str) -> ViewKey {
    ViewKey::new(value).expect("view key")
}

pub fn instances(model: &Model) -> Vec<ElementId> {
    model
        .elements_of_kind(ElementKind::ContainerInstance)
        .map(|element| element.id().clone())
        .collect()
}
