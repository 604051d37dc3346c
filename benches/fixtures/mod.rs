// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic generated landscapes (no RNG).

use archscope::{ElementId, ElementSpec, Model, ModelBuilder, RelationshipAttrs};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// 8 systems x 6 containers x 4 components.
    Small,
    /// 40 systems x 10 containers x 8 components.
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    fn shape(self) -> (usize, usize, usize) {
        match self {
            Self::Small => (8, 6, 4),
            Self::Large => (40, 10, 8),
        }
    }
}

pub struct Landscape {
    pub model: Model,
    pub people: Vec<ElementId>,
    pub systems: Vec<ElementId>,
    /// Containers grouped by system.
    pub containers: Vec<Vec<ElementId>>,
    pub components: Vec<ElementId>,
    pub environment: ElementId,
}

impl Landscape {
    pub fn all_containers(&self) -> Vec<ElementId> {
        self.containers.iter().flatten().cloned().collect()
    }
}

/// Builds a layered landscape: every container calls the next one in its
/// system, every system's last container calls the next system's first, and
/// each component chain ends in its container's sibling. The last system calls
/// back to the first, so the graph is cyclic.
pub fn landscape(case: Case) -> Landscape {
    let (system_count, container_count, component_count) = case.shape();
    let mut b = ModelBuilder::new();

    let people = (0..4)
        .map(|idx| {
            b.add_person(ElementSpec::named(format!("Person {idx}")))
                .expect("person")
        })
        .collect::<Vec<_>>();

    let mut systems = Vec::with_capacity(system_count);
    let mut containers = Vec::with_capacity(system_count);
    let mut components = Vec::new();
    for s in 0..system_count {
        let system = b
            .add_software_system(ElementSpec::named(format!("System {s}")))
            .expect("system");
        let mut owned = Vec::with_capacity(container_count);
        for c in 0..container_count {
            let mut spec = ElementSpec::named(format!("Container {s}.{c}"));
            if c % 3 == 0 {
                spec = spec.tag("Store");
            }
            let container = b.add_container(&system, spec).expect("container");
            for k in 0..component_count {
                let component = b
                    .add_component(&container, ElementSpec::named(format!("Component {k}")))
                    .expect("component");
                components.push(component);
            }
            owned.push(container);
        }
        systems.push(system);
        containers.push(owned);
    }

    for (s, owned) in containers.iter().enumerate() {
        for pair in owned.windows(2) {
            b.add_relationship(&pair[0], &pair[1], RelationshipAttrs::described("Calls"))
                .expect("calls");
        }
        let next = &containers[(s + 1) % containers.len()][0];
        let last = owned.last().expect("container");
        b.add_relationship(last, next, RelationshipAttrs::described("Hands off"))
            .expect("hands off");
    }
    for (idx, person) in people.iter().enumerate() {
        let target = &containers[idx % containers.len()][0];
        b.add_relationship(person, target, RelationshipAttrs::described("Uses"))
            .expect("uses");
    }
    for chain in components.chunks(component_count.max(1)) {
        for pair in chain.windows(2) {
            b.add_relationship(&pair[0], &pair[1], RelationshipAttrs::described("Delegates"))
                .expect("delegates");
        }
    }

    let environment = b
        .add_deployment_node(None, ElementSpec::named("Cloud").environment("Live"))
        .expect("cloud");
    for (s, owned) in containers.iter().enumerate() {
        let node = b
            .add_deployment_node(Some(&environment), ElementSpec::named(format!("Cluster {s}")))
            .expect("cluster");
        for container in owned {
            b.add_container_instance(&node, container, &[])
                .expect("instance");
        }
    }

    let model = b.finalize().expect("finalize");
    Landscape {
        model,
        people,
        systems,
        containers,
        components,
        environment,
    }
}
