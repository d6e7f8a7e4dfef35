// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Read-only view of a CAD design: components, bodies, and assembly occurrences
//!
//! The host application owns and mutates these entities; this crate only reads
//! them to decide what to export. Hosts assemble the handle they inject through
//! [`DesignBuilder`].

/// Index of a component definition within its design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub usize);

/// A single geometry record owned by a component
///
/// The actual geometry stays inside the host; only the name is visible here.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
}

/// A reusable named part definition in the assembly tree
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub bodies: Vec<Body>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bodies: Vec::new(),
        }
    }

    pub fn has_bodies(&self) -> bool {
        !self.bodies.is_empty()
    }
}

/// A positioned instance of a component within the assembly
///
/// Named independently of the component it references. Child occurrences form
/// the sub-assembly below this instance.
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub name: String,
    pub component: ComponentId,
    pub children: Vec<Occurrence>,
}

impl Occurrence {
    pub fn new(name: impl Into<String>, component: ComponentId) -> Self {
        Self {
            name: name.into(),
            component,
            children: Vec::new(),
        }
    }

    /// Attach a child occurrence (sub-assembly instance)
    pub fn with_child(mut self, child: Occurrence) -> Self {
        self.children.push(child);
        self
    }
}

/// Root object of an active design: component arena plus occurrence tree
#[derive(Debug, Clone)]
pub struct Design {
    root: ComponentId,
    components: Vec<Component>,
    occurrences: Vec<Occurrence>,
}

impl Design {
    /// The design name is the root component's name
    pub fn name(&self) -> &str {
        &self.components[self.root.0].name
    }

    pub fn root_id(&self) -> ComponentId {
        self.root
    }

    pub fn root_component(&self) -> &Component {
        &self.components[self.root.0]
    }

    /// All unique component definitions, root included
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    /// Direct child occurrences of the root component
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Every occurrence under the root, recursively, in preorder
    pub fn all_occurrences(&self) -> Vec<&Occurrence> {
        let mut flattened = Vec::new();
        for occurrence in &self.occurrences {
            collect_occurrences(occurrence, &mut flattened);
        }
        flattened
    }
}

fn collect_occurrences<'a>(occurrence: &'a Occurrence, out: &mut Vec<&'a Occurrence>) {
    out.push(occurrence);
    for child in &occurrence.children {
        collect_occurrences(child, out);
    }
}

/// Builder used by hosts (and tests) to assemble a [`Design`]
///
/// The root component is created up front; every other component id is handed
/// out by [`DesignBuilder::add_component`], so occurrence references stay valid.
#[derive(Debug)]
pub struct DesignBuilder {
    components: Vec<Component>,
    occurrences: Vec<Occurrence>,
}

impl DesignBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            components: vec![Component::new(root_name)],
            occurrences: Vec::new(),
        }
    }

    pub fn root(&self) -> ComponentId {
        ComponentId(0)
    }

    pub fn add_component(&mut self, name: impl Into<String>) -> ComponentId {
        self.components.push(Component::new(name));
        ComponentId(self.components.len() - 1)
    }

    pub fn add_body(&mut self, component: ComponentId, name: impl Into<String>) -> &mut Self {
        if let Some(component) = self.components.get_mut(component.0) {
            component.bodies.push(Body { name: name.into() });
        }
        self
    }

    /// Place an occurrence (with any nested children) under the root
    pub fn add_occurrence(&mut self, occurrence: Occurrence) -> &mut Self {
        self.occurrences.push(occurrence);
        self
    }

    pub fn build(self) -> Design {
        Design {
            root: ComponentId(0),
            components: self.components,
            occurrences: self.occurrences,
        }
    }
}
