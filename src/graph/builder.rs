//! Schema graph construction
//!
//! Materializes the visible entities and the relations drawn between them as
//! a petgraph graph, applying the theme's edge policy on the way.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Category, Entity, EntitySet, Relation, RelationKind};
use crate::common::ConfigBuilder;
use crate::config::Theme;
use crate::constants::dot;
use crate::error::GraphqlVizError;
use crate::introspection::FieldDescriptor;

/// Visible entities and the relationships drawn between them
///
/// Nodes are added in emission order and edges in the order they are written,
/// so iterating the underlying graph reproduces the output order exactly.
pub struct SchemaGraph<'a> {
    graph: DiGraph<&'a Entity, Relation>,
    node_indices: HashMap<&'a str, NodeIndex>,
}

impl<'a> SchemaGraph<'a> {
    pub fn node(&self, name: &str) -> Option<&'a Entity> {
        self.node_indices.get(name).map(|&idx| self.graph[idx])
    }

    pub fn nodes_in(&self, category: Category) -> impl Iterator<Item = &'a Entity> + '_ {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx])
            .filter(move |entity| entity.category == category)
    }

    /// Edges as (source, target, relation) in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&'a Entity, &'a Entity, &Relation)> + '_ {
        self.graph.edge_indices().filter_map(|edge| {
            let (source, target) = self.graph.edge_endpoints(edge)?;
            let relation = self.graph.edge_weight(edge)?;
            Some((self.graph[source], self.graph[target], relation))
        })
    }
}

/// Builder for the schema graph
///
/// Applies the theme's edge policy: hidden categories, self edges, anchors,
/// labels and colors.
pub struct SchemaGraphBuilder<'t> {
    theme: &'t Theme,
}

impl<'t> SchemaGraphBuilder<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    fn header_port(&self) -> Option<String> {
        self.theme
            .anchor
            .header
            .then(|| dot::HEADER_PORT.to_string())
    }

    fn category_color(&self, entity: &Entity) -> &'t str {
        &entity.category.theme(self.theme).color
    }

    fn allows(&self, owner: &Entity, other: &Entity) -> bool {
        self.theme.edges_to_self || owner.name != other.name
    }

    pub fn build<'a>(&self, entities: &'a EntitySet) -> Result<SchemaGraph<'a>, GraphqlVizError> {
        let mut schema_graph = SchemaGraph {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        };

        for entity in entities.iter() {
            if entity.category.is_hidden(self.theme) {
                continue;
            }
            let idx = schema_graph.graph.add_node(entity);
            schema_graph.node_indices.insert(entity.name.as_str(), idx);
        }

        for entity in entities.iter() {
            if entity.category == Category::Enums {
                continue;
            }
            let Some(&owner_idx) = schema_graph.node_indices.get(entity.name.as_str()) else {
                continue;
            };

            for field in entity.fields() {
                self.add_reference(&mut schema_graph, entity, owner_idx, field)?;
                if !self.theme.field.noargs {
                    self.add_inputs(&mut schema_graph, entity, owner_idx, field)?;
                }
            }

            self.add_possible_types(&mut schema_graph, entity, owner_idx)?;
        }

        Ok(schema_graph)
    }

    fn add_reference(
        &self,
        schema_graph: &mut SchemaGraph<'_>,
        owner: &Entity,
        owner_idx: NodeIndex,
        field: &FieldDescriptor,
    ) -> Result<(), GraphqlVizError> {
        let Some(&target_idx) = schema_graph.node_indices.get(field.type_name.as_str()) else {
            return Ok(());
        };
        let target = schema_graph.graph[target_idx];
        if !self.allows(owner, target) {
            return Ok(());
        }

        let relation = Relation::builder()
            .with_kind(RelationKind::Reference)
            .with_from_port(Some(row_port(&field.name)))
            .with_to_port(self.header_port())
            .with_color(self.category_color(target))
            .build()?;
        schema_graph.graph.add_edge(owner_idx, target_idx, relation);
        Ok(())
    }

    fn add_inputs(
        &self,
        schema_graph: &mut SchemaGraph<'_>,
        owner: &Entity,
        owner_idx: NodeIndex,
        field: &FieldDescriptor,
    ) -> Result<(), GraphqlVizError> {
        for arg in &field.args {
            let Some(&arg_idx) = schema_graph.node_indices.get(arg.type_name.as_str()) else {
                continue;
            };
            let arg_type = schema_graph.graph[arg_idx];
            if !self.allows(owner, arg_type) {
                continue;
            }

            let to_port = if self.theme.anchor.input {
                Some(format!("{}:{}", row_port(&field.name), dot::ROW_COMPASS))
            } else {
                self.header_port()
            };
            let color = if self.theme.inputs.hide {
                self.category_color(arg_type)
            } else {
                &self.theme.inputs.color
            };

            let relation = Relation::builder()
                .with_kind(RelationKind::Input)
                .with_from_port(self.header_port())
                .with_to_port(to_port)
                .with_color(color)
                .with_label(&self.theme.edge_labels.input)
                .with_weight(dot::INPUT_EDGE_WEIGHT)
                .build()?;
            schema_graph.graph.add_edge(arg_idx, owner_idx, relation);
        }
        Ok(())
    }

    fn add_possible_types(
        &self,
        schema_graph: &mut SchemaGraph<'_>,
        owner: &Entity,
        owner_idx: NodeIndex,
    ) -> Result<(), GraphqlVizError> {
        let label = match owner.category {
            Category::Unions => &self.theme.edge_labels.union,
            _ => &self.theme.edge_labels.interface,
        };

        for possible_type in &owner.possible_types {
            let Some(&target_idx) = schema_graph.node_indices.get(possible_type.as_str()) else {
                continue;
            };
            let target = schema_graph.graph[target_idx];
            if !self.allows(owner, target) {
                continue;
            }

            let relation = Relation::builder()
                .with_kind(RelationKind::PossibleType)
                .with_from_port(self.header_port())
                .with_to_port(self.header_port())
                .with_color(self.category_color(target))
                .with_label(label)
                .build()?;
            schema_graph.graph.add_edge(owner_idx, target_idx, relation);
        }
        Ok(())
    }
}

pub fn row_port(field_name: &str) -> String {
    format!("{field_name}{}", dot::ROW_PORT_SUFFIX)
}
