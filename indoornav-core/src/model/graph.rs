//! Graph store for a single building map

use std::collections::BTreeSet;

use geo::Coord;
use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, trace};
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;

use super::floor::floor_name;
use super::{Edge, Passage, Vertex, VertexType};
use crate::{EdgeId, Error, Meters, VertexId, geo_math};

/// Vertices keyed by unique name, connected by weighted edges.
///
/// Edges are always stored as reciprocal directed pairs with equal weight
/// and name, so the logical connection is undirected.
#[derive(Debug, Clone, Default)]
pub struct BuildingGraph {
    name: String,
    pub(crate) graph: StableDiGraph<Vertex, Passage>,
    index: HashMap<String, VertexId>,
}

impl BuildingGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: StableDiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Map name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges (twice the number of connections)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Insert a vertex with no edges
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertex`] if the name is already taken
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<VertexId, Error> {
        if self.index.contains_key(vertex.name()) {
            return Err(Error::DuplicateVertex(vertex.name().to_string()));
        }
        let name = vertex.name().to_string();
        let id = self.graph.add_node(vertex);
        self.index.insert(name, id);
        Ok(id)
    }

    /// Connect two existing vertices in both directions
    ///
    /// # Errors
    ///
    /// Fails if either vertex is missing or the weight is negative or not finite
    pub fn add_edge(
        &mut self,
        a: &str,
        b: &str,
        weight: Meters,
        name: impl Into<String>,
    ) -> Result<(), Error> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }
        let a = self.require(a)?;
        let b = self.require(b)?;
        self.insert_pair(a, b, Passage::new(weight, name));
        Ok(())
    }

    /// Connect two existing vertices, weighting the edge by their distance
    pub fn add_measured_edge(
        &mut self,
        a: &str,
        b: &str,
        name: impl Into<String>,
    ) -> Result<Meters, Error> {
        let weight = geo_math::distance(self.require_vertex(a)?, self.require_vertex(b)?);
        self.add_edge(a, b, weight, name)?;
        Ok(weight)
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.graph.node_weight(id)
    }

    pub fn get_vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertex_id(name).and_then(|id| self.vertex(id))
    }

    /// Outgoing edges of a vertex; empty when the vertex is unknown
    pub fn get_edges(&self, name: &str) -> Vec<Edge<'_>> {
        self.vertex_id(name)
            .map(|id| self.edges_from(id).collect())
            .unwrap_or_default()
    }

    pub fn edges_from(&self, id: VertexId) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.graph.edges(id).filter_map(move |e| self.edge(e.id()))
    }

    pub fn edge(&self, id: EdgeId) -> Option<Edge<'_>> {
        let (source, destination) = self.graph.edge_endpoints(id)?;
        let passage = self.graph.edge_weight(id)?;
        Some(Edge {
            id,
            source: self.graph.node_weight(source)?,
            destination: self.graph.node_weight(destination)?,
            weight: passage.weight,
            name: &passage.name,
            spur: passage.spur,
        })
    }

    /// Every directed edge in the graph
    pub fn get_all_edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.graph.edge_indices().filter_map(move |id| self.edge(id))
    }

    pub fn get_all_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.graph.node_weights()
    }

    /// Names users may pick as a destination, sorted
    pub fn get_searchable_names(&self) -> Vec<String> {
        self.graph
            .node_weights()
            .filter(|v| v.kind().is_searchable())
            .map(|v| v.name().to_string())
            .sorted()
            .collect()
    }

    /// Distinct floors present in the map, lowest first, in ordinal form
    pub fn get_floor_names(&self) -> Vec<String> {
        self.graph
            .node_weights()
            .map(Vertex::floor)
            .unique()
            .sorted()
            .map(floor_name)
            .collect()
    }

    /// Corridor and stair names; spurs to attached places are left out
    pub fn get_edge_names(&self) -> BTreeSet<String> {
        self.graph
            .edge_weights()
            .filter(|passage| !passage.spur)
            .map(|passage| passage.name.clone())
            .collect()
    }

    /// Lightest direct edge weight from `a` to `b`
    pub fn weight(&self, a: &str, b: &str) -> Option<Meters> {
        let a = self.vertex_id(a)?;
        let b = self.vertex_id(b)?;
        self.graph
            .edges(a)
            .filter(|e| e.target() == b)
            .map(|e| e.weight().weight)
            .min_by(f64::total_cmp)
    }

    /// Split an edge at the point closest to `vertex` and attach the vertex there.
    ///
    /// A new [`VertexType::Connection`] is placed at the projection of the
    /// vertex onto the edge, clamped to the segment. The original reciprocal
    /// pair is replaced by two halves carrying the same name, and the
    /// connection is linked to `vertex` by a spur named after it.
    ///
    /// # Errors
    ///
    /// Fails if the vertex or the edge does not exist
    pub fn connect_vertex_to_edge(&mut self, vertex: &str, edge: EdgeId) -> Result<VertexId, Error> {
        let target = self.require(vertex)?;
        let (source, destination) = self.graph.edge_endpoints(edge).ok_or(Error::EdgeNotFound)?;
        let edge_name = self.graph[edge].name.clone();

        let start = &self.graph[source];
        let end = &self.graph[destination];
        let projected = project(self.graph[target].coord(), start.coord(), end.coord());
        if projected.is_none() {
            debug!("Edge '{edge_name}' has zero length, attaching '{vertex}' at its source");
        }
        let point = projected.unwrap_or_else(|| start.coord());

        let connection = Vertex::new(
            self.unique_name(&format!("{vertex} @ {edge_name}")),
            VertexType::Connection,
            point.y,
            point.x,
            start.floor(),
        );

        self.remove_pair(edge, source, destination);
        let connection = self.add_vertex(connection)?;

        let first = geo_math::distance(&self.graph[source], &self.graph[connection]);
        let second = geo_math::distance(&self.graph[connection], &self.graph[destination]);
        let spur = geo_math::distance(&self.graph[connection], &self.graph[target]);

        self.insert_pair(source, connection, Passage::new(first, edge_name.clone()));
        self.insert_pair(connection, destination, Passage::new(second, edge_name.clone()));
        self.insert_pair(connection, target, Passage::spur(spur, vertex));

        debug!("Attached '{vertex}' to '{edge_name}' ({first:.1} m + {second:.1} m, spur {spur:.1} m)");
        Ok(connection)
    }

    /// Attach `vertex` to the closest segment among the edges named `edge_name`.
    ///
    /// Returns `Ok(None)` when no edge carries that name.
    pub fn connect_vertex_to_edge_by_name(
        &mut self,
        vertex: &str,
        edge_name: &str,
    ) -> Result<Option<VertexId>, Error> {
        let position = self.require_vertex(vertex)?.coord();

        // one representative per reciprocal pair; a self-loop pair offers both
        let candidates: Vec<EdgeId> = self
            .graph
            .edge_indices()
            .filter(|&id| !self.graph[id].spur && self.graph[id].name == edge_name)
            .filter(|&id| {
                self.graph
                    .edge_endpoints(id)
                    .is_some_and(|(s, d)| s.index() <= d.index())
            })
            .collect();

        let chosen = match candidates.as_slice() {
            [] => {
                debug!("No edge named '{edge_name}', '{vertex}' left unattached");
                return Ok(None);
            }
            [single] => *single,
            many => many
                .iter()
                .copied()
                .map(|id| (id, self.projection_distance(position, id)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(id, _)| id)
                .ok_or(Error::EdgeNotFound)?,
        };

        self.connect_vertex_to_edge(vertex, chosen).map(Some)
    }

    /// Remove a vertex together with all of its edges
    pub fn remove_vertex(&mut self, name: &str) -> Option<Vertex> {
        let id = self.index.remove(name)?;
        self.graph.remove_node(id)
    }

    /// Change a vertex name, keeping its edges
    ///
    /// # Errors
    ///
    /// Fails if `old` is missing or `new` is already taken
    pub fn rename_vertex(&mut self, old: &str, new: &str) -> Result<(), Error> {
        if old == new {
            return self.require(old).map(|_| ());
        }
        if self.index.contains_key(new) {
            return Err(Error::DuplicateVertex(new.to_string()));
        }
        let id = self.index.remove(old).ok_or_else(|| Error::VertexNotFound(old.to_string()))?;
        self.graph[id].set_name(new.to_string());
        self.index.insert(new.to_string(), id);
        Ok(())
    }

    /// Check that every edge has a reciprocal twin with the same weight and name
    pub fn validate(&self) -> Result<(), Error> {
        for edge in self.get_all_edges() {
            let (source, destination) = self
                .graph
                .edge_endpoints(edge.id)
                .ok_or(Error::EdgeNotFound)?;
            let reciprocal = self.graph.edges(destination).any(|e| {
                e.target() == source
                    && e.id() != edge.id
                    && e.weight().name == edge.name
                    && e.weight().spur == edge.spur
                    && (e.weight().weight - edge.weight).abs() <= f64::EPSILON
            });
            if !reciprocal {
                return Err(Error::InvalidData(format!(
                    "edge '{}' from '{}' to '{}' has no reciprocal",
                    edge.name, edge.source, edge.destination
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn insert_directed(&mut self, a: VertexId, b: VertexId, passage: Passage) -> EdgeId {
        self.graph.add_edge(a, b, passage)
    }

    fn insert_pair(&mut self, a: VertexId, b: VertexId, passage: Passage) {
        trace!("Adding edge '{}' ({:.2} m)", passage.name, passage.weight);
        self.graph.add_edge(a, b, passage.clone());
        self.graph.add_edge(b, a, passage);
    }

    fn remove_pair(&mut self, edge: EdgeId, source: VertexId, destination: VertexId) {
        let Some(passage) = self.graph.remove_edge(edge) else {
            return;
        };
        let twin = self
            .graph
            .edges(destination)
            .find(|e| e.target() == source && *e.weight() == passage)
            .map(|e| e.id());
        if let Some(twin) = twin {
            self.graph.remove_edge(twin);
        }
    }

    fn projection_distance(&self, position: Coord<f64>, edge: EdgeId) -> f64 {
        let Some((s, d)) = self.graph.edge_endpoints(edge) else {
            return f64::INFINITY;
        };
        let start = self.graph[s].coord();
        let closest = project(position, start, self.graph[d].coord()).unwrap_or(start);
        let delta = closest - position;
        delta.x.hypot(delta.y)
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.index.contains_key(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{base} #{n}"))
            .find(|candidate| !self.index.contains_key(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    fn require(&self, name: &str) -> Result<VertexId, Error> {
        self.vertex_id(name)
            .ok_or_else(|| Error::VertexNotFound(name.to_string()))
    }

    fn require_vertex(&self, name: &str) -> Result<&Vertex, Error> {
        self.get_vertex_by_name(name)
            .ok_or_else(|| Error::VertexNotFound(name.to_string()))
    }
}

/// Closest point to `p` on the segment `s..d`, `None` if the segment has no length
fn project(p: Coord<f64>, s: Coord<f64>, d: Coord<f64>) -> Option<Coord<f64>> {
    let dir = d - s;
    let len2 = dir.x * dir.x + dir.y * dir.y;
    if len2 == 0.0 {
        return None;
    }
    let rel = p - s;
    let u = ((rel.x * dir.x + rel.y * dir.y) / len2).clamp(0.0, 1.0);
    Some(Coord {
        x: s.x + u * dir.x,
        y: s.y + u * dir.y,
    })
}
