/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # The augmented graph used to perform boolean operations on paths
//!
//! Each path is converted into a set of circular doubly-linked lists of vertices, one for each component,
//! with a vertex at the start of every element. The points where the two paths meet are then inserted
//! into both lists, and the two vertices created for each intersection are linked to each other as
//! 'neighbours'.
//!
//! Every edge between two vertices is classified as internal, external or coincident with respect to the
//! other path, which in turn makes some of the intersections 'entry' and 'exit' points. A boolean operation
//! is performed by walking along the edges and switching to the other path at the right kind of crossing.
//!
//! Vertices are stored in a single arena and refer to each other by `VertexId`.
//!

use super::component::*;
use super::location::*;
use super::path::*;
use super::winding::*;
use crate::bezier::cubic::*;
use crate::bezier::curve::*;
use crate::bezier::line_segment::*;
use crate::bezier::quadratic::*;
use crate::consts::*;
use crate::geo::*;

use log::{trace, warn};

///
/// The boolean operations that can be performed with an augmented graph
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BooleanPathOperation {
    Union,
    Subtract,
    Intersect,
    RemoveCrossings,
}

/// Identifies a vertex in an augmented graph
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct VertexId(pub usize);

///
/// How an edge relates to the other path in the graph
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EdgeType {
    /// The edge runs along the edge of the other path
    Coincident,

    /// The edge is inside the other path
    Internal,

    /// The edge is outside the other path
    External,
}

///
/// The control points of the curve between a vertex and the next one
///
#[derive(Copy, Clone, PartialEq, Debug)]
enum VertexTransition {
    Line,
    Quadratic(Coord2),
    Cubic(Coord2, Coord2),
}

impl VertexTransition {
    fn from_curve(curve: &Curve) -> VertexTransition {
        match curve {
            Curve::Line(_) => VertexTransition::Line,
            Curve::Quadratic(quadratic) => VertexTransition::Quadratic(quadratic.p1),
            Curve::Cubic(cubic) => VertexTransition::Cubic(cubic.p1, cubic.p2),
        }
    }

    fn curve_between(&self, start: Coord2, end: Coord2) -> Curve {
        match self {
            VertexTransition::Line => Curve::Line(LineSegment::new(start, end)),
            VertexTransition::Quadratic(control) => Curve::Quadratic(QuadraticCurve::new(start, *control, end)),
            VertexTransition::Cubic(control1, control2) => Curve::Cubic(CubicCurve::new(start, *control1, *control2, end)),
        }
    }
}

///
/// Extra data stored for the vertices created at intersections
///
#[derive(Copy, Clone, PartialEq, Debug)]
struct IntersectionInfo {
    /// The 't' value along the original element, if this vertex splits an element
    split_t: Option<f64>,

    /// The matching vertex on the other path
    neighbor: Option<VertexId>,
}

///
/// A vertex in the augmented graph
///
#[derive(Clone, Debug)]
pub struct Vertex {
    location: Coord2,
    intersection: Option<IntersectionInfo>,
    forward_edge: EdgeType,

    next: VertexId,
    previous: VertexId,
    next_transition: VertexTransition,
}

impl Vertex {
    #[inline]
    pub fn location(&self) -> Coord2 {
        self.location
    }

    ///
    /// The kind of the edge from this vertex to the next one
    ///
    #[inline]
    pub fn forward_edge(&self) -> EdgeType {
        self.forward_edge
    }

    ///
    /// True if this vertex was created at an intersection between the paths
    ///
    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.intersection.is_some()
    }

    ///
    /// The vertex at the same point on the other path
    ///
    #[inline]
    pub fn neighbor(&self) -> Option<VertexId> {
        self.intersection.and_then(|intersection| intersection.neighbor)
    }

    #[inline]
    fn split_t(&self) -> Option<f64> {
        self.intersection.and_then(|intersection| intersection.split_t)
    }
}

///
/// The vertices for one path: for each component, the vertex at the start of each element
///
#[derive(Clone, Debug)]
struct PathLinkedList {
    components: Vec<Vec<VertexId>>,
}

///
/// Two paths converted to linked lists of vertices, with vertices added where they intersect
///
pub struct AugmentedGraph<'a> {
    path1: &'a Path,
    path2: &'a Path,
    operation: BooleanPathOperation,

    vertices: Vec<Vertex>,
    list1: PathLinkedList,

    /// The vertices for path2, or `None` if path1 is being compared against itself
    list2: Option<PathLinkedList>,
}

impl<'a> AugmentedGraph<'a> {
    ///
    /// Builds the graph for two paths and the intersections between them
    ///
    /// If `path1` and `path2` are the same object, the path is compared against itself (which is how
    /// crossings are removed).
    ///
    pub fn new(
        path1: &'a Path,
        path2: &'a Path,
        intersections: Vec<PathIntersection>,
        operation: BooleanPathOperation,
    ) -> AugmentedGraph<'a> {
        let comparing_against_self = std::ptr::eq(path1, path2);

        let mut graph = AugmentedGraph {
            path1,
            path2,
            operation,
            vertices: vec![],
            list1: PathLinkedList { components: vec![] },
            list2: None,
        };

        graph.list1 = graph.create_list(path1);
        if !comparing_against_self {
            graph.list2 = Some(graph.create_list(path2));
        }

        for intersection in intersections {
            let location1 = intersection.index_a;
            let location2 = intersection.index_b;
            let average_position = (path1.point_at(location1) + path2.point_at(location2)) * 0.5;

            let vertex1 = graph.add_vertex(average_position, true);
            let vertex2 = graph.add_vertex(average_position, true);
            graph.set_neighbor(vertex1, Some(vertex2));
            graph.set_neighbor(vertex2, Some(vertex1));

            graph.insert_intersection_vertex(false, vertex1, location1);
            graph.insert_intersection_vertex(true, vertex2, location2);
        }

        graph.classify_edges(false, comparing_against_self);
        if !comparing_against_self {
            graph.classify_edges(true, false);
        }

        graph
    }

    ///
    /// True if this graph is comparing a path against itself
    ///
    #[inline]
    fn comparing_against_self(&self) -> bool {
        self.list2.is_none()
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    #[inline]
    fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.0]
    }

    fn list(&self, second: bool) -> &PathLinkedList {
        match (second, &self.list2) {
            (true, Some(list2)) => list2,
            _ => &self.list1,
        }
    }

    fn list_mut(&mut self, second: bool) -> &mut PathLinkedList {
        match (second, &mut self.list2) {
            (true, Some(list2)) => list2,
            _ => &mut self.list1,
        }
    }

    fn path(&self, second: bool) -> &'a Path {
        if second {
            self.path2
        } else {
            self.path1
        }
    }

    fn add_vertex(&mut self, location: Coord2, is_intersection: bool) -> VertexId {
        let id = VertexId(self.vertices.len());
        let intersection = if is_intersection {
            Some(IntersectionInfo {
                split_t: None,
                neighbor: None,
            })
        } else {
            None
        };

        self.vertices.push(Vertex {
            location,
            intersection,
            forward_edge: EdgeType::External,
            next: id,
            previous: id,
            next_transition: VertexTransition::Line,
        });

        id
    }

    fn set_neighbor(&mut self, id: VertexId, neighbor: Option<VertexId>) {
        if let Some(intersection) = self.vertex_mut(id).intersection.as_mut() {
            intersection.neighbor = neighbor;
        }
    }

    fn set_next(&mut self, id: VertexId, next: VertexId, transition: VertexTransition) {
        let vertex = self.vertex_mut(id);
        vertex.next = next;
        vertex.next_transition = transition;
    }

    fn set_previous(&mut self, id: VertexId, previous: VertexId) {
        self.vertex_mut(id).previous = previous;
    }

    ///
    /// Creates the linked lists for the components of a path (which are treated as closed)
    ///
    fn create_list(&mut self, path: &Path) -> PathLinkedList {
        let components = path
            .components()
            .iter()
            .map(|component| self.create_component_list(component))
            .collect();

        PathLinkedList { components }
    }

    fn create_component_list(&mut self, component: &PathComponent) -> Vec<VertexId> {
        let element_count = component.number_of_elements();
        let elements = (0..element_count)
            .map(|index| self.add_vertex(component.start_point_of_element(index), false))
            .collect::<Vec<_>>();

        for index in 0..element_count {
            let this_vertex = elements[index];
            let next_vertex = elements[(index + 1) % element_count];
            let transition = VertexTransition::from_curve(&component.element(index));

            self.set_next(this_vertex, next_vertex, transition);
            self.set_previous(next_vertex, this_vertex);
        }

        elements
    }

    ///
    /// Inserts an intersection vertex at a location in one of the lists
    ///
    fn insert_intersection_vertex(&mut self, second: bool, vertex: VertexId, location: IndexedPathLocation) {
        let component_elements = &self.list(second).components[location.component_index];
        let element_count = component_elements.len();

        if location.t == 1.0 {
            // Replaces the vertex at the start of the next element
            let element_index = (location.element_index + 1) % element_count;
            self.replace_element_start(second, vertex, location.component_index, element_index);
        } else if location.t == 0.0 {
            self.replace_element_start(second, vertex, location.component_index, location.element_index);
        } else {
            let mut start = component_elements[location.element_index];
            loop {
                let next = self.vertex(start).next;
                match self.vertex(next).split_t() {
                    Some(split_t) if split_t < location.t => start = next,
                    _ => break,
                }
            }

            let mut end = self.vertex(start).next;
            while let Some(split_t) = self.vertex(end).split_t() {
                if split_t >= location.t {
                    break;
                }
                end = self.vertex(end).next;
            }

            let element = self
                .path(second)
                .element(location.component_index, location.element_index);
            self.insert_vertex_between(vertex, start, end, location.t, &element);
        }
    }

    fn replace_element_start(&mut self, second: bool, vertex: VertexId, component_index: usize, element_index: usize) {
        let replaced = self.list(second).components[component_index][element_index];

        // The replaced vertex might have been an intersection too: its neighbour loses its partner
        if let Some(old_neighbor) = self.vertex(replaced).neighbor() {
            self.set_neighbor(old_neighbor, None);
        }

        let replaced_vertex = self.vertex(replaced).clone();
        let previous = if replaced_vertex.previous == replaced { vertex } else { replaced_vertex.previous };
        let next = if replaced_vertex.next == replaced { vertex } else { replaced_vertex.next };

        self.set_previous(vertex, previous);
        self.set_next(vertex, next, replaced_vertex.next_transition);

        let previous_transition = self.vertex(previous).next_transition;
        self.set_next(previous, vertex, previous_transition);
        self.set_previous(next, vertex);

        self.list_mut(second).components[component_index][element_index] = vertex;
    }

    fn insert_vertex_between(&mut self, vertex: VertexId, start: VertexId, end: VertexId, t: f64, element: &Curve) {
        test_assert!(start != end);

        if let Some(intersection) = self.vertex_mut(vertex).intersection.as_mut() {
            intersection.split_t = Some(t);
        }

        let t0 = self.vertex(start).split_t().unwrap_or(0.0);
        let t1 = self.vertex(end).split_t().unwrap_or(1.0);
        let before = element.split_range(t0, t);
        let after = element.split_range(t, t1);

        self.set_previous(vertex, start);
        self.set_next(vertex, end, VertexTransition::from_curve(&after));
        self.set_next(start, vertex, VertexTransition::from_curve(&before));
        self.set_previous(end, vertex);
    }

    ///
    /// The curve from a vertex to the next one
    ///
    pub fn emit_next(&self, id: VertexId) -> Curve {
        let vertex = self.vertex(id);
        let next = self.vertex(vertex.next);

        vertex.next_transition.curve_between(vertex.location, next.location)
    }

    ///
    /// The curve from a vertex to the previous one
    ///
    pub fn emit_previous(&self, id: VertexId) -> Curve {
        self.emit_next(self.vertex(id).previous).reversed()
    }

    ///
    /// The kind of the edge that arrives at a vertex
    ///
    pub fn backward_edge(&self, id: VertexId) -> EdgeType {
        self.vertex(self.vertex(id).previous).forward_edge
    }

    ///
    /// True if following this vertex forwards moves from outside the other path to inside it
    ///
    pub fn is_entry(&self, id: VertexId) -> bool {
        self.vertex(id).forward_edge != EdgeType::External && self.backward_edge(id) == EdgeType::External
    }

    ///
    /// True if following this vertex forwards moves from inside the other path to outside it
    ///
    pub fn is_exit(&self, id: VertexId) -> bool {
        self.vertex(id).forward_edge == EdgeType::External && self.backward_edge(id) != EdgeType::External
    }

    ///
    /// True if this vertex and its neighbour are both entries or exits (so the paths really cross here,
    /// rather than just touching)
    ///
    pub fn is_crossing(&self, id: VertexId) -> bool {
        if !self.is_entry(id) && !self.is_exit(id) {
            return false;
        }

        match self.vertex(id).neighbor() {
            Some(neighbor) => self.is_entry(neighbor) || self.is_exit(neighbor),
            None => false,
        }
    }

    ///
    /// The vertices of a component, starting from a particular vertex
    ///
    fn component_vertices_from(&self, start: VertexId) -> Vec<VertexId> {
        let mut result = vec![start];
        let mut current = self.vertex(start).next;

        while current != start && result.len() <= self.vertices.len() {
            result.push(current);
            current = self.vertex(current).next;
        }

        result
    }

    ///
    /// Classifies the edges of one of the lists against the other path
    ///
    fn classify_edges(&mut self, second: bool, comparing_against_self: bool) {
        let other_path = if comparing_against_self { self.path1 } else { self.path(!second) };
        let fill_rule = if comparing_against_self { FillRule::Winding } else { FillRule::EvenOdd };

        for component_index in 0..self.list(second).components.len() {
            let first_vertex = self.list(second).components[component_index][0];
            let vertices = self.component_vertices_from(first_vertex);
            let first_intersection = vertices.iter().copied().find(|id| self.vertex(*id).neighbor().is_some());

            let start = match first_intersection {
                Some(start) => start,

                None => {
                    // Nothing crosses this component, so every edge is on the same side of the other path
                    let edge_type = if other_path.contains(self.vertex(first_vertex).location, fill_rule) {
                        EdgeType::Internal
                    } else {
                        EdgeType::External
                    };

                    for id in vertices {
                        self.vertex_mut(id).forward_edge = edge_type;
                    }
                    continue;
                }
            };

            for id in self.component_vertices_from(start) {
                let edge_type = if self.vertex(id).neighbor().is_none() {
                    // Edges keep the same classification until the next intersection
                    self.backward_edge(id)
                } else {
                    self.classify_edge_after(id, other_path, fill_rule, comparing_against_self)
                };

                self.vertex_mut(id).forward_edge = edge_type;
            }
        }
    }

    ///
    /// Classifies the edge following an intersection vertex by sampling the winding count either side of it
    ///
    fn classify_edge_after(&self, id: VertexId, other_path: &Path, fill_rule: FillRule, comparing_against_self: bool) -> EdgeType {
        let edge = self.emit_next(id);
        let point = edge.point_at(0.5);
        let normal = edge.normal_at(0.5);

        let winding_count1 = other_path.winding_count(point + normal * WINDING_SAMPLE_OFFSET, None);
        let winding_count2 = other_path.winding_count(point - normal * WINDING_SAMPLE_OFFSET, None);
        let contained1 = fill_rule.contains(winding_count1);
        let contained2 = fill_rule.contains(winding_count2);

        if comparing_against_self {
            if contained1 && contained2 {
                EdgeType::Internal
            } else {
                EdgeType::External
            }
        } else if winding_count1 == winding_count2 {
            if contained1 {
                EdgeType::Internal
            } else {
                EdgeType::External
            }
        } else {
            EdgeType::Coincident
        }
    }

    ///
    /// The indexes of the components of one of the paths that don't cross the other path anywhere
    ///
    fn non_crossing_components(&self, second: bool) -> Vec<usize> {
        self.list(second)
            .components
            .iter()
            .enumerate()
            .filter(|(_, elements)| {
                !self
                    .component_vertices_from(elements[0])
                    .into_iter()
                    .any(|id| self.is_crossing(id))
            })
            .map(|(index, _)| index)
            .collect()
    }

    ///
    /// A component that doesn't cross the other path, as it appears in the result
    ///
    /// Points where the paths touch stay in the result as extra vertices.
    ///
    fn non_crossing_result(&self, second: bool, component_index: usize) -> PathComponent {
        let original = &self.path(second).components()[component_index];
        let vertices = self.component_vertices_from(self.list(second).components[component_index][0]);

        if original.is_closed() && vertices.iter().any(|id| self.vertex(*id).is_intersection()) {
            let curves = vertices.into_iter().map(|id| self.emit_next(id)).collect::<Vec<_>>();
            PathComponent::from_curves(&curves)
        } else {
            original.clone()
        }
    }

    ///
    /// True if the result of the operation follows the edge after this vertex (rather than the edge before it)
    ///
    fn should_move_forwards(&self, id: VertexId, on_first_path: bool) -> bool {
        match self.operation {
            BooleanPathOperation::Union | BooleanPathOperation::RemoveCrossings => {
                let forward_edge = self.vertex(id).forward_edge;
                forward_edge == EdgeType::External
                    || (forward_edge == EdgeType::Coincident && self.backward_edge(id) == EdgeType::Internal)
            }

            BooleanPathOperation::Subtract => {
                if on_first_path {
                    self.is_exit(id)
                } else {
                    self.is_entry(id)
                }
            }

            BooleanPathOperation::Intersect => self.is_entry(id),
        }
    }

    ///
    /// All the vertices of one of the lists
    ///
    fn all_vertices(&self, second: bool) -> Vec<VertexId> {
        self.list(second)
            .components
            .iter()
            .flat_map(|elements| self.component_vertices_from(elements[0]))
            .collect()
    }

    ///
    /// Follows the graph from a crossing to build a component of the result
    ///
    /// Returns `None` if the graph turns out to be inconsistent or the walk doesn't return to where it started.
    ///
    fn follow_component(&self, start: VertexId, unvisited: &mut Vec<VertexId>) -> Option<Vec<Curve>> {
        // Each step visits a vertex, so a walk longer than this is going round in circles
        let max_steps = self.vertices.len() + 1;
        let mut steps = 0;

        let mut curves = vec![];
        let mut on_first_path = true;
        let mut vertex = start;

        loop {
            let moving_forwards = self.should_move_forwards(vertex, on_first_path);
            unvisited.retain(|id| *id != vertex);

            loop {
                if moving_forwards {
                    curves.push(self.emit_next(vertex));
                    vertex = self.vertex(vertex).next;
                } else {
                    curves.push(self.emit_previous(vertex));
                    vertex = self.vertex(vertex).previous;
                }

                steps += 1;
                if steps > max_steps {
                    return None;
                }

                if self.vertex(vertex).is_intersection()
                    && self.should_move_forwards(vertex, on_first_path) != moving_forwards
                {
                    break;
                }
            }

            unvisited.retain(|id| *id != vertex);
            vertex = self.vertex(vertex).neighbor()?;
            on_first_path = !on_first_path;

            if on_first_path && self.is_crossing(vertex) && !unvisited.contains(&vertex) && vertex != start {
                return None;
            }

            if vertex == start || self.vertex(vertex).neighbor() == Some(start) {
                return Some(curves);
            }
        }
    }

    ///
    /// Performs the boolean operation this graph was built for
    ///
    pub fn perform_operation(&self) -> Path {
        let non_crossing1 = self.non_crossing_components(false);
        let non_crossing2 = if self.comparing_against_self() {
            vec![]
        } else {
            self.non_crossing_components(true)
        };

        let (path1, path2) = (self.path1, self.path2);
        let inside = |path: &Path, second: bool, index: usize| {
            path.contains(self.path(second).components()[index].start_point(), FillRule::EvenOdd)
        };

        let keep1 = non_crossing1
            .into_iter()
            .filter(|index| match self.operation {
                BooleanPathOperation::RemoveCrossings => true,
                BooleanPathOperation::Union | BooleanPathOperation::Subtract => !inside(path2, false, *index),
                BooleanPathOperation::Intersect => inside(path2, false, *index),
            })
            .collect::<Vec<_>>();
        let keep2 = non_crossing2
            .into_iter()
            .filter(|index| match self.operation {
                BooleanPathOperation::RemoveCrossings => false,
                BooleanPathOperation::Union => !inside(path1, true, *index),
                BooleanPathOperation::Subtract | BooleanPathOperation::Intersect => inside(path1, true, *index),
            })
            .collect::<Vec<_>>();

        let mut components = keep1
            .into_iter()
            .map(|index| self.non_crossing_result(false, index))
            .chain(keep2.into_iter().map(|index| self.non_crossing_result(true, index)))
            .collect::<Vec<_>>();

        // Start with the crossings where the result moves forwards
        let crossings = self
            .all_vertices(false)
            .into_iter()
            .filter(|id| self.is_crossing(*id))
            .collect::<Vec<_>>();
        let mut unvisited = crossings
            .iter()
            .copied()
            .filter(|id| self.should_move_forwards(*id, true))
            .chain(crossings.iter().copied().filter(|id| !self.should_move_forwards(*id, true)))
            .collect::<Vec<_>>();

        while let Some(start) = unvisited.first().copied() {
            match self.follow_component(start, &mut unvisited) {
                Some(curves) if !curves.is_empty() => components.push(PathComponent::from_curves(&curves)),
                Some(_) => {}
                None => {
                    warn!(
                        "{:?}: could not follow the augmented graph from {:?}, dropping the component",
                        self.operation,
                        self.vertex(start).location
                    );
                    unvisited.retain(|id| *id != start);
                }
            }
        }

        trace!("{:?}: result has {} components", self.operation, components.len());
        Path::new(components)
    }
}
