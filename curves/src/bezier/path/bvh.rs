/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// The type of a node in a bounding volume hierarchy
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum BvhNodeType {
    /// A leaf node, holding the bounding box of a single element
    Leaf(usize),

    /// An internal node, covering the elements in the (inclusive) range `start..=end`
    Internal { start: usize, end: usize },
}

///
/// A node passed to the callback of `BoundingVolumeHierarchy::visit()`
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BvhNode {
    pub bounding_box: Bounds<Coord2>,
    pub node_type: BvhNodeType,
}

///
/// A complete binary tree of bounding boxes, built over an ordered list of element boxes
///
/// The tree is stored in an array in the same way as a binary heap: the children of node `i` are at
/// `2i+1` and `2i+2`. There are `n-1` internal nodes followed by `n` leaves. The leaves are arranged so
/// that reading them left to right gives the elements in order, which means each internal node covers
/// a contiguous range of elements.
///
#[derive(Clone, Debug)]
pub struct BoundingVolumeHierarchy {
    /// The bounding box of every node, internal nodes first
    boxes: Vec<Bounds<Coord2>>,

    /// The number of elements (leaves) in the tree
    element_count: usize,

    /// Index of the first leaf in the bottom row of the tree
    last_row_index: usize,
}

#[inline]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right(index: usize) -> usize {
    2 * index + 2
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

///
/// The smallest power of two greater than or equal to a value
///
fn round_up_power_of_two(value: usize) -> usize {
    let mut result = 1;
    while result < value {
        result <<= 1;
    }
    result
}

#[inline]
fn is_leaf(node_index: usize, element_count: usize) -> bool {
    node_index + 1 >= element_count
}

fn leaf_node_index_to_element_index(node_index: usize, element_count: usize, last_row_index: usize) -> usize {
    test_assert!(is_leaf(node_index, element_count));

    if node_index >= last_row_index {
        node_index - last_row_index
    } else {
        // Leaves in the row above the last one hold the final elements
        node_index + element_count - last_row_index
    }
}

fn element_index_to_node_index(element_index: usize, element_count: usize, last_row_index: usize) -> usize {
    test_assert!(element_index < element_count);

    let node_index = element_index + last_row_index;
    if node_index + 1 >= 2 * element_count {
        node_index - element_count
    } else {
        node_index
    }
}

impl BoundingVolumeHierarchy {
    ///
    /// Builds the hierarchy for a list of element bounding boxes
    ///
    pub fn new(element_boxes: Vec<Bounds<Coord2>>) -> BoundingVolumeHierarchy {
        let element_count = element_boxes.len();
        if element_count == 0 {
            return BoundingVolumeHierarchy {
                boxes: vec![],
                element_count: 0,
                last_row_index: 0,
            };
        }

        let internal_count = element_count - 1;

        let mut last_row_index = 0;
        while last_row_index < internal_count {
            last_row_index = left(last_row_index);
        }

        let mut boxes = vec![Bounds::empty(); element_count + internal_count];
        for node_index in internal_count..(element_count + internal_count) {
            let element_index = leaf_node_index_to_element_index(node_index, element_count, last_row_index);
            boxes[node_index] = element_boxes[element_index];
        }

        // Internal nodes are the union of their children, so are built from the bottom up
        for node_index in (0..internal_count).rev() {
            boxes[node_index] = boxes[left(node_index)].union_bounds(boxes[right(node_index)]);
        }

        BoundingVolumeHierarchy {
            boxes,
            element_count,
            last_row_index,
        }
    }

    ///
    /// The number of elements covered by this hierarchy
    ///
    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    ///
    /// The bounding box of every element in the hierarchy
    ///
    pub fn bounding_box(&self) -> Bounds<Coord2> {
        self.boxes.first().copied().unwrap_or_else(Bounds::empty)
    }

    ///
    /// The bounding box of a single element
    ///
    pub fn bounding_box_for_element(&self, element_index: usize) -> Bounds<Coord2> {
        self.boxes[element_index_to_node_index(element_index, self.element_count, self.last_row_index)]
    }

    fn node_type(&self, node_index: usize, max_leaves_in_subtree: usize) -> BvhNodeType {
        let element_count = self.element_count;
        let last_row_index = self.last_row_index;

        if is_leaf(node_index, element_count) {
            BvhNodeType::Leaf(leaf_node_index_to_element_index(node_index, element_count, last_row_index))
        } else {
            // The first and last leaves this node would have if the bottom row were full
            let node_count = 2 * element_count - 1;
            let mut start = max_leaves_in_subtree * (node_index + 1) - 1;
            let mut end = start + max_leaves_in_subtree - 1;

            // Leaves missing from the bottom row are replaced by their parent in the row above
            if end >= node_count {
                end = parent(end);
            }
            if start >= node_count {
                start = parent(start);
            }

            BvhNodeType::Internal {
                start: leaf_node_index_to_element_index(start, element_count, last_row_index),
                end: leaf_node_index_to_element_index(end, element_count, last_row_index),
            }
        }
    }

    ///
    /// Visits the nodes of the tree depth-first, passing each node and its depth to the callback
    ///
    /// The children of a node are only visited if the callback returns true for that node.
    ///
    pub fn visit<VisitFn: FnMut(&BvhNode, usize) -> bool>(&self, mut callback: VisitFn) {
        if self.element_count == 0 {
            return;
        }

        self.visit_node(0, 0, round_up_power_of_two(self.element_count), &mut callback);
    }

    fn visit_node<VisitFn: FnMut(&BvhNode, usize) -> bool>(
        &self,
        node_index: usize,
        depth: usize,
        max_leaves_in_subtree: usize,
        callback: &mut VisitFn,
    ) {
        let node = BvhNode {
            bounding_box: self.boxes[node_index],
            node_type: self.node_type(node_index, max_leaves_in_subtree),
        };

        if !callback(&node, depth) {
            return;
        }

        if let BvhNodeType::Internal { .. } = node.node_type {
            let child_max_leaves = max_leaves_in_subtree / 2;
            self.visit_node(left(node_index), depth + 1, child_max_leaves, callback);
            self.visit_node(right(node_index), depth + 1, child_max_leaves, callback);
        }
    }

    ///
    /// Calls the callback with every pair of element indexes `(i, j)` with `i <= j` whose bounding boxes
    /// overlap. Every element is paired with itself.
    ///
    pub fn enumerate_self_intersections<PairFn: FnMut(usize, usize)>(&self, mut callback: PairFn) {
        if self.element_count == 0 {
            return;
        }

        self.self_intersections_below(0, &mut callback);
    }

    fn self_intersections_below<PairFn: FnMut(usize, usize)>(&self, node_index: usize, callback: &mut PairFn) {
        if is_leaf(node_index, self.element_count) {
            let element_index = leaf_node_index_to_element_index(node_index, self.element_count, self.last_row_index);
            callback(element_index, element_index);
        } else {
            let (l, r) = (left(node_index), right(node_index));

            self.self_intersections_below(l, callback);
            self.intersections_between(self, l, r, callback);
            self.self_intersections_below(r, callback);
        }
    }

    ///
    /// Calls the callback with every pair of element indexes (one from this hierarchy, one from the other)
    /// whose bounding boxes overlap
    ///
    pub fn enumerate_intersections<PairFn: FnMut(usize, usize)>(&self, other: &BoundingVolumeHierarchy, mut callback: PairFn) {
        if self.element_count == 0 || other.element_count == 0 {
            return;
        }

        self.intersections_between(other, 0, 0, &mut callback);
    }

    fn intersections_between<PairFn: FnMut(usize, usize)>(
        &self,
        other: &BoundingVolumeHierarchy,
        index1: usize,
        index2: usize,
        callback: &mut PairFn,
    ) {
        if !self.boxes[index1].overlaps(&other.boxes[index2]) {
            return;
        }

        let leaf1 = is_leaf(index1, self.element_count);
        let leaf2 = is_leaf(index2, other.element_count);

        match (leaf1, leaf2) {
            (true, true) => {
                let element1 = leaf_node_index_to_element_index(index1, self.element_count, self.last_row_index);
                let element2 = leaf_node_index_to_element_index(index2, other.element_count, other.last_row_index);
                callback(element1, element2);
            }

            (true, false) => {
                self.intersections_between(other, index1, left(index2), callback);
                self.intersections_between(other, index1, right(index2), callback);
            }

            (false, true) => {
                self.intersections_between(other, left(index1), index2, callback);
                self.intersections_between(other, right(index1), index2, callback);
            }

            (false, false) => {
                self.intersections_between(other, left(index1), left(index2), callback);
                self.intersections_between(other, left(index1), right(index2), callback);
                self.intersections_between(other, right(index1), left(index2), callback);
                self.intersections_between(other, right(index1), right(index2), callback);
            }
        }
    }
}
