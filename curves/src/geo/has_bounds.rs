/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bounding_box::*;
use super::geo::*;

///
/// Trait implemented by types that have a bounding box associated with them
///
pub trait HasBoundingBox: Geo {
    ///
    /// Returns the bounding box that encloses this item, in any bounding box representation
    ///
    fn get_bounding_box<Bounds: BoundingBox<Point = Self::Point>>(&self) -> Bounds;
}

///
/// Computes the combined bounding box of a set of items
///
pub fn bounds_of_items<'a, Item, Bounds>(items: impl IntoIterator<Item = &'a Item>) -> Bounds
where
    Item: 'a + HasBoundingBox,
    Bounds: BoundingBox<Point = Item::Point>,
{
    items
        .into_iter()
        .fold(Bounds::empty(), |bounds, item| bounds.union_bounds(item.get_bounding_box()))
}
