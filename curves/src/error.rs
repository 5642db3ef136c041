/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while creating a curve from a list of points
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum CurveError {
    /// A curve was created from a slice with the wrong number of control points
    WrongNumberOfPoints { expected: usize, actual: usize },
}

///
/// Errors that can occur while creating a path component from its points and element orders
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathComponentError {
    /// A component needs at least one element (or a single order 0 'element' for a point)
    EmptyOrders,

    /// The number of points doesn't match the number required by the orders of the elements
    PointCountMismatch { expected: usize, actual: usize },

    /// An element order was not between 0 (a point) and 3 (a cubic curve)
    InvalidOrder(usize),
}

///
/// Errors that can occur while decoding the binary representation of a path
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathDataError {
    /// The data doesn't start with the expected magic number
    BadMagicNumber,

    /// The data ended before all of the commands or points were read
    Truncated,

    /// A command byte was not one of the known commands
    InvalidCommand(u8),

    /// The commands describe a component that isn't valid (eg, an element with no start point)
    InvalidComponent(PathComponentError),
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurveError::WrongNumberOfPoints { expected, actual } => {
                write!(f, "expected {} control points but found {}", expected, actual)
            }
        }
    }
}

impl fmt::Display for PathComponentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathComponentError::EmptyOrders => write!(f, "a path component needs at least one element"),
            PathComponentError::PointCountMismatch { expected, actual } => {
                write!(f, "the element orders need {} points but {} were supplied", expected, actual)
            }
            PathComponentError::InvalidOrder(order) => write!(f, "a path element can't have order {}", order),
        }
    }
}

impl fmt::Display for PathDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathDataError::BadMagicNumber => write!(f, "path data has an invalid magic number"),
            PathDataError::Truncated => write!(f, "path data ended unexpectedly"),
            PathDataError::InvalidCommand(command) => write!(f, "path data contains an unknown command ({})", command),
            PathDataError::InvalidComponent(err) => write!(f, "path data contains an invalid component: {}", err),
        }
    }
}

impl Error for CurveError {}
impl Error for PathComponentError {}
impl Error for PathDataError {}
