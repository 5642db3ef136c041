/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Binary serialization of paths
//!
//! The format is little-endian: a `u32` magic number, a `u32` command count, one `u8` per command and then
//! every point as a pair of `f64`s. Command `0` starts a new component (and reads its start point), commands
//! `1` to `3` add an element of that order (reading that many points).
//!

use super::component::*;
use super::path::*;
use crate::error::*;
use crate::geo::*;

/// Identifies data written in the first version of the path format
const MAGIC_NUMBER_VERSION_1: u32 = 1223013157;

/// Command that begins a new component
const START_COMPONENT_COMMAND: u8 = 0;

///
/// Reads values from the start of a byte slice
///
struct DataReader<'a> {
    data: &'a [u8],
}

impl<'a> DataReader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], PathDataError> {
        if self.data.len() < len {
            return Err(PathDataError::Truncated);
        }

        let (taken, remaining) = self.data.split_at(len);
        self.data = remaining;
        Ok(taken)
    }

    fn read_u32(&mut self) -> Result<u32, PathDataError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_f64(&mut self) -> Result<f64, PathDataError> {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.take(8)?);
        Ok(f64::from_le_bytes(bytes))
    }

    fn read_point(&mut self) -> Result<Coord2, PathDataError> {
        let x = self.read_f64()?;
        let y = self.read_f64()?;
        Ok(Coord2(x, y))
    }
}

impl Path {
    ///
    /// Serializes this path to bytes (see `from_data()` to read it back)
    ///
    pub fn data(&self) -> Vec<u8> {
        let components = self.components();
        let command_count = components.len() + components.iter().map(|component| component.number_of_elements()).sum::<usize>();
        let point_count = components.iter().map(|component| component.points().len()).sum::<usize>();

        let mut result = Vec::with_capacity(8 + command_count + 16 * point_count);
        result.extend_from_slice(&MAGIC_NUMBER_VERSION_1.to_le_bytes());
        result.extend_from_slice(&(command_count as u32).to_le_bytes());

        for component in components {
            result.push(START_COMPONENT_COMMAND);
            result.extend(component.orders().iter().map(|order| *order as u8));
        }

        for point in components.iter().flat_map(|component| component.points()) {
            result.extend_from_slice(&point.0.to_le_bytes());
            result.extend_from_slice(&point.1.to_le_bytes());
        }

        result
    }

    ///
    /// Reads a path from the bytes generated by `data()`
    ///
    pub fn from_data(data: &[u8]) -> Result<Path, PathDataError> {
        let mut reader = DataReader { data };

        if reader.read_u32()? != MAGIC_NUMBER_VERSION_1 {
            return Err(PathDataError::BadMagicNumber);
        }

        let command_count = reader.read_u32()? as usize;
        let commands = reader.take(command_count)?;

        let mut components = vec![];
        let mut points = vec![];
        let mut orders = vec![];

        for command in commands.iter().copied() {
            let points_to_read = match command {
                START_COMPONENT_COMMAND => {
                    // A component with a point but no elements yet is a single point: the 0 is its order
                    let points_to_read = if points.is_empty() || !orders.is_empty() { 1 } else { 0 };

                    if !points.is_empty() {
                        if orders.is_empty() {
                            orders.push(0);
                        }

                        components.push(finish_component(&mut points, &mut orders)?);
                    }

                    points_to_read
                }

                1..=3 => {
                    orders.push(command as usize);
                    command as usize
                }

                _ => return Err(PathDataError::InvalidCommand(command)),
            };

            for _ in 0..points_to_read {
                points.push(reader.read_point()?);
            }
        }

        if !orders.is_empty() {
            components.push(finish_component(&mut points, &mut orders)?);
        }

        Ok(Path::new(components))
    }
}

///
/// Creates a component from the points and orders read so far, leaving both lists empty
///
fn finish_component(points: &mut Vec<Coord2>, orders: &mut Vec<usize>) -> Result<PathComponent, PathDataError> {
    PathComponent::try_new(std::mem::take(points), std::mem::take(orders)).map_err(PathDataError::InvalidComponent)
}
