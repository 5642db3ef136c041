/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_bezier::bezier::path::*;
use flo_bezier::bezier::*;
use flo_bezier::*;

fn header(command_count: u32) -> Vec<u8> {
    let mut data = vec![];
    data.extend_from_slice(&1223013157u32.to_le_bytes());
    data.extend_from_slice(&command_count.to_le_bytes());
    data
}

fn push_point(data: &mut Vec<u8>, point: Coord2) {
    data.extend_from_slice(&point.0.to_le_bytes());
    data.extend_from_slice(&point.1.to_le_bytes());
}

#[test]
fn path_survives_serialization() {
    let mixed = PathComponent::from_curves(&[
        Curve::Line(LineSegment::new(Coord2(0.0, 0.0), Coord2(4.0, 0.0))),
        Curve::Quadratic(QuadraticCurve::new(Coord2(4.0, 0.0), Coord2(6.0, 2.0), Coord2(4.0, 4.0))),
        Curve::Cubic(CubicCurve::new(Coord2(4.0, 4.0), Coord2(3.0, 5.0), Coord2(1.0, 5.0), Coord2(0.0, 0.0))),
    ]);
    let path = Path::new(vec![
        mixed,
        PathComponent::from_point(Coord2(10.0, 10.0)),
        circle(Coord2(20.0, 0.0), 3.0).components()[0].clone(),
    ]);

    let data = path.data();
    let decoded = Path::from_data(&data);

    assert!(decoded == Ok(path));
}

#[test]
fn data_layout() {
    let path = polygon(&[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(0.0, 1.0)]);
    let data = path.data();

    // Header, 1 start command and 3 line commands, then 4 points
    assert!(data.len() == 8 + 4 + 4 * 16);
    assert!(data[0..4] == 1223013157u32.to_le_bytes());
    assert!(data[4..8] == 4u32.to_le_bytes());
    assert!(data[8..12] == [0, 1, 1, 1]);
}

#[test]
fn empty_path() {
    let data = Path::default().data();

    assert!(data.len() == 8);
    assert!(Path::from_data(&data) == Ok(Path::default()));
}

#[test]
fn bad_magic_number() {
    let mut data = rectangle(0.0, 0.0, 1.0, 1.0).data();
    data[0] ^= 0xff;

    assert!(Path::from_data(&data) == Err(PathDataError::BadMagicNumber));
}

#[test]
fn truncated_data() {
    let data = rectangle(0.0, 0.0, 1.0, 1.0).data();

    assert!(Path::from_data(&data[0..3]) == Err(PathDataError::Truncated));
    assert!(Path::from_data(&data[0..10]) == Err(PathDataError::Truncated));
    assert!(Path::from_data(&data[0..(data.len() - 1)]) == Err(PathDataError::Truncated));
}

#[test]
fn unknown_command() {
    let mut data = header(2);
    data.extend_from_slice(&[0, 7]);
    push_point(&mut data, Coord2(0.0, 0.0));

    assert!(Path::from_data(&data) == Err(PathDataError::InvalidCommand(7)));
}

#[test]
fn element_without_start_point() {
    let mut data = header(1);
    data.push(1);
    push_point(&mut data, Coord2(1.0, 1.0));

    assert!(
        Path::from_data(&data)
            == Err(PathDataError::InvalidComponent(PathComponentError::PointCountMismatch {
                expected: 2,
                actual: 1,
            }))
    );
}

#[test]
fn errors_can_be_displayed() {
    assert!(PathDataError::BadMagicNumber.to_string() == "path data has an invalid magic number");
    assert!(PathDataError::Truncated.to_string() == "path data ended unexpectedly");
    assert!(PathDataError::InvalidCommand(7).to_string() == "path data contains an unknown command (7)");
    assert!(
        PathDataError::InvalidComponent(PathComponentError::InvalidOrder(4)).to_string()
            == "path data contains an invalid component: a path element can't have order 4"
    );
    assert!(
        PathComponentError::PointCountMismatch { expected: 4, actual: 3 }.to_string()
            == "the element orders need 4 points but 3 were supplied"
    );
    assert!(PathComponentError::EmptyOrders.to_string() == "a path component needs at least one element");
    assert!(
        CurveError::WrongNumberOfPoints { expected: 3, actual: 5 }.to_string() == "expected 3 control points but found 5"
    );

    let boxed: Box<dyn std::error::Error> = Box::new(PathDataError::Truncated);
    assert!(boxed.to_string() == "path data ended unexpectedly");
}
