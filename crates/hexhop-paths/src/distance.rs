use hexhop_core::Point;

/// Number of single hex steps between two cells.
#[inline]
pub fn hex_distance(a: Point, b: Point) -> i32 {
    let (aq, ar) = a.axial();
    let (bq, br) = b.axial();
    let dq = aq - bq;
    let dr = ar - br;
    (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexhop_core::Direction;

    #[test]
    fn neighbours_are_one_step_away() {
        let p = Point::new(2, 3);
        for n in p.hex_neighbors() {
            assert_eq!(hex_distance(p, n), 1);
        }
        assert_eq!(hex_distance(p, p), 0);
    }

    #[test]
    fn two_hop_jumps_are_two_steps_away() {
        let p = Point::new(4, 4);
        for dir in Direction::ALL {
            let n = p.hex_neighbor(dir);
            for turn in [dir, dir.clockwise(), dir.counter_clockwise()] {
                assert_eq!(hex_distance(p, n.hex_neighbor(turn)), 2);
            }
        }
    }

    #[test]
    fn along_a_row() {
        assert_eq!(hex_distance(Point::new(0, 0), Point::new(5, 0)), 5);
    }
}
