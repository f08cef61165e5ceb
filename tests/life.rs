use std::collections::HashSet;

use lattice::config::Params;
use lattice::life::{self, Rule};
use lattice::Coord;

fn cells(list: &[(i32, i32)]) -> Vec<Coord<2>> {
    list.iter().map(|&(x, y)| Coord::new([x, y])).collect()
}

fn set(list: Vec<Coord<2>>) -> HashSet<Coord<2>> {
    list.into_iter().collect()
}

#[test]
fn blinker_has_period_two() {
    let horizontal = cells(&[(1, 2), (2, 2), (3, 2)]);
    let vertical = cells(&[(2, 1), (2, 2), (2, 3)]);
    let mut lattice = life::from_pattern(5, 5, Rule::conway(), &horizontal).unwrap();

    lattice.step();
    assert_eq!(set(life::live_cells(lattice.past())), set(vertical.clone()));
    lattice.step();
    assert_eq!(set(life::live_cells(lattice.past())), set(horizontal));
    lattice.step();
    assert_eq!(set(life::live_cells(lattice.past())), set(vertical));
}

#[test]
fn glider_crosses_the_torus() {
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut lattice = life::from_pattern(8, 8, Rule::conway(), &cells(&glider)).unwrap();

    for _ in 0..4 {
        lattice.step();
    }
    let shifted: Vec<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(set(life::live_cells(lattice.past())), set(cells(&shifted)));

    // 8 diagonal moves of one cell bring it back through the edges
    for _ in 4..32 {
        lattice.step();
    }
    assert_eq!(set(life::live_cells(lattice.past())), set(cells(&glider)));
    assert_eq!(life::population(lattice.past()), 5);
}

#[test]
fn pattern_positions_wrap() {
    let lattice = life::from_pattern(4, 4, Rule::conway(), &cells(&[(-1, 5)])).unwrap();
    assert_eq!(life::live_cells(lattice.past()), cells(&[(3, 1)]));
}

#[test]
fn parallel_step_matches_sequential() {
    let params = Params {
        width: 48,
        height: 40,
        seed: 7,
        ..Params::default()
    };
    let mut serial = life::soup(&params).unwrap();
    let mut parallel = life::soup(&params).unwrap();
    for _ in 0..25 {
        serial.step();
        parallel.par_step();
        assert_eq!(
            life::live_cells(serial.past()),
            life::live_cells(parallel.past())
        );
    }
    assert_eq!(serial.generation(), parallel.generation());
}

#[test]
fn empty_soup_stays_empty() {
    let params = Params {
        width: 16,
        height: 16,
        density: 0.0,
        ..Params::default()
    };
    let mut lattice = life::soup(&params).unwrap();
    lattice.par_step();
    assert_eq!(life::population(lattice.past()), 0);
}
