use sandfall_engine::grid::Grid;
use sandfall_engine::raster::draw_paths;
use sandfall_engine::{
    solve, Cave, CaveError, CaveSettings, GrainOutcome, Material, Point, PourPolicy, SandCave,
};

const CANONICAL: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n";

#[test]
fn canonical_answers() {
    let answer = solve(CANONICAL, CaveSettings::default()).unwrap();
    assert_eq!(answer.part1, 24);
    assert_eq!(answer.part2, 93);
}

#[test]
fn parse_errors_surface_with_line_numbers() {
    let err = solve("498,4 -> 498,6\n503;4 -> 502,4", CaveSettings::default()).unwrap_err();
    match err {
        CaveError::Parse(e) => assert_eq!(e.line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn step_by_step_matches_bulk_pour() {
    let paths = sandfall_engine::domain::input::parse_paths(CANONICAL).unwrap();

    let mut stepped = Cave::bounded(&paths, CaveSettings::default()).unwrap();
    let mut settled = 0;
    while let GrainOutcome::Settled(_) = stepped.drop_grain() {
        settled += 1;
    }

    let mut bulk = Cave::bounded(&paths, CaveSettings::default()).unwrap();
    let report = bulk.pour(PourPolicy::Bounded);

    assert_eq!(settled, report.grains);
    assert_eq!(stepped.grid().cells(), bulk.grid().cells());
}

#[test]
fn rendered_canonical_cave() {
    let paths = sandfall_engine::domain::input::parse_paths(CANONICAL).unwrap();
    let mut cave = Cave::bounded(&paths, CaveSettings::default()).unwrap();
    cave.pour(PourPolicy::Bounded);

    let expected = "\
..........
..........
......o...
.....ooo..
....#ooo##
...o#ooo#.
..###ooo#.
....oooo#.
.o.ooooo#.
#########.
";
    assert_eq!(cave.grid().view(494..504).to_string(), expected);
}

#[test]
fn custom_grid_through_public_api() {
    let mut grid = Grid::new(7, 4);
    draw_paths(&mut grid, &[vec![Point::new(0, 3), Point::new(6, 3)]]).unwrap();

    let settings = CaveSettings { source: Point::new(3, 0), ..CaveSettings::default() };
    let mut cave = Cave::from_grid(grid, settings);

    let report = cave.pour(PourPolicy::SourceBlocked);
    assert_eq!(report.last_settled, Some(Point::new(3, 0)));
    assert_eq!(report.grains, 9);
    assert_eq!(cave.grid().count(Material::Sand), 9);
}

#[test]
fn sand_cave_cells_buffer_matches_grid() {
    let mut cave = SandCave::from_input(CANONICAL).unwrap();
    cave.pour_bounded();

    let raw = unsafe { std::slice::from_raw_parts(cave.cells_ptr(), cave.cells_len()) };
    let sand = raw.iter().filter(|&&id| id == sandfall_engine::mat_sand()).count();
    assert_eq!(sand, 24);
}
