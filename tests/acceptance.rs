use aapath::{find_path_with_options, find_route, FindOptions, Grid, Position, Route, RouteError};

fn walk(rows: &[&str]) -> Result<Route, RouteError> {
    find_route(Grid::from_lines(rows), &FindOptions::new())
}

fn assert_route(rows: &[&str], letters: &str, path: &str) {
    let route = walk(rows).unwrap();
    assert_eq!(route.letters_string(), letters);
    assert_eq!(route.path_string(), path);
}

#[test]
fn basic_example() {
    assert_route(
        &[
            "  @---A---+",
            "          |",
            "  x-B-+   C",
            "      |   |",
            "      +---+",
        ],
        "ACB",
        "@---A---+|C|+---+|+-B-x",
    );
}

#[test]
fn straight_through_intersections() {
    assert_route(
        &[
            "  @",
            "  | +-C--+",
            "  A |    |",
            "  +---B--+",
            "    |      x",
            "    |      |",
            "    +---D--+",
        ],
        "ABCD",
        "@|A+---B--+|+--C-+|-||+---D--+|x",
    );
}

#[test]
fn letters_on_turns() {
    assert_route(
        &[
            "  @---A---+",
            "          |",
            "  x-B-+   |",
            "      |   |",
            "      +---C",
        ],
        "ACB",
        "@---A---+|||C---+|+-B-x",
    );
}

#[test]
fn letters_collected_once_per_cell() {
    let rows = [
        "     +-O-N-+",
        "     |     |",
        "     |   +-I-+",
        " @-G-O-+ | | |",
        "     | | +-+ E",
        "     +-+     S",
        "             |",
        "             x",
    ];
    let route = walk(&rows).unwrap();
    assert_eq!(route.letters_string(), "GOONIES");
    assert_eq!(route.path_string(), "@-G-O-+|+-+|O||+-O-N-+|I|+-+|+-I-+|ES|x");

    // The I at row 2 is crossed twice but only collected once.
    assert_eq!(route.path.iter().filter(|&&c| c == 'I').count(), 2);
    assert_eq!(route.letters.iter().filter(|&&c| c == 'I').count(), 1);
    // The two O cells are different cells, so both count.
    assert_eq!(route.letters.iter().filter(|&&c| c == 'O').count(), 2);
}

#[test]
fn keeps_direction_in_compact_spaces() {
    assert_route(
        &[" +-L-+", " |  +A-+", "@B+ ++ H", " ++    x"],
        "BLAH",
        "@B+++B|+-L-+A+++A-+Hx",
    );
}

#[test]
fn ignores_everything_after_the_end() {
    assert_route(
        &["  @-A--+", "       |", "       +-B--x-C--D"],
        "AB",
        "@-A--+|+-B--x",
    );
}

#[test]
fn parses_diagram_text() {
    let text = "  @---A---+\n          |\n  x-B-+   C\n      |   |\n      +---+\n";
    let route = aapath::find_path(text).unwrap();
    assert_eq!(route.letters_string(), "ACB");
    assert_eq!(route.to_string(), "Letters: ACB\nPath: @---A---+|C|+---+|+-B-x");
}

#[test]
fn repeated_walks_agree() {
    let rows = [" +-L-+", " |  +A-+", "@B+ ++ H", " ++    x"];
    assert_eq!(walk(&rows), walk(&rows));
}

#[test]
fn missing_start() {
    let result = walk(&[
        "     -A---+",
        "          |",
        "  x-B-+   C",
        "      |   |",
        "      +---+",
    ]);
    assert_eq!(result, Err(RouteError::NoStart));
}

#[test]
fn missing_end() {
    let result = walk(&[
        "   @--A---+",
        "          |",
        "    B-+   C",
        "      |   |",
        "      +---+",
    ]);
    assert_eq!(result, Err(RouteError::NoEnd));
}

#[test]
fn multiple_starts() {
    let result = walk(&[
        "   @--A-@-+",
        "          |",
        "  x-B-+   C",
        "      |   |",
        "      +---+",
    ]);
    assert_eq!(result, Err(RouteError::MultipleStart { count: 2 }));
}

const FORK: [&str; 7] = [
    "        x-B",
    "          |",
    "   @--A---+",
    "          |",
    "     x+   C",
    "      |   |",
    "      +---+",
];

#[test]
fn fork_in_path() {
    assert_eq!(
        walk(&FORK),
        Err(RouteError::Fork {
            position: Position::new(2, 10)
        })
    );
}

#[test]
fn unique_end_rejects_second_end_marker() {
    let options = FindOptions::new().with_unique_end(true);
    assert_eq!(
        find_path_with_options(&FORK.join("\n"), &options),
        Err(RouteError::MultipleEnd { count: 2 })
    );
}

#[test]
fn broken_path() {
    let result = walk(&["   @--A-+", "        |", "", "        B-x"]);
    assert_eq!(
        result,
        Err(RouteError::BrokenPath {
            position: Position::new(1, 8)
        })
    );
}

#[test]
fn multiple_starting_paths() {
    assert_eq!(
        walk(&["  x-B-@-A-x"]),
        Err(RouteError::MultipleStartingPaths {
            position: Position::new(0, 6)
        })
    );
}

#[test]
fn fake_turn() {
    assert_eq!(
        walk(&["  @-A-+-B-x"]),
        Err(RouteError::FakeTurn {
            position: Position::new(0, 6)
        })
    );
}
