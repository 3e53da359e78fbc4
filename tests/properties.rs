use aapath::{find_route, Cell, FindOptions, Grid};
use proptest::prelude::*;

fn arb_rows() -> impl Strategy<Value = Vec<Vec<char>>> {
    let cell = prop::sample::select(vec!['@', 'x', '-', '|', '+', 'A', 'B', ' ', ' ', ' ']);
    prop::collection::vec(prop::collection::vec(cell, 0..8), 1..8)
}

proptest! {
    #[test]
    fn walks_are_deterministic(rows in arb_rows()) {
        let first = find_route(Grid::from_rows(rows.clone()), &FindOptions::new());
        let second = find_route(Grid::from_rows(rows), &FindOptions::new());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn routes_run_from_start_to_end(rows in arb_rows()) {
        let grid = Grid::from_rows(rows);
        let letter_cells: Vec<char> = grid
            .positions()
            .filter_map(|pos| match grid.get(pos) {
                Cell::Letter(c) => Some(c),
                _ => None,
            })
            .collect();

        if let Ok(route) = find_route(grid, &FindOptions::new()) {
            prop_assert_eq!(route.path.first(), Some(&'@'));
            prop_assert_eq!(route.path.last(), Some(&'x'));

            // At most one entry per letter cell.
            for letter in ['A', 'B'] {
                let collected = route.letters.iter().filter(|&&c| c == letter).count();
                let cells = letter_cells.iter().filter(|&&c| c == letter).count();
                prop_assert!(collected <= cells);
            }
        }
    }

    #[test]
    fn straight_rows_walk_verbatim(body in "[A-Z-]{0,20}") {
        let diagram = format!("@{body}x");
        let route = aapath::find_path(&diagram).unwrap();
        prop_assert_eq!(route.path_string(), diagram);
        let letters: String = body.chars().filter(char::is_ascii_uppercase).collect();
        prop_assert_eq!(route.letters_string(), letters);
    }

    #[test]
    fn straight_columns_walk_verbatim(body in "[A-Z|]{0,20}") {
        let column = format!("@{body}x");
        let diagram: Vec<String> = column.chars().map(String::from).collect();
        let route = find_route(Grid::from_lines(&diagram), &FindOptions::new()).unwrap();
        prop_assert_eq!(route.path_string(), column);
    }
}
