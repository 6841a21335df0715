use grid_pathfinding::{
    Algorithm, ClassifiedGrid, Heuristic, InvalidMapReason, Position, RawGrid, Runner,
    SearchError, SymbolAlphabet,
};

fn raw(rows: &[&str]) -> RawGrid {
    RawGrid::from_rows(rows).unwrap()
}

fn runners() -> [Runner; 2] {
    let alphabet = SymbolAlphabet::default();
    [
        Runner::new(alphabet, Heuristic::Manhattan),
        Runner::new(alphabet, Heuristic::Euclidean),
    ]
}

/// Row 2 is a wall except for an opening at column 2.
const WALL_WITH_OPENING: [&str; 5] = ["#****", "*****", "--*--", "*****", "$****"];

#[test]
fn wall_with_one_opening() {
    let grid = raw(&WALL_WITH_OPENING);
    let start = Position::new(0, 0);
    let goal = Position::new(4, 0);

    for runner in runners() {
        for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
            let report = runner.run(algorithm, &grid).unwrap();
            assert_eq!(report.path.len(), 8, "{}", algorithm);
            assert_eq!(report.listed_length(), 9);
            assert!(report.path.steps().contains(&Position::new(2, 2)));
            assert!(report.path.is_contiguous_from(start));
            assert_eq!(report.path.last(), Some(goal));
        }

        let dfs = runner.run(Algorithm::DepthFirst, &grid).unwrap();
        let expected = [
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 2),
            (3, 2),
            (4, 2),
            (4, 1),
            (3, 1),
            (3, 0),
            (4, 0),
        ]
        .map(|(r, c)| Position::new(r, c));
        assert_eq!(dfs.path.steps(), expected.as_slice());
        assert!(dfs.path.len() >= 8);
    }
}

#[test]
fn hill_climbing_stalls_before_the_opening() {
    // From (1,0) the only way on is (1,1), which is farther from the goal.
    let grid = raw(&WALL_WITH_OPENING);
    for runner in runners() {
        match runner.run(Algorithm::HillClimbing, &grid) {
            Err(SearchError::LocalOptimum { at, trail }) => {
                assert_eq!(at, Position::new(1, 0));
                assert_eq!(trail.steps(), &[Position::new(1, 0)]);
            }
            other => panic!("expected a local optimum, got {:?}", other),
        }
    }
}

#[test]
fn missing_goal_fails_every_strategy() {
    let grid = raw(&["#****", "*****", "*****", "*****", "*****"]);
    for runner in runners() {
        for algorithm in Algorithm::ALL {
            assert!(matches!(
                runner.run(algorithm, &grid),
                Err(SearchError::InvalidMap(InvalidMapReason::MissingEndpoints))
            ));
        }
    }
}

#[test]
fn adjacent_goal_is_one_move() {
    let grid = raw(&["#****", "$****", "*****", "*****", "*****"]);
    for runner in runners() {
        for algorithm in Algorithm::ALL {
            let report = runner.run(algorithm, &grid).unwrap();
            assert_eq!(report.path.steps(), &[Position::new(1, 0)], "{}", algorithm);
            assert_eq!(report.summary().lines().last(), Some("Length: 2"));
        }
    }
}

#[test]
fn enclosed_goal_has_no_path() {
    let grid = raw(&["#****", "*****", "**---", "**-$-", "**---"]);
    for runner in runners() {
        for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst, Algorithm::AStar] {
            assert!(matches!(
                runner.run(algorithm, &grid),
                Err(SearchError::NoPathFound { .. })
            ));
        }
        assert!(matches!(
            runner.run(Algorithm::HillClimbing, &grid),
            Err(SearchError::NoPathFound { .. }) | Err(SearchError::LocalOptimum { .. })
        ));
    }
}

#[test]
fn too_small_or_ragged_maps_are_rejected() {
    assert!(matches!(
        RawGrid::from_rows(&["#***", "****", "****", "***$"]),
        Err(SearchError::InvalidMap(InvalidMapReason::TooSmall))
    ));
    assert!(matches!(
        RawGrid::parse("5 5\n#****\n*****\n*****\n*****"),
        Err(SearchError::InvalidMap(InvalidMapReason::NotRectangular))
    ));
}

#[test]
fn reclassification_is_fresh() {
    let alphabet = SymbolAlphabet::default();
    let grid = raw(&WALL_WITH_OPENING);
    let first = ClassifiedGrid::classify(&grid, &alphabet).unwrap();
    let second = ClassifiedGrid::classify(&grid, &alphabet).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.visited_count(), 0);
}

#[test]
fn marked_map_searches_like_the_unmarked_one() {
    let runner = Runner::default();
    let grid = raw(&WALL_WITH_OPENING);
    let report = runner.run(Algorithm::BreadthFirst, &grid).unwrap();
    let marked = grid.with_path(&report.path, runner.alphabet());
    let again = runner.run(Algorithm::BreadthFirst, &marked).unwrap();
    assert_eq!(again.path, report.path);
    assert_eq!(marked.clear_marks(runner.alphabet()), grid);
}

#[test]
fn run_all_compares_every_strategy() {
    let runner = Runner::default();
    let results = runner.run_all(&raw(&WALL_WITH_OPENING)).unwrap();
    assert_eq!(results.len(), 4);
    let succeeded: Vec<Algorithm> = results
        .iter()
        .filter(|r| r.success())
        .map(|r| r.algorithm)
        .collect();
    assert_eq!(
        succeeded,
        vec![Algorithm::DepthFirst, Algorithm::BreadthFirst, Algorithm::AStar]
    );
}

#[test]
fn example_map_round_trip() {
    let text = "7 8\n#***-***\n*--*-*-*\n*-**-*-*\n*-*--*-*\n*-****-*\n*----*-*\n******-$";
    let grid = RawGrid::parse(text).unwrap();
    let runner = Runner::default();
    let bfs = runner.run(Algorithm::BreadthFirst, &grid).unwrap();
    let astar = runner.run(Algorithm::AStar, &grid).unwrap();
    assert_eq!(bfs.path.len(), bfs.optimal_path_length);
    assert_eq!(astar.path.len(), bfs.path.len());
}
