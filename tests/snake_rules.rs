// Rules of the snake simulation, exercised without any timer or canvas.

use dragonfolio::game::{Cell, GameState, Grid, Heading, Snake, StepOutcome};

fn grid20() -> Grid {
    Grid::with_tile_count(20)
}

fn single(cell: Cell, heading: Heading, food: Cell) -> GameState {
    GameState::with_layout(grid20(), Snake::spawn(cell), heading, food, 1)
}

#[test]
fn plain_move_keeps_length() {
    let mut state = single(Cell::new(5, 5), Heading::Right, Cell::new(0, 0));
    assert_eq!(state.step(), StepOutcome::Moved { ate: false });
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Cell::new(6, 5));
    assert_eq!(state.score, 0);
}

#[test]
fn eating_grows_by_exactly_one() {
    let mut state = single(Cell::new(5, 5), Heading::Right, Cell::new(6, 5));
    assert_eq!(state.step(), StepOutcome::Moved { ate: true });
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.score, 10);

    // Follow-up tick without food contact: length constant again.
    let food = state.food;
    assert_ne!(food, Cell::new(7, 5), "resample landed on the next head");
    assert_eq!(state.step(), StepOutcome::Moved { ate: false });
    assert_eq!(state.snake.len(), 2);
}

#[test]
fn wraps_on_every_edge() {
    let cases = [
        (Cell::new(19, 10), Heading::Right, Cell::new(0, 10)),
        (Cell::new(0, 10), Heading::Left, Cell::new(19, 10)),
        (Cell::new(10, 19), Heading::Down, Cell::new(10, 0)),
        (Cell::new(10, 0), Heading::Up, Cell::new(10, 19)),
    ];
    for (from, heading, expected) in cases {
        let mut state = single(from, heading, Cell::new(3, 3));
        assert_eq!(state.step(), StepOutcome::Moved { ate: false });
        assert_eq!(state.snake.head(), expected, "from {from:?} going {heading:?}");
    }
}

#[test]
fn stepping_into_body_ends_the_run() {
    // Head about to re-enter the column it came down through.
    let snake = Snake::from_cells([
        Cell::new(5, 6),
        Cell::new(5, 5),
        Cell::new(6, 5),
        Cell::new(6, 6),
        Cell::new(6, 7),
    ]);
    let mut state =
        GameState::with_layout(grid20(), snake.clone(), Heading::Up, Cell::new(0, 0), 1);
    assert_eq!(state.step(), StepOutcome::Ended);
    // The board is untouched by a terminal step.
    assert_eq!(state.snake, snake);
}

#[test]
fn tail_cell_still_counts_for_collision() {
    // 2x2 loop: the candidate head equals the tail, which would only be
    // vacated by this very move. Contract: that is still a collision.
    let snake = Snake::from_cells([
        Cell::new(1, 0),
        Cell::new(1, 1),
        Cell::new(0, 1),
        Cell::new(0, 0),
    ]);
    let mut state = GameState::with_layout(grid20(), snake, Heading::Left, Cell::new(9, 9), 1);
    assert_eq!(state.step(), StepOutcome::Ended);
}

#[test]
fn reversal_is_rejected() {
    let mut state = single(Cell::new(5, 5), Heading::Right, Cell::new(0, 0));
    state.steer(Heading::Left);
    assert_eq!(state.heading, Heading::Right);

    // Perpendicular turns go through, and the last valid press wins.
    state.steer(Heading::Up);
    assert_eq!(state.heading, Heading::Up);
    state.steer(Heading::Down);
    assert_eq!(state.heading, Heading::Up);
    state.steer(Heading::Left);
    assert_eq!(state.heading, Heading::Left);
}

#[test]
fn reversal_rejected_even_for_single_cell_snake() {
    let mut state = single(Cell::new(5, 5), Heading::Right, Cell::new(0, 0));
    state.steer(Heading::Left);
    assert_eq!(state.step(), StepOutcome::Moved { ate: false });
    assert_eq!(state.snake.head(), Cell::new(6, 5));
}

#[test]
fn resampled_food_avoids_the_snake() {
    for seed in 0..32 {
        let snake = Snake::from_cells([
            Cell::new(6, 5),
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(3, 5),
        ]);
        let mut state =
            GameState::with_layout(grid20(), snake, Heading::Right, Cell::new(7, 5), seed);
        assert_eq!(state.step(), StepOutcome::Moved { ate: true });
        assert!(
            !state.snake.contains(state.food),
            "seed {seed}: food {:?} on snake",
            state.food
        );
    }
}

#[test]
fn food_lands_on_the_last_free_cell() {
    // 3x3 board, snake covering everything but (2,0) and (1,1); eating the
    // food at (2,0) leaves (1,1) as the only free cell.
    let snake = Snake::from_cells([
        Cell::new(1, 0),
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(0, 2),
        Cell::new(1, 2),
        Cell::new(2, 2),
        Cell::new(2, 1),
    ]);
    for seed in [0, 7, 123_456_789] {
        let mut state = GameState::with_layout(
            Grid::with_tile_count(3),
            snake.clone(),
            Heading::Right,
            Cell::new(2, 0),
            seed,
        );
        assert_eq!(state.step(), StepOutcome::Moved { ate: true });
        assert_eq!(state.food, Cell::new(1, 1), "seed {seed}");
    }
}

#[test]
fn straight_run_reaches_the_food_column() {
    // Classic opening: five ticks straight from the center, food untouched.
    let mut state = single(Cell::new(10, 10), Heading::Right, Cell::new(15, 15));
    for _ in 0..5 {
        assert_eq!(state.step(), StepOutcome::Moved { ate: false });
    }
    assert_eq!(state.snake.head(), Cell::new(15, 10));
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.food, Cell::new(15, 15));
    assert_eq!(state.score, 0);
}

#[test]
fn eating_prepends_head_and_keeps_tail() {
    let snake = Snake::from_cells([Cell::new(14, 15), Cell::new(13, 15)]);
    let mut state =
        GameState::with_layout(grid20(), snake, Heading::Right, Cell::new(15, 15), 99);
    assert_eq!(state.step(), StepOutcome::Moved { ate: true });

    let body: Vec<Cell> = state.snake.cells().collect();
    assert_eq!(
        body,
        vec![Cell::new(15, 15), Cell::new(14, 15), Cell::new(13, 15)]
    );
    assert_eq!(state.score, 10);
    assert!(!state.snake.contains(state.food));
}

#[test]
fn fresh_state_matches_the_classic_board() {
    let state = GameState::new(Grid::from_canvas(400), 1);
    assert_eq!(state.grid.tile_count(), 20);
    assert_eq!(state.snake.head(), Cell::new(10, 10));
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.heading, Heading::Right);
    assert_eq!(state.food, Cell::new(15, 15));
    assert_eq!(state.score, 0);
}
