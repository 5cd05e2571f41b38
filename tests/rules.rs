use std::collections::VecDeque;

use rand::rngs::mock::StepRng;
use textmode_snake::input::{KeySource, SCANCODE_A, SCANCODE_ENTER, SCANCODE_SPACE, SCANCODE_W};
use textmode_snake::{
    board_center, CellBuffer, Config, Crash, Direction, Game, Lcg, MoveResult, Phase,
    BOARD_HEIGHT, BOARD_WIDTH, TRAIL_CAPACITY,
};

/// Replays a fixed list of scancodes, then reports silence.
struct ScriptedKeys(VecDeque<u8>);

impl ScriptedKeys {
    fn new(keys: &[u8]) -> Self {
        ScriptedKeys(keys.iter().copied().collect())
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> u8 {
        self.0.pop_front().unwrap_or(0)
    }
}

fn config() -> Config {
    Config { redraw_interval: 2, move_interval: 4 }
}

fn started(seed: u32) -> Game {
    let mut game = Game::seeded(config(), seed);
    game.reset();
    game
}

fn feed(game: &mut Game, times: usize) {
    for _ in 0..times {
        let head = game.snake().head();
        game.set_apple(head);
        assert!(game.check_apple());
    }
}

#[test]
fn reset_starts_a_clean_round() {
    let mut game = started(99);
    feed(&mut game, 3);
    game.step_snake();
    game.reset();

    let snake = game.snake();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(snake.head(), board_center());
    assert_eq!(snake.len(), 1);
    assert_eq!(snake.score(), 0);
    assert_eq!(snake.trail().get(0), Some(board_center()));
    assert!((1..TRAIL_CAPACITY).all(|i| snake.trail().get(i).is_none()));
}

#[test]
fn one_step_right_from_the_center() {
    let mut game = started(5);
    game.snake_mut().set_direction(Direction::Right);
    assert_eq!(game.snake().head(), (40, 12));

    let result = game.step_snake();

    assert_eq!(result, MoveResult::Moved { new_head: (41, 12), old_head: (40, 12) });
    assert_eq!(game.snake().head(), (41, 12));
    assert_eq!(game.snake().trail().get(0), Some((41, 12)));
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn eating_grows_scores_and_moves_the_apple() {
    // Draws are 0, 1, 2, ...: reset uses 0 (Left) for direction and (2, 3) for
    // the apple, so the next apple lands on (4, 5).
    let mut game = Game::new(config(), StepRng::new(0, 1));
    game.snake_mut().set_direction(Direction::Right);
    game.set_apple((41, 12));

    game.step_snake();
    assert!(game.check_apple());

    assert_eq!(game.snake().score(), 1);
    assert_eq!(game.snake().len(), 2);
    assert_eq!(game.apple(), (4, 5));
}

#[test]
fn every_border_ends_the_round() {
    let cases = [
        ((1, 12), Direction::Left),
        ((0, 12), Direction::Left),
        ((BOARD_WIDTH - 2, 12), Direction::Right),
        ((40, 1), Direction::Up),
        ((40, BOARD_HEIGHT - 2), Direction::Down),
    ];
    for (head, direction) in cases.iter() {
        let mut game = started(3);
        game.snake_mut().place_head(*head);
        game.snake_mut().set_direction(*direction);

        assert_eq!(game.step_snake(), MoveResult::Crashed(Crash::Border), "{:?} {:?}", head, direction);
        assert_eq!(game.phase(), Phase::GameOver);
    }
}

#[test]
fn circling_into_the_body_ends_the_round() {
    let mut game = started(11);
    feed(&mut game, 4);
    let turns = [Direction::Right, Direction::Right, Direction::Down, Direction::Left];
    for direction in turns.iter() {
        game.snake_mut().set_direction(*direction);
        assert!(matches!(game.step_snake(), MoveResult::Moved { .. }));
    }

    game.snake_mut().set_direction(Direction::Up);
    assert_eq!(game.step_snake(), MoveResult::Crashed(Crash::Tail));
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn reversing_into_the_body_is_not_blocked() {
    let mut game = started(8);
    feed(&mut game, 2);
    game.snake_mut().set_direction(Direction::Right);
    game.step_snake();
    game.step_snake();

    game.snake_mut().set_direction(Direction::Left);
    assert_eq!(game.snake().direction(), Direction::Left);
    assert_eq!(game.step_snake(), MoveResult::Crashed(Crash::Tail));
}

#[test]
fn one_cell_snake_can_turn_around() {
    let mut game = started(8);
    game.snake_mut().set_direction(Direction::Right);
    game.step_snake();
    game.snake_mut().set_direction(Direction::Left);
    assert!(matches!(game.step_snake(), MoveResult::Moved { .. }));
}

#[test]
fn apples_always_land_inside_the_border() {
    for seed in 0..300u32 {
        let mut game = started(seed.wrapping_mul(2_654_435_761));
        for _ in 0..20 {
            let (x, y) = game.apple();
            assert!(x >= 1 && x <= BOARD_WIDTH - 2, "seed {} gave x {}", seed, x);
            assert!(y >= 1 && y <= BOARD_HEIGHT - 2, "seed {} gave y {}", seed, y);
            feed(&mut game, 1);
        }
    }
}

#[test]
fn same_seed_same_rounds() {
    let mut a = started(2024);
    let mut b = Game::new(config(), Lcg::new(2024));
    b.reset();
    for _ in 0..50 {
        assert_eq!(a.apple(), b.apple());
        assert_eq!(a.snake().direction(), b.snake().direction());
        a.reset();
        b.reset();
    }
}

#[test]
fn growth_stops_at_trail_capacity() {
    let mut game = started(4);
    feed(&mut game, TRAIL_CAPACITY + 5);
    assert_eq!(game.snake().len(), TRAIL_CAPACITY);
    assert_eq!(game.snake().score(), TRAIL_CAPACITY as u64 + 5);
}

#[test]
fn full_session_with_scripted_keys() {
    let mut game = Game::seeded(config(), 17);
    let mut screen = CellBuffer::new();
    // Menu is drawn on the first tick, the Enter on the second starts play.
    let mut keys = ScriptedKeys::new(&[0, SCANCODE_ENTER, SCANCODE_W]);

    for _ in 0..3 {
        let key = keys.poll_key();
        game.tick(key, &mut screen);
    }
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.snake().direction(), Direction::Up);
    assert_eq!(game.snake().head(), (40, 11));
    assert!(screen.contains_text("Score: 0"));

    // Pause holds the snake still.
    game.tick(SCANCODE_SPACE, &mut screen);
    assert_eq!(game.phase(), Phase::Paused);
    for _ in 0..40 {
        game.tick(0, &mut screen);
    }
    assert_eq!(game.snake().head(), (40, 11));
    game.tick(SCANCODE_SPACE, &mut screen);

    // Head for the top wall: 11 more steps reach row 0.
    let mut ticks = 0;
    while game.phase() != Phase::GameOver {
        game.tick(0, &mut screen);
        ticks += 1;
        assert!(ticks < 1_000, "snake never reached the wall");
    }
    assert!(screen.contains_text("Game over!"));

    // The screen waits through silence, any key starts the next round.
    game.tick(0, &mut screen);
    assert_eq!(game.phase(), Phase::GameOver);
    game.tick(SCANCODE_A, &mut screen);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.snake().head(), board_center());
}

#[test]
fn first_key_in_the_menu_is_not_lost() {
    let mut game = Game::seeded(config(), 17);
    let mut screen = CellBuffer::new();
    let mut keys = ScriptedKeys::new(&[SCANCODE_ENTER]);

    game.tick(keys.poll_key(), &mut screen);
    assert_eq!(game.phase(), Phase::Playing);
}
