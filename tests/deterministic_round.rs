use snake_arcade::config::GRID;
use snake_arcade::food::Food;
use snake_arcade::game::{RoundState, TickStatus};
use snake_arcade::grid::Position;
use snake_arcade::input::Direction;
use snake_arcade::score::HighScoreStore;
use snake_arcade::screen::{transition, Screen, ScreenEvent, Transition};
use snake_arcade::snake::Snake;

#[test]
fn scripted_round_grows_turns_and_dies_on_the_strip() {
    let mut state = RoundState::new_with_seed(GRID, false, 42);
    state.snake = Snake::from_segments(
        vec![
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ],
        Direction::Right,
    );
    state.food = Food::at(Position { x: 4, y: 2 });

    // Eats and grows: tail retained, score credited, food respawned clear of
    // the body.
    let result = state.tick();
    assert_eq!(result.status, TickStatus::Running);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position { x: 4, y: 2 });
    assert!(!state.snake.occupies(state.food.position));

    // Turning up from the top playable row runs into the info-bar strip,
    // which ends the round exactly like a wall, score unchanged.
    state.request_direction(Direction::Up);
    let result = state.tick();
    assert_eq!(result.status, TickStatus::RoundOver { final_score: 10 });
    assert_eq!(state.score, 10);
}

#[test]
fn scripted_wrap_round_retraces_its_own_path() {
    let mut state = RoundState::new_with_seed(GRID, true, 7);
    state.snake = Snake::from_segments(
        vec![
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ],
        Direction::Right,
    );
    state.food = Food::at(Position { x: 4, y: 2 });

    // The meal reverses the body; the old tail leads, heading left.
    let result = state.tick();
    assert_eq!(result.status, TickStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 1, y: 2 });
    assert_eq!(state.snake.direction(), Direction::Left);

    // Keep the rest of the script deterministic: park the food far away and
    // drop any randomly spawned bonus.
    state.food = Food::at(Position { x: 30, y: 17 });
    state.bonus_food = None;

    let result = state.tick();
    assert_eq!(result.status, TickStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 0, y: 2 });

    // One more step left leaves the field.
    let result = state.tick();
    assert_eq!(result.status, TickStatus::RoundOver { final_score: 10 });
}

#[test]
fn round_sequence_updates_the_stored_high_score_once() {
    let path = std::env::temp_dir().join(format!(
        "snake-arcade-flow-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let store = HighScoreStore::at_path(&path);

    // First launch: nothing stored yet.
    assert_eq!(store.load(), 0);

    // A finished round beats the stored value, so it is written out; the
    // screen machine moves to the round-ended menu.
    let mut screen = Screen::Playing;
    let mut high_score = store.load();
    let final_score = 120;
    if final_score > high_score {
        high_score = final_score;
        store.save(high_score).expect("score save should succeed");
    }
    assert_eq!(
        transition(screen, ScreenEvent::RoundOver),
        Transition::SwitchTo(Screen::RoundEnded)
    );
    screen = Screen::RoundEnded;

    // Browsing to the high-score screen and back performs no further writes.
    assert_eq!(
        transition(screen, ScreenEvent::ViewHighScore),
        Transition::SwitchTo(Screen::ShowHighScore)
    );
    screen = Screen::ShowHighScore;
    assert_eq!(
        transition(screen, ScreenEvent::Back),
        Transition::SwitchTo(Screen::RoundEnded)
    );

    assert_eq!(store.load(), 120);
    let _ = std::fs::remove_file(&path);
}
