use std::ops::ControlFlow;

use numguess::core::layout::center_of;
use numguess::game::SessionStatus;
use numguess::{Difficulty, GameController, InputEvent, Screen, ScreenLayout};

fn send(game: &mut GameController, events: impl IntoIterator<Item = InputEvent>) {
    for event in events {
        assert_eq!(game.handle_event(event), ControlFlow::Continue(()));
    }
}

fn type_guess(game: &mut GameController, guess: u32) {
    let digits: Vec<InputEvent> = guess.to_string().chars().map(InputEvent::Digit).collect();
    send(game, digits);
    send(game, [InputEvent::Submit]);
}

#[test]
fn full_round_trip_through_every_screen() {
    let mut game = GameController::new(ScreenLayout::new(160, 48), Some(2024));
    assert_eq!(game.screen(), Screen::SelectDifficulty);

    // pick Easy by clicking its button
    let easy = center_of(game.layout().difficulty_button(Difficulty::Easy));
    send(&mut game, [InputEvent::Click(easy)]);
    assert_eq!(game.screen(), Screen::Playing);

    // binary search always lands inside the Easy budget
    let (mut lo, mut hi) = (1u32, 50u32);
    loop {
        let mid = (lo + hi) / 2;
        type_guess(&mut game, mid);
        let secret = game.session().unwrap().secret();
        if game.screen() == Screen::GameOver {
            assert_eq!(mid, secret);
            break;
        }
        if game.message().contains("Higher") {
            lo = mid + 1;
        } else {
            assert!(game.message().contains("Lower"));
            hi = mid - 1;
        }
    }
    let session = game.session().unwrap();
    assert_eq!(session.status(), SessionStatus::Won);
    assert!(session.attempts_used() <= 6);

    // play again at the same level
    send(&mut game, [InputEvent::Restart]);
    assert_eq!(game.screen(), Screen::Playing);
    assert_eq!(game.session().unwrap().difficulty(), Difficulty::Easy);
    assert_eq!(game.session().unwrap().attempts_used(), 0);

    // back out to the selection screen
    send(&mut game, [InputEvent::Back]);
    assert_eq!(game.screen(), Screen::SelectDifficulty);
    assert!(game.session().is_none());

    // keyboard shortcut picks Hard
    send(&mut game, [InputEvent::Digit('3')]);
    assert_eq!(game.session().unwrap().difficulty(), Difficulty::Hard);

    assert_eq!(game.handle_event(InputEvent::Quit), ControlFlow::Break(()));
}

#[test]
fn exhausting_hard_budget_loses() {
    let mut game = GameController::new(ScreenLayout::new(100, 30), Some(9));
    game.select_difficulty(Difficulty::Hard);
    let secret = game.session().unwrap().secret();
    let wrong = if secret == 200 { 199 } else { 200 };

    for attempt in 1..=25 {
        assert_eq!(game.screen(), Screen::Playing, "attempt {attempt}");
        type_guess(&mut game, wrong);
    }
    assert_eq!(game.screen(), Screen::GameOver);
    assert_eq!(game.session().unwrap().status(), SessionStatus::Lost);
    assert_eq!(game.message(), format!("Game Over! The number was {secret}"));

    // further typing is ignored once the game is over
    type_guess(&mut game, secret);
    assert_eq!(game.session().unwrap().attempts_used(), 25);

    send(&mut game, [InputEvent::MainMenu]);
    assert_eq!(game.screen(), Screen::SelectDifficulty);
}
