//! Integration tests - interpreter driving the engine end to end

use handblock::core::{Engine, Piece, Tetromino};
use handblock::gesture::{GestureInterpreter, HandFrame, NormPoint, LANDMARK_COUNT, PALM_BASE};
use handblock::types::{GamePhase, NeonColor, StatusSignal, DROP_INTERVAL_MS};

fn hand_at(cursor_percent: f32) -> HandFrame {
    let mut points = [NormPoint::new(0.5, 0.5); LANDMARK_COUNT];
    points[PALM_BASE] = NormPoint::new(1.0 - cursor_percent / 100.0, 0.5);
    // Spread index/thumb so no pinch registers.
    points[8] = NormPoint::new(0.1, 0.1);
    points[4] = NormPoint::new(0.9, 0.9);
    HandFrame::new(points)
}

/// Drive one frame through the interpreter and into the engine, the way the
/// harness loop does.
fn drive(
    engine: &mut Engine,
    interp: &mut GestureInterpreter,
    frame: Option<&HandFrame>,
    now_ms: u64,
) -> Option<StatusSignal> {
    let outcome = interp.process(engine.phase(), frame, now_ms);
    for command in &outcome.commands {
        engine.apply(*command);
    }
    if outcome.start_confirmed {
        engine.restart();
    }
    outcome.status
}

#[test]
fn test_scan_to_running_to_game_over() {
    let mut engine = Engine::new(42);
    let mut interp = GestureInterpreter::new();
    let hand = hand_at(50.0);

    engine.begin_scan();
    assert_eq!(engine.phase(), GamePhase::Scanning);

    // Two seconds of steady hand confirm the start.
    drive(&mut engine, &mut interp, Some(&hand), 0);
    drive(&mut engine, &mut interp, Some(&hand), 1_000);
    let status = drive(&mut engine, &mut interp, Some(&hand), 2_000);
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(status, Some(StatusSignal::SystemActive));

    // Gravity alone eventually stacks pieces to the top.
    let mut elapsed = 0u32;
    while engine.is_running() && elapsed < 1_000_000 {
        engine.tick(DROP_INTERVAL_MS + 1);
        elapsed += DROP_INTERVAL_MS + 1;
    }
    assert_eq!(engine.phase(), GamePhase::GameOver);
}

#[test]
fn test_hand_loss_during_scan_keeps_engine_idle_in_scan() {
    let mut engine = Engine::new(42);
    let mut interp = GestureInterpreter::new();
    let hand = hand_at(50.0);

    engine.begin_scan();
    drive(&mut engine, &mut interp, Some(&hand), 0);
    let status = drive(&mut engine, &mut interp, None, 900);
    assert_eq!(status, Some(StatusSignal::ShowHand));
    assert_eq!(engine.phase(), GamePhase::Scanning);

    // The countdown must restart in full; 1.1s more of hand is not enough.
    drive(&mut engine, &mut interp, Some(&hand), 1_000);
    drive(&mut engine, &mut interp, Some(&hand), 2_100);
    assert_eq!(engine.phase(), GamePhase::Scanning);

    drive(&mut engine, &mut interp, Some(&hand), 3_200);
    assert_eq!(engine.phase(), GamePhase::Running);
}

#[test]
fn test_gestures_move_the_piece() {
    let mut engine = Engine::new(42);
    let mut interp = GestureInterpreter::new();
    engine.restart();
    engine.set_piece(Piece::new(
        Tetromino::T.shape(),
        NeonColor::Gold,
        4,
        3,
    ));

    // Hand far left: repeated moves at the fast tier march the piece left.
    let hand = hand_at(10.0);
    let mut now = 1_000u64;
    for _ in 0..6 {
        drive(&mut engine, &mut interp, Some(&hand), now);
        now += 150;
    }
    assert_eq!(engine.piece().x, 0, "piece should reach the left wall");

    // Neutral hand holds position.
    let x_before = engine.piece().x;
    drive(&mut engine, &mut interp, Some(&hand_at(50.0)), now);
    assert_eq!(engine.piece().x, x_before);
}

#[test]
fn test_game_over_final_score_is_reported() {
    let mut engine = Engine::new(42);
    engine.restart();

    // One cleared line, then force a top-out; the final score survives.
    engine.grid_mut().fill_row(19, NeonColor::Red);
    engine.grid_mut().set(9, 19, None);
    let vertical = handblock::core::rotate_cw(&Tetromino::I.shape());
    engine.set_piece(Piece::new(vertical, NeonColor::Cyan, 9, 16));
    while engine.move_piece(0, 1) {}
    assert_eq!(engine.score(), 100);

    engine.grid_mut().set(3, 1, Some(NeonColor::Red));
    engine.grid_mut().set(4, 1, Some(NeonColor::Red));
    engine.set_piece(Piece::new(Tetromino::O.shape(), NeonColor::Pink, 3, 0));
    engine.move_piece(0, 1);

    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert_eq!(engine.score(), 100);

    let snap = engine.snapshot();
    assert_eq!(snap.score_string(), "000100");
    assert!(snap.piece.is_none(), "no active piece is shown after game over");
}

#[test]
fn test_restart_after_game_over_starts_fresh() {
    let mut engine = Engine::new(42);
    engine.restart();
    engine.grid_mut().set(3, 1, Some(NeonColor::Red));
    engine.grid_mut().set(4, 1, Some(NeonColor::Red));
    engine.set_piece(Piece::new(Tetromino::O.shape(), NeonColor::Pink, 3, 0));
    engine.move_piece(0, 1);
    assert_eq!(engine.phase(), GamePhase::GameOver);

    engine.restart();
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(engine.score(), 0);
    assert!(engine.grid().cells().iter().all(|cell| cell.is_none()));
}
