//! HandBlock terminal harness (default binary).
//!
//! Runs the engine with a keyboard fallback (arrows to move/rotate/drop) so
//! it can be played without a detector, and optionally serves the detector
//! bridge: landmark frames arriving over TCP run through the gesture
//! interpreter and drive the same engine commands.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use handblock::adapter::{Adapter, ClientMessage, ObservationBody, ServerMessage};
use handblock::core::Engine;
use handblock::gesture::{GestureInterpreter, HandFrame};
use handblock::term::{GameView, TerminalRenderer};
use handblock::types::{GameCommand, GamePhase, StatusSignal, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = Engine::new(seed_from_clock());
    let mut interpreter = GestureInterpreter::new();
    let mut adapter = Adapter::start_from_env();
    let view = GameView;

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut status: Option<StatusSignal> = None;
    let mut obs_seq: u64 = 0;

    loop {
        let snapshot = engine.snapshot();
        term.draw(&view.render(&snapshot, status))?;

        if let Some(adapter) = adapter.as_ref() {
            obs_seq += 1;
            let obs = ObservationBody::from_snapshot(obs_seq, &snapshot, status);
            adapter.broadcast(ServerMessage::Observation(obs).to_line());
        }

        // Keyboard input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left => {
                            if engine.apply(GameCommand::MoveLeft) {
                                status = Some(StatusSignal::MovingLeft);
                            }
                        }
                        KeyCode::Right => {
                            if engine.apply(GameCommand::MoveRight) {
                                status = Some(StatusSignal::MovingRight);
                            }
                        }
                        KeyCode::Down => {
                            engine.apply(GameCommand::SoftDrop);
                        }
                        KeyCode::Up => {
                            if engine.apply(GameCommand::Rotate) {
                                status = Some(StatusSignal::Rotating);
                            }
                        }
                        KeyCode::Char('s') => {
                            engine.begin_scan();
                            interpreter.reset();
                            status = Some(StatusSignal::ShowHand);
                        }
                        KeyCode::Char('r') | KeyCode::Enter => {
                            engine.apply(GameCommand::Restart);
                            interpreter.reset();
                            status = Some(StatusSignal::SystemActive);
                        }
                        _ => {}
                    }
                }
            }
        }

        // Detector bridge input.
        if let Some(adapter) = adapter.as_mut() {
            let now_ms = started.elapsed().as_millis() as u64;
            while let Some(msg) = adapter.try_recv() {
                match msg {
                    ClientMessage::Frame { landmarks, .. } => {
                        let frame =
                            landmarks.as_deref().and_then(HandFrame::from_landmarks);
                        let outcome =
                            interpreter.process(engine.phase(), frame.as_ref(), now_ms);

                        for command in &outcome.commands {
                            engine.apply(*command);
                        }
                        if outcome.start_confirmed {
                            engine.restart();
                        }
                        if let Some(new_status) = outcome.status {
                            status = Some(new_status);
                        }
                    }
                    ClientMessage::Start { .. } => {
                        engine.begin_scan();
                        interpreter.reset();
                        status = Some(StatusSignal::ShowHand);
                    }
                    ClientMessage::Restart { .. } => {
                        engine.apply(GameCommand::Restart);
                        interpreter.reset();
                        status = Some(StatusSignal::SystemActive);
                    }
                }
            }
        }

        // Gravity tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(TICK_MS);
            if engine.phase() == GamePhase::GameOver {
                status = Some(StatusSignal::Terminated);
            }
        }
    }
}

fn seed_from_clock() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
