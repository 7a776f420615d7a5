//! Interactive quiz session loop.
//!
//! Mirrors the polling contract: the lobby is observed on a 3 s tick,
//! the round leaderboard on a 2 s tick, and each question runs on a
//! local 20 s countdown that the server never sees. The host is the
//! only client that calls `startGame`/`nextQuestion`; everyone else
//! discovers transitions purely through polled projections.

use std::time::{Duration, Instant};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::infrastructure::dto::http::{QuizConfigDto, RoomStateDto};

use super::{
    api::ApiClient,
    error::ClientError,
    formatter::MessageFormatter,
    phase::{LEADERBOARD_POLL_MS, LOBBY_POLL_MS, Phase, QUESTION_SECONDS, phase_after_poll},
};

/// How the session enters a room
pub enum ClientMode {
    /// Create a new room and become its host
    Create { config: QuizConfigDto },
    /// Join an existing room by code
    Join { code: String },
}

/// Poll the room once, applying the error policy: a failed poll leaves
/// the local state unchanged until the next tick, but a missing room is
/// terminal.
async fn poll_state(api: &ApiClient, room_id: &str) -> Result<Option<RoomStateDto>, ClientError> {
    match api.get_room_state(room_id).await {
        Ok(state) => Ok(Some(state)),
        Err(e) if e.is_room_gone() => Err(e),
        Err(e) => {
            tracing::warn!("Poll failed, keeping local state: {}", e);
            Ok(None)
        }
    }
}

/// Run the interactive quiz session
pub async fn run_client_session(
    server_url: &str,
    username: &str,
    mode: ClientMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let api = ApiClient::new(server_url.to_string());

    // Spawn a blocking thread for rustyline (synchronous readline)
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };
        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Enter the room
    let mut state = match mode {
        ClientMode::Create { config } => api.create_room(config, username).await?,
        ClientMode::Join { code } => api.join_room(&code, username).await?,
    };
    let is_host = state.host == username;
    // The canonical code never changes for the lifetime of the session
    let room_id = state.room_id.clone();
    print!("{}", MessageFormatter::format_room_banner(&state, username));
    print!("{}", MessageFormatter::format_lobby(&state));

    // Lobby phase
    if is_host {
        println!("Press Enter to start the quiz.");
        loop {
            tokio::select! {
                line = input_rx.recv() => {
                    if line.is_none() {
                        return Ok(());
                    }
                    // The host transitions locally on a successful start,
                    // without waiting for its own poll
                    state = api.start_game(&room_id, username).await?;
                    break;
                }
                _ = tokio::time::sleep(Duration::from_millis(LOBBY_POLL_MS)) => {
                    if let Some(polled) = poll_state(&api, &room_id).await? {
                        if polled.players != state.players {
                            print!("{}", MessageFormatter::format_lobby(&polled));
                        }
                        state = polled;
                    }
                }
            }
        }
    } else {
        println!("Waiting for the host to start...");
        loop {
            tokio::time::sleep(Duration::from_millis(LOBBY_POLL_MS)).await;
            let Some(polled) = poll_state(&api, &room_id).await? else {
                continue;
            };
            if polled.players != state.players {
                print!("{}", MessageFormatter::format_lobby(&polled));
            }
            let next = phase_after_poll(&Phase::Lobby, &polled);
            state = polled;
            if next.is_some() {
                break;
            }
        }
    }

    let mut phase = if state.status == "finished" {
        Phase::Finished
    } else {
        Phase::Question {
            index: state.current_question_index.max(0) as usize,
        }
    };

    // Question / leaderboard cycle
    loop {
        match phase {
            Phase::Question { index } => {
                let Some(question) = state.questions.get(index).cloned() else {
                    tracing::error!("Server reported question index {} out of range", index);
                    break;
                };
                print!(
                    "{}",
                    MessageFormatter::format_question(index, state.quiz_length, &question)
                );

                // Local countdown, advisory only
                let started = Instant::now();
                let deadline = tokio::time::sleep(Duration::from_secs(QUESTION_SECONDS));
                tokio::pin!(deadline);

                let mut answered: Option<bool> = None;
                loop {
                    tokio::select! {
                        line = input_rx.recv() => {
                            let Some(line) = line else { return Ok(()) };
                            match line.trim().parse::<usize>() {
                                Ok(n) if (1..=question.options.len()).contains(&n) => {
                                    answered = Some(question.options[n - 1] == question.answer);
                                    break;
                                }
                                _ => println!(
                                    "Please answer with a number between 1 and {}.",
                                    question.options.len()
                                ),
                            }
                        }
                        _ = &mut deadline => break,
                    }
                }

                if let Some(correct) = answered {
                    let elapsed = started.elapsed().as_secs_f64();
                    // Wrong answers are submitted too; the server ignores them
                    match api
                        .submit_answer(&room_id, username, index, correct, elapsed)
                        .await
                    {
                        Ok(()) => {}
                        Err(e) if e.is_room_gone() => return Err(e.into()),
                        Err(e) => tracing::warn!("Failed to submit answer: {}", e),
                    }
                }
                print!("{}", MessageFormatter::format_reveal(&question, answered));

                phase = Phase::Leaderboard { index };
            }

            Phase::Leaderboard { index } => {
                print!(
                    "{}",
                    MessageFormatter::format_leaderboard(&state.scores, username)
                );
                if is_host {
                    println!("Press Enter for the next question.");
                    loop {
                        tokio::select! {
                            line = input_rx.recv() => {
                                if line.is_none() {
                                    return Ok(());
                                }
                                match api.next_question(&room_id, username).await {
                                    Ok(advanced) => {
                                        state = advanced;
                                        phase = if state.status == "finished" {
                                            Phase::Finished
                                        } else {
                                            Phase::Question {
                                                index: state.current_question_index.max(0) as usize,
                                            }
                                        };
                                        break;
                                    }
                                    Err(e) if e.is_room_gone() => return Err(e.into()),
                                    Err(e) => tracing::warn!("Failed to advance: {}", e),
                                }
                            }
                            _ = tokio::time::sleep(Duration::from_millis(LEADERBOARD_POLL_MS)) => {
                                if let Some(polled) = poll_state(&api, &room_id).await? {
                                    if polled.scores != state.scores {
                                        print!(
                                            "{}",
                                            MessageFormatter::format_leaderboard(&polled.scores, username)
                                        );
                                    }
                                    state = polled;
                                }
                            }
                        }
                    }
                } else {
                    let current = Phase::Leaderboard { index };
                    loop {
                        tokio::time::sleep(Duration::from_millis(LEADERBOARD_POLL_MS)).await;
                        let Some(polled) = poll_state(&api, &room_id).await? else {
                            continue;
                        };
                        if polled.scores != state.scores {
                            print!(
                                "{}",
                                MessageFormatter::format_leaderboard(&polled.scores, username)
                            );
                        }
                        let next = phase_after_poll(&current, &polled);
                        state = polled;
                        if let Some(next) = next {
                            phase = next;
                            break;
                        }
                    }
                }
            }

            Phase::Finished => {
                print!("{}", MessageFormatter::format_final(&state, username));
                break;
            }

            // The lobby is handled before this loop
            Phase::Lobby => unreachable!("lobby phase is handled before the question loop"),
        }
    }

    Ok(())
}
