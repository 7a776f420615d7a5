//! Quiz room coordination server.
//!
//! Hosts rooms in memory and exposes a single action endpoint that
//! polling clients drive the whole game through.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! cargo run --bin server -- --question-api-url http://localhost:9000/generate
//! ```

use std::sync::Arc;

use clap::Parser;

use quiz_app_rs::{
    common::{logger::setup_logger, time::SystemClock},
    domain::QuestionGenerator,
    infrastructure::{
        question_gen::{BuiltinQuestionBank, HttpQuestionGenerator},
        repository::InMemoryRoomRepository,
    },
    ui::Server,
    usecase::{
        CreateRoomUseCase, GetRoomStateUseCase, JoinRoomUseCase, NextQuestionUseCase,
        StartGameUseCase, SubmitAnswerUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Room-based multiplayer quiz server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Question generation endpoint; the built-in question bank is used
    /// when this is not set
    #[arg(long)]
    question_api_url: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Clock + Repository
    // 2. QuestionGenerator
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory room store with TTL eviction)
    let clock = Arc::new(SystemClock);
    let repository = Arc::new(InMemoryRoomRepository::new(clock.clone()));

    // 2. Create QuestionGenerator
    let question_generator: Arc<dyn QuestionGenerator> = match args.question_api_url {
        Some(url) => {
            tracing::info!("Using question generation endpoint {}", url);
            Arc::new(HttpQuestionGenerator::new(url))
        }
        None => {
            tracing::info!("Using the built-in question bank");
            Arc::new(BuiltinQuestionBank::new())
        }
    };

    // 3. Create UseCases
    let create_room_usecase = Arc::new(CreateRoomUseCase::new(
        repository.clone(),
        question_generator,
        clock,
    ));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(repository.clone()));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(repository.clone()));
    let start_game_usecase = Arc::new(StartGameUseCase::new(repository.clone()));
    let submit_answer_usecase = Arc::new(SubmitAnswerUseCase::new(repository.clone()));
    let next_question_usecase = Arc::new(NextQuestionUseCase::new(repository));

    // 4. Create and run the server
    let server = Server::new(
        create_room_usecase,
        join_room_usecase,
        get_room_state_usecase,
        start_game_usecase,
        submit_answer_usecase,
        next_question_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
