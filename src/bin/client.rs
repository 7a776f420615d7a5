//! Terminal quiz client.
//!
//! Creates or joins a room, then drives the game over short polling:
//! the lobby refreshes every 3 seconds, each question runs on a local
//! 20 second countdown, and the leaderboard refreshes every 2 seconds
//! until the host advances.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin client -- --username alice create --topic "space" --grade 6 --quiz-length 5
//! cargo run --bin client -- --username bob join --code AB3XK9
//! ```

use clap::{Parser, Subcommand};

use quiz_app_rs::{
    client::{ClientMode, run_client_session},
    common::logger::setup_logger,
    infrastructure::dto::http::QuizConfigDto,
};

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Terminal client for the multiplayer quiz server", long_about = None)]
struct Args {
    /// Display name inside the room (must be unique per room)
    #[arg(short = 'n', long)]
    username: String,

    /// Quiz server base URL
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:8080")]
    server_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new room and host the quiz
    Create {
        /// Quiz topic
        #[arg(long)]
        topic: String,

        /// Target grade level
        #[arg(long, default_value = "6")]
        grade: String,

        /// Difficulty (easy, medium, hard)
        #[arg(long, default_value = "medium")]
        difficulty: String,

        /// Number of questions (1-50)
        #[arg(long, default_value = "5")]
        quiz_length: usize,
    },
    /// Join an existing room by its 6-character code
    Join {
        /// Room code shown to the host at creation
        #[arg(long)]
        code: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let mode = match args.command {
        Command::Create {
            topic,
            grade,
            difficulty,
            quiz_length,
        } => ClientMode::Create {
            config: QuizConfigDto {
                topic,
                grade,
                difficulty,
                quiz_length,
            },
        },
        Command::Join { code } => ClientMode::Join { code },
    };

    // Run the client session
    if let Err(e) = run_client_session(&args.server_url, &args.username, mode).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
