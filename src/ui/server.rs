//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    CreateRoomUseCase, GetRoomStateUseCase, JoinRoomUseCase, NextQuestionUseCase,
    StartGameUseCase, SubmitAnswerUseCase,
};

use super::{
    handler::{health_check, room_action},
    signal::shutdown_signal,
    state::AppState,
};

/// Quiz room HTTP server
///
/// Encapsulates the wired-up use cases and runs the axum router that
/// exposes the room action endpoint.
pub struct Server {
    create_room_usecase: Arc<CreateRoomUseCase>,
    join_room_usecase: Arc<JoinRoomUseCase>,
    get_room_state_usecase: Arc<GetRoomStateUseCase>,
    start_game_usecase: Arc<StartGameUseCase>,
    submit_answer_usecase: Arc<SubmitAnswerUseCase>,
    next_question_usecase: Arc<NextQuestionUseCase>,
}

impl Server {
    /// Create a new Server instance from the wired use cases
    pub fn new(
        create_room_usecase: Arc<CreateRoomUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        get_room_state_usecase: Arc<GetRoomStateUseCase>,
        start_game_usecase: Arc<StartGameUseCase>,
        submit_answer_usecase: Arc<SubmitAnswerUseCase>,
        next_question_usecase: Arc<NextQuestionUseCase>,
    ) -> Self {
        Self {
            create_room_usecase,
            join_room_usecase,
            get_room_state_usecase,
            start_game_usecase,
            submit_answer_usecase,
            next_question_usecase,
        }
    }

    /// Run the quiz room server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified
    /// address or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            create_room_usecase: self.create_room_usecase,
            join_room_usecase: self.join_room_usecase,
            get_room_state_usecase: self.get_room_state_usecase,
            start_game_usecase: self.start_game_usecase,
            submit_answer_usecase: self.submit_answer_usecase,
            next_question_usecase: self.next_question_usecase,
        });

        // Define handlers
        let app = Router::new()
            .route("/api/multiplayer", post(room_action))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Quiz room server listening on {}", listener.local_addr()?);
        tracing::info!("Room actions: POST http://{}/api/multiplayer", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
