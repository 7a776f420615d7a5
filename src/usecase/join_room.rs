//! UseCase: ルーム参加
//!
//! lobby 状態のルームにのみ参加できます。同じプレイヤーの再 join は
//! no-op です（集合セマンティクス）。

use std::sync::Arc;

use crate::domain::{Room, RoomCode, RoomRepository, Username};

use super::error::ActionError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルームに参加し、更新後の状態を返す
    ///
    /// # Errors
    ///
    /// * `RoomNotFound` - ルームが存在しない（または失効している）
    /// * `Forbidden` - ルームが lobby 状態ではない
    pub async fn execute(&self, room_id: String, username: String) -> Result<Room, ActionError> {
        let code = RoomCode::parse(&room_id)?;
        let username = Username::new(username)?;

        let mut room = self.repository.get_room(&code).await?;
        room.add_player(username.clone())?;
        self.repository.update_room(room.clone()).await?;

        tracing::info!("Player '{}' joined room {}", username, code);
        Ok(room)
    }
}
