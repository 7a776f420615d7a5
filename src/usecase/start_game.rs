//! UseCase: ゲーム開始
//!
//! ホスト専用。lobby → in-progress への遷移と index の 0 への設定。
//! 既に開始済みのルームへの再呼び出しは no-op で、index はリセット
//! されません。

use std::sync::Arc;

use crate::domain::{Room, RoomCode, RoomRepository, Username};

use super::error::ActionError;

/// ゲーム開始のユースケース
pub struct StartGameUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl StartGameUseCase {
    /// 新しい StartGameUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ゲームを開始し、更新後の状態を返す
    ///
    /// # Errors
    ///
    /// * `RoomNotFound` - ルームが存在しない
    /// * `Forbidden` - 呼び出し元がホストではない
    pub async fn execute(&self, room_id: String, username: String) -> Result<Room, ActionError> {
        let code = RoomCode::parse(&room_id)?;
        let username = Username::new(username)?;

        let mut room = self.repository.get_room(&code).await?;
        room.start(&username)?;
        self.repository.update_room(room.clone()).await?;

        tracing::info!(
            "Room {} started by host '{}' ({} players)",
            code,
            username,
            room.players.len()
        );
        Ok(room)
    }
}
