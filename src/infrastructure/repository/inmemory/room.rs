//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。本番の Redis/KV ストアの
//! 代替であり、同じ操作粒度（レコード全体の set/get、メンバー単位の
//! スコア加算、回答済みセットへの追加、キー単位の TTL）を提供します。
//!
//! TTL は読み取り時に遅延評価されます: 失効したレコードはアクセス時に
//! 削除され、呼び出し側からは存在しないルームと区別がつきません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    common::time::Clock,
    domain::{ROOM_TTL_MILLIS, RepositoryError, Room, RoomCode, RoomRepository, Username},
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// ルームコード → ルームレコード
    rooms: Mutex<HashMap<RoomCode, Room>>,
    /// TTL 失効判定に使用するクロック
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// レコードが TTL 失効しているか
    fn is_expired(&self, room: &Room) -> bool {
        self.clock.now_jst_millis() >= room.created_at.value() + ROOM_TTL_MILLIS
    }

    /// 失効レコードを削除しつつルームへの可変参照を取得
    fn live_room<'a>(
        &self,
        rooms: &'a mut HashMap<RoomCode, Room>,
        code: &RoomCode,
    ) -> Result<&'a mut Room, RepositoryError> {
        let expired = rooms
            .get(code)
            .map(|room| self.is_expired(room))
            .unwrap_or(false);
        if expired {
            rooms.remove(code);
        }
        rooms.get_mut(code).ok_or(RepositoryError::RoomNotFound)
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;

        // 失効済みレコードが居座っている場合はコードを再利用できる
        if let Ok(existing) = self.live_room(&mut rooms, &room.code) {
            return Err(RepositoryError::RoomCodeTaken(
                existing.code.as_str().to_string(),
            ));
        }

        rooms.insert(room.code.clone(), room);
        Ok(())
    }

    async fn get_room(&self, code: &RoomCode) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = self.live_room(&mut rooms, code)?;
        Ok(room.clone())
    }

    async fn update_room(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let stored = self.live_room(&mut rooms, &room.code)?;
        *stored = room;
        Ok(())
    }

    async fn increment_score(
        &self,
        code: &RoomCode,
        username: &Username,
        points: u32,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = self.live_room(&mut rooms, code)?;
        *room.scores.entry(username.clone()).or_insert(0) += points;
        Ok(())
    }

    async fn mark_answered(
        &self,
        code: &RoomCode,
        username: &Username,
        question_index: usize,
    ) -> Result<bool, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = self.live_room(&mut rooms, code)?;
        let newly_marked = room
            .answered
            .entry(username.clone())
            .or_default()
            .insert(question_index);
        Ok(newly_marked)
    }
}
