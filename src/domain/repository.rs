//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 操作の粒度はキーバリューストア（Redis/KV）の提供する原子性に
//! 合わせています: ルームレコード全体の set/get、スコアのメンバー単位
//! インクリメント、回答済みセットへの追加。`get_room` → 変更 →
//! `update_room` の read-modify-write 列はトランザクション分離されません
//! （ホストアクションはホストクライアント 1 つからしか発行されない前提）。

use async_trait::async_trait;

use super::{RepositoryError, Room, RoomCode, Username};

/// Room Repository trait
///
/// ドメイン層が必要とするデータストアへのインターフェース。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には
/// 依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ルームレコード全体を原子的に新規作成（TTL 付き）
    ///
    /// コードが既に使用中の場合は `RoomCodeTaken` を返す。
    async fn insert_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// ルームを取得。存在しない、または TTL 失効済みの場合は `RoomNotFound`
    async fn get_room(&self, code: &RoomCode) -> Result<Room, RepositoryError>;

    /// ルームレコード全体を書き戻す（join / start / advance 用）
    async fn update_room(&self, room: Room) -> Result<(), RepositoryError>;

    /// プレイヤーのスコアを原子的に加算
    async fn increment_score(
        &self,
        code: &RoomCode,
        username: &Username,
        points: u32,
    ) -> Result<(), RepositoryError>;

    /// (player, question_index) を回答済みとして記録
    ///
    /// 新規に記録された場合は `true`、既に回答済みだった場合は `false`
    async fn mark_answered(
        &self,
        code: &RoomCode,
        username: &Username,
        question_index: usize,
    ) -> Result<bool, RepositoryError>;
}
