//! Data Transfer Objects
//!
//! ワイヤ形式（JSON, camelCase）とドメインモデルの間の変換を担います。
//! ドメイン層はワイヤ形式を知らず、UI 層とクライアントはこの DTO だけを
//! 扱います。

mod conversion;
pub mod http;
