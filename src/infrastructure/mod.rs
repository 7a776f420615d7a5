//! Infrastructure 層
//!
//! ドメイン層が定義する trait の具体的な実装（インメモリストア、
//! コンテンツ生成クライアント）と、ワイヤ形式の DTO を提供します。

pub mod dto;
pub mod question_gen;
pub mod repository;
