//! RoomCode 値オブジェクト
//!
//! 6 文字のルームコード。紛らわしいグリフ（I, O, 0）を除いた
//! 制限付きアルファベットから生成されます。

use rand::Rng;

use super::error::DomainError;

/// Characters allowed in a room code: uppercase letters minus I and O,
/// digits 1-9. 33 symbols total.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ123456789";

/// Length of a room code
pub const CODE_LENGTH: usize = 6;

/// A canonicalized (uppercase) 6-character room code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomCode(String);

impl RoomCode {
    /// Parse and canonicalize a room code from user input.
    ///
    /// Codes are case-insensitive: input is uppercased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRoomCode`] if the input is not exactly
    /// 6 characters from the room-code alphabet.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let canonical = input.trim().to_uppercase();
        if canonical.len() != CODE_LENGTH
            || !canonical.bytes().all(|b| CODE_ALPHABET.contains(&b))
        {
            return Err(DomainError::InvalidRoomCode(input.to_string()));
        }
        Ok(Self(canonical))
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Factory for random room codes.
///
/// Codes are not cryptographically unique; the store verifies
/// non-existence before committing a new room, and the caller retries on
/// collision.
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Generate a random room code using the thread-local RNG
    pub fn generate() -> RoomCode {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a random room code using the given RNG
    pub fn generate_with<R: Rng>(rng: &mut R) -> RoomCode {
        let code: String = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        RoomCode(code)
    }
}
