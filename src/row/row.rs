use std::fmt;

use bytes::{Buf, BufMut};

use crate::common::{DbError, Result};

use super::layout::{EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE};

/// Represents a single row in the table.
///
/// A row holds the three columns of the fixed schema: a numeric id, a
/// username and an email. Construction validates the text columns against
/// their fixed widths, so every `Row` value is serializable by definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: u32,
    username: String,
    email: String,
}

impl Row {
    /// Creates a new row, validating the text columns against their widths.
    ///
    /// Values longer than the column width are rejected, never truncated.
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let email = email.into();

        if username.len() > USERNAME_SIZE {
            return Err(DbError::StringTooLong { column: "username" });
        }
        if email.len() > EMAIL_SIZE {
            return Err(DbError::StringTooLong { column: "email" });
        }

        Ok(Self {
            id,
            username,
            email,
        })
    }

    /// Returns the row id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the username column.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email column.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Serializes the row into a `ROW_SIZE` slot.
    ///
    /// The id is written little-endian at its fixed offset; text columns are
    /// copied verbatim and NUL-padded to their full width.
    pub fn serialize(&self, slot: &mut [u8]) {
        debug_assert_eq!(slot.len(), ROW_SIZE);

        slot.fill(0);
        let mut id_field = &mut slot[ID_OFFSET..USERNAME_OFFSET];
        id_field.put_u32_le(self.id);
        slot[USERNAME_OFFSET..USERNAME_OFFSET + self.username.len()]
            .copy_from_slice(self.username.as_bytes());
        slot[EMAIL_OFFSET..EMAIL_OFFSET + self.email.len()].copy_from_slice(self.email.as_bytes());
    }

    /// Deserializes a row from a `ROW_SIZE` slot.
    pub fn deserialize(slot: &[u8]) -> Self {
        debug_assert_eq!(slot.len(), ROW_SIZE);

        let mut id_field = &slot[ID_OFFSET..USERNAME_OFFSET];
        let id = id_field.get_u32_le();
        let username = read_text(&slot[USERNAME_OFFSET..EMAIL_OFFSET]);
        let email = read_text(&slot[EMAIL_OFFSET..ROW_SIZE]);

        Self {
            id,
            username,
            email,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.id, self.username, self.email)
    }
}

/// Decodes a NUL-padded text field. A maximum-length value fills the whole
/// field and carries no terminator.
fn read_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).to_string()
}
