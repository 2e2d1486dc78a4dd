//! Form input state and validation.
//!
//! [`TextField`] is the editing state behind every input on the login and
//! create screens: a UTF-8 string with a byte cursor and the usual emacs-ish
//! movement. Validation errors are the whole error taxonomy of the app; they
//! surface as blocking modals and are never logged or retried.

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter both a skill name and description.")]
    MissingField,
    #[error("Please select a category.")]
    MissingCategory,
    #[error("Enter a valid email and a password with at least 4 characters.")]
    InvalidDetails,
    #[error("Invalid email or password. Use test@student.com / 12345")]
    InvalidCredentials,
}

/// Loose email shape check, `x@y.z` with no whitespace.
pub fn email_valid(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn password_valid(password: &str) -> bool {
    password.trim().len() >= 4
}

pub fn validate_signup(email: &str, password: &str) -> Result<(), FormError> {
    if email_valid(email) && password_valid(password) {
        Ok(())
    } else {
        Err(FormError::InvalidDetails)
    }
}

pub fn validate_post(
    skill: &str,
    category: Option<&str>,
    description: &str,
) -> Result<(), FormError> {
    if skill.trim().is_empty() || description.trim().is_empty() {
        return Err(FormError::MissingField);
    }
    if category.is_none() {
        return Err(FormError::MissingCategory);
    }
    Ok(())
}

/// Editable text with a byte-offset cursor.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
    /// Multi-line fields accept Enter as a newline instead of submitting.
    pub multiline: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }
}
