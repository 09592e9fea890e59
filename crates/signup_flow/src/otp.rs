//! Fixed-length buffer for the one-time code cells.
//!
//! Each cell holds at most one ASCII numeral. Edits that would put anything
//! else in a cell are rejected and leave the buffer untouched, so the host can
//! restore the cell from [`OtpBuffer::digit`] after a rejected keystroke.

/// Number of cells in a one-time code.
pub const OTP_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OtpBuffer {
    digits: [Option<char>; OTP_LENGTH],
}

/// Outcome of writing a raw input value into a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpEdit {
    /// Index out of range, more than one character, or not a numeral.
    Rejected,
    /// The cell now holds `digit` (`None` when the value was empty).
    Accepted {
        digit: Option<char>,
        /// Next empty cell after the edited one, if a digit was entered.
        advance_to: Option<usize>,
        /// All cells are filled.
        complete: bool,
    },
}

impl OtpBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the raw value of an input cell.
    ///
    /// Accepts an empty value (clears the cell) or exactly one numeral.
    pub fn input(&mut self, index: usize, value: &str) -> OtpEdit {
        if index >= OTP_LENGTH {
            return OtpEdit::Rejected;
        }

        let Some(digit) = parse_cell(value) else {
            return OtpEdit::Rejected;
        };

        self.digits[index] = digit;

        let advance_to = digit.and_then(|_| self.next_empty_after(index));

        OtpEdit::Accepted {
            digit,
            advance_to,
            complete: self.is_complete(),
        }
    }

    /// Focus target for a backspace on `index`.
    ///
    /// Only an empty cell moves focus back; a filled cell is cleared by the
    /// browser's default action and reported through [`OtpBuffer::input`].
    #[must_use]
    pub fn backspace_target(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= OTP_LENGTH || self.digits[index].is_some() {
            return None;
        }
        Some(index - 1)
    }

    pub fn clear(&mut self) {
        self.digits = [None; OTP_LENGTH];
    }

    #[must_use]
    pub fn digit(&self, index: usize) -> Option<char> {
        self.digits.get(index).copied().flatten()
    }

    #[must_use]
    pub fn digits(&self) -> [Option<char>; OTP_LENGTH] {
        self.digits
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.iter().all(Option::is_none)
    }

    /// The joined code, only once every cell is filled.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.digits.iter().copied().collect::<Option<String>>()
    }

    fn next_empty_after(&self, index: usize) -> Option<usize> {
        (index + 1..OTP_LENGTH).find(|&next| self.digits[next].is_none())
    }
}

/// `Some(None)` for an empty value, `Some(Some(d))` for a single numeral.
fn parse_cell(value: &str) -> Option<Option<char>> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(digit), None) if digit.is_ascii_digit() => Some(Some(digit)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> OtpBuffer {
        let mut buffer = OtpBuffer::new();
        for (index, digit) in code.chars().enumerate() {
            buffer.input(index, &digit.to_string());
        }
        buffer
    }

    #[test]
    fn rejects_non_numeric_and_multi_char_values() {
        let mut buffer = filled("12");
        let before = buffer;

        for value in ["a", " ", "-", "12", "1a", "٣", "½", "+"] {
            assert_eq!(buffer.input(2, value), OtpEdit::Rejected, "value {value:?}");
            assert_eq!(buffer, before);
        }
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut buffer = OtpBuffer::new();
        assert_eq!(buffer.input(OTP_LENGTH, "1"), OtpEdit::Rejected);
        assert!(buffer.is_empty());
    }

    #[test]
    fn digit_advances_to_next_empty_cell() {
        let mut buffer = OtpBuffer::new();
        buffer.input(2, "7");

        assert_eq!(
            buffer.input(1, "4"),
            OtpEdit::Accepted {
                digit: Some('4'),
                advance_to: Some(3),
                complete: false,
            }
        );
    }

    #[test]
    fn last_cell_does_not_advance() {
        let mut buffer = filled("12345");
        assert_eq!(
            buffer.input(5, "9"),
            OtpEdit::Accepted {
                digit: Some('9'),
                advance_to: None,
                complete: true,
            }
        );
        assert_eq!(buffer.code().as_deref(), Some("123459"));
    }

    #[test]
    fn empty_value_clears_without_advancing() {
        let mut buffer = filled("123");
        assert_eq!(
            buffer.input(1, ""),
            OtpEdit::Accepted {
                digit: None,
                advance_to: None,
                complete: false,
            }
        );
        assert_eq!(buffer.digit(1), None);
        assert_eq!(buffer.code(), None);
    }

    #[test]
    fn backspace_moves_back_only_from_empty_cells() {
        let buffer = filled("12");
        assert_eq!(buffer.backspace_target(0), None);
        assert_eq!(buffer.backspace_target(1), None);
        assert_eq!(buffer.backspace_target(2), Some(1));
        assert_eq!(buffer.backspace_target(OTP_LENGTH), None);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut buffer = filled("123459");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.digits(), [None; OTP_LENGTH]);
    }
}
