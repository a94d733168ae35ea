use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character the active alphabet does not recognize
    InvalidCharacter {
        char: char,
        position: usize,
        /// The input, or for long inputs a window of it around `position`
        input: String,
        /// Column of the offending character within `input`
        column: usize,
        valid_chars: String,
    },
    /// The final group has a length the codec cannot have produced
    TruncatedInput { symbols: usize, expected: String },
    /// The padding is misplaced or does not complete the final block
    InvalidPadding,
    /// Nothing to decode (only raised by the single-integer decoder)
    EmptyInput,
    /// The decoded value does not fit the target integer width
    Overflow,
    /// The decoded bytes are not valid UTF-8 (text convenience wrappers only)
    InvalidUtf8(std::string::FromUtf8Error),
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        let (display_input, column) = excerpt(input, position);

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            column,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create a TruncatedInput error
    pub fn truncated(symbols: usize, expected: impl Into<String>) -> Self {
        DecodeError::TruncatedInput {
            symbols,
            expected: expected.into(),
        }
    }
}

const EXCERPT_LEN: usize = 60;
const ELLIPSIS: &str = "...";

/// Cuts long inputs down to `EXCERPT_LEN` chars around `position`, returning
/// the excerpt and the column `position` lands on inside it.
fn excerpt(input: &str, position: usize) -> (String, usize) {
    let len = input.chars().count();
    if len <= EXCERPT_LEN {
        return (input.to_string(), position);
    }

    let start = position
        .saturating_sub(EXCERPT_LEN / 2)
        .min(len - EXCERPT_LEN);
    let end = start + EXCERPT_LEN;

    let mut shown = String::with_capacity(EXCERPT_LEN + 2 * ELLIPSIS.len());
    let mut column = position - start;
    if start > 0 {
        shown.push_str(ELLIPSIS);
        column += ELLIPSIS.len();
    }
    shown.extend(input.chars().skip(start).take(EXCERPT_LEN));
    if end < len {
        shown.push_str(ELLIPSIS);
    }

    (shown, column)
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                column,
                valid_chars,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character {:?} at position {}", c, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Caret under the offending character (columns count chars, not bytes)
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*column))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                let hint_chars = if valid_chars.chars().count() > 80 {
                    format!("{}...", valid_chars.chars().take(80).collect::<String>())
                } else {
                    valid_chars.clone()
                };
                write_hint(f, use_color, &format!("valid characters: {}", hint_chars))
            }
            DecodeError::TruncatedInput { symbols, expected } => {
                write_header(
                    f,
                    use_color,
                    &format!("truncated input: final group has {} symbol(s)", symbols),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(f, use_color, &format!("expected {}", expected))
            }
            DecodeError::InvalidPadding => {
                write_header(f, use_color, "invalid padding")?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "padding may only appear at the end and must complete the final block",
                )
            }
            DecodeError::EmptyInput => write_header(f, use_color, "cannot decode empty input"),
            DecodeError::Overflow => {
                write_header(f, use_color, "decoded value does not fit the target width")
            }
            DecodeError::InvalidUtf8(e) => {
                write_header(f, use_color, &format!("decoded bytes are not UTF-8: {}", e))
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors raised while building an alphabet or a codec from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The symbol list has fewer than two symbols
    TooFewSymbols(usize),
    /// The symbol list exceeds what the lookup table can index
    TooManySymbols(usize),
    /// A symbol appears more than once
    DuplicateSymbol { symbol: char, first: usize, second: usize },
    /// A symbol lies outside the 0x00-0xFF lookup range
    SymbolOutOfRange(char),
    /// The padding (or zero-run) symbol is also a value symbol
    ReservedSymbol(char),
    /// An alias points to a value outside the alphabet
    AliasOutOfRange { alias: char, value: usize, radix: usize },
    /// An alias is already a symbol with a different value
    ConflictingAlias { alias: char, value: usize, existing: usize },
    /// A configured alias points at a character that is not a symbol
    UnknownAliasTarget { alias: char, target: char },
    /// Radix outside the supported range
    RadixOutOfRange { radix: usize, min: usize, max: usize },
    /// The codec requires a specific alphabet shape
    UnsupportedAlphabet(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewSymbols(n) => {
                write!(f, "alphabet needs at least 2 symbols, got {}", n)
            }
            ConfigError::TooManySymbols(n) => {
                write!(f, "alphabet may hold at most 255 symbols, got {}", n)
            }
            ConfigError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(
                f,
                "duplicate symbol {:?} at indexes {} and {}",
                symbol, first, second
            ),
            ConfigError::SymbolOutOfRange(c) => {
                write!(f, "symbol {:?} (U+{:04X}) is above U+00FF", c, *c as u32)
            }
            ConfigError::ReservedSymbol(c) => {
                write!(f, "symbol {:?} is reserved and cannot also carry a value", c)
            }
            ConfigError::AliasOutOfRange {
                alias,
                value,
                radix,
            } => write!(
                f,
                "alias {:?} maps to value {} but the alphabet has radix {}",
                alias, value, radix
            ),
            ConfigError::ConflictingAlias {
                alias,
                value,
                existing,
            } => write!(
                f,
                "alias {:?} -> {} conflicts with existing value {}",
                alias, value, existing
            ),
            ConfigError::UnknownAliasTarget { alias, target } => write!(
                f,
                "alias {:?} points at {:?}, which is not a symbol of the alphabet",
                alias, target
            ),
            ConfigError::RadixOutOfRange { radix, min, max } => {
                write!(f, "radix must be between {} and {}, got {}", min, max, radix)
            }
            ConfigError::UnsupportedAlphabet(reason) => write!(f, "unsupported alphabet: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named format or configured codec is not found
#[derive(Debug)]
pub struct FormatNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl FormatNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for FormatNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(f, use_color, &format!("format '{}' not found", self.name))?;
        writeln!(f)?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        if use_color {
            write!(f, "      run \x1b[1m`base-codec list`\x1b[0m to see all formats")
        } else {
            write!(f, "      run `base-codec list` to see all formats")
        }
    }
}

impl std::error::Error for FormatNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching format name
pub fn find_closest_name<S: AsRef<str>>(name: &str, available: &[S]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer names
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate.as_ref()), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.as_ref().to_string())
}
