use crate::encoders::algorithms::errors::ConfigError;

/// Marks lookup-table entries that carry no value.
const ABSENT: u8 = 0xFF;

/// Largest radix the lookup table can express (0xFF is reserved for `ABSENT`).
pub const MAX_RADIX: usize = 255;

/// An ordered set of printable symbols with O(1) reverse lookup.
///
/// Each symbol's value is its position. Reverse lookup goes through a
/// 256-entry table indexed by code point, so only symbols in U+0000..U+00FF
/// are allowed and anything above that range is never found. Aliases let
/// several characters decode to the same value (e.g. `'O'` for `0`).
///
/// # Example
///
/// ```
/// use base_codec::Alphabet;
///
/// let alphabet = Alphabet::builder()
///     .symbols("0123456789ABCDEFGHJKMNPQRSTVWXYZ")
///     .alias('O', 0)
///     .fold_case(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(alphabet.radix(), 32);
/// assert_eq!(alphabet.value_of('O'), Some(0));
/// assert_eq!(alphabet.value_of('z'), Some(31));
/// assert_eq!(alphabet.symbol_at(10), Some('A'));
/// ```
#[derive(Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    lookup: [u8; 256],
    padding: Option<char>,
}

impl Alphabet {
    /// Creates a new AlphabetBuilder.
    pub fn builder() -> AlphabetBuilder {
        AlphabetBuilder::new()
    }

    /// Creates an alphabet without padding or aliases.
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        Self::builder().symbols(symbols).build()
    }

    /// Returns the radix (number of value symbols).
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the padding symbol, if any.
    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    /// Returns the value symbols in value order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol for `value`, or `None` if `value >= radix`.
    #[inline]
    pub fn symbol_at(&self, value: usize) -> Option<char> {
        self.symbols.get(value).copied()
    }

    /// Returns the value of `symbol` (aliases included), or `None` if it is
    /// not part of the alphabet. The padding symbol has no value.
    #[inline]
    pub fn value_of(&self, symbol: char) -> Option<u8> {
        let code = symbol as u32;
        if code > 0xFF {
            return None;
        }
        match self.lookup[code as usize] {
            ABSENT => None,
            value => Some(value),
        }
    }

    /// Returns true if `symbol` decodes to a value.
    pub fn contains(&self, symbol: char) -> bool {
        self.value_of(symbol).is_some()
    }

    /// Returns true if the radix is a power of two.
    pub fn is_power_of_two(&self) -> bool {
        self.radix().is_power_of_two()
    }

    /// Short listing of the value symbols for error hints.
    pub fn describe(&self) -> String {
        if self.radix() <= 64 {
            self.symbols.iter().collect()
        } else {
            format!(
                "{}...{} ({} symbols)",
                self.symbols[..8].iter().collect::<String>(),
                self.symbols[self.radix() - 8..].iter().collect::<String>(),
                self.radix()
            )
        }
    }

    /// Encodes a value that the caller guarantees to be below the radix.
    #[inline]
    pub(crate) fn symbol(&self, value: usize) -> char {
        self.symbols[value]
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &self.symbols.iter().collect::<String>())
            .field("padding", &self.padding)
            .finish()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
            && self.padding == other.padding
            && self.lookup == other.lookup
    }
}

impl Eq for Alphabet {}

/// Builder for constructing an Alphabet.
///
/// # Example
///
/// ```
/// use base_codec::Alphabet;
///
/// let alphabet = Alphabet::builder()
///     .symbols("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567")
///     .padding('=')
///     .build()
///     .unwrap();
///
/// assert_eq!(alphabet.padding(), Some('='));
/// ```
#[derive(Debug, Default, Clone)]
pub struct AlphabetBuilder {
    symbols: Vec<char>,
    padding: Option<char>,
    aliases: Vec<(char, usize)>,
    fold_case: bool,
}

impl AlphabetBuilder {
    /// Creates a new AlphabetBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value symbols from a string, in value order.
    pub fn symbols(mut self, symbols: &str) -> Self {
        self.symbols = symbols.chars().collect();
        self
    }

    /// Sets the value symbols from a vector of characters.
    pub fn symbol_vec(mut self, symbols: Vec<char>) -> Self {
        self.symbols = symbols;
        self
    }

    /// Sets the padding symbol.
    pub fn padding(mut self, padding: char) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets or clears the padding symbol.
    pub fn padding_opt(mut self, padding: Option<char>) -> Self {
        self.padding = padding;
        self
    }

    /// Makes `alias` decode to `value`.
    pub fn alias(mut self, alias: char, value: usize) -> Self {
        self.aliases.push((alias, value));
        self
    }

    /// Accepts the opposite case of every ASCII-letter symbol on decode.
    ///
    /// Default is false.
    pub fn fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Builds the Alphabet, validating symbols, padding and aliases.
    pub fn build(self) -> Result<Alphabet, ConfigError> {
        self.validate()?;
        Ok(self.assemble())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let radix = self.symbols.len();
        if radix < 2 {
            return Err(ConfigError::TooFewSymbols(radix));
        }
        if radix > MAX_RADIX {
            return Err(ConfigError::TooManySymbols(radix));
        }

        let mut seen = [ABSENT; 256];
        for (index, &symbol) in self.symbols.iter().enumerate() {
            let code = symbol as u32;
            if code > 0xFF {
                return Err(ConfigError::SymbolOutOfRange(symbol));
            }
            let slot = &mut seen[code as usize];
            if *slot != ABSENT {
                return Err(ConfigError::DuplicateSymbol {
                    symbol,
                    first: *slot as usize,
                    second: index,
                });
            }
            *slot = index as u8;
        }

        if let Some(padding) = self.padding {
            if padding as u32 > 0xFF {
                return Err(ConfigError::SymbolOutOfRange(padding));
            }
            if seen[padding as usize] != ABSENT {
                return Err(ConfigError::ReservedSymbol(padding));
            }
        }

        for &(alias, value) in &self.aliases {
            if value >= radix {
                return Err(ConfigError::AliasOutOfRange { alias, value, radix });
            }
            if alias as u32 > 0xFF {
                return Err(ConfigError::SymbolOutOfRange(alias));
            }
            if Some(alias) == self.padding {
                return Err(ConfigError::ReservedSymbol(alias));
            }
            let slot = &mut seen[alias as usize];
            if *slot != ABSENT && *slot as usize != value {
                return Err(ConfigError::ConflictingAlias {
                    alias,
                    value,
                    existing: *slot as usize,
                });
            }
            *slot = value as u8;
        }

        Ok(())
    }

    /// Fills the lookup table without validating. Used directly only for
    /// the built-in formats, whose shapes are checked by tests.
    pub(crate) fn assemble(self) -> Alphabet {
        let mut lookup = [ABSENT; 256];
        for (index, &symbol) in self.symbols.iter().enumerate() {
            if let Some(slot) = lookup.get_mut(symbol as usize) {
                *slot = index as u8;
            }
        }
        for &(alias, value) in &self.aliases {
            if let Some(slot) = lookup.get_mut(alias as usize) {
                *slot = value as u8;
            }
        }

        if self.fold_case {
            for (index, &symbol) in self.symbols.iter().enumerate() {
                if !symbol.is_ascii_alphabetic() {
                    continue;
                }
                let other = if symbol.is_ascii_uppercase() {
                    symbol.to_ascii_lowercase()
                } else {
                    symbol.to_ascii_uppercase()
                };
                // An explicit symbol or alias wins over the folded form
                if lookup[other as usize] == ABSENT && Some(other) != self.padding {
                    lookup[other as usize] = index as u8;
                }
            }
        }

        Alphabet {
            symbols: self.symbols,
            lookup,
            padding: self.padding,
        }
    }
}
