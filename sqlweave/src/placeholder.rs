//! Placeholder allocation
//!
//! A [`Cursor`] hands out placeholder tokens for one statement compilation.
//! Every clause (fields, table, joins, filter, pagination) pulls from the same
//! cursor so indices never collide.

/// How a dialect spells its bind parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Fixed marker whose position alone determines binding (`?`)
    Static(&'static str),
    /// Prefix followed by a 1-based index (`$1`, `$2`, ...)
    OneBased(&'static str),
    /// Prefix followed by a 0-based index (`@p0`, `@p1`, ...)
    ZeroBased(&'static str),
}

impl PlaceholderStyle {
    /// First index handed out by a fresh cursor
    pub fn start(&self) -> usize {
        match self {
            Self::OneBased(_) => 1,
            Self::Static(_) | Self::ZeroBased(_) => 0,
        }
    }

    /// Render the token for the given index
    pub fn token(&self, index: usize) -> String {
        match self {
            Self::Static(marker) => (*marker).to_string(),
            Self::OneBased(prefix) | Self::ZeroBased(prefix) => format!("{}{}", prefix, index),
        }
    }

    /// Whether tokens encode their own ordinal
    pub fn is_indexed(&self) -> bool {
        !matches!(self, Self::Static(_))
    }

    /// Token prefix (or the fixed marker for static styles)
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Static(marker) => marker,
            Self::OneBased(prefix) | Self::ZeroBased(prefix) => prefix,
        }
    }
}

/// Running placeholder position for a single statement
#[derive(Debug, Clone)]
pub struct Cursor {
    style: PlaceholderStyle,
    position: usize,
}

impl Cursor {
    /// Fresh cursor positioned at the style's first index
    pub fn new(style: PlaceholderStyle) -> Self {
        Self {
            style,
            position: style.start(),
        }
    }

    /// Cursor starting at an explicit index
    pub fn starting_at(style: PlaceholderStyle, position: usize) -> Self {
        Self { style, position }
    }

    /// Return the next token and advance by one.
    ///
    /// Static styles return the same marker every time but still advance, so
    /// [`Cursor::allocated`] stays meaningful for every dialect.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> String {
        let token = self.style.token(self.position);
        self.position += 1;
        token
    }

    /// Index the next call to [`Cursor::next`] will use
    pub fn position(&self) -> usize {
        self.position
    }

    /// Skip `count` indices without rendering tokens
    pub fn advance(&mut self, count: usize) {
        self.position += count;
    }

    /// Number of indices consumed since the style's first index
    pub fn allocated(&self) -> usize {
        self.position.saturating_sub(self.style.start())
    }

    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }
}
