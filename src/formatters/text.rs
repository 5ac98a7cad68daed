//! Human-readable line formatter
//!
//! Renders `[<scope>: ]<LEVEL>: <message>[ <error>]`, with positional params
//! interpolated into the message and the finished line wrapped in the
//! level's terminal color when the color map has an entry for it.

use crate::core::{Formatter, LogLevel, LogParams, LogRecord, LoggerError, Rendered, Result};
use colored::Colorize;
use std::collections::HashMap;
use std::sync::Arc;

/// Parsed `#rrggbb` color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `#rgb` token. Malformed tokens are a
    /// configuration error, surfaced at construction time.
    pub fn parse(token: &str) -> Result<Self> {
        let malformed =
            || LoggerError::config("color map", format!("malformed hex color '{}'", token));

        let digits = token.strip_prefix('#').ok_or_else(malformed)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        match digits.len() {
            3 => {
                let mut nibbles = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let nibble = c.to_digit(16).ok_or_else(malformed)? as u8;
                    nibbles[i] = nibble << 4 | nibble;
                }
                Ok(Self::rgb(nibbles[0], nibbles[1], nibbles[2]))
            }
            6 => {
                let mut bytes = [0u8; 3];
                for (i, chunk) in digits.as_bytes().chunks(2).enumerate() {
                    let pair = std::str::from_utf8(chunk).map_err(|_| malformed())?;
                    bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| malformed())?;
                }
                Ok(Self::rgb(bytes[0], bytes[1], bytes[2]))
            }
            _ => Err(malformed()),
        }
    }

    /// Wrap `text` in this color's terminal escape.
    pub fn paint(&self, text: &str) -> String {
        text.truecolor(self.r, self.g, self.b).to_string()
    }
}

/// Color map shipped with the crate: dim gray for TRACE/DEBUG, yellow for
/// WARN, red for ERROR. INFO renders uncolored.
pub fn default_color_map() -> HashMap<LogLevel, HexColor> {
    HashMap::from([
        (LogLevel::Trace, HexColor::rgb(0x63, 0x63, 0x63)),
        (LogLevel::Debug, HexColor::rgb(0x63, 0x63, 0x63)),
        (LogLevel::Warn, HexColor::rgb(0xff, 0xf2, 0x00)),
        (LogLevel::Error, HexColor::rgb(0xff, 0x24, 0x14)),
    ])
}

/// Pluggable message interpolation strategy.
pub type Interpolator = Arc<dyn Fn(&str, &LogParams) -> String + Send + Sync>;

/// Default interpolation: substitute `{}` placeholders from positional
/// params in order. Named params and empty sequences leave the message
/// unchanged; placeholders beyond the supplied values stay literal.
pub fn interpolate_positional(message: &str, params: &LogParams) -> String {
    let LogParams::List(values) = params else {
        return message.to_string();
    };
    if values.is_empty() {
        return message.to_string();
    }

    let mut out = String::with_capacity(message.len());
    let mut values = values.iter();
    let mut rest = message;
    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match values.next() {
            Some(value) => out.push_str(&value.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

fn default_interpolator() -> Interpolator {
    Arc::new(interpolate_positional)
}

/// Human-readable colorized line formatter.
pub struct TextFormatter {
    scope: Option<String>,
    colors: HashMap<LogLevel, HexColor>,
    interpolator: Interpolator,
}

impl TextFormatter {
    /// Formatter with no scope, the default color map and positional
    /// interpolation.
    pub fn new() -> Self {
        Self {
            scope: None,
            colors: default_color_map(),
            interpolator: default_interpolator(),
        }
    }

    #[must_use]
    pub fn builder() -> TextFormatterBuilder {
        TextFormatterBuilder::new()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Render the uncolored display line for a record.
    pub fn format_line(&self, record: &LogRecord) -> String {
        let message = match &record.params {
            Some(params) => (self.interpolator)(&record.message, params),
            None => record.message.clone(),
        };

        let mut line = String::new();
        if let Some(scope) = self.scope.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(scope);
            line.push_str(": ");
        }
        line.push_str(record.level.to_str());
        line.push_str(": ");
        line.push_str(&message);
        if let Some(error) = &record.error {
            line.push(' ');
            line.push_str(&error.to_string());
        }
        line
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> Result<Rendered> {
        let line = self.format_line(record);
        let line = match self.colors.get(&record.level) {
            Some(color) => color.paint(&line),
            None => line,
        };
        Ok(Rendered::Line(line))
    }
}

/// Builder for [`TextFormatter`]; the color map is validated here, at
/// construction, never at call time.
///
/// # Example
/// ```
/// use plugin_logging::formatters::TextFormatter;
/// use plugin_logging::LogLevel;
///
/// let formatter = TextFormatter::builder()
///     .scope("deploy")
///     .color(LogLevel::Info, "#c0c")
///     .build()
///     .unwrap();
/// ```
pub struct TextFormatterBuilder {
    scope: Option<String>,
    colors: Option<Vec<(LogLevel, String)>>,
    interpolator: Option<Interpolator>,
}

impl TextFormatterBuilder {
    pub fn new() -> Self {
        Self {
            scope: None,
            colors: None,
            interpolator: None,
        }
    }

    /// Label prefixed to every rendered line
    #[must_use = "builder methods return a new value"]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Supply a color entry. The first call replaces the default map
    /// entirely; further calls accumulate.
    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, level: LogLevel, hex: impl Into<String>) -> Self {
        self.colors
            .get_or_insert_with(Vec::new)
            .push((level, hex.into()));
        self
    }

    /// Render every level uncolored
    #[must_use = "builder methods return a new value"]
    pub fn no_colors(mut self) -> Self {
        self.colors = Some(Vec::new());
        self
    }

    /// Replace the interpolation strategy
    #[must_use = "builder methods return a new value"]
    pub fn interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = Some(interpolator);
        self
    }

    /// Build the formatter, parsing and validating any supplied color
    /// tokens.
    pub fn build(self) -> Result<TextFormatter> {
        let colors = match self.colors {
            None => default_color_map(),
            Some(entries) => {
                let mut parsed = HashMap::new();
                for (level, token) in entries {
                    parsed.insert(level, HexColor::parse(&token)?);
                }
                parsed
            }
        };

        Ok(TextFormatter {
            scope: self.scope,
            colors,
            interpolator: self.interpolator.unwrap_or_else(default_interpolator),
        })
    }
}

impl Default for TextFormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
