//! Command-line argument model.
//!
//! Turns the flat `-flag value` token list into a [`WindowStyleRequest`].
//! Nothing here touches the OS; a rejected command line never reaches a system call.

use crate::models::{BlurMode, CornerStyle, RgbColor, WindowStyleRequest};
use crate::utils::error::{AppError, AppResult};

/// Three required flag/value pairs.
pub const MIN_TOKENS: usize = 6;

/// Recognised flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Type,
    Corner,
    Title,
    Opacity,
    TintColor,
    BorderVisible,
    BorderColor,
}

impl Flag {
    const ALL: [Flag; 7] = [
        Flag::Type,
        Flag::Corner,
        Flag::Title,
        Flag::Opacity,
        Flag::TintColor,
        Flag::BorderVisible,
        Flag::BorderColor,
    ];

    fn name(self) -> &'static str {
        match self {
            Flag::Type => "type",
            Flag::Corner => "corner",
            Flag::Title => "title",
            Flag::Opacity => "opacity",
            Flag::TintColor => "tintColor",
            Flag::BorderVisible => "borderVisible",
            Flag::BorderColor => "borderColor",
        }
    }

    fn lookup(token: &str) -> Option<Self> {
        let name = token.strip_prefix('-')?;
        Self::ALL
            .into_iter()
            .find(|flag| name.eq_ignore_ascii_case(flag.name()))
    }
}

fn invalid(flag: Flag, expected: &str) -> AppError {
    AppError::Validation {
        flag: flag.name(),
        expected: expected.to_string(),
    }
}

fn parse_opacity(value: &str) -> AppResult<u8> {
    let expected = "must be between 0 and 255";
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| invalid(Flag::Opacity, &format!("{expected} (got \"{value}\")")))?;
    u8::try_from(parsed).map_err(|_| invalid(Flag::Opacity, expected))
}

fn parse_color(flag: Flag, value: &str) -> AppResult<RgbColor> {
    RgbColor::parse_hex(value).ok_or_else(|| {
        invalid(
            flag,
            &format!("must be a hex colour RRGGBB (000000-FFFFFF), got \"{value}\""),
        )
    })
}

fn parse_bool(value: &str) -> AppResult<bool> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(invalid(
            Flag::BorderVisible,
            "must be \"true\", \"false\", \"1\" or \"0\"",
        )),
    }
}

/// Parses the tokens that follow the program name.
///
/// Flags are matched case-insensitively and consumed strictly in pairs. The
/// first bad token aborts the whole parse. A flag given twice keeps its last value.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> AppResult<WindowStyleRequest> {
    if tokens.len() < MIN_TOKENS {
        return Err(AppError::Usage(format!(
            "expected at least {} arguments (-type, -corner and -title with values), got {}",
            MIN_TOKENS,
            tokens.len()
        )));
    }

    let mut mode = None;
    let mut corner = None;
    let mut title = None;
    let mut opacity = None;
    let mut tint_color = None;
    let mut border_visible = None;
    let mut border_color = None;

    for pair in tokens.chunks(2) {
        let raw_flag = pair[0].as_ref();
        let flag = Flag::lookup(raw_flag)
            .ok_or_else(|| AppError::Usage(format!("unrecognized argument \"{raw_flag}\"")))?;
        let value = pair
            .get(1)
            .map(|v| v.as_ref())
            .ok_or_else(|| AppError::Usage(format!("-{} requires a value", flag.name())))?;

        tracing::trace!(flag = flag.name(), value, "parsed argument");

        match flag {
            Flag::Type => {
                mode = Some(
                    BlurMode::from_name(value)
                        .ok_or_else(|| invalid(flag, "must be \"blur\" or \"acrylic\""))?,
                )
            }
            Flag::Corner => {
                corner = Some(CornerStyle::from_name(value).ok_or_else(|| {
                    invalid(flag, "must be \"none\", \"round\" or \"roundsmall\"")
                })?)
            }
            Flag::Title => {
                if value.is_empty() {
                    return Err(invalid(flag, "must not be empty"));
                }
                title = Some(value.to_string());
            }
            Flag::Opacity => opacity = Some(parse_opacity(value)?),
            Flag::TintColor => tint_color = Some(parse_color(flag, value)?),
            Flag::BorderVisible => border_visible = Some(parse_bool(value)?),
            Flag::BorderColor => border_color = Some(parse_color(flag, value)?),
        }
    }

    let missing = |flag: Flag| AppError::Usage(format!("missing required argument -{}", flag.name()));
    let mode = mode.ok_or_else(|| missing(Flag::Type))?;
    let corner = corner.ok_or_else(|| missing(Flag::Corner))?;
    let title = title.ok_or_else(|| missing(Flag::Title))?;

    let mut request = WindowStyleRequest::with_defaults(mode, corner, title);
    if let Some(opacity) = opacity {
        request.set_opacity(opacity);
    }
    if let Some(color) = tint_color {
        request.set_tint_color(color);
    }
    if let Some(visible) = border_visible {
        request.set_border_visible(visible);
    }
    if let Some(color) = border_color {
        request.set_border_color(color);
    }

    Ok(request)
}
