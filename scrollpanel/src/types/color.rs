use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// CSS names accepted by [`Color::from_str`].
const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("green", Rgb::new(0, 128, 0)),
    ("grey", Rgb::new(128, 128, 128)),
    ("gray", Rgb::new(128, 128, 128)),
    ("lightblue", Rgb::new(173, 216, 230)),
    ("red", Rgb::new(255, 0, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(hex) = text.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(args) = function_args(&text, "rgb") {
            let [r, g, b] = parse_triple::<u8>(args).ok_or_else(invalid)?;
            return Ok(Color::rgb(r, g, b));
        }

        if let Some(args) = function_args(&text, "oklch") {
            let [l, c, h] = parse_triple::<f32>(args).ok_or_else(invalid)?;
            return Ok(Color::oklch(l, c, h));
        }

        NAMED
            .iter()
            .find(|(name, _)| *name == text)
            .map(|(_, rgb)| Color::rgb(rgb.r, rgb.g, rgb.b))
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_triple<T: FromStr>(args: &str) -> Option<[T; 3]> {
    let mut parts = args.split(',').map(|p| p.trim().parse::<T>().ok());
    let triple = [parts.next()??, parts.next()??, parts.next()??];
    if parts.next().is_some() {
        return None;
    }
    Some(triple)
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
