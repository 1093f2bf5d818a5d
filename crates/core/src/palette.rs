//! Named colors and contrast themes.
//!
//! The accent and base tones are the Solarized palette. A [`Contrast`] theme
//! picks the background fill and the default stroke a sketch starts with.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::GeometryError;

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

pub const BASE03: Color = rgb8(0x00, 0x2b, 0x36);
pub const BASE02: Color = rgb8(0x07, 0x36, 0x42);
pub const BASE01: Color = rgb8(0x58, 0x6e, 0x75);
pub const BASE00: Color = rgb8(0x65, 0x7b, 0x83);
pub const BASE0: Color = rgb8(0x83, 0x94, 0x96);
pub const BASE1: Color = rgb8(0x93, 0xa1, 0xa1);
pub const BASE2: Color = rgb8(0xee, 0xe8, 0xd5);
pub const BASE3: Color = rgb8(0xfd, 0xf6, 0xe3);

pub const YELLOW: Color = rgb8(0xb5, 0x89, 0x00);
pub const ORANGE: Color = rgb8(0xcb, 0x4b, 0x16);
pub const RED: Color = rgb8(0xdc, 0x32, 0x2f);
pub const MAGENTA: Color = rgb8(0xd3, 0x36, 0x82);
pub const VIOLET: Color = rgb8(0x6c, 0x71, 0xc4);
pub const BLUE: Color = rgb8(0x26, 0x8b, 0xd2);
pub const CYAN: Color = rgb8(0x2a, 0xa1, 0x98);
pub const GREEN: Color = rgb8(0x85, 0x99, 0x00);

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
/// Fully transparent black.
pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// The eight accents, warm to cool.
pub const ACCENTS: [Color; 8] = [YELLOW, ORANGE, RED, MAGENTA, VIOLET, BLUE, CYAN, GREEN];

/// Looks up a palette entry by its lowercase name (`"base03"`, `"cyan"`, ...).
pub fn named(name: &str) -> Option<Color> {
    let color = match name {
        "base03" => BASE03,
        "base02" => BASE02,
        "base01" => BASE01,
        "base00" => BASE00,
        "base0" => BASE0,
        "base1" => BASE1,
        "base2" => BASE2,
        "base3" => BASE3,
        "yellow" => YELLOW,
        "orange" => ORANGE,
        "red" => RED,
        "magenta" => MAGENTA,
        "violet" => VIOLET,
        "blue" => BLUE,
        "cyan" => CYAN,
        "green" => GREEN,
        "black" => BLACK,
        "white" => WHITE,
        "clear" => CLEAR,
        _ => return None,
    };
    Some(color)
}

/// A background/stroke theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Dark,
    #[default]
    Light,
    Black,
    White,
    Clear,
}

impl Contrast {
    pub const ALL: [Contrast; 5] = [
        Contrast::Dark,
        Contrast::Light,
        Contrast::Black,
        Contrast::White,
        Contrast::Clear,
    ];

    pub fn from_name(name: &str) -> Result<Self, GeometryError> {
        match name {
            "dark" => Ok(Contrast::Dark),
            "light" => Ok(Contrast::Light),
            "black" => Ok(Contrast::Black),
            "white" => Ok(Contrast::White),
            "clear" => Ok(Contrast::Clear),
            other => Err(GeometryError::UnknownContrast(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Contrast::Dark => "dark",
            Contrast::Light => "light",
            Contrast::Black => "black",
            Contrast::White => "white",
            Contrast::Clear => "clear",
        }
    }

    pub fn background(self) -> Color {
        match self {
            Contrast::Dark => BASE03,
            Contrast::Light => BASE3,
            Contrast::Black => BLACK,
            Contrast::White => WHITE,
            Contrast::Clear => CLEAR,
        }
    }

    pub fn stroke(self) -> Color {
        match self {
            Contrast::Dark => BASE1,
            Contrast::Light => BASE01,
            Contrast::Black => WHITE,
            Contrast::White => BLACK,
            Contrast::Clear => BASE01,
        }
    }
}
