//! Tree renderer — pure presentation over a finalized record and bundle.
//!
//! Five ornament anchors plus a star anchor, each bound to one message.
//! Shape and color tokens pick the glyph and ANSI color only; they have no
//! behavioral effect.

use crate::generator::{MessageBundle, ORNAMENT_COUNT};
use crate::quiz::{OrnamentColor, OrnamentShape, PreferenceRecord};

/// A hotspot on the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Star,
    Ornament(usize),
}

/// A laid-out tree: decorative variant tokens plus the message bindings.
pub struct TreeScene {
    shape: OrnamentShape,
    color: OrnamentColor,
    star_message: String,
    ornament_messages: [String; ORNAMENT_COUNT],
}

impl TreeScene {
    pub fn new(prefs: &PreferenceRecord, bundle: &MessageBundle) -> Self {
        Self {
            shape: prefs.ornament_shape,
            color: prefs.ornament_color,
            star_message: bundle.star_message.clone(),
            ornament_messages: bundle.ornament_messages.clone(),
        }
    }

    /// The message bound to an anchor. The hover/focus equivalent: callers
    /// show the returned text while the anchor is selected.
    pub fn reveal(&self, anchor: Anchor) -> Option<&str> {
        match anchor {
            Anchor::Star => Some(&self.star_message),
            Anchor::Ornament(i) => self.ornament_messages.get(i).map(String::as_str),
        }
    }

    fn glyph(&self) -> char {
        match self.shape {
            OrnamentShape::Circle => 'o',
            OrnamentShape::Star => '*',
            OrnamentShape::Gingerbread => '@',
        }
    }

    fn ansi_color(&self) -> &'static str {
        match self.color {
            OrnamentColor::Red => "\x1b[31m",
            OrnamentColor::Gold => "\x1b[33m",
            OrnamentColor::Blue => "\x1b[34m",
            OrnamentColor::Green => "\x1b[32m",
        }
    }

    /// Render the decorative scene. Ornaments are numbered 1-5 so the
    /// terminal front-end can ask which one to reveal; `s` is the star.
    pub fn render(&self) -> String {
        let g = self.glyph();
        let c = self.ansi_color();
        let r = "\x1b[0m";
        let mut out = String::new();
        out.push_str("           [s]\n");
        out.push_str("            ^\n");
        out.push_str("           / \\\n");
        out.push_str(&format!("          / {c}{g}{r}1 \\\n"));
        out.push_str("         /     \\\n");
        out.push_str(&format!("        / {c}{g}{r}2 {c}{g}{r}3  \\\n"));
        out.push_str("       /         \\\n");
        out.push_str(&format!("      /  {c}{g}{r}4   {c}{g}{r}5   \\\n"));
        out.push_str("     /_____________\\\n");
        out.push_str("           |||\n");
        out
    }
}
