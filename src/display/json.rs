// src/display/json.rs

//! JSON-lines renderer.
//!
//! Each commit prints `{"text": ..., "tooltip": ..., "alt": ...}` on its own
//! line, which status bars with custom script modules can consume directly
//! (`text` and `tooltip` are Pango markup, `alt` carries the icon name).

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::{IndicatorDisplay, PresentationState};

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    text: &'a str,
    tooltip: &'a str,
    alt: &'a str,
}

/// Renders the presentation state to a writer (stdout in production).
#[derive(Debug)]
pub struct JsonLinesDisplay<W: Write + Send> {
    state: PresentationState,
    out: W,
}

impl<W: Write + Send> JsonLinesDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: PresentationState::default(),
            out,
        }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> IndicatorDisplay for JsonLinesDisplay<W> {
    fn set_icon(&mut self, icon: &str) -> Result<()> {
        self.state.set_icon(icon)
    }

    fn set_label_markup(&mut self, markup: &str) -> Result<()> {
        self.state.set_label_markup(markup)
    }

    fn set_tooltip_markup(&mut self, markup: &str) -> Result<()> {
        self.state.set_tooltip_markup(markup)
    }

    fn commit(&mut self) -> Result<()> {
        let line = JsonLine {
            text: &self.state.label_markup,
            tooltip: &self.state.tooltip_markup,
            alt: &self.state.icon,
        };
        serde_json::to_writer(&mut self.out, &line).context("serializing indicator state")?;
        self.out.write_all(b"\n").context("writing indicator state")?;
        self.out.flush().context("flushing indicator state")?;
        Ok(())
    }
}
