// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the postlens CLI.
//!
//! Output is a boxed report written to any [`Write`], so tests can render
//! into a buffer. Colors come from the OneDark palette and are only emitted
//! when stdout is a TTY and `NO_COLOR` is unset.

use std::io::{self, Write};

use postlens::{Explanation, PatternSet, Post, SearchResults};

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Color {
    /// OneDark foreground escape.
    fn escape(self) -> &'static str {
        match self {
            Color::Green => "\x1b[38;2;152;195;121m",
            Color::Yellow => "\x1b[38;2;229;192;123m",
            Color::Blue => "\x1b[38;2;97;175;239m",
            Color::Magenta => "\x1b[38;2;198;120;221m",
            Color::Cyan => "\x1b[38;2;86;182;194m",
            Color::Gray => "\x1b[38;2;92;99;112m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
    Dim,
}

impl Weight {
    fn escape(self) -> &'static str {
        match self {
            Weight::Normal => "",
            Weight::Bold => "\x1b[1m",
            Weight::Dim => "\x1b[2m",
        }
    }
}

/// Colors on for an interactive stdout without `NO_COLOR`.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Number of chars a terminal shows for `s`, skipping SGR escapes.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// Collapse whitespace and cut to at most `max` chars, ending in `…` if cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// A boxed report over some writer.
pub struct Report<W> {
    out: W,
    colors: bool,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self { out, colors }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: Color, weight: Weight, text: &str) -> String {
        if self.colors {
            format!("{}{}{}{}", weight.escape(), color.escape(), text, RESET)
        } else {
            text.to_string()
        }
    }

    fn open(&mut self, title: &str) -> io::Result<()> {
        let label = format!("─ {} ", self.paint(Color::Cyan, Weight::Bold, title));
        let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
        let left = self.paint(Color::Gray, Weight::Normal, "┌");
        let right = self.paint(Color::Gray, Weight::Normal, &format!("{rule}┐"));
        writeln!(self.out, "{left}{label}{right}")
    }

    fn line(&mut self, content: &str) -> io::Result<()> {
        let pad = " ".repeat(BOX_WIDTH.saturating_sub(visible_len(content)));
        let edge = self.paint(Color::Gray, Weight::Normal, "│");
        writeln!(self.out, "{edge}{content}{pad}{edge}")
    }

    fn close(&mut self) -> io::Result<()> {
        let bottom = format!("└{}┘", "─".repeat(BOX_WIDTH));
        let bottom = self.paint(Color::Gray, Weight::Normal, &bottom);
        writeln!(self.out, "{bottom}")
    }

    fn post_header(&self, rank: usize, post: &Post, score: Option<f64>) -> String {
        let rank = self.paint(Color::Gray, Weight::Normal, &format!("{rank:>3}."));
        let score = match score {
            Some(s) => self.paint(Color::Yellow, Weight::Bold, &format!("{s:>7.1}")),
            None => self.paint(Color::Gray, Weight::Normal, "      -"),
        };
        let author = post
            .author_username
            .as_deref()
            .map(|u| self.paint(Color::Magenta, Weight::Normal, &format!(" @{u}")))
            .unwrap_or_default();
        let id = self.paint(Color::Blue, Weight::Normal, &post.id);
        format!(" {rank} {score} {id}{author}")
    }

    /// Ranked or pass-through results, with explanations where given.
    pub fn results(
        &mut self,
        query: &str,
        results: &SearchResults<Post>,
        explanations: &[Option<Explanation>],
    ) -> io::Result<()> {
        let title = if results.is_ranked() {
            format!("RESULTS for \"{}\" ({})", query, results.len())
        } else {
            format!("ALL POSTS ({})", results.len())
        };
        self.open(&title)?;

        if results.is_empty() {
            let empty = self.paint(Color::Gray, Weight::Dim, " no matching posts");
            self.line(&empty)?;
        }

        let scores = results.scores();
        for (i, post) in results.records().enumerate() {
            let header = self.post_header(i + 1, post, scores.as_ref().map(|s| s[i]));
            self.line(&header)?;
            self.line(&format!("      {}", truncate_chars(&post.content, BOX_WIDTH - 8)))?;
            if !post.topics.is_empty() {
                let topics = truncate_chars(&post.topics.join(", "), BOX_WIDTH - 8);
                let topics = self.paint(Color::Green, Weight::Normal, &topics);
                self.line(&format!("      {topics}"))?;
            }

            let Some(Some(explanation)) = explanations.get(i) else {
                continue;
            };
            for m in &explanation.matches {
                let detail = format!(
                    "        {:<16} {:<24} {:>6.1}",
                    m.field.to_string(),
                    truncate_chars(&m.pattern, 24),
                    m.weighted
                );
                let detail = self.paint(Color::Gray, Weight::Dim, &detail);
                self.line(&detail)?;
            }
        }

        self.close()
    }

    /// Keywords and pattern set of a query, or a note that it was empty.
    pub fn expansion(&mut self, patterns: Option<&PatternSet>) -> io::Result<()> {
        self.open("EXPANSION")?;
        let Some(set) = patterns else {
            let note = self.paint(Color::Gray, Weight::Dim, " empty query: no filtering");
            self.line(&note)?;
            return self.close();
        };

        let query = self.paint(Color::Blue, Weight::Normal, set.query());
        self.line(&format!(" query     {query}"))?;

        let keywords: Vec<&str> = set.keywords().iter().map(String::as_str).collect();
        let keywords = truncate_chars(&keywords.join(", "), BOX_WIDTH - 12);
        let keywords = self.paint(Color::Green, Weight::Normal, &keywords);
        self.line(&format!(" keywords  {keywords}"))?;

        let count = self.paint(Color::Yellow, Weight::Bold, &set.len().to_string());
        self.line(&format!(" patterns  {count}"))?;
        for text in set.texts() {
            self.line(&format!("   {}", truncate_chars(text, BOX_WIDTH - 4)))?;
        }
        self.close()
    }
}
