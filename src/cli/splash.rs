use std::{thread, time::Duration};

use colored::Colorize;

use crate::cli::output;
use crate::utils::build_info;

/// Brand screen shown before the login gate.
pub struct Splash<'a> {
    brand: &'a str,
}

impl<'a> Splash<'a> {
    pub fn new(brand: &'a str) -> Self {
        Self { brand }
    }

    pub fn text(&self) -> Vec<String> {
        let inner = format!("  {}  ", self.brand);
        let border = "*".repeat(inner.chars().count() + 2);
        vec![
            border.clone(),
            format!("*{inner}*"),
            border,
            build_info::current().summary(),
        ]
    }

    /// Prints the splash and blocks for `delay`; the caller moves on afterwards.
    pub fn show(&self, delay: Duration) {
        let color = output::current_preferences().color_enabled;
        let lines = self.text().into_iter().enumerate().map(|(idx, line)| {
            if color && idx < 3 {
                line.bright_magenta().bold().to_string()
            } else {
                line
            }
        });
        output::lines(lines);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_frames_the_brand() {
        let lines = Splash::new("webabiq").text();
        assert_eq!(lines[0], "*".repeat(13));
        assert_eq!(lines[1], "*  webabiq  *");
        assert_eq!(lines[2], lines[0]);
    }
}
