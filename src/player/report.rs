use std::fmt;

/// Lines produced by a successful command, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report made of a single line
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_lines() {
        let mut report = Report::line("Showing playlist: mix");
        report.push("No videos here yet");
        assert_eq!(report.to_string(), "Showing playlist: mix\nNo videos here yet");
        assert_eq!(Report::line("Deleted playlist: mix").to_string(), "Deleted playlist: mix");
    }
}
