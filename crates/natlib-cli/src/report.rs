use crate::arch::Arch;
use serde::Serialize;
use std::fmt::Write;

pub const BANNER: &str = "=== Native Library Functions Called over the C ABI ===";
pub const FOOTER: &str = "=== All calls completed successfully! ===";

/// One native call and its rendered result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub call: String,
    pub value: String,
}

/// A titled group of calls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// Results of a driver run, in call order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub arch: Arch,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(arch: Arch) -> Self {
        Report { arch, sections: Vec::new() }
    }

    /// Append an entry, opening a new section when the title changes
    pub fn record(&mut self, section: &str, entry: Entry) {
        match self.sections.last_mut() {
            Some(last) if last.title == section => last.entries.push(entry),
            _ => self.sections.push(Section {
                title: section.to_string(),
                entries: vec![entry],
            }),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", BANNER);
        let _ = writeln!(out, "Host architecture: {}", self.arch);

        for section in &self.sections {
            let _ = writeln!(out, "\n--- {} ---", section.title);
            for entry in &section.entries {
                let _ = writeln!(out, "{} = {}", entry.call, entry.value);
            }
        }

        let _ = writeln!(out, "\n{}", FOOTER);
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
