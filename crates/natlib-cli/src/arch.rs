use serde::Serialize;
use std::fmt;

/// Architecture family reported by the caller shim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Arm64,
    Amd64,
    Unknown,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::Amd64 => "amd64",
            Arch::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a platform-reported architecture name
///
/// Matching is ASCII case-insensitive and ignores surrounding whitespace.
/// Anything outside the two supported families, including a missing value,
/// maps to [`Arch::Unknown`].
pub fn normalized_arch(raw: Option<&str>) -> Arch {
    let Some(raw) = raw else {
        return Arch::Unknown;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "aarch64" | "arm64" => Arch::Arm64,
        "amd64" | "x86_64" | "x64" => Arch::Amd64,
        _ => Arch::Unknown,
    }
}

/// Architecture of the machine this binary was built for
pub fn host_arch() -> Arch {
    let reported = target_lexicon::HOST.architecture.to_string();
    normalized_arch(Some(&reported))
}

/// Normalize an explicit value, falling back to the host when it is absent or blank
pub fn resolve_arch(raw: Option<&str>) -> Arch {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => normalized_arch(Some(value)),
        None => host_arch(),
    }
}
