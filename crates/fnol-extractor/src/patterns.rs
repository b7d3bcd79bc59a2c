//! Anchor pattern table for FNOL field extraction
//!
//! Each entry pairs a label anchor with a capture rule. Patterns are
//! case-insensitive and tolerate variable whitespace inside the label.
//! The `regex` crate has no lookaround, so multi-line "block" captures run
//! to the end of the document and are cut back afterwards at the first line
//! that starts with one of the entry's terminator keywords.

use once_cell::sync::Lazy;
use regex::Regex;

/// Identifies one entry in the pattern table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// `POLICY NUMBER:`
    PolicyNumber,
    /// `INSURED NAME:`
    InsuredName,
    /// `EFFECTIVE DATE(S):`
    EffectiveDates,
    /// `DATE OF LOSS:`
    DateOfLoss,
    /// `TIME OF LOSS:`
    TimeOfLoss,
    /// `LOSS LOCATION:` ... `STREET:`
    LossLocation,
    /// `ACCIDENT DESCRIPTION:`
    AccidentDescription,
    /// `CLAIMANT NAME:`
    ClaimantName,
    /// `OTHER VEHICLE OWNER:`
    OtherVehicleOwner,
    /// `PRIMARY CONTACT PHONE:`
    ContactPhone,
    /// `BODY TYPE:`
    BodyType,
    /// `VIN:`
    Vin,
    /// `PLATE NUMBER:`
    PlateNumber,
    /// `ESTIMATED DAMAGE AMOUNT:`
    DamageAmount,
    /// `CLAIM TYPE:`
    ClaimType,
    /// `ATTACHMENTS:`
    Attachments,
    /// `POLICE CONTACTED:`
    PoliceContacted,
    /// `INJURY DESCRIPTION|INFORMATION|STATUS:`
    Injury,
}

/// How far a capture may extend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRule {
    /// The regex capture is final
    Line,
    /// Keep lines until one starts with a terminator keyword
    Block {
        /// Keywords that begin the next section
        terminators: &'static [&'static str],
    },
}

struct PatternSpec {
    anchor: Anchor,
    source: &'static str,
    rule: CaptureRule,
}

const DESCRIPTION_TERMINATORS: &[&str] = &["OTHER", "CLAIM TYPE", "STATUS"];
const INJURY_TERMINATORS: &[&str] = &["OTHER", "CLAIM TYPE"];

const PATTERN_TABLE: &[PatternSpec] = &[
    PatternSpec {
        anchor: Anchor::PolicyNumber,
        source: r"(?i)POLICY\s+NUMBER:[ \t]*([A-Za-z0-9\-]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::InsuredName,
        source: r"(?i)INSURED\s+NAME:[ \t]*([A-Za-z \t]+?)[ \t]*(?:\r?\n|MAILING|$)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::EffectiveDates,
        source: r"(?i)EFFECTIVE\s+DATES?:[ \t]*([^\r\n]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::DateOfLoss,
        source: r"(?i)DATE\s+OF\s+LOSS:[ \t]*([0-9]{2}/[0-9]{2}/[0-9]{4})",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::TimeOfLoss,
        source: r"(?i)TIME\s+OF\s+LOSS:[ \t]*([0-9]{2}:[0-9]{2})",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::LossLocation,
        source: r"(?is)LOSS\s+LOCATION:.*?STREET:[ \t]*([^\r\n]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::AccidentDescription,
        source: r"(?i)ACCIDENT\s+DESCRIPTION:\s*([^\n]+(?:\n[^\n]*)*)",
        rule: CaptureRule::Block {
            terminators: DESCRIPTION_TERMINATORS,
        },
    },
    PatternSpec {
        anchor: Anchor::ClaimantName,
        source: r"(?i)CLAIMANT\s+NAME:[ \t]*([A-Za-z \t]+?)[ \t]*(?:\r?\n|PRIMARY|$)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::OtherVehicleOwner,
        source: r"(?i)OTHER\s+VEHICLE\s+OWNER:[ \t]*([^\r\n]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::ContactPhone,
        source: r"(?i)PRIMARY\s+CONTACT\s+PHONE:[ \t]*([^\r\n]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::BodyType,
        source: r"(?i)BODY\s+TYPE:[ \t]*([A-Za-z \t]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::Vin,
        source: r"(?i)\bVIN:[ \t]*([A-Za-z0-9]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::PlateNumber,
        source: r"(?i)PLATE\s+NUMBER:[ \t]*([A-Za-z0-9\-]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::DamageAmount,
        source: r"(?i)ESTIMATED\s+DAMAGE\s+AMOUNT:[ \t]*\$?[ \t]*([0-9,]+\.?[0-9]*)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::ClaimType,
        source: r"(?i)CLAIM\s+TYPE:[ \t]*([A-Za-z \t]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::Attachments,
        source: r"(?i)ATTACHMENTS:[ \t]*([^\r\n]+)",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::PoliceContacted,
        source: r"(?i)POLICE\s+CONTACTED:[ \t]*(Yes|No)\b",
        rule: CaptureRule::Line,
    },
    PatternSpec {
        anchor: Anchor::Injury,
        source: r"(?i)INJURY\s+(?:DESCRIPTION|INFORMATION|STATUS):\s*([^\n]+(?:\n[^\n]*)*)",
        rule: CaptureRule::Block {
            terminators: INJURY_TERMINATORS,
        },
    },
];

/// Repeated `WITNESS <n> NAME:` lines; every occurrence is collected
pub static WITNESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)WITNESS\s+[0-9]+\s+NAME:[ \t]*([A-Za-z \t]+?)[ \t]*(?:\r?\n|$)")
        .expect("witness pattern is a valid regex")
});

static PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    PATTERN_TABLE
        .iter()
        .map(|spec| FieldPattern {
            anchor: spec.anchor,
            regex: Regex::new(spec.source).expect("pattern table entries are valid regexes"),
            rule: spec.rule,
        })
        .collect()
});

/// A compiled anchor pattern
#[derive(Debug)]
pub struct FieldPattern {
    /// Which table entry this is
    pub anchor: Anchor,
    regex: Regex,
    /// Capture extent rule
    pub rule: CaptureRule,
}

impl FieldPattern {
    /// Look up the compiled pattern for an anchor
    pub fn get(anchor: Anchor) -> Option<&'static FieldPattern> {
        PATTERNS.iter().find(|p| p.anchor == anchor)
    }

    /// Find the first raw capture for this pattern
    ///
    /// Returns the captured text (block rules already truncated, not yet
    /// trimmed) and the remainder of the line on which the capture begins.
    pub fn capture<'t>(&self, text: &'t str) -> Option<RawCapture<'t>> {
        let group = self.regex.captures(text)?.get(1)?;
        let value = match self.rule {
            CaptureRule::Line => group.as_str(),
            CaptureRule::Block { terminators } => truncate_block(group.as_str(), terminators),
        };

        let rest = &text[group.start()..];
        let line_rest = rest.split('\n').next().unwrap_or(rest);

        Some(RawCapture { value, line_rest })
    }
}

/// A captured value plus the line context it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCapture<'t> {
    /// The captured text
    pub value: &'t str,
    /// Text from the start of the capture to the end of its line
    pub line_rest: &'t str,
}

/// Cut a block capture before the first line that starts a known section
///
/// The first line is always kept; terminators are matched as a
/// case-insensitive prefix of the raw line.
pub fn truncate_block<'t>(block: &'t str, terminators: &[&str]) -> &'t str {
    let mut end: usize = 0;
    for (idx, line) in block.split('\n').enumerate() {
        if idx > 0 && starts_with_any(line, terminators) {
            // Drop the newline that precedes the terminator line
            return &block[..end.saturating_sub(1)];
        }
        end += line.len() + 1;
    }
    block
}

fn starts_with_any(line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        line.get(..kw.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(kw))
    })
}
