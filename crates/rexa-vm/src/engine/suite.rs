//! Batch runs over many inputs.

use std::fmt;

use log::debug;
use rexa_core::Automaton;

use super::run;

/// Outcome of one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("accepted"),
            Verdict::Rejected => f.write_str("rejected"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CaseResult {
    pub input: String,
    pub verdict: Verdict,
}

/// Verdicts in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SuiteReport {
    cases: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn cases(&self) -> &[CaseResult] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn accepted(&self) -> usize {
        self.cases.iter().filter(|c| c.verdict.is_accepted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.len() - self.accepted()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cases
            .iter()
            .map(|c| c.input.chars().count())
            .max()
            .unwrap_or(0)
            .max("input".len());
        writeln!(f, "{:<width$}  verdict", "input")?;
        for case in &self.cases {
            writeln!(f, "{:<width$}  {}", case.input, case.verdict)?;
        }
        write!(
            f,
            "\n{} accepted, {} rejected",
            self.accepted(),
            self.rejected()
        )
    }
}

/// Run every input against `automaton`.
pub fn run_suite<I, S>(automaton: &Automaton, inputs: I) -> SuiteReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cases: Vec<CaseResult> = inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref();
            CaseResult {
                input: input.to_string(),
                verdict: Verdict::from_accepted(run(automaton, input)),
            }
        })
        .collect();
    debug!("suite ran {} inputs against a {}", cases.len(), automaton.kind());
    SuiteReport { cases }
}

/// Split suite text into inputs: one per line, surrounding whitespace
/// trimmed, blank lines skipped.
pub fn parse_inputs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
