//! Tracing infrastructure for simulation runs.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so untraced
//! runs carry no tracing cost. `PrintTracer` collects one line per event.

use std::fmt::Write as _;

use rexa_core::{AutomatonKind, Colors, StateId, StateSet};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// NFA steps show how many states are active.
    #[default]
    Default,
    /// NFA steps list every active state.
    Verbose,
}

/// What is active after a step.
#[derive(Clone, Copy, Debug)]
pub enum Active<'a> {
    Nfa(&'a StateSet),
    Dfa(StateId),
}

impl Active<'_> {
    pub fn kind(&self) -> AutomatonKind {
        match self {
            Active::Nfa(_) => AutomatonKind::Nfa,
            Active::Dfa(_) => AutomatonKind::Dfa,
        }
    }
}

/// Tracer trait for simulation instrumentation.
///
/// - `trace_start` - once, with the initial active states
/// - `trace_step` - after each consumed symbol that leaves something active
/// - `trace_stuck` - after a symbol that leaves nothing active (NFA) or has
///   no table column (DFA)
/// - `trace_finish` - once, with the verdict
pub trait Tracer {
    fn trace_start(&mut self, active: Active<'_>);

    fn trace_step(&mut self, position: usize, symbol: char, active: Active<'_>);

    fn trace_stuck(&mut self, position: usize, symbol: char);

    fn trace_finish(&mut self, accepted: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _active: Active<'_>) {}

    #[inline(always)]
    fn trace_step(&mut self, _position: usize, _symbol: char, _active: Active<'_>) {}

    #[inline(always)]
    fn trace_stuck(&mut self, _position: usize, _symbol: char) {}

    #[inline(always)]
    fn trace_finish(&mut self, _accepted: bool) {}
}

/// Tracer that collects human-readable lines.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn format_active(&self, active: Active<'_>) -> String {
        let c = self.colors;
        match active {
            Active::Dfa(state) => format!("{}D{state}{}", c.state, c.reset),
            Active::Nfa(set) if self.verbosity == Verbosity::Verbose => {
                let mut out = String::from("{");
                for (i, state) in set.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    write!(out, "{}{state}{}", c.state, c.reset).expect("String write never fails");
                }
                out.push('}');
                out
            }
            Active::Nfa(set) => {
                let noun = if set.len() == 1 { "state" } else { "states" };
                format!("{} {noun}", set.len())
            }
        }
    }

    fn format_symbol(&self, position: usize, symbol: char) -> String {
        let c = self.colors;
        format!("{position:>3}  {}{symbol}{}", c.symbol, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, active: Active<'_>) {
        let c = self.colors;
        let line = format!(
            "{}{} start{} {}",
            c.dim,
            active.kind(),
            c.reset,
            self.format_active(active)
        );
        self.lines.push(line);
    }

    fn trace_step(&mut self, position: usize, symbol: char, active: Active<'_>) {
        let c = self.colors;
        let line = format!(
            "{} {}->{} {}",
            self.format_symbol(position, symbol),
            c.dim,
            c.reset,
            self.format_active(active)
        );
        self.lines.push(line);
    }

    fn trace_stuck(&mut self, position: usize, symbol: char) {
        let c = self.colors;
        let line = format!(
            "{} {}->{} stuck",
            self.format_symbol(position, symbol),
            c.dim,
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_finish(&mut self, accepted: bool) {
        let c = self.colors;
        let line = if accepted {
            format!("{}accepted{}", c.accept, c.reset)
        } else {
            "rejected".to_string()
        };
        self.lines.push(line);
    }
}
