//! Deterministic enumeration of a compiled automaton.
//!
//! `inspect` walks the automaton once, depth-first from the start state, and
//! numbers states in visit order (`S0` is always the start state). Labeled
//! edges are followed before ε-edges. The resulting `Listing` is what
//! renderers, exporters and metrics consume; none of it feeds back into
//! compilation.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use indexmap::IndexMap;

use crate::Colors;
use crate::automaton::Graph;
use crate::state::StateId;
use crate::symbol::Label;

/// One edge between display labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub from: usize,
    pub label: Label,
    pub to: usize,
}

/// Ordered edge enumeration with sequential display labels.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    /// Display label index → state id.
    labels: IndexMap<StateId, usize>,
    edges: Vec<Edge>,
    accepts: Vec<usize>,
}

/// Enumerate the states and edges reachable from the start state.
pub fn inspect<G: Graph + ?Sized>(graph: &G) -> Listing {
    let mut labels: IndexMap<StateId, usize> = IndexMap::new();
    let mut stack = vec![graph.start()];

    // Children are pushed in reverse so that pops replay recursive pre-order.
    while let Some(state) = stack.pop() {
        if labels.contains_key(&state) {
            continue;
        }
        labels.insert(state, labels.len());

        let mut successors: Vec<StateId> =
            graph.labeled_edges(state).into_iter().map(|(_, t)| t).collect();
        successors.extend_from_slice(graph.epsilon_edges(state));
        stack.extend(successors.into_iter().rev());
    }

    let mut edges = Vec::new();
    let mut accepts = Vec::new();
    for (&state, &from) in &labels {
        for (symbol, target) in graph.labeled_edges(state) {
            edges.push(Edge {
                from,
                label: Label::Symbol(symbol),
                to: labels[&target],
            });
        }
        for target in graph.epsilon_edges(state) {
            edges.push(Edge {
                from,
                label: Label::Epsilon,
                to: labels[target],
            });
        }
        if graph.is_accepting(state) {
            accepts.push(from);
        }
    }

    Listing {
        labels,
        edges,
        accepts,
    }
}

impl Listing {
    /// Display label of the start state.
    pub fn start(&self) -> usize {
        0
    }

    /// Display labels of accepting states, ascending.
    pub fn accepts(&self) -> &[usize] {
        &self.accepts
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of reachable states.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Display label assigned to `state`, if it was reached.
    pub fn label_of(&self, state: StateId) -> Option<usize> {
        self.labels.get(&state).copied()
    }

    /// State id behind a display label.
    pub fn state_at(&self, label: usize) -> Option<StateId> {
        self.labels.get_index(label).map(|(&state, _)| state)
    }

    /// Printable name of a display label.
    pub fn name(label: usize) -> String {
        format!("S{label}")
    }

    /// Render as the `S0 -- a --> S1` transcript.
    pub fn render(&self, colors: Colors) -> String {
        let c = colors;
        let mut out = String::new();
        for edge in &self.edges {
            writeln!(
                out,
                "{}S{}{} {}--{} {}{}{} {}-->{} {}S{}{}",
                c.state, edge.from, c.reset,
                c.dim, c.reset,
                c.symbol, edge.label, c.reset,
                c.dim, c.reset,
                c.state, edge.to, c.reset,
            )
            .expect("String write never fails");
        }
        out.push('\n');
        writeln!(out, "Start: {}S{}{}", c.state, self.start(), c.reset)
            .expect("String write never fails");
        let accepts = if self.accepts.is_empty() {
            format!("{}(none){}", c.dim, c.reset)
        } else {
            self.accepts
                .iter()
                .map(|a| format!("{}S{a}{}", c.accept, c.reset))
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(out, "Accept: {accepts}").expect("String write never fails");
        out
    }

    /// Graphviz source for an external renderer.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph G {\n  rankdir=LR;\n");
        for label in 0..self.len() {
            let shape = if self.accepts.contains(&label) {
                "doublecircle"
            } else {
                "circle"
            };
            writeln!(out, "  S{label} [shape={shape}];").expect("String write never fails");
        }
        for edge in &self.edges {
            writeln!(
                out,
                "  S{} -> S{} [label=\"{}\"];",
                edge.from, edge.to, edge.label
            )
            .expect("String write never fails");
        }
        out.push_str("}\n");
        out
    }

    /// Metrics over the reachable part of the automaton.
    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            states: self.len(),
            accepting: self.accepts.len(),
            ..Stats::default()
        };
        let mut epsilon_sources = vec![false; self.len()];
        for edge in &self.edges {
            match edge.label {
                Label::Symbol(c) => {
                    stats.transitions += 1;
                    *stats.symbol_frequency.entry(c).or_default() += 1;
                }
                Label::Epsilon => {
                    stats.epsilon_transitions += 1;
                    epsilon_sources[edge.from] = true;
                }
            }
        }
        stats.epsilon_states = epsilon_sources.into_iter().filter(|&b| b).count();
        stats.other = stats
            .states
            .saturating_sub(stats.accepting + stats.epsilon_states);
        stats
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Colors::OFF))
    }
}

impl serde::Serialize for Listing {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Listing", 4)?;
        s.serialize_field("states", &self.len())?;
        s.serialize_field("start", &self.start())?;
        s.serialize_field("accepts", &self.accepts)?;
        s.serialize_field("edges", &self.edges)?;
        s.end()
    }
}

/// Size metrics of a compiled automaton.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    /// Reachable states.
    pub states: usize,
    /// Labeled edges.
    pub transitions: usize,
    pub epsilon_transitions: usize,
    pub accepting: usize,
    /// States with at least one ε out-edge.
    pub epsilon_states: usize,
    /// States counted in neither `accepting` nor `epsilon_states`, floored at zero.
    pub other: usize,
    /// Labeled edge count per symbol.
    pub symbol_frequency: BTreeMap<char, usize>,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "states:              {}", self.states)?;
        writeln!(f, "transitions:         {}", self.transitions)?;
        writeln!(f, "epsilon transitions: {}", self.epsilon_transitions)?;
        writeln!(f, "accepting states:    {}", self.accepting)?;
        writeln!(f, "epsilon states:      {}", self.epsilon_states)?;
        writeln!(f, "other states:        {}", self.other)?;
        let frequency = self
            .symbol_frequency
            .iter()
            .map(|(c, n)| format!("{c}={n}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "symbols:             {frequency}")
    }
}
