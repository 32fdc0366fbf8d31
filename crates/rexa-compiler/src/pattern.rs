//! High-level facade over the compilation pipeline.
//!
//! ```text
//! text ─validate→ text ─insert_concat→ text ─to_postfix→ Postfix ─build_nfa→ Nfa ─to_dfa→ Dfa
//! ```

use log::{debug, info};
use rexa_core::{Automaton, AutomatonKind, ClosureMode, Nfa, Snapshot};

use crate::compile::{build_nfa, to_dfa};
use crate::syntax::{Postfix, insert_concat, to_postfix, validate};
use crate::{Error, Result};

/// Knobs for one compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
}

impl CompileOptions {
    pub fn new(kind: AutomatonKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_closure(mut self, closure: ClosureMode) -> Self {
        self.closure = closure;
        self
    }
}

/// Compile `regex` into an automaton of the requested kind with default options.
pub fn compile(regex: &str, kind: AutomatonKind) -> Result<Compiled> {
    PatternBuilder::new(regex).kind(kind).compile()
}

pub struct PatternBuilder<'p> {
    src: &'p str,
    options: CompileOptions,
}

impl<'p> PatternBuilder<'p> {
    pub fn new(src: &'p str) -> Self {
        Self {
            src,
            options: CompileOptions::default(),
        }
    }

    pub fn kind(mut self, kind: AutomatonKind) -> Self {
        self.options.kind = kind;
        self
    }

    /// Closure used by subset construction. Has no effect on NFA output.
    pub fn closure(mut self, closure: ClosureMode) -> Self {
        self.options.closure = closure;
        self
    }

    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate and translate to postfix without building an automaton.
    pub fn parse(self) -> Result<Parsed<'p>> {
        let diagnostics = validate(self.src);
        if !diagnostics.is_empty() {
            debug!("rejected {:?}: {} problems", self.src, diagnostics.len());
            return Err(Error::Validation(diagnostics));
        }

        let concat = insert_concat(self.src);
        let postfix = to_postfix(&concat);
        Ok(Parsed {
            src: self.src,
            options: self.options,
            concat,
            postfix,
        })
    }

    pub fn compile(self) -> Result<Compiled> {
        self.parse()?.compile()
    }
}

/// A validated pattern, translated to postfix.
#[derive(Debug, Clone)]
pub struct Parsed<'p> {
    src: &'p str,
    options: CompileOptions,
    concat: String,
    postfix: Postfix,
}

impl<'p> Parsed<'p> {
    pub fn source(&self) -> &'p str {
        self.src
    }

    /// The pattern with every concatenation written as `.`.
    pub fn concat(&self) -> &str {
        &self.concat
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn compile(self) -> Result<Compiled> {
        let automaton = assemble(&self.postfix, self.options)?;
        info!(
            "compiled {:?} into a {}-state {}",
            self.src,
            automaton.len(),
            automaton.kind()
        );
        Ok(Compiled {
            regex: Some(self.src.to_string()),
            concat: Some(self.concat),
            postfix: self.postfix,
            automaton,
            closure: self.options.closure,
        })
    }
}

fn assemble(postfix: &Postfix, options: CompileOptions) -> Result<Automaton> {
    let nfa: Nfa = build_nfa(postfix)?;
    Ok(match options.kind {
        AutomatonKind::Nfa => nfa.into(),
        AutomatonKind::Dfa => to_dfa(&nfa, options.closure)?.into(),
    })
}

/// A compiled pattern together with the intermediate forms it went through.
#[derive(Debug, Clone)]
pub struct Compiled {
    regex: Option<String>,
    concat: Option<String>,
    postfix: Postfix,
    automaton: Automaton,
    closure: ClosureMode,
}

impl Compiled {
    /// Original pattern text. Absent when rebuilt from a snapshot that did
    /// not record it.
    pub fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    pub fn concat(&self) -> Option<&str> {
        self.concat.as_deref()
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }

    pub fn kind(&self) -> AutomatonKind {
        self.automaton.kind()
    }

    pub fn closure(&self) -> ClosureMode {
        self.closure
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.automaton,
            self.postfix.to_string(),
            self.regex.clone(),
            self.closure,
        )
    }

    /// Rebuild from the postfix, kind and closure mode a snapshot recorded.
    ///
    /// The stored edges are not trusted; the automaton is recompiled, so the
    /// result behaves like the original but may number states differently.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let postfix = Postfix::parse(&snapshot.postfix)?;
        let options = CompileOptions::new(snapshot.kind).with_closure(snapshot.closure);
        let automaton = assemble(&postfix, options)?;
        debug!(
            "rebuilt {} from snapshot postfix {}",
            automaton.kind(),
            snapshot.postfix
        );
        Ok(Self {
            concat: snapshot.regex.as_deref().map(insert_concat),
            regex: snapshot.regex.clone(),
            postfix,
            automaton,
            closure: snapshot.closure,
        })
    }

    /// Parse snapshot JSON and rebuild from it.
    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot = Snapshot::from_json(text)?;
        Self::from_snapshot(&snapshot)
    }
}
