//! Demonstration battery.
//!
//! A fixed set of snippets with the language each should be detected as,
//! run through the same classifier every other caller uses.

use std::fmt;

use serde::Serialize;

use crate::language::LanguageClassifier;

/// One sample snippet and the language it should be detected as.
#[derive(Debug, Clone, Copy)]
pub struct DemoSample {
    pub name: &'static str,
    pub snippet: &'static str,
    pub expected: &'static str,
}

pub const SAMPLES: &[DemoSample] = &[
    DemoSample {
        name: "javascript fibonacci",
        snippet: "function fibonacci(n) { if (n <= 1) return n; return fibonacci(n-1)+fibonacci(n-2); }",
        expected: "javascript",
    },
    DemoSample {
        name: "python class",
        snippet: "class Calculator:\n    def __init__(self):\n        self.result = 0",
        expected: "python",
    },
    DemoSample {
        name: "c++ hello",
        snippet: "#include <iostream>\nusing namespace std;\nint main(){ return 0; }",
        expected: "cpp",
    },
    DemoSample {
        name: "sql select",
        snippet: "SELECT * FROM users WHERE id = 1;",
        expected: "sql",
    },
    DemoSample {
        name: "java class",
        snippet: "public class Foo {}",
        expected: "java",
    },
    DemoSample {
        name: "rust main",
        snippet: "fn main() {\n    let mut total = 0;\n    println!(\"{}\", total);\n}",
        expected: "rust",
    },
    DemoSample {
        name: "go hello",
        snippet: "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}",
        expected: "go",
    },
    DemoSample {
        name: "typescript interface",
        snippet: "interface User {\n  name: string;\n  age: number;\n}",
        expected: "typescript",
    },
    DemoSample {
        name: "bash loop",
        snippet: "#!/bin/bash\necho \"Hello\"\nfor f in *.txt; do\n  echo $f\ndone",
        expected: "bash",
    },
    DemoSample {
        name: "plain prose",
        snippet: "just some plain english prose with no code at all",
        expected: "text",
    },
];

/// Result of running one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoOutcome {
    pub name: &'static str,
    pub expected: &'static str,
    pub detected: String,
    pub confidence: u8,
}

impl DemoOutcome {
    pub fn passed(&self) -> bool {
        self.detected == self.expected
    }
}

/// Outcomes for a whole battery, in sample order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub outcomes: Vec<DemoOutcome>,
}

impl DemoReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let mark = if outcome.passed() { "PASS" } else { "FAIL" };
            writeln!(
                f,
                "{mark} {:<22} expected {:<11} detected {:<11} ({}%)",
                outcome.name, outcome.expected, outcome.detected, outcome.confidence
            )?;
        }
        write!(
            f,
            "{} passed, {} failed ({} samples)",
            self.passed(),
            self.failed(),
            self.outcomes.len()
        )
    }
}

/// Run `samples` through `classifier`.
pub fn run(classifier: &LanguageClassifier, samples: &[DemoSample]) -> DemoReport {
    let snippets: Vec<&str> = samples.iter().map(|s| s.snippet).collect();
    let results = classifier.classify_batch(&snippets);
    let outcomes = samples
        .iter()
        .zip(results)
        .map(|(sample, result)| DemoOutcome {
            name: sample.name,
            expected: sample.expected,
            detected: result.language,
            confidence: result.confidence,
        })
        .collect();
    DemoReport { outcomes }
}
