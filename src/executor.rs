use std::fmt::Display;

use rustc_hash::FxHashMap;

use crate::{
    keyword::Keyword,
    tokenizer::{classify_with, Command, MatchPolicy},
};

/// Names declared with `PAPAFRITA`, mapped to the 1-based line of their latest declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    declared: FxHashMap<String, usize>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str, line: usize) {
        self.declared.insert(name.to_string(), line);
    }

    pub fn remove(&mut self, name: &str) -> Option<usize> {
        self.declared.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.declared.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declared.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// Declared names with their line, ordered by line.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .declared
            .iter()
            .map(|(name, line)| (name.as_str(), *line))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        entries
    }
}

impl Display for Variables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, line) in self.sorted() {
            writeln!(f, "{:4} {}", line, name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    pub trace: Vec<String>,
    pub variables: Variables,
    /// Lines examined, including the one holding `GANE`.
    pub lines_processed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Executor {
    policy: MatchPolicy,
}

impl Executor {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn execute(&self, script: &str) -> Execution {
        let mut execution = Execution::default();

        for (index, line) in script.split('\n').enumerate() {
            let line_number = index + 1;
            let command = classify_with(line, self.policy);
            execution.lines_processed = line_number;

            #[cfg(feature = "trace")]
            eprintln!("{:4} {:?}", line_number, command);

            let Command::Keyword(keyword, argument) = command else {
                continue;
            };

            match keyword {
                Keyword::Papafrita => {
                    if let Some(name) = first_word(&argument) {
                        execution.variables.declare(name, line_number);
                    }
                }
                Keyword::Borrar => {
                    if let Some(name) = first_word(&argument) {
                        execution.variables.remove(name);
                    }
                }
                _ => {}
            }

            if let Some(entry) = trace_entry(keyword, &argument) {
                execution.trace.push(entry);
            }

            if keyword == Keyword::Gane {
                break;
            }
        }

        execution
    }
}

pub fn execute(script: &str) -> Execution {
    Executor::default().execute(script)
}

pub fn run(script: &str) -> Vec<String> {
    execute(script).trace
}

fn trace_entry(keyword: Keyword, argument: &str) -> Option<String> {
    let entry = match keyword {
        Keyword::Justicia => "Iniciando el programa...".to_string(),
        Keyword::Papafrita => format!("Declarando variable: {}", argument),
        Keyword::Loco => format!("Mensaje: {}", argument),
        Keyword::Plan => format!("Evaluando condición: {}", argument),
        Keyword::Victoria => "Condición cumplida, ejecutando bloque de victoria.".to_string(),
        Keyword::Manzana => "Iniciando bucle para comprobaciones.".to_string(),
        Keyword::Borrar => format!("Borrando variable: {}", argument),
        Keyword::Gane => "Terminando el programa.".to_string(),
        // Block terminator, accepted but silent.
        Keyword::Fin => return None,
    };
    Some(entry)
}

fn first_word(argument: &str) -> Option<&str> {
    argument.split_whitespace().next()
}
