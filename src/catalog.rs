use std::fmt::Display;

use crate::keyword::Keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: String,
    pub description: String,
}

impl SymbolEntry {
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            description: description.into(),
        }
    }
}

impl Display for SymbolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<10} {}", self.symbol, self.description)
    }
}

/// The reference table shown before any script-derived entry.
/// `MORIRÁ` is listed even though the classifier has no such keyword.
pub const BASE_CATALOG: [(&str, &str); 10] = [
    ("JUSTICIA", "Inicia el programa."),
    ("PAPAFRITA", "Asignación de variable."),
    ("PLAN", "Condicional IF."),
    ("VICTORIA", "Alternativa ELSE."),
    ("BORRAR", "Eliminación de variable."),
    ("MANZANA", "Inicia un ciclo/bucle."),
    ("MORIRÁ", "Condicional IF con eliminación."),
    ("FIN", "Finaliza un bloque."),
    ("LOCO", "Imprimir mensaje."),
    ("GANE", "Termina el programa."),
];

pub fn build_catalog(script: &str) -> Vec<SymbolEntry> {
    let mut catalog: Vec<SymbolEntry> = BASE_CATALOG
        .iter()
        .map(|(symbol, description)| SymbolEntry::new(*symbol, *description))
        .collect();

    // Lines are not trimmed, so indented declarations are left out.
    catalog.extend(script.split('\n').filter_map(derived_entry));

    catalog
}

fn derived_entry(line: &str) -> Option<SymbolEntry> {
    let (keyword, label) = if line.starts_with(Keyword::Papafrita.as_str()) {
        (Keyword::Papafrita, "Asignación de variable")
    } else if line.starts_with(Keyword::Plan.as_str()) {
        (Keyword::Plan, "Condicional IF")
    } else {
        return None;
    };

    Some(SymbolEntry::new(
        keyword.as_str(),
        format!("{} -> {}", label, line),
    ))
}
