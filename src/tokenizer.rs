use crate::keyword::Keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Keyword(Keyword, String),
    /// A line no keyword matched, kept trimmed for diagnostics.
    Unrecognized(String),
}

impl Command {
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Command::Keyword(keyword, _) => Some(*keyword),
            Command::Unrecognized(_) => None,
        }
    }

    pub fn argument(&self) -> &str {
        match self {
            Command::Keyword(_, argument) => argument,
            Command::Unrecognized(line) => line,
        }
    }
}

/// How a keyword has to sit at the start of a line to count as a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Any line starting with the keyword text, so `LOCOMOTION` is a `LOCO`.
    #[default]
    Prefix,
    /// The keyword must be followed by whitespace or the end of the line.
    WholeWord,
}

pub fn classify(line: &str) -> Command {
    classify_with(line, MatchPolicy::Prefix)
}

pub fn classify_with(line: &str, policy: MatchPolicy) -> Command {
    let line = line.trim();

    match first_keyword(line, policy) {
        Some((keyword, rest)) => {
            // One separator character is dropped, whatever it is.
            let rest = rest
                .chars()
                .next()
                .map_or(rest, |c| &rest[c.len_utf8()..]);
            Command::Keyword(keyword, rest.trim().to_string())
        }
        None => Command::Unrecognized(line.to_string()),
    }
}

fn first_keyword(source: &str, policy: MatchPolicy) -> Option<(Keyword, &str)> {
    Keyword::ALL
        .iter()
        .find_map(|keyword| keyword_prefix(*keyword, source, policy))
}

fn keyword_prefix(keyword: Keyword, source: &str, policy: MatchPolicy) -> Option<(Keyword, &str)> {
    let rest = source.strip_prefix(keyword.as_str())?;
    match policy {
        MatchPolicy::Prefix => Some((keyword, rest)),
        MatchPolicy::WholeWord => {
            if rest.chars().next().map_or(true, char::is_whitespace) {
                Some((keyword, rest))
            } else {
                None
            }
        }
    }
}
