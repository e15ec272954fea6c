//! Grace text markup encoding.
//!
//! Titles, axis labels, legends and special-tick labels are written as quoted
//! strings in the output grammar. This module escapes embedded quotes and
//! translates the lightweight markup accepted by the builder API into Grace
//! escape sequences:
//!
//! - `\alpha`, `\Gamma`, … become Symbol-font runs (`\xa\f{}`)
//! - `^{...}` becomes a superscript run (`\S...\N`)
//! - `_{...}` becomes a subscript run (`\s...\N`)

/// Greek letter names recognized after a backslash, longest first so that
/// e.g. `\epsilon` is not consumed as `\eps`.
const GREEK_NAMES: [&str; 48] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega", "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota",
    "Kappa", "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi",
    "Chi", "Psi", "Omega",
];

/// Encode a label into the Grace string grammar.
///
/// The result is safe to embed between double quotes in a document directive.
#[must_use]
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '"' => {
                out.push_str("\\\"");
                i += 1;
            }
            '\\' => {
                if let Some((name, len)) = match_greek(&chars[i + 1..]) {
                    // Grace renders greek by switching to the Symbol font,
                    // addressed by the first letter of the name.
                    out.push_str("\\x");
                    out.push(name.chars().next().unwrap_or('a'));
                    out.push_str("\\f{}");
                    i += 1 + len;
                } else {
                    out.push('\\');
                    i += 1;
                }
            }
            '^' | '_' if chars.get(i + 1) == Some(&'{') => {
                let open = chars[i];
                if let Some(close) = find_close(&chars, i + 2) {
                    out.push_str(if open == '^' { "\\S" } else { "\\s" });
                    out.extend(&chars[i + 2..close]);
                    out.push_str("\\N");
                    i = close + 1;
                } else {
                    out.push(open);
                    i += 1;
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn match_greek(rest: &[char]) -> Option<(&'static str, usize)> {
    let mut best: Option<(&'static str, usize)> = None;
    for name in GREEK_NAMES {
        let len = name.chars().count();
        let longer = best.map_or(true, |(_, blen)| len > blen);
        if longer && rest.len() >= len && rest.iter().take(len).copied().eq(name.chars()) {
            best = Some((name, len));
        }
    }
    best
}

fn find_close(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len()).find(|&j| chars[j] == '}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(encode("Energy (eV)"), "Energy (eV)");
    }

    #[test]
    fn test_quote_escaped() {
        assert_eq!(encode("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn test_greek_lowercase() {
        assert_eq!(encode("\\alpha decay"), "\\xa\\f{} decay");
    }

    #[test]
    fn test_greek_uppercase() {
        assert_eq!(encode("\\Gamma"), "\\xG\\f{}");
    }

    #[test]
    fn test_greek_longest_match() {
        // eta must not shadow theta
        assert_eq!(encode("\\theta"), "\\xt\\f{}");
        assert_eq!(encode("\\eta"), "\\xe\\f{}");
    }

    #[test]
    fn test_superscript() {
        assert_eq!(encode("cm^{-1}"), "cm\\S-1\\N");
    }

    #[test]
    fn test_subscript() {
        assert_eq!(encode("E_{F}"), "E\\sF\\N");
    }

    #[test]
    fn test_unclosed_brace_left_alone() {
        assert_eq!(encode("x^{open"), "x^{open");
    }

    #[test]
    fn test_unknown_escape_passes_through() {
        assert_eq!(encode("a\\qb"), "a\\qb");
    }
}
