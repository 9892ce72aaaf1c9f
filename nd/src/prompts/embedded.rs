//! Embedded prompts
//!
//! Compiled into the binary from the repo's .pmt files at build time, so
//! the game runs without any prompt files installed.

use tracing::debug;

/// Setter role system prompt
pub const SETTER_SYSTEM: &str = include_str!("../../prompts/setter-system.pmt");

/// Guesser role system prompt
pub const GUESSER_SYSTEM: &str = include_str!("../../prompts/guesser-system.pmt");

/// Secret number selection prompt
pub const CHOOSE_SECRET: &str = include_str!("../../prompts/choose-secret.pmt");

/// Next guess prompt
pub const NEXT_GUESS: &str = include_str!("../../prompts/next-guess.pmt");

/// Hint request prompt
pub const HINT: &str = include_str!("../../prompts/hint.pmt");

/// Hint analysis prompt
pub const ANALYZE: &str = include_str!("../../prompts/analyze.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "setter-system" => Some(SETTER_SYSTEM),
        "guesser-system" => Some(GUESSER_SYSTEM),
        "choose-secret" => Some(CHOOSE_SECRET),
        "next-guess" => Some(NEXT_GUESS),
        "hint" => Some(HINT),
        "analyze" => Some(ANALYZE),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_embedded() {
        for name in [
            "setter-system",
            "guesser-system",
            "choose-secret",
            "next-guess",
            "hint",
            "analyze",
        ] {
            assert!(get_embedded(name).is_some(), "missing template {}", name);
        }
    }

    #[test]
    fn test_system_prompts_describe_roles() {
        assert!(get_embedded("setter-system").unwrap().contains("Setter"));
        assert!(get_embedded("guesser-system").unwrap().contains("Guesser"));
        assert!(get_embedded("guesser-system").unwrap().contains("{{max_guesses}}"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("unknown-template").is_none());
    }
}
