//! Terminal presentation helpers

use colored::*;

const RULE_WIDTH: usize = 60;

/// Print the startup banner
pub fn banner() {
    println!("{}", "╔══════════════════════════════════════════════╗".cyan());
    println!("{}", "║          🎮 NUMBER GUESSING DUEL 🎮          ║".cyan().bold());
    println!("{}", "║       Two LLM players, one secret number     ║".cyan());
    println!("{}", "╚══════════════════════════════════════════════╝".cyan());
}

/// Print the rules summary for the configured game
pub fn intro(min: i64, max: i64, max_guesses: u32) {
    println!();
    println!("{}", "How it works:".bold());
    println!("   The setter picks a secret number between {} and {}", min, max);
    println!("   The guesser has {} guesses to find it", max_guesses);
    println!("   Hints may be offered along the way, but beware misdirection");
    println!();
}

/// Print a horizontal rule with a centered title
pub fn section(title: &str) {
    let titled = format!(" {} ", title);
    println!();
    println!("{}", format!("{:═^width$}", titled, width = RULE_WIDTH).yellow());
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_printing_does_not_panic() {
        super::banner();
        super::intro(1, 100, 10);
        super::section("ROUND 1/10");
    }
}
