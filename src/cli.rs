use clap::{ArgAction, Parser, Subcommand};

/// FoodScore: score a food catalog by protein density, carb quality, and macro balance.
#[derive(Parser, Debug)]
#[command(name = "food_score")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, env = "FOOD_SCORE_FILE", default_value = "foods.json")]
    pub file: String,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog foods ranked by nutrition score.
    List {
        /// Lowest scores first.
        #[arg(long)]
        ascending: bool,

        /// Only these categories (comma-separated, case-insensitive).
        #[arg(long)]
        category: Option<String>,

        /// Show at most this many foods.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the score breakdown of one catalog food.
    Show {
        /// Food name; prompted for when omitted.
        name: Option<String>,
    },

    /// Score an ad-hoc food from its macros per serving.
    Score {
        /// Grams of protein per serving.
        #[arg(long, allow_negative_numbers = true)]
        protein: f64,

        /// Grams of carbohydrate per serving.
        #[arg(long, allow_negative_numbers = true)]
        carbs: f64,

        /// Grams of fat per serving.
        #[arg(long, allow_negative_numbers = true)]
        fat: f64,

        /// Grams per serving (100 when omitted or not positive).
        #[arg(long, allow_negative_numbers = true)]
        serving_size: Option<f64>,

        /// Food category, e.g. "Vegetable" or "Grains".
        #[arg(long, default_value = "")]
        category: String,

        /// Food name.
        #[arg(long, default_value = "")]
        name: String,

        /// Reject negative or non-finite values instead of scoring them.
        #[arg(long)]
        strict: bool,
    },

    /// Compare two or more catalog foods side by side.
    Compare {
        /// Food names.
        #[arg(required = true, num_args = 2..)]
        names: Vec<String>,
    },

    /// Recompute the stored score of every catalog food.
    Rescore {
        /// Report changes without saving.
        #[arg(long)]
        dry_run: bool,

        /// Save without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// Export every food's score breakdown to CSV.
    Export {
        /// Output CSV path.
        #[arg(long, default_value = "food_scores.csv")]
        csv: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            ascending: false,
            category: None,
            limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_list() {
        let cli = Cli::try_parse_from(["food_score"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::List { ascending: false, .. }
        ));
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "food_score",
            "score",
            "--protein",
            "30",
            "--carbs",
            "0",
            "--fat",
            "0",
            "--category",
            "Protein",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Score {
                protein,
                serving_size,
                category,
                strict,
                ..
            }) => {
                assert_eq!(protein, 30.0);
                assert!(serving_size.is_none());
                assert_eq!(category, "Protein");
                assert!(!strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_compare_needs_two_names() {
        assert!(Cli::try_parse_from(["food_score", "compare", "Apple"]).is_err());
        assert!(Cli::try_parse_from(["food_score", "compare", "Apple", "Pear"]).is_ok());
    }

    #[test]
    fn test_score_accepts_negative_values() {
        let cli = Cli::try_parse_from([
            "food_score", "score", "--protein", "-5", "--carbs", "10", "--fat", "1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Command::Score { protein, .. }) if protein == -5.0));
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["food_score", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
