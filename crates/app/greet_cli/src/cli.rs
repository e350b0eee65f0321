use clap::{Parser, Subcommand};

/// Print friendly greetings.
#[derive(Parser, Debug)]
#[command(name = "greet", about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Greet one or more people, one line each.
    Hello {
        /// Names to greet. Empty names are allowed.
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,

        /// Greeting language (en, zh). Overrides GREET_LANG.
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Print version information.
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_hello_with_lang() {
        let cli = Cli::try_parse_from(["greet", "hello", "--lang", "zh", "张三", "Alice"]).unwrap();
        match cli.command {
            Commands::Hello { names, lang } => {
                assert_eq!(names, vec!["张三", "Alice"]);
                assert_eq!(lang.as_deref(), Some("zh"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hello_requires_a_name() {
        assert!(Cli::try_parse_from(["greet", "hello"]).is_err());
    }

    #[test]
    fn hello_accepts_empty_name() {
        let cli = Cli::try_parse_from(["greet", "hello", ""]).unwrap();
        assert!(matches!(cli.command, Commands::Hello { ref names, .. } if names == &vec![String::new()]));
    }
}
