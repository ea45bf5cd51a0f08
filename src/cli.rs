//! Command-line arguments for the `freshdesk` binary.

use clap::{Parser, Subcommand};

/// Query a Freshdesk helpdesk from the terminal.
///
/// Reads `FRESHDESK_DOMAIN` and `FRESHDESK_API_KEY` from the environment
/// or a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "freshdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, one per listing.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every ticket
    Tickets,

    /// List every company
    Companies,

    /// List every contact
    Contacts,

    /// List every agent group
    Groups,

    /// Show the agent that owns the API key
    Me,

    /// Search tickets with a Freshdesk query expression
    Search {
        /// Expression such as "status:2 AND priority:4"
        expression: String,
    },

    /// List the conversations on a ticket
    Conversations {
        /// Ticket id
        ticket_id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("freshdesk").chain(args.iter().copied()))
    }

    #[test]
    fn test_parses_plain_subcommands() {
        assert_eq!(parse(&["tickets"]).unwrap().command, Command::Tickets);
        assert_eq!(parse(&["me"]).unwrap().command, Command::Me);
    }

    #[test]
    fn test_parses_positional_arguments() {
        assert_eq!(
            parse(&["search", "status:2 AND priority:4"]).unwrap().command,
            Command::Search {
                expression: "status:2 AND priority:4".to_string()
            }
        );
        assert_eq!(
            parse(&["conversations", "42"]).unwrap().command,
            Command::Conversations { ticket_id: 42 }
        );
    }

    #[test]
    fn test_rejects_bad_input_before_any_setup() {
        let err = parse(&["bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);

        let err = parse(&["conversations"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["conversations", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
