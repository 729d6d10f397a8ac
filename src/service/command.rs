//! Commands accepted by the terminal front-end

use crate::error::RandomizerError;
use crate::types::PlayerId;

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the roster with selection flags and tiers
    List,
    /// Flip the selection of one or more players
    Toggle(Vec<PlayerId>),
    /// Draw new teams
    Randomize,
    /// Show the current teams
    Teams,
    /// Submit final scores for the current teams
    Score { score1: f64, score2: f64 },
    /// Show matches played this session
    History,
    /// Re-read the roster from its source
    Reload,
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = RandomizerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(RandomizerError::InvalidCommand {
                reason: "empty input".to_string(),
            });
        };
        let args: Vec<&str> = words.collect();

        match keyword.to_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "toggle" | "t" => {
                if args.is_empty() {
                    return Err(RandomizerError::InvalidCommand {
                        reason: "toggle needs at least one player id".to_string(),
                    });
                }
                let ids = args
                    .iter()
                    .map(|arg| {
                        arg.parse::<PlayerId>()
                            .map_err(|_| RandomizerError::InvalidCommand {
                                reason: format!("'{}' is not a player id", arg),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Command::Toggle(ids))
            }
            "randomize" | "r" => Ok(Command::Randomize),
            "teams" => Ok(Command::Teams),
            "score" | "s" => match args.as_slice() {
                [score1, score2] => Ok(Command::Score {
                    score1: parse_score(score1)?,
                    score2: parse_score(score2)?,
                }),
                _ => Err(RandomizerError::InvalidCommand {
                    reason: "score needs two numbers".to_string(),
                }),
            },
            "history" => Ok(Command::History),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(RandomizerError::InvalidCommand {
                reason: format!("unknown command '{}'", other),
            }),
        }
    }
}

fn parse_score(arg: &str) -> Result<f64, RandomizerError> {
    arg.parse().map_err(|_| RandomizerError::InvalidCommand {
        reason: format!("'{}' is not a score", arg),
    })
}

/// Usage text printed by `help`
pub const HELP_TEXT: &str = "\
Commands:
  list                 show the roster
  toggle <id>...       select or unselect players
  randomize            draw new teams from the selected players
  teams                show the current teams
  score <s1> <s2>      submit final scores for team 1 and team 2
  history              show matches played this session
  reload               re-read the roster (clears selection and teams)
  help                 show this text
  quit                 leave";
