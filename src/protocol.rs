//! Line-oriented text protocol for driving a game from another process.
//!
//! The framing follows the Go Text Protocol: each request is an optional
//! numeric id, a command and its arguments; each reply is `=id message` on
//! success or `?id message` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `variant` - Return the board shape ("plane" or "cube")
//! - `clear_board` - Restart from the initial position
//! - `play <coord|index>` - Play for the side to move; replies with the status line
//! - `legal_moves` - List the legal moves for the side to move
//! - `current_player` - Return the side to move, or "none" once finished
//! - `showboard` - Render the board
//! - `score` - Return disc counts
//! - `status` - Return the status line
//!
//! ## Example
//!
//! ```
//! use reversi_cube::geometry::Cube;
//! use reversi_cube::protocol::Session;
//!
//! let mut session = Session::<Cube>::new();
//! let mut out = Vec::new();
//! session.run("1 play D11\nquit\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("\n=1"));
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::constants::ENGINE_NAME;
use crate::game::GameState;
use crate::geometry::Geometry;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "current_player",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "status",
    "variant",
    "version",
];

/// Protocol session state.
pub struct Session<G: Geometry> {
    /// Current game snapshot
    game: GameState<G>,
}

impl<G: Geometry> Default for Session<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Geometry> Session<G> {
    /// Create a session at the starting position.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
        }
    }

    /// The current game snapshot.
    pub fn game(&self) -> &GameState<G> {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "\n{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(name) => {
                    let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "variant" => (true, G::NAME.to_string()),

            "clear_board" => {
                self.game = self.game.restart();
                (true, String::new())
            }

            "play" => {
                let Some(&target) = args.first() else {
                    return (false, "missing argument".to_string());
                };

                // A bare number is a cell index, anything else is board notation.
                let result = match target.parse::<usize>() {
                    Ok(index) => self.game.play(index),
                    Err(_) => match target.parse::<G::Coord>() {
                        Ok(coord) => self.game.play_at(coord),
                        Err(err) => return (false, err.to_string()),
                    },
                };

                match result {
                    Ok(next) => {
                        self.game = next;
                        (true, self.game.message())
                    }
                    Err(err) => {
                        debug!(%target, %err, "play rejected");
                        (false, err.to_string())
                    }
                }
            }

            "legal_moves" => {
                let moves: Vec<String> = self
                    .game
                    .legal_moves()
                    .iter()
                    .map(|m| m.coord.to_string())
                    .collect();
                (true, moves.join(" "))
            }

            "current_player" => {
                if self.game.is_game_over() {
                    (true, "none".to_string())
                } else {
                    (true, self.game.current_player().to_string())
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "score" => {
                let score = self.game.score();
                (
                    true,
                    format!(
                        "black {} white {} empty {}",
                        score.black, score.white, score.empty
                    ),
                )
            }

            "status" => (true, self.game.message()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
