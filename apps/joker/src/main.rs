use std::io::{self, Write};

use joker::config::RunConfig;
use joker::console::{Console, ConsoleAgent, ConsoleNamePrompt};
use joker::domain::GameConfig;
use joker::game_flow::{
    validate_names, AgentError, Game, GameError, NamePrompt, PlayerAgent,
};
use joker::logging::init_tracing;
use joker::scoreboard::JsonScoreFile;
use tracing::{error, info};

const WELCOME: &str = "Welcome to Joker! Four players, four sets of four hands.";
const INTERRUPTED: &str = "Game interrupted by the user.";
const FAREWELL: &str = "Thank you for playing!";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::load()?;
    init_tracing(config.log_filter.as_deref());
    info!(seed = config.seed, score_file = %config.score_file.display(), "Starting joker");

    // The console agents hold `Rc` handles, so the whole game lives on one
    // blocking thread while this task waits for Ctrl-C.
    let game = tokio::task::spawn_blocking(move || run(config));

    tokio::select! {
        joined = game => match joined? {
            Ok(()) => {}
            Err(GameError::Interrupted) => println!("\n{INTERRUPTED}"),
            Err(err) => {
                error!(error = %err, "Game aborted");
                return Err(err.into());
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\n{INTERRUPTED}");
            println!("{FAREWELL}");
            io::stdout().flush()?;
            // The game thread is still blocked on stdin; do not wait for it.
            std::process::exit(0);
        }
    }

    println!("{FAREWELL}");
    Ok(())
}

fn run(config: RunConfig) -> Result<(), GameError> {
    let rules = GameConfig::standard();
    let console = Console::shared(io::stdin().lock(), io::stdout());
    console.borrow_mut().say(WELCOME).map_err(agent_error)?;

    let names = if config.players.is_empty() {
        ConsoleNamePrompt::new(console.clone())
            .names(rules.players)
            .map_err(agent_error)?
    } else {
        validate_names(&config.players, rules.players)?
    };

    let mut game = Game::new(rules, &names, config.seed)?;
    let agents: Vec<Box<dyn PlayerAgent>> = ConsoleAgent::table(&console, rules.players)
        .into_iter()
        .map(|agent| Box::new(agent) as Box<dyn PlayerAgent>)
        .collect();
    let mut sink = JsonScoreFile::new(&config.score_file);

    let outcome = game.play(agents, &mut sink)?;

    let mut console = console.borrow_mut();
    console.say(sink.table().render()).map_err(agent_error)?;
    console.say(outcome.announcement()).map_err(agent_error)?;
    console
        .say(format!("Scores saved to {}.", sink.path().display()))
        .map_err(agent_error)?;
    Ok(())
}

fn agent_error(err: AgentError) -> GameError {
    match err {
        AgentError::Interrupted => GameError::Interrupted,
        AgentError::Invalid(err) => GameError::Domain(err),
    }
}
