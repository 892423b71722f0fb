use std::io::{self, BufRead, Write};
use std::sync::Arc;

use futures::executor::block_on;
use map_focus::{
    Coordinate, LogPresenter, MapConfig, MapPresenterPort, MapSession, SearchOutcome,
};

const HELP: &str = "commands:
  type <text>        update the search box
  pick <n|place>     choose suggestion n, or a place by name
  locate             pan to the device position
  click <lat> <lng>  place a marker
  open <n>           show details of marker n
  close              dismiss the detail view
  show               print the current snapshot as JSON
  quit";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Type(String),
    Pick(String),
    Locate,
    Click(Coordinate),
    Open(usize),
    Close,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "type" => Ok(Command::Type(rest.to_string())),
        "pick" if !rest.is_empty() => Ok(Command::Pick(rest.to_string())),
        "locate" => Ok(Command::Locate),
        "click" => {
            let mut parts = rest.split_whitespace().map(str::parse::<f64>);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(Ok(lat)), Some(Ok(lng)), None) => {
                    Ok(Command::Click(Coordinate::new(lat, lng)))
                }
                _ => Err("usage: click <lat> <lng>".to_string()),
            }
        }
        "open" => rest
            .parse::<usize>()
            .ok()
            .filter(|index| *index > 0)
            .map(Command::Open)
            .ok_or_else(|| "usage: open <n>".to_string()),
        "close" => Ok(Command::Close),
        "show" => Ok(Command::Show),
        "help" | "" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command {:?}, try help", other)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MapConfig::from_env();
    let presenter = Arc::new(LogPresenter::new()) as Arc<dyn MapPresenterPort>;
    let session = MapSession::offline(&config, presenter)?;

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let command = match parse_command(&line?) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Type(text) => {
                block_on(session.search().input_changed(text));
                for (index, suggestion) in session.search().suggestions().iter().enumerate() {
                    println!("  {}. {}", index + 1, suggestion.description);
                }
            }
            Command::Pick(choice) => {
                let description = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| session.search().suggestions().get(index).cloned())
                    .map_or(choice, |suggestion| suggestion.description);

                match block_on(session.search().select_suggestion(description)) {
                    SearchOutcome::Moved(camera) => println!("centered on {}", camera.center),
                    SearchOutcome::Failed(err) => println!("search failed: {}", err),
                    SearchOutcome::Superseded => {}
                }
            }
            Command::Locate => {
                if block_on(session.geolocate().locate()).is_none() {
                    println!("position unavailable");
                }
            }
            Command::Click(coordinate) => {
                let id = session.map_click().on_click(coordinate);
                println!("marker {} placed", id);
            }
            Command::Open(n) => match session.snapshot().markers.get(n - 1) {
                Some(marker) => session.activate_marker(marker.id()),
                None => println!("no marker {}", n),
            },
            Command::Close => session.dismiss_detail(),
            Command::Show => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }

        stdout.flush()?;
    }

    Ok(())
}
