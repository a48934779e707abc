use std::process::ExitCode;

use robot_grid::{Coord, GridConfig, RobotGrid};
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: robot_grid [--config <grid.json>] \
                     [demo | safe X Y | total | journey A B X Y | path A B X Y]";

enum Command {
    Demo,
    Safe(Coord),
    Total,
    Journey(Coord, Coord),
    Path(Coord, Coord),
}

fn parse_ints(args: &[String], n: usize) -> Result<Vec<i32>, String> {
    if args.len() != n {
        return Err(format!("expected {n} integers, got {}", args.len()));
    }
    args.iter()
        .map(|a| a.parse::<i32>().map_err(|e| format!("bad integer {a:?}: {e}")))
        .collect()
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Demo);
    };
    match name.as_str() {
        "demo" if rest.is_empty() => Ok(Command::Demo),
        "total" if rest.is_empty() => Ok(Command::Total),
        "safe" => {
            let v = parse_ints(rest, 2)?;
            Ok(Command::Safe(Coord::new(v[0], v[1])))
        }
        "journey" | "path" => {
            let v = parse_ints(rest, 4)?;
            let (start, target) = (Coord::new(v[0], v[1]), Coord::new(v[2], v[3]));
            if name == "journey" {
                Ok(Command::Journey(start, target))
            } else {
                Ok(Command::Path(start, target))
            }
        }
        other => Err(format!("unknown command {other:?}")),
    }
}

fn journey_json(robot: &RobotGrid, start: Coord, target: Coord) -> Value {
    json!({
        "from": start,
        "to": target,
        "steps": robot.shortest_safe_journey(start.x, start.y, target.x, target.y),
    })
}

fn demo(robot: &RobotGrid) -> Value {
    let safe = |x, y| json!({ "cell": Coord::new(x, y), "safe": robot.is_safe(x, y) });
    json!({
        "safety": [safe(3, 4), safe(123, 456)],
        "total_safe_squares": robot.total_safe_squares(),
        "journeys": [
            journey_json(robot, Coord::ORIGIN, Coord::new(2, 2)),
            journey_json(robot, Coord::ORIGIN, Coord::new(1000, 1000)),
            journey_json(robot, Coord::ORIGIN, Coord::ORIGIN),
        ],
    })
}

fn run(robot: &RobotGrid, command: Command) -> Result<Value, robot_grid::SearchError> {
    Ok(match command {
        Command::Demo => demo(robot),
        Command::Safe(c) => json!({ "cell": c, "safe": robot.is_safe(c.x, c.y) }),
        Command::Total => json!({ "total_safe_squares": robot.try_total_safe_squares()? }),
        Command::Journey(start, target) => {
            let steps = robot.try_journey_length(start, target)?;
            json!({ "from": start, "to": target, "steps": steps.map_or(-1, i64::from) })
        }
        Command::Path(start, target) => {
            json!({ "from": start, "to": target, "path": robot.journey_path(start, target) })
        }
    })
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            if i + 1 >= args.len() {
                eprintln!("{USAGE}");
                return ExitCode::from(2);
            }
            let path = args.remove(i + 1);
            args.remove(i);
            match GridConfig::load(&path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Invalid grid config: {e}");
                    return ExitCode::from(2);
                }
            }
        }
        None => GridConfig::default(),
    };

    let command = match parse_command(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let robot = match RobotGrid::from_config(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid grid config: {e}");
            return ExitCode::from(2);
        }
    };
    info!(
        min = config.bounds.min,
        max = config.bounds.max,
        threshold = config.threshold,
        cells = config.bounds.cell_count(),
        "robot grid ready"
    );

    match run(&robot, command) {
        Ok(out) => match serde_json::to_string_pretty(&out) {
            Ok(s) => {
                println!("{s}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to encode output: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Search failed: {e}");
            ExitCode::FAILURE
        }
    }
}
