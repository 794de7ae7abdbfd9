use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexa::{timed, Edge, Hexagon, HexagonConfig, Orientation, Vector2};
use log::{debug, info, LevelFilter};
use serde_json::json;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for running geometry queries against a single hexagon.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexa")]
struct Opt {
    /// Path to a config file that defines the hexagon. Supported formats:
    /// JSON, TOML. Any flags given below override values from the file.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Distance from the center of the hexagon to each vertex
    #[structopt(short, long)]
    size: Option<f64>,

    /// Use a flat-top hexagon
    #[structopt(long, conflicts_with = "pointy")]
    flat: bool,

    /// Use a pointy-top hexagon. This is the default, so you only need this
    /// to override a config file.
    #[structopt(long)]
    pointy: bool,

    /// How to print results. Supported formats: text, json
    #[structopt(short = "f", long, default_value = "text")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the hexagon's vertices (counter-clockwise) and bounding box
    Vertices,

    /// Check whether each point is inside the hexagon, and which wedge it
    /// falls in. Points are given as `x,y` in the hexagon's local frame.
    Query {
        #[structopt(required = true, allow_hyphen_values = true)]
        points: Vec<Point>,
    },

    /// Print the vector along the edge with the given label, e.g.
    /// `north_east`. Zero if the hexagon doesn't have that edge.
    Edge { orientation: Orientation },
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    /// One human-readable line per result
    Text,
    /// A single JSON document
    Json,
}

/// A query point parsed from `x,y`
#[derive(Copy, Clone, Debug)]
struct Point(Vector2);

impl FromStr for Point {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected point as x,y but got {:?}", s))?;
        let x = x
            .trim()
            .parse()
            .with_context(|| format!("invalid x in {:?}", s))?;
        let y = y
            .trim()
            .parse()
            .with_context(|| format!("invalid y in {:?}", s))?;
        Ok(Self(Vector2::new(x, y)))
    }
}

/// Build the hexagon config from the config file (if any), then apply flag
/// overrides on top. The result is validated when the hexagon is built.
fn load_config(opt: &Opt) -> anyhow::Result<HexagonConfig> {
    let mut settings = Config::new();
    if let Some(config_path) = &opt.config {
        settings
            .merge(File::with_name(path_str(config_path)?))
            .context("error reading config file")?;
    }
    if let Some(size) = opt.size {
        settings.set("size", size)?;
    }
    if opt.flat || opt.pointy {
        settings.set("flat", opt.flat)?;
    }
    settings.try_into().context("error reading config")
}

fn path_str(path: &Path) -> anyhow::Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow!("invalid character in path {:?}", path))
}

fn print_vertices(hexagon: &Hexagon, format: OutputFormat) {
    let rect = hexagon.rect();
    match format {
        OutputFormat::Text => {
            for vertex in hexagon.vertices() {
                println!("{}", vertex);
            }
            println!("rect: {} ({} x {})", rect, rect.width(), rect.height());
        }
        OutputFormat::Json => {
            let output = json!({
                "hexagon": hexagon,
                "vertices": hexagon.vertices(),
                "rect": rect,
            });
            println!("{}", output);
        }
    }
}

/// Everything we know about one query point
#[derive(Copy, Clone, Debug)]
struct QueryResult {
    point: Vector2,
    contains: bool,
    orientation: Orientation,
    edge: Edge,
    /// The wedge under the point, if the point is on the hexagon. This is what
    /// a cursor hover would highlight.
    hovered: Option<Orientation>,
}

impl QueryResult {
    fn new(hexagon: &Hexagon, point: Vector2) -> Self {
        let (orientation, edge) = hexagon.classify(point);
        Self {
            point,
            contains: hexagon.contains(point),
            orientation,
            edge,
            hovered: hexagon.wedge_at(point).map(|(hovered, _)| hovered),
        }
    }

    fn to_text(&self) -> String {
        let place = if self.contains { "inside" } else { "outside" };
        let hovered = match self.hovered {
            Some(hovered) => hovered.to_string(),
            None => "-".into(),
        };
        format!(
            "{} {} {} [{}] hovered: {}",
            self.point, place, self.orientation, self.edge, hovered
        )
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "point": self.point,
            "contains": self.contains,
            "orientation": self.orientation,
            "edge": self.edge,
            "hovered": self.hovered,
        })
    }
}

fn print_queries(hexagon: &Hexagon, points: &[Point], format: OutputFormat) {
    let results = timed!(format!("{} queries", points.len()), {
        points
            .iter()
            .map(|Point(point)| QueryResult::new(hexagon, *point))
            .collect::<Vec<_>>()
    });

    match format {
        OutputFormat::Text => {
            for result in &results {
                println!("{}", result.to_text());
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> =
                results.iter().map(QueryResult::to_json).collect();
            println!("{}", json!(output));
        }
    }
}

fn print_edge(
    hexagon: &Hexagon,
    orientation: Orientation,
    format: OutputFormat,
) {
    let vector = hexagon.edge_vector(orientation);
    match format {
        OutputFormat::Text => println!("{}", vector),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "orientation": orientation,
                "edge": hexagon.edge(orientation),
                "vector": vector,
            })
        ),
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = load_config(&opt)?;
    debug!("Loaded config {:?}", config);
    let hexagon = Hexagon::from_config(config)?;
    info!("Using {}", hexagon);

    match &opt.command {
        Command::Vertices => print_vertices(&hexagon, opt.format),
        Command::Query { points } => {
            print_queries(&hexagon, points, opt.format)
        }
        Command::Edge { orientation } => {
            if *orientation == Orientation::Invalid {
                bail!("{} is not an edge label", orientation);
            }
            print_edge(&hexagon, *orientation, opt.format)
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let Point(point) = "0.5,-1".parse().unwrap();
        assert_eq!(point, Vector2::new(0.5, -1.0));
        let Point(point) = " 2 , 3.25 ".parse().unwrap();
        assert_eq!(point, Vector2::new(2.0, 3.25));
        assert!("0.5".parse::<Point>().is_err());
        assert!("a,1".parse::<Point>().is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let opt =
            Opt::from_iter(&["hexa", "--size", "2", "--flat", "vertices"]);
        let config = load_config(&opt).unwrap();
        assert_eq!(
            config,
            HexagonConfig {
                size: 2.0,
                flat: true
            }
        );

        let opt = Opt::from_iter(&["hexa", "vertices"]);
        assert_eq!(load_config(&opt).unwrap(), HexagonConfig::default());
    }

    #[test]
    fn test_query_hovered() {
        let hexagon = Hexagon::new(1.0, false).unwrap();

        let inside = QueryResult::new(&hexagon, Vector2::new(0.3, 0.5));
        assert!(inside.contains);
        assert_eq!(inside.orientation, Orientation::NorthEast);
        assert_eq!(inside.hovered, Some(Orientation::NorthEast));
        assert!(inside.to_text().ends_with("hovered: north_east"));
        assert_eq!(inside.to_json()["hovered"], json!("north_east"));

        // Same wedge, but off the hexagon
        let outside = QueryResult::new(&hexagon, Vector2::new(0.45, 0.8));
        assert!(!outside.contains);
        assert_eq!(outside.orientation, Orientation::NorthEast);
        assert_eq!(outside.hovered, None);
        assert!(outside.to_text().ends_with("hovered: -"));
        assert_eq!(outside.to_json()["hovered"], serde_json::Value::Null);
    }

    #[test]
    fn test_negative_query_points() {
        let opt = Opt::from_iter(&["hexa", "query", "-0.5,0.25", "1,-1"]);
        match opt.command {
            Command::Query { points } => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[0].0, Vector2::new(-0.5, 0.25));
            }
            command => panic!("unexpected command {:?}", command),
        }
    }
}
