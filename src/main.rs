// src/main.rs v1
//! Terrain Tools - heightmap decoding and slippy-map tile utilities

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use terrain_tools::{
    heightmap::{self, io as heightmap_io},
    tiles::{lat_lon_to_tile, DownloadOutcome, Landmark, TileDownloader, TileReport, UrlOrder},
    GeoCoord, Result, TerrainError, TileCoord, ToolConfig,
};

#[derive(Parser, Debug)]
#[command(name = "terrain-tools", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an RGB-encoded heightmap into a grayscale image
    Decode(DecodeArgs),
    /// Locate a tile, report its geometry and optionally download it
    Tile(TileArgs),
    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,

        /// Replace an existing configuration file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

impl Command {
    /// `config --init` must work even when the current file is unreadable
    fn loads_config(&self) -> bool {
        !matches!(self, Command::Config { init: true, .. })
    }
}

#[derive(Args, Debug)]
struct DecodeArgs {
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    output: PathBuf,

    /// Elevation in meters mapped to white
    #[arg(long)]
    max_elevation: Option<f64>,

    /// Wrap out-of-range intensities instead of saturating
    #[arg(long)]
    no_clamp: bool,
}

#[derive(Args, Debug)]
struct TileArgs {
    #[arg(long)]
    zoom: u8,

    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Use a named location instead of --lat/--lon
    #[arg(long, value_enum, conflicts_with_all = ["lat", "lon"])]
    place: Option<Landmark>,

    #[arg(long, requires = "ytile", conflicts_with_all = ["lat", "lon", "place"])]
    xtile: Option<u32>,

    #[arg(long, requires = "xtile")]
    ytile: Option<u32>,

    /// Pixels along one tile edge
    #[arg(long)]
    pixels: Option<f64>,

    /// Fetch the tile imagery
    #[arg(long)]
    download: bool,

    #[arg(long, value_enum)]
    url_order: Option<UrlOrder>,

    #[arg(long)]
    tiles_dir: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl TileArgs {
    fn resolve_tile(&self) -> Result<TileCoord> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            let coord = GeoCoord::new(lat, lon);
            log::info!("coord = {}", coord);
            return Ok(lat_lon_to_tile(coord, self.zoom));
        }

        if let Some(place) = self.place {
            let coord = place.coord();
            log::info!("{:?} = {}", place, coord);
            return Ok(lat_lon_to_tile(coord, self.zoom));
        }

        if let (Some(x), Some(y)) = (self.xtile, self.ytile) {
            return Ok(TileCoord::new(x, y, self.zoom));
        }

        Err(TerrainError::Config(
            "specify --lat/--lon, --place or --xtile/--ytile".to_string(),
        ))
    }

    fn apply_to(&self, config: &mut ToolConfig) {
        if let Some(pixels) = self.pixels {
            config.pixels_per_tile = pixels;
        }
        if let Some(order) = self.url_order {
            config.url_order = order;
        }
        if let Some(ref dir) = self.tiles_dir {
            config.tiles_dir = dir.clone();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = if cli.command.loads_config() {
        ToolConfig::load()?
    } else {
        ToolConfig::default()
    };

    match cli.command {
        Command::Decode(args) => run_decode(&args, &mut config),
        Command::Tile(args) => run_tile(&args, &mut config),
        Command::Config { init, force } => run_config(init, force, &config),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_decode(args: &DecodeArgs, config: &mut ToolConfig) -> Result<()> {
    if let Some(max_elevation) = args.max_elevation {
        config.max_elevation = max_elevation;
    }
    config.validate()?;

    let options = config.decode_options(!args.no_clamp);
    let encoded = heightmap_io::load_rgba(&args.input)?;

    match heightmap::elevation_range(&encoded) {
        Some((min, max)) => log::info!("Elevation range {:.2} m .. {:.2} m", min, max),
        None => log::warn!("{} contains no pixels", args.input.display()),
    }

    let decoded = heightmap::decode_image_with(&encoded, &options);
    heightmap_io::save_image(&decoded, &args.output)?;

    println!(
        "Decoded {}x{} heightmap to {}",
        decoded.width(),
        decoded.height(),
        args.output.display()
    );
    Ok(())
}

fn run_tile(args: &TileArgs, config: &mut ToolConfig) -> Result<()> {
    args.apply_to(config);
    config.validate()?;

    let tile = args.resolve_tile()?;
    let report = TileReport::new(tile, config.pixels_per_tile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if args.download {
        let downloader = TileDownloader::new(config)?;
        match downloader.download(tile)? {
            DownloadOutcome::Downloaded { path, bytes } => {
                println!("Downloaded {} ({} bytes)", path.display(), bytes);
            }
            DownloadOutcome::AlreadyExists { path } => {
                println!("{} already exists", path.display());
            }
        }
    }

    Ok(())
}

fn run_config(init: bool, force: bool, config: &ToolConfig) -> Result<()> {
    let path = ToolConfig::config_path()?;

    if init {
        ToolConfig::write_default_to(&path, force).map_err(|e| match e {
            TerrainError::Config(msg) => {
                TerrainError::Config(format!("{}; pass --force to overwrite", msg))
            }
            other => other,
        })?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
