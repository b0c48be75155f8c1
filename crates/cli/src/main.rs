mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hueforge_engine::{Color, ColorFormat, HarmonyType, format_color_value, generate_harmony, random_color};
use hueforge_tui::{DEFAULT_COLORS, GeneratorConfig, MAX_COLORS, MIN_COLORS};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::report::{ColorReport, PaletteReport};

/// Generate harmonious color palettes in the terminal.
///
/// Without a subcommand the interactive generator starts.
#[derive(Parser, Debug)]
#[command(name = "hueforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    palette: PaletteArgs,

    /// Color theme for the interactive UI (dracula, nord)
    #[arg(long, global = true, env = "HUEFORGE_THEME")]
    theme: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct PaletteArgs {
    /// Base color as #rrggbb; random when omitted
    #[arg(long, global = true, env = "HUEFORGE_BASE")]
    base: Option<String>,

    /// Harmony rule used to derive the palette
    #[arg(long, global = true, env = "HUEFORGE_HARMONY", default_value_t = HarmonyType::default())]
    harmony: HarmonyType,

    /// Number of colors in the palette
    #[arg(
        long,
        global = true,
        env = "HUEFORGE_COUNT",
        default_value_t = DEFAULT_COLORS as u8,
        value_parser = clap::value_parser!(u8).range(MIN_COLORS as i64..=MAX_COLORS as i64)
    )]
    count: u8,

    /// Output format for color values
    #[arg(long, global = true, env = "HUEFORGE_FORMAT", default_value_t = ColorFormat::default())]
    format: ColorFormat,

    /// Seed for reproducible random colors
    #[arg(long, global = true, env = "HUEFORGE_SEED")]
    seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a palette, one value per line
    Generate {
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Show a color in every format with its light/dark classification
    Convert {
        /// Color as #rrggbb or rrggbb
        hex: String,
        #[arg(long)]
        json: bool,
    },
    /// Print one random color
    Random {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        init_tracing(None);
        let config = generator_config(&cli.palette, cli.theme)?;
        return hueforge_tui::run(config).await;
    };

    init_tracing(Some("info"));
    let output = run_command(command, &cli.palette)?;
    println!("{output}");
    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise `default_level`
/// applies, and `None` leaves logging off.
fn init_tracing(default_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.unwrap_or("off")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_base(base: Option<&str>) -> Result<Option<Color>> {
    base.map(|hex| Color::from_hex(hex).with_context(|| format!("--base expects #rrggbb, got '{hex}'")))
        .transpose()
}

fn generator_config(args: &PaletteArgs, theme: Option<String>) -> Result<GeneratorConfig> {
    let base = parse_base(args.base.as_deref())?;
    Ok(GeneratorConfig {
        base: base.map(|color| color.hex().to_string()),
        harmony: args.harmony,
        count: usize::from(args.count),
        format: args.format,
        seed: args.seed,
        theme,
    })
}

fn run_command(command: Command, args: &PaletteArgs) -> Result<String> {
    let mut rng = GeneratorConfig {
        seed: args.seed,
        ..GeneratorConfig::default()
    }
    .rng();
    match command {
        Command::Generate { json } => {
            let base = match parse_base(args.base.as_deref())? {
                Some(color) => color,
                None => random_color(&mut rng),
            };
            let palette = generate_harmony(&base, args.harmony, usize::from(args.count), &mut rng);
            info!(base = base.hex(), harmony = %args.harmony, count = palette.len(), "generated palette");
            if json {
                report::to_json(&PaletteReport::new(&palette, args.harmony, args.format))
            } else {
                Ok(report::palette_text(&palette, args.format))
            }
        }
        Command::Convert { hex, json } => {
            let color = Color::from_hex(&hex).with_context(|| format!("cannot convert '{hex}'"))?;
            debug!(hex = color.hex(), "converting color");
            if json {
                report::to_json(&ColorReport::new(&color, args.format))
            } else {
                Ok(report::conversion_text(&color))
            }
        }
        Command::Random { json } => {
            let color = random_color(&mut rng);
            if json {
                report::to_json(&ColorReport::new(&color, args.format))
            } else {
                Ok(format_color_value(&color, args.format))
            }
        }
    }
}
