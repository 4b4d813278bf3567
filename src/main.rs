use std::time::{SystemTime, UNIX_EPOCH};

use ansi_term::Style;
use color_eyre::eyre::{eyre, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use structopt::StructOpt;

use asciitab::colors::{CYAN, RED, WHITE, YELLOW};
use asciitab::{InstrumentKind, Mode, RandomTabOptions, RenderOptions, TabRequest, DEFAULT_SPAN};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "asciitab",
    about = "Create ASCII tabs for guitar and ukulele for use in practice or inspiration."
)]
enum TabCommand {
    #[structopt(name = "random", about = "Random chords in a scale.")]
    Random {
        #[structopt(flatten)]
        common: CommonOptions,

        #[structopt(
            short = "m",
            long = "measures",
            help = "Number of measures.",
            default_value = "4"
        )]
        measures: usize,

        #[structopt(
            short = "c",
            long = "chords",
            help = "Chords per measure.",
            default_value = "4"
        )]
        chords: usize,
    },

    #[structopt(name = "scale", about = "Walk a scale up every string.")]
    Scale {
        #[structopt(flatten)]
        common: CommonOptions,

        #[structopt(
            long = "span",
            help = "Frets above the root to cover on each string.",
            default_value = "4"
        )]
        span: u32,
    },
}

#[derive(Debug, StructOpt)]
struct CommonOptions {
    #[structopt(
        short = "k",
        long = "key",
        help = "Root note, e.g. `A`, `C#` or `Bb`. Random if not specified."
    )]
    key: Option<String>,

    #[structopt(
        short = "s",
        long = "scale",
        help = "Scale pattern, `major` or `minor`. Random if not specified."
    )]
    scale: Option<String>,

    #[structopt(
        short = "i",
        long = "instrument",
        help = "Instrument to write for, `guitar` or `ukulele`.",
        default_value = "guitar"
    )]
    instrument: InstrumentKind,

    #[structopt(
        long = "seed",
        help = "Random seed. Falls back to `ASCIITAB_SEED`, then the current time."
    )]
    seed: Option<u64>,

    #[structopt(short = "l", long = "labels", help = "Label each line with its string.")]
    labels: bool,
}

fn main() {
    let command = TabCommand::from_args();

    if let Err(err) = run_command(command) {
        eprintln!("{}", err);
        log(*RED, "error:", "Command failed.");
        std::process::exit(1)
    }
}

fn log(color: Style, prefix: &str, message: &str) {
    eprintln!("{} {}", color.paint(prefix), WHITE.paint(message));
}

fn run_command(command: TabCommand) -> Result<()> {
    let (common, mode, heading) = match command {
        TabCommand::Random {
            common,
            measures,
            chords,
        } => {
            let options = RandomTabOptions {
                measures,
                chords_per_measure: chords,
            };
            (common, Mode::Random(options), "Random tab in")
        }

        TabCommand::Scale { common, span } => {
            if span == 0 {
                log(*YELLOW, "warning:", "A span of 0 only plays the root.");
            }
            (common, Mode::Scale { span }, "Basic scale in")
        }
    };

    let seed = resolve_seed(common.seed)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let request = TabRequest {
        root: common.key,
        pattern: common.scale,
        instrument: common.instrument,
        mode,
    };

    log(*CYAN, "Generating", &format!("with seed {} ...", seed));
    let (scale, tab) = asciitab::generate(&request, &mut rng)?;

    let options = RenderOptions {
        labels: common.labels,
    };
    let text = tab.to_text(&options)?;

    println!("{} {}", heading, scale);
    print!("{}", text);

    Ok(())
}

fn resolve_seed(seed: Option<u64>) -> Result<u64> {
    if let Some(seed) = seed {
        return Ok(seed);
    }

    if let Some(value) = std::env::var_os("ASCIITAB_SEED") {
        let value = value.to_string_lossy();
        return value
            .trim()
            .parse()
            .map_err(|_| eyre!("`ASCIITAB_SEED` must be a whole number, not `{}`.", value));
    }

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(now.as_secs())
}
