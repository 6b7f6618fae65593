use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dgf::{cipher, CountMarker, LevelPack, ResizeAlignment, Size};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dgf", about = "Inspect and edit Daisy's Garden 2 level packs")]
struct Cli {
    /// Log decoder details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show pack metadata and a per-garden summary.
    Info {
        /// Path to a .dgf file.
        file: PathBuf,
    },
    /// Print the decoded pack as JSON.
    Dump {
        /// Path to a .dgf file.
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Check that the file re-encodes to identical bytes.
    Verify {
        /// Path to a .dgf file.
        file: PathBuf,
    },
    /// Resize one garden and write the result.
    Resize {
        /// Path to a .dgf file.
        file: PathBuf,
        /// Zero-based garden index.
        #[arg(long)]
        garden: usize,
        #[arg(long)]
        width: u16,
        #[arg(long)]
        height: u16,
        /// Corner that stays fixed.
        #[arg(long, value_enum, default_value_t = Align::TopLeft)]
        align: Align,
        /// Output path.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Obfuscate a password the way it is stored in a pack.
    Encrypt { text: String },
    /// Recover a password from its stored hex form.
    Decrypt { hex: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Align {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl From<Align> for ResizeAlignment {
    fn from(align: Align) -> Self {
        match align {
            Align::TopLeft => Self::TopLeft,
            Align::TopRight => Self::TopRight,
            Align::BottomLeft => Self::BottomLeft,
            Align::BottomRight => Self::BottomRight,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_pack(path: &Path) -> Result<LevelPack> {
    LevelPack::open(path).with_context(|| format!("failed to read pack: {}", path.display()))
}

fn cmd_info(path: &Path) -> Result<()> {
    let pack = load_pack(path)?;
    let marker = match pack.header.count_marker {
        CountMarker::Short => "short",
        CountMarker::Legacy => "legacy",
    };
    println!("File: {}", path.display());
    println!(
        "Format: program version {}, {marker} count marker",
        pack.header.program_version
    );
    println!("Author: {}", pack.author_name);
    println!("Comments: {}", pack.comments);
    println!("Music (garden 1): {}", pack.garden_one_music_path);
    println!("Edit password: {:?}", pack.edit_password);
    println!(
        "Play password: {:?} (gardens 1..={})",
        pack.play_password, pack.apply_play_password_until
    );
    println!("Gardens: {}", pack.gardens().len());
    for (i, garden) in pack.gardens().iter().enumerate() {
        let start = match garden.player_start() {
            Some(p) => format!("({}, {})", p.x, p.y),
            None => "none".to_string(),
        };
        println!(
            "  [{i}] {:?}: {}, {}s, {} entities, start {start}, music {}",
            garden.name,
            garden.size(),
            garden.time,
            garden.entities().len(),
            garden.music_path
        );
    }
    Ok(())
}

fn cmd_dump(path: &Path, pretty: bool) -> Result<()> {
    let pack = load_pack(path)?;
    let json = if pretty {
        serde_json::to_string_pretty(&pack)?
    } else {
        serde_json::to_string(&pack)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_verify(path: &Path) -> Result<()> {
    let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let pack = dgf::decode(&data).with_context(|| format!("failed to decode {}", path.display()))?;
    let encoded = dgf::encode(&pack);

    if let Some(offset) = data.iter().zip(&encoded).position(|(a, b)| a != b) {
        bail!(
            "re-encoded bytes differ at offset {offset:#x}: {:#04x} != {:#04x}",
            data[offset],
            encoded[offset]
        );
    }
    if data.len() != encoded.len() {
        bail!(
            "re-encoded length differs: {} bytes, original {} bytes",
            encoded.len(),
            data.len()
        );
    }
    println!("OK: {} gardens, {} bytes", pack.gardens().len(), data.len());
    Ok(())
}

fn cmd_resize(
    path: &Path,
    index: usize,
    size: Size,
    align: ResizeAlignment,
    output: &Path,
) -> Result<()> {
    let mut pack = load_pack(path)?;
    let count = pack.gardens().len();
    let Some(garden) = pack.garden_mut(index) else {
        bail!("garden {index} out of range (pack has {count})");
    };
    let before = garden.size();
    let entities = garden.entities().len();
    garden.resize(size, align);
    let removed = entities - garden.entities().len();

    pack.save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Resized garden {index} from {before} to {size} ({removed} entities removed), wrote {}",
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Command::Info { file } => cmd_info(file),
        Command::Dump { file, pretty } => cmd_dump(file, *pretty),
        Command::Verify { file } => cmd_verify(file),
        Command::Resize {
            file,
            garden,
            width,
            height,
            align,
            output,
        } => cmd_resize(
            file,
            *garden,
            Size::new(*width, *height),
            (*align).into(),
            output,
        ),
        Command::Encrypt { text } => {
            println!("{}", cipher::encode(text));
            Ok(())
        }
        Command::Decrypt { hex } => {
            let plain = cipher::decode(hex).context("not a stored password")?;
            println!("{plain}");
            Ok(())
        }
    }
}
