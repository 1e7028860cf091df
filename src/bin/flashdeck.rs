//! CLI binary for flashdeck.
//!
//! A thin shim over the library crate that maps CLI flags to `DeckConfig`,
//! parses the input text, and prints the resulting pages.

use anyhow::{Context, Result};
use clap::Parser;
use flashdeck::{layout, parse, DeckConfig, DuplexMode, Side};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Parse a pasted list and print the page model as JSON
  flashdeck list.txt --json

  # Read from stdin
  pbpaste | flashdeck -

  # Check what parsed before printing (review step)
  flashdeck list.txt --parse-only

  # Footer and duplex alignment for a drifting printer
  flashdeck list.txt --subject Biology --lesson "Unit 3" \
      --offset-x-mm 0.5 --offset-y-mm -1.0 --corner-markers --json

  # One-sided printing
  flashdeck list.txt --duplex simplex --json

INPUT FORMATS RECOGNISED (per line):
  1. term - definition        numbered or bulleted, any dash
  term: definition            first colon (clock times are skipped)
  term (v.) definition        vocabulary style, tag discarded
  wrapped definition text     joined onto the entry above it

The JSON output is the geometric page model (slots, origins, offsets);
feed it to your PDF or print renderer of choice.
"#;

/// Turn messy term/definition lists into print-ready 8-up flash-card sheets.
#[derive(Parser, Debug)]
#[command(
    name = "flashdeck",
    version,
    about = "Turn term/definition lists into print-ready 8-up flash-card sheets",
    long_about = "Parse free-form term/definition lists (pasted text, OCR output, PDF \
extractions) into study-card pairs and lay them out on duplex US-Letter sheets with \
mirrored backs, so each card's back lands exactly behind its front.",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Text file with one entry per line, or '-' for stdin.
    input: String,

    /// Write output to this file instead of stdout.
    #[arg(short, long, env = "FLASHDECK_OUTPUT")]
    output: Option<PathBuf>,

    /// Duplex mode: simplex, short-edge, long-edge.
    #[arg(long, env = "FLASHDECK_DUPLEX", value_enum, default_value = "long-edge")]
    duplex: DuplexArg,

    /// Disable back-page column mirroring (long-edge only).
    #[arg(long, env = "FLASHDECK_NO_MIRROR")]
    no_mirror: bool,

    /// Back-page offset X in millimetres (duplex drift correction).
    #[arg(long, env = "FLASHDECK_OFFSET_X_MM", default_value_t = 0.0)]
    offset_x_mm: f32,

    /// Back-page offset Y in millimetres.
    #[arg(long, env = "FLASHDECK_OFFSET_Y_MM", default_value_t = 0.0)]
    offset_y_mm: f32,

    /// Emit sheet-corner alignment markers on every page.
    #[arg(long, env = "FLASHDECK_CORNER_MARKERS")]
    corner_markers: bool,

    /// Footer subject (front of "{subject} • {lesson}").
    #[arg(long, env = "FLASHDECK_SUBJECT", default_value = "")]
    subject: String,

    /// Footer lesson.
    #[arg(long, env = "FLASHDECK_LESSON", default_value = "")]
    lesson: String,

    /// Footer template; {subject}, {lesson}, {index} are substituted.
    #[arg(long, env = "FLASHDECK_FOOTER", default_value = "{subject} • {lesson}")]
    footer: String,

    /// Keep entries whose definition is blank.
    #[arg(long, env = "FLASHDECK_ALLOW_BLANK")]
    allow_blank: bool,

    /// Output the page model as structured JSON.
    #[arg(long, env = "FLASHDECK_JSON")]
    json: bool,

    /// Stop after parsing and print the term/definition table.
    #[arg(long)]
    parse_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "FLASHDECK_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the requested result.
    #[arg(short, long, env = "FLASHDECK_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum DuplexArg {
    Simplex,
    ShortEdge,
    LongEdge,
}

impl From<DuplexArg> for DuplexMode {
    fn from(v: DuplexArg) -> Self {
        match v {
            DuplexArg::Simplex => DuplexMode::Simplex,
            DuplexArg::ShortEdge => DuplexMode::ShortEdge,
            DuplexArg::LongEdge => DuplexMode::LongEdge,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // ── Read input ───────────────────────────────────────────────────────
    let raw_text = if cli.input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.input)
            .with_context(|| format!("Failed to read input file '{}'", cli.input))?
    };

    // ── Build config ─────────────────────────────────────────────────────
    let config = DeckConfig::builder()
        .duplex_mode(cli.duplex.clone().into())
        .mirrored_backs(!cli.no_mirror)
        .back_offset_mm(cli.offset_x_mm, cli.offset_y_mm)
        .corner_markers(cli.corner_markers)
        .footer_template(cli.footer.clone())
        .subject(cli.subject.clone())
        .lesson(cli.lesson.clone())
        .allow_blank_definition(cli.allow_blank)
        .build()
        .context("Invalid configuration")?;

    // ── Parse ────────────────────────────────────────────────────────────
    let deck = parse(&raw_text, &config).context("Could not parse the input into cards")?;

    for orphan in &deck.orphans {
        eprintln!(
            "warning: line {} could not be attached to any entry: {:?}",
            orphan.line, orphan.text
        );
    }

    if cli.parse_only {
        let rendered = if cli.json {
            serde_json::to_string_pretty(&deck).context("Failed to serialise deck")? + "\n"
        } else {
            let mut table = String::new();
            for (i, entry) in deck.entries.iter().enumerate() {
                table.push_str(&format!("{:>3}. {}  —  {}\n", i + 1, entry.term, entry.definition));
            }
            table
        };
        write_output(cli.output.as_deref(), &rendered)?;
        if !cli.quiet {
            eprintln!(
                "{} entr{} parsed from {} line(s), {} orphan(s)",
                deck.entries.len(),
                if deck.entries.len() == 1 { "y" } else { "ies" },
                deck.lines_seen,
                deck.orphans.len()
            );
        }
        return Ok(());
    }

    // ── Layout ───────────────────────────────────────────────────────────
    let pages = layout(&deck.entries, &config);

    let rendered = if cli.json {
        serde_json::to_string_pretty(&pages).context("Failed to serialise pages")? + "\n"
    } else {
        let mut summary = String::new();
        for page in &pages {
            let filled = page.slots.iter().filter(|s| s.entry.is_some()).count();
            let side = match page.side {
                Side::Front => "front",
                Side::Back => "back ",
            };
            summary.push_str(&format!(
                "page {:>2}  sheet {:>2}  {side}  {filled}/8 cards\n",
                page.index + 1,
                page.sheet + 1,
            ));
        }
        summary
    };
    write_output(cli.output.as_deref(), &rendered)?;

    if !cli.quiet {
        let sheets = pages.iter().map(|p| p.sheet + 1).max().unwrap_or(0);
        eprintln!(
            "{} cards on {} sheet(s) ({} pages)",
            deck.entries.len(),
            sheets,
            pages.len()
        );
    }

    Ok(())
}

/// Write to the output file, or stdout when none was given.
fn write_output(path: Option<&std::path::Path>, text: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, text)
            .with_context(|| format!("Failed to write output file '{}'", p.display())),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            Ok(())
        }
    }
}
