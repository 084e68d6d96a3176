use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use lunario_calendar::{AlignmentRecord, YearDocument, sanitize_year};
use lunario_search::AlignmentFrame;

#[derive(Parser)]
#[command(name = "lunario", about = "Moon phase and Moon-planet alignment calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FrameArg {
    /// Earth-center view (astrological)
    Geo,
    /// View from Montevideo (visual)
    Topo,
}

impl FrameArg {
    fn frame(self) -> AlignmentFrame {
        match self {
            Self::Geo => AlignmentFrame::Geocentric,
            Self::Topo => AlignmentFrame::Topocentric,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show moon phases and visible alignments for a year
    Show {
        /// Target year (invalid input falls back to 2026)
        year: String,
        /// Directory holding generated data_YYYY.json documents
        #[arg(long)]
        data_dir: PathBuf,
        /// Display frame
        #[arg(long, value_enum, default_value = "geo")]
        frame: FrameArg,
        /// Include alignments wider than the 1 degree display limit
        #[arg(long)]
        all: bool,
    },
    /// List only the moon phases for a year
    Phases {
        /// Target year (invalid input falls back to 2026)
        year: String,
        /// Directory holding generated data_YYYY.json documents
        #[arg(long)]
        data_dir: PathBuf,
    },
    /// Validate a year document and print a summary
    Check {
        /// Path to a data_YYYY.json document
        path: PathBuf,
    },
}

fn load_document(dir: &Path, year: i32) -> YearDocument {
    let path = dir.join(YearDocument::file_name(year));
    YearDocument::load(&path).unwrap_or_else(|e| {
        eprintln!("Failed to load {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn phase_name_es(phase: &str) -> &str {
    match phase {
        "New Moon" => "Luna Nueva",
        "First Quarter" => "Cuarto Creciente",
        "Full Moon" => "Luna Llena",
        "Last Quarter" => "Cuarto Menguante",
        other => other,
    }
}

fn planet_name_es(planet: &str) -> &str {
    match planet {
        "Mercury" => "Mercurio",
        "Venus" => "Venus",
        "Mars" => "Marte",
        "Jupiter" => "Júpiter",
        "Saturn" => "Saturno",
        other => other,
    }
}

fn print_alignment(record: &AlignmentRecord, frame: AlignmentFrame) {
    let value = match frame {
        AlignmentFrame::Geocentric => {
            // Sub-hundredth differences read as exact conjunctions.
            let diff = if record.longitude_diff < 0.01 {
                0.0
            } else {
                record.longitude_diff
            };
            format!("dif. longitud {diff}°")
        }
        AlignmentFrame::Topocentric => format!("separación {}°", record.degrees),
    };
    println!(
        "  {} {}  Luna y {:<8} ({value})",
        record.date,
        record.time,
        planet_name_es(&record.planet)
    );
}

fn show(doc: &YearDocument, year: i32, frame: AlignmentFrame, all: bool) {
    let frame_label = match frame {
        AlignmentFrame::Geocentric => "Centro de la Tierra (Astrológico)",
        AlignmentFrame::Topocentric => "Vista desde Montevideo (Visual)",
    };
    println!("Calendario Mágico {year} ({frame_label})");
    println!();

    println!("Fases lunares ({}):", doc.moon_phases.len());
    for phase in &doc.moon_phases {
        println!(
            "  {} {}  {}",
            phase.date,
            phase.time,
            phase_name_es(&phase.phase)
        );
    }
    println!();

    let alignments: Vec<&AlignmentRecord> = if all {
        match frame {
            AlignmentFrame::Geocentric => doc.alignments.geocentric.iter().collect(),
            AlignmentFrame::Topocentric => doc.alignments.topocentric.iter().collect(),
        }
    } else {
        doc.alignments.displayed(frame)
    };

    if alignments.is_empty() {
        println!("No hay alineaciones visibles con < 1° de diferencia.");
        return;
    }

    println!("Alineaciones ({}):", alignments.len());
    for record in alignments {
        print_alignment(record, frame);
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            year,
            data_dir,
            frame,
            all,
        } => {
            let year = sanitize_year(&year);
            let doc = load_document(&data_dir, year);
            info!("showing {year} in the {} frame", frame.frame().name());
            show(&doc, year, frame.frame(), all);
        }

        Commands::Phases { year, data_dir } => {
            let year = sanitize_year(&year);
            let doc = load_document(&data_dir, year);
            for phase in &doc.moon_phases {
                println!(
                    "{} {}  {}",
                    phase.date,
                    phase.time,
                    phase_name_es(&phase.phase)
                );
            }
        }

        Commands::Check { path } => {
            let doc = YearDocument::load(&path).unwrap_or_else(|e| {
                eprintln!("Invalid document {}: {e}", path.display());
                std::process::exit(1);
            });
            info!("loaded {}", path.display());
            println!(
                "{}: {} phases, {} geocentric / {} topocentric alignments",
                path.display(),
                doc.moon_phases.len(),
                doc.alignments.geocentric.len(),
                doc.alignments.topocentric.len()
            );
        }
    }
}
