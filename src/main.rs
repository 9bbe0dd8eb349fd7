#[macro_use]
extern crate cfg_if;

cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        use clap::{Parser, ValueEnum};
        use log::{error, info, LevelFilter, Log, Metadata, Record};
        use neso_mixer::{
            build_pulse_table, build_tnd_table, Format, MixerTables, PulseTable, TndTable,
        };
        use std::fs::File;
        use std::io::{self, BufWriter, Write};
        use std::path::{Path, PathBuf};
        use std::process;

        /// Generate the NES APU mixer lookup tables.
        #[derive(Parser)]
        #[command(name = "neso-mixer", author, version, about, long_about = None)]
        struct Args {
            /// Output format.
            #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
            format: OutputFormat,
            /// File to write the tables to. Defaults to stdout.
            #[arg(short, long)]
            output: Option<PathBuf>,
            /// Log every build step.
            #[arg(short, long, conflicts_with = "quiet")]
            verbose: bool,
            /// Only log errors.
            #[arg(short, long)]
            quiet: bool,
        }

        #[derive(Clone, Copy, ValueEnum)]
        enum OutputFormat {
            Text,
            Rust,
            Bincode,
        }

        impl From<OutputFormat> for Format {
            fn from(format: OutputFormat) -> Self {
                match format {
                    OutputFormat::Text => Format::Text,
                    OutputFormat::Rust => Format::Rust,
                    OutputFormat::Bincode => Format::Bincode,
                }
            }
        }

        struct StderrLogger;

        impl Log for StderrLogger {
            fn enabled(&self, metadata: &Metadata<'_>) -> bool {
                metadata.level() <= log::max_level()
            }

            fn log(&self, record: &Record<'_>) {
                if self.enabled(record.metadata()) {
                    eprintln!("{:<5} {}", record.level(), record.args());
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: StderrLogger = StderrLogger;

        fn run(args: &Args) -> neso_mixer::Result<()> {
            write_tables(
                build_pulse_table(),
                build_tnd_table(),
                Format::from(args.format),
                args.output.as_deref(),
            )
        }

        fn write_tables(
            pulse: PulseTable,
            tnd: TndTable,
            format: Format,
            output: Option<&Path>,
        ) -> neso_mixer::Result<()> {
            let tables = MixerTables::from_tables(pulse, tnd)?;

            match output {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(path)?);
                    neso_mixer::emit(&tables, format, &mut writer)?;
                    info!("[Main] Wrote tables to {}.", path.display());
                },
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    neso_mixer::emit(&tables, format, &mut writer)?;
                    writer.flush()?;
                },
            }

            info!("[Main] Max mixer output: {}.", tables.max_output());
            Ok(())
        }

        fn exit_code(result: &neso_mixer::Result<()>) -> i32 {
            match result {
                Ok(()) => 0,
                Err(err) => {
                    error!("{}", err);
                    1
                },
            }
        }

        pub fn main() {
            let args = Args::parse();

            let level = if args.verbose {
                LevelFilter::Debug
            } else if args.quiet {
                LevelFilter::Error
            } else {
                LevelFilter::Info
            };
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(level);
            }

            let code = exit_code(&run(&args));
            if code != 0 {
                process::exit(code);
            }
        }

    } else {
        pub fn main() {}
    }
}
