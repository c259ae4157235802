use anyhow::Result;
use chrono::{DateTime, Local, Timelike};

use vaktijar::args::{CliAction, ParsedArgs, RunOptions, VakatAction, display_help, display_version_info};
use vaktijar::constants::EXIT_FAILURE;
use vaktijar::logger::Log;
use vaktijar::temporal::TimeOfDay;
use vaktijar::vaktija::{VAKAT_NAMES, Vaktija};
use vaktijar::{api, cache, config::Config};

fn main() {
    let args = ParsedArgs::from_env();

    match args.action {
        CliAction::ShowHelp => display_help(),
        CliAction::ShowVersion => display_version_info(),
        CliAction::ShowHelpDueToError => {
            display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run(opts) => {
            if opts.raw_output {
                Log::set_enabled(false);
            }

            Log::log_version();

            if let Err(e) = run(&opts) {
                // Raw mode suppresses framing, not failures.
                Log::set_enabled(true);
                Log::log_pipe();
                Log::log_error(&format!("{e:#}"));
                Log::log_end();
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}

/// The whole pipeline: load config, obtain the raw document (network or
/// cache), decode it, answer the requested query.
fn run(opts: &RunOptions) -> Result<()> {
    let config = Config::load()?;

    let location = opts.location.as_deref().unwrap_or(config.location());
    vaktijar::config::validate_location(location)?;

    let now = Local::now();
    let json = obtain_document(opts, &config, location, now)?;
    let vaktija = Vaktija::from_json(&json)?;

    let current_time = TimeOfDay::new(now.hour(), now.minute());

    match opts.action {
        VakatAction::Print => {
            if opts.raw_output {
                println!("{json}");
            } else {
                print_vaktija(&vaktija);
            }
        }
        VakatAction::Slot(index) => print_vakat(&vaktija, index, opts.raw_output),
        VakatAction::Next => {
            print_vakat(&vaktija, vaktija.next_vakat(current_time), opts.raw_output)
        }
        VakatAction::Current => {
            print_vakat(&vaktija, vaktija.current_vakat(current_time), opts.raw_output)
        }
    }

    Ok(())
}

/// Fetch or reuse the raw JSON document according to the caching rules:
/// `no_cache` always fetches and never touches disk; otherwise a forced
/// update, a configured `always_update`, or a stale cache file triggers a
/// fetch-and-store, and a fresh file on the current day is reused.
fn obtain_document(
    opts: &RunOptions,
    config: &Config,
    location: &str,
    now: DateTime<Local>,
) -> Result<String> {
    let date = opts.date.as_deref();

    if config.no_cache() {
        return Ok(api::download_vaktija(location, date)?);
    }

    let cache_dir = match &opts.cache_dir {
        Some(dir) => dir.clone(),
        None => config.cache_dir()?,
    };
    let path = cache::cache_path(&cache_dir);

    let refetch =
        opts.force_update || config.always_update() || cache::cache_outdated(&path, now)?;

    if refetch {
        Log::log_decorated(&format!("Fetching vaktija data for location {location}..."));
        let json = api::download_vaktija(location, date)?;
        cache::write_cache(&path, &json)?;
        Ok(json)
    } else {
        Ok(cache::read_cache(&path)?)
    }
}

/// Print the whole schedule: location, date labels, the six slots and the
/// two derived night instants.
fn print_vaktija(vaktija: &Vaktija) {
    Log::log_block_start(&vaktija.location);
    Log::log_indented(&format!(
        "{} / {}",
        vaktija.date_gregorian, vaktija.date_hijri
    ));
    Log::log_pipe();

    for (name, time) in VAKAT_NAMES.iter().zip(&vaktija.vakats) {
        Log::log_decorated(&format!("{name:<14} {time}"));
    }

    Log::log_pipe();
    Log::log_decorated(&format!("{:<14} {}", "Polovina noći", vaktija.midnight()));
    Log::log_decorated(&format!(
        "{:<14} {}",
        "Zadnja trećina",
        vaktija.last_third()
    ));
    Log::log_end();
}

/// Print one prayer slot; raw mode emits just the time for piping.
fn print_vakat(vaktija: &Vaktija, index: usize, raw: bool) {
    let time = vaktija.vakats[index];
    if raw {
        println!("{time}");
    } else {
        Log::log_block_start(&format!("{} {}", VAKAT_NAMES[index], time));
        Log::log_end();
    }
}
