use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::PathBuf;
use strprobe::api::StrprobeApi;
use strprobe::error::{Result, StrprobeError};
use strprobe::filter::FilterParams;
use strprobe::store::fs::FileStore;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(data_dir(&cli)?);
    let mut api = StrprobeApi::new(store);

    match cli.command {
        Commands::Add { value } => {
            let result = api.add(&value)?;
            print::print_messages(&result.messages);
            if let Some(entry) = result.affected_entries.first() {
                print::print_full_entry(entry);
            }
            Ok(())
        }
        Commands::Inspect { value } => {
            let result = api.inspect(&value)?;
            if let Some(props) = &result.properties {
                print::print_properties(props);
            }
            Ok(())
        }
        Commands::Get { id } => {
            let result = api.get(&id)?;
            if let Some(entry) = result.listed_entries.first() {
                print::print_full_entry(entry);
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let result = api.delete(&id)?;
            print::print_messages(&result.messages);
            Ok(())
        }
        Commands::List {
            query,
            palindrome,
            min_length,
            max_length,
            word_count,
            contains,
        } => {
            let result = match query {
                Some(text) => api.query_natural(&text)?,
                None => {
                    let params = FilterParams {
                        is_palindrome: palindrome,
                        min_length,
                        max_length,
                        word_count,
                        contains_character: contains,
                    };
                    api.query(&params)?
                }
            };
            print::print_messages(&result.messages);
            print::print_entries(&result.listed_entries);
            Ok(())
        }
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    let proj_dirs = ProjectDirs::from("com", "strprobe", "strprobe")
        .ok_or_else(|| StrprobeError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
