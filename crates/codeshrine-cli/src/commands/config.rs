use clap::Subcommand;
use codeshrine_core::Settings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active settings as TOML
    Show,
    /// Print the settings file path
    Path,
    /// Write a default settings file
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let settings = Settings::load()?;
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        ConfigAction::Path => {
            println!("{}", Settings::path()?.display());
        }
        ConfigAction::Init => {
            let settings = Settings::default();
            settings.save()?;
            println!("{}", Settings::path()?.display());
        }
    }
    Ok(())
}
