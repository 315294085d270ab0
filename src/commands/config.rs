use anyhow::Result;
use booking_core::config::BookingConfig;
use booking_core::locale::Translator;
use booking_core::storage::APPOINTMENTS_KEY;
use owo_colors::OwoColorize;

pub fn run(config: &BookingConfig, t: &Translator) -> Result<()> {
    let config_path = BookingConfig::config_path()?;
    let storage = config.storage();

    println!("{}", "Paths".bold());
    println!("  Config:        {}", config_path.display());
    println!("  Appointments:  {}", storage.entry_path(APPOINTMENTS_KEY).display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Locale:        {}", settings_locale(t));
    println!("  Default view:  {}", config.default_view);

    Ok(())
}

/// The locale in effect, which may come from `booking lang` rather than the config file.
fn settings_locale(t: &Translator) -> &str {
    t.code()
}
