use anyhow::Result;
use booking_core::locale::{self, Translator};
use booking_core::storage::Storage;
use owo_colors::OwoColorize;

pub fn run<S: Storage>(storage: &mut S, t: &Translator, code: Option<&str>) -> Result<()> {
    let Some(code) = code else {
        println!("{}: {}", t.t("lang.active").bold(), t.code());
        println!(
            "{}",
            format!("{}: {}", t.t("lang.available"), locale::supported_locales().join(", ")).dimmed()
        );
        return Ok(());
    };

    locale::save_locale(storage, code)?;

    let t = Translator::new(code);
    println!("{}", format!("  {} {}", t.t("lang.saved"), t.code()).green());

    Ok(())
}
