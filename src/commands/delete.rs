use anyhow::Result;
use booking_core::appointment::AppointmentId;
use booking_core::locale::Translator;
use booking_core::storage::Storage;
use booking_core::store::{AppointmentStore, DeleteOutcome};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: Storage>(
    store: &mut AppointmentStore<S>,
    t: &Translator,
    id: AppointmentId,
    yes: bool,
) -> Result<()> {
    let mut prompt_error = None;

    let outcome = store.delete(id, |appt| {
        if yes {
            return true;
        }

        println!("{}", appt.render());
        println!();

        match Confirm::new()
            .with_prompt(t.t("delete.confirm"))
            .default(false)
            .interact()
        {
            Ok(confirmed) => confirmed,
            Err(e) => {
                prompt_error = Some(e);
                false
            }
        }
    })?;

    if let Some(e) = prompt_error {
        return Err(e.into());
    }

    match outcome {
        DeleteOutcome::Removed(appt) => {
            println!("{}", format!("  {}: {}", t.t("delete.deleted"), appt).red());
        }
        DeleteOutcome::Declined => {
            println!("{}", t.t("delete.cancelled").dimmed());
        }
        DeleteOutcome::NotFound => {
            println!("{}", format!("{} {}", t.t("delete.not_found"), id).dimmed());
        }
    }

    Ok(())
}
