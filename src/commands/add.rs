use anyhow::Result;
use booking_core::appointment::{Appointment, AppointmentDraft, Field};
use booking_core::error::BookingError;
use booking_core::locale::Translator;
use booking_core::storage::Storage;
use booking_core::store::AppointmentStore;
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Values given on the command line. `None` fields are prompted for.
#[derive(Debug, Default)]
pub struct Form {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
}

pub fn run<S: Storage>(store: &mut AppointmentStore<S>, t: &Translator, form: Form) -> Result<()> {
    let interactive = form.name.is_none()
        || form.phone.is_none()
        || form.service.is_none()
        || form.date.is_none();

    if interactive {
        println!("{}", t.t("form.title").bold());
    }

    let draft = fill(form, |field| prompt(t, field))?;
    let appt = submit(store, t, &draft)?;

    if interactive {
        println!();
    }
    println!(
        "{} {}",
        format!("  {}: {}", t.t("add.created"), appt).green(),
        format!("#{}", appt.id).dimmed()
    );

    Ok(())
}

/// Complete the form, asking `ask` for every missing field in form order.
pub fn fill<F>(form: Form, mut ask: F) -> Result<AppointmentDraft>
where
    F: FnMut(Field) -> Result<String>,
{
    let mut value = |given: Option<String>, field: Field| match given {
        Some(v) => Ok(v),
        None => ask(field),
    };

    Ok(AppointmentDraft {
        name: value(form.name, Field::Name)?,
        phone: value(form.phone, Field::Phone)?,
        service: value(form.service, Field::Service)?,
        date: value(form.date, Field::Date)?,
    })
}

/// Add the draft to the store, turning a missing field into its localized notice.
pub fn submit<S: Storage>(
    store: &mut AppointmentStore<S>,
    t: &Translator,
    draft: &AppointmentDraft,
) -> Result<Appointment> {
    match store.add(draft) {
        Ok(appt) => Ok(appt.clone()),
        Err(BookingError::MissingField(field)) => anyhow::bail!("{}", t.t(field.required_key())),
        Err(e) => Err(e.into()),
    }
}

fn prompt(t: &Translator, field: Field) -> Result<String> {
    let label = match field {
        Field::Name => "form.name",
        Field::Phone => "form.phone",
        Field::Service => "form.service",
        Field::Date => "form.date",
    };

    let input: String = Input::new()
        .with_prompt(format!("  {}", t.t(label)))
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}
