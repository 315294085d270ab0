//! Terminal rendering for appointments.
//!
//! Colors come from owo_colors; every user-facing label goes through the
//! translator.

use std::collections::BTreeMap;

use booking_core::appointment::Appointment;
use booking_core::locale::Translator;
use booking_core::view::ViewMode;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let lines = [
            format!("{} {}", self.name.bold(), format!("#{}", self.id).dimmed()),
            format!("   📞 {}", self.phone),
            format!("   🛠  {}", self.service),
            format!("   📅 {}", format_datetime(self)),
        ];
        lines.join("\n")
    }
}

/// App title and the view switch, with the active view highlighted.
pub fn render_header(mode: ViewMode, t: &Translator) -> String {
    let tab = |tab_mode: ViewMode, key: &str| {
        let label = format!("[{}]", t.t(key));
        if tab_mode == mode {
            label.reversed().to_string()
        } else {
            label.dimmed().to_string()
        }
    };

    format!(
        "{}\n{} {}",
        t.t("app.title").bold(),
        tab(ViewMode::List, "view.list"),
        tab(ViewMode::Calendar, "view.calendar")
    )
}

/// Flat list, one card per appointment.
pub fn render_list(appointments: &[&Appointment], t: &Translator) -> String {
    let mut lines = vec![t.t("list.title").bold().to_string()];

    if appointments.is_empty() {
        lines.push(format!("   {}", t.t("list.empty").dimmed()));
        return lines.join("\n");
    }

    for appt in appointments {
        lines.push(String::new());
        lines.push(appt.render());
    }

    lines.join("\n")
}

/// One block per day, appointments listed by time within it.
pub fn render_calendar(days: &BTreeMap<&str, Vec<&Appointment>>, t: &Translator) -> String {
    let mut lines = vec![t.t("calendar.title").bold().to_string()];

    if days.is_empty() {
        lines.push(format!("   {}", t.t("calendar.empty").dimmed()));
        return lines.join("\n");
    }

    for (day, appointments) in days {
        lines.push(String::new());
        lines.push(format!("📅 {}", day.bold()));

        for appt in appointments {
            lines.push(format!(
                "  {} {} - {} {}",
                format_time(appt),
                appt.name.bold(),
                appt.service,
                format!("#{}", appt.id).dimmed()
            ));
        }
    }

    lines.join("\n")
}

/// Full date and time, or the stored text when it doesn't parse.
fn format_datetime(appt: &Appointment) -> String {
    match appt.datetime() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => appt.date.clone(),
    }
}

/// Time of day (e.g. "15:00"), or whatever follows the day in the stored text.
fn format_time(appt: &Appointment) -> String {
    let time = match appt.datetime() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => appt
            .date
            .split_once('T')
            .map(|(_, rest)| rest.to_string())
            .unwrap_or_default(),
    };
    format!("{:>7}", time)
}
