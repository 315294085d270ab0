use anyhow::Result;
use booking_core::locale::Translator;
use booking_core::storage::Storage;
use booking_core::store::AppointmentStore;
use booking_core::view::{self, ViewMode};

use crate::render;

pub fn run<S: Storage>(
    store: &AppointmentStore<S>,
    t: &Translator,
    search: &str,
    mode: ViewMode,
) -> Result<()> {
    let filtered = view::filter(store.appointments(), search);
    tracing::debug!(total = store.len(), shown = filtered.len(), %mode, "rendering appointments");

    let output = match mode {
        ViewMode::List => render::render_list(&filtered, t),
        ViewMode::Calendar => render::render_calendar(&view::group_by_day(&filtered), t),
    };

    println!("{}\n", render::render_header(mode, t));
    println!("{}", output);
    Ok(())
}
